//! Mapping repository and export outcomes onto HTTP statuses.
//!
//! Handlers fail with `(StatusCode, String)`. Infrastructure errors are
//! logged here and replaced by a generic message; expected outcomes carry a
//! message meant for the operator.

use axum::http::StatusCode;
use customs_core::{models::ValidationError, ports::WriteFailure};
use customs_export::ExportError;
use std::fmt::Display;
use tracing::{Level, event};

pub(crate) type Failure = (StatusCode, String);

/// Log an infrastructure error and answer with a 500 carrying `context`.
pub(crate) fn internal<E: Display>(context: impl Into<String>) -> impl FnOnce(E) -> Failure {
    let context = context.into();
    move |err| {
        event!(Level::ERROR, err = err.to_string(), "{context}");
        (StatusCode::INTERNAL_SERVER_ERROR, context)
    }
}

pub(crate) fn not_found(what: &str, id: impl Display) -> Failure {
    (StatusCode::NOT_FOUND, format!("unknown {what} {id}"))
}

pub(crate) fn invalid(err: ValidationError) -> Failure {
    (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
}

pub(crate) fn refused(what: &str, id: Option<i64>, failure: WriteFailure) -> Failure {
    match failure {
        WriteFailure::DoesNotExist => match id {
            Some(id) => not_found(what, id),
            None => (StatusCode::NOT_FOUND, format!("unknown {what}")),
        },
        WriteFailure::Duplicate(message) | WriteFailure::Referenced(message) => {
            (StatusCode::CONFLICT, message)
        }
        WriteFailure::Rejected(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
    }
}

pub(crate) fn export_failed(err: ExportError) -> Failure {
    match err {
        ExportError::NoGoods(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        err => internal("failed to render declaration")(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failures_map_to_statuses() {
        let status = |failure| refused("country", Some(3), failure).0;
        assert_eq!(status(WriteFailure::DoesNotExist), StatusCode::NOT_FOUND);
        assert_eq!(status(WriteFailure::Duplicate("x".into())), StatusCode::CONFLICT);
        assert_eq!(status(WriteFailure::Referenced("x".into())), StatusCode::CONFLICT);
        assert_eq!(
            status(WriteFailure::Rejected("x".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            refused("country", Some(3), WriteFailure::DoesNotExist).1,
            "unknown country 3"
        );
    }
}
