use crate::table::{Table, record};
use customs_core::{models::Record, ports::WriteFailure};
use sqlx::{error::ErrorKind, sqlite::SqliteRow};

/// What a write was doing when a constraint fired; a foreign key failure
/// means different things for an insert and for a delete.
#[derive(Clone, Copy)]
pub(crate) enum Operation {
    Write,
    Delete,
}

/// Turn the outcome of a `... returning` statement into the nested result the
/// ports hand out. No row means the addressed row was not there; constraint
/// violations become [`WriteFailure`]s, anything else stays an error.
pub(crate) fn outcome<E: Table>(
    operation: Operation,
    result: Result<Option<SqliteRow>, sqlx::Error>,
) -> Result<Result<Record<E::Id, E>, WriteFailure>, sqlx::Error> {
    let err = match result {
        Ok(Some(row)) => return Ok(Ok(record::<E>(&row)?)),
        Ok(None) => return Ok(Err(WriteFailure::DoesNotExist)),
        Err(sqlx::Error::Database(err)) => err,
        Err(err) => return Err(err),
    };

    let failure = match (err.kind(), operation) {
        (ErrorKind::UniqueViolation, _) => {
            // "UNIQUE constraint failed: country.code"
            let column = err.message().rsplit('.').next().unwrap_or("value");
            WriteFailure::Duplicate(format!("another {} already has this {column}", E::NAME))
        }
        (ErrorKind::ForeignKeyViolation, Operation::Delete) => {
            WriteFailure::Referenced(format!("{} is still in use", E::NAME))
        }
        (ErrorKind::ForeignKeyViolation, Operation::Write) => {
            WriteFailure::Referenced(format!("{} refers to a row that does not exist", E::NAME))
        }
        (ErrorKind::CheckViolation | ErrorKind::NotNullViolation, _) => {
            WriteFailure::Rejected(format!("{}: {}", E::NAME, err.message()))
        }
        _ => return Err(sqlx::Error::Database(err)),
    };

    tracing::debug!(entity = E::NAME, %failure, "write refused");
    Ok(Err(failure))
}
