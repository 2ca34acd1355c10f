mod catalog;
mod export;
mod line;

pub use catalog::CatalogRepository;
pub use export::ExportRepository;
pub use line::LineRepository;

/// Every storage adapter names the error type its infrastructure produces.
/// Domain outcomes such as "no such row" are reported separately, through
/// [`WriteFailure`] or an `Option`, so that this error always means something
/// went wrong underneath.
pub trait Repository {
    /// Infrastructure failure (connection lost, malformed row, ...)
    type Error: std::error::Error + Send + Sync + 'static;
}

/// Why a write was not applied.
///
/// Writes return `Result<Result<Record, WriteFailure>, Error>`: the outer
/// error is an infrastructure failure, the inner one is an expected outcome
/// the caller reports back to the operator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WriteFailure {
    /// The addressed row does not exist
    #[error("does not exist")]
    DoesNotExist,

    /// A unique column already holds this value
    #[error("duplicate value: {0}")]
    Duplicate(String),

    /// A referenced row is missing, or the row is still referenced elsewhere
    #[error("reference conflict: {0}")]
    Referenced(String),

    /// A column constraint refused the value
    #[error("rejected: {0}")]
    Rejected(String),
}
