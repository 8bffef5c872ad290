use thiserror::Error;

/// Every way a sheet lookup can fail. Callers of the row service only ever
/// see `None`; the variant is kept for logging.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("export returned HTTP {0}")]
    Status(u16),

    #[error("export body is empty")]
    EmptyBody,

    #[error("export has fewer than two lines")]
    ShortDocument,

    #[error("malformed csv: {0}")]
    MalformedCsv(String),

    #[error("no row for user key {0:?}")]
    RowNotFound(String),
}

impl From<csv::Error> for SheetError {
    fn from(err: csv::Error) -> Self {
        SheetError::MalformedCsv(err.to_string())
    }
}
