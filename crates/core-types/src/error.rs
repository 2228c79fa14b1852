use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Invalid timestamp '{0}': expected an RFC 3339 date-time")]
    InvalidTimestamp(String),
}
