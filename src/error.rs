use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolidLabError {
    #[error("note index {index} out of range for {len} notes")]
    OutOfRange { index: usize, len: usize },

    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    InvalidLogLevel(String),

    #[error("logging already initialized with level `{active}`; refusing to switch to `{requested}`")]
    LoggingConflict {
        active: &'static str,
        requested: &'static str,
    },

    #[error("failed to start logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type SolidLabResult<T> = Result<T, SolidLabError>;
