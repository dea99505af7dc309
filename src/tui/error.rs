use thiserror;

/// The Result type for the grid48 terminal host.
pub(crate) type Result<T> = std::result::Result<T, TuiError>;

pub struct TuiError {
    bt: std::backtrace::Backtrace,
    pub(crate) inner: InnerError,
}

impl std::fmt::Debug for TuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0:?}\n{1}", self.inner, self.bt)
    }
}

impl std::fmt::Display for TuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}\n{1}", self.inner, self.bt)
    }
}

impl std::error::Error for TuiError {}

impl From<std::io::Error> for TuiError {
    fn from(inner: std::io::Error) -> TuiError {
        InnerError::StdIOError(inner).into()
    }
}

impl From<log::SetLoggerError> for TuiError {
    fn from(inner: log::SetLoggerError) -> TuiError {
        InnerError::LogError(inner).into()
    }
}

impl From<grid48::error::Error> for TuiError {
    fn from(inner: grid48::error::Error) -> TuiError {
        InnerError::GameError(inner).into()
    }
}

impl From<InnerError> for TuiError {
    fn from(inner: InnerError) -> Self {
        Self {
            bt: std::backtrace::Backtrace::capture(),
            inner,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum InnerError {
    #[error("io error: {0}")]
    StdIOError(#[from] std::io::Error),

    #[error("log error: {0}")]
    LogError(#[from] log::SetLoggerError),

    #[error("invalid game configuration: {0}")]
    GameError(#[from] grid48::error::Error),
}
