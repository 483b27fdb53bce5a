use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TerminalErrorType {
    NotFound,
    InvalidUsage,
    UnknownCommand,
    StorageError,
    InternalError,
}

impl Into<warp::http::StatusCode> for TerminalErrorType {
    fn into(self) -> warp::http::StatusCode {
        match self {
            TerminalErrorType::NotFound => warp::http::StatusCode::NOT_FOUND,
            TerminalErrorType::InvalidUsage => warp::http::StatusCode::BAD_REQUEST,
            TerminalErrorType::UnknownCommand => warp::http::StatusCode::BAD_REQUEST,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub(crate) struct TerminalError {
    pub(crate) error_type: TerminalErrorType,
    pub(crate) message: String,
}

impl warp::Reply for TerminalError {
    fn into_response(self) -> warp::reply::Response {
        warp::reply::with_status(warp::reply::json(&self.message), self.error_type.into())
            .into_response()
    }
}

impl TerminalError {
    pub(crate) fn new(error_type: TerminalErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
        }
    }
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.error_type, self.message)
    }
}

impl From<std::io::Error> for TerminalError {
    fn from(error: std::io::Error) -> Self {
        Self {
            error_type: TerminalErrorType::InternalError,
            message: error.to_string(),
        }
    }
}

impl From<sled::Error> for TerminalError {
    fn from(error: sled::Error) -> Self {
        Self {
            error_type: TerminalErrorType::StorageError,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TerminalError {
    fn from(error: serde_json::Error) -> Self {
        Self {
            error_type: TerminalErrorType::StorageError,
            message: error.to_string(),
        }
    }
}

impl Error for TerminalError {}

pub(crate) type Result<T> = std::result::Result<T, TerminalError>;
