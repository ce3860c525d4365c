use crate::transport::TransportError;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;
use warren::error::WarrenError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport failed")]
    Transport(#[source] TransportError),
    /// A non-2xx response. `errors` is the `errors` array of the body, empty when there is none
    #[error("Request failed with status {status}")]
    Api { status: StatusCode, errors: Vec<Value> },
    #[error("Response body cannot be normalized")]
    Normalize(#[from] WarrenError),
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid request")]
    InvalidRequest(#[from] http::Error),
    #[error("Invalid header `{0}`")]
    InvalidHeader(String),
    #[error("Unexpected {0} response body")]
    UnexpectedBody(&'static str),
    #[error("Invalid settings")]
    Settings(#[from] config::ConfigError),
    #[error("Unhandled")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self { ClientError::Unhandled(Box::new(err)) }
}
