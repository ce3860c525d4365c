use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarrenError {
    #[error("Malformed resource at `{pointer}`: a resource object needs an `id` or a `type`")]
    MalformedResource { pointer: String },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Unhandled")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WarrenError {
    pub fn malformed_resource(pointer: impl ToString) -> Self {
        WarrenError::MalformedResource { pointer: pointer.to_string() }
    }
}

from_external_error!(serde_json::Error);
