use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Form(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    /// Parsed JSON body
    Json(Value),
    Binary(Vec<u8>),
}

impl ResponseBody {
    pub fn json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// The fetch primitive [HttpService](crate::HttpService) is built on
///
/// Implementations send the request as is and hand back whatever the server answered. Non-2xx
/// statuses are *responses*, not errors: only a request that got no response at all should end up
/// in `Err`
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(
        &self, request: http::Request<RequestBody>,
    ) -> Result<http::Response<ResponseBody>, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn fetch(
        &self, request: http::Request<RequestBody>,
    ) -> Result<http::Response<ResponseBody>, TransportError> {
        self.as_ref().fetch(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch(
        &self, request: http::Request<RequestBody>,
    ) -> Result<http::Response<ResponseBody>, TransportError> {
        self.as_ref().fetch(request).await
    }
}
