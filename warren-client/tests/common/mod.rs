#![allow(dead_code)]

use async_trait::async_trait;
use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use warren_client::cookies::MemoryCookieStore;
use warren_client::transport::{RequestBody, ResponseBody, Transport, TransportError};
use warren_client::{ClientApi, ClientSettings};

pub type TestApi = ClientApi<Arc<MockTransport>, Arc<MemoryCookieStore>>;

/// Replays queued responses and keeps every request it was handed
#[derive(Default)]
pub struct MockTransport {
    pub requests: Mutex<Vec<http::Request<RequestBody>>>,
    responses: Mutex<VecDeque<http::Response<ResponseBody>>>,
}

impl MockTransport {
    pub fn new(responses: Vec<http::Response<ResponseBody>>) -> Self {
        Self { requests: Default::default(), responses: Mutex::new(responses.into()) }
    }

    pub fn request_count(&self) -> usize { self.requests.lock().unwrap().len() }

    pub fn header_of(&self, idx: usize, name: &str) -> Option<String> {
        let requests = self.requests.lock().unwrap();
        requests[idx].headers().get(name).map(|v| v.to_str().unwrap().to_string())
    }

    pub fn uri_of(&self, idx: usize) -> String {
        self.requests.lock().unwrap()[idx].uri().to_string()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(
        &self, request: http::Request<RequestBody>,
    ) -> Result<http::Response<ResponseBody>, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::from("connection refused"))
    }
}

pub fn response(
    status: u16, body: ResponseBody, headers: &[(&str, &str)],
) -> http::Response<ResponseBody> {
    let mut resp = http::Response::new(body);
    *resp.status_mut() = StatusCode::from_u16(status).unwrap();
    for (k, v) in headers {
        resp.headers_mut()
            .insert(HeaderName::from_bytes(k.as_bytes()).unwrap(), HeaderValue::from_str(v).unwrap());
    }
    resp
}

pub fn json(status: u16, body: Value) -> http::Response<ResponseBody> {
    response(status, ResponseBody::Json(body), &[])
}

pub fn auth_triple(token: &str) -> Vec<(&'static str, String)> {
    vec![
        ("access-token", token.to_string()),
        ("client", "client-1".to_string()),
        ("uid", "ada@example.com".to_string()),
    ]
}

pub fn init_client(
    config: &str, responses: Vec<http::Response<ResponseBody>>, cookies: MemoryCookieStore,
) -> (TestApi, Arc<MockTransport>, Arc<MemoryCookieStore>) {
    let _ = env_logger::try_init();

    let settings = ClientSettings::from_file(config).unwrap();
    let transport = Arc::new(MockTransport::new(responses));
    let cookies = Arc::new(cookies);
    let api = ClientApi::new(settings, transport.clone(), cookies.clone());
    (api, transport, cookies)
}

pub const DEFAULT_CONFIG: &str = "tests/config/client.config.test.toml";
pub const STRICT_CONFIG: &str = "tests/config/client.config.test.strict.toml";
