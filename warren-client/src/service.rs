use crate::auth::{AuthHeaders, HTTP_SOURCE, HTTP_SOURCE_VALUE};
use crate::cookies::CookieStore;
use crate::error::ClientError;
use crate::settings::ClientSettings;
use crate::transport::{RequestBody, ResponseBody, Transport};
use crate::ClientResult;
use http::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_DISPOSITION, CONTENT_TYPE};
use http::{HeaderMap, Method};
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use warren::{Formatted, Normalizer, JSON_API_HEADER};

/// Wraps a [Transport] with the session handling of the web app
///
/// Before each request the auth triple is read back from the cookies, after each response the
/// triple the server sent (if complete) is written to the cookies and becomes the default headers.
/// Successful JSON bodies are flattened by the [Normalizer]
pub struct HttpService<T, C> {
    transport: T,
    cookies: C,
    settings: ClientSettings,
    normalizer: Normalizer,
    headers: RwLock<HeaderMap>,
}

impl<T, C> HttpService<T, C>
where
    T: Transport,
    C: CookieStore,
{
    pub fn new(settings: ClientSettings, transport: T, cookies: C) -> Self {
        let normalizer = Normalizer::new(settings.normalizer.clone());
        let headers = RwLock::new(base_headers(settings.has_http_source));
        Self { transport, cookies, settings, normalizer, headers }
    }

    pub fn settings(&self) -> &ClientSettings { &self.settings }

    pub fn cookies(&self) -> &C { &self.cookies }

    /// A snapshot of the headers the next request starts from
    pub fn headers(&self) -> HeaderMap {
        self.headers.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replaces the stored headers with `headers` on top of the defaults (`Accept`, and
    /// `httpsource: web` when enabled)
    ///
    /// Nothing happens when any of the values is empty. Returns whether the headers were replaced
    pub fn set_header<I, K, V>(&self, headers: I) -> ClientResult<bool>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(K, V)> = headers.into_iter().collect();
        if pairs.iter().any(|(_, v)| v.as_ref().is_empty()) {
            return Ok(false);
        }

        let mut next = base_headers(self.settings.has_http_source);
        for (k, v) in &pairs {
            let name = HeaderName::from_bytes(k.as_ref().as_bytes())
                .map_err(|_| ClientError::InvalidHeader(k.as_ref().into()))?;
            let value = HeaderValue::from_str(v.as_ref())
                .map_err(|_| ClientError::InvalidHeader(k.as_ref().into()))?;
            next.insert(name, value);
        }

        *self.headers.write().unwrap_or_else(PoisonError::into_inner) = next;
        Ok(true)
    }

    /// `GET <path>?<params>`
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> ClientResult<Formatted> {
        let response = self
            .send(Method::GET, path, params, RequestBody::Empty, HeaderMap::new(), true)
            .await?;
        self.formatted(response)
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<Formatted> {
        let body = RequestBody::Json(serde_json::to_value(body)?);
        let response = self.send(Method::POST, path, &[], body, HeaderMap::new(), true).await?;
        self.formatted(response)
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<Formatted> {
        let body = RequestBody::Json(serde_json::to_value(body)?);
        let response = self.send(Method::PUT, path, &[], body, HeaderMap::new(), true).await?;
        self.formatted(response)
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Formatted> {
        let response = self
            .send(Method::DELETE, path, &[], RequestBody::Empty, HeaderMap::new(), true)
            .await?;
        self.formatted(response)
    }

    /// `PUT` of an already encoded form body
    pub async fn put_form_data(
        &self, path: &str, form: Vec<u8>, content_disposition: &str,
    ) -> ClientResult<Formatted> {
        let mut extra = HeaderMap::new();
        let value = HeaderValue::from_str(content_disposition)
            .map_err(|_| ClientError::InvalidHeader(CONTENT_DISPOSITION.to_string()))?;
        extra.insert(CONTENT_DISPOSITION, value);

        let response = self.send(Method::PUT, path, &[], RequestBody::Form(form), extra, true).await?;
        self.formatted(response)
    }

    /// `GET` of a binary resource. The stored headers are only sent when `has_header` is set,
    /// `headers` always are
    pub async fn fetch_blob(&self, path: &str, headers: HeaderMap) -> ClientResult<Vec<u8>> {
        let carry_stored = self.settings.has_header;
        let response =
            self.send(Method::GET, path, &[], RequestBody::Empty, headers, carry_stored).await?;
        let status = response.status();
        match response.into_body() {
            body if !status.is_success() => Err(api_error(status, &body)),
            ResponseBody::Binary(bytes) => Ok(bytes),
            ResponseBody::Json(value) => Ok(serde_json::to_vec(&value)?),
            ResponseBody::Empty => Ok(vec![]),
        }
    }

    async fn send(
        &self, method: Method, path: &str, params: &[(&str, &str)], body: RequestBody,
        extra: HeaderMap, carry_stored: bool,
    ) -> ClientResult<http::Response<ResponseBody>> {
        self.on_request()?;

        let mut url = self.settings.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let mut headers = if carry_stored { self.headers() } else { HeaderMap::new() };
        headers.extend(extra);
        if let RequestBody::Json(_) = body {
            headers
                .entry(CONTENT_TYPE)
                .or_insert_with(|| HeaderValue::from_static("application/json"));
        }

        if self.settings.show_ssr_log {
            info!("{} {}", method, url);
        } else {
            debug!("{} {}", method, url);
        }

        let mut request = http::Request::builder().method(method).uri(url.as_str()).body(body)?;
        *request.headers_mut() = headers;

        let response = self.transport.fetch(request).await.map_err(ClientError::Transport)?;
        debug!("{} <- {}", response.status(), url);
        self.on_response(response.headers())?;

        Ok(response)
    }

    /// Restores the auth triple from the cookies
    fn on_request(&self) -> ClientResult<()> {
        let auth = AuthHeaders::from_cookies(&self.cookies);
        if auth.is_complete() {
            self.set_header(auth.pairs())?;
        }
        Ok(())
    }

    /// Picks up a rotated auth triple, whatever the status of the response
    fn on_response(&self, headers: &HeaderMap) -> ClientResult<AuthHeaders> {
        let auth = AuthHeaders::from_headers(headers);
        if auth.is_complete() {
            debug!("Storing rotated auth headers for `{}`", auth.uid);
            auth.store(&self.cookies);
            self.set_header(auth.pairs())?;
        }
        Ok(auth)
    }

    fn formatted(&self, response: http::Response<ResponseBody>) -> ClientResult<Formatted> {
        let status = response.status();
        let body = response.into_body();
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        match body {
            ResponseBody::Json(value) => Ok(self.normalizer.format_response(value)?),
            ResponseBody::Empty => Ok(Formatted::PassThrough(Value::Null)),
            ResponseBody::Binary(_) => Err(ClientError::UnexpectedBody("binary")),
        }
    }
}

fn base_headers(has_http_source: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_HEADER));
    if has_http_source {
        headers.insert(HTTP_SOURCE, HeaderValue::from_static(HTTP_SOURCE_VALUE));
    }
    headers
}

fn api_error(status: http::StatusCode, body: &ResponseBody) -> ClientError {
    let errors = body
        .json()
        .and_then(|v| v.get("errors"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    ClientError::Api { status, errors }
}
