use crate::cookies::CookieStore;
use http::HeaderMap;

pub const ACCESS_TOKEN: &str = "access-token";
pub const CLIENT: &str = "client";
pub const UID: &str = "uid";
pub const HTTP_SOURCE: &str = "httpsource";
pub const HTTP_SOURCE_VALUE: &str = "web";

/// The token triple the backend rotates on every response
///
/// Missing members are empty strings; only a complete triple is ever written anywhere
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders {
    pub access_token: String,
    pub client: String,
    pub uid: String,
}

impl AuthHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or_default().to_string()
        };
        Self { access_token: read(ACCESS_TOKEN), client: read(CLIENT), uid: read(UID) }
    }

    pub fn from_cookies<C: CookieStore + ?Sized>(cookies: &C) -> Self {
        let read = |name: &str| cookies.get(name).unwrap_or_default();
        Self { access_token: read(ACCESS_TOKEN), client: read(CLIENT), uid: read(UID) }
    }

    pub fn is_complete(&self) -> bool {
        !(self.access_token.is_empty() || self.client.is_empty() || self.uid.is_empty())
    }

    pub fn store<C: CookieStore + ?Sized>(&self, cookies: &C) {
        cookies.set(UID, &self.uid);
        cookies.set(CLIENT, &self.client);
        cookies.set(ACCESS_TOKEN, &self.access_token);
    }

    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            (ACCESS_TOKEN, self.access_token.as_str()),
            (CLIENT, self.client.as_str()),
            (UID, self.uid.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::MemoryCookieStore;
    use http::HeaderValue;

    #[test]
    fn from_headers_test() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN, HeaderValue::from_static("token"));
        headers.insert(CLIENT, HeaderValue::from_static("client-1"));

        let auth = AuthHeaders::from_headers(&headers);
        assert_eq!(auth.access_token, "token");
        assert_eq!(auth.uid, "");
        assert!(!auth.is_complete());

        headers.insert(UID, HeaderValue::from_static("ada@example.com"));
        assert!(AuthHeaders::from_headers(&headers).is_complete());
    }

    #[test]
    fn cookie_round_trip_test() {
        let cookies = MemoryCookieStore::new();
        assert_eq!(AuthHeaders::from_cookies(&cookies), AuthHeaders::default());

        let auth = AuthHeaders {
            access_token: "token".into(),
            client: "client-1".into(),
            uid: "ada@example.com".into(),
        };
        auth.store(&cookies);
        assert_eq!(cookies.get(UID), Some("ada@example.com".to_string()));
        assert_eq!(AuthHeaders::from_cookies(&cookies), auth);
    }
}
