//! Endpoint methods grouped by API version, all sharing one [HttpService]
pub mod v1;

use crate::cookies::CookieStore;
use crate::service::HttpService;
use crate::settings::ClientSettings;
use crate::transport::Transport;
use crate::ClientResult;

pub struct ClientApi<T, C> {
    http: HttpService<T, C>,
}

impl<T, C> ClientApi<T, C>
where
    T: Transport,
    C: CookieStore,
{
    /// Wires the services to one [HttpService] built from the injected transport and cookie store
    pub fn new(settings: ClientSettings, transport: T, cookies: C) -> Self {
        Self { http: HttpService::new(settings, transport, cookies) }
    }

    pub fn http(&self) -> &HttpService<T, C> { &self.http }

    pub fn set_header<I, K, V>(&self, headers: I) -> ClientResult<bool>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.http.set_header(headers)
    }

    pub fn v1(&self) -> v1::V1<'_, T, C> { v1::V1::new(&self.http) }
}
