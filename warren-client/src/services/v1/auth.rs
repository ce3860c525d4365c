use crate::cookies::CookieStore;
use crate::service::HttpService;
use crate::transport::Transport;
use crate::ClientResult;
use warren::Formatted;

pub struct Auth<'a, T, C> {
    http: &'a HttpService<T, C>,
    version: &'static str,
}

impl<'a, T, C> Auth<'a, T, C>
where
    T: Transport,
    C: CookieStore,
{
    pub fn new(http: &'a HttpService<T, C>, version: &'static str) -> Self { Self { http, version } }

    /// Mapping to `GET <version>/auth/invitation?<query>`, `query` is passed on verbatim
    pub async fn invitation_data(&self, query: &str) -> ClientResult<Formatted> {
        let path = format!("{}/auth/invitation?{}", self.version, query);
        self.http.get(&path, &[]).await
    }

    /// Mapping to `GET <version>/auth/validate_token`
    pub async fn validate_token(&self) -> ClientResult<Formatted> {
        let path = format!("{}/auth/validate_token", self.version);
        self.http.get(&path, &[]).await
    }
}
