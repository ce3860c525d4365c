pub mod auth;

use crate::cookies::CookieStore;
use crate::service::HttpService;
use crate::transport::Transport;

pub const VERSION: &str = "v1";

pub struct V1<'a, T, C> {
    http: &'a HttpService<T, C>,
}

impl<'a, T, C> V1<'a, T, C>
where
    T: Transport,
    C: CookieStore,
{
    pub fn new(http: &'a HttpService<T, C>) -> Self { Self { http } }

    pub fn auth(&self) -> auth::Auth<'a, T, C> { auth::Auth::new(self.http, VERSION) }
}
