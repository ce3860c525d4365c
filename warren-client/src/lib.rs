#[macro_use]
extern crate serde_derive;

pub mod auth;
pub mod cookies;
pub mod error;
pub mod service;
pub mod services;
pub mod settings;
pub mod transport;

use crate::error::ClientError;

pub use crate::service::HttpService;
pub use crate::services::ClientApi;
pub use crate::settings::ClientSettings;

pub type ClientResult<T> = std::result::Result<T, ClientError>;
