#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

pub mod error;
pub mod model;
pub mod normalizer;

use crate::error::WarrenError;

pub use crate::model::document::{FlatData, FlattenedDocument, Formatted};
pub use crate::normalizer::{format_response, Normalizer, NormalizerSettings};

pub const JSON_API_HEADER: &str = "application/vnd.api+json";

pub type WarrenResult<T> = std::result::Result<T, WarrenError>;
