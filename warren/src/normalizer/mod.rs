//! Flattening of incoming JSON:API documents
//!
//! The entry point is [Normalizer::format_response]. It looks at the shape of a response body
//! and dispatches:
//!   1. `data` is an array: every item is flattened, `headers` and `meta` are kept, `included`
//!      is grouped (empty when missing)
//!   2. `data` is a single item and `included` exists: both are flattened
//!   3. `data` is a single item: only `data` is flattened, `headers` are kept
//!   4. otherwise the body is handed back untouched
mod included;
mod resource;

use crate::error::WarrenError;
use crate::model::document::{FlattenedDocument, Formatted, IncludedGroups};
use crate::model::resource::ResourceObject;
use crate::model::member;
use crate::WarrenResult;
use log::{debug, warn};
use serde_json::Value;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NormalizerSettings {
    /// Reject resource objects that carry a body but neither `id` nor `type`
    pub strict: bool,
    /// Keep the resource `id` (and `type`) when an attribute of the same name exists
    pub identity_wins: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    settings: NormalizerSettings,
}

impl Normalizer {
    pub fn new(settings: NormalizerSettings) -> Self { Self { settings } }

    pub fn settings(&self) -> &NormalizerSettings { &self.settings }

    pub fn format_response(&self, input: Value) -> WarrenResult<Formatted> {
        if self.settings.strict {
            self.validate(&input)?;
        }
        Ok(self.format(input))
    }

    /// Checks that every resource object in `data` and `included` can be identified
    pub fn validate(&self, input: &Value) -> WarrenResult<()> {
        match input.get("data") {
            Some(Value::Array(items)) => {
                for (idx, item) in items.iter().enumerate() {
                    check_resource(item, &format!("/data/{}", idx))?;
                }
            },
            Some(item) => check_resource(item, "/data")?,
            None => {},
        }

        match member(input, "included") {
            Some(Value::Array(items)) => {
                for (idx, item) in items.iter().enumerate() {
                    check_resource(item, &format!("/included/{}", idx))?;
                }
            },
            Some(other) => {
                return Err(WarrenError::MalformedDocument(format!(
                    "`included` must be an array, got `{}`",
                    other
                )));
            },
            None => {},
        }

        Ok(())
    }

    pub(crate) fn format(&self, input: Value) -> Formatted {
        let data = member(&input, "data");
        let included = member(&input, "included");

        let doc = match (data, included) {
            (Some(Value::Array(items)), _) => {
                debug!("Flattening a collection of {} resources", items.len());
                let data = items.iter().map(|item| self.flatten_resource(item)).collect();
                let doc = FlattenedDocument::multiple(
                    data,
                    input.get("headers").cloned(),
                    input.get("meta").cloned(),
                );
                match included {
                    Some(included) => Some(doc.with_included(self.group(included))),
                    None => Some(doc),
                }
            },
            (_, Some(included)) => {
                debug!("Flattening a single resource with included resources");
                let data = match input.get("data") {
                    Some(data) => self.flatten_resource(data),
                    None => Value::Null,
                };
                let doc = FlattenedDocument::single(data, input.get("headers").cloned());
                Some(doc.with_included(self.group(included)))
            },
            (Some(data), None) => {
                debug!("Flattening a single resource");
                Some(FlattenedDocument::single(
                    self.flatten_resource(data),
                    input.get("headers").cloned(),
                ))
            },
            (None, None) => None,
        };

        match doc {
            Some(doc) => Formatted::Document(doc),
            None => Formatted::PassThrough(input),
        }
    }

    fn group(&self, included: &Value) -> IncludedGroups {
        match included.as_array() {
            Some(items) => self.group_included(items),
            None => {
                warn!("Ignoring `included`, it is not an array: {}", included);
                Default::default()
            },
        }
    }
}

fn check_resource(item: &Value, pointer: &str) -> WarrenResult<()> {
    match ResourceObject::from_value(item) {
        Some(resource) if resource.is_malformed() => Err(WarrenError::malformed_resource(pointer)),
        _ => Ok(()),
    }
}

/// Flattens `input` with the default, lenient settings. Never fails
pub fn format_response(input: Value) -> Formatted { Normalizer::default().format(input) }
