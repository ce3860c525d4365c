use crate::model::relationship::Relationship;
use crate::model::{is_present, Id};
use log::warn;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::iter::FromIterator;

/// A flattened resource: `id`, the attributes, and the relationship ids in one shallow object
pub type FlatResource = Map<String, Value>;
pub type ResourceIdentifiers = Vec<ResourceIdentifier>;

lazy_static! {
    static ref RESOURCE_BODY_FIELDS: HashSet<&'static str> =
        HashSet::from_iter(vec!["attributes", "relationships"]);
}

/// Valid Resource Identifier (can be None)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum IdentifierData {
    // `Multiple` goes first: an empty array would otherwise match a defaulted `Single`
    Multiple(ResourceIdentifiers),
    Single(Option<ResourceIdentifier>),
}

impl IdentifierData {
    pub fn data(&self) -> Vec<ResourceIdentifier> {
        match self {
            IdentifierData::Single(Some(data)) => vec![data.clone()],
            IdentifierData::Single(None) => Default::default(),
            IdentifierData::Multiple(data) => data.clone(),
        }
    }

    /// `id` of a to-one linkage. A to-many linkage has no single id
    pub fn single_id(&self) -> Option<&Id> {
        match self {
            IdentifierData::Single(Some(data)) => data.id.as_ref(),
            _ => None,
        }
    }
}

impl Default for IdentifierData {
    fn default() -> Self { IdentifierData::Single(None) }
}

/// Resource Identifier
///
/// Both members are optional so a half-filled linkage still deserializes
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    #[serde(default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub id: Option<Id>,
}

impl ResourceIdentifier {
    pub fn new(ty: impl ToString, id: impl ToString) -> Self {
        Self { ty: Some(ty.to_string()), id: Some(Value::String(id.to_string())) }
    }

    /// Lenient read: a non-string `type` or a non-object item leaves the member empty
    pub fn from_value(value: &Value) -> Self {
        Self {
            ty: value.get("type").and_then(Value::as_str).map(Into::into),
            id: value.get("id").filter(|id| !id.is_null()).cloned(),
        }
    }
}

/// Borrowed view over a JSON:API resource object
///
/// Every accessor is lenient: members that are missing or have the wrong shape read as absent
#[derive(Debug, Clone, Copy)]
pub struct ResourceObject<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> ResourceObject<'a> {
    pub fn new(raw: &'a Map<String, Value>) -> Self { Self { raw } }

    pub fn from_value(value: &'a Value) -> Option<Self> { value.as_object().map(Self::new) }

    pub fn raw(&self) -> &'a Map<String, Value> { self.raw }

    /// `id`, as sent
    pub fn id(&self) -> Option<&'a Id> { self.raw.get("id").filter(|v| !v.is_null()) }

    /// `id`, when it is a present (non-empty, non-zero) value
    pub fn present_id(&self) -> Option<&'a Id> { self.raw.get("id").filter(|v| is_present(v)) }

    pub fn ty(&self) -> Option<&'a str> { self.raw.get("type").and_then(Value::as_str) }

    pub fn attributes(&self) -> Option<&'a Map<String, Value>> {
        self.raw.get("attributes").filter(|v| is_present(v)).and_then(Value::as_object)
    }

    pub fn has_relationships(&self) -> bool {
        self.raw.get("relationships").map(is_present).unwrap_or(false)
    }

    /// Relationships in document order, see [Relationship::from_value]. A relationship that is
    /// not an object reads as an empty linkage
    pub fn relationships(&self) -> Vec<(&'a String, Relationship)> {
        let raw = match self.raw.get("relationships").and_then(Value::as_object) {
            Some(raw) => raw,
            None => return vec![],
        };

        raw.iter()
            .map(|(key, value)| {
                if !value.is_object() {
                    warn!("Relationship `{}` is not a relationship object: {}", key, value);
                }
                (key, Relationship::from_value(value))
            })
            .collect()
    }

    /// Whether this object carries a resource body, i.e. it is meant to be flattened
    pub fn is_resource_like(&self) -> bool {
        RESOURCE_BODY_FIELDS.iter().any(|f| self.raw.get(*f).map(is_present).unwrap_or(false))
    }

    /// A resource-like object that has neither an `id` nor a `type` cannot be identified
    pub fn is_malformed(&self) -> bool {
        self.is_resource_like() && self.id().is_none() && self.ty().is_none()
    }
}

