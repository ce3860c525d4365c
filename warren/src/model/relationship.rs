use crate::model::resource::{IdentifierData, ResourceIdentifier};
use crate::model::Meta;
use serde_json::{Map, Value};

/// Relationship with another object
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    #[serde(default)]
    pub data: IdentifierData,
    #[serde(skip_serializing_if = "Map::is_empty")]
    #[serde(default)]
    pub links: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    #[serde(default)]
    pub meta: Meta,
}

impl Relationship {
    /// Reads a relationship object member by member
    ///
    /// A member with the wrong shape only loses itself: `data` keeps its cardinality whatever
    /// its items look like, and an identifier keeps its `id` even next to an unusable `type`
    pub fn from_value(value: &Value) -> Self {
        let data = match value.get("data") {
            Some(Value::Array(items)) => {
                IdentifierData::Multiple(items.iter().map(ResourceIdentifier::from_value).collect())
            },
            Some(item @ Value::Object(_)) => {
                IdentifierData::Single(Some(ResourceIdentifier::from_value(item)))
            },
            _ => IdentifierData::Single(None),
        };
        let object_of = |key: &str| value.get(key).and_then(Value::as_object).cloned();

        Self {
            data,
            links: object_of("links").unwrap_or_default(),
            meta: object_of("meta").unwrap_or_default(),
        }
    }

    pub fn is_to_many(&self) -> bool { matches!(self.data, IdentifierData::Multiple(_)) }

    /// Ids of a to-many linkage, in linkage order. Identifiers without an `id` map to `null`
    pub fn ids(&self) -> Vec<Value> {
        self.data.data().into_iter().map(|r| r.id.unwrap_or(Value::Null)).collect()
    }
}
