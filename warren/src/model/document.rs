use crate::model::resource::FlatResource;
use crate::WarrenResult;
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Included resources grouped under their pluralized type: `"users" => {..}` for a lone user,
/// `"tags" => [{..}, {..}]` for several tags
pub type IncludedGroups = Map<String, Value>;

/// Flattened primary data
///
/// Items are `Value`s rather than [FlatResource]s because primary data that is not a JSON
/// object is handed through untouched
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FlatData {
    Single(Value),
    Multiple(Vec<Value>),
}

impl FlatData {
    pub fn data(&self) -> Vec<Value> {
        match self {
            FlatData::Single(item) => vec![item.clone()],
            FlatData::Multiple(vec) => vec.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FlatData::Single(_) => 1,
            FlatData::Multiple(vec) => vec.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// The flattened counterpart of a top-level JSON:API document
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedDocument {
    pub data: FlatData,
    pub headers: Option<Value>,
    pub meta: Option<Value>,
    pub included: Option<IncludedGroups>,
    /// `included` was missing from a collection response and is written as `[]`
    included_defaulted: bool,
}

impl FlattenedDocument {
    pub fn single(data: Value, headers: Option<Value>) -> Self {
        Self {
            data: FlatData::Single(data),
            headers,
            meta: None,
            included: None,
            included_defaulted: false,
        }
    }

    pub fn multiple(data: Vec<Value>, headers: Option<Value>, meta: Option<Value>) -> Self {
        Self {
            data: FlatData::Multiple(data),
            headers,
            meta,
            included: Some(Default::default()),
            included_defaulted: true,
        }
    }

    pub fn with_included(mut self, included: IncludedGroups) -> Self {
        self.included = Some(included);
        self.included_defaulted = false;
        self
    }

    pub fn into_single(self) -> Result<Value, Self> {
        if let FlatData::Single(item) = self.data {
            Ok(item)
        } else {
            Err(self)
        }
    }

    pub fn into_multiple(self) -> Result<Vec<Value>, Self> {
        if let FlatData::Multiple(items) = self.data {
            Ok(items)
        } else {
            Err(self)
        }
    }

    /// The included group of resource type `ty`, looked up under its pluralized key
    pub fn included_of(&self, ty: &str) -> Option<&Value> {
        self.included.as_ref().and_then(|inc| inc.get(&pluralize(ty)))
    }

    /// Deserializes the flattened primary data into a caller-side model
    pub fn data_as<T: DeserializeOwned>(&self) -> WarrenResult<T> {
        let value = match &self.data {
            FlatData::Single(item) => item.clone(),
            FlatData::Multiple(items) => Value::Array(items.clone()),
        };
        Ok(serde_json::from_value(value)?)
    }
}

impl Serialize for FlattenedDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FlattenedDocument", 4)?;
        state.serialize_field("data", &self.data)?;
        if let Some(ref headers) = self.headers {
            state.serialize_field("headers", headers)?;
        }
        if let Some(ref meta) = self.meta {
            state.serialize_field("meta", meta)?;
        }
        match self.included {
            Some(_) if self.included_defaulted => {
                state.serialize_field("included", &Vec::<FlatResource>::new())?;
            },
            Some(ref included) => state.serialize_field("included", included)?,
            None => {},
        }

        state.end()
    }
}

/// What the formatter hands back: a flattened document, or the input itself when it carried
/// neither `data` nor `included`
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Formatted {
    Document(FlattenedDocument),
    PassThrough(Value),
}

impl Formatted {
    pub fn document(&self) -> Option<&FlattenedDocument> {
        match self {
            Formatted::Document(doc) => Some(doc),
            Formatted::PassThrough(_) => None,
        }
    }

    pub fn into_document(self) -> Result<FlattenedDocument, Self> {
        match self {
            Formatted::Document(doc) => Ok(doc),
            other => Err(other),
        }
    }

    pub fn is_pass_through(&self) -> bool { matches!(self, Formatted::PassThrough(_)) }

    pub fn to_value(&self) -> WarrenResult<Value> { Ok(serde_json::to_value(self)?) }
}

/// Naive pluralization used for included group keys: append `s`, nothing else
pub fn pluralize(ty: &str) -> String { format!("{}s", ty) }
