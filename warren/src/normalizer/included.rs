use crate::model::document::{pluralize, IncludedGroups};
use crate::normalizer::Normalizer;
use itertools::Itertools;
use log::warn;
use serde_json::Value;

impl Normalizer {
    /// Groups included resources by type
    ///
    /// Every type becomes one `<type>s` entry, in order of first appearance. A type seen once maps
    /// to its flattened resource, a type seen more often maps to the flattened resources in
    /// document order
    pub fn group_included(&self, included: &[Value]) -> IncludedGroups {
        let types: Vec<&str> = included
            .iter()
            .filter_map(|resource| {
                let ty = resource.get("type").and_then(Value::as_str);
                if ty.is_none() {
                    warn!("Skipping an included resource without a `type`: {}", resource);
                }
                ty
            })
            .collect();
        let counts = types.iter().counts();

        types
            .iter()
            .unique()
            .map(|ty| {
                let mut members = included
                    .iter()
                    .filter(|r| r.get("type").and_then(Value::as_str) == Some(*ty));
                let group = if counts[ty] > 1 {
                    self.flatten_related(&Value::Array(members.cloned().collect()))
                } else {
                    members.next().map(|r| self.flatten_related(r)).unwrap_or(Value::Null)
                };
                (pluralize(ty), group)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::normalizer::Normalizer;
    use serde_json::{json, Value};

    fn group(included: Value) -> Value {
        let included = included.as_array().cloned().unwrap_or_default();
        Value::Object(Normalizer::default().group_included(&included))
    }

    #[test]
    fn counts_every_occurrence_test() {
        let grouped = group(json!([
            { "id": "1", "type": "tag", "attributes": { "label": "a" } },
            { "id": "2", "type": "tag", "attributes": { "label": "b" } },
            { "id": "3", "type": "tag", "attributes": { "label": "c" } },
        ]));
        assert_eq!(grouped["tags"].as_array().map(Vec::len), Some(3));
        assert_eq!(grouped["tags"][2], json!({ "id": "3", "type": "tag", "label": "c" }));
    }

    #[test]
    fn keys_follow_first_appearance_test() {
        let grouped = group(json!([
            { "id": "1", "type": "tag" },
            { "id": "7", "type": "user" },
            { "id": "2", "type": "tag" },
        ]));
        let keys: Vec<&String> = grouped.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["tags", "users"]);
        assert_eq!(grouped["users"], json!({ "id": "7", "type": "user" }));
        assert_eq!(
            grouped["tags"],
            json!([{ "id": "1", "type": "tag" }, { "id": "2", "type": "tag" }])
        );
    }

    #[test]
    fn untyped_resources_are_skipped_test() {
        let grouped = group(json!([{ "id": "1" }, "garbage", { "id": "2", "type": "user" }]));
        assert_eq!(grouped, json!({ "users": { "id": "2", "type": "user" } }));
    }

    #[test]
    fn empty_included_test() {
        assert_eq!(group(json!([])), json!({}));
    }
}
