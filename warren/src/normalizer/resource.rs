use crate::model::resource::{FlatResource, ResourceObject};
use crate::model::is_present;
use crate::normalizer::Normalizer;
use serde_json::{Map, Value};

impl Normalizer {
    /// Flattens one primary-data resource
    ///
    /// With `attributes`, the result is `id` followed by the attributes; without, the object is
    /// taken as is. Every relationship is then reduced to the id of its to-one linkage, or `null`.
    /// Values that are not JSON objects come back unchanged
    pub fn flatten_resource(&self, value: &Value) -> Value {
        match ResourceObject::from_value(value) {
            Some(resource) => Value::Object(self.flatten_object(resource)),
            None => value.clone(),
        }
    }

    fn flatten_object(&self, resource: ResourceObject) -> FlatResource {
        let mut flat = match resource.attributes() {
            Some(attributes) => self.seed(resource.present_id(), attributes),
            None => resource.raw().clone(),
        };

        for (key, relationship) in resource.relationships() {
            let id = relationship.data.single_id().filter(|id| is_present(id));
            flat.insert(key.clone(), id.cloned().unwrap_or(Value::Null));
        }

        flat
    }

    /// Flattens an included resource that carries its own relationships
    ///
    /// Keeps `type`, and writes each relationship under `<key>Ids` (to-many) or `<key>Id`
    /// (to-one) so it cannot be mistaken for an embedded object
    pub fn flatten_included_resource(&self, resource: &Map<String, Value>) -> FlatResource {
        let resource = ResourceObject::new(resource);
        let mut flat = self.identified(resource);

        for (key, relationship) in resource.relationships() {
            if relationship.is_to_many() {
                flat.insert(format!("{}Ids", key), Value::Array(relationship.ids()));
            } else {
                let id = relationship.data.single_id().cloned().unwrap_or(Value::Null);
                flat.insert(format!("{}Id", key), id);
            }
        }

        flat
    }

    /// Flattens an included resource, or each one of a sequence of them, order preserved
    pub fn flatten_related(&self, value: &Value) -> Value {
        match value {
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.flatten_related(item)).collect())
            },
            Value::Object(raw) => {
                let resource = ResourceObject::new(raw);
                if resource.has_relationships() {
                    Value::Object(self.flatten_included_resource(raw))
                } else {
                    Value::Object(self.identified(resource))
                }
            },
            other => other.clone(),
        }
    }

    /// `{ id, type, ...attributes }`
    fn identified(&self, resource: ResourceObject) -> FlatResource {
        let mut flat = FlatResource::new();
        flat.insert("id".into(), resource.id().cloned().unwrap_or(Value::Null));
        flat.insert(
            "type".into(),
            resource.ty().map(|ty| Value::String(ty.into())).unwrap_or(Value::Null),
        );
        if let Some(attributes) = resource.attributes() {
            self.spread(&mut flat, attributes);
        }
        flat
    }

    /// `{ id, ...attributes }`
    fn seed(&self, id: Option<&Value>, attributes: &Map<String, Value>) -> FlatResource {
        let mut flat = FlatResource::new();
        flat.insert("id".into(), id.cloned().unwrap_or(Value::Null));
        self.spread(&mut flat, attributes);
        flat
    }

    /// Copies `attributes` over `flat`. A same-named `id` or `type` attribute replaces the
    /// identity value unless `identity_wins` is set
    fn spread(&self, flat: &mut FlatResource, attributes: &Map<String, Value>) {
        for (key, value) in attributes {
            if self.settings.identity_wins && flat.contains_key(key) && is_identity(key) {
                continue;
            }
            flat.insert(key.clone(), value.clone());
        }
    }
}

fn is_identity(key: &str) -> bool { key == "id" || key == "type" }

#[cfg(test)]
mod tests {
    use crate::normalizer::{Normalizer, NormalizerSettings};
    use serde_json::json;

    #[test]
    fn attribute_id_overwrites_resource_id_test() {
        let input = json!({ "id": "1", "type": "post", "attributes": { "id": "legacy-7", "title": "Hi" } });

        let flat = Normalizer::default().flatten_resource(&input);
        assert_eq!(flat, json!({ "id": "legacy-7", "title": "Hi" }));

        let normalizer =
            Normalizer::new(NormalizerSettings { identity_wins: true, ..Default::default() });
        assert_eq!(normalizer.flatten_resource(&input), json!({ "id": "1", "title": "Hi" }));
    }

    #[test]
    fn id_is_seeded_first_test() {
        let input = json!({ "id": "1", "type": "post", "attributes": { "title": "Hi", "body": "..." } });
        let flat = Normalizer::default().flatten_resource(&input);
        let keys: Vec<&String> = flat.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "title", "body"]);
    }

    #[test]
    fn empty_id_reads_as_null_test() {
        let input = json!({ "id": "", "type": "post", "attributes": {} });
        assert_eq!(Normalizer::default().flatten_resource(&input), json!({ "id": null }));
    }

    #[test]
    fn to_many_relationship_reads_as_null_test() {
        let input = json!({
            "id": "1",
            "type": "post",
            "attributes": {},
            "relationships": { "tags": { "data": [{ "type": "tag", "id": "3" }] } }
        });
        assert_eq!(
            Normalizer::default().flatten_resource(&input),
            json!({ "id": "1", "tags": null })
        );
    }

    #[test]
    fn non_object_passes_through_test() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.flatten_resource(&json!("abc")), json!("abc"));
        assert_eq!(normalizer.flatten_resource(&json!(null)), json!(null));
        assert_eq!(normalizer.flatten_related(&json!(42)), json!(42));
    }

    #[test]
    fn related_without_relationships_keeps_type_test() {
        let input = json!({ "id": "9", "type": "people", "attributes": { "name": "Dan" } });
        assert_eq!(
            Normalizer::default().flatten_related(&input),
            json!({ "id": "9", "type": "people", "name": "Dan" })
        );
    }
}
