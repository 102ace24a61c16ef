//! The published operation catalog.
//!
//! Built once on first access from the operation table in
//! [`crate::operations`] and never mutated afterwards. Listing order is the
//! table order.

use once_cell::sync::Lazy;
use schemars::generate::SchemaSettings;
use schemars::transform::AddNullable;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::operations::descriptors;
use crate::JsonObject;

static CATALOG: Lazy<Vec<OperationDescriptor>> = Lazy::new(descriptors);

/// Metadata for one published operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: JsonObject,
}

impl OperationDescriptor {
    /// Describe an operation whose arguments deserialize into `P`.
    pub fn of<P: JsonSchema>(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            input_schema: input_schema_for::<P>(name),
        }
    }

    /// Names listed under the schema's `required` key.
    pub fn required_fields(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Names listed under the schema's `properties` key.
    pub fn property_names(&self) -> Vec<&str> {
        self.input_schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// All operations, in listing order.
pub fn list_operations() -> &'static [OperationDescriptor] {
    &CATALOG
}

/// Look up one descriptor by published name.
pub fn find_operation(name: &str) -> Option<&'static OperationDescriptor> {
    CATALOG.iter().find(|d| d.name == name)
}

/// Draft 2020-12 object schema with optional fields published as their plain type.
///
/// `$schema`, `title`, and the struct-level `description` are Rust-side details
/// and are stripped; `properties` is always present, even when empty.
fn input_schema_for<P: JsonSchema>(name: &str) -> JsonObject {
    let generator = SchemaSettings::draft2020_12()
        .with_transform(AddNullable::default())
        .into_generator();
    let schema = generator.into_root_schema_for::<P>();

    let mut map = match serde_json::to_value(&schema) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            tracing::warn!(operation = name, "Schema did not serialize to an object");
            return empty_object_schema();
        }
    };

    for key in ["$schema", "title", "description"] {
        map.remove(key);
    }
    map.entry("properties")
        .or_insert_with(|| Value::Object(JsonObject::new()));
    map
}

fn empty_object_schema() -> JsonObject {
    let mut map = JsonObject::new();
    map.insert("type".to_string(), Value::String("object".to_string()));
    map.insert("properties".to_string(), Value::Object(JsonObject::new()));
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EXPECTED_ORDER: [&str; 22] = [
        "planner_initAuth",
        "planner_createTask",
        "planner_setDefaults",
        "planner_listPlans",
        "planner_listBuckets",
        "planner_listTasks",
        "planner_findTask",
        "planner_completeTask",
        "planner_moveTask",
        "planner_addSubtask",
        "planner_listSubtasks",
        "planner_completeSubtask",
        "planner_deleteTask",
        "planner_updateTask",
        "planner_searchUsers",
        "planner_lookupUser",
        "planner_createBucket",
        "planner_deleteBucket",
        "planner_renameBucket",
        "planner_moveBucketTasks",
        "planner_listComments",
        "planner_addComment",
    ];

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let names: Vec<&str> = list_operations().iter().map(|d| d.name).collect();
        assert_eq!(names, EXPECTED_ORDER);
    }

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<&str> = list_operations().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), list_operations().len());
    }

    #[test]
    fn test_every_schema_is_an_object() {
        for d in list_operations() {
            assert_eq!(d.input_schema.get("type"), Some(&Value::from("object")), "{}", d.name);
            assert!(!d.description.is_empty(), "{} has no description", d.name);
        }
    }

    #[test]
    fn test_create_task_schema() {
        let d = find_operation("planner_createTask").unwrap();
        assert_eq!(d.required_fields(), vec!["title"]);
        assert_eq!(
            sorted(d.property_names()),
            vec!["assignee", "bucket", "desc", "due", "labels", "plan", "title"]
        );
    }

    #[test]
    fn test_camel_case_fields_published() {
        let list_tasks = find_operation("planner_listTasks").unwrap();
        assert!(list_tasks.property_names().contains(&"incompleteOnly"));
        assert_eq!(list_tasks.required_fields(), vec!["plan"]);

        let rename = find_operation("planner_renameBucket").unwrap();
        assert_eq!(
            sorted(rename.required_fields()),
            vec!["bucket", "newName", "plan"]
        );

        let lookup = find_operation("planner_lookupUser").unwrap();
        assert!(lookup.property_names().contains(&"noSearch"));
        assert_eq!(lookup.required_fields(), vec!["user"]);
    }

    #[test]
    fn test_no_argument_operations_have_no_required_fields() {
        for name in ["planner_initAuth", "planner_listPlans"] {
            let d = find_operation(name).unwrap();
            assert!(d.required_fields().is_empty());
            assert!(d.property_names().is_empty());
        }
    }

    #[test]
    fn test_required_fields_match_flag_table() {
        let expected: [(&str, &[&str]); 8] = [
            ("planner_setDefaults", &["bucket", "plan"]),
            ("planner_moveTask", &["bucket", "task"]),
            ("planner_addSubtask", &["subtask", "task"]),
            ("planner_updateTask", &["task"]),
            ("planner_searchUsers", &["query"]),
            ("planner_moveBucketTasks", &["plan", "source", "target"]),
            ("planner_listComments", &["plan", "task"]),
            ("planner_addComment", &["comment", "plan", "task"]),
        ];
        for (name, fields) in expected {
            let d = find_operation(name).unwrap();
            assert_eq!(sorted(d.required_fields()), fields.to_vec(), "{name}");
        }
    }

    #[test]
    fn test_every_schema_has_properties_and_no_rust_metadata() {
        for d in list_operations() {
            assert!(
                matches!(d.input_schema.get("properties"), Some(Value::Object(_))),
                "{} has no properties object",
                d.name
            );
            for key in ["$schema", "title", "description"] {
                assert!(!d.input_schema.contains_key(key), "{} publishes {key}", d.name);
            }
        }
    }

    #[test]
    fn test_optional_fields_published_as_plain_types() {
        let list_tasks = find_operation("planner_listTasks").unwrap();
        let props = list_tasks.input_schema["properties"].as_object().unwrap();
        assert_eq!(props["plan"]["type"], "string");
        assert_eq!(props["bucket"]["type"], "string");
        assert_eq!(props["incompleteOnly"]["type"], "boolean");

        for d in list_operations() {
            for (field, prop) in d.input_schema["properties"].as_object().unwrap() {
                let ty = prop.get("type").and_then(Value::as_str);
                assert!(
                    matches!(ty, Some("string" | "boolean" | "number" | "integer")),
                    "{}.{field} has type {:?}",
                    d.name,
                    prop.get("type")
                );
                assert!(
                    prop.get("description").and_then(Value::as_str).is_some(),
                    "{}.{field} has no description",
                    d.name
                );
            }
        }
    }

    #[test]
    fn test_no_argument_schemas_publish_empty_properties() {
        let d = find_operation("planner_initAuth").unwrap();
        assert_eq!(d.input_schema.get("type"), Some(&Value::from("object")));
        assert_eq!(
            d.input_schema.get("properties"),
            Some(&Value::Object(JsonObject::new()))
        );
    }

    #[test]
    fn test_unknown_lookup() {
        assert!(find_operation("planner_nope").is_none());
    }
}
