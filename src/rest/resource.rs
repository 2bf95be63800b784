//! The resource trait shared by every Etsy resource.
//!
//! A resource wraps one raw JSON object and reads it through the
//! [`AttributeMap`] its type declares. Implementing a resource takes a
//! declaration block and a constructor:
//!
//! ```rust
//! use std::sync::OnceLock;
//!
//! use etsy_api::rest::{AttributeMap, Resource};
//! use serde_json::{json, Map, Value};
//!
//! struct User {
//!     data: Map<String, Value>,
//! }
//!
//! impl Resource for User {
//!     const NAME: &'static str = "User";
//!
//!     fn attribute_map() -> &'static AttributeMap {
//!         static ATTRIBUTES: OnceLock<AttributeMap> = OnceLock::new();
//!         ATTRIBUTES.get_or_init(|| {
//!             AttributeMap::define(|map| {
//!                 map.declare_attribute("username", "login_name")?;
//!                 Ok(())
//!             })
//!             .expect("User attribute declarations are valid")
//!         })
//!     }
//!
//!     fn from_record(data: Map<String, Value>) -> Self {
//!         Self { data }
//!     }
//!
//!     fn raw(&self) -> &Map<String, Value> {
//!         &self.data
//!     }
//! }
//!
//! let users = User::from_result(json!({ "login_name": "reagent" })).unwrap();
//! assert_eq!(users[0].str_attribute("username"), Some("reagent"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::{AttributeMap, ResourceError};

/// A read-only API resource backed by one raw JSON object.
pub trait Resource: Sized {
    /// The resource name used in errors and logs (e.g., "Shop").
    const NAME: &'static str;

    /// The attribute declarations for this resource type.
    fn attribute_map() -> &'static AttributeMap;

    /// Wraps one raw JSON object. The object is stored verbatim.
    fn from_record(record: Map<String, Value>) -> Self;

    /// Returns the raw JSON object.
    fn raw(&self) -> &Map<String, Value>;

    /// Reads a declared attribute; `None` if undeclared or absent.
    fn attribute(&self, local_name: &str) -> Option<&Value> {
        Self::attribute_map().get(self.raw(), local_name)
    }

    /// Reads a declared attribute as a string.
    fn str_attribute(&self, local_name: &str) -> Option<&str> {
        self.attribute(local_name).and_then(Value::as_str)
    }

    /// Reads a declared attribute as an unsigned integer.
    fn u64_attribute(&self, local_name: &str) -> Option<u64> {
        self.attribute(local_name).and_then(Value::as_u64)
    }

    /// Reads a declared attribute holding seconds since the Unix epoch.
    fn time_attribute(&self, local_name: &str) -> Option<DateTime<Utc>> {
        let seconds = self.attribute(local_name)?;
        let seconds = seconds
            .as_i64()
            .or_else(|| seconds.as_f64().map(|s| s.trunc() as i64))?;
        DateTime::from_timestamp(seconds, 0)
    }

    /// Returns every present attribute keyed by its local name.
    fn attributes(&self) -> Map<String, Value> {
        Self::attribute_map().project(self.raw())
    }

    /// Builds one resource per object in a result payload, in payload order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResult`] if the payload is not an
    /// object or an array of objects.
    fn from_result(result: Value) -> Result<Vec<Self>, ResourceError> {
        Ok(flatten_result(Self::NAME, result)?
            .into_iter()
            .map(Self::from_record)
            .collect())
    }
}

/// Flattens a result payload into a sequence of JSON objects.
///
/// A single object becomes a one-element sequence, an array keeps its order
/// and `null` becomes an empty sequence.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedResult`] for scalars and for arrays
/// containing anything other than objects.
pub fn flatten_result(
    resource: &'static str,
    result: Value,
) -> Result<Vec<Map<String, Value>>, ResourceError> {
    match result {
        Value::Object(record) => Ok(vec![record]),
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(ResourceError::MalformedResult {
                    resource,
                    message: format!("element {index} is {}", kind(&other)),
                }),
            })
            .collect(),
        other => Err(ResourceError::MalformedResult {
            resource,
            message: format!("expected an object or an array, got {}", kind(&other)),
        }),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Serializes a params struct to a query parameter map.
///
/// `None` fields are skipped, so only what the caller set is sent.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParams`] if `params` cannot be serialized.
pub fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(ResourceError::InvalidParams)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::OnceLock;

    #[derive(Debug)]
    struct Widget {
        data: Map<String, Value>,
    }

    impl Resource for Widget {
        const NAME: &'static str = "Widget";

        fn attribute_map() -> &'static AttributeMap {
            static ATTRIBUTES: OnceLock<AttributeMap> = OnceLock::new();
            ATTRIBUTES.get_or_init(|| {
                AttributeMap::define(|map| {
                    map.declare_attributes(["label"])?
                        .declare_attribute("id", "widget_id")?
                        .declare_attribute("built", "built_tsz")?;
                    Ok(())
                })
                .expect("Widget attribute declarations are valid")
            })
        }

        fn from_record(data: Map<String, Value>) -> Self {
            Self { data }
        }

        fn raw(&self) -> &Map<String, Value> {
            &self.data
        }
    }

    /// Redeclares `id`, so the later source field is the one read.
    struct Relabeled {
        data: Map<String, Value>,
    }

    impl Resource for Relabeled {
        const NAME: &'static str = "Relabeled";

        fn attribute_map() -> &'static AttributeMap {
            static ATTRIBUTES: OnceLock<AttributeMap> = OnceLock::new();
            ATTRIBUTES.get_or_init(|| {
                AttributeMap::define(|map| {
                    map.declare_attribute("id", "shop_id")?
                        .declare_attribute("title", "title")?
                        .declare_attribute("id", "user_id")?;
                    Ok(())
                })
                .expect("Relabeled attribute declarations are valid")
            })
        }

        fn from_record(data: Map<String, Value>) -> Self {
            Self { data }
        }

        fn raw(&self) -> &Map<String, Value> {
            &self.data
        }
    }

    #[derive(Serialize, Default)]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        offset: Option<u32>,
        fields: Vec<&'static str>,
        active: bool,
    }

    #[test]
    fn test_from_result_wraps_single_object() {
        let widgets = Widget::from_result(json!({ "widget_id": 1 })).unwrap();
        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].u64_attribute("id"), Some(1));
    }

    #[test]
    fn test_from_result_keeps_array_order() {
        let widgets = Widget::from_result(json!([
            { "widget_id": 3 },
            { "widget_id": 1 },
            { "widget_id": 2 }
        ]))
        .unwrap();

        let ids: Vec<Option<u64>> = widgets.iter().map(|w| w.u64_attribute("id")).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_from_result_null_is_empty() {
        assert!(Widget::from_result(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_from_result_rejects_scalars() {
        let error = Widget::from_result(json!("nope")).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::MalformedResult { resource: "Widget", ref message }
                if message.contains("a string")
        ));

        let error = Widget::from_result(json!([{ "widget_id": 1 }, 2])).unwrap_err();
        assert!(error.to_string().contains("element 1 is a number"));
    }

    #[test]
    fn test_typed_attributes_are_checked_not_coerced() {
        let widget = Widget::from_record(
            json!({ "label": 5, "widget_id": "12" })
                .as_object()
                .unwrap()
                .clone(),
        );

        assert_eq!(widget.str_attribute("label"), None);
        assert_eq!(widget.u64_attribute("id"), None);
        assert_eq!(widget.attribute("id"), Some(&json!("12")));
    }

    #[test]
    fn test_time_attribute_reads_epoch_seconds() {
        let widget = Widget::from_record(
            json!({ "built_tsz": 1_318_470_048 })
                .as_object()
                .unwrap()
                .clone(),
        );

        let built = widget.time_attribute("built").unwrap();
        assert_eq!(built.to_rfc3339(), "2011-10-13T01:40:48+00:00");
        assert_eq!(widget.time_attribute("label"), None);
    }

    #[test]
    fn test_attributes_projects_by_local_name() {
        let widget = Widget::from_record(
            json!({ "label": "a", "widget_id": 9, "other": 1 })
                .as_object()
                .unwrap()
                .clone(),
        );

        assert_eq!(
            Value::Object(widget.attributes()),
            json!({ "label": "a", "id": 9 })
        );
    }

    #[test]
    fn test_latest_declaration_wins_for_instances() {
        let records = Relabeled::from_result(json!([
            { "shop_id": 1, "user_id": 2, "title": "a" },
            { "shop_id": 3, "title": "b" }
        ]))
        .unwrap();

        assert_eq!(records[0].attribute("id"), Some(&json!(2)));
        assert_eq!(records[0].u64_attribute("id"), Some(2));
        assert_eq!(records[1].attribute("id"), None);
        assert_eq!(
            Value::Object(records[0].attributes()),
            json!({ "id": 2, "title": "a" })
        );
    }

    #[test]
    fn test_serialize_to_query_skips_unset_fields() {
        let query = serialize_to_query(&Params {
            limit: Some(5),
            offset: None,
            fields: vec!["title", "url"],
            active: true,
        })
        .unwrap();

        assert_eq!(query.get("limit"), Some(&"5".to_string()));
        assert!(!query.contains_key("offset"));
        assert_eq!(query.get("fields"), Some(&"title,url".to_string()));
        assert_eq!(query.get("active"), Some(&"true".to_string()));
    }

    #[test]
    fn test_serialize_to_query_of_unit_is_empty() {
        assert!(serialize_to_query(&()).unwrap().is_empty());
    }
}
