//! Object Utilities
//!
//! Helpers for inspecting dynamic values before they are serialized.
//! Dynamic values are modelled with `serde_json::Value`.

use std::collections::BTreeMap;

use serde_json::Value;

/// Object and value-collection helpers
pub struct ObjectUtils;

impl ObjectUtils {
    /// Project an object or array onto its values
    ///
    /// # Returns
    /// * Object - its values, in key insertion order
    /// * Array - its elements, in index order
    /// * Anything else - an empty vector
    ///
    /// Strings are scalars here and yield nothing; they are not split into
    /// characters.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::ObjectUtils;
    /// use serde_json::json;
    ///
    /// let obj: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
    /// assert_eq!(ObjectUtils::values(&obj), vec![&json!(1), &json!(2)]);
    /// assert!(ObjectUtils::values(&json!(null)).is_empty());
    /// ```
    pub fn values(value: &Value) -> Vec<&Value> {
        match value {
            Value::Object(map) => map.values().collect(),
            Value::Array(items) => items.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Collect the values of a native map in key order
    pub fn map_values<K, V>(map: &BTreeMap<K, V>) -> Vec<&V> {
        map.values().collect()
    }

    /// Check if a value is a plain key/value object
    ///
    /// Arrays, null and scalars are not plain objects.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::ObjectUtils;
    /// use serde_json::json;
    ///
    /// assert!(ObjectUtils::is_plain_object(&json!({})));
    /// assert!(!ObjectUtils::is_plain_object(&json!([])));
    /// ```
    pub fn is_plain_object(value: &Value) -> bool {
        value.is_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_values_of_object() {
        let obj: Value =
            serde_json::from_str(r#"{"z": "first", "x": [1, 2], "y": null}"#).unwrap();
        let values = ObjectUtils::values(&obj);
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], &json!("first"));
        assert_eq!(values[1], &json!([1, 2]));
        assert_eq!(values[2], &Value::Null);
    }

    #[test]
    fn test_values_keep_insertion_order() {
        let mut map = serde_json::Map::new();
        map.insert("second".to_string(), json!(2));
        map.insert("first".to_string(), json!(1));
        let obj = Value::Object(map);
        assert_eq!(ObjectUtils::values(&obj), vec![&json!(2), &json!(1)]);
    }

    #[test]
    fn test_values_of_array() {
        let arr = json!([3, "two", {"one": 1}]);
        let values = ObjectUtils::values(&arr);
        assert_eq!(values, vec![&json!(3), &json!("two"), &json!({"one": 1})]);
    }

    #[test]
    fn test_values_of_scalars() {
        assert!(ObjectUtils::values(&json!(42)).is_empty());
        assert!(ObjectUtils::values(&json!("text")).is_empty());
        assert!(ObjectUtils::values(&json!(true)).is_empty());
        assert!(ObjectUtils::values(&Value::Null).is_empty());
        assert!(ObjectUtils::values(&json!({})).is_empty());
    }

    #[test]
    fn test_map_values() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        assert_eq!(ObjectUtils::map_values(&map), vec![&1, &2]);
    }

    #[test]
    fn test_is_plain_object() {
        assert!(ObjectUtils::is_plain_object(&json!({})));
        assert!(ObjectUtils::is_plain_object(&json!({"nested": {"deep": true}})));
        assert!(!ObjectUtils::is_plain_object(&json!([])));
        assert!(!ObjectUtils::is_plain_object(&Value::Null));
        assert!(!ObjectUtils::is_plain_object(&json!("{}")));
        assert!(!ObjectUtils::is_plain_object(&json!(0)));
        assert!(!ObjectUtils::is_plain_object(&json!(false)));
    }
}
