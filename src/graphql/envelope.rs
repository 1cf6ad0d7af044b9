use serde::Deserialize;
use serde_json::Value;

use crate::error::RemoteError;

/// Response envelope for one executed operation.
///
/// `errors` is always materialized: a response without an error field
/// deserializes to an empty list, so "no errors" is one explicit state
/// instead of an absence check at every call site.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<RemoteError>,
    #[serde(skip_deserializing)]
    pub status: u16,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl OperationResponse {
    /// Pull one named field out of `data`, consuming the envelope.
    pub fn take_field(self, field: &str) -> Option<Value> {
        self.data.and_then(|data| data.get(field).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_errors_field_parses_to_empty_list() {
        let body = json!({"data": {"name": "odyssey"}});
        let resp: OperationResponse = serde_json::from_value(body).unwrap();
        assert!(resp.errors.is_empty());
        assert_eq!(resp.take_field("name"), Some(json!("odyssey")));
    }

    #[test]
    fn error_list_is_preserved() {
        let body = json!({
            "data": null,
            "errors": [{"message": "forbidden", "code": "AUTH"}],
            "extensions": {"traceId": "t-1"}
        });
        let resp: OperationResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].message, "forbidden");
        assert_eq!(resp.extensions, Some(json!({"traceId": "t-1"})));
        assert_eq!(resp.data, None);
    }
}
