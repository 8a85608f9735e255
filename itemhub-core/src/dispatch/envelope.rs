//! Request and response envelopes of the pseudo-GraphQL endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Loosely typed variables sent alongside a query
pub type Variables = serde_json::Map<String, Value>;

/// Body of a pseudo-GraphQL request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Query text, matched after whitespace normalization
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    /// Operation arguments keyed by variable name
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: Variables,
}

impl QueryRequest {
    /// Request without variables
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Variables::new(),
        }
    }

    /// Add a variable
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// A single entry of the `errors` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    /// Human-readable message
    pub message: String,
}

/// Response envelope: `data` on success, `errors` on failure
///
/// Both fields are omitted from JSON when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Operation result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Errors raised while resolving the operation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<QueryError>,
}

impl QueryResponse {
    /// Successful response carrying `data`
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Failed response carrying a single error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![QueryError {
                message: message.into(),
            }],
        }
    }

    /// Whether the response carries no errors
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Treat an explicit JSON `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_variables() {
        let request: QueryRequest = serde_json::from_value(json!({"query": "query{GetItems}"}))
            .unwrap();
        assert_eq!(request.query, "query{GetItems}");
        assert!(request.variables.is_empty());
    }

    #[test]
    fn test_request_null_fields() {
        let request: QueryRequest =
            serde_json::from_value(json!({"query": null, "variables": null})).unwrap();
        assert_eq!(request, QueryRequest::default());
    }

    #[test]
    fn test_request_rejects_non_string_query() {
        let result: Result<QueryRequest, _> = serde_json::from_value(json!({"query": 5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_omits_empty_fields() {
        let ok = QueryResponse::data(json!({"GetItems": null}));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"data": {"GetItems": null}})
        );

        let failed = QueryResponse::error("ID inválido");
        assert!(!failed.is_success());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"errors": [{"message": "ID inválido"}]})
        );
    }
}
