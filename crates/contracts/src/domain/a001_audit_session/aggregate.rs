use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque session identifier issued by the audit service.
///
/// The service may send it as a JSON string or a JSON number; both are kept
/// in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form safe to interpolate into a URL path segment
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSessionId {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match RawSessionId::deserialize(deserializer)? {
            RawSessionId::Text(s) => s,
            RawSessionId::Integer(n) => n.to_string(),
            RawSessionId::Unsigned(n) => n.to_string(),
            RawSessionId::Float(n) => n.to_string(),
        };
        Ok(SessionId(value))
    }
}

/// Body of the POST /audit/start response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartAuditResponse {
    pub session_id: SessionId,
}

/// One compliance checklist item.
///
/// Missing or `null` fields read as empty, so a sparse response never fails
/// to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<String>,
}

impl Clause {
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// Body of GET /audit/{id}/next. `None` means the audit has no clauses left.
pub type NextClauseResponse = Option<Clause>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Paths, relative to the service base URL

pub fn start_path() -> String {
    "/audit/start".to_string()
}

pub fn next_path(id: &SessionId) -> String {
    format!("/audit/{}/next", id.path_segment())
}

pub fn query_path(id: &SessionId) -> String {
    format!("/audit/{}/query", id.path_segment())
}

pub fn answer_path(id: &SessionId) -> String {
    format!("/audit/{}/answer", id.path_segment())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_from_string_and_number() {
        let s: StartAuditResponse = serde_json::from_str(r#"{"session_id":"abc123"}"#).unwrap();
        assert_eq!(s.session_id.as_str(), "abc123");

        let n: StartAuditResponse = serde_json::from_str(r#"{"session_id":42}"#).unwrap();
        assert_eq!(n.session_id.as_str(), "42");
    }

    #[test]
    fn test_session_id_missing_is_error() {
        let r: Result<StartAuditResponse, _> = serde_json::from_str("{}");
        assert!(r.is_err());
    }

    #[test]
    fn test_clause_defaults_when_fields_absent() {
        let c: Clause = serde_json::from_str(r#"{"question":"Is access reviewed quarterly?"}"#).unwrap();
        assert_eq!(c.question, "Is access reviewed quarterly?");
        assert_eq!(c.description, "");
        assert!(c.attributes.is_empty());
        assert!(!c.has_description());
        assert!(!c.has_attributes());
    }

    #[test]
    fn test_clause_null_fields_read_as_empty() {
        let c: Clause =
            serde_json::from_str(r#"{"question":"Q","description":null,"attributes":null}"#)
                .unwrap();
        assert_eq!(c.description, "");
        assert!(c.attributes.is_empty());
    }

    #[test]
    fn test_clause_keeps_attribute_order() {
        let c: Clause = serde_json::from_str(
            r#"{"question":"Q","description":"A.5.15 Access control","attributes":["Preventive","Confidentiality"]}"#,
        )
        .unwrap();
        assert!(c.has_description());
        assert_eq!(c.attributes, vec!["Preventive", "Confidentiality"]);
    }

    #[test]
    fn test_next_clause_null_means_complete() {
        let r: NextClauseResponse = serde_json::from_str("null").unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn test_request_bodies() {
        let q = serde_json::to_value(QueryRequest { query: "What is A.5?".into() }).unwrap();
        assert_eq!(q, serde_json::json!({ "query": "What is A.5?" }));

        let a = serde_json::to_value(AnswerRequest { answer: "Yes".into() }).unwrap();
        assert_eq!(a, serde_json::json!({ "answer": "Yes" }));
    }

    #[test]
    fn test_paths() {
        let id = SessionId::new("abc123");
        assert_eq!(start_path(), "/audit/start");
        assert_eq!(next_path(&id), "/audit/abc123/next");
        assert_eq!(query_path(&id), "/audit/abc123/query");
        assert_eq!(answer_path(&id), "/audit/abc123/answer");
    }

    #[test]
    fn test_paths_encode_session_id() {
        let id = SessionId::new("a b/c");
        assert_eq!(next_path(&id), "/audit/a%20b%2Fc/next");
        assert_eq!(id.to_string(), "a b/c");
    }
}
