//! Audit Session Details - Model (API functions)

use crate::shared::api_utils::api_base;
use async_trait::async_trait;
use contracts::domain::a001_audit_session::aggregate::{
    answer_path, next_path, query_path, start_path, AnswerRequest, NextClauseResponse,
    QueryRequest, QueryResponse, SessionId, StartAuditResponse,
};
use gloo_net::http::{Request, Response};

/// Calls against the external audit service
#[async_trait(?Send)]
pub trait AuditApi {
    /// POST /audit/start
    async fn start(&self) -> Result<StartAuditResponse, String>;

    /// GET /audit/{id}/next; `Ok(None)` once no clauses remain
    async fn next_clause(&self, id: &SessionId) -> Result<NextClauseResponse, String>;

    /// POST /audit/{id}/query
    async fn query(&self, id: &SessionId, request: &QueryRequest)
        -> Result<QueryResponse, String>;

    /// POST /audit/{id}/answer. The response body is ignored.
    async fn answer(&self, id: &SessionId, request: &AnswerRequest) -> Result<(), String>;
}

/// `AuditApi` over the browser fetch API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAuditApi {
    base: String,
}

impl HttpAuditApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for HttpAuditApi {
    fn default() -> Self {
        Self::new(api_base())
    }
}

fn check_status(response: Response) -> Result<Response, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(response)
}

#[async_trait(?Send)]
impl AuditApi for HttpAuditApi {
    async fn start(&self) -> Result<StartAuditResponse, String> {
        let url = self.url(&start_path());
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        let response = check_status(response)?;

        response
            .json::<StartAuditResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn next_clause(&self, id: &SessionId) -> Result<NextClauseResponse, String> {
        let url = self.url(&next_path(id));
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        let response = check_status(response)?;

        // body is `null` when the audit is finished
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;
        serde_json::from_str::<NextClauseResponse>(&text)
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn query(
        &self,
        id: &SessionId,
        request: &QueryRequest,
    ) -> Result<QueryResponse, String> {
        let url = self.url(&query_path(id));
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        let response = check_status(response)?;

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn answer(&self, id: &SessionId, request: &AnswerRequest) -> Result<(), String> {
        let url = self.url(&answer_path(id));
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        check_status(response)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = HttpAuditApi::new("http://localhost:8000");
        let id = SessionId::new("abc123");
        assert_eq!(
            api.url(&answer_path(&id)),
            "http://localhost:8000/audit/abc123/answer"
        );
    }
}
