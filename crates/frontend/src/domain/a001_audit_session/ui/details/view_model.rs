//! Audit Session Details - View Model
//!
//! Every failure is logged and swallowed: the view never shows an error
//! state, nothing is retried and nothing is rolled back.

use super::model::AuditApi;
use contracts::domain::a001_audit_session::aggregate::{
    AnswerRequest, Clause, QueryRequest, SessionId,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AuditSessionVm {
    /// Set once by `start_session`, read-only afterwards
    pub session_id: RwSignal<Option<SessionId>>,
    pub clause: RwSignal<Clause>,
    pub query: RwSignal<String>,
    pub query_response: RwSignal<String>,
    pub answer: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    /// The service reported that no clauses remain
    pub is_complete: RwSignal<bool>,
}

impl AuditSessionVm {
    pub fn new() -> Self {
        Self {
            session_id: RwSignal::new(None),
            clause: RwSignal::new(Clause::default()),
            query: RwSignal::new(String::new()),
            query_response: RwSignal::new(String::new()),
            answer: RwSignal::new(String::new()),
            is_loading: RwSignal::new(true),
            is_complete: RwSignal::new(false),
        }
    }

    /// Session id, unless none was issued or the service sent an empty one
    fn active_session(&self) -> Option<SessionId> {
        self.session_id.get_untracked().filter(|id| !id.is_empty())
    }

    pub fn shows_description(&self) -> bool {
        self.clause.with(|c| c.has_description())
    }

    pub fn shows_attributes(&self) -> bool {
        self.clause.with(|c| c.has_description() && c.has_attributes())
    }

    pub fn shows_query_response(&self) -> bool {
        self.query_response.with(|r| !r.is_empty())
    }

    /// The answer form gives way to a completion notice at the end of the audit
    pub fn shows_answer_form(&self) -> bool {
        !self.is_complete.get()
    }

    /// Mount-time sequence: start a session, then load its first clause.
    pub async fn bootstrap<A: AuditApi>(&self, api: &A) {
        self.start_session(api).await;

        if let Some(id) = self.active_session() {
            self.fetch_next_clause(api, &id).await;
        }
    }

    /// On failure the session stays unset and the view stays loading.
    pub async fn start_session<A: AuditApi>(&self, api: &A) {
        match api.start().await {
            Ok(resp) => {
                log::info!("Audit session started: {}", resp.session_id);
                self.session_id.set(Some(resp.session_id));
            }
            Err(e) => log::error!("Failed to start audit: {}", e),
        }
    }

    pub async fn fetch_next_clause<A: AuditApi>(&self, api: &A, id: &SessionId) {
        self.is_loading.set(true);
        self.query_response.set(String::new());

        match api.next_clause(id).await {
            Ok(Some(clause)) => self.clause.set(clause),
            Ok(None) => {
                log::info!("Audit session {} has no clauses left", id);
                self.is_complete.set(true);
            }
            // previous clause stays on screen
            Err(e) => log::error!("Failed to fetch clause: {}", e),
        }

        self.is_loading.set(false);
    }

    pub async fn submit_query<A: AuditApi>(&self, api: &A) {
        let Some(id) = self.active_session() else {
            return;
        };
        let query = self.query.get_untracked();
        if query.is_empty() {
            return;
        }

        match api.query(&id, &QueryRequest { query }).await {
            Ok(resp) => self.query_response.set(resp.response),
            Err(e) => log::error!("Failed to query agent: {}", e),
        }
    }

    /// Always advances to the next clause, even when the answer was rejected.
    pub async fn submit_answer<A: AuditApi>(&self, api: &A) {
        let Some(id) = self.active_session() else {
            return;
        };
        let answer = self.answer.get_untracked();
        if answer.is_empty() {
            return;
        }

        if let Err(e) = api.answer(&id, &AnswerRequest { answer }).await {
            log::error!("Failed to submit answer: {}", e);
        }

        self.answer.set(String::new());
        self.fetch_next_clause(api, &id).await;
    }
}
