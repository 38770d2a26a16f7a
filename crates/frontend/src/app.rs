use crate::domain::a001_audit_session::ui::details::AuditSessionDetails;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuditSessionDetails />
    }
}
