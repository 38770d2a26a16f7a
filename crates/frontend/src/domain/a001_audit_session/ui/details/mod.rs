//! Audit Session Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: AuditApi trait and its HTTP implementation
//! - view_model.rs: AuditSessionVm with RwSignals and the session operations
//! - view.rs: Main component AuditSessionDetails

mod model;
mod view;
mod view_model;

pub use view::AuditSessionDetails;
