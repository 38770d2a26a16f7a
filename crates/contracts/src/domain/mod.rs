//! Wire contracts shared with the external audit service

pub mod a001_audit_session;
