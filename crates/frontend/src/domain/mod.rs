pub mod a001_audit_session;
