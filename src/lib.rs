//! Review console for citizen cybercrime complaint reports.
//!
//! Fetches complaint records from a remote reporting API, resolves the
//! evidence attachments referenced by each record into fetchable URLs, and
//! serves an administrative dashboard for browsing them.

pub mod client;
pub mod config;
pub mod documents;
pub mod models;
pub mod server;

pub use client::{ReportsClient, ReportsError};
pub use config::{load_settings, Config, Settings};
pub use documents::{is_image, parse_documents, resolve_attachments, resolve_document_url};
pub use models::{Complaint, ComplaintStatus, DocumentsField, StatusSummary};
