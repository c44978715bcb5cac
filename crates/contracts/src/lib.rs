//! Wire types shared between the dashboard frontend and the REST backend.
//!
//! Records mirror the JSON the server produces for each collection; the
//! `*Dto` types are the create/update payloads and double as modal form
//! state (`id.is_some()` means the form edits an existing record).

pub mod auth;
pub mod dashboard;
pub mod domain;
