//! Todoist task tracker adapter.
//!
//! Active tasks come from the REST API and completed history from the Sync
//! API; both use the same bearer token.

mod client;
mod dto;

pub use client::TodoistClient;
