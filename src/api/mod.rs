//! Private HTTP API of the tutoring service
//!
//! `Transport` performs the raw authenticated GET; `ApiClient` turns the
//! JSON envelope into typed results.

mod client;
mod transport;
mod types;

pub(crate) use client::ApiClient;
pub(crate) use transport::{Transport, UreqTransport};
pub(crate) use types::RawChat;

#[cfg(test)]
pub(crate) use transport::fake::FakeTransport;
