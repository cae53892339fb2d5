//! Business logic and port definitions for Nova.
//!
//! This crate defines the "ports" (repository, credential, and LLM provider
//! traits) that the infrastructure layer implements, the authentication gate,
//! the assistant response dispatcher, and the resource services. It depends
//! only on `nova-types` -- never on `nova-infra` or any database/IO crate.

pub mod auth;
pub mod llm;
pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
