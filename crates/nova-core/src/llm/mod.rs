//! Assistant reply generation.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: object-safe wrapper for dynamic dispatch
//! - `AssistantDispatcher`: ordered provider attempts with local fallback
//! - `patterns`: the deterministic local responder

pub mod box_provider;
pub mod dispatcher;
pub mod patterns;
pub mod provider;
