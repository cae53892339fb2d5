//! Infrastructure layer for Nova.
//!
//! Contains implementations of the ports defined in `nova-core`:
//! SQLite storage, JWT credentials, bcrypt password hashing, and the
//! Groq and Gemini chat-completion providers.

pub mod crypto;
pub mod llm;
pub mod sqlite;
