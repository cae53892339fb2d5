//! Credential ports and the authentication gate.

pub mod credential;
pub mod gate;
