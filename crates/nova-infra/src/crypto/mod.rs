//! Credential cryptography for Nova.
//!
//! - `jwt`: HS256 bearer credential signing and verification
//! - `password`: bcrypt password hashing

pub mod jwt;
pub mod password;
