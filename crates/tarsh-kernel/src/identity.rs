//! Host identity for `whoami`.
//!
//! The user name is an OS capability, not VFS state, so it comes from an
//! injected [`IdentityProvider`]. Tests use [`StaticIdentity`].

use std::fmt;

use thiserror::Error;

/// Environment variables consulted, in order, for the login name.
const USER_VARS: [&str; 3] = ["USER", "LOGNAME", "USERNAME"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("cannot determine user name")]
    Unknown,
}

/// Supplies the name of the invoking user.
pub trait IdentityProvider: Send + Sync + fmt::Debug {
    fn user_name(&self) -> Result<String, IdentityError>;
}

/// Reads the login name from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostIdentity;

impl IdentityProvider for HostIdentity {
    fn user_name(&self) -> Result<String, IdentityError> {
        user_from(|var| std::env::var(var).ok())
    }
}

/// First non-empty value among [`USER_VARS`], read through `lookup`.
fn user_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, IdentityError> {
    USER_VARS
        .into_iter()
        .filter_map(lookup)
        .find(|name| !name.is_empty())
        .ok_or(IdentityError::Unknown)
}

/// Always answers with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIdentity(String);

impl StaticIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl IdentityProvider for StaticIdentity {
    fn user_name(&self) -> Result<String, IdentityError> {
        Ok(self.0.clone())
    }
}
