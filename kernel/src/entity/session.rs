use destructure::Destructure;
use vodca::{AsRefln, Fromln, References};

use crate::entity::{EmailAddress, FullName, UserId};

/// Bearer token issued by the backend at login.
#[derive(Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Credentials {
    email: EmailAddress,
    password: Password,
}

impl Credentials {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Result of a customer login: the token plus who it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct CustomerSession {
    token: AccessToken,
    user_id: UserId,
    name: FullName,
    email: EmailAddress,
}

impl CustomerSession {
    pub fn new(token: AccessToken, user_id: UserId, name: FullName, email: EmailAddress) -> Self {
        Self {
            token,
            user_id,
            name,
            email,
        }
    }
}
