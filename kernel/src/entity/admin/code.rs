use vodca::{AsRefln, Fromln};

/// Shared secret the backend demands before creating an admin account.
#[derive(Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct AdminCode(String);

impl AdminCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl std::fmt::Debug for AdminCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminCode(***)")
    }
}
