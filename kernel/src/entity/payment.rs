use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

/// Handle the payment form confirms against the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    client_secret: ClientSecret,
}

impl PaymentIntent {
    pub fn new(client_secret: ClientSecret) -> Self {
        Self { client_secret }
    }

    pub fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }
}
