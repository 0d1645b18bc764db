use serde::{Deserialize, Serialize};

use kernel::interface::payment::PaymentGateway;
use kernel::prelude::entity::{ClientSecret, PaymentIntent, TotalAmount};
use kernel::KernelError;

use crate::backend::BackendClient;

pub struct BackendPaymentGateway {
    client: BackendClient,
}

impl BackendPaymentGateway {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for BackendPaymentGateway {
    async fn create_intent(
        &self,
        total: &TotalAmount,
    ) -> error_stack::Result<PaymentIntent, KernelError> {
        let body = IntentBody {
            amount: total.in_minor_units()?,
        };
        let reply: IntentReply = self
            .client
            .exchange(&["payment", "create-payment-intent"], &body)
            .await?;
        tracing::debug!(amount = body.amount, "payment intent created");
        Ok(PaymentIntent::new(ClientSecret::new(reply.client_secret)))
    }
}

#[derive(Debug, Serialize)]
struct IntentBody {
    amount: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntentReply {
    client_secret: String,
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::TotalAmount;

    use super::{IntentBody, IntentReply};

    #[test]
    fn amount_is_sent_in_cents() {
        let body = IntentBody {
            amount: TotalAmount::new(19_000).in_minor_units().unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"amount":1900000}"#
        );
        let reply: IntentReply =
            serde_json::from_str(r#"{"clientSecret":"pi_123_secret_456"}"#).unwrap();
        assert_eq!(reply.client_secret, "pi_123_secret_456");
    }
}
