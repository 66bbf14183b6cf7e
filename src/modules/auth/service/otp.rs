use crate::types::OtpConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

pub enum SendError {
    DeliveryFailed,
}

pub enum Verification {
    Approved,
    Rejected,
}

impl Verification {
    /// The provider reports "pending" until the right code is checked and
    /// "canceled" once a verification lapses; only the literal "approved"
    /// status counts as success.
    pub fn from_status(status: &str) -> Self {
        match status {
            "approved" => Self::Approved,
            _ => Self::Rejected,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// The core holds no code, no expiry and no retry counter; all of that state
/// lives with the delivery provider.
#[async_trait]
pub trait OtpGateway: Send + Sync {
    async fn send(&self, phone_number: &str) -> Result<(), SendError>;
    async fn verify(&self, phone_number: &str, code: &str) -> Result<Verification, SendError>;
}

#[derive(Deserialize)]
struct VerificationEndpointPayload {
    status: String,
}

pub struct TwilioVerify {
    config: OtpConfig,
    client: Client,
}

impl TwilioVerify {
    pub fn new(config: OtpConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn verifications_url(&self) -> String {
        format!(
            "https://verify.twilio.com/v2/Services/{}/Verifications",
            self.config.verify_service_id
        )
    }

    fn verification_check_url(&self) -> String {
        format!(
            "https://verify.twilio.com/v2/Services/{}/VerificationCheck",
            self.config.verify_service_id
        )
    }

    async fn post_form(
        &self,
        url: String,
        form_body: HashMap<&str, String>,
    ) -> Result<VerificationEndpointPayload, SendError> {
        let res = self
            .client
            .post(url)
            .basic_auth(
                self.config.account_sid.clone(),
                Some(self.config.auth_token.clone()),
            )
            .form(&form_body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Request to verification provider failed: {}", err);
                SendError::DeliveryFailed
            })?;

        let status = res.status();
        if !status.is_success() {
            let error_body = res.text().await.unwrap_or_default();
            tracing::error!(
                "Verification provider returned an error ({}): {}",
                status,
                error_body
            );
            return Err(SendError::DeliveryFailed);
        }

        res.json::<VerificationEndpointPayload>()
            .await
            .map_err(|err| {
                tracing::error!("Failed to deserialize verification response: {}", err);
                SendError::DeliveryFailed
            })
    }
}

#[async_trait]
impl OtpGateway for TwilioVerify {
    async fn send(&self, phone_number: &str) -> Result<(), SendError> {
        let mut form_body: HashMap<&str, String> = HashMap::new();
        form_body.insert("To", phone_number.to_string());
        form_body.insert("Channel", "sms".to_string());

        self.post_form(self.verifications_url(), form_body)
            .await
            .map(|_| ())
    }

    async fn verify(&self, phone_number: &str, code: &str) -> Result<Verification, SendError> {
        let mut form_body: HashMap<&str, String> = HashMap::new();
        form_body.insert("To", phone_number.to_string());
        form_body.insert("Code", code.to_string());

        self.post_form(self.verification_check_url(), form_body)
            .await
            .map(|payload| Verification::from_status(&payload.status))
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, PartialEq, Debug)]
    pub enum GatewayCall {
        Send(String),
        Verify(String, String),
    }

    /// In-memory stand-in for the delivery provider, approving a single
    /// configured code.
    pub struct FakeOtpGateway {
        pub accepted_code: Option<String>,
        pub calls: Mutex<Vec<GatewayCall>>,
    }

    impl FakeOtpGateway {
        pub fn approving(code: &str) -> Self {
            Self {
                accepted_code: Some(code.to_string()),
                calls: Mutex::new(vec![]),
            }
        }

        pub fn rejecting() -> Self {
            Self {
                accepted_code: None,
                calls: Mutex::new(vec![]),
            }
        }

        pub fn calls(&self) -> Vec<GatewayCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OtpGateway for FakeOtpGateway {
        async fn send(&self, phone_number: &str) -> Result<(), SendError> {
            self.calls
                .lock()
                .unwrap()
                .push(GatewayCall::Send(phone_number.to_string()));
            Ok(())
        }

        async fn verify(&self, phone_number: &str, code: &str) -> Result<Verification, SendError> {
            self.calls
                .lock()
                .unwrap()
                .push(GatewayCall::Verify(phone_number.to_string(), code.to_string()));

            Ok(match &self.accepted_code {
                Some(accepted) if accepted == code => Verification::Approved,
                _ => Verification::Rejected,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeOtpGateway, GatewayCall};
    use super::*;

    #[test]
    fn only_the_literal_approved_status_is_approved() {
        assert!(Verification::from_status("approved").is_approved());
        assert!(!Verification::from_status("pending").is_approved());
        assert!(!Verification::from_status("canceled").is_approved());
        assert!(!Verification::from_status("").is_approved());
    }

    #[tokio::test]
    async fn fake_gateway_records_calls_and_checks_the_code() {
        let gateway = FakeOtpGateway::approving("123456");

        gateway.send("9000000001").await.ok().unwrap();
        assert!(gateway
            .verify("9000000001", "123456")
            .await
            .ok()
            .unwrap()
            .is_approved());
        assert!(!gateway
            .verify("9000000001", "000000")
            .await
            .ok()
            .unwrap()
            .is_approved());

        assert_eq!(
            gateway.calls()[0],
            GatewayCall::Send("9000000001".to_string())
        );
    }
}
