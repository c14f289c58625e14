//! Payment endpoint payloads (`payment/*`).

use serde::{Deserialize, Serialize};

/// Body of `POST payment/create-intent/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateIntentRequest {
    pub event_id: i64,
    pub quantity: u32,
}

/// A payment intent created by the backend on the gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntent {
    /// Secret handed to the gateway SDK to confirm the payment
    pub client_secret: String,
    /// Amount in minor units (kuruş)
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
}

/// Body of `POST payment/confirm/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
    pub event_id: i64,
    pub quantity: u32,
}

/// Response of `POST payment/confirm/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfirmation {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub ticket_id: i64,
    #[serde(default)]
    pub ticket_number: String,
    #[serde(default)]
    pub message: String,
}

/// Response of `GET payment/methods/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethods {
    #[serde(default)]
    pub payment_methods: Vec<SavedCard>,
    #[serde(default)]
    pub customer_id: String,
}

/// A card saved on the gateway customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedCard {
    pub id: String,
    pub card: CardDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardDetails {
    pub brand: String,
    pub last4: String,
}

impl SavedCard {
    /// Masked label, e.g. `**** **** **** 4242 (visa)`
    pub fn label(&self) -> String {
        format!("**** **** **** {} ({})", self.card.last4, self.card.brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_methods_from_gateway_objects() {
        // Gateway payment-method objects carry many more fields than we use
        let json = r#"{
            "payment_methods": [
                {"id": "pm_1", "object": "payment_method", "type": "card",
                 "card": {"brand": "visa", "last4": "4242", "exp_month": 12, "exp_year": 2030}}
            ],
            "customer_id": "cus_9"
        }"#;
        let methods: PaymentMethods = serde_json::from_str(json).unwrap();
        assert_eq!(methods.payment_methods.len(), 1);
        assert_eq!(
            methods.payment_methods[0].label(),
            "**** **** **** 4242 (visa)"
        );
    }

    #[test]
    fn test_confirmation_parsing() {
        let json = r#"{"success":true,"ticket_id":5,"ticket_number":"abc-123","message":"Bilet başarıyla oluşturuldu"}"#;
        let conf: PaymentConfirmation = serde_json::from_str(json).unwrap();
        assert!(conf.success);
        assert_eq!(conf.ticket_number, "abc-123");
    }
}
