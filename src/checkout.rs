//! Ticket checkout: order totals, payment intent, gateway confirmation and
//! ticket issuance.
//!
//! The card itself never touches this crate. The gateway SDK runs in the host
//! page and is reached through `PaymentGateway`.

use async_trait::async_trait;
use serde::Deserialize;

use eventticket_wire::{
    ConfirmPaymentRequest, CreateIntentRequest, Event, PaymentConfirmation, TicketQrPayload,
};

use crate::api::ApiClient;
use crate::error::{messages, Result, StoreError};
use crate::seating::{seat_labels, Seat};

/// What is being bought: a quantity at the event price, or specific seats
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub event_id: i64,
    pub unit_price: f64,
    quantity: u32,
    seats: Vec<Seat>,
}

impl Order {
    pub fn new(event_id: i64, unit_price: f64) -> Self {
        Self {
            event_id,
            unit_price,
            quantity: 1,
            seats: Vec::new(),
        }
    }

    pub fn quantity(&self) -> u32 {
        if self.seats.is_empty() {
            self.quantity
        } else {
            self.seats.len() as u32
        }
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never goes below one ticket
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// Replace the chosen seats; an empty list returns to quantity mode
    pub fn set_seats(&mut self, seats: Vec<Seat>) {
        self.seats = seats;
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn has_seats(&self) -> bool {
        !self.seats.is_empty()
    }

    /// Seat ids for the ticket, e.g. `A1, A2`
    pub fn seat_number(&self) -> Option<String> {
        if self.seats.is_empty() {
            None
        } else {
            Some(seat_labels(&self.seats))
        }
    }

    /// Price of the selection: seat prices when seats were picked,
    /// otherwise the event price per ticket
    pub fn total(&self) -> f64 {
        if self.seats.is_empty() {
            self.unit_price * self.quantity as f64
        } else {
            self.seats.iter().map(|s| s.price as f64).sum()
        }
    }

    /// What the backend charges: event price × ticket count, whatever seats
    /// were picked
    pub fn charge(&self) -> f64 {
        self.unit_price * self.quantity() as f64
    }

    /// QR payload for the ticket this order just produced
    pub fn ticket_payload(
        &self,
        event: &Event,
        receipt: &Receipt,
        timestamp: String,
    ) -> TicketQrPayload {
        TicketQrPayload {
            ticket_number: receipt.confirmation.ticket_number.clone(),
            event_title: event.title.clone(),
            event_date: event.date.clone(),
            event_time: event.time.clone(),
            seat_number: self.seat_number(),
            price: receipt.amount,
            timestamp,
        }
    }
}

/// A completed checkout
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub confirmation: PaymentConfirmation,
    /// Amount charged on the payment intent, in TRY
    pub amount: f64,
}

/// Card the visitor picked in the payment form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardChoice {
    /// A card saved on the gateway customer (payment method id)
    Saved(String),
    /// The card entry field mounted by the gateway SDK
    NewCard,
}

impl CardChoice {
    /// `""` selects the new-card field, anything else is a saved card id
    pub fn from_form_value(value: &str) -> Self {
        if value.is_empty() {
            Self::NewCard
        } else {
            Self::Saved(value.to_string())
        }
    }

    pub fn form_value(&self) -> &str {
        match self {
            Self::Saved(id) => id,
            Self::NewCard => "",
        }
    }
}

/// Result of confirming a payment intent with the gateway
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GatewayOutcome {
    /// Payment intent id (`pi_...`)
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    /// Gateway error message, when the payment was refused
    #[serde(default)]
    pub error: Option<String>,
}

impl GatewayOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none() && self.status == "succeeded"
    }
}

#[async_trait(?Send)]
pub trait PaymentGateway {
    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        card: &CardChoice,
    ) -> Result<GatewayOutcome>;
}

/// Run a full checkout and return the issued ticket with the charged amount.
pub async fn checkout<G: PaymentGateway + ?Sized>(
    api: &ApiClient,
    gateway: &G,
    order: &Order,
    card: &CardChoice,
) -> Result<Receipt> {
    let quantity = order.quantity();
    let intent = api
        .create_payment_intent(&CreateIntentRequest {
            event_id: order.event_id,
            quantity,
        })
        .await?;
    tracing::debug!(
        "Payment intent for event {}: {} {}",
        order.event_id,
        intent.amount,
        intent.currency
    );
    // Intent amounts are in kuruş; older backends omit them
    let amount = if intent.amount > 0 {
        intent.amount as f64 / 100.0
    } else {
        order.charge()
    };

    let outcome = gateway
        .confirm_card_payment(&intent.client_secret, card)
        .await?;
    if let Some(message) = outcome.error.clone().filter(|m| !m.is_empty()) {
        return Err(StoreError::Gateway(message));
    }
    if !outcome.succeeded() {
        tracing::warn!("Gateway returned status {:?}", outcome.status);
        return Err(StoreError::Gateway(messages::PAYMENT_FAILED.to_string()));
    }

    let confirmation = api
        .confirm_payment(&ConfirmPaymentRequest {
            payment_intent_id: outcome.id,
            event_id: order.event_id,
            quantity,
        })
        .await?;
    if !confirmation.success {
        let message = Some(confirmation.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| messages::PAYMENT_FAILED.to_string());
        return Err(StoreError::Gateway(message));
    }

    tracing::info!("Ticket {} issued", confirmation.ticket_number);
    Ok(Receipt {
        confirmation,
        amount,
    })
}

/// Gateway for hosts without the payment SDK (native SSR)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGateway;

#[async_trait(?Send)]
impl PaymentGateway for UnavailableGateway {
    async fn confirm_card_payment(
        &self,
        _client_secret: &str,
        _card: &CardChoice,
    ) -> Result<GatewayOutcome> {
        Err(StoreError::Gateway(
            "Ödeme sistemi bu ortamda kullanılamıyor.".to_string(),
        ))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserGateway;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    /// Name of the host-page function wrapping the gateway SDK.
    ///
    /// `eventticketConfirmPayment(clientSecret, paymentMethodId | null)` must
    /// return a promise of `{ id, status, error }`.
    pub const CONFIRM_FN: &str = "eventticketConfirmPayment";

    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserGateway;

    #[async_trait(?Send)]
    impl PaymentGateway for BrowserGateway {
        async fn confirm_card_payment(
            &self,
            client_secret: &str,
            card: &CardChoice,
        ) -> Result<GatewayOutcome> {
            let window = web_sys::window()
                .ok_or_else(|| StoreError::Gateway("no window".to_string()))?;
            let confirm: js_sys::Function =
                js_sys::Reflect::get(&window, &JsValue::from_str(CONFIRM_FN))
                    .ok()
                    .and_then(|f| f.dyn_into().ok())
                    .ok_or_else(|| {
                        tracing::warn!("{} is not defined on window", CONFIRM_FN);
                        StoreError::Gateway(messages::PAYMENT_FAILED.to_string())
                    })?;

            let method = match card {
                CardChoice::Saved(id) => JsValue::from_str(id),
                CardChoice::NewCard => JsValue::NULL,
            };
            let promise: js_sys::Promise = confirm
                .call2(&window, &JsValue::from_str(client_secret), &method)
                .map_err(|e| StoreError::Gateway(format!("{:?}", e)))?
                .dyn_into()
                .map_err(|_| StoreError::Gateway(format!("{} did not return a promise", CONFIRM_FN)))?;

            let value = JsFuture::from(promise)
                .await
                .map_err(|e| StoreError::Gateway(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;
            serde_wasm_bindgen::from_value(value).map_err(|e| StoreError::Decode(e.to_string()))
        }
    }
}

/// The gateway for the current build target
pub fn default_gateway() -> std::rc::Rc<dyn PaymentGateway> {
    #[cfg(target_arch = "wasm32")]
    {
        std::rc::Rc::new(BrowserGateway)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::rc::Rc::new(UnavailableGateway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{client, MockTransport};
    use crate::seating::SeatCategory;
    use std::cell::RefCell;
    use tokio_test::block_on;

    struct ScriptedGateway {
        outcome: GatewayOutcome,
        calls: RefCell<Vec<(String, CardChoice)>>,
    }

    impl ScriptedGateway {
        fn new(id: &str, status: &str, error: Option<&str>) -> Self {
            Self {
                outcome: GatewayOutcome {
                    id: id.to_string(),
                    status: status.to_string(),
                    error: error.map(str::to_string),
                },
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PaymentGateway for ScriptedGateway {
        async fn confirm_card_payment(
            &self,
            client_secret: &str,
            card: &CardChoice,
        ) -> Result<GatewayOutcome> {
            self.calls
                .borrow_mut()
                .push((client_secret.to_string(), card.clone()));
            Ok(self.outcome.clone())
        }
    }

    fn seat(id: &str, price: u32) -> Seat {
        Seat {
            id: id.to_string(),
            row: id.chars().next().unwrap(),
            number: 1,
            available: true,
            selected: true,
            price,
            category: SeatCategory::Vip,
        }
    }

    #[test]
    fn test_order_quantity_floor() {
        let mut order = Order::new(1, 150.0);
        order.decrement();
        assert_eq!(order.quantity(), 1);
        order.increment();
        order.increment();
        assert_eq!(order.quantity(), 3);
        assert_eq!(order.total(), 450.0);
    }

    #[test]
    fn test_order_with_seats_uses_seat_prices() {
        let mut order = Order::new(1, 150.0);
        order.set_seats(vec![seat("A1", 500), seat("D4", 300)]);
        assert_eq!(order.quantity(), 2);
        assert_eq!(order.total(), 800.0);
        assert_eq!(order.seat_number().as_deref(), Some("A1, D4"));

        order.set_seats(Vec::new());
        assert_eq!(order.quantity(), 1);
        assert_eq!(order.seat_number(), None);
    }

    #[test]
    fn test_seat_order_ticket_records_charged_amount() {
        let event: Event = serde_json::from_str(
            r#"{"id":4,"title":"Caz Gecesi","date":"2024-07-15","time":"20:00:00","location":"Harbiye","price":"150.00"}"#,
        )
        .unwrap();
        let transport = MockTransport::new();
        transport.respond(200, r#"{"client_secret":"s","amount":30000,"currency":"try"}"#);
        transport.respond(200, r#"{"success":true,"ticket_id":9,"ticket_number":"T-9"}"#);
        let gateway = ScriptedGateway::new("pi", "succeeded", None);

        let mut order = Order::new(4, 150.0);
        order.set_seats(vec![seat("A1", 500), seat("A2", 500)]);
        assert_eq!(order.total(), 1000.0);
        assert_eq!(order.charge(), 300.0);

        let receipt = block_on(checkout(&client(&transport), &gateway, &order, &CardChoice::NewCard)).unwrap();
        assert_eq!(receipt.amount, 300.0);

        let payload = order.ticket_payload(&event, &receipt, "2024-07-01T10:00:00Z".into());
        assert_eq!(payload.ticket_number, "T-9");
        assert_eq!(payload.event_title, "Caz Gecesi");
        assert_eq!(payload.seat_number.as_deref(), Some("A1, A2"));
        assert_eq!(payload.price, 300.0);
        assert_eq!(
            transport.last_request().unwrap().body.as_deref(),
            Some(r#"{"payment_intent_id":"pi","event_id":4,"quantity":2}"#)
        );
    }

    #[test]
    fn test_charge_falls_back_to_order_without_intent_amount() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"client_secret":"s"}"#);
        transport.respond(200, r#"{"success":true,"ticket_number":"T-1"}"#);
        let gateway = ScriptedGateway::new("pi", "succeeded", None);
        let mut order = Order::new(4, 150.0);
        order.increment();

        let receipt = block_on(checkout(&client(&transport), &gateway, &order, &CardChoice::NewCard)).unwrap();
        assert_eq!(receipt.amount, 300.0);
    }

    #[test]
    fn test_rejected_confirmation_is_a_gateway_error() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"client_secret":"s","amount":1000}"#);
        transport.respond(200, r#"{"success":false,"message":"Ödeme doğrulanamadı"}"#);
        let gateway = ScriptedGateway::new("pi", "succeeded", None);

        let err = block_on(checkout(&client(&transport), &gateway, &Order::new(1, 10.0), &CardChoice::NewCard))
            .unwrap_err();
        assert_eq!(err, StoreError::Gateway("Ödeme doğrulanamadı".into()));
    }

    #[test]
    fn test_card_choice_form_values() {
        assert_eq!(CardChoice::from_form_value(""), CardChoice::NewCard);
        assert_eq!(
            CardChoice::from_form_value("pm_1"),
            CardChoice::Saved("pm_1".into())
        );
        assert_eq!(CardChoice::Saved("pm_1".into()).form_value(), "pm_1");
    }

    #[test]
    fn test_successful_checkout() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"client_secret":"pi_1_secret_x","amount":30000,"currency":"try"}"#,
        );
        transport.respond(
            200,
            r#"{"success":true,"ticket_id":9,"ticket_number":"T-9","message":"Bilet başarıyla oluşturuldu"}"#,
        );
        let gateway = ScriptedGateway::new("pi_1", "succeeded", None);
        let mut order = Order::new(4, 150.0);
        order.increment();

        let receipt = block_on(checkout(
            &client(&transport).with_token(Some("tok".into())),
            &gateway,
            &order,
            &CardChoice::NewCard,
        ))
        .unwrap();
        assert_eq!(receipt.confirmation.ticket_number, "T-9");
        assert_eq!(receipt.amount, 300.0);

        assert_eq!(
            gateway.calls.borrow()[0],
            ("pi_1_secret_x".to_string(), CardChoice::NewCard)
        );
        let confirm_req = transport.last_request().unwrap();
        assert!(confirm_req.url.ends_with("/payment/confirm/"));
        assert_eq!(
            confirm_req.body.as_deref(),
            Some(r#"{"payment_intent_id":"pi_1","event_id":4,"quantity":2}"#)
        );
        assert_eq!(confirm_req.header_value("Authorization"), Some("Token tok"));
    }

    #[test]
    fn test_gateway_refusal_shows_gateway_message() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"client_secret":"s","amount":1,"currency":"try"}"#);
        let gateway = ScriptedGateway::new("", "", Some("Kartınız reddedildi."));

        let err = block_on(checkout(
            &client(&transport),
            &gateway,
            &Order::new(1, 10.0),
            &CardChoice::Saved("pm_1".into()),
        ))
        .unwrap_err();
        assert_eq!(
            err.user_message(messages::PAYMENT_FAILED),
            "Kartınız reddedildi."
        );
        // no ticket confirmation attempted
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_insufficient_tickets_rejected_by_server() {
        let transport = MockTransport::new();
        transport.respond(400, r#"{"error":"Yeterli bilet yok"}"#);
        let gateway = ScriptedGateway::new("pi", "succeeded", None);
        let err = block_on(checkout(
            &client(&transport),
            &gateway,
            &Order::new(1, 10.0),
            &CardChoice::NewCard,
        ))
        .unwrap_err();
        assert_eq!(err.user_message(messages::PAYMENT_FAILED), "Yeterli bilet yok");
        assert!(gateway.calls.borrow().is_empty());
    }

    #[test]
    fn test_unsucceeded_status_uses_default_message() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"client_secret":"s"}"#);
        let gateway = ScriptedGateway::new("pi", "requires_action", None);
        let err = block_on(checkout(
            &client(&transport),
            &gateway,
            &Order::new(1, 10.0),
            &CardChoice::NewCard,
        ))
        .unwrap_err();
        assert_eq!(
            err.user_message("x"),
            "Ödeme sırasında bir hata oluştu"
        );
    }

    #[test]
    fn test_unavailable_gateway() {
        let res = block_on(UnavailableGateway.confirm_card_payment("s", &CardChoice::NewCard));
        assert!(matches!(res, Err(StoreError::Gateway(_))));
    }
}
