//! Ticket QR codes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use eventticket_wire::TicketQrPayload;

use crate::error::{Result, StoreError};

/// Minimum rendered edge in pixels
pub const QR_SIZE: u32 = 200;

/// Render the payload as an SVG QR code (EC level M, with quiet zone)
pub fn ticket_svg(payload: &TicketQrPayload, size: u32) -> Result<String> {
    let json = serde_json::to_string(payload)?;
    let code = QrCode::with_error_correction_level(json.as_bytes(), EcLevel::M)
        .map_err(|e| StoreError::Validation(format!("QR: {}", e)))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(true)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// `data:` URL for downloading or embedding an SVG document
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

pub fn download_file_name(ticket_number: &str) -> String {
    format!("ticket-{}.svg", ticket_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TicketQrPayload {
        TicketQrPayload {
            ticket_number: "4b2e9c1a".into(),
            event_title: "Caz Gecesi".into(),
            event_date: "2024-07-12".into(),
            event_time: "21:00:00".into(),
            seat_number: Some("A1, A2".into()),
            price: 1000.0,
            timestamp: "2024-07-01T12:00:00Z".into(),
        }
    }

    #[test]
    fn test_svg_rendering() {
        let svg = ticket_svg(&payload(), QR_SIZE).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_data_url_round_trips_svg() {
        let url = svg_data_url("<svg/>");
        let encoded = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"<svg/>");
        assert_eq!(download_file_name("4b2e"), "ticket-4b2e.svg");
    }
}
