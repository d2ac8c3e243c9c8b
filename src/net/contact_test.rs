use super::*;

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        subject: "Web".to_owned(),
        message: "Hola".to_owned(),
    }
}

#[test]
fn payload_uses_endpoint_field_names() {
    let json: serde_json::Value = serde_json::from_str(&encode(&message()).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "nombre": "Ana", "email": "ana@example.com", "asunto": "Web", "mensaje": "Hola" })
    );
}

#[test]
fn default_config_simulates_delivery() {
    let transport = ContactTransport::from_config(&EffectsConfig::default());
    assert_eq!(transport, ContactTransport::Simulated { delay_ms: 1500 });
}

#[test]
fn configured_endpoint_selects_http() {
    let cfg = EffectsConfig { contact_endpoint: Some(" /api/contacto ".to_owned()), ..EffectsConfig::default() };
    assert_eq!(
        ContactTransport::from_config(&cfg),
        ContactTransport::Http { endpoint: "/api/contacto".to_owned(), timeout_ms: 10_000 }
    );
}

#[test]
fn status_outcome_accepts_only_2xx() {
    assert_eq!(status_outcome(200), Ok(()));
    assert_eq!(status_outcome(204), Ok(()));
    assert_eq!(status_outcome(302), Err(SubmissionError::Rejected { status: 302 }));
    assert_eq!(status_outcome(500), Err(SubmissionError::Rejected { status: 500 }));
}
