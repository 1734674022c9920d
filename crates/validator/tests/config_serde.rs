//! Configuration and form model serialization.

use formwarden_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn email_config_serializes() {
    let json = serde_json::to_string(&EmailConfig::default()).unwrap();
    insta::assert_snapshot!(json, @r#"{"required":true,"min_length":null}"#);
}

#[test]
fn partial_config_keeps_defaults() {
    let config: FormConfig = serde_json::from_str(r#"{"email":{"min_length":5}}"#).unwrap();

    assert!(config.email.required);
    assert_eq!(config.email.min_length, Some(5));
    assert_eq!(config.postal, FormConfig::default().postal);
}

#[test]
fn custom_country_table() {
    let config: FormConfig = serde_json::from_value(serde_json::json!({
        "postal": [
            { "country": "at", "pattern": "(A-)?\\d{4}", "message": "Austrian postal codes have 4 digits" }
        ]
    }))
    .unwrap();

    let mut form = config.build().unwrap();
    assert!(matches!(
        form.select_country("ch"),
        Err(FormError::UnknownCountry(code)) if code == "ch"
    ));

    form.select_country("at").unwrap();
    let writes = form.input(Field::Postal, "A-1010").unwrap();
    assert_eq!(writes[0].state, FieldErrorState::Clear);

    let writes = form.input(Field::Postal, "10100").unwrap();
    assert_eq!(writes[0].state.message(), "Austrian postal codes have 4 digits");
}

#[test]
fn duplicate_country_rejected() {
    let mut config = FormConfig::default();
    let first = config.postal[0].clone();
    config.postal.push(first);

    assert!(matches!(
        config.build(),
        Err(FormError::DuplicateCountry(code)) if code == "ch"
    ));
}

#[test]
fn form_state_round_trips_through_json() {
    let state = FormState::new()
        .with(Field::Email, "a@b.co")
        .with(Field::Country, "fr")
        .with(Field::Postal, "F-75012");

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["postal"], "F-75012");
    assert_eq!(json["confirmation"], "");

    let back: FormState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn field_names_parse() {
    let fields: Vec<Field> = serde_json::from_str(r#"["email", "postal", "confirm"]"#).unwrap();
    assert_eq!(fields, [Field::Email, Field::Postal, Field::Confirmation]);

    assert_eq!("password".parse::<Field>().unwrap(), Field::Password);
    assert!(matches!(
        "zip".parse::<Field>(),
        Err(FormError::UnknownField(name)) if name == "zip"
    ));
}
