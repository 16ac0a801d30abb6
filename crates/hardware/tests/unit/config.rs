//! Configuration defaults and JSON deserialization.

use bytevm_core::Config;

#[test]
fn default_period_is_a_quarter_second() {
    assert_eq!(Config::default().clock.interval_ms, 250);
}

#[test]
fn default_run_does_not_trace() {
    assert!(!Config::default().general.trace_instructions);
}

#[test]
fn json_overrides_only_what_it_names() {
    let config = Config::from_json(r#"{ "clock": { "interval_ms": 0 } }"#).expect("valid json");
    assert_eq!(config.clock.interval_ms, 0);
    assert!(!config.general.trace_instructions);
}

#[test]
fn json_can_enable_tracing() {
    let config =
        Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).expect("valid json");
    assert!(config.general.trace_instructions);
    assert_eq!(config.clock.interval_ms, 250);
}

#[test]
fn json_rejects_malformed_documents() {
    assert!(Config::from_json("{").is_err());
}
