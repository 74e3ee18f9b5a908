#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use recpulse_core::RecPulseError;
use recpulse_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
recommend:
  failure_ratio: 0.5 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RecPulseError::Config(_)));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.recommend.min_delay_ms, 100);
    assert_eq!(cfg.recommend.max_delay_ms, 1000);
    assert_eq!(cfg.recommend.failure_rate, 0.2);
    assert_eq!(cfg.recommend.posts, vec!["post1", "post2"]);
}

#[test]
fn rejects_unsupported_version() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RecPulseError::Config(_)));
}

#[test]
fn rejects_out_of_range_failure_rate() {
    let bad = r#"
version: 1
recommend:
  failure_rate: 1.5
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RecPulseError::Config(_)));
}

#[test]
fn rejects_inverted_delay_range() {
    let bad = r#"
version: 1
recommend:
  min_delay_ms: 500
  max_delay_ms: 100
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RecPulseError::Config(_)));
}

#[test]
fn rejects_unparseable_listen_addr() {
    let bad = r#"
version: 1
gateway:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RecPulseError::Config(_)));
}
