use super::*;
use serde_json::json;
use std::str::FromStr;

#[test]
fn it_should_parse_known_environments() {
    assert!(matches!(
        Environment::from_str("prod"),
        Ok(Environment::Production)
    ));
    assert!(matches!(
        Environment::from_str("dev"),
        Ok(Environment::Develop)
    ));
    assert!(matches!(
        Environment::from_str("local"),
        Ok(Environment::Local)
    ));
}

#[test]
fn it_should_reject_unknown_environments() {
    let err = Environment::from_str("staging").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not convert staging into an environment value"
    );
}

#[test]
fn it_should_display_the_wire_name() {
    assert_eq!(Environment::Production.to_string(), "prod");
    assert_eq!(Environment::Develop.to_string(), "dev");
    assert_eq!(Environment::Local.to_string(), "local");
}

#[test]
fn it_should_round_trip_through_serde() {
    assert_eq!(
        serde_json::to_value(Environment::Production).unwrap(),
        json!("production")
    );
    let env: Environment = serde_json::from_value(json!("develop")).unwrap();
    assert_eq!(env, Environment::Develop);
}
