use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn host_and_port_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_host_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "   ")])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn malformed_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { var: "PORT", value: "http".to_owned() });
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
