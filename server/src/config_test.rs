use std::collections::HashMap;

use super::*;

fn site_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_site_addr_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[]), site_addr()).unwrap();
    assert_eq!(cfg.bind_addr(), site_addr());
}

#[test]
fn defaults_follow_a_non_default_site_addr() {
    let site = SocketAddr::from(([0, 0, 0, 0], 8081));
    let cfg = ServerConfig::from_lookup(lookup(&[]), site).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8081");
}

#[test]
fn port_and_host_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("HOST", "0.0.0.0")]), site_addr()).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn host_override_keeps_site_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "::1")]), site_addr()).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "[::1]:3000");
}

#[test]
fn port_is_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 4000 ")]), site_addr()).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")]), site_addr()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")]), site_addr()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "not-an-ip")]), site_addr()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(_)));
}
