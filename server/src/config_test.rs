use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};

use super::*;

fn default_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 3000))
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn unset_variables_fall_back_to_site_addr() {
    let settings = Settings::from_lookup(default_addr(), lookup(&[])).unwrap();
    assert_eq!(settings.addr(), default_addr());
}

#[test]
fn port_overrides_default() {
    let settings = Settings::from_lookup(default_addr(), lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(settings.port, 8080);
    assert_eq!(settings.host, default_addr().ip());
}

#[test]
fn host_overrides_default() {
    let settings = Settings::from_lookup(default_addr(), lookup(&[("HOST", "0.0.0.0")])).unwrap();
    assert_eq!(settings.addr(), SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)));
}

#[test]
fn whitespace_and_empty_values_are_ignored() {
    let settings =
        Settings::from_lookup(default_addr(), lookup(&[("HOST", "   "), ("PORT", " 4000 ")])).unwrap();
    assert_eq!(settings.host, default_addr().ip());
    assert_eq!(settings.port, 4000);
}

#[test]
fn invalid_port_is_an_error() {
    let err = Settings::from_lookup(default_addr(), lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Port("http".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT \"http\"");
}

#[test]
fn out_of_range_port_is_an_error() {
    let err = Settings::from_lookup(default_addr(), lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Port("70000".to_owned()));
}

#[test]
fn invalid_host_is_an_error() {
    let err = Settings::from_lookup(default_addr(), lookup(&[("HOST", "not-an-ip")])).unwrap_err();
    assert_eq!(err, ConfigError::Host("not-an-ip".to_owned()));
}
