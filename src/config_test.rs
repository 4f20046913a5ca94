use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).expect("port"), 3000);
}

#[test]
fn parse_port_defaults_when_blank() {
    assert_eq!(parse_port(Some("  ")).expect("port"), 3000);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some(" 8081 ")).expect("port"), 8081);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("http")).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "http"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 3000 };
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}
