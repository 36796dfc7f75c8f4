use lantern::config::Config;
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.files.document_root, PathBuf::from("public"));
    assert_eq!(cfg.files.error_dir, PathBuf::from("errors"));
    assert_eq!(cfg.files.max_request_size, 8192);
}

#[test]
fn test_config_from_yaml() {
    let yaml = r#"
server:
  listen_addr: "127.0.0.1:3000"
files:
  document_root: "/srv/www"
  error_dir: "/srv/errors"
  max_request_size: 4096
"#;

    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:3000");
    assert_eq!(cfg.files.document_root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.files.error_dir, PathBuf::from("/srv/errors"));
    assert_eq!(cfg.files.max_request_size, 4096);
}

#[test]
fn test_config_partial_yaml_uses_defaults() {
    let yaml = r#"
server:
  listen_addr: "0.0.0.0:9000"
"#;

    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.files.document_root, PathBuf::from("public"));
    assert_eq!(cfg.files.max_request_size, 8192);
}

#[test]
fn test_config_invalid_yaml_is_rejected() {
    assert!(Config::from_yaml("server: [not, a, mapping]").is_err());
}

#[test]
fn test_config_set_port_keeps_host() {
    let mut cfg = Config::default();
    cfg.server.set_port(9090);

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9090");

    cfg.server.listen_addr = "127.0.0.1:8080".to_string();
    cfg.server.set_port(80);
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:80");
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
