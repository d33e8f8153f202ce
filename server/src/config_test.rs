use super::*;

/// # Safety
/// Only `from_env_reads_overrides_and_defaults` touches these keys; no other
/// test in the crate reads or writes them.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SNAPSHOT_PATH");
        std::env::remove_var("STATIC_DIR");
    }
}

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_numbers() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 3000 ")).unwrap(), 3000);
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    let err = parse_port(Some("http")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn default_config_has_no_snapshot() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.port, 5000);
    assert!(cfg.snapshot_path.is_none());
    assert_eq!(cfg.static_dir, PathBuf::from("static"));
}

#[test]
fn from_env_reads_overrides_and_defaults() {
    unsafe {
        clear_server_env();
    }
    assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig::default());

    unsafe {
        std::env::set_var("PORT", "8123");
        std::env::set_var("SNAPSHOT_PATH", "/data/topics.json");
        std::env::set_var("STATIC_DIR", "/data/static");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8123);
    assert_eq!(cfg.snapshot_path, Some(PathBuf::from("/data/topics.json")));
    assert_eq!(cfg.static_dir, PathBuf::from("/data/static"));

    unsafe {
        std::env::set_var("SNAPSHOT_PATH", "   ");
        std::env::set_var("PORT", "nope");
    }
    assert!(ServerConfig::from_env().is_err());
    unsafe {
        std::env::remove_var("PORT");
    }
    assert!(ServerConfig::from_env().unwrap().snapshot_path.is_none());

    unsafe { clear_server_env() };
}
