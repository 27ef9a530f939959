use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
    let vars: HashMap<&'static str, String> = pairs.iter().map(|(k, v)| (*k, (*v).to_owned())).collect();
    move |var| vars.get(var).cloned()
}

#[test]
fn defaults_to_postgres_with_database_url() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/mergington")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(
        cfg.store,
        StoreBackend::Postgres {
            database_url: "postgres://localhost/mergington".into(),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    );
    assert!(cfg.static_dir.ends_with("static"));
}

#[test]
fn postgres_without_database_url_is_missing() {
    let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "DATABASE_URL" }));

    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "DATABASE_URL" }));
}

#[test]
fn memory_store_needs_no_database_url() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("ACTIVITY_STORE", "memory"), ("PORT", "8000")])).unwrap();
    assert_eq!(cfg.store, StoreBackend::Memory);
    assert_eq!(cfg.port, 8000);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("ACTIVITY_STORE", "postgres"),
        ("DATABASE_URL", "postgres://db/app"),
        ("DB_MAX_CONNECTIONS", " 12 "),
        ("STATIC_DIR", "/srv/www"),
    ]))
    .unwrap();
    assert_eq!(cfg.store, StoreBackend::Postgres { database_url: "postgres://db/app".into(), max_connections: 12 });
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
}

#[test]
fn rejects_unknown_store() {
    let err = ServerConfig::from_lookup(lookup_from(&[("ACTIVITY_STORE", "mongodb")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "ACTIVITY_STORE", ref value } if value == "mongodb"));
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("ACTIVITY_STORE", "memory"), ("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", ref value } if value == "http"));

    let err = ServerConfig::from_lookup(lookup_from(&[("ACTIVITY_STORE", "memory"), ("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}
