use pluginbot::config::{self, PluginDescriptor, core_plugins};
use pluginbot::core::db;
use pluginbot::core::error::PluginbotError;
use pluginbot::core::store::Store;
use rusqlite::{Connection, params};
use serde_json::json;
use tempfile::{TempDir, tempdir};

const PLUGINS_TABLE_FIXTURE: &str = "
    CREATE TABLE plugins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        path TEXT NOT NULL,
        enabled BOOLEAN NOT NULL DEFAULT 0,
        config TEXT
    )
";

fn app_root() -> (TempDir, Store) {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path()).unwrap();
    Connection::open(store.database_path())
        .unwrap()
        .execute_batch("PRAGMA user_version = 1;")
        .unwrap();
    (tmp, store)
}

fn seed(store: &Store, rows: &[(&str, bool, Option<&str>)]) {
    let conn = Connection::open(store.database_path()).unwrap();
    conn.execute(PLUGINS_TABLE_FIXTURE, []).unwrap();
    for (path, enabled, config) in rows {
        conn.execute(
            "INSERT INTO plugins(path, enabled, config) VALUES(?1, ?2, ?3)",
            params![path, enabled, config],
        )
        .unwrap();
    }
}

fn resolve(store: &Store) -> Result<config::Config, PluginbotError> {
    let conn = db::db_connect(&store.database_path())?;
    config::create_config(&conn, store)
}

#[test]
fn missing_plugin_table_resolves_to_core_plugins_only() {
    let (_tmp, store) = app_root();

    let config = resolve(&store).unwrap();

    let paths: Vec<&str> = config.plugins.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "./plugins/core-plugins/express-app",
            "./plugins/animals/cats",
            "./plugins/animals/dogs",
            "./plugins/adoption",
        ]
    );
    assert_eq!(config.plugins, core_plugins(&store));
}

#[test]
fn empty_plugin_table_resolves_to_core_plugins_only() {
    let (_tmp, store) = app_root();
    seed(&store, &[]);

    let config = resolve(&store).unwrap();
    assert_eq!(config.plugins.len(), 4);
}

#[test]
fn enabled_rows_follow_core_plugins_in_row_order() {
    let (_tmp, store) = app_root();
    seed(
        &store,
        &[
            ("./plugins/zoo", true, Some(r#"{"visitors": 12}"#)),
            ("./plugins/aquarium", true, None),
            ("./plugins/bakery", true, Some(r#"{"open": true, "hours": [9, 17]}"#)),
        ],
    );

    let config = resolve(&store).unwrap();

    assert_eq!(config.plugins.len(), 4 + 3);
    assert_eq!(config.plugins[..4], core_plugins(&store)[..]);
    assert_eq!(
        config.plugins[4..].to_vec(),
        vec![
            PluginDescriptor::new("./plugins/zoo").with_setting("visitors", 12),
            PluginDescriptor::new("./plugins/aquarium"),
            PluginDescriptor::new("./plugins/bakery")
                .with_setting("open", true)
                .with_setting("hours", json!([9, 17])),
        ]
    );
}

#[test]
fn disabled_rows_never_appear() {
    let (_tmp, store) = app_root();
    seed(
        &store,
        &[
            ("./plugins/one", false, None),
            ("./plugins/two", true, None),
            ("./plugins/three", false, Some(r#"{"x": 1}"#)),
            ("./plugins/four", true, None),
            ("./plugins/five", false, None),
        ],
    );

    let config = resolve(&store).unwrap();

    let dynamic: Vec<&str> = config.plugins[4..].iter().map(|p| p.path.as_str()).collect();
    assert_eq!(dynamic, vec!["./plugins/two", "./plugins/four"]);
}

#[test]
fn row_path_takes_precedence_over_config_path() {
    let (_tmp, store) = app_root();
    seed(
        &store,
        &[(
            "./plugins/real",
            true,
            Some(r#"{"path": "./plugins/shadow", "mode": "strict"}"#),
        )],
    );

    let config = resolve(&store).unwrap();
    let plugin = &config.plugins[4];

    assert_eq!(plugin.path, "./plugins/real");
    assert_eq!(plugin.setting("mode"), Some(&json!("strict")));
    assert_eq!(
        serde_json::to_value(plugin).unwrap(),
        json!({"path": "./plugins/real", "mode": "strict"})
    );
}

#[test]
fn duplicate_core_paths_are_kept() {
    let (_tmp, store) = app_root();
    seed(&store, &[("./plugins/animals/cats", true, Some(r#"{"indoor": true}"#))]);

    let config = resolve(&store).unwrap();

    let cats: Vec<&PluginDescriptor> = config
        .plugins
        .iter()
        .filter(|p| p.path == "./plugins/animals/cats")
        .collect();
    assert_eq!(cats.len(), 2);
    assert!(cats[0].settings.is_empty());
    assert_eq!(cats[1].setting("indoor"), Some(&json!(true)));
}

#[test]
fn express_app_paths_are_absolute_under_the_root() {
    let (_tmp, store) = app_root();

    let config = resolve(&store).unwrap();
    let express = &config.plugins[0];

    let entry = store.root.join("public").join("index.html");
    let static_files = store.root.join("public");
    assert_eq!(express.setting("entry"), Some(&json!(entry.to_string_lossy())));
    assert_eq!(express.setting("staticFiles"), Some(&json!(static_files.to_string_lossy())));
    assert_eq!(express.setting("port"), Some(&json!(3001)));
    assert_eq!(express.setting("apiBaseUrl"), Some(&json!("/api")));
}

#[test]
fn malformed_row_config_is_reported() {
    let (_tmp, store) = app_root();
    seed(&store, &[("./plugins/broken", true, Some("[\"not\", \"an object\"]"))]);

    let err = resolve(&store).unwrap_err();
    assert!(matches!(err, PluginbotError::ValidationError(_)));
    assert!(err.to_string().contains("./plugins/broken"));
}

#[test]
fn resolution_does_not_write_to_storage() {
    let (_tmp, store) = app_root();
    seed(&store, &[("./plugins/zoo", true, None)]);
    let before = std::fs::read(store.database_path()).unwrap();

    resolve(&store).unwrap();
    resolve(&store).unwrap();

    assert_eq!(std::fs::read(store.database_path()).unwrap(), before);
}

#[test]
fn storage_failure_propagates() {
    let (_tmp, store) = app_root();
    std::fs::write(store.database_path(), b"this is not a sqlite database file").unwrap();

    let err = resolve(&store).unwrap_err();
    assert!(matches!(err, PluginbotError::RusqliteError(_)), "{err:?}");
}

#[test]
fn missing_database_file_is_not_created() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path()).unwrap();

    let err = resolve(&store).unwrap_err();
    assert!(matches!(err, PluginbotError::NotFound(_)));
    assert!(!store.database_path().exists());
}

#[test]
fn without_rowid_plugin_table_resolves() {
    let (_tmp, store) = app_root();
    let conn = Connection::open(store.database_path()).unwrap();
    conn.execute_batch(
        "CREATE TABLE plugins (path TEXT PRIMARY KEY, enabled BOOLEAN NOT NULL, config TEXT) WITHOUT ROWID;
         INSERT INTO plugins(path, enabled, config) VALUES ('./plugins/zoo', 1, '{\"visitors\": 3}');
         INSERT INTO plugins(path, enabled, config) VALUES ('./plugins/closed', 0, NULL);",
    )
    .unwrap();
    drop(conn);

    let config = resolve(&store).unwrap();

    assert_eq!(config.plugins.len(), 5);
    assert_eq!(
        config.plugins[4],
        PluginDescriptor::new("./plugins/zoo").with_setting("visitors", 3)
    );
}

#[test]
fn blob_config_is_decoded_as_json_text() {
    let (_tmp, store) = app_root();
    seed(&store, &[]);
    let conn = Connection::open(store.database_path()).unwrap();
    conn.execute(
        "INSERT INTO plugins(path, enabled, config) VALUES(?1, 1, ?2)",
        params!["./plugins/blobby", br#"{"mode": "binary"}"#.to_vec()],
    )
    .unwrap();
    drop(conn);

    let config = resolve(&store).unwrap();

    assert_eq!(config.plugins.len(), 5);
    assert_eq!(config.plugins[4].path, "./plugins/blobby");
    assert_eq!(config.plugins[4].setting("mode"), Some(&json!("binary")));
}
