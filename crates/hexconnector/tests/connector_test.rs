//! Integration tests for the adapter registry

use hexconnector::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

fn smtp_mailer() -> Box<dyn AdapterModule> {
    Box::new(
        Module::new("mailer.smtp")
            .function(INIT_ADAPTER, |cn, _| {
                let inits = cn
                    .get_from_or("mailer.inits", json!(0))?
                    .as_value()
                    .and_then(Value::as_u64)
                    .unwrap_or(0);
                cn.set_to("mailer.inits", json!(inits + 1))?;
                cn.set_to("mailer.host", json!("smtp.local"))?;
                Ok(Value::Null)
            })
            .function("send", |cn, args| {
                let host = cn.get_value("mailer.host")?.clone();
                let to = args
                    .named("to")
                    .cloned()
                    .ok_or_else(|| Error::adapter("mailer", "missing recipient"))?;
                Ok(json!({ "host": host, "to": to }))
            })
            .function("_connect", |_, _| Ok(Value::Null))
            .value("retries", 3)
            .exports(["init_adapter", "send", "_connect"]),
    )
}

#[linkme::distributed_slice(ADAPTER_MODULES)]
static SMTP_MAILER: ModuleEntry = ModuleEntry {
    path: "mailer.smtp",
    load: smtp_mailer,
};

#[test]
fn test_mapping_registration_and_lookup() {
    let mut connector = Connector::new();
    let mut mapping = HashMap::new();
    mapping.insert("a".to_string(), Member::value(1));
    mapping.insert("b".to_string(), Member::value(2));

    let added = connector.register_adapter("p", mapping).unwrap();

    assert_eq!(added.len(), 2);
    assert_eq!(connector.get_value("p.a").unwrap(), &json!(1));
    assert_eq!(connector.get_value("p.b").unwrap(), &json!(2));
    assert_eq!(connector.members_of("p"), vec!["a", "b"]);
}

#[test]
fn test_lookup_with_default() {
    let connector = Connector::new();
    let value = connector.get_from_or("p.missing", json!(42)).unwrap();
    assert_eq!(value.as_value(), Some(&json!(42)));
}

#[test]
fn test_call_unregistered() {
    let mut connector = Connector::new();
    let err = connector.call_fn("missing.fn", Args::new()).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "No member 'fn' registered on port 'missing'");
}

#[test]
fn test_set_then_get_ignores_init_state() {
    let mut connector = Connector::new();
    connector.set_to("p.x", json!(99)).unwrap();
    assert_eq!(connector.get_value("p.x").unwrap(), &json!(99));
    assert!(connector.initialized_ports().is_empty());
}

#[test]
fn test_link_time_module() {
    let mut connector = Connector::new();
    let added = connector.register_adapter("mailer", "mailer.smtp").unwrap();

    let mut names: Vec<String> = added.iter().map(|(key, _)| key.to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["mailer.init_adapter", "mailer.send"]);
    assert!(!connector.contains("mailer._connect"));
    assert!(!connector.contains("mailer.retries"));

    let sent = connector
        .call_fn("mailer.send", Args::new().kwarg("to", "ops@example.com"))
        .unwrap();
    connector
        .call_fn("mailer.send", Args::new().kwarg("to", "dev@example.com"))
        .unwrap();

    assert_eq!(sent, json!({ "host": "smtp.local", "to": "ops@example.com" }));
    assert_eq!(connector.get_value("mailer.inits").unwrap(), &json!(1));
    assert!(connector.is_initialized("mailer"));
}

#[test]
fn test_adapter_error_passes_through() {
    let mut connector = Connector::new();
    connector.register_adapter("mailer", "mailer.smtp").unwrap();

    let err = connector.call_fn("mailer.send", Args::new()).unwrap_err();
    match err {
        Error::Adapter { port, message } => {
            assert_eq!(port, "mailer");
            assert_eq!(message, "missing recipient");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(connector.call_depth(), 0);
}

#[test]
fn test_catalog_lists_link_time_modules() {
    let catalog = ModuleCatalog::new();
    assert!(catalog.contains("mailer.smtp"));
    assert!(catalog.available().contains(&"mailer.smtp".to_string()));
}

#[test]
fn test_runtime_module_shadows_link_time_module() {
    let mut catalog = ModuleCatalog::new();
    catalog.register(Module::new("mailer.smtp").function("send", |_, _| Ok(json!("stub"))));
    let mut connector = Connector::with_catalog(ConnectorConfig::default(), catalog);

    connector.register_adapter("mailer", "mailer.smtp").unwrap();
    assert_eq!(
        connector.call_fn("mailer.send", Args::new()).unwrap(),
        json!("stub")
    );
}

#[test]
fn test_full_lifecycle() {
    let events = Arc::new(std::sync::Mutex::new(Vec::<String>::new()));

    let record = |events: &Arc<std::sync::Mutex<Vec<String>>>, label: &'static str| {
        let events = Arc::clone(events);
        move |_: &mut Connector, _: Args| -> hexconnector::Result<Value> {
            events
                .lock()
                .map_err(|e| Error::adapter("test", e.to_string()))?
                .push(label.to_string());
            Ok(Value::Null)
        }
    };

    let mut connector = Connector::new();
    connector
        .register_adapter(
            "db",
            &Module::new("db.memory")
                .function(INIT_ADAPTER, record(&events, "db:init"))
                .function("query", record(&events, "db:query"))
                .function(CLOSE_ADAPTER, record(&events, "db:close")),
        )
        .unwrap();
    connector
        .register_adapter(
            "cache",
            &Module::new("cache.memory")
                .function(INIT_ADAPTER, record(&events, "cache:init"))
                .function(CLOSE_ADAPTER, record(&events, "cache:close")),
        )
        .unwrap();

    connector.call_fn("db.query", Args::new()).unwrap();
    connector.call_fn("db.query", Args::new()).unwrap();
    connector.close_all_adapters().unwrap();

    let events = events.lock().unwrap().clone();
    assert_eq!(events, vec!["db:init", "db:query", "db:query", "db:close"]);
    assert_eq!(connector.ports(), ["db".to_string(), "cache".to_string()]);
    assert_eq!(connector.initialized_ports(), ["db".to_string()]);
}
