//! Quickstart for the hexconnector registry
//!
//! This demo:
//! - Loads an optional connector config (YAML, TOML or JSON)
//! - Installs a tracing subscriber from the logging section
//! - Registers a storage adapter by module path and a notifier from a mapping
//! - Calls into both ports, then closes every initialized adapter
//!
//! Run with: cargo run -p hexconnector-demos --bin quickstart [config.yaml]
//! Use `RUST_LOG=debug` to see the per-call log lines.

use hexconnector::config::{self, ConnectorConfig, LogFormat, LoggingConfig};
use hexconnector::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Store = Mutex<HashMap<String, Value>>;

fn memory_store() -> Box<dyn AdapterModule> {
    Box::new(
        Module::new("storage.memory")
            .function(INIT_ADAPTER, |cn, _| {
                cn.set_to("storage.store", Member::object(Store::default()))?;
                tracing::info!("Memory store ready");
                Ok(Value::Null)
            })
            .function("save", |cn, args| {
                let store: Arc<Store> = cn.get_object("storage.store")?;
                let key = args
                    .get(0)
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::adapter("storage", "key must be a string"))?;
                let value = args.get(1).cloned().unwrap_or(Value::Null);
                store
                    .lock()
                    .map_err(|e| Error::adapter("storage", e.to_string()))?
                    .insert(key.to_string(), value);
                cn.call_fn("notify.send", Args::new().kwarg("event", format!("saved {key}")))
            })
            .function("load", |cn, args| {
                let store: Arc<Store> = cn.get_object("storage.store")?;
                let key = args.get(0).and_then(Value::as_str).unwrap_or_default();
                let value = store
                    .lock()
                    .map_err(|e| Error::adapter("storage", e.to_string()))?
                    .get(key)
                    .cloned()
                    .unwrap_or(Value::Null);
                Ok(value)
            })
            .function(CLOSE_ADAPTER, |cn, _| {
                let store: Arc<Store> = cn.get_object("storage.store")?;
                let entries = store
                    .lock()
                    .map_err(|e| Error::adapter("storage", e.to_string()))?
                    .len();
                tracing::info!(entries, "Memory store closed");
                Ok(Value::Null)
            })
            .function("_compact", |_, _| Ok(Value::Null)),
    )
}

#[linkme::distributed_slice(ADAPTER_MODULES)]
static MEMORY_STORE: ModuleEntry = ModuleEntry {
    path: "storage.memory",
    load: memory_store,
};

fn notifier() -> HashMap<String, Member> {
    let mut members = HashMap::new();
    members.insert(
        "send".to_string(),
        Member::function(|_, args| {
            let event = args.named("event").cloned().unwrap_or(Value::Null);
            tracing::info!(%event, "Notification sent");
            Ok(json!({ "delivered": true }))
        }),
    );
    members.insert("channel".to_string(), Member::value("log"));
    members
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => config::load_config(path)?,
        None => ConnectorConfig::default(),
    };

    init_tracing(&config.logging)?;

    let mut connector = Connector::with_config(config);
    connector.register_adapter("storage", "storage.memory")?;
    connector.register_adapter("notify", notifier())?;

    connector.call_fn("storage.save", Args::new().arg("greeting").arg("hello"))?;
    connector.call_fn("storage.save", Args::new().arg("numbers").arg(json!([1, 2, 3])))?;
    let greeting = connector.call_fn("storage.load", Args::new().arg("greeting"))?;

    tracing::info!(
        %greeting,
        channel = %connector.get_value("notify.channel")?,
        ports = ?connector.ports(),
        initialized = ?connector.initialized_ports(),
        "Demo finished"
    );

    connector.close_all_adapters()?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    match logging.format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_level(true),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    Ok(())
}
