//! Basic usage of the namespaced logger
//!
//! Run with `DEBUG=worker cargo run --example basic_usage` to see the debug channel.

use ns_logger::prelude::*;
use ns_logger::{debug, event, info, warn};
use serde_json::json;

fn main() -> Result<()> {
    let registry = Registry::new();

    let api = registry.acquire(
        LoggerOptions::new()
            .directory("./logs")
            .namespace("api")
            .ns_width(8),
    )?;
    let worker = registry.acquire(
        LoggerOptions::new()
            .directory("./logs")
            .namespace("worker")
            .ns_width(8)
            .debug(true),
    )?;

    info!(api, "listening on port %d", 8080)?;
    warn!(api, "slow request: %.1f ms", 812.4)?;
    event!(api, Some("USER_LOGIN"), "user %s logged in", "alice")?;
    event!(api, None, "anonymous event with %O", json!({"ip": "10.0.0.1"}))?;

    debug!(worker, "picked job %d", 17)?;
    worker.error("job %d failed: %s", &[17.into(), "timeout".into()])?;

    println!("{}", registry);
    println!("{}", api);
    Ok(())
}
