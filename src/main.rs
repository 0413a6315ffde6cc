//! Bounce Grid entry point
//!
//! Opens the bouncing-balls scene in a native window.

use std::time::{SystemTime, UNIX_EPOCH};

use bounce_grid::PhysicsSettings;
use bounce_grid::platform::{self, PlatformError};
use bounce_grid::scene::PhysicsScene;

fn main() -> Result<(), PlatformError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bounce Grid starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let settings = PhysicsSettings::with_seed(seed).sanitized();

    match serde_json::to_string(&settings) {
        Ok(json) => log::info!("Settings: {}", json),
        Err(e) => log::warn!("Failed to serialize settings: {}", e),
    }

    platform::run(Box::new(PhysicsScene::new(settings)))
}
