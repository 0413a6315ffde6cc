//! Falling squares demo: click cells to fill them and watch them settle.

use std::time::{SystemTime, UNIX_EPOCH};

use bounce_grid::platform::{self, PlatformError};
use bounce_grid::scene::SandScene;

fn main() -> Result<(), PlatformError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Falling sand starting with seed: {}", seed);

    platform::run(Box::new(SandScene::new(seed)))
}
