//! Event bus and player-action state machine for the challengers card game.
//!
//! ## Layers
//!
//! - [`accounts`]: Bearer token issuance and resolution
//! - [`gameroom`]: Per-game roster, event log, and subscriber fan-out
//! - [`hosting`]: Game directory, service traits, and the HTTP/WebSocket adapter
//!
//! A request flows client → [`accounts::AccountStore`] → [`hosting::Directory`]
//! → [`gameroom::Game`] → each subscriber's delivery worker.
mod error;
mod ids;

pub mod accounts;
pub mod gameroom;
pub mod hosting;

pub use error::*;
pub use ids::*;

/// Milliseconds since the unix epoch, used to stamp events.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", now() / 1000))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Games are in-memory only, so there is nothing to flush on the way out.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
