use crate::gameroom::GameConfig;
use crate::gameroom::Rejoin;

/// Hosting configuration from flags, falling back to environment variables.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "hosting", about = "Serve challengers games over HTTP and WebSocket")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "PORT", default_value_t = 50051)]
    pub port: u16,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Seat capacity recorded on every new game.
    #[arg(long, env = "SEATS", default_value_t = 2)]
    pub seats: usize,
    /// What Join does for a player who is already seated.
    #[arg(long, env = "REJOIN", value_enum, default_value_t = Rejoin::Reject)]
    pub rejoin: Rejoin,
}

impl Config {
    pub fn game(&self) -> GameConfig {
        GameConfig {
            seats: self.seats,
            rejoin: self.rejoin,
        }
    }
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
