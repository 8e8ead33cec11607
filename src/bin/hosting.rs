//! Hosting Server Binary
//!
//! Serves the account and game services over HTTP.
//! Game event streams are WebSocket connections.

use challengers::hosting::*;
use clap::Parser;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    challengers::log()?;
    challengers::kys();
    Server::run(Config::parse()).await?;
    Ok(())
}
