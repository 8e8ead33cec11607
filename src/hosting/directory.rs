use super::*;
use crate::Error;
use crate::ID;
use crate::Result;
use crate::Unique;
use crate::gameroom::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Manages live games for the lifetime of the process.
/// The map lock is only held to insert or look up; game work happens under each game's own lock.
#[derive(Debug, Default)]
pub struct Directory {
    config: GameConfig,
    games: RwLock<HashMap<ID<Game>, Arc<Game>>>,
}

impl Directory {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            games: RwLock::new(HashMap::new()),
        }
    }
    /// Opens a new empty game and returns its id.
    pub async fn create(&self) -> ID<Game> {
        let id = ID::default();
        self.games
            .write()
            .await
            .insert(id, Arc::new(Game::new(id, self.config)));
        log::info!("[directory] created game {} with {} seats", id, self.config.seats);
        id
    }
    pub async fn route(&self, id: ID<Game>) -> Result<Arc<Game>> {
        self.games
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("game with id {} not found", id)))
    }
    /// Every game with its current roster, ordered by id.
    pub async fn list(&self) -> Vec<GameEntry> {
        let mut games = self
            .games
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        games.sort_by_key(|g| g.id());
        let mut entries = Vec::with_capacity(games.len());
        for game in games {
            entries.push(GameEntry {
                id: game.id(),
                seats: game.seats(),
                state: game.state().await,
            });
        }
        entries
    }
}
