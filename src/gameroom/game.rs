use super::*;
use crate::ID;
use crate::Result;
use crate::Unique;
use crate::accounts::Account;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Per-game settings fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Seat capacity. Stored and reported; Join does not enforce it yet.
    pub seats: usize,
    pub rejoin: Rejoin,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: 2,
            rejoin: Rejoin::default(),
        }
    }
}

/// Result of opening an event stream.
#[derive(Debug)]
pub struct Subscribed {
    pub subscription: ID<Subscription>,
    pub replay: Vec<GameEvent>,
}

/// One live game: the unit of locking and consistency.
///
/// Roster and broadcaster sit behind a single mutex, so a transition and the
/// append of its event are one step. Delivery I/O happens in subscriber
/// workers after the lock is released. Games share no locks with each other.
#[derive(Debug)]
pub struct Game {
    id: ID<Self>,
    config: GameConfig,
    table: Mutex<Table>,
}

#[derive(Debug, Default)]
struct Table {
    roster: Roster,
    broadcaster: Broadcaster,
}

impl Game {
    pub fn new(id: ID<Self>, config: GameConfig) -> Self {
        Self {
            id,
            config,
            table: Mutex::new(Table::default()),
        }
    }
    pub fn seats(&self) -> usize {
        self.config.seats
    }
}

impl Game {
    /// Runs `action` for `requester` and publishes the resulting event.
    /// A rejected action leaves roster and log untouched.
    pub async fn act(&self, requester: &Account, action: &Action) -> Result<GameEvent> {
        let mut table = self.table.lock().await;
        let message = table
            .roster
            .apply(requester, action, self.config.rejoin)
            .inspect_err(|e| {
                log::debug!("[game {}] rejected {} from {}: {}", self.id, action, requester.id(), e)
            })?;
        let state = table.roster.snapshot();
        let event = table.broadcaster.publish(state, message);
        log::info!("[game {}] {}", self.id, event);
        Ok(event)
    }
    /// Opens a subscription: replay of history, then every later event.
    /// The subscription ends on [`Game::unsubscribe`] or its first failed delivery.
    pub async fn subscribe(self: &Arc<Self>, sink: Box<dyn Sink>) -> Subscribed {
        let game = Arc::downgrade(self);
        let hangup: Hangup = Box::new(move |id| {
            tokio::spawn(async move {
                if let Some(game) = game.upgrade() {
                    game.unsubscribe(id).await;
                }
            });
        });
        let (subscription, replay) = self.table.lock().await.broadcaster.subscribe(sink, hangup);
        log::info!(
            "[game {}] added subscriber {} ({} replayed)",
            self.id,
            subscription,
            replay.len()
        );
        Subscribed {
            subscription,
            replay,
        }
    }
    /// Idempotent. Returns whether the subscription was still registered.
    pub async fn unsubscribe(&self, id: ID<Subscription>) -> bool {
        let removed = self.table.lock().await.broadcaster.unsubscribe(id);
        if removed {
            log::info!("[game {}] removed subscriber {}", self.id, id);
        }
        removed
    }
    pub async fn state(&self) -> GameState {
        self.table.lock().await.roster.snapshot()
    }
    pub async fn history(&self) -> Vec<GameEvent> {
        self.table.lock().await.broadcaster.history().to_vec()
    }
    pub async fn subscribers(&self) -> usize {
        self.table.lock().await.broadcaster.subscribers()
    }
    pub async fn is_subscribed(&self, id: ID<Subscription>) -> bool {
        self.table.lock().await.broadcaster.is_subscribed(id)
    }
}

impl Unique for Game {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
