use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Position of an event in its game's log. Starts at 0, never reused.
pub type Sequence = u64;

/// What happened. Each variant is produced by exactly one kind of action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    PlayerJoined { player: Player },
    PlayerLeft { player: Player },
    CardChosen { player: Player, card: String },
}

impl Message {
    pub fn player(&self) -> &Player {
        match self {
            Self::PlayerJoined { player }
            | Self::PlayerLeft { player }
            | Self::CardChosen { player, .. } => player,
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PlayerJoined { player } => write!(f, "{} joined", player),
            Self::PlayerLeft { player } => write!(f, "{} left", player),
            Self::CardChosen { player, card } => write!(f, "{} chose card {}", player, card),
        }
    }
}

/// Immutable entry of a game's event log.
/// `state` is the roster as it stood right after `message` was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    id: Sequence,
    date: u64,
    state: GameState,
    message: Message,
}

impl GameEvent {
    pub fn new(id: Sequence, date: u64, state: GameState, message: Message) -> Self {
        Self {
            id,
            date,
            state,
            message,
        }
    }
    pub fn id(&self) -> Sequence {
        self.id
    }
    /// Milliseconds since the unix epoch at append time.
    pub fn date(&self) -> u64 {
        self.date
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn message(&self) -> &Message {
        &self.message
    }
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(self).map_err(crate::Error::transport)
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.message)
    }
}
