use crate::ID;
use crate::accounts::Account;
use serde::Deserialize;
use serde::Serialize;

/// Roster entry. The player id is the account id of whoever joined.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: ID<Account>,
    pub name: String,
}

impl Player {
    pub fn new(id: ID<Account>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Snapshot of a game carried by every event and by directory listings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
}

impl GameState {
    pub fn contains(&self, id: ID<Account>) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}
