use crate::ID;
use crate::accounts::Account;
use serde::Deserialize;
use serde::Serialize;

/// Player action as received on the wire.
/// The requester's identity never comes from here; it comes from the credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Take a seat. Without a name the account name is used.
    Join {
        #[serde(default)]
        name: Option<String>,
    },
    /// Leave the game. Naming a player other than the requester is rejected.
    Leave {
        #[serde(default)]
        player: Option<ID<Account>>,
    },
    ChooseCard { card: String },
    /// Any `type` this server does not recognise.
    #[serde(other)]
    Unknown,
}

/// What Join does for a player who is already seated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Rejoin {
    /// Fail with InvalidAction, roster untouched.
    #[default]
    Reject,
    /// Replace the entry (possibly renaming) and emit PlayerJoined again.
    Overwrite,
}

impl std::fmt::Display for Rejoin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Join { name: Some(name) } => write!(f, "join as {}", name),
            Self::Join { name: None } => write!(f, "join"),
            Self::Leave { .. } => write!(f, "leave"),
            Self::ChooseCard { card } => write!(f, "choose card {}", card),
            Self::Unknown => write!(f, "unknown action"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decodes_known_actions() {
        let join: Action = serde_json::from_str(r#"{"type":"join","name":"Alice"}"#).unwrap();
        assert_eq!(
            join,
            Action::Join {
                name: Some("Alice".into())
            }
        );
        let bare: Action = serde_json::from_str(r#"{"type":"join"}"#).unwrap();
        assert_eq!(bare, Action::Join { name: None });
        let leave: Action = serde_json::from_str(r#"{"type":"leave"}"#).unwrap();
        assert_eq!(leave, Action::Leave { player: None });
        let card: Action = serde_json::from_str(r#"{"type":"choose_card","card":"7"}"#).unwrap();
        assert_eq!(card, Action::ChooseCard { card: "7".into() });
    }
    #[test]
    fn unrecognised_type_decodes_to_unknown() {
        let action: Action = serde_json::from_str(r#"{"type":"fold"}"#).unwrap();
        assert_eq!(action, Action::Unknown);
    }
}
