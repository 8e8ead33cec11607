use super::*;
use crate::Error;
use crate::ID;
use crate::Result;
use crate::Unique;
use crate::accounts::Account;
use std::collections::BTreeMap;

/// Players currently seated in one game, keyed by account id.
///
/// State per account is implicit: `Absent` without an entry, `Joined` with one.
/// [`Roster::apply`] is the only transition function; it validates first and
/// mutates only once validation has passed.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: BTreeMap<ID<Account>, Player>,
}

impl Roster {
    pub fn get(&self, id: ID<Account>) -> Option<&Player> {
        self.players.get(&id)
    }
    pub fn contains(&self, id: ID<Account>) -> bool {
        self.players.contains_key(&id)
    }
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
    pub fn snapshot(&self) -> GameState {
        GameState {
            players: self.players.values().cloned().collect(),
        }
    }
    /// Validates and applies `action` for `requester`, returning the event payload.
    /// On error the roster is unchanged.
    pub fn apply(&mut self, requester: &Account, action: &Action, rejoin: Rejoin) -> Result<Message> {
        match action {
            Action::Join { name } => self.join(requester, name.as_deref(), rejoin),
            Action::Leave { player } => self.leave(requester, *player),
            Action::ChooseCard { card } => self.choose(requester, card),
            Action::Unknown => Err(Error::invalid("unknown player action")),
        }
    }
    fn join(&mut self, requester: &Account, name: Option<&str>, rejoin: Rejoin) -> Result<Message> {
        if self.contains(requester.id()) && rejoin == Rejoin::Reject {
            return Err(Error::invalid("player already joined this game"));
        }
        let player = Player::new(requester.id(), name.unwrap_or(requester.name()));
        self.players.insert(player.id, player.clone());
        Ok(Message::PlayerJoined { player })
    }
    fn leave(&mut self, requester: &Account, target: Option<ID<Account>>) -> Result<Message> {
        if target.is_some_and(|id| id != requester.id()) {
            return Err(Error::invalid("players may only remove themselves"));
        }
        self.players
            .remove(&requester.id())
            .map(|player| Message::PlayerLeft { player })
            .ok_or_else(|| Error::not_found("player is not in this game"))
    }
    fn choose(&self, requester: &Account, card: &str) -> Result<Message> {
        self.get(requester.id())
            .cloned()
            .map(|player| Message::CardChosen {
                player,
                card: card.to_string(),
            })
            .ok_or_else(|| Error::not_found("player is not in this game"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn account(name: &str) -> Account {
        Account::new(ID::default(), name.to_string(), Vec::new())
    }
    fn join() -> Action {
        Action::Join { name: None }
    }

    #[test]
    fn join_then_leave() {
        let alice = account("Alice");
        let mut roster = Roster::default();
        let msg = roster.apply(&alice, &join(), Rejoin::Reject).unwrap();
        assert_eq!(msg, Message::PlayerJoined { player: Player::new(alice.id(), "Alice") });
        assert!(roster.contains(alice.id()));
        let msg = roster
            .apply(&alice, &Action::Leave { player: None }, Rejoin::Reject)
            .unwrap();
        assert!(matches!(msg, Message::PlayerLeft { .. }));
        assert!(roster.is_empty());
    }

    #[test]
    fn join_uses_explicit_name() {
        let alice = account("Alice");
        let mut roster = Roster::default();
        let action = Action::Join { name: Some("Al".into()) };
        roster.apply(&alice, &action, Rejoin::Reject).unwrap();
        assert_eq!(roster.get(alice.id()).map(|p| p.name.as_str()), Some("Al"));
    }

    #[test]
    fn rejoin_rejected_by_default() {
        let alice = account("Alice");
        let mut roster = Roster::default();
        roster.apply(&alice, &join(), Rejoin::Reject).unwrap();
        let again = Action::Join { name: Some("Other".into()) };
        assert!(matches!(
            roster.apply(&alice, &again, Rejoin::Reject),
            Err(Error::InvalidAction(_))
        ));
        assert_eq!(roster.get(alice.id()).map(|p| p.name.as_str()), Some("Alice"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn rejoin_overwrites_when_allowed() {
        let alice = account("Alice");
        let mut roster = Roster::default();
        roster.apply(&alice, &join(), Rejoin::Overwrite).unwrap();
        let again = Action::Join { name: Some("Other".into()) };
        let msg = roster.apply(&alice, &again, Rejoin::Overwrite).unwrap();
        assert!(matches!(msg, Message::PlayerJoined { .. }));
        assert_eq!(roster.get(alice.id()).map(|p| p.name.as_str()), Some("Other"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn leave_for_someone_else_is_invalid() {
        let alice = account("Alice");
        let bob = account("Bob");
        let mut roster = Roster::default();
        roster.apply(&alice, &join(), Rejoin::Reject).unwrap();
        roster.apply(&bob, &join(), Rejoin::Reject).unwrap();
        let evict = Action::Leave { player: Some(alice.id()) };
        assert!(matches!(
            roster.apply(&bob, &evict, Rejoin::Reject),
            Err(Error::InvalidAction(_))
        ));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn leave_naming_self_succeeds() {
        let alice = account("Alice");
        let mut roster = Roster::default();
        roster.apply(&alice, &join(), Rejoin::Reject).unwrap();
        let leave = Action::Leave { player: Some(alice.id()) };
        assert!(roster.apply(&alice, &leave, Rejoin::Reject).is_ok());
        assert!(!roster.contains(alice.id()));
    }

    #[test]
    fn leave_without_seat_is_not_found() {
        let mut roster = Roster::default();
        assert!(matches!(
            roster.apply(&account("Ghost"), &Action::Leave { player: None }, Rejoin::Reject),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn choose_card_requires_seat_and_keeps_roster() {
        let alice = account("Alice");
        let mut roster = Roster::default();
        let choose = Action::ChooseCard { card: "ace".into() };
        assert!(matches!(
            roster.apply(&alice, &choose, Rejoin::Reject),
            Err(Error::NotFound(_))
        ));
        roster.apply(&alice, &join(), Rejoin::Reject).unwrap();
        let before = roster.snapshot();
        let msg = roster.apply(&alice, &choose, Rejoin::Reject).unwrap();
        assert_eq!(
            msg,
            Message::CardChosen {
                player: Player::new(alice.id(), "Alice"),
                card: "ace".into()
            }
        );
        assert_eq!(roster.snapshot(), before);
    }

    #[test]
    fn unknown_action_is_invalid() {
        let alice = account("Alice");
        let mut roster = Roster::default();
        assert!(matches!(
            roster.apply(&alice, &Action::Unknown, Rejoin::Reject),
            Err(Error::InvalidAction(_))
        ));
        assert!(roster.is_empty());
    }
}
