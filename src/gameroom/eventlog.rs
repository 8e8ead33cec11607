use super::*;

/// Append-only, totally ordered record of a game's events.
/// An event's id is its index, so ids are strictly increasing and never reused.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Stamps and stores the next event, returning it.
    pub fn append(&mut self, state: GameState, message: Message) -> &GameEvent {
        let id = self.events.len() as Sequence;
        self.events
            .push(GameEvent::new(id, crate::now(), state, message));
        &self.events[self.events.len() - 1]
    }
    pub fn get(&self, id: Sequence) -> Option<&GameEvent> {
        self.events.get(id as usize)
    }
    /// Every event appended so far, in append order.
    pub fn history(&self) -> &[GameEvent] {
        &self.events
    }
    pub fn len(&self) -> usize {
        self.events.len()
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ID;
    fn joined(name: &str) -> Message {
        Message::PlayerJoined {
            player: Player::new(ID::default(), name),
        }
    }
    #[test]
    fn append_assigns_increasing_ids() {
        let mut log = EventLog::default();
        assert!(log.is_empty());
        let ids = ["a", "b", "c"]
            .iter()
            .map(|n| log.append(GameState::default(), joined(n)).id())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.get(1).map(|e| e.message().player().name.as_str()), Some("b"));
        assert!(log.get(3).is_none());
    }
    #[test]
    fn history_preserves_append_order() {
        let mut log = EventLog::default();
        log.append(GameState::default(), joined("first"));
        log.append(GameState::default(), joined("second"));
        let names = log
            .history()
            .iter()
            .map(|e| e.message().player().name.clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["first", "second"]);
    }
}
