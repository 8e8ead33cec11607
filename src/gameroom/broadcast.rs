use super::*;
use crate::ID;

/// Event log plus the subscribers that observe it.
///
/// Callers hold the owning game's lock around every method, which makes
/// `subscribe` (snapshot + register) indivisible relative to `publish`
/// (append + enqueue): a new subscriber either sees an event in its replay
/// or live, never both and never neither.
#[derive(Debug, Default)]
pub struct Broadcaster {
    log: EventLog,
    registry: Registry,
}

impl Broadcaster {
    /// Appends, then enqueues to every subscription registered right now.
    pub fn publish(&mut self, state: GameState, message: Message) -> GameEvent {
        let event = self.log.append(state, message).clone();
        let n = self.registry.fanout(&event);
        log::debug!("[broadcast] {} queued for {} subscribers", event, n);
        event
    }
    /// Registers a new subscription whose worker starts with the current history.
    pub fn subscribe(
        &mut self,
        sink: Box<dyn Sink>,
        hangup: Hangup,
    ) -> (ID<Subscription>, Vec<GameEvent>) {
        let id = ID::default();
        let replay = self.log.history().to_vec();
        self.registry
            .insert(Subscriber::spawn(id, sink, &replay, hangup));
        (id, replay)
    }
    pub fn unsubscribe(&mut self, id: ID<Subscription>) -> bool {
        self.registry.remove(id)
    }
    pub fn history(&self) -> &[GameEvent] {
        self.log.history()
    }
    pub fn subscribers(&self) -> usize {
        self.registry.live()
    }
    pub fn is_subscribed(&self, id: ID<Subscription>) -> bool {
        self.registry.contains(id)
    }
}
