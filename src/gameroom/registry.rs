use super::*;
use crate::ID;
use std::collections::BTreeMap;

/// Active observers of one game's event stream.
#[derive(Debug, Default)]
pub struct Registry {
    subscribers: BTreeMap<ID<Subscription>, Subscriber>,
}

impl Registry {
    pub fn insert(&mut self, subscriber: Subscriber) {
        self.subscribers.insert(subscriber.id(), subscriber);
    }
    /// Idempotent. Returns whether the subscription was still registered.
    pub fn remove(&mut self, id: ID<Subscription>) -> bool {
        self.subscribers.remove(&id).is_some()
    }
    pub fn contains(&self, id: ID<Subscription>) -> bool {
        self.subscribers.contains_key(&id)
    }
    /// Enqueues to every live subscriber, dropping the dead ones.
    /// Returns how many subscribers accepted the event.
    pub fn fanout(&mut self, event: &GameEvent) -> usize {
        self.subscribers.retain(|id, subscriber| {
            let delivered = subscriber.deliver(event);
            if !delivered {
                log::debug!("[registry] pruned dead subscriber {}", id);
            }
            delivered
        });
        self.subscribers.len()
    }
    /// Number of live subscribers.
    pub fn live(&self) -> usize {
        self.subscribers.values().filter(|s| s.alive()).count()
    }
}
