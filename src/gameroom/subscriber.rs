use super::*;
use crate::ID;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinHandle;

/// Marker for subscription ids.
#[derive(Debug)]
pub struct Subscription;

/// Called once by a worker whose sink failed, so the owner can deregister it.
pub type Hangup = Box<dyn FnOnce(ID<Subscription>) + Send>;

/// Registry-side handle to a running delivery worker.
///
/// - publisher enqueues onto `outbox` without waiting
/// - worker drains its private queue into the Sink, one event at a time
/// - first failed send flips `alive` and stops the worker
///
/// Dropping the handle aborts the worker, which drops the Sink and
/// whatever was still queued, even mid-send.
///
/// The queue is unbounded: a client that stays connected but stops reading
/// grows its backlog until it disconnects or a send fails. The backlog is
/// reclaimed as soon as the subscription is removed.
#[derive(Debug)]
pub struct Subscriber {
    id: ID<Subscription>,
    outbox: UnboundedSender<GameEvent>,
    alive: Arc<AtomicBool>,
    worker: JoinHandle<()>,
}

impl Subscriber {
    /// Spawns the worker with `replay` already queued ahead of any live event.
    pub fn spawn(
        id: ID<Subscription>,
        sink: Box<dyn Sink>,
        replay: &[GameEvent],
        hangup: Hangup,
    ) -> Self {
        let (tx, rx) = unbounded_channel();
        replay.iter().cloned().for_each(|event| {
            let _ = tx.send(event);
        });
        let alive = Arc::new(AtomicBool::new(true));
        let courier = Courier {
            id,
            sink,
            inbox: rx,
            alive: alive.clone(),
            hangup,
        };
        let worker = tokio::spawn(courier.run());
        log::debug!("[subscriber {}] spawned with {} replayed", id, replay.len());
        Self {
            id,
            outbox: tx,
            alive,
            worker,
        }
    }
    pub fn id(&self) -> ID<Subscription> {
        self.id
    }
    pub fn alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst) && !self.outbox.is_closed()
    }
    /// Enqueues an event. Returns false if the subscription is dead.
    pub fn deliver(&self, event: &GameEvent) -> bool {
        self.alive() && self.outbox.send(event.clone()).is_ok()
    }
}

impl Drop for Subscriber {
    fn drop(&mut self) {
        self.worker.abort();
        log::debug!("[subscriber {}] worker stopped", self.id);
    }
}

/// The worker half: owns the Sink and the receiving end of the queue.
struct Courier {
    id: ID<Subscription>,
    sink: Box<dyn Sink>,
    inbox: UnboundedReceiver<GameEvent>,
    alive: Arc<AtomicBool>,
    hangup: Hangup,
}

impl Courier {
    async fn run(self) {
        let Self {
            id,
            mut sink,
            mut inbox,
            alive,
            hangup,
        } = self;
        while let Some(event) = inbox.recv().await {
            if let Err(e) = sink.send(&event).await {
                log::warn!("[subscriber {}] delivery of #{} failed: {}", id, event.id(), e);
                alive.store(false, Ordering::SeqCst);
                inbox.close();
                hangup(id);
                return;
            }
            log::trace!("[subscriber {}] delivered #{}", id, event.id());
        }
        log::debug!("[subscriber {}] queue closed", id);
    }
}
