use crate::Error;
use crate::Result;
use crate::gameroom::*;

/// WebSocket session as an event sink: one JSON text frame per event.
pub struct Socket(actix_ws::Session);

impl Socket {
    pub fn new(session: actix_ws::Session) -> Self {
        Self(session)
    }
}

#[async_trait::async_trait]
impl Sink for Socket {
    async fn send(&mut self, event: &GameEvent) -> Result<()> {
        let json = event.to_json()?;
        self.0
            .text(json)
            .await
            .map_err(|_| Error::transport("websocket closed"))
    }
}
