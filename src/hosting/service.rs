use super::*;
use crate::ID;
use crate::Result;
use crate::gameroom::*;

/// Account contract: issue a token, verify a token.
#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    async fn create_account(&self, request: CreateAccountRequest) -> Result<CreateAccountResponse>;
    async fn verify_account(&self, request: VerifyAccountRequest) -> Result<VerifyAccountResponse>;
}

/// Game contract. `credential` is the raw `authorization` value of the request;
/// the caller's identity is derived from it, never from a request body.
#[async_trait::async_trait]
pub trait GameService: Send + Sync {
    async fn create_game(&self, credential: Option<&str>) -> Result<CreateGameResponse>;
    async fn list_games(&self, credential: Option<&str>) -> Result<ListGamesResponse>;
    async fn player_action(
        &self,
        credential: Option<&str>,
        request: PlayerActionRequest,
    ) -> Result<PlayerActionResponse>;
    /// Opens a stream: `sink` receives the replay, then live events.
    async fn game_events(&self, game: ID<Game>, sink: Box<dyn Sink>) -> Result<Subscribed>;
    /// Transport-side closure of a stream opened by `game_events`.
    async fn close_events(&self, game: ID<Game>, subscription: ID<Subscription>) -> Result<()>;
}
