use super::*;
use crate::ID;
use crate::Result;
use crate::Unique;
use crate::accounts::*;
use crate::gameroom::*;
use std::sync::Arc;

/// Implements both service contracts over one account store and one directory.
#[derive(Debug, Clone, Default)]
pub struct Server {
    accounts: Arc<AccountStore>,
    directory: Arc<Directory>,
}

impl Server {
    pub fn new(config: GameConfig) -> Self {
        Self {
            accounts: Arc::new(AccountStore::default()),
            directory: Arc::new(Directory::new(config)),
        }
    }
    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }
    pub fn directory(&self) -> &Directory {
        &self.directory
    }
}

#[async_trait::async_trait]
impl AccountService for Server {
    async fn create_account(&self, request: CreateAccountRequest) -> Result<CreateAccountResponse> {
        let token = self.accounts.create_account(&request.name).await;
        Ok(CreateAccountResponse {
            token: token.into(),
        })
    }
    async fn verify_account(&self, request: VerifyAccountRequest) -> Result<VerifyAccountResponse> {
        let account = self.accounts.resolve(&request.token).await?;
        Ok(VerifyAccountResponse {
            account_id: account.id(),
            name: account.name().to_string(),
        })
    }
}

#[async_trait::async_trait]
impl GameService for Server {
    async fn create_game(&self, credential: Option<&str>) -> Result<CreateGameResponse> {
        let account = self.accounts.resolve_credential(credential).await?;
        let id = self.directory.create().await;
        log::debug!("[server] {} created game {}", account.id(), id);
        Ok(CreateGameResponse { id })
    }
    async fn list_games(&self, credential: Option<&str>) -> Result<ListGamesResponse> {
        self.accounts.resolve_credential(credential).await?;
        Ok(ListGamesResponse {
            games: self.directory.list().await,
        })
    }
    async fn player_action(
        &self,
        credential: Option<&str>,
        request: PlayerActionRequest,
    ) -> Result<PlayerActionResponse> {
        let account = self.accounts.resolve_credential(credential).await?;
        let game = self.directory.route(request.game).await?;
        game.act(&account, &request.action).await?;
        Ok(PlayerActionResponse::Success)
    }
    async fn game_events(&self, game: ID<Game>, sink: Box<dyn Sink>) -> Result<Subscribed> {
        Ok(self.directory.route(game).await?.subscribe(sink).await)
    }
    async fn close_events(&self, game: ID<Game>, subscription: ID<Subscription>) -> Result<()> {
        self.directory.route(game).await?.unsubscribe(subscription).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::unbounded_channel;

    async fn signup(server: &Server, name: &str) -> String {
        let response = server
            .create_account(CreateAccountRequest { name: name.into() })
            .await
            .unwrap();
        format!("Bearer {}", response.token)
    }
    async fn join(server: &Server, token: &str, game: ID<Game>) -> Result<PlayerActionResponse> {
        server
            .player_action(
                Some(token),
                PlayerActionRequest {
                    game,
                    action: Action::Join { name: None },
                },
            )
            .await
    }
    async fn collect(rx: &mut UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) =
            tokio::time::timeout(Duration::from_millis(250), rx.recv()).await
        {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn verify_returns_account_id_and_name() {
        let server = Server::default();
        let token = server
            .create_account(CreateAccountRequest {
                name: "Alice".into(),
            })
            .await
            .unwrap()
            .token;
        let verified = server
            .verify_account(VerifyAccountRequest { token })
            .await
            .unwrap();
        assert_eq!(verified.name, "Alice");
        assert!(matches!(
            server
                .verify_account(VerifyAccountRequest {
                    token: "bogus".into()
                })
                .await,
            Err(Error::Unauthenticated(_))
        ));
    }

    #[tokio::test]
    async fn alice_joins_and_subscriber_sees_one_event() {
        let server = Server::default();
        let alice = signup(&server, "Alice").await;
        let game = server.create_game(Some(&alice)).await.unwrap().id;
        assert_eq!(
            join(&server, &alice, game).await.unwrap(),
            PlayerActionResponse::Success
        );
        let (tx, mut rx) = unbounded_channel::<GameEvent>();
        let subscribed = server.game_events(game, Box::new(tx)).await.unwrap();
        assert_eq!(subscribed.replay.len(), 1);
        let events = collect(&mut rx).await;
        assert_eq!(events.len(), 1);
        let player = events[0].message().player();
        assert_eq!(player.name, "Alice");
        let verified = server
            .verify_account(VerifyAccountRequest {
                token: alice.trim_start_matches("Bearer ").into(),
            })
            .await
            .unwrap();
        assert_eq!(player.id, verified.account_id);
    }

    #[tokio::test]
    async fn foreign_leave_is_rejected() {
        let server = Server::default();
        let alice = signup(&server, "Alice").await;
        let bob = signup(&server, "Bob").await;
        let game = server.create_game(Some(&alice)).await.unwrap().id;
        join(&server, &alice, game).await.unwrap();
        join(&server, &bob, game).await.unwrap();
        let alice_id = server.accounts().resolve_credential(Some(&alice)).await.unwrap().id();
        let result = server
            .player_action(
                Some(&bob),
                PlayerActionRequest {
                    game,
                    action: Action::Leave {
                        player: Some(alice_id),
                    },
                },
            )
            .await;
        assert!(matches!(result, Err(Error::InvalidAction(_))));
        let games = server.list_games(Some(&bob)).await.unwrap().games;
        assert_eq!(games[0].state.players.len(), 2);
    }

    #[tokio::test]
    async fn missing_or_invalid_token_changes_nothing() {
        let server = Server::default();
        let alice = signup(&server, "Alice").await;
        let game = server.create_game(Some(&alice)).await.unwrap().id;
        for credential in [None, Some("Bearer nope"), Some("")] {
            let result = server
                .player_action(
                    credential,
                    PlayerActionRequest {
                        game,
                        action: Action::Join { name: None },
                    },
                )
                .await;
            assert!(matches!(result, Err(Error::Unauthenticated(_))));
        }
        assert!(matches!(
            server.create_game(None).await,
            Err(Error::Unauthenticated(_))
        ));
        assert!(matches!(
            server.list_games(Some("wrong")).await,
            Err(Error::Unauthenticated(_))
        ));
        let game = server.directory().route(game).await.unwrap();
        assert!(game.history().await.is_empty());
        assert!(game.state().await.players.is_empty());
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let server = Server::default();
        let alice = signup(&server, "Alice").await;
        assert!(matches!(
            join(&server, &alice, ID::default()).await,
            Err(Error::NotFound(_))
        ));
        let (tx, _rx) = unbounded_channel::<GameEvent>();
        assert!(matches!(
            server.game_events(ID::default(), Box::new(tx)).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn closing_events_unsubscribes() {
        let server = Server::default();
        let alice = signup(&server, "Alice").await;
        let game = server.create_game(Some(&alice)).await.unwrap().id;
        let (tx, mut rx) = unbounded_channel::<GameEvent>();
        let subscribed = server.game_events(game, Box::new(tx)).await.unwrap();
        server
            .close_events(game, subscribed.subscription)
            .await
            .unwrap();
        join(&server, &alice, game).await.unwrap();
        assert!(collect(&mut rx).await.is_empty());
        assert_eq!(
            server.directory().route(game).await.unwrap().subscribers().await,
            0
        );
    }
}
