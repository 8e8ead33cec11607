use super::*;
use crate::Error;
use crate::ID;
use crate::Result;
use crate::Unique;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Issues bearer tokens and resolves them back to accounts.
/// Synchronised independently of every game.
#[derive(Debug, Default)]
pub struct AccountStore {
    ledger: RwLock<Ledger>,
}

#[derive(Debug, Default)]
struct Ledger {
    accounts: HashMap<ID<Account>, Account>,
    digests: HashMap<Vec<u8>, ID<Account>>,
}

impl AccountStore {
    /// Creates an account and returns its token. The token is not retrievable later.
    pub async fn create_account(&self, name: &str) -> Token {
        let mut ledger = self.ledger.write().await;
        let token = loop {
            let token = Token::random();
            if !ledger.digests.contains_key(&token.digest()) {
                break token;
            }
        };
        let account = Account::new(ID::default(), name.to_string(), token.digest());
        ledger.digests.insert(account.digest().to_vec(), account.id());
        ledger.accounts.insert(account.id(), account.clone());
        log::info!("[accounts] created account {} ({})", account.id(), name);
        token
    }
    /// Resolves a raw token. Empty and unknown tokens are both unauthenticated.
    pub async fn resolve(&self, token: &str) -> Result<Account> {
        if token.is_empty() {
            return Err(Error::unauthenticated("missing token"));
        }
        let ledger = self.ledger.read().await;
        ledger
            .digests
            .get(&Token::hash(token))
            .and_then(|id| ledger.accounts.get(id))
            .cloned()
            .ok_or_else(|| Error::unauthenticated("invalid token"))
    }
    /// Boundary adapter for the `authorization` credential of an inbound request.
    pub async fn resolve_credential(&self, credential: Option<&str>) -> Result<Account> {
        match credential {
            Some(credential) => self.resolve(Token::strip(credential)).await,
            None => Err(Error::unauthenticated("missing token")),
        }
    }
    pub async fn lookup(&self, id: ID<Account>) -> Option<Account> {
        self.ledger.read().await.accounts.get(&id).cloned()
    }
    pub async fn count(&self) -> usize {
        self.ledger.read().await.accounts.len()
    }
}
