use crate::ID;
use crate::Unique;

/// Registered identity. Created once by the store and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    id: ID<Self>,
    name: String,
    digest: Vec<u8>,
}

impl Account {
    pub fn new(id: ID<Self>, name: String, digest: Vec<u8>) -> Self {
        Self { id, name, digest }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Digest of the bearer token that proves this identity.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}

impl Unique for Account {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
