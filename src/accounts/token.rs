/// Scheme prefix accepted in front of a bearer credential.
const BEARER: &str = "Bearer ";

/// Opaque bearer secret: 256 random bits, hex encoded.
/// Only the holder ever sees the plaintext; the store keeps [`Token::digest`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn random() -> Self {
        use rand::Rng;
        let ref mut bytes = [0u8; 32];
        rand::rng().fill(bytes);
        Self(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn digest(&self) -> Vec<u8> {
        Self::hash(&self.0)
    }
    pub fn hash(token: &str) -> Vec<u8> {
        use sha2::Digest;
        sha2::Sha256::digest(token.as_bytes()).to_vec()
    }
    /// Extracts the raw token from an `authorization` credential value.
    /// Both `Bearer <token>` and a bare `<token>` are accepted.
    pub fn strip(credential: &str) -> &str {
        let credential = credential.trim_start();
        credential.strip_prefix(BEARER).unwrap_or(credential).trim()
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

// secrets stay out of logs
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(..)")
    }
}
