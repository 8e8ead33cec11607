//! Account creation and bearer-token resolution.
//!
//! - [`Account`]: Immutable identity created once per `create_account`
//! - [`Token`]: Opaque bearer secret handed to the client exactly once
//! - [`AccountStore`]: Token issuance and the auth gate for every request
//!
//! Only SHA-256 digests of tokens are kept; see [`Token::digest`].
mod account;
mod store;
mod token;

pub use account::*;
pub use store::*;
pub use token::*;
