//! Session lifecycle commands: sign-in, refresh, revoke.

mod refresh_session;
mod revoke_session;
mod sign_in;

pub use refresh_session::{RefreshSessionCommand, RefreshSessionHandler, RefreshSessionResult};
pub use revoke_session::{RevokeSessionCommand, RevokeSessionHandler};
pub use sign_in::{SignInCommand, SignInHandler, SignInResult};
