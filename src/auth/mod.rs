mod authenticator;
mod client_credentials;
mod device_code;
mod session;
mod token_response;

pub use authenticator::{AuthError, Authenticator, authenticator_for};
pub use session::Session;
