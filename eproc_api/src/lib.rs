//! Protocol layer for the TJRS eproc portal: certificate login, session
//! cookies, endpoint discovery, form payloads and the record types the
//! portal's pages describe.

pub mod auth;
mod client;
mod endpoints;
mod errors;
pub mod forms;
pub mod portal;
pub mod types;
pub mod user_agent;

pub use self::auth::{AuthConfig, AuthState, CookieJar, Session, SessionAuthenticator};
pub use self::client::{decode_latin1, PortalClient};
pub use self::endpoints::{Endpoint, HiddenPartiesCall, HIDDEN_PARTIES_MARKER};
pub use self::errors::Error;
pub use self::forms::{DocumentSearchForm, Form, HiddenPartiesForm, QuickSearchForm};
pub use self::portal::PortalUrls;
