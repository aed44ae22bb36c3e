//! TuneIn directory client library.
//!
//! Lists a user's favorited stations and podcasts and resolves each one to
//! a playable stream URL.
//!
//! # Authentication
//!
//! The favorites and contents endpoints require the bearer token issued to
//! a logged-in TuneIn web session. The token is persisted to
//! `~/.config/tunein/session.json`.
//!
//! ```no_run
//! use tunein_api::auth::Session;
//! use tunein_api::{ClientConfig, TuneinClient};
//!
//! // Save token
//! Session::with_token("eyJhbGciOi...").save().unwrap();
//!
//! // Create client from the saved session
//! let session = Session::load().unwrap();
//! let client = TuneinClient::with_config(session, ClientConfig::default()).unwrap();
//! let url = client.resolve_stream("s24939").unwrap();
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                              | Endpoint                          | Description              |
//! |-------------------------------------|-----------------------------------|--------------------------|
//! | [`TuneinClient::favorites`]         | `api/profiles`                    | Favorites listing        |
//! | [`TuneinClient::latest_episode`]    | `api/profiles/{id}/contents`      | Newest podcast episode   |
//! | [`TuneinClient::stream_candidates`] | `opml/Tune.ashx`                  | Playable candidates      |
//! | [`TuneinClient::resolve_stream`]    | (uses `stream_candidates`)        | One preferred stream URL |
//!
//! # Walking favorites
//!
//! The listing is a two-level structure: top-level entries hold a `List` or
//! `Gallery` container, whose children each hold one `*Cell` object. See
//! [`favorites::container`], [`favorites::container_items`] and
//! [`favorites::classify`].

pub mod auth;
pub mod client;
pub mod config;
mod contents;
pub mod error;
pub mod favorites;
mod tune;
pub mod types;

pub use client::TuneinClient;
pub use config::{ClientConfig, DeviceProfile};
pub use contents::first_child_id;
pub use error::{Result, TuneinError};
pub use tune::{PREFERRED_MEDIA_TYPE, select_stream};
