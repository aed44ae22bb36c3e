//! Podcast contents API.
//!
//! Endpoint: `GET https://api.radiotime.com/profiles/{id}/contents`
//!
//! Response (abridged):
//! ```json
//! {
//!   "Items": [
//!     { "Header": { "Title": "Episodes" } },
//!     {
//!       "GuideId": "c100",
//!       "Children": [
//!         { "GuideId": "t2001", "Title": "Latest episode" },
//!         { "GuideId": "t2000", "Title": "Previous episode" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Children are ordered newest first.

use crate::client::TuneinClient;
use crate::error::{Result, TuneinError};
use crate::favorites::take_items;
use serde_json::Value;
use tracing::debug;

impl TuneinClient {
    /// Guide id of the newest episode of a podcast or show.
    ///
    /// Returns `None` when no item of the contents listing has children.
    pub fn latest_episode(&self, guide_id: &str) -> Result<Option<String>> {
        let path = format!("/profiles/{}/contents", urlencoding::encode(guide_id));
        let resp = self.get_json(&self.api_url(&path), &[])?;
        let items = take_items(resp, "contents response")?;
        let episode = first_child_id(&items)?;
        debug!(guide_id, episode = episode.as_deref(), "latest episode");
        Ok(episode)
    }
}

/// `GuideId` of the first child of the first item carrying a non-empty `Children` array.
pub fn first_child_id(items: &[Value]) -> Result<Option<String>> {
    let Some(child) = items
        .iter()
        .filter_map(|item| item["Children"].as_array())
        .find_map(|children| children.first())
    else {
        return Ok(None);
    };
    child["GuideId"]
        .as_str()
        .map(|id| Some(id.to_owned()))
        .ok_or_else(|| TuneinError::UnexpectedShape("episode has no GuideId".into()))
}
