//! Favorites listing API and the walk over its nested layout.
//!
//! Endpoint: `GET https://api.radiotime.com/profiles?query=...&render=json&viewModel=true&...`
//!
//! Response (abridged):
//! ```json
//! {
//!   "Items": [
//!     {
//!       "List": {
//!         "Items": [
//!           {
//!             "BrowseCell": {
//!               "GuideId": "s24939",
//!               "ContentInfo": { "Type": "Station" },
//!               "SEOInfo": { "Title": "BBC World Service" }
//!             }
//!           }
//!         ]
//!       }
//!     },
//!     { "Gallery": { "Items": [ { "TileCell": { "GuideId": "p17", ... } } ] } },
//!     { "Header": { ... } }
//!   ]
//! }
//! ```
//!
//! Top-level entries hold either a `List` or a `Gallery` container; anything
//! else (headers, pivots, ads) is skipped. Each container child has exactly
//! one key ending in `Cell` whose value holds `GuideId`, `ContentInfo` and
//! `SEOInfo`.

use crate::client::TuneinClient;
use crate::error::{Result, TuneinError};
use crate::types::{Classified, ContentInfo, ContentType, Favorite, SeoInfo};
use serde::de::DeserializeOwned;
use serde_json::Value;

const CELL_SUFFIX: &str = "Cell";

impl TuneinClient {
    /// Fetch the top-level `Items` of the user's favorites listing.
    ///
    /// `query` is the free-text listen context sent as the `query` parameter.
    ///
    /// # Errors
    ///
    /// - [`TuneinError::NotLoggedIn`] when no token is configured
    /// - [`TuneinError::Http`] on network failure or non-2xx status
    /// - [`TuneinError::UnexpectedShape`] when `Items` is missing
    pub fn favorites(&self, query: &str) -> Result<Vec<Value>> {
        if !self.session().is_logged_in() {
            return Err(TuneinError::NotLoggedIn);
        }
        let params = self.config().device.profile_params(query);
        let resp = self.get_json(&self.api_url("/profiles"), &params)?;
        take_items(resp, "favorites response")
    }
}

/// Move the `Items` array out of `v`.
pub(crate) fn take_items(mut v: Value, what: &str) -> Result<Vec<Value>> {
    match v.get_mut("Items").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(TuneinError::UnexpectedShape(format!("{what} has no Items array"))),
    }
}

/// The `List` or `Gallery` container of a top-level entry, if any.
pub fn container(entry: &Value) -> Option<&Value> {
    ["List", "Gallery"]
        .into_iter()
        .filter_map(|key| entry.get(key))
        .find(|v| is_truthy(v))
}

/// Child items of a container.
pub fn container_items(container: &Value) -> Result<&[Value]> {
    container["Items"]
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| TuneinError::UnexpectedShape("container has no Items array".into()))
}

/// The value of the first key ending in `Cell`.
pub fn find_cell(item: &Value) -> Option<&Value> {
    item.as_object()?
        .iter()
        .find(|(key, _)| key.ends_with(CELL_SUFFIX))
        .map(|(_, v)| v)
}

/// Decide what to do with one container child.
///
/// Guards run in order on the raw cell: cell present, `GuideId` present,
/// `SEOInfo` present, not an audiobook. Empty objects and strings count as
/// absent. Only the blocks that survive their guard are deserialized.
pub fn classify(item: &Value) -> Result<Classified> {
    let Some(cell) = find_cell(item) else {
        return Ok(Classified::NoCell);
    };
    let guide_id = match present(cell, "GuideId") {
        None => return Ok(Classified::NoGuideId),
        Some(Value::String(id)) => id.clone(),
        Some(other) => {
            return Err(TuneinError::UnexpectedShape(format!(
                "GuideId is not a string: {other}"
            )));
        }
    };
    let Some(seo) = present(cell, "SEOInfo") else {
        return Ok(Classified::NoSeoInfo { guide_id });
    };
    let seo: SeoInfo = parse_block(seo, "SEOInfo")?;
    let content_type = match present(cell, "ContentInfo") {
        Some(raw) => Some(parse_block::<ContentInfo>(raw, "ContentInfo")?.content_type),
        None => None,
    };
    if content_type == Some(ContentType::Audiobook) {
        return Ok(Classified::Audiobook { guide_id });
    }
    Ok(Classified::Playable(Favorite {
        title: seo.title,
        guide_id,
        content_type,
    }))
}

fn present<'a>(cell: &'a Value, key: &str) -> Option<&'a Value> {
    cell.get(key).filter(|v| is_truthy(v))
}

fn parse_block<T: DeserializeOwned>(raw: &Value, what: &str) -> Result<T> {
    serde_json::from_value(raw.clone())
        .map_err(|e| TuneinError::UnexpectedShape(format!("malformed {what}: {e}")))
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Object(m) => !m.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Number(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::client::tests::mock_client;
    use crate::config::ClientConfig;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn container_prefers_list_then_gallery() {
        let list = json!({ "List": { "Items": [1] }, "Gallery": { "Items": [2] } });
        assert_eq!(container(&list).unwrap()["Items"][0], 1);

        let gallery = json!({ "Gallery": { "Items": [2] } });
        assert_eq!(container(&gallery).unwrap()["Items"][0], 2);

        let empty_list = json!({ "List": {}, "Gallery": { "Items": [3] } });
        assert_eq!(container(&empty_list).unwrap()["Items"][0], 3);

        assert!(container(&json!({ "Header": { "Title": "x" } })).is_none());
    }

    #[test]
    fn container_without_items_is_shape_error() {
        let c = json!({ "Title": "no items" });
        assert!(matches!(
            container_items(&c),
            Err(TuneinError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn find_cell_matches_suffix_only() {
        let item = json!({ "Cellar": 1, "TileCell": { "GuideId": "s1" } });
        assert_eq!(find_cell(&item).unwrap()["GuideId"], "s1");
        assert!(find_cell(&json!({ "Cellar": 1 })).is_none());
    }

    #[test]
    fn classify_skip_conditions() {
        assert_eq!(classify(&json!({ "Other": {} })).unwrap(), Classified::NoCell);
        assert_eq!(
            classify(&json!({ "BrowseCell": { "SEOInfo": { "Title": "x" } } })).unwrap(),
            Classified::NoGuideId
        );
        assert_eq!(
            classify(&json!({ "BrowseCell": { "GuideId": "s1" } })).unwrap(),
            Classified::NoSeoInfo { guide_id: "s1".into() }
        );
        assert_eq!(
            classify(&json!({ "BrowseCell": {
                "GuideId": "a1",
                "ContentInfo": { "Type": "Audiobook" },
                "SEOInfo": { "Title": "Book" }
            }}))
            .unwrap(),
            Classified::Audiobook { guide_id: "a1".into() }
        );
    }

    #[test]
    fn classify_playable_keeps_type() {
        let got = classify(&json!({ "TileCell": {
            "GuideId": "p9",
            "ContentInfo": { "Type": "Show" },
            "SEOInfo": { "Title": "Daily News" }
        }}))
        .unwrap();
        assert_eq!(
            got,
            Classified::Playable(Favorite {
                title: "Daily News".into(),
                guide_id: "p9".into(),
                content_type: Some(ContentType::Other("Show".into())),
            })
        );
    }

    #[test]
    fn empty_blocks_count_as_absent() {
        assert_eq!(
            classify(&json!({ "BrowseCell": { "GuideId": "s1", "SEOInfo": {} } })).unwrap(),
            Classified::NoSeoInfo { guide_id: "s1".into() }
        );
        assert_eq!(
            classify(&json!({ "BrowseCell": { "GuideId": "", "SEOInfo": { "Title": "x" } } }))
                .unwrap(),
            Classified::NoGuideId
        );
        assert_eq!(
            classify(&json!({ "BrowseCell": {
                "GuideId": "s1",
                "ContentInfo": {},
                "SEOInfo": { "Title": "T" }
            }}))
            .unwrap(),
            Classified::Playable(Favorite {
                title: "T".into(),
                guide_id: "s1".into(),
                content_type: None,
            })
        );
    }

    #[test]
    fn missing_guide_id_wins_over_malformed_seo_info() {
        let item = json!({ "BrowseCell": { "SEOInfo": { "Name": "no title" } } });
        assert_eq!(classify(&item).unwrap(), Classified::NoGuideId);
    }

    #[test]
    fn seo_info_without_title_is_shape_error() {
        let item = json!({ "BrowseCell": { "GuideId": "s1", "SEOInfo": { "Name": "x" } } });
        assert!(matches!(classify(&item), Err(TuneinError::UnexpectedShape(_))));
    }

    #[test]
    fn favorites_sends_listen_context() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/profiles")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "morning jazz".into()),
                Matcher::UrlEncoded("viewModel".into(), "true".into()),
            ]))
            .with_body(r#"{"Items":[{"List":{"Items":[]}},{"Header":{}}]}"#)
            .create();

        let items = mock_client(&server).favorites("morning jazz").unwrap();
        assert_eq!(items.len(), 2);
        mock.assert();
    }

    #[test]
    fn favorites_requires_token() {
        let server = Server::new();
        let config = ClientConfig {
            api_base: server.url(),
            ..ClientConfig::default()
        };
        let client = TuneinClient::with_config(Session::default(), config).unwrap();
        assert!(matches!(client.favorites("x"), Err(TuneinError::NotLoggedIn)));
    }
}
