//! Stream resolution API.
//!
//! Endpoint: `GET https://opml.radiotime.com/Tune.ashx?id=s24939&formats=mp3,aac,...&render=json`
//!
//! Response:
//! ```json
//! {
//!   "head": { "status": "200" },
//!   "body": [
//!     { "element": "audio", "url": "https://stream.example/aac", "media_type": "aac", "bitrate": 64 },
//!     { "element": "audio", "url": "https://stream.example/mp3", "media_type": "mp3", "bitrate": 128 }
//!   ]
//! }
//! ```
//!
//! Failures come back as HTTP 200 with `head.status` set to an error code
//! and a `head.fault` message.

use crate::client::TuneinClient;
use crate::error::{Result, TuneinError};
use crate::types::StreamDescriptor;
use serde_json::Value;
use tracing::debug;

/// Media type picked over any other candidate when present.
pub const PREFERRED_MEDIA_TYPE: &str = "mp3";

const TUNE_FORMATS: &str = "mp3,aac,ogg,flash,html,hls";
const TUNE_PARTNER_ID: &str = "RadioTime";
const TUNE_VERSION: &str = "7.10.2";

impl TuneinClient {
    /// List the playable stream candidates for a guide id, in response order.
    pub fn stream_candidates(&self, guide_id: &str) -> Result<Vec<StreamDescriptor>> {
        let params = [
            ("id", guide_id),
            ("itemUrlScheme", "secure"),
            ("partnerId", TUNE_PARTNER_ID),
            ("version", TUNE_VERSION),
            ("formats", TUNE_FORMATS),
            ("render", "json"),
        ];
        let resp = self.get_json(&self.opml_url("/Tune.ashx"), &params)?;
        check_head(&resp)?;
        parse_candidates(resp)
    }

    /// Resolve a guide id to one playable URL.
    ///
    /// Returns the first `mp3` candidate, else the first candidate of any
    /// type, else `None` when the resolver offers nothing.
    pub fn resolve_stream(&self, guide_id: &str) -> Result<Option<String>> {
        let candidates = self.stream_candidates(guide_id)?;
        let url = select_stream(&candidates, PREFERRED_MEDIA_TYPE).map(str::to_owned);
        debug!(guide_id, candidates = candidates.len(), resolved = url.is_some(), "tuned");
        Ok(url)
    }
}

/// Pick the first candidate tagged `preferred`, falling back to the first candidate.
pub fn select_stream<'a>(candidates: &'a [StreamDescriptor], preferred: &str) -> Option<&'a str> {
    candidates
        .iter()
        .find(|c| c.media_type == preferred)
        .or_else(|| candidates.first())
        .map(|c| c.url.as_str())
}

fn check_head(resp: &Value) -> Result<()> {
    let Some(status) = resp["head"]["status"].as_str() else {
        return Ok(());
    };
    if status == "200" {
        return Ok(());
    }
    let fault = resp["head"]["fault"]
        .as_str()
        .unwrap_or("unknown error")
        .to_owned();
    Err(TuneinError::Api {
        status: status.to_owned(),
        fault,
    })
}

fn parse_candidates(mut resp: Value) -> Result<Vec<StreamDescriptor>> {
    match resp.get_mut("body").map(Value::take) {
        Some(body @ Value::Array(_)) => serde_json::from_value(body)
            .map_err(|e| TuneinError::UnexpectedShape(format!("malformed stream candidate: {e}"))),
        _ => Err(TuneinError::UnexpectedShape(
            "tune response has no body array".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::mock_client;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn stream(media_type: &str, url: &str) -> StreamDescriptor {
        StreamDescriptor {
            media_type: media_type.into(),
            url: url.into(),
        }
    }

    #[test]
    fn preferred_type_wins_over_order() {
        let c = [stream("aac", "A"), stream("mp3", "B")];
        assert_eq!(select_stream(&c, PREFERRED_MEDIA_TYPE), Some("B"));
    }

    #[test]
    fn first_preferred_match_is_taken() {
        let c = [stream("mp3", "A"), stream("mp3", "B")];
        assert_eq!(select_stream(&c, PREFERRED_MEDIA_TYPE), Some("A"));
    }

    #[test]
    fn falls_back_to_first_candidate() {
        let c = [stream("aac", "A")];
        assert_eq!(select_stream(&c, PREFERRED_MEDIA_TYPE), Some("A"));
    }

    #[test]
    fn no_candidates_resolves_nothing() {
        assert_eq!(select_stream(&[], PREFERRED_MEDIA_TYPE), None);
    }

    #[test]
    fn fault_envelope_is_api_error() {
        let resp = json!({ "head": { "status": "400", "fault": "Invalid id" } });
        match check_head(&resp) {
            Err(TuneinError::Api { status, fault }) => {
                assert_eq!(status, "400");
                assert_eq!(fault, "Invalid id");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn candidate_without_url_is_shape_error() {
        let resp = json!({ "body": [{ "media_type": "mp3" }] });
        assert!(matches!(
            parse_candidates(resp),
            Err(TuneinError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn resolve_stream_queries_tune_endpoint() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/Tune.ashx")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("id".into(), "s24939".into()),
                Matcher::UrlEncoded("formats".into(), TUNE_FORMATS.into()),
                Matcher::UrlEncoded("render".into(), "json".into()),
            ]))
            .with_body(
                json!({
                    "head": { "status": "200" },
                    "body": [
                        { "element": "audio", "media_type": "aac", "url": "https://a" },
                        { "element": "audio", "media_type": "mp3", "url": "https://b" }
                    ]
                })
                .to_string(),
            )
            .create();

        let url = mock_client(&server).resolve_stream("s24939").unwrap();
        assert_eq!(url.as_deref(), Some("https://b"));
        mock.assert();
    }

    #[test]
    fn empty_body_resolves_to_none() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/Tune.ashx")
            .match_query(Matcher::Any)
            .with_body(r#"{"head":{"status":"200"},"body":[]}"#)
            .create();

        assert_eq!(mock_client(&server).resolve_stream("s1").unwrap(), None);
    }
}
