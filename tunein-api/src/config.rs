//! Client configuration: endpoints, TLS policy, and the device parameter bag.

use std::time::Duration;

/// Production host for profile and favorites endpoints.
pub const DEFAULT_API_BASE: &str = "https://api.radiotime.com";
/// Production host for the OPML `Tune.ashx` stream resolver.
pub const DEFAULT_OPML_BASE: &str = "https://opml.radiotime.com";
/// Browser user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// Settings for [`TuneinClient`](crate::TuneinClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for `/profiles` requests, without trailing slash.
    pub api_base: String,
    /// Base URL for `/Tune.ashx` requests, without trailing slash.
    pub opml_base: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Skip TLS certificate verification. On by default: the directory
    /// hosts are reached the way the mobile app reaches them.
    pub accept_invalid_certs: bool,
    pub device: DeviceProfile,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            opml_base: DEFAULT_OPML_BASE.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            accept_invalid_certs: true,
            device: DeviceProfile::default(),
        }
    }
}

/// Device, locale, and session metadata attached to the favorites request.
///
/// Defaults mirror an iOS client on wifi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    pub audio_port: String,
    pub connection: String,
    pub device: String,
    pub listen_id: String,
    pub locale: String,
    pub orientation: String,
    pub origin: String,
    pub partner_id: String,
    pub resolution: String,
    pub serial: String,
    pub version: String,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            audio_port: "Speaker".into(),
            connection: "wifi".into(),
            device: "phone".into(),
            listen_id: "1769228237".into(),
            locale: "en".into(),
            orientation: "portrait".into(),
            origin: "active".into(),
            partner_id: "M2t9wS30".into(),
            resolution: "440,956".into(),
            serial: "6A39BB01-6E01-4EED-AE1A-6ED2CD3DE6CB".into(),
            version: "40.7.1".into(),
        }
    }
}

impl DeviceProfile {
    /// Query parameters for `GET /profiles`, with `query` as the listen context.
    pub fn profile_params<'a>(&'a self, query: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            ("audioport", self.audio_port.as_str()),
            ("con", self.connection.as_str()),
            ("device", self.device.as_str()),
            ("fulltextsearch", "true"),
            ("itemUrlScheme", "secure"),
            ("listenId", self.listen_id.as_str()),
            ("locale", self.locale.as_str()),
            ("orientation", self.orientation.as_str()),
            ("origin", self.origin.as_str()),
            ("partnerId", self.partner_id.as_str()),
            ("query", query),
            ("render", "json"),
            ("resolution", self.resolution.as_str()),
            ("serial", self.serial.as_str()),
            ("version", self.version.as_str()),
            ("viewModel", "true"),
        ]
    }
}
