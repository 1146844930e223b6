//! Thin wrapper around the reqwest client that knows how to talk like the mobile app.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 4, 2026

use super::{
    config::ConfigFile,
    include::{header, Client, Duration, HeaderMap, HeaderValue, RequestBuilder, Result},
    session::Session,
};

pub mod types;

pub const LOGIN_PATH: &str = "/api/auth/v4/authByEmail";
pub const POLLING_PATH: &str = "/api/auth/v4/authByRequestPollingId";
pub const STARTUP_PATH: &str = "/api/app/v1/onStartup";
pub const FAVORITES_PATH: &str = "/api/discover/v1/bucket";

pub const USER_AGENT: &str =
    "TGTG/23.8.11 Dalvik/2.1.0 (Linux; U; Android 11; GM1913 Build/RKQ1.201022.002)";
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Knobs for the backend conversation. Built from the settings file, tests shrink the delays.
#[derive(Debug, Clone)]
pub struct ApiOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub login_poll_delay: Duration,
    pub rate_limit_delay: Duration,
    pub page_size: u32,
    pub radius: f64,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: "https://apptoogoodtogo.com".to_string(),
            timeout: Duration::from_secs(10),
            login_poll_delay: Duration::from_secs(5),
            rate_limit_delay: Duration::from_secs(1000),
            page_size: 50,
            radius: 30.0,
        }
    }
}

impl From<&ConfigFile> for ApiOptions {
    fn from(settings: &ConfigFile) -> Self {
        Self {
            base_url: settings.api_base_url.clone(),
            timeout: Duration::from_secs(settings.request_timeout),
            login_poll_delay: Duration::from_secs(settings.login_poll_delay),
            rate_limit_delay: Duration::from_secs(settings.rate_limit_delay),
            page_size: settings.favorites_page_size,
            radius: settings.favorites_radius,
        }
    }
}

pub struct ApiClient {
    http: Client,
    pub options: ApiOptions,
}

impl ApiClient {
    pub fn new(options: ApiOptions) -> Result<Self> {
        let http = Client::builder()
            .default_headers(default_headers())
            .timeout(options.timeout)
            .gzip(true)
            .build()?;
        Ok(Self { http, options })
    }

    /// Handle on the underlying transport, shared with the notifier.
    pub fn http(&self) -> Client {
        self.http.clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.options.base_url.trim_end_matches('/'), path)
    }

    /// Start a POST to a backend path carrying whatever the session currently holds:
    /// the bearer token once logged in and the latest anti-bot cookie.
    pub fn post(&self, session: &Session, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .post(self.url(path))
            .header(header::CONTENT_TYPE, CONTENT_TYPE);
        if let Some(token) = session.access_token() {
            req = req.bearer_auth(token);
        }
        if let Some(cookie) = &session.anti_bot_cookie {
            req = req.header(header::COOKIE, cookie.as_str());
        }
        req
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
    headers
}
