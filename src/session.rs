//! The per-account session and the listing values it keeps track of.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 3, 2026

use super::include::{header, DateTime, FixedOffset, HashMap, HeaderMap, ListingId, Local};

/// Tokens handed out by the backend once the login email has been confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub code: String,
    pub minor_units: i64,
    pub decimals: u32,
}

impl Price {
    pub fn to_major_units(&self) -> f64 {
        self.minor_units as f64 / 10f64.powi(self.decimals as i32)
    }
    // Webhooks always show the price in hundredths, whatever the decimals say.
    pub fn display(&self) -> String {
        format!("{} {}", self.minor_units as f64 / 100.0, self.code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickupWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl PickupWindow {
    pub fn display(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// One favourite as seen in a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSnapshot {
    pub id: ListingId,
    pub display_name: String,
    pub price: Price,
    pub pickup: Option<PickupWindow>,
    pub available: u32,
}

/// Everything we know about the monitored account. Owned by the monitor and handed down by
/// reference to the login, fetch and detection steps.
#[derive(Debug, Default)]
pub struct Session {
    pub email: String,
    pub credentials: Option<Credentials>,
    pub anti_bot_cookie: Option<String>,
    pub user_id: Option<String>,
    pub baseline: HashMap<ListingId, ListingSnapshot>,
    pub baseline_initialized: bool,
}

impl Session {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Default::default()
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.access_token.as_str())
    }

    /// Keep the first `name=value` pair of the response's `Set-Cookie` header. A response
    /// without one leaves the last value in place.
    pub fn capture_cookie(&mut self, headers: &HeaderMap) {
        let cookie = headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::trim)
            .filter(|pair| !pair.is_empty());
        if let Some(pair) = cookie {
            self.anti_bot_cookie = Some(pair.to_string());
        }
    }
}
