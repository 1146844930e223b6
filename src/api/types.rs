//! Request and response bodies exchanged with the backend.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 4, 2026

use super::super::{
    include::{DateTime, Deserialize, FixedOffset, Serialize},
    session::{ListingSnapshot, PickupWindow, Price},
};

pub const DEVICE_TYPE: &str = "ANDROID";

#[derive(Debug, Serialize)]
pub struct LoginPayload<'a> {
    pub device_type: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub polling_id: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Serialize)]
pub struct PollingPayload<'a> {
    pub device_type: &'a str,
    pub email: &'a str,
    pub request_polling_id: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
// The ttl has shown up both as a number and as a quoted number.
pub enum Ttl {
    Seconds(i64),
    Text(String),
}

impl Ttl {
    pub fn seconds(&self) -> Option<i64> {
        match self {
            Self::Seconds(s) => Some(*s),
            Self::Text(t) => t.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub access_token_ttl_seconds: Option<Ttl>,
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct StartupResponse {
    pub user: StartupUser,
}

#[derive(Debug, Deserialize)]
pub struct StartupUser {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct FavoritesPayload<'a> {
    pub bucket: Bucket,
    pub origin: Origin,
    pub paging: Paging,
    pub radius: f64,
    pub user_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Bucket {
    pub filler_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Origin {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct Paging {
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Deserialize)]
pub struct FavoritesResponse {
    pub mobile_bucket: MobileBucket,
}

#[derive(Debug, Deserialize)]
pub struct MobileBucket {
    #[serde(default)]
    pub items: Vec<FavoriteItem>,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteItem {
    pub item: ItemInfo,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub pickup_interval: Option<PickupInterval>,
    #[serde(default)]
    pub items_available: u32,
}

#[derive(Debug, Deserialize)]
pub struct ItemInfo {
    pub item_id: String,
    pub item_price: ItemPrice,
}

#[derive(Debug, Deserialize)]
pub struct ItemPrice {
    pub code: String,
    pub minor_units: i64,
    pub decimals: u32,
}

#[derive(Debug, Deserialize)]
pub struct PickupInterval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl From<FavoriteItem> for ListingSnapshot {
    fn from(fav: FavoriteItem) -> Self {
        Self {
            id: fav.item.item_id,
            display_name: fav.display_name,
            price: Price {
                code: fav.item.item_price.code,
                minor_units: fav.item.item_price.minor_units,
                decimals: fav.item.item_price.decimals,
            },
            pickup: fav
                .pickup_interval
                .map(|p| PickupWindow { start: p.start, end: p.end }),
            available: fav.items_available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmbedPayload<'a> {
    pub embeds: Vec<Embed>,
    pub username: &'a str,
    pub avatar_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_item_maps_into_snapshot() {
        let raw = r#"{
            "item": {"item_id": "42", "item_price": {"code": "GBP", "minor_units": 350, "decimals": 2}},
            "display_name": "Bakery - Surprise Bag",
            "pickup_interval": {"start": "2026-10-18T17:00:00Z", "end": "2026-10-18T17:30:00Z"},
            "items_available": 3
        }"#;
        let item: FavoriteItem = serde_json::from_str(raw).unwrap();
        let snap = ListingSnapshot::from(item);
        assert_eq!(snap.id, "42");
        assert_eq!(snap.display_name, "Bakery - Surprise Bag");
        assert_eq!(snap.price.minor_units, 350);
        assert_eq!(snap.available, 3);
        assert!(snap.pickup.is_some());
    }

    #[test]
    fn sold_out_item_without_pickup_window_still_parses() {
        let raw = r#"{
            "item": {"item_id": "7", "item_price": {"code": "EUR", "minor_units": 499, "decimals": 2}},
            "display_name": "Cafe",
            "items_available": 0
        }"#;
        let snap = ListingSnapshot::from(serde_json::from_str::<FavoriteItem>(raw).unwrap());
        assert_eq!(snap.available, 0);
        assert_eq!(snap.pickup, None);
    }

    #[test]
    fn ttl_accepts_number_or_string() {
        let t: TokenResponse = serde_json::from_str(
            r#"{"access_token": "a", "access_token_ttl_seconds": 172800, "refresh_token": "r"}"#,
        )
        .unwrap();
        assert_eq!(t.access_token_ttl_seconds.and_then(|t| t.seconds()), Some(172800));
        let t: TokenResponse = serde_json::from_str(
            r#"{"access_token": "a", "access_token_ttl_seconds": "3600", "refresh_token": "r"}"#,
        )
        .unwrap();
        assert_eq!(t.access_token_ttl_seconds.and_then(|t| t.seconds()), Some(3600));
    }
}
