//! Posting restock embeds to the configured webhook.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 8, 2026

use super::{
    api::types::{Embed, EmbedField, EmbedPayload},
    include::{info, warn, Client, Result, StatusCode},
    session::ListingSnapshot,
};

pub const TITLE: &str = "TGTG restock found!";
pub const COLOR: u32 = 55144;
pub const USERNAME: &str = "to good to go-monitor";
pub const AVATAR_URL: &str =
    "https://de.wikipedia.org/wiki/Too_Good_To_Go#/media/Datei:Too_Good_To_Go_Logo.svg";

pub struct Notifier {
    http: Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(http: Client, webhook_url: &str) -> Self {
        Self {
            http,
            webhook_url: webhook_url.to_string(),
        }
    }

    /// One attempt per listing. Returns whether the webhook took it (204); any other answer is
    /// logged and dropped. Not reaching the webhook at all is an error.
    pub async fn notify(&self, listing: &ListingSnapshot) -> Result<bool> {
        let payload = embed_for(listing);
        let resp = self
            .http
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;
        if resp.status() == StatusCode::NO_CONTENT {
            info!("sent webhook for {}", listing.display_name);
            return Ok(true);
        }
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        warn!("webhook answered {}: {}", status, body);
        Ok(false)
    }
}

pub fn embed_for(listing: &ListingSnapshot) -> EmbedPayload<'static> {
    let duration = match &listing.pickup {
        Some(window) => window.display(),
        None => "no pickup window".to_string(),
    };
    EmbedPayload {
        embeds: vec![Embed {
            title: TITLE.to_string(),
            color: COLOR,
            fields: vec![
                field("Product", &listing.display_name),
                field("Duration", &duration),
                field("Price", &listing.price.display()),
            ],
        }],
        username: USERNAME,
        avatar_url: AVATAR_URL,
    }
}

fn field(name: &str, value: &str) -> EmbedField {
    EmbedField {
        name: name.to_string(),
        value: value.to_string(),
    }
}
