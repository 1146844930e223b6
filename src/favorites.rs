//! Fetching the favourites bucket for the logged in user.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 6, 2026

use super::{
    api::{
        types::{Bucket, FavoritesPayload, FavoritesResponse, Origin, Paging},
        ApiClient, FAVORITES_PATH,
    },
    include::{sleep, warn, Result, StatusCode},
    myerrors::FetchError,
    session::{ListingSnapshot, Session},
};

/// Get the current favourites, in the order the backend lists them. Throttling (403/429) is
/// waited out here: we sleep the rate limit delay and send the same query again, for as long
/// as it takes. Anything else that isn't a success is handed back as an error.
pub async fn fetch_favorites(api: &ApiClient, session: &mut Session) -> Result<Vec<ListingSnapshot>> {
    let user_id = match &session.user_id {
        Some(id) => id.clone(),
        None => return Err(Box::new(FetchError::NotLoggedIn)),
    };
    loop {
        let payload = FavoritesPayload {
            bucket: Bucket {
                filler_type: "Favorites",
            },
            origin: Origin {
                latitude: 0.0,
                longitude: 0.0,
            },
            paging: Paging {
                page: 0,
                size: api.options.page_size,
            },
            radius: api.options.radius,
            user_id: &user_id,
        };
        let resp = api.post(session, FAVORITES_PATH).json(&payload).send().await?;
        // the cookie rotates even on throttled responses.
        session.capture_cookie(resp.headers());
        let status = resp.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            warn!(
                "favourites throttled with status {}, retrying in {}s",
                status.as_u16(),
                api.options.rate_limit_delay.as_secs()
            );
            sleep(api.options.rate_limit_delay).await;
            continue;
        }
        if !status.is_success() {
            return Err(Box::new(FetchError::UnexpectedStatus(status.as_u16())));
        }
        let body = resp.text().await?;
        let favorites: FavoritesResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
        return Ok(favorites
            .mobile_bucket
            .items
            .into_iter()
            .map(ListingSnapshot::from)
            .collect());
    }
}
