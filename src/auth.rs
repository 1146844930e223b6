//! The email confirmation login: ask for a login mail, wait for it to be clicked, then find out
//! who we are.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 5, 2026

use super::{
    api::{
        types::{
            LoginPayload, LoginResponse, PollingPayload, StartupResponse, TokenResponse,
            DEVICE_TYPE,
        },
        ApiClient, LOGIN_PATH, POLLING_PATH, STARTUP_PATH,
    },
    include::{info, sleep, warn, ChronoDuration, Local, Response, Result, StatusCode},
    myerrors::AuthError,
    session::{Credentials, Session},
};

/// Run the whole handshake. On success the session holds the tokens, the user id and the
/// freshest anti-bot cookie. Being refused (403/429) at any step is fatal, so is any body we
/// cannot decode. The only thing we wait out is the empty polling body.
pub async fn authenticate(api: &ApiClient, session: &mut Session) -> Result<(Credentials, String)> {
    info!("logging in as {}...", session.email);
    let polling_id = initiate(api, session).await?;
    let credentials = poll_for_tokens(api, session, &polling_id).await?;
    if let Some(expires_at) = credentials.expires_at {
        info!("access token valid until {}", expires_at);
    }
    if credentials.refresh_token.is_empty() {
        warn!("backend handed out no refresh token");
    }
    session.credentials = Some(credentials.clone());
    let user_id = fetch_user_id(api, session).await?;
    session.user_id = Some(user_id.clone());
    info!("logged in with user-id {}", user_id);
    Ok((credentials, user_id))
}

// *** Handshake Steps ***

async fn initiate(api: &ApiClient, session: &mut Session) -> Result<String> {
    let payload = LoginPayload {
        device_type: DEVICE_TYPE,
        email: &session.email,
    };
    let resp = api.post(session, LOGIN_PATH).json(&payload).send().await?;
    let body = read_body(resp, session).await?;
    let login = decode::<LoginResponse>("login", &body)?;
    info!("login mail requested, state: {}", login.state);
    Ok(login.polling_id)
}

async fn poll_for_tokens(
    api: &ApiClient,
    session: &mut Session,
    polling_id: &str,
) -> Result<Credentials> {
    loop {
        sleep(api.options.login_poll_delay).await;
        let payload = PollingPayload {
            device_type: DEVICE_TYPE,
            email: &session.email,
            request_polling_id: polling_id,
        };
        let resp = api.post(session, POLLING_PATH).json(&payload).send().await?;
        info!("polling status {}", resp.status().as_u16());
        let body = read_body(resp, session).await?;
        // nothing yet means the mail hasn't been clicked, keep waiting.
        if body.trim().is_empty() {
            info!("empty polling body");
            continue;
        }
        let tokens = decode::<TokenResponse>("polling", &body)?;
        let expires_at = tokens
            .access_token_ttl_seconds
            .and_then(|ttl| ttl.seconds())
            .and_then(ChronoDuration::try_seconds)
            .and_then(|ttl| Local::now().checked_add_signed(ttl));
        return Ok(Credentials {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_at,
        });
    }
}

async fn fetch_user_id(api: &ApiClient, session: &mut Session) -> Result<String> {
    let resp = api.post(session, STARTUP_PATH).send().await?;
    let body = read_body(resp, session).await?;
    let startup = decode::<StartupResponse>("startup", &body)?;
    Ok(startup.user.user_id)
}

// *** Helper Functions ***

// Refuse blocked responses, remember the cookie and hand back the body text.
async fn read_body(resp: Response, session: &mut Session) -> Result<String> {
    session.capture_cookie(resp.headers());
    let status = resp.status();
    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        return Err(Box::new(AuthError::Blocked(status.as_u16())));
    }
    Ok(resp.text().await?)
}

fn decode<T: serde::de::DeserializeOwned>(step: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| AuthError::MalformedResponse(step, e.to_string()).into())
}
