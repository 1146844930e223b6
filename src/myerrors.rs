//! Module containing the specific errors to be defined for my project.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 3, 2026

use super::include::{error, fmt};

#[derive(Debug, PartialEq)]
// Enum representing errors that are possible while reading the account file.
pub enum ConfigError {
    MissingEmail,
    MissingWebhookUrl,
    InvalidEmail(String),
    InvalidWebhookUrl(String),
}

impl error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingEmail => {
                write!(f, "Could not load account! First line (email) is missing.")
            }
            ConfigError::MissingWebhookUrl => write!(
                f,
                "Could not load account! Second line (webhook url) is missing."
            ),
            ConfigError::InvalidEmail(email) => write!(
                f,
                "Could not load account! '{}' does not look like an email.",
                email
            ),
            ConfigError::InvalidWebhookUrl(url) => write!(
                f,
                "Could not load account! '{}' is not an http(s) url.",
                url
            ),
        }
    }
}

#[derive(Debug, PartialEq)]
// Enum representing the ways the login handshake can fail for good.
pub enum AuthError {
    // The backend answered 403 or 429, we are being blocked.
    Blocked(u16),
    // A body we needed could not be decoded. Holds the step and the decoder message.
    MalformedResponse(&'static str, String),
}

impl error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Blocked(status) => write!(
                f,
                "Could not log in! Backend refused the login with status {}.",
                status
            ),
            AuthError::MalformedResponse(step, e) => write!(
                f,
                "Could not log in! Malformed {} response: {}",
                step, e
            ),
        }
    }
}

#[derive(Debug, PartialEq)]
// Enum representing errors while fetching the favourites list.
pub enum FetchError {
    NotLoggedIn,
    UnexpectedStatus(u16),
    MalformedResponse(String),
}

impl error::Error for FetchError {}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotLoggedIn => {
                write!(f, "Could not fetch favourites! Session has no user id yet.")
            }
            FetchError::UnexpectedStatus(status) => write!(
                f,
                "Could not fetch favourites! Unexpected status {}.",
                status
            ),
            FetchError::MalformedResponse(e) => {
                write!(f, "Could not fetch favourites! Malformed response: {}", e)
            }
        }
    }
}
