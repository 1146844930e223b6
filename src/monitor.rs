//! Monitor struct to own the session and drive login, polling and notifications.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 10, 2026

use super::{
    api::{ApiClient, ApiOptions},
    auth::authenticate,
    config::Config,
    favorites::fetch_favorites,
    include::{info, sleep, Duration, Result},
    notifier::Notifier,
    restock::detect,
    session::Session,
};

pub struct Monitor {
    pub session: Session,
    api: ApiClient,
    notifier: Notifier,
    delay: Duration,
}

impl Monitor {
    pub fn new(config: &Config) -> Result<Self> {
        let api = ApiClient::new(ApiOptions::from(&config.settings))?;
        Ok(Self::with_client(
            api,
            &config.account.email,
            &config.account.webhook_url,
            Duration::from_secs(config.settings.monitor_delay),
        ))
    }

    pub fn with_client(api: ApiClient, email: &str, webhook_url: &str, delay: Duration) -> Self {
        let notifier = Notifier::new(api.http(), webhook_url);
        Self {
            session: Session::new(email),
            api,
            notifier,
            delay,
        }
    }

    /// Log in and then poll forever. Only returns when something fatal happened.
    pub async fn run(&mut self) -> Result<()> {
        self.login().await?;
        loop {
            sleep(self.delay).await;
            self.poll_once().await?;
        }
    }

    pub async fn login(&mut self) -> Result<()> {
        authenticate(&self.api, &mut self.session).await?;
        Ok(())
    }

    /// One fetch, compare and notify round. Returns how many webhooks went out.
    pub async fn poll_once(&mut self) -> Result<usize> {
        info!("Monitoring...");
        let listings = fetch_favorites(&self.api, &mut self.session).await?;
        let seeding = !self.session.baseline_initialized;
        if seeding {
            info!("initialising favourites with {} listings", listings.len());
        }
        let detection = detect(&mut self.session, listings);
        if detection.is_empty() {
            return Ok(0);
        }
        let mut sent = 0;
        if let Some(listing) = &detection.test_notification {
            info!("sending test webhook for {}", listing.display_name);
            if self.notifier.notify(listing).await? {
                sent += 1;
            }
        }
        if !detection.events.is_empty() {
            info!("found a restock");
        }
        for event in &detection.events {
            info!(
                "{} went from {} to {} available at {:.2} {}",
                event.listing.display_name,
                event.previous,
                event.listing.available,
                event.listing.price.to_major_units(),
                event.listing.price.code
            );
            if self.notifier.notify(&event.listing).await? {
                sent += 1;
            }
        }
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{testing, FAVORITES_PATH, LOGIN_PATH, POLLING_PATH, STARTUP_PATH};
    use crate::favorites::tests::{bucket_json, logged_in_session};
    use mockito::{Matcher, Server, ServerGuard};

    fn monitor_for(server: &ServerGuard) -> Monitor {
        Monitor::with_client(
            testing::client(&server.url()),
            "me@example.com",
            &format!("{}/hook", server.url()),
            Duration::from_millis(1),
        )
    }

    #[tokio::test]
    async fn first_poll_seeds_and_sends_one_test_webhook() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", FAVORITES_PATH)
            .with_body(bucket_json(&[("a", 2), ("b", 5)]))
            .create_async()
            .await;
        let hook = server
            .mock("POST", "/hook")
            .match_body(Matcher::Regex("Store a".to_string()))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let mut monitor = monitor_for(&server);
        monitor.session = logged_in_session();
        let sent = monitor.poll_once().await.unwrap();

        assert_eq!(sent, 1);
        assert!(monitor.session.baseline_initialized);
        assert_eq!(monitor.session.baseline.len(), 2);
        hook.assert_async().await;
    }

    #[tokio::test]
    async fn later_polls_notify_each_restock() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", FAVORITES_PATH)
            .with_body(bucket_json(&[("a", 3), ("b", 1), ("c", 2)]))
            .create_async()
            .await;
        let hook = server
            .mock("POST", "/hook")
            .with_status(204)
            .expect(2)
            .create_async()
            .await;

        let mut monitor = monitor_for(&server);
        monitor.session = logged_in_session();
        // pretend an earlier poll saw a=1, b=4 and nothing for c.
        let seed = crate::favorites::fetch_favorites(&monitor.api, &mut monitor.session)
            .await
            .unwrap()
            .into_iter()
            .map(|mut l| {
                l.available = if l.id == "a" { 1 } else { 4 };
                l
            })
            .filter(|l| l.id != "c")
            .collect();
        detect(&mut monitor.session, seed);

        let sent = monitor.poll_once().await.unwrap();

        assert_eq!(sent, 2);
        assert_eq!(monitor.session.baseline["a"].available, 3);
        assert_eq!(monitor.session.baseline["b"].available, 4);
        assert_eq!(monitor.session.baseline["c"].available, 2);
        hook.assert_async().await;
    }

    #[tokio::test]
    async fn failed_webhooks_do_not_stop_the_poll() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", FAVORITES_PATH)
            .with_body(bucket_json(&[("a", 1)]))
            .create_async()
            .await;
        let hook = server
            .mock("POST", "/hook")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let mut monitor = monitor_for(&server);
        monitor.session = logged_in_session();
        assert_eq!(monitor.poll_once().await.unwrap(), 0);
        assert!(monitor.session.baseline_initialized);
        hook.assert_async().await;
    }

    #[tokio::test]
    async fn run_logs_in_then_polls_until_a_fatal_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", LOGIN_PATH)
            .with_body(r#"{"polling_id":"poll-1","state":"WAIT"}"#)
            .create_async()
            .await;
        server
            .mock("POST", POLLING_PATH)
            .with_body(r#"{"access_token":"access-1","refresh_token":"refresh-1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", STARTUP_PATH)
            .with_body(r#"{"user":{"user_id":"user-9"}}"#)
            .create_async()
            .await;
        let favorites = server
            .mock("POST", FAVORITES_PATH)
            .match_body(Matcher::PartialJson(serde_json::json!({"user_id": "user-9"})))
            .with_body(bucket_json(&[]))
            .expect(2)
            .create_async()
            .await;
        // the third fetch comes back broken and ends the run.
        server
            .mock("POST", FAVORITES_PATH)
            .with_status(500)
            .create_async()
            .await;

        let mut monitor = monitor_for(&server);
        let err = monitor.run().await.unwrap_err();

        assert!(err.to_string().contains("500"));
        assert_eq!(monitor.session.user_id.as_deref(), Some("user-9"));
        favorites.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_webhook_ends_the_poll() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", FAVORITES_PATH)
            .with_body(bucket_json(&[("a", 1)]))
            .create_async()
            .await;

        let mut monitor = Monitor::with_client(
            testing::client(&server.url()),
            "me@example.com",
            "http://127.0.0.1:9/hook",
            Duration::from_millis(1),
        );
        monitor.session = logged_in_session();
        let err = monitor.poll_once().await.unwrap_err();

        assert!(err.downcast_ref::<reqwest::Error>().is_some());
        // the baseline was seeded before the webhook went out.
        assert!(monitor.session.baseline_initialized);
    }
}
