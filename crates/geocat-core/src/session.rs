// ── Session context & background validity monitor ──
//
// No ambient globals: every ListController receives an explicit
// `SessionContext` handle at construction. The monitor re-checks the
// backend on a fixed interval regardless of user interaction; a failed
// or invalid check clears the session and signals consumers to redirect
// to the login boundary.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use geocat_api::{AdminClient, SessionUser};

use crate::cache::{SESSION_KEY, SnapshotCache};

/// How often the backend session is re-validated.
pub const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Explicit, shareable handle to the logged-in user.
///
/// The payload is mirrored to the snapshot cache under a fixed key so a
/// restart restores the session without a login round trip. The mirror
/// is disposable: corrupt or unverified payloads read as logged out.
pub struct SessionContext {
    user: ArcSwapOption<SessionUser>,
    cache: Arc<SnapshotCache>,
}

impl SessionContext {
    /// Restore from the persisted payload, if any survives scrutiny.
    pub fn restore(cache: Arc<SnapshotCache>) -> Arc<Self> {
        let user = cache
            .get::<SessionUser>(SESSION_KEY)
            .filter(|u| u.is_verified && !u.email.is_empty());
        if user.is_none() {
            cache.remove(SESSION_KEY);
        }
        Arc::new(Self {
            user: ArcSwapOption::from(user.map(Arc::new)),
            cache,
        })
    }

    pub fn current(&self) -> Option<Arc<SessionUser>> {
        self.user.load_full()
    }

    /// Whether admin pages may be shown. Unverified users don't count.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some_and(|u| u.is_verified)
    }

    /// Install a fresh session payload and persist it.
    pub fn login(&self, user: SessionUser) {
        self.cache.set(SESSION_KEY, &user);
        self.user.store(Some(Arc::new(user)));
    }

    /// Drop the session locally (memory + mirror).
    pub fn clear(&self) {
        self.user.store(None);
        self.cache.remove(SESSION_KEY);
    }

    /// Tell the backend goodbye, then clear locally either way.
    pub async fn logout(&self, client: &AdminClient) {
        if let Some(user) = self.current() {
            if let Err(e) = client.logout(&user.email).await {
                warn!("logout call failed: {e}");
            }
        }
        self.clear();
    }
}

/// Background session re-validation task.
///
/// Checks immediately on spawn, then on every interval tick. The watch
/// channel carries the latest verdict; consumers redirect on `false`.
pub struct SessionMonitor {
    handle: JoinHandle<()>,
    valid: watch::Receiver<bool>,
    cancel: CancellationToken,
}

impl SessionMonitor {
    pub fn spawn(
        client: AdminClient,
        session: Arc<SessionContext>,
        interval: Duration,
    ) -> Self {
        let cancel = CancellationToken::new();
        let (tx, valid) = watch::channel(session.is_authenticated());
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = ticker.tick() => {
                        check_once(&client, &session, &tx).await;
                    }
                }
            }
        });

        Self {
            handle,
            valid,
            cancel,
        }
    }

    /// Subscribe to validity updates.
    pub fn validity(&self) -> watch::Receiver<bool> {
        self.valid.clone()
    }

    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
    }
}

async fn check_once(
    client: &AdminClient,
    session: &SessionContext,
    tx: &watch::Sender<bool>,
) {
    let Some(user) = session.current() else {
        let _ = tx.send(false);
        return;
    };

    match client.check_session(&user.email).await {
        Ok(check) if check.valid => {
            // Keep the server's view of the user if it sent one.
            if let Some(updated) = check.user {
                session.login(updated);
            }
            let _ = tx.send(true);
        }
        Ok(_) => {
            debug!("session expired for {}", user.email);
            session.clear();
            let _ = tx.send(false);
        }
        Err(e) => {
            // Background check: fail silently beyond clearing the session.
            debug!("session check failed: {e}");
            session.clear();
            let _ = tx.send(false);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn verified_user() -> SessionUser {
        SessionUser {
            email: "admin@example.com".into(),
            name: None,
            is_verified: true,
        }
    }

    #[test]
    fn restore_from_empty_cache_is_logged_out() {
        let session = SessionContext::restore(SnapshotCache::ephemeral());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn restore_discards_unverified_payload() {
        let cache = SnapshotCache::ephemeral();
        cache.set(
            SESSION_KEY,
            &json!({ "email": "admin@example.com", "isVerified": false }),
        );
        let session = SessionContext::restore(cache);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn restore_discards_corrupt_payload() {
        let cache = SnapshotCache::ephemeral();
        cache.set(SESSION_KEY, &json!(["definitely", "not", "a", "user"]));
        let session = SessionContext::restore(cache);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_persists_and_clear_removes() {
        let cache = SnapshotCache::ephemeral();
        let session = SessionContext::restore(Arc::clone(&cache));
        session.login(verified_user());
        assert!(session.is_authenticated());
        assert!(cache.get::<SessionUser>(SESSION_KEY).is_some());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(cache.get::<SessionUser>(SESSION_KEY).is_none());
    }

    #[tokio::test]
    async fn monitor_clears_session_on_invalid_check() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/check-session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "valid": false })))
            .mount(&server)
            .await;

        let client = AdminClient::with_client(
            reqwest::Client::new(),
            url::Url::parse(&server.uri()).unwrap(),
        );
        let session = SessionContext::restore(SnapshotCache::ephemeral());
        session.login(verified_user());

        let monitor = SessionMonitor::spawn(
            client,
            Arc::clone(&session),
            Duration::from_millis(10),
        );
        let mut validity = monitor.validity();
        validity
            .wait_for(|valid| !valid)
            .await
            .expect("monitor should report invalidation");

        assert!(!session.is_authenticated());
        monitor.shutdown().await;
    }

    #[tokio::test]
    async fn monitor_failure_also_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/check-session"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = AdminClient::with_client(
            reqwest::Client::new(),
            url::Url::parse(&server.uri()).unwrap(),
        );
        let session = SessionContext::restore(SnapshotCache::ephemeral());
        session.login(verified_user());

        let monitor = SessionMonitor::spawn(
            client,
            Arc::clone(&session),
            Duration::from_millis(10),
        );
        let mut validity = monitor.validity();
        validity.wait_for(|valid| !valid).await.unwrap();

        assert!(!session.is_authenticated());
        monitor.shutdown().await;
    }
}
