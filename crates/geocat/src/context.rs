//! Shared runtime context for command handlers.
//!
//! Built once per invocation from config plus CLI flag overrides: the
//! HTTP client, the snapshot cache, and the restored session.

use std::sync::Arc;

use geocat_api::AdminClient;
use geocat_config::Config;
use geocat_core::{ListController, Resource, SessionContext, SnapshotCache};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub struct AppContext {
    pub client: AdminClient,
    pub cache: Arc<SnapshotCache>,
    pub session: Arc<SessionContext>,
    pub config: Config,
}

impl AppContext {
    /// Load config, layer CLI overrides on top, and wire the services.
    pub fn build(global: &GlobalOpts) -> Result<Self, CliError> {
        let mut config = geocat_config::load_config_or_default();
        if let Some(backend) = &global.backend {
            config.backend = backend.clone();
        }
        if let Some(email) = &global.email {
            config.email = Some(email.clone());
        }
        if let Some(timeout) = global.timeout {
            config.timeout = timeout;
        }
        if global.no_cache {
            config.no_cache = true;
        }

        let url = config.backend_url()?;
        let client = AdminClient::new(url, config.timeout_duration())?;
        let cache = match config.snapshot_dir() {
            Some(dir) => SnapshotCache::new(dir),
            None => SnapshotCache::ephemeral(),
        };
        let session = SessionContext::restore(Arc::clone(&cache));

        Ok(Self {
            client,
            cache,
            session,
            config,
        })
    }

    /// A fresh list controller sharing this context's services.
    pub fn controller<R: Resource>(&self) -> ListController<R> {
        ListController::new(
            self.client.clone(),
            Arc::clone(&self.cache),
            Arc::clone(&self.session),
        )
    }

    /// Ensure a signed-in session, re-checking against the backend with
    /// the configured email when no cached session survives.
    pub async fn ensure_session(&self) -> Result<(), CliError> {
        if self.session.is_authenticated() {
            return Ok(());
        }
        let Some(email) = self.config.email.clone() else {
            return Err(CliError::NotSignedIn);
        };

        let check = self.client.check_session(&email).await?;
        match check.user {
            Some(user) if check.valid && user.is_verified => {
                self.session.login(user);
                Ok(())
            }
            _ => Err(CliError::AuthFailed { email }),
        }
    }
}
