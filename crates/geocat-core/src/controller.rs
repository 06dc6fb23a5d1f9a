// ── List-Controller ──
//
// The composition root every entity page instantiates: cache paint →
// network reconcile → filter → rows, with the staged-mutation gate in
// front of every create/update/delete and a sequential refetch after
// each committed mutation.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use geocat_api::AdminClient;

use crate::cache::SnapshotCache;
use crate::error::CoreError;
use crate::search;
use crate::session::SessionContext;
use crate::staged::{Intent, StagedMutation};

/// Per-entity adapter: naming, endpoints, pre-submit validation, and the
/// derived fields used for search and export.
///
/// `Lookups` carries whatever reference collections the entity needs to
/// resolve bare-id foreign keys for display (e.g. loaded countries for
/// the states page). Entities without that need use `()`.
pub trait Resource: Sized + Send + Sync + 'static {
    type Record: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync;
    type Draft: Clone + Default + Send + Sync;
    type Lookups: Default + Send + Sync;

    /// Lowercase singular, for confirmation copy ("city").
    const NOUN: &'static str;
    /// Capitalized singular, for acknowledgments ("City").
    const TITLE: &'static str;
    /// Lowercase plural, for fetch-failure copy ("cities").
    const PLURAL: &'static str;
    /// Snapshot cache key ("cities_cache").
    const CACHE_KEY: &'static str;

    fn record_id(record: &Self::Record) -> &str;

    /// Pre-fill a draft from an existing record, resolving embedded or
    /// bare-id reference fields to their id form.
    fn draft_from(record: &Self::Record) -> Self::Draft;

    /// Client-side pre-submit validation. An error here means the draft
    /// is never staged and no network call is issued.
    fn validate(draft: &Self::Draft) -> Result<(), String> {
        let _ = draft;
        Ok(())
    }

    /// Export column headers, also the default search field set.
    fn columns() -> Vec<&'static str>;

    /// One export row of derived display strings.
    fn row(record: &Self::Record, lookups: &Self::Lookups) -> Vec<String>;

    /// Derived search terms; defaults to the export row.
    fn search_terms(record: &Self::Record, lookups: &Self::Lookups) -> Vec<String> {
        Self::row(record, lookups)
    }

    fn fetch(
        client: &AdminClient,
    ) -> impl Future<Output = Result<Vec<Self::Record>, geocat_api::Error>> + Send;

    /// Load the reference collections this entity resolves ids against.
    /// Implementations fetch them concurrently and degrade each one to
    /// empty on failure; the primary collection is never blocked.
    fn load_lookups(client: &AdminClient) -> impl Future<Output = Self::Lookups> + Send {
        let _ = client;
        async { Self::Lookups::default() }
    }

    fn create(
        client: &AdminClient,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), geocat_api::Error>> + Send {
        let _ = (client, draft);
        async {
            Err(geocat_api::Error::Api {
                status: 405,
                message: format!("{} records cannot be created here", Self::NOUN),
            })
        }
    }

    fn update(
        client: &AdminClient,
        id: &str,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<(), geocat_api::Error>> + Send {
        let _ = (client, id, draft);
        async {
            Err(geocat_api::Error::Api {
                status: 405,
                message: format!("{} records cannot be updated here", Self::NOUN),
            })
        }
    }

    fn delete(
        client: &AdminClient,
        id: &str,
    ) -> impl Future<Output = Result<(), geocat_api::Error>> + Send {
        let _ = (client, id);
        async {
            Err(geocat_api::Error::Api {
                status: 405,
                message: format!("{} records cannot be deleted here", Self::NOUN),
            })
        }
    }
}

/// Await an auxiliary reference-collection fetch, degrading to an empty
/// set on failure so it never blocks the primary collection.
pub async fn auxiliary<T>(
    what: &str,
    fut: impl Future<Output = Result<Vec<T>, geocat_api::Error>>,
) -> Vec<T> {
    match fut.await {
        Ok(items) => items,
        Err(e) => {
            warn!("failed to fetch {what}: {e}");
            Vec::new()
        }
    }
}

/// One entity page's controller.
pub struct ListController<R: Resource> {
    client: AdminClient,
    cache: Arc<SnapshotCache>,
    session: Arc<SessionContext>,
    records: Vec<R::Record>,
    lookups: R::Lookups,
    query: String,
    gate: StagedMutation<R::Draft>,
    /// `Some(id)` while the open form edits an existing record.
    editing: Option<String>,
    painted: bool,
    loading: bool,
    fetch_error: Option<String>,
    form_error: Option<String>,
}

impl<R: Resource> ListController<R> {
    pub fn new(
        client: AdminClient,
        cache: Arc<SnapshotCache>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            client,
            cache,
            session,
            records: Vec::new(),
            lookups: R::Lookups::default(),
            query: String::new(),
            gate: StagedMutation::new(),
            editing: None,
            painted: false,
            loading: false,
            fetch_error: None,
            form_error: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn lookups(&self) -> &R::Lookups {
        &self.lookups
    }

    pub fn set_lookups(&mut self, lookups: R::Lookups) {
        self.lookups = lookups;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Paint from the snapshot cache, then reconcile from the network.
    pub async fn mount(&mut self) -> Result<(), CoreError> {
        if !self.session.is_authenticated() {
            return Err(CoreError::Unauthenticated);
        }
        self.paint_cached();
        self.refresh().await
    }

    /// Load the cached snapshot for instant render, if one deserializes.
    /// Never the source of truth: `refresh` replaces it wholesale.
    pub fn paint_cached(&mut self) -> bool {
        if let Some(cached) = self.cache.get::<Vec<R::Record>>(R::CACHE_KEY) {
            debug!("painting {} cached {}", cached.len(), R::PLURAL);
            self.records = cached;
            self.painted = true;
        }
        self.painted
    }

    /// Fetch the authoritative collection and mirror it to the cache.
    ///
    /// On failure the previous rows (cached or fetched) stay visible
    /// behind an inline error message.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        // The spinner is for the primary fetch only, never the cache paint.
        self.loading = !self.painted;
        self.fetch_error = None;

        let result = R::fetch(&self.client).await;
        self.loading = false;
        match result {
            Ok(records) => {
                self.cache.set(R::CACHE_KEY, &records);
                self.records = records;
                self.painted = true;
                Ok(())
            }
            Err(e) => {
                debug!("fetch {} failed: {e}", R::PLURAL);
                let err = CoreError::fetch_failed(R::PLURAL);
                self.fetch_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    // ── Search ───────────────────────────────────────────────────────

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The currently visible rows: the collection filtered by the live
    /// search value. Pure recomputation, safe to call per render.
    pub fn visible_rows(&self) -> Vec<R::Record> {
        search::filter(&self.records, &self.query, |r| {
            R::search_terms(r, &self.lookups)
        })
    }

    // ── Form entry points ────────────────────────────────────────────

    /// Open the form in "add" mode with a blank draft.
    pub fn add_requested(&mut self) -> R::Draft {
        self.editing = None;
        self.form_error = None;
        R::Draft::default()
    }

    /// Open the form pre-filled from `record`, reference fields in id form.
    pub fn edit_requested(&mut self, record: &R::Record) -> R::Draft {
        self.editing = Some(R::record_id(record).to_owned());
        self.form_error = None;
        R::draft_from(record)
    }

    /// Stage a delete for the confirmation gate. No network yet.
    pub fn delete_requested(&mut self, id: impl Into<String>) {
        self.gate.stage_delete(id);
    }

    /// Validate a form draft and stage it (create or update depending on
    /// how the form was opened). Invalid drafts are rejected before
    /// staging: no confirmation, no network call.
    pub fn submit(&mut self, draft: R::Draft) -> Result<(), CoreError> {
        if let Err(message) = R::validate(&draft) {
            self.form_error = Some(message.clone());
            return Err(CoreError::invalid(message));
        }
        match self.editing.clone() {
            Some(id) => self.gate.stage_update(id, draft),
            None => self.gate.stage_create(draft),
        }
        Ok(())
    }

    // ── Confirmation gate ────────────────────────────────────────────

    /// The blocking prompt for the staged intent, or `None` if nothing
    /// is staged.
    pub fn request_confirmation(&mut self) -> Option<String> {
        self.gate.request_confirmation(R::NOUN)
    }

    /// Abandon the staged intent without touching the network.
    pub fn cancel(&mut self) {
        self.gate.cancel();
    }

    /// Execute the confirmed intent: exactly one network call, then a
    /// sequential refetch so the grid never shows stale data.
    ///
    /// On success returns the acknowledgment line. On a validation
    /// rejection the server's message lands in `form_error` and the
    /// caller keeps its draft so the user can correct and resubmit.
    pub async fn confirm(&mut self) -> Result<String, CoreError> {
        let Some(intent) = self.gate.begin_commit() else {
            return Err(CoreError::invalid("Nothing is awaiting confirmation."));
        };

        let (verb_past, result) = match &intent {
            Intent::Create(draft) => ("added", R::create(&self.client, draft).await),
            Intent::Update { id, draft } => ("updated", R::update(&self.client, id, draft).await),
            Intent::Delete { id } => ("deleted", R::delete(&self.client, id).await),
        };
        self.gate.finish_commit();

        match result {
            Ok(()) => {
                self.editing = None;
                self.form_error = None;
                // Refetch only after the mutation resolved.
                if let Err(e) = self.refresh().await {
                    debug!("post-mutation refresh failed: {e}");
                }
                Ok(format!("{} {verb_past} successfully!", R::TITLE))
            }
            Err(api_err) => {
                let err = CoreError::from(api_err);
                if err.is_form_error() {
                    self.form_error = Some(err.to_string());
                }
                Err(err)
            }
        }
    }

    // ── Export ───────────────────────────────────────────────────────

    /// Headers plus derived rows for CSV/PDF export, computed over the
    /// currently *filtered* rows.
    pub fn export_rows(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let rows = self
            .visible_rows()
            .iter()
            .map(|r| R::row(r, &self.lookups))
            .collect();
        (R::columns(), rows)
    }
}
