// geocat-core: Client-side data layer between geocat-api and consumers.
//
// Each entity page is a `ListController` over a `Resource` adapter:
// cached snapshot paint, authoritative refetch, substring filtering,
// and a confirmation gate in front of every mutation.

pub mod cache;
pub mod cascade;
pub mod controller;
pub mod error;
pub mod resources;
pub mod search;
pub mod session;
pub mod staged;
mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use cache::{SESSION_KEY, SnapshotCache};
pub use cascade::DependentField;
pub use controller::{ListController, Resource, auxiliary};
pub use error::{CoreError, UNEXPECTED_ERROR};
pub use search::filter;
pub use session::{SESSION_CHECK_INTERVAL, SessionContext, SessionMonitor};
pub use staged::{Intent, StagedMutation};

// Entity adapters at the crate root for ergonomics.
pub use resources::{
    Cities, Countries, CustomFields, Employees, Inquiries, Locations, Products, SeoDraft,
    SeoPages, States,
};
