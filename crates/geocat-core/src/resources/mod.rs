//! Per-entity [`Resource`](crate::controller::Resource) adapters.

mod admin;
mod catalog;
mod geo;
mod seo;

pub use admin::{Employees, Inquiries};
pub use catalog::{Locations, Products};
pub use geo::{Cities, Countries, States};
pub use seo::{CustomFields, SeoDraft, SeoPages};
