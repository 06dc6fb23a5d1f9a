// geocat-api: Async Rust client for the geocat catalog/admin REST backend

pub mod auth;
pub mod client;
pub mod error;
pub mod records;

mod admin;
mod catalog;
mod geo;

pub use auth::{SessionCheck, SessionUser};
pub use client::AdminClient;
pub use error::{Error, GENERIC_BAD_REQUEST};
pub use records::{
    City, CityPayload, Country, CountryPayload, CustomFieldDefinition, CustomFieldPayload,
    Employee, FieldKind, Identified, Inquiry, InquiryPayload, Location, LocationPayload, Product,
    ProductPayload, Ref, SeoEntry, SeoFields, State, StatePayload, ref_name,
};
