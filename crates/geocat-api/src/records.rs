// ── Wire records for the catalog backend ──
//
// The backend emits Mongo-style `_id` keys; every record aliases those to
// `id` so cached snapshots (which re-serialize as `id`) round-trip too.
// Reference fields arrive either as a bare identifier or an embedded
// record depending on backend population -- `Ref<T>` normalizes both at
// the deserialization boundary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Reference normalization ─────────────────────────────────────────

/// A record that can stand on the target side of a reference.
pub trait Identified {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A foreign-key field, normalized into one explicit sum type.
///
/// `Embedded` wins during deserialization (objects never parse as
/// strings), so a populated backend response keeps its payload and a
/// lean one degrades to the bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Embedded(T),
    Id(String),
}

impl<T: Identified> Ref<T> {
    /// The referenced id, whichever form the backend sent.
    pub fn id(&self) -> &str {
        match self {
            Self::Embedded(t) => t.id(),
            Self::Id(s) => s,
        }
    }

    /// Resolve a display name, falling back to a lookup slice for bare ids.
    ///
    /// Returns `None` when the id form can't be resolved against the
    /// currently loaded reference collection (staleness edge case).
    pub fn display_name<'a>(&'a self, lookup: &'a [T]) -> Option<&'a str> {
        match self {
            Self::Embedded(t) => Some(t.name()),
            Self::Id(id) => lookup.iter().find(|t| t.id() == id).map(Identified::name),
        }
    }
}

/// Shared resolver for optional reference fields.
///
/// Absent references render as an empty string, which never matches a
/// search query. A bare id that resolves against nothing falls back to
/// the raw id so the row stays addressable.
pub fn ref_name<'a, T: Identified>(field: Option<&'a Ref<T>>, lookup: &'a [T]) -> &'a str {
    match field {
        None => "",
        Some(r) => r.display_name(lookup).unwrap_or_else(|| r.id()),
    }
}

// ── Geographic records ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Identified for Country {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub country: Option<Ref<Country>>,
}

impl Identified for State {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<Ref<Country>>,
    #[serde(default)]
    pub state: Option<Ref<State>>,
}

impl Identified for City {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub country: Option<Ref<Country>>,
    #[serde(default)]
    pub state: Option<Ref<State>>,
    #[serde(default)]
    pub city: Option<Ref<City>>,
}

impl Identified for Location {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

// ── Catalog records ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slug: String,
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// A stored SEO entry: backend id plus the editable field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoEntry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: SeoFields,
}

/// The editable SEO field set. Doubles as the create/update payload.
///
/// `custom` is an open map whose keys are governed by the runtime
/// [`CustomFieldDefinition`] registry, not this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoFields {
    pub sku: String,
    pub slug: String,
    #[serde(rename = "locationId")]
    pub location_id: String,
    #[serde(rename = "productId")]
    pub product_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(rename = "xUaCompatible", default, skip_serializing_if = "Option::is_none")]
    pub x_ua_compatible: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(rename = "contentLanguage", default, skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,
    #[serde(
        rename = "googleSiteVerification",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub google_site_verification: Option<String>,
    #[serde(rename = "msValidate", default, skip_serializing_if = "Option::is_none")]
    pub ms_validate: Option<String>,
    #[serde(rename = "themeColor", default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(rename = "mobileWebAppCapable", default, skip_serializing_if = "Option::is_none")]
    pub mobile_web_app_capable: Option<bool>,
    #[serde(rename = "appleStatusBarStyle", default, skip_serializing_if = "Option::is_none")]
    pub apple_status_bar_style: Option<String>,
    #[serde(rename = "formatDetection", default, skip_serializing_if = "Option::is_none")]
    pub format_detection: Option<String>,

    #[serde(rename = "ogLocale", default, skip_serializing_if = "Option::is_none")]
    pub og_locale: Option<String>,
    #[serde(rename = "ogTitle", default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(rename = "ogDescription", default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(rename = "ogType", default, skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(rename = "ogUrl", default, skip_serializing_if = "Option::is_none")]
    pub og_url: Option<String>,
    #[serde(rename = "ogSiteName", default, skip_serializing_if = "Option::is_none")]
    pub og_site_name: Option<String>,

    #[serde(rename = "twitterCard", default, skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(rename = "twitterSite", default, skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    #[serde(rename = "twitterTitle", default, skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(rename = "twitterDescription", default, skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<Value>,
    #[serde(rename = "publishedAt", default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, Value>,
}

/// One entry in the runtime-extensible custom field registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldDefinition {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The admissible shapes for a custom field value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Dropdown {
        #[serde(rename = "dropdownSource", default)]
        dropdown_source: Vec<String>,
    },
}

// ── Admin records ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

// ── Mutation payloads ───────────────────────────────────────────────
//
// Form snapshots, serialized as the POST/PUT body. Unset reference
// fields are omitted rather than sent as empty strings.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryPayload {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePayload {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationPayload {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldPayload {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ref_deserializes_embedded_object() {
        let state: State = serde_json::from_value(json!({
            "_id": "s1",
            "name": "Bavaria",
            "code": "BY",
            "country": { "_id": "c1", "name": "Germany", "code": "DE" }
        }))
        .unwrap();

        let country = state.country.unwrap();
        assert_eq!(country.id(), "c1");
        assert_eq!(country.display_name(&[]), Some("Germany"));
    }

    #[test]
    fn ref_deserializes_bare_id() {
        let state: State = serde_json::from_value(json!({
            "_id": "s1",
            "name": "Bavaria",
            "country": "c1"
        }))
        .unwrap();

        let country = state.country.unwrap();
        assert_eq!(country.id(), "c1");
        assert_eq!(country.display_name(&[]), None);
    }

    #[test]
    fn bare_id_resolves_against_loaded_collection() {
        let countries = vec![Country {
            id: "c1".into(),
            name: "Germany".into(),
            code: "DE".into(),
        }];
        let reference: Ref<Country> = Ref::Id("c1".into());
        assert_eq!(reference.display_name(&countries), Some("Germany"));
    }

    #[test]
    fn null_reference_normalizes_to_none() {
        let city: City = serde_json::from_value(json!({
            "_id": "x1",
            "name": "Paris",
            "country": null
        }))
        .unwrap();
        assert!(city.country.is_none());
        assert!(city.state.is_none());
        assert_eq!(ref_name(city.country.as_ref(), &[]), "");
    }

    #[test]
    fn field_kind_round_trips_the_type_tag() {
        let def: CustomFieldDefinition = serde_json::from_value(json!({
            "_id": "f1",
            "name": "priority",
            "type": "dropdown",
            "dropdownSource": ["low", "high"]
        }))
        .unwrap();
        assert!(matches!(def.kind, FieldKind::Dropdown { ref dropdown_source } if dropdown_source.len() == 2));

        let text: CustomFieldDefinition =
            serde_json::from_value(json!({ "_id": "f2", "name": "note", "type": "text" })).unwrap();
        assert_eq!(text.kind, FieldKind::Text);
    }

    #[test]
    fn seo_entry_flattens_fields_and_custom_map() {
        let entry: SeoEntry = serde_json::from_value(json!({
            "_id": "seo1",
            "sku": "SKU-1",
            "slug": "widget-east",
            "locationId": "l1",
            "productId": "p1",
            "ogTitle": "Widgets",
            "custom": { "priority": "high" }
        }))
        .unwrap();
        assert_eq!(entry.fields.sku, "SKU-1");
        assert_eq!(entry.fields.og_title.as_deref(), Some("Widgets"));
        assert_eq!(entry.fields.custom["priority"], json!("high"));
    }

    #[test]
    fn unset_payload_references_are_omitted() {
        let body = serde_json::to_value(CityPayload {
            name: "Lyon".into(),
            country: Some("c1".into()),
            state: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "name": "Lyon", "country": "c1" }));
    }
}
