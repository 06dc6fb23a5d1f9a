//! SEO entry adapter plus the runtime custom-field registry.
//!
//! The registry governs which keys the open `custom` map may carry and
//! what shape each value takes; submission validates the map against the
//! registry snapshot captured when the form opened.

use futures::join;
use serde_json::Value;

use geocat_api::{
    AdminClient, CustomFieldDefinition, CustomFieldPayload, FieldKind, Location, Product,
    SeoEntry, SeoFields,
};

use crate::controller::{Resource, auxiliary};
use crate::validate;

/// Form snapshot for an SEO entry: the editable fields plus the
/// custom-field registry in force when the form opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoDraft {
    pub fields: SeoFields,
    pub registry: Vec<CustomFieldDefinition>,
}

/// Check one custom map entry against its registry definition.
fn check_custom(definition: &CustomFieldDefinition, value: &Value) -> Result<(), String> {
    match &definition.kind {
        FieldKind::Text => {
            if value.is_string() {
                Ok(())
            } else {
                Err(format!("Custom field '{}' must be text.", definition.name))
            }
        }
        FieldKind::Number => {
            let numeric = value.is_number()
                || value
                    .as_str()
                    .is_some_and(|s| s.trim().parse::<f64>().is_ok());
            if numeric {
                Ok(())
            } else {
                Err(format!(
                    "Custom field '{}' must be a number.",
                    definition.name
                ))
            }
        }
        FieldKind::Dropdown { dropdown_source } => {
            let chosen = value.as_str().unwrap_or_default();
            if dropdown_source.iter().any(|option| option == chosen) {
                Ok(())
            } else {
                Err(format!(
                    "Custom field '{}' must be one of: {}.",
                    definition.name,
                    dropdown_source.join(", ")
                ))
            }
        }
    }
}

pub struct SeoPages;

impl Resource for SeoPages {
    type Record = SeoEntry;
    type Draft = SeoDraft;
    /// `(locations, products)` for resolving the id-valued link fields.
    type Lookups = (Vec<Location>, Vec<Product>);

    const NOUN: &'static str = "SEO entry";
    const TITLE: &'static str = "SEO entry";
    const PLURAL: &'static str = "SEO entries";
    const CACHE_KEY: &'static str = "seos_cache";

    fn record_id(record: &SeoEntry) -> &str {
        &record.id
    }

    fn draft_from(record: &SeoEntry) -> SeoDraft {
        SeoDraft {
            fields: record.fields.clone(),
            registry: Vec::new(),
        }
    }

    fn validate(draft: &SeoDraft) -> Result<(), String> {
        let f = &draft.fields;
        if f.sku.trim().is_empty()
            || f.slug.trim().is_empty()
            || f.location_id.trim().is_empty()
            || f.product_id.trim().is_empty()
        {
            return Err("SKU, Slug, LocationId, and ProductId are required.".to_owned());
        }
        if !validate::is_valid_slug(&f.slug) {
            return Err("Slug may only contain lowercase letters, digits, and hyphens.".to_owned());
        }
        for (key, value) in &f.custom {
            let Some(definition) = draft.registry.iter().find(|d| &d.name == key) else {
                return Err(format!("Unknown custom field '{key}'."));
            };
            check_custom(definition, value)?;
        }
        Ok(())
    }

    fn columns() -> Vec<&'static str> {
        vec!["SKU", "Slug", "Title", "Location", "Product"]
    }

    fn row(record: &SeoEntry, (locations, products): &(Vec<Location>, Vec<Product>)) -> Vec<String> {
        let f = &record.fields;
        let location = locations
            .iter()
            .find(|l| l.id == f.location_id)
            .map_or(f.location_id.as_str(), |l| l.name.as_str());
        let product = products
            .iter()
            .find(|p| p.id == f.product_id)
            .map_or(f.product_id.as_str(), |p| p.name.as_str());
        vec![
            f.sku.clone(),
            f.slug.clone(),
            f.title.clone().unwrap_or_default(),
            location.to_owned(),
            product.to_owned(),
        ]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<SeoEntry>, geocat_api::Error> {
        client.list_seos().await
    }

    async fn load_lookups(client: &AdminClient) -> (Vec<Location>, Vec<Product>) {
        join!(
            auxiliary("locations", client.list_locations()),
            auxiliary("products", client.list_products()),
        )
    }

    async fn create(client: &AdminClient, draft: &SeoDraft) -> Result<(), geocat_api::Error> {
        client.create_seo(&draft.fields).await.map(|_| ())
    }

    async fn update(
        client: &AdminClient,
        id: &str,
        draft: &SeoDraft,
    ) -> Result<(), geocat_api::Error> {
        client.update_seo(id, &draft.fields).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_seo(id).await
    }
}

/// Registry management for the open custom-field set. Definitions can be
/// added and removed but not edited in place.
pub struct CustomFields;

impl Resource for CustomFields {
    type Record = CustomFieldDefinition;
    type Draft = CustomFieldPayload;
    type Lookups = ();

    const NOUN: &'static str = "custom field";
    const TITLE: &'static str = "Custom field";
    const PLURAL: &'static str = "custom fields";
    const CACHE_KEY: &'static str = "custom_fields_cache";

    fn record_id(record: &CustomFieldDefinition) -> &str {
        &record.id
    }

    fn draft_from(record: &CustomFieldDefinition) -> CustomFieldPayload {
        CustomFieldPayload {
            name: record.name.clone(),
            kind: record.kind.clone(),
        }
    }

    fn validate(draft: &CustomFieldPayload) -> Result<(), String> {
        validate::required(&draft.name, "Name")?;
        if let FieldKind::Dropdown { dropdown_source } = &draft.kind
            && dropdown_source.is_empty()
        {
            return Err("Dropdown fields need at least one option.".to_owned());
        }
        Ok(())
    }

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Type"]
    }

    fn row(record: &CustomFieldDefinition, (): &()) -> Vec<String> {
        let kind = match &record.kind {
            FieldKind::Text => "text".to_owned(),
            FieldKind::Number => "number".to_owned(),
            FieldKind::Dropdown { dropdown_source } => {
                format!("dropdown ({})", dropdown_source.join(", "))
            }
        };
        vec![record.name.clone(), kind]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<CustomFieldDefinition>, geocat_api::Error> {
        client.list_custom_fields().await
    }

    async fn create(
        client: &AdminClient,
        draft: &CustomFieldPayload,
    ) -> Result<(), geocat_api::Error> {
        client.create_custom_field(draft).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_custom_field(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn registry() -> Vec<CustomFieldDefinition> {
        vec![
            CustomFieldDefinition {
                id: "f1".into(),
                name: "priority".into(),
                kind: FieldKind::Dropdown {
                    dropdown_source: vec!["low".into(), "high".into()],
                },
            },
            CustomFieldDefinition {
                id: "f2".into(),
                name: "weight".into(),
                kind: FieldKind::Number,
            },
        ]
    }

    fn valid_draft() -> SeoDraft {
        SeoDraft {
            fields: SeoFields {
                sku: "SKU-1".into(),
                slug: "widget-east".into(),
                location_id: "l1".into(),
                product_id: "p1".into(),
                ..SeoFields::default()
            },
            registry: registry(),
        }
    }

    #[test]
    fn missing_link_field_hits_the_required_quad() {
        let mut draft = valid_draft();
        draft.fields.product_id.clear();
        assert_eq!(
            SeoPages::validate(&draft).unwrap_err(),
            "SKU, Slug, LocationId, and ProductId are required."
        );
    }

    #[test]
    fn unknown_custom_key_is_rejected() {
        let mut draft = valid_draft();
        draft.fields.custom.insert("surprise".into(), json!("x"));
        assert_eq!(
            SeoPages::validate(&draft).unwrap_err(),
            "Unknown custom field 'surprise'."
        );
    }

    #[test]
    fn dropdown_value_must_come_from_its_source() {
        let mut draft = valid_draft();
        draft.fields.custom.insert("priority".into(), json!("urgent"));
        assert_eq!(
            SeoPages::validate(&draft).unwrap_err(),
            "Custom field 'priority' must be one of: low, high."
        );

        draft.fields.custom.insert("priority".into(), json!("high"));
        assert!(SeoPages::validate(&draft).is_ok());
    }

    #[test]
    fn number_kind_accepts_numeric_strings() {
        let mut draft = valid_draft();
        draft.fields.custom.insert("weight".into(), json!("12.5"));
        assert!(SeoPages::validate(&draft).is_ok());

        draft.fields.custom.insert("weight".into(), json!("heavy"));
        assert!(SeoPages::validate(&draft).is_err());
    }

    #[test]
    fn dropdown_definition_needs_options() {
        let draft = CustomFieldPayload {
            name: "priority".into(),
            kind: FieldKind::Dropdown {
                dropdown_source: Vec::new(),
            },
        };
        assert_eq!(
            CustomFields::validate(&draft).unwrap_err(),
            "Dropdown fields need at least one option."
        );
    }

    #[test]
    fn seo_row_resolves_link_ids_to_names() {
        let entry = SeoEntry {
            id: "seo1".into(),
            fields: valid_draft().fields,
        };
        let locations = vec![Location {
            id: "l1".into(),
            name: "East depot".into(),
            slug: "east-depot".into(),
            country: None,
            state: None,
            city: None,
        }];
        let row = SeoPages::row(&entry, &(locations, Vec::new()));
        assert_eq!(row[3], "East depot");
        // Unresolvable product id falls back to the raw id.
        assert_eq!(row[4], "p1");
    }
}
