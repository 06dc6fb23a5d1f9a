//! Catalog resource endpoints: locations, products, SEO entries, and the
//! runtime-extensible custom field registry.

use crate::client::AdminClient;
use crate::error::Error;
use crate::records::{
    CustomFieldDefinition, CustomFieldPayload, Location, LocationPayload, Product, ProductPayload,
    SeoEntry, SeoFields,
};

impl AdminClient {
    // ── Locations ────────────────────────────────────────────────────

    pub async fn list_locations(&self) -> Result<Vec<Location>, Error> {
        self.get(self.api_url("locations")?).await
    }

    pub async fn create_location(&self, payload: &LocationPayload) -> Result<Location, Error> {
        self.post(self.api_url("locations")?, payload).await
    }

    pub async fn update_location(
        &self,
        id: &str,
        payload: &LocationPayload,
    ) -> Result<Location, Error> {
        self.put(self.api_url(&format!("locations/{id}"))?, payload).await
    }

    pub async fn delete_location(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("locations/{id}"))?).await
    }

    // ── Products ─────────────────────────────────────────────────────

    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.get(self.api_url("products")?).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, Error> {
        self.post(self.api_url("products")?, payload).await
    }

    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<Product, Error> {
        self.put(self.api_url(&format!("products/{id}"))?, payload).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("products/{id}"))?).await
    }

    // ── SEO entries ──────────────────────────────────────────────────

    pub async fn list_seos(&self) -> Result<Vec<SeoEntry>, Error> {
        self.get(self.api_url("seos")?).await
    }

    pub async fn create_seo(&self, payload: &SeoFields) -> Result<SeoEntry, Error> {
        self.post(self.api_url("seos")?, payload).await
    }

    pub async fn update_seo(&self, id: &str, payload: &SeoFields) -> Result<SeoEntry, Error> {
        self.put(self.api_url(&format!("seos/{id}"))?, payload).await
    }

    pub async fn delete_seo(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("seos/{id}"))?).await
    }

    // ── Custom field registry ────────────────────────────────────────

    pub async fn list_custom_fields(&self) -> Result<Vec<CustomFieldDefinition>, Error> {
        self.get(self.api_url("seo-custom-fields")?).await
    }

    pub async fn create_custom_field(
        &self,
        payload: &CustomFieldPayload,
    ) -> Result<CustomFieldDefinition, Error> {
        self.post(self.api_url("seo-custom-fields")?, payload).await
    }

    pub async fn delete_custom_field(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("seo-custom-fields/{id}"))?)
            .await
    }
}
