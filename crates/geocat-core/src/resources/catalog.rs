//! Catalog entity adapters: locations and products.

use futures::join;

use geocat_api::{
    AdminClient, City, Country, Location, LocationPayload, Product, ProductPayload, State, ref_name,
};

use crate::controller::{Resource, auxiliary};
use crate::validate;

pub struct Locations;

impl Resource for Locations {
    type Record = Location;
    type Draft = LocationPayload;
    /// `(countries, states, cities)` for resolving bare-id references.
    type Lookups = (Vec<Country>, Vec<State>, Vec<City>);

    const NOUN: &'static str = "location";
    const TITLE: &'static str = "Location";
    const PLURAL: &'static str = "locations";
    const CACHE_KEY: &'static str = "locations_cache";

    fn record_id(record: &Location) -> &str {
        &record.id
    }

    fn draft_from(record: &Location) -> LocationPayload {
        LocationPayload {
            name: record.name.clone(),
            slug: record.slug.clone(),
            country: record.country.as_ref().map(|c| c.id().to_owned()),
            state: record.state.as_ref().map(|s| s.id().to_owned()),
            city: record.city.as_ref().map(|c| c.id().to_owned()),
        }
    }

    fn validate(draft: &LocationPayload) -> Result<(), String> {
        validate::required(&draft.name, "Name")?;
        validate::slug_if_present(&draft.slug)?;
        // A location must anchor to at least one geographic level.
        if draft.country.is_none() && draft.state.is_none() && draft.city.is_none() {
            return Err("At least one of country, state, or city must be specified".to_owned());
        }
        Ok(())
    }

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Slug", "Country", "State", "City"]
    }

    fn row(
        record: &Location,
        (countries, states, cities): &(Vec<Country>, Vec<State>, Vec<City>),
    ) -> Vec<String> {
        vec![
            record.name.clone(),
            record.slug.clone(),
            ref_name(record.country.as_ref(), countries).to_owned(),
            ref_name(record.state.as_ref(), states).to_owned(),
            ref_name(record.city.as_ref(), cities).to_owned(),
        ]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<Location>, geocat_api::Error> {
        client.list_locations().await
    }

    async fn load_lookups(client: &AdminClient) -> (Vec<Country>, Vec<State>, Vec<City>) {
        join!(
            auxiliary("countries", client.list_countries()),
            auxiliary("states", client.list_states()),
            auxiliary("cities", client.list_cities()),
        )
    }

    async fn create(
        client: &AdminClient,
        draft: &LocationPayload,
    ) -> Result<(), geocat_api::Error> {
        client.create_location(draft).await.map(|_| ())
    }

    async fn update(
        client: &AdminClient,
        id: &str,
        draft: &LocationPayload,
    ) -> Result<(), geocat_api::Error> {
        client.update_location(id, draft).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_location(id).await
    }
}

pub struct Products;

impl Resource for Products {
    type Record = Product;
    type Draft = ProductPayload;
    type Lookups = ();

    const NOUN: &'static str = "product";
    const TITLE: &'static str = "Product";
    const PLURAL: &'static str = "products";
    const CACHE_KEY: &'static str = "products_cache";

    fn record_id(record: &Product) -> &str {
        &record.id
    }

    fn draft_from(record: &Product) -> ProductPayload {
        ProductPayload {
            name: record.name.clone(),
            description: record.description.clone(),
            slug: record.slug.clone(),
        }
    }

    fn validate(draft: &ProductPayload) -> Result<(), String> {
        validate::required(&draft.name, "Name")?;
        validate::slug_if_present(&draft.slug)
    }

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Slug", "Description"]
    }

    fn row(record: &Product, (): &()) -> Vec<String> {
        vec![
            record.name.clone(),
            record.slug.clone(),
            record.description.clone(),
        ]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<Product>, geocat_api::Error> {
        client.list_products().await
    }

    async fn create(client: &AdminClient, draft: &ProductPayload) -> Result<(), geocat_api::Error> {
        client.create_product(draft).await.map(|_| ())
    }

    async fn update(
        client: &AdminClient,
        id: &str,
        draft: &ProductPayload,
    ) -> Result<(), geocat_api::Error> {
        client.update_product(id, draft).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_product(id).await
    }
}
