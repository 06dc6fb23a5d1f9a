//! Geographic resource endpoints: countries, states, cities.

use crate::client::AdminClient;
use crate::error::Error;
use crate::records::{City, CityPayload, Country, CountryPayload, State, StatePayload};

impl AdminClient {
    // ── Countries ────────────────────────────────────────────────────

    pub async fn list_countries(&self) -> Result<Vec<Country>, Error> {
        self.get(self.api_url("countries")?).await
    }

    pub async fn create_country(&self, payload: &CountryPayload) -> Result<Country, Error> {
        self.post(self.api_url("countries")?, payload).await
    }

    pub async fn update_country(&self, id: &str, payload: &CountryPayload) -> Result<Country, Error> {
        self.put(self.api_url(&format!("countries/{id}"))?, payload).await
    }

    pub async fn delete_country(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("countries/{id}"))?).await
    }

    // ── States ───────────────────────────────────────────────────────

    pub async fn list_states(&self) -> Result<Vec<State>, Error> {
        self.get(self.api_url("states")?).await
    }

    /// States scoped to one country, for the dependent-dropdown cascade.
    pub async fn states_by_country(&self, country_id: &str) -> Result<Vec<State>, Error> {
        self.get(self.api_url(&format!("states/country/{country_id}"))?)
            .await
    }

    pub async fn create_state(&self, payload: &StatePayload) -> Result<State, Error> {
        self.post(self.api_url("states")?, payload).await
    }

    pub async fn update_state(&self, id: &str, payload: &StatePayload) -> Result<State, Error> {
        self.put(self.api_url(&format!("states/{id}"))?, payload).await
    }

    pub async fn delete_state(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("states/{id}"))?).await
    }

    // ── Cities ───────────────────────────────────────────────────────

    pub async fn list_cities(&self) -> Result<Vec<City>, Error> {
        self.get(self.api_url("cities")?).await
    }

    pub async fn create_city(&self, payload: &CityPayload) -> Result<City, Error> {
        self.post(self.api_url("cities")?, payload).await
    }

    pub async fn update_city(&self, id: &str, payload: &CityPayload) -> Result<City, Error> {
        self.put(self.api_url(&format!("cities/{id}"))?, payload).await
    }

    pub async fn delete_city(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("cities/{id}"))?).await
    }
}
