//! Geographic entity adapters: countries, states, cities.

use futures::join;

use geocat_api::{
    AdminClient, City, CityPayload, Country, CountryPayload, State, StatePayload, ref_name,
};

use crate::controller::{Resource, auxiliary};
use crate::validate;

pub struct Countries;

impl Resource for Countries {
    type Record = Country;
    type Draft = CountryPayload;
    type Lookups = ();

    const NOUN: &'static str = "country";
    const TITLE: &'static str = "Country";
    const PLURAL: &'static str = "countries";
    const CACHE_KEY: &'static str = "countries_cache";

    fn record_id(record: &Country) -> &str {
        &record.id
    }

    fn draft_from(record: &Country) -> CountryPayload {
        CountryPayload {
            name: record.name.clone(),
            code: record.code.clone(),
        }
    }

    fn validate(draft: &CountryPayload) -> Result<(), String> {
        validate::required(&draft.name, "Name")
    }

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Code"]
    }

    fn row(record: &Country, (): &()) -> Vec<String> {
        vec![record.name.clone(), record.code.clone()]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<Country>, geocat_api::Error> {
        client.list_countries().await
    }

    async fn create(client: &AdminClient, draft: &CountryPayload) -> Result<(), geocat_api::Error> {
        client.create_country(draft).await.map(|_| ())
    }

    async fn update(
        client: &AdminClient,
        id: &str,
        draft: &CountryPayload,
    ) -> Result<(), geocat_api::Error> {
        client.update_country(id, draft).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_country(id).await
    }
}

pub struct States;

impl Resource for States {
    type Record = State;
    type Draft = StatePayload;
    /// Countries, for resolving bare-id country references.
    type Lookups = Vec<Country>;

    const NOUN: &'static str = "state";
    const TITLE: &'static str = "State";
    const PLURAL: &'static str = "states";
    const CACHE_KEY: &'static str = "states_cache";

    fn record_id(record: &State) -> &str {
        &record.id
    }

    // Reference fields prefill in id form regardless of how the backend
    // shipped them.
    fn draft_from(record: &State) -> StatePayload {
        StatePayload {
            name: record.name.clone(),
            code: record.code.clone(),
            country: record.country.as_ref().map(|c| c.id().to_owned()),
        }
    }

    fn validate(draft: &StatePayload) -> Result<(), String> {
        validate::required(&draft.name, "Name")
    }

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Code", "Country"]
    }

    fn row(record: &State, countries: &Vec<Country>) -> Vec<String> {
        vec![
            record.name.clone(),
            record.code.clone(),
            ref_name(record.country.as_ref(), countries).to_owned(),
        ]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<State>, geocat_api::Error> {
        client.list_states().await
    }

    async fn load_lookups(client: &AdminClient) -> Vec<Country> {
        auxiliary("countries", client.list_countries()).await
    }

    async fn create(client: &AdminClient, draft: &StatePayload) -> Result<(), geocat_api::Error> {
        client.create_state(draft).await.map(|_| ())
    }

    async fn update(
        client: &AdminClient,
        id: &str,
        draft: &StatePayload,
    ) -> Result<(), geocat_api::Error> {
        client.update_state(id, draft).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_state(id).await
    }
}

pub struct Cities;

impl Resource for Cities {
    type Record = City;
    type Draft = CityPayload;
    /// `(countries, states)` for resolving bare-id references.
    type Lookups = (Vec<Country>, Vec<State>);

    const NOUN: &'static str = "city";
    const TITLE: &'static str = "City";
    const PLURAL: &'static str = "cities";
    const CACHE_KEY: &'static str = "cities_cache";

    fn record_id(record: &City) -> &str {
        &record.id
    }

    fn draft_from(record: &City) -> CityPayload {
        CityPayload {
            name: record.name.clone(),
            country: record.country.as_ref().map(|c| c.id().to_owned()),
            state: record.state.as_ref().map(|s| s.id().to_owned()),
        }
    }

    fn validate(draft: &CityPayload) -> Result<(), String> {
        validate::required(&draft.name, "Name")
    }

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Country", "State"]
    }

    fn row(record: &City, (countries, states): &(Vec<Country>, Vec<State>)) -> Vec<String> {
        vec![
            record.name.clone(),
            ref_name(record.country.as_ref(), countries).to_owned(),
            ref_name(record.state.as_ref(), states).to_owned(),
        ]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<City>, geocat_api::Error> {
        client.list_cities().await
    }

    async fn load_lookups(client: &AdminClient) -> (Vec<Country>, Vec<State>) {
        join!(
            auxiliary("countries", client.list_countries()),
            auxiliary("states", client.list_states()),
        )
    }

    async fn create(client: &AdminClient, draft: &CityPayload) -> Result<(), geocat_api::Error> {
        client.create_city(draft).await.map(|_| ())
    }

    async fn update(
        client: &AdminClient,
        id: &str,
        draft: &CityPayload,
    ) -> Result<(), geocat_api::Error> {
        client.update_city(id, draft).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_city(id).await
    }
}
