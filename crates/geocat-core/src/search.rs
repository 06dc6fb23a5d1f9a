// ── Client-side filter engine ──
//
// Pure function of (collection, query): safe to recompute on every
// render. Each entity page supplies its own derived-term closure, which
// may resolve bare-id references against the loaded lookup collections.

/// Case-insensitive substring filter over a collection.
///
/// A blank query returns the input unchanged (length and order). A
/// record matches when any of its derived terms contains the lowercased
/// query. Missing nested fields yield empty terms, which never match.
pub fn filter<T: Clone>(
    collection: &[T],
    query: &str,
    terms: impl Fn(&T) -> Vec<String>,
) -> Vec<T> {
    if query.trim().is_empty() {
        return collection.to_vec();
    }
    let needle = query.to_lowercase();
    collection
        .iter()
        .filter(|record| {
            terms(record)
                .iter()
                .any(|term| term.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use geocat_api::{City, ref_name};
    use serde_json::json;

    fn cities() -> Vec<City> {
        serde_json::from_value(json!([
            {
                "_id": "x1",
                "name": "Paris",
                "country": { "_id": "c2", "name": "France", "code": "FR" },
                "state": { "_id": "s9", "name": "Ile-de-France", "code": "IDF" }
            },
            { "_id": "x2", "name": "Lyon", "country": { "_id": "c2", "name": "France", "code": "FR" } },
            { "_id": "x3", "name": "Berlin" }
        ]))
        .unwrap()
    }

    fn city_terms(c: &City) -> Vec<String> {
        vec![
            c.name.clone(),
            ref_name(c.state.as_ref(), &[]).to_owned(),
            ref_name(c.country.as_ref(), &[]).to_owned(),
        ]
    }

    #[test]
    fn blank_query_is_identity() {
        let all = cities();
        let filtered = filter(&all, "", city_terms);
        assert_eq!(filtered, all);

        let whitespace = filter(&all, "   ", city_terms);
        assert_eq!(whitespace, all);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let filtered = filter(&cities(), "LYO", city_terms);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Lyon");
    }

    #[test]
    fn any_configured_field_can_match() {
        // "france" matches Paris and Lyon via the country name, not the city name.
        let filtered = filter(&cities(), "france", city_terms);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn missing_nested_fields_never_match_and_never_panic() {
        // Berlin has no state/country; the query only hits records that have one.
        let filtered = filter(&cities(), "idf", |c| {
            vec![ref_name(c.state.as_ref(), &[]).to_owned()]
        });
        assert_eq!(filtered.len(), 0);

        let by_code_name = filter(&cities(), "ile", city_terms);
        assert_eq!(by_code_name.len(), 1);
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter(&cities(), "fr", city_terms);
        let twice = filter(&once, "fr", city_terms);
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_input_order() {
        let filtered = filter(&cities(), "r", city_terms);
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        // Paris (name), Lyon (France), Berlin (name) keep collection order.
        assert_eq!(names, ["Paris", "Lyon", "Berlin"]);
    }
}
