//! Dashboard statistics handler.

use futures::join;
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

/// Entity counts across the catalog.
#[derive(Debug, Serialize)]
pub struct EntityCounts {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
    pub locations: usize,
    pub products: usize,
    pub inquiries: usize,
}

impl EntityCounts {
    fn rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Countries", self.countries),
            ("States", self.states),
            ("Cities", self.cities),
            ("Locations", self.locations),
            ("Products", self.products),
            ("Inquiries", self.inquiries),
        ]
    }
}

fn count<T>(result: Result<Vec<T>, geocat_api::Error>) -> Result<usize, CliError> {
    result.map(|records| records.len()).map_err(|err| {
        if matches!(err, geocat_api::Error::Transport(_)) {
            err.into()
        } else {
            CliError::Backend {
                message: "Failed to load dashboard statistics.".into(),
            }
        }
    })
}

pub async fn handle(ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    ctx.ensure_session().await?;

    let client = &ctx.client;
    let (countries, states, cities, locations, products, inquiries) = join!(
        client.list_countries(),
        client.list_states(),
        client.list_cities(),
        client.list_locations(),
        client.list_products(),
        client.list_inquiries(),
    );

    let counts = EntityCounts {
        countries: count(countries)?,
        states: count(states)?,
        cities: count(cities)?,
        locations: count(locations)?,
        products: count(products)?,
        inquiries: count(inquiries)?,
    };

    let rendered = match global.output {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = counts
                .rows()
                .into_iter()
                .map(|(name, n)| vec![name.to_owned(), n.to_string()])
                .collect();
            output::render_table(&["Entity", "Count"], &rows)
        }
        OutputFormat::Json => output::render_json(&counts),
        OutputFormat::Yaml => output::render_yaml(&counts),
        OutputFormat::Plain => counts
            .rows()
            .into_iter()
            .map(|(name, n)| format!("{} {n}", name.to_lowercase()))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}
