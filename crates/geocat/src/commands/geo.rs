//! Geography command handlers: countries, states, cities.

use geocat_api::{Identified, State};
use geocat_core::{Cities, Countries, CoreError, DependentField, States};

use crate::cli::{
    CitiesArgs, CitiesCommand, CountriesArgs, CountriesCommand, GlobalOpts, ListOpts, StatesArgs,
    StatesCommand,
};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

/// List only the states under one country, through the scoped endpoint
/// rather than client-side filtering of the full collection.
async fn scoped_states(
    ctx: &AppContext,
    country_id: &str,
    opts: ListOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    ctx.ensure_session().await?;

    let states = ctx.client.states_by_country(country_id).await.map_err(|_| {
        CliError::Backend {
            message: "Failed to fetch states.".to_owned(),
        }
    })?;
    let countries = geocat_core::auxiliary("countries", ctx.client.list_countries()).await;

    let visible = match opts.search {
        Some(query) => geocat_core::filter(&states, &query, |s| {
            <States as geocat_core::Resource>::search_terms(s, &countries)
        }),
        None => states,
    };

    let out = output::render_collection::<States>(&global.output, &visible, &countries);
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Resolve a `--state` flag against the chosen country's scoped list.
/// Accepts the state's id or (unique) name; rejects anything that does
/// not belong to that country.
async fn scoped_state(
    ctx: &AppContext,
    country: &str,
    state: String,
) -> Result<String, CliError> {
    let mut field: DependentField<State> = DependentField::new();
    let client = ctx.client.clone();
    field
        .on_parent_change(Some(country), |id| async move {
            client
                .states_by_country(&id)
                .await
                .map_err(|_| CoreError::fetch_failed("states"))
        })
        .await?;

    let found = field
        .options()
        .iter()
        .find(|s| s.id == state || s.name.eq_ignore_ascii_case(&state));
    match found {
        Some(s) => Ok(s.id().to_owned()),
        None => Err(CliError::Validation {
            message: format!("State '{state}' does not belong to country '{country}'."),
        }),
    }
}

pub async fn countries(
    ctx: &AppContext,
    args: CountriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CountriesCommand::List(opts) => util::list::<Countries>(ctx, opts, global).await,

        CountriesCommand::Add { name, code } => {
            util::add::<Countries>(ctx, global, |draft| {
                draft.name = name;
                draft.code = code;
            })
            .await
        }

        CountriesCommand::Edit { id, name, code } => {
            util::edit::<Countries>(ctx, "countries", &id, global, |draft| {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(code) = code {
                    draft.code = code;
                }
            })
            .await
        }

        CountriesCommand::Delete { id } => util::delete::<Countries>(ctx, &id, global).await,

        CountriesCommand::Export(opts) => util::export::<Countries>(ctx, opts, global).await,
    }
}

pub async fn states(
    ctx: &AppContext,
    args: StatesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        StatesCommand::List { opts, country } => match country {
            None => util::list::<States>(ctx, opts, global).await,
            Some(country_id) => scoped_states(ctx, &country_id, opts, global).await,
        },

        StatesCommand::Add {
            name,
            code,
            country,
        } => {
            util::add::<States>(ctx, global, |draft| {
                draft.name = name;
                draft.code = code;
                draft.country = country;
            })
            .await
        }

        StatesCommand::Edit {
            id,
            name,
            code,
            country,
        } => {
            util::edit::<States>(ctx, "states", &id, global, |draft| {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(code) = code {
                    draft.code = code;
                }
                if let Some(country) = country {
                    draft.country = Some(country);
                }
            })
            .await
        }

        StatesCommand::Delete { id } => util::delete::<States>(ctx, &id, global).await,

        StatesCommand::Export(opts) => util::export::<States>(ctx, opts, global).await,
    }
}

pub async fn cities(
    ctx: &AppContext,
    args: CitiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CitiesCommand::List(opts) => util::list::<Cities>(ctx, opts, global).await,

        CitiesCommand::Add {
            name,
            country,
            state,
        } => {
            let state = match (&country, state) {
                (Some(country), Some(state)) => {
                    Some(scoped_state(ctx, country, state).await?)
                }
                (_, state) => state,
            };
            util::add::<Cities>(ctx, global, |draft| {
                draft.name = name;
                draft.country = country;
                draft.state = state;
            })
            .await
        }

        CitiesCommand::Edit {
            id,
            name,
            country,
            state,
        } => {
            let state = match (&country, state) {
                (Some(country), Some(state)) => {
                    Some(scoped_state(ctx, country, state).await?)
                }
                (_, state) => state,
            };
            util::edit::<Cities>(ctx, "cities", &id, global, |draft| {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(country) = country {
                    draft.country = Some(country);
                    // A state scoped to the old country never survives a
                    // country change; it must be re-supplied.
                    draft.state = None;
                }
                if let Some(state) = state {
                    draft.state = Some(state);
                }
            })
            .await
        }

        CitiesCommand::Delete { id } => util::delete::<Cities>(ctx, &id, global).await,

        CitiesCommand::Export(opts) => util::export::<Cities>(ctx, opts, global).await,
    }
}
