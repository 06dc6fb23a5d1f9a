//! Catalog command handlers: locations and products.

use geocat_core::{Locations, Products};

use crate::cli::{GlobalOpts, LocationsArgs, LocationsCommand, ProductsArgs, ProductsCommand};
use crate::context::AppContext;
use crate::error::CliError;

use super::util;

pub async fn locations(
    ctx: &AppContext,
    args: LocationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        LocationsCommand::List(opts) => util::list::<Locations>(ctx, opts, global).await,

        LocationsCommand::Add {
            name,
            slug,
            country,
            state,
            city,
        } => {
            util::add::<Locations>(ctx, global, |draft| {
                draft.name = name;
                draft.slug = slug;
                draft.country = country;
                draft.state = state;
                draft.city = city;
            })
            .await
        }

        LocationsCommand::Edit {
            id,
            name,
            slug,
            country,
            state,
            city,
        } => {
            util::edit::<Locations>(ctx, "locations", &id, global, |draft| {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(slug) = slug {
                    draft.slug = slug;
                }
                // Parent changes invalidate the narrower selections;
                // they must be re-supplied alongside.
                if let Some(country) = country {
                    draft.country = Some(country);
                    draft.state = None;
                    draft.city = None;
                }
                if let Some(state) = state {
                    draft.state = Some(state);
                    draft.city = None;
                }
                if let Some(city) = city {
                    draft.city = Some(city);
                }
            })
            .await
        }

        LocationsCommand::Delete { id } => util::delete::<Locations>(ctx, &id, global).await,

        LocationsCommand::Export(opts) => util::export::<Locations>(ctx, opts, global).await,
    }
}

pub async fn products(
    ctx: &AppContext,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List(opts) => util::list::<Products>(ctx, opts, global).await,

        ProductsCommand::Add {
            name,
            description,
            slug,
        } => {
            util::add::<Products>(ctx, global, |draft| {
                draft.name = name;
                draft.description = description;
                draft.slug = slug;
            })
            .await
        }

        ProductsCommand::Edit {
            id,
            name,
            description,
            slug,
        } => {
            util::edit::<Products>(ctx, "products", &id, global, |draft| {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(description) = description {
                    draft.description = description;
                }
                if let Some(slug) = slug {
                    draft.slug = slug;
                }
            })
            .await
        }

        ProductsCommand::Delete { id } => util::delete::<Products>(ctx, &id, global).await,

        ProductsCommand::Export(opts) => util::export::<Products>(ctx, opts, global).await,
    }
}
