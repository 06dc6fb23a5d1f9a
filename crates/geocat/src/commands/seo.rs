//! SEO entry command handlers, including the custom field registry.

use serde_json::Value;

use geocat_api::{CustomFieldDefinition, FieldKind, SeoFields};
use geocat_core::{CustomFields, SeoPages};

use crate::cli::{
    FieldKindArg, GlobalOpts, SeoArgs, SeoCommand, SeoFieldOpts, SeoFieldsArgs, SeoFieldsCommand,
};
use crate::context::AppContext;
use crate::error::CliError;

use super::util;

// ── Field flag application ──────────────────────────────────────────

/// Flag values parsed up front so the draft closure stays infallible.
struct FieldPatch {
    base: Option<SeoFields>,
    opts: SeoFieldOpts,
    custom: Vec<(String, Value)>,
}

fn parse_patch(opts: SeoFieldOpts) -> Result<FieldPatch, CliError> {
    let base = match &opts.from_file {
        Some(path) => Some(serde_json::from_value(util::read_json_file(path)?)?),
        None => None,
    };

    let mut custom = Vec::new();
    for pair in &opts.custom {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CliError::Validation {
                message: format!("--custom expects KEY=VALUE, got '{pair}'"),
            });
        };
        custom.push((key.to_owned(), Value::String(value.to_owned())));
    }

    Ok(FieldPatch { base, opts, custom })
}

impl FieldPatch {
    fn apply(self, fields: &mut SeoFields) {
        if let Some(base) = self.base {
            *fields = base;
        }
        if let Some(sku) = self.opts.sku {
            fields.sku = sku;
        }
        if let Some(slug) = self.opts.slug {
            fields.slug = slug;
        }
        if let Some(location) = self.opts.location {
            fields.location_id = location;
        }
        if let Some(product) = self.opts.product {
            fields.product_id = product;
        }
        if let Some(title) = self.opts.title {
            fields.title = Some(title);
        }
        if let Some(description) = self.opts.description {
            fields.description = Some(description);
        }
        if let Some(keywords) = self.opts.keywords {
            fields.keywords = Some(keywords);
        }
        if let Some(canonical) = self.opts.canonical_url {
            fields.canonical_url = Some(canonical);
        }
        for (key, value) in self.custom {
            fields.custom.insert(key, value);
        }
    }
}

/// The registry snapshot the draft validates its custom map against.
async fn registry(ctx: &AppContext) -> Result<Vec<CustomFieldDefinition>, CliError> {
    Ok(ctx.client.list_custom_fields().await?)
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn seo(ctx: &AppContext, args: SeoArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        SeoCommand::List(opts) => util::list::<SeoPages>(ctx, opts, global).await,

        SeoCommand::Add(opts) => {
            let patch = parse_patch(opts)?;
            let registry = registry(ctx).await?;
            util::add::<SeoPages>(ctx, global, |draft| {
                draft.registry = registry;
                patch.apply(&mut draft.fields);
            })
            .await
        }

        SeoCommand::Edit { id, fields } => {
            let patch = parse_patch(fields)?;
            let registry = registry(ctx).await?;
            util::edit::<SeoPages>(ctx, "seo", &id, global, |draft| {
                draft.registry = registry;
                patch.apply(&mut draft.fields);
            })
            .await
        }

        SeoCommand::Delete { id } => util::delete::<SeoPages>(ctx, &id, global).await,

        SeoCommand::Export(opts) => util::export::<SeoPages>(ctx, opts, global).await,

        SeoCommand::Fields(args) => fields(ctx, args, global).await,
    }
}

async fn fields(
    ctx: &AppContext,
    args: SeoFieldsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SeoFieldsCommand::List(opts) => util::list::<CustomFields>(ctx, opts, global).await,

        SeoFieldsCommand::Add {
            name,
            kind,
            options,
        } => {
            let kind = match kind {
                FieldKindArg::Text => FieldKind::Text,
                FieldKindArg::Number => FieldKind::Number,
                FieldKindArg::Dropdown => FieldKind::Dropdown {
                    dropdown_source: options,
                },
            };
            util::add::<CustomFields>(ctx, global, |draft| {
                draft.name = name;
                draft.kind = kind;
            })
            .await
        }

        SeoFieldsCommand::Delete { id } => util::delete::<CustomFields>(ctx, &id, global).await,
    }
}
