//! Shared drivers for command handlers.
//!
//! Every entity command goes through the same motions: mount a list
//! controller (cache paint + reconcile), optionally filter, then either
//! render, export, or push a staged mutation through the confirmation
//! gate. The drivers here do that generically over any `Resource`.

use std::io::IsTerminal;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use geocat_core::{CoreError, ListController, Resource};

use crate::cli::{ExportFormat, ExportOpts, GlobalOpts, ListOpts};
use crate::context::AppContext;
use crate::error::CliError;
use crate::{export, output};

// ── Mounting ─────────────────────────────────────────────────────────

/// Mount a controller: session check, cache paint, reconcile, lookups.
///
/// A reconcile failure with cached rows on screen degrades to a warning;
/// with nothing to show it is fatal.
pub async fn mounted<R: Resource>(
    ctx: &AppContext,
    global: &GlobalOpts,
) -> Result<ListController<R>, CliError> {
    ctx.ensure_session().await?;

    let mut ctl = ctx.controller::<R>();
    let spinner = progress(global, &format!("Fetching {}...", R::PLURAL));
    let result = ctl.mount().await;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    match result {
        Ok(()) => {}
        Err(CoreError::Unauthenticated) => return Err(CliError::NotSignedIn),
        Err(err) => {
            if ctl.records().is_empty() {
                return Err(err.into());
            }
            if !global.quiet {
                if std::io::stderr().is_terminal() {
                    eprintln!("{} {err} Showing cached data.", "warning:".yellow());
                } else {
                    eprintln!("warning: {err} Showing cached data.");
                }
            }
        }
    }

    ctl.set_lookups(R::load_lookups(ctl.client()).await);
    Ok(ctl)
}

/// Spinner for the primary fetch, shown only on interactive stderr.
fn progress(global: &GlobalOpts, message: &str) -> Option<ProgressBar> {
    if global.quiet || !std::io::stderr().is_terminal() {
        return None;
    }
    let bar = ProgressBar::new_spinner().with_message(message.to_owned());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(bar)
}

// ── List / export drivers ────────────────────────────────────────────

pub async fn list<R: Resource>(
    ctx: &AppContext,
    opts: ListOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut ctl = mounted::<R>(ctx, global).await?;
    if let Some(query) = opts.search {
        ctl.set_search(query);
    }
    let out = output::render_records(&global.output, &ctl);
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn export<R: Resource>(
    ctx: &AppContext,
    opts: ExportOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut ctl = mounted::<R>(ctx, global).await?;
    if let Some(query) = opts.search {
        ctl.set_search(query);
    }

    let (columns, rows) = ctl.export_rows();
    let count = rows.len();
    match opts.format {
        ExportFormat::Csv => export::write_csv(&opts.out, &columns, &rows)?,
        ExportFormat::Pdf => export::write_pdf(&opts.out, R::PLURAL, &columns, &rows)?,
    }
    if !global.quiet {
        eprintln!("Exported {count} {} to {}", R::PLURAL, opts.out.display());
    }
    Ok(())
}

// ── Mutation drivers ─────────────────────────────────────────────────

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Run the staged intent through the confirmation gate: prompt, then
/// commit on approval or cancel without touching the network.
pub async fn finalize<R: Resource>(
    ctl: &mut ListController<R>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let Some(prompt) = ctl.request_confirmation() else {
        return Ok(());
    };

    if !confirm(&prompt, global.yes)? {
        ctl.cancel();
        if !global.quiet {
            eprintln!("Cancelled.");
        }
        return Ok(());
    }

    let ack = ctl.confirm().await?;
    if !global.quiet {
        if std::io::stderr().is_terminal() {
            eprintln!("{}", ack.green());
        } else {
            eprintln!("{ack}");
        }
    }
    Ok(())
}

/// Stage and confirm a create built from a blank draft.
pub async fn add<R: Resource>(
    ctx: &AppContext,
    global: &GlobalOpts,
    fill: impl FnOnce(&mut R::Draft),
) -> Result<(), CliError> {
    ctx.ensure_session().await?;
    let mut ctl = ctx.controller::<R>();

    let mut draft = ctl.add_requested();
    fill(&mut draft);
    ctl.submit(draft)?;
    finalize(&mut ctl, global).await
}

/// Stage and confirm an update: prefill from the existing record, apply
/// flag overrides, submit.
pub async fn edit<R: Resource>(
    ctx: &AppContext,
    group: &str,
    id: &str,
    global: &GlobalOpts,
    apply: impl FnOnce(&mut R::Draft),
) -> Result<(), CliError> {
    let mut ctl = mounted::<R>(ctx, global).await?;

    let record = ctl
        .records()
        .iter()
        .find(|r| R::record_id(r) == id)
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            resource_type: R::TITLE.to_owned(),
            identifier: id.to_owned(),
            list_command: format!("{group} list"),
        })?;

    let mut draft = ctl.edit_requested(&record);
    apply(&mut draft);
    ctl.submit(draft)?;
    finalize(&mut ctl, global).await
}

/// Stage and confirm a delete.
pub async fn delete<R: Resource>(
    ctx: &AppContext,
    id: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    ctx.ensure_session().await?;
    let mut ctl = ctx.controller::<R>();

    ctl.delete_requested(id);
    finalize(&mut ctl, global).await
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file(path: &Path) -> Result<serde_json::Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        message: format!("invalid JSON in {}: {e}", path.display()),
    })
}
