//! Output formatting: table, JSON, YAML, plain.
//!
//! Table output builds from the controller's derived export rows so the
//! console shows the same resolved reference names the exports carry;
//! structured formats serialize the filtered records themselves.

use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::Style;

use geocat_core::{ListController, Resource};

use crate::cli::OutputFormat;

/// Render a controller's visible rows in the chosen format.
pub fn render_records<R: Resource>(format: &OutputFormat, ctl: &ListController<R>) -> String {
    render_collection::<R>(format, &ctl.visible_rows(), ctl.lookups())
}

/// Render a record collection directly, outside a mounted controller
/// (scoped listings that bypass the cache-paint path).
pub fn render_collection<R: Resource>(
    format: &OutputFormat,
    records: &[R::Record],
    lookups: &R::Lookups,
) -> String {
    match format {
        OutputFormat::Table => {
            let columns = R::columns();
            let rows: Vec<Vec<String>> = records.iter().map(|r| R::row(r, lookups)).collect();
            render_table(&columns, &rows)
        }
        OutputFormat::Json => render_json(records),
        OutputFormat::Yaml => render_yaml(records),
        OutputFormat::Plain => records
            .iter()
            .map(|r| R::record_id(r).to_owned())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

pub(crate) fn render_table(columns: &[&'static str], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().copied());
    for row in rows {
        builder.push_record(row.iter().map(String::as_str));
    }
    builder.build().with(Style::rounded()).to_string()
}

pub(crate) fn render_json<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

pub(crate) fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
