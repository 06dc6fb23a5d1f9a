//! CSV and PDF export over the currently filtered rows.
//!
//! Both formats take the derived display rows the list view shows, so a
//! search applied before exporting narrows the file the same way it
//! narrows the screen.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use genpdf::{Element, elements, style};

use crate::error::CliError;

/// Write `columns` + `rows` as an RFC-4180 style CSV file.
pub fn write_csv(path: &Path, columns: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "{}", csv_line(columns.iter().map(|c| (*c).to_owned())))?;
    for row in rows {
        writeln!(out, "{}", csv_line(row.iter().cloned()))?;
    }
    out.flush()?;
    Ok(())
}

fn csv_line(fields: impl Iterator<Item = String>) -> String {
    fields.map(|f| csv_field(&f)).collect::<Vec<_>>().join(",")
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

/// Render `columns` + `rows` as a one-table PDF document.
///
/// Fonts come from `GEOCAT_FONT_DIR` (or `./fonts`), expected to hold a
/// TrueType family named by `GEOCAT_FONT_FAMILY` (default "LiberationSans").
pub fn write_pdf(
    path: &Path,
    title: &str,
    columns: &[&str],
    rows: &[Vec<String>],
) -> Result<(), CliError> {
    let font_dir = std::env::var("GEOCAT_FONT_DIR").unwrap_or_else(|_| "./fonts".into());
    let family_name =
        std::env::var("GEOCAT_FONT_FAMILY").unwrap_or_else(|_| "LiberationSans".into());

    let font_family =
        genpdf::fonts::from_files(&font_dir, &family_name, None).map_err(|e| CliError::Export {
            message: format!("could not load font family '{family_name}' from {font_dir}: {e}"),
        })?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title(title);
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    doc.push(
        elements::Paragraph::new(title).styled(style::Style::new().bold().with_font_size(14)),
    );
    doc.push(elements::Break::new(1));

    let mut table = elements::TableLayout::new(vec![1; columns.len()]);
    table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

    let mut header = table.row();
    for column in columns {
        header.push_element(
            elements::Paragraph::new(*column)
                .styled(style::Style::new().bold())
                .padded(1),
        );
    }
    header.push().map_err(|e| CliError::Export {
        message: e.to_string(),
    })?;

    for row in rows {
        let mut table_row = table.row();
        for cell in row {
            table_row.push_element(elements::Paragraph::new(cell.as_str()).padded(1));
        }
        table_row.push().map_err(|e| CliError::Export {
            message: e.to_string(),
        })?;
    }
    doc.push(table);

    let out = File::create(path)?;
    doc.render(out).map_err(|e| CliError::Export {
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_only_where_needed() {
        assert_eq!(csv_field("Lyon"), "Lyon");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_file_round_trips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(
            &path,
            &["Name", "Country"],
            &[vec!["Lyon, Centre".into(), "France".into()]],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Name,Country\n\"Lyon, Centre\",France\n");
    }
}
