//! End-of-run summary of a generated migration.

use clap::ValueEnum;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::matcher::Matches;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Tabled)]
struct MoveRow<'a> {
    #[tabled(rename = "FROM")]
    from: &'a str,
    #[tabled(rename = "TO")]
    to: &'a str,
}

pub fn render_summary(matches: &Matches, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(matches)),
        OutputFormat::Json => serde_json::to_string_pretty(matches),
    }
}

fn render_table(matches: &Matches) -> String {
    let mut out = String::new();

    if matches.is_empty() {
        out.push_str("No moves found.\n");
    } else {
        let rows = matches.up.iter().map(|(from, to)| MoveRow { from, to });
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        out.push_str(&table.to_string());
        out.push('\n');
        out.push_str(&format!("{} moves\n", matches.len()));
    }

    if !matches.unmatched_destroy.is_empty() {
        out.push_str(&format!(
            "{} destroyed addresses without a match\n",
            matches.unmatched_destroy.len()
        ));
    }
    if !matches.unmatched_create.is_empty() {
        out.push_str(&format!(
            "{} created addresses without a match\n",
            matches.unmatched_create.len()
        ));
    }

    out
}
