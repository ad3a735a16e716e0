//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use roster_lib::view::Direction;

/// Browse an employee roster: search, filter, sort, page and export.
#[derive(Parser, Debug)]
#[command(name = "roster", author, version, about)]
pub struct Args {
    /// JSON file holding an array of row objects
    pub fixture: PathBuf,

    /// Field that identifies each row
    #[arg(long, default_value = "id")]
    pub id_field: String,

    /// Case-insensitive text searched across all columns
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact column match, as key=value (repeatable)
    #[arg(short, long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Sort column, as key, key:asc or key:desc
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<(String, Direction)>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Write every filtered row (all pages) to this CSV file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Debug mode
    #[arg(short, long)]
    pub debug: bool,
}

fn parse_filter(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", input)),
    }
}

fn parse_sort(input: &str) -> Result<(String, Direction), String> {
    let (key, direction) = match input.rsplit_once(':') {
        Some((key, direction)) => (key, direction.parse().map_err(|e| format!("{}", e))?),
        None => (input, Direction::Asc),
    };
    if key.trim().is_empty() {
        return Err("sort column is empty".into());
    }
    Ok((key.trim().to_string(), direction))
}
