mod args;
mod error;
mod render;

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser;
use roster_lib::TableView;
use roster_lib::export::CsvExporter;
use roster_lib::model::Column;
use roster_lib::model::read_rows_json;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::args::Args;
use crate::error::CliError;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    WriteLogger::init(level, Config::default(), std::io::stderr())?;

    let file = File::open(&args.fixture).map_err(|source| CliError::Open {
        path: args.fixture.clone(),
        source,
    })?;
    let rows = read_rows_json(BufReader::new(file), Some(&args.id_field))?;
    log::info!("loaded {} rows from {}", rows.len(), args.fixture.display());

    let columns = Column::infer(&rows);
    let mut view = TableView::with_rows(columns, rows);
    apply(&mut view, &args);

    if let Some(path) = &args.export {
        let written = CsvExporter::new(view.columns().to_vec()).write_to_path(&view.filtered_rows(), path)?;
        eprintln!("Exported {} row(s) to {}", written, path.display());
    }

    let snapshot = view.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render::table(view.columns(), &snapshot));
    }

    Ok(())
}

/// Applies the command-line criteria in the order a user would click them.
fn apply(view: &mut TableView, args: &Args) {
    if let Some(size) = args.page_size {
        if !view.offers_page_size(size) {
            log::debug!("page size {} is not one of {:?}", size, view.page_size_options());
        }
        view.set_page_size(size);
    }
    if let Some(query) = &args.search {
        view.set_global_filter(query.as_str());
    }
    for (key, value) in &args.filters {
        view.set_column_filter(key, Some(value.as_str()));
    }
    if let Some((key, direction)) = &args.sort {
        view.set_sort(key, Some(*direction));
    }
    view.set_page_index(args.page.saturating_sub(1));
}
