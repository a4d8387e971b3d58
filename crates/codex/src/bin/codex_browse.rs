//! # Codex Browse
//!
//! Terminal front end over a JSON champion catalog.
//!
//! ```bash
//! # Every champion, collated by name
//! codex_browse data/champions.json
//!
//! # Search, grouped by role
//! codex_browse data/champions.json --search ash --sort tag
//!
//! # Detail card plus radar chart
//! codex_browse data/champions.json --open /Garen --svg garen.svg
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use codex::core::{
    Catalog, ChampionRecord, CodexConfig, CodexError, CodexResult, Route, SortMode, ViewModel,
};
use codex::ui::{svg, ImageResolver, Theme};
use codex::{BrowseSession, Screen};

/// Browse a champion catalog.
#[derive(Parser, Debug)]
#[command(name = "codex_browse", version, about)]
struct Args {
    /// JSON catalog file (an array of champion records).
    catalog: PathBuf,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search term: display name as typed, English name in any case.
    #[arg(long, default_value = "")]
    search: String,

    /// `name` or `tag`; defaults to the config's `view.default_sort`.
    #[arg(long)]
    sort: Option<SortMode>,

    /// Screen to show: `/` for the list, `/<EnglishName>` for a detail card.
    #[arg(long, default_value = "/")]
    open: String,

    /// Write the detail card's chart to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("codex_browse: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CodexResult<()> {
    let config = match &args.config {
        Some(path) => CodexConfig::from_path(path)?,
        None => CodexConfig::default(),
    };
    let catalog = Catalog::from_json_path(&args.catalog)?;
    let thumbnails = ImageResolver::from_config(&config.assets);

    let mut session = BrowseSession::from_source(&catalog, &config)?;
    session.set_search_term(args.search.as_str());
    if let Some(sort) = args.sort {
        session.set_sort_mode(sort);
    }

    match session.open(&args.open)? {
        Screen::List(view) => {
            if args.svg.is_some() {
                tracing::warn!("--svg only applies to detail screens; ignored");
            }
            print_list(&view, &thumbnails);
        }
        Screen::Detail(detail) => {
            print!("{detail}");
            if let Some(path) = &args.svg {
                let document = svg::write_document(detail.render(&Theme::default()).commands());
                std::fs::write(path, document).map_err(|e| CodexError::io(path, &e))?;
                tracing::info!(path = %path.display(), "wrote radar chart");
            }
        }
    }
    Ok(())
}

fn print_list(view: &ViewModel<'_>, thumbnails: &ImageResolver) {
    match view {
        ViewModel::Flat(records) => {
            for record in records {
                print_card(record, thumbnails);
            }
        }
        ViewModel::Grouped(groups) => {
            for (tag, records) in groups {
                println!("{tag} ({})", records.len());
                for record in records {
                    print_card(record, thumbnails);
                }
                println!();
            }
        }
    }
    println!("{} champions", view.len());
}

fn print_card(record: &ChampionRecord, thumbnails: &ImageResolver) {
    let href = Route::detail_href(record).unwrap_or_default();
    let thumbnail = thumbnails
        .thumbnail(&record.image)
        .map(|source| source.primary)
        .unwrap_or_default();
    println!("  {:<12} {:<16} {thumbnail}", record.display_name(), href);
}
