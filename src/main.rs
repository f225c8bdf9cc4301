use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use liszt::menu::ResetFragment;
use liszt::page::{self, Page};
use liszt::{CatalogFilter, FilterOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Filter a static catalog page by letter or subject", long_about = None)]
struct Cli {
    /// XHTML page containing the catalog table
    #[arg(value_name = "PAGE")]
    page: Utf8PathBuf,

    /// JSON file with filter options
    #[arg(short, long)]
    config: Option<Utf8PathBuf>,

    /// Selector for the catalog rows (overrides the config)
    #[arg(long)]
    rows: Option<String>,

    /// Show only entries starting with this letter
    #[arg(long, group = "filter")]
    letter: Option<String>,

    /// Show only entries covering this subject key (e.g. `social-sciences`)
    #[arg(long, group = "filter")]
    subject: Option<String>,

    /// Apply a fragment such as `#b`, `#/history` or `#all`
    #[arg(long, group = "filter")]
    fragment: Option<String>,

    /// Insert the letter and subject menus
    #[arg(long)]
    menus: bool,

    /// Where "view all" points: `marker` (#all) or `clear`
    #[arg(long, value_parser = parse_reset)]
    reset_fragment: Option<ResetFragment>,

    /// Print the catalog index as JSON instead of the page
    #[arg(long)]
    index: bool,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,
}

fn parse_reset(s: &str) -> Result<ResetFragment, String> {
    match s {
        "marker" => Ok(ResetFragment::Marker),
        "clear" => Ok(ResetFragment::Clear),
        other => Err(format!("expected `marker` or `clear`, got `{}`", other)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut options = match &cli.config {
        Some(path) => FilterOptions::from_json_file(path)?,
        None => FilterOptions::default(),
    };
    if let Some(rows) = &cli.rows {
        options.row_selector = rows.clone();
    }
    if let Some(reset) = cli.reset_fragment {
        options.reset_fragment = reset;
    }

    let text = std::fs::read_to_string(&cli.page).with_context(|| format!("Read {}", cli.page))?;
    let page = page::shared(
        Page::parse(&text).with_context(|| format!("Failed to parse {}", cli.page))?,
    );
    let mut filter = CatalogFilter::from_page(&page, options)
        .with_context(|| format!("Cannot attach to {}", cli.page))?;

    if cli.index {
        println!("{}", serde_json::to_string_pretty(filter.index())?);
        return Ok(());
    }

    if cli.menus {
        let mut p = page.borrow_mut();
        filter.build_letter_menu(&mut *p, None, None);
        filter.build_subject_menu(&mut *p, None, None);
    }

    if let Some(letter) = &cli.letter {
        filter.show_letter(letter);
    } else if let Some(subject) = &cli.subject {
        filter.show_subject(subject);
    } else if let Some(fragment) = &cli.fragment {
        filter.navigate(fragment);
    } else {
        filter.reset();
    }

    let out = page.borrow().to_xhtml();
    match &cli.output {
        Some(path) => std::fs::write(path, out).with_context(|| format!("Write {}", path))?,
        None => print!("{}", out),
    }
    Ok(())
}
