use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use test_name_dropdown::config::{self, DropdownSettings, PopulatorConfig};
use test_name_dropdown::dom::{MemoryDocument, render_html};
use test_name_dropdown::listing::{
    FileListingSource, HttpListingSource, ListingOutcome, ListingSource, dropdown_items,
};
use test_name_dropdown::{DropdownPopulator, DropdownResult};

/// Replace marked test-name inputs with dropdowns populated from a remote file listing
#[derive(Parser)]
#[command(name = "test-name-dropdown")]
#[command(version)]
#[command(
    about = "Replace marked test-name inputs with dropdowns populated from a remote file listing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate the dropdowns of a page description and print the resulting page
    Populate {
        /// Page description JSON ({"elements": [...]})
        #[arg(long)]
        page: PathBuf,

        /// Print the page as JSON instead of HTML
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the dropdown items the listing currently yields, one per line
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Read the listing from a local JSON file instead of the endpoint
    #[arg(long)]
    listing_file: Option<PathBuf>,

    /// Listing endpoint URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Substring a listing entry must contain (overrides config)
    #[arg(long)]
    filter: Option<String>,

    /// Request timeout in seconds, at least 1 (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Path to a TOML config file
    #[arg(long, short)]
    config: Option<PathBuf>,
}

impl SourceArgs {
    fn load_config(&self) -> DropdownResult<PopulatorConfig> {
        let overrides = DropdownSettings {
            endpoint: self.endpoint.clone(),
            filter: self.filter.clone(),
            timeout_secs: self.timeout,
            ..Default::default()
        };
        config::load_config(self.config.as_deref(), overrides)
    }

    fn listing_source(&self, config: &PopulatorConfig) -> DropdownResult<Source> {
        match &self.listing_file {
            Some(path) => Ok(Source::File(FileListingSource::new(path))),
            None => {
                let source = HttpListingSource::new(config)?;
                log::info!("Fetching listing from {}", source.endpoint());
                Ok(Source::Http(source))
            }
        }
    }
}

enum Source {
    Http(HttpListingSource),
    File(FileListingSource),
}

impl ListingSource for Source {
    async fn fetch(&self) -> ListingOutcome {
        match self {
            Source::Http(source) => source.fetch().await,
            Source::File(source) => source.fetch().await,
        }
    }
}

/// Returns whether the listing was obtained.
async fn run(command: Commands) -> DropdownResult<bool> {
    match command {
        Commands::Populate { page, json, source } => {
            let config = source.load_config()?;
            let listing = source.listing_source(&config)?;
            let mut doc = MemoryDocument::load(&page)?;

            let summary = DropdownPopulator::new(config)
                .populate(&mut doc, &listing)
                .await;
            log::info!(
                "Populated {}/{} dropdown(s)",
                summary.rebuilt,
                summary.registered
            );

            if json {
                println!("{}", doc.to_json()?);
            } else {
                print!("{}", render_html(&doc));
            }
            Ok(true)
        }
        Commands::List { source } => {
            let config = source.load_config()?;
            let outcome = source.listing_source(&config)?.fetch().await;

            for item in dropdown_items(&outcome, &config) {
                println!("{}", item);
            }
            Ok(outcome.is_ok())
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
