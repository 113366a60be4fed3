#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the precinct map.
//!
//! Decodes GEOIDs, classifies margins, rolls up county and state totals
//! from a precinct collection, and starts the map server. With no
//! subcommand it opens an interactive menu.
//!
//! Uses `indicatif-log-bridge` (via [`precinct_map_cli_utils::init_logger`])
//! so log lines and the load progress bar never fight for the terminal.

mod explore;
mod report;

use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use precinct_map_cli_utils::{IndicatifProgress, MultiProgress};
use precinct_map_election::load::{DATA_ENV_VAR, DEFAULT_DATA_PATH};
use precinct_map_election::{DataSource, LoadError, PrecinctCollection, SelectionState};
use precinct_map_election_models::{AggregateScope, MarginBucket};
use precinct_map_geography_models::fips::canonical_state_name;
use precinct_map_server::config::ServerConfig;

#[derive(Parser)]
#[command(name = "precinct_map", about = "Precinct election results explorer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a precinct GEOID into state, county, and precinct names
    Decode {
        /// GEOID such as `08001-8134801173`
        geoid: String,
    },
    /// Show the color bucket for a signed margin (Democratic share minus
    /// Republican share, e.g. `0.12` or `-0.4`)
    Classify {
        #[arg(allow_negative_numbers = true)]
        margin: f64,
    },
    /// Roll up precinct results for a state or county
    Summary {
        /// Full state name
        #[arg(long, default_value = "Colorado")]
        state: String,
        /// County name. When omitted the whole state is rolled up.
        #[arg(long)]
        county: Option<String>,
        /// Path or URL of the precinct `GeoJSON`
        #[arg(long, env = DATA_ENV_VAR, default_value = DEFAULT_DATA_PATH)]
        data: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the results for a single precinct
    Precinct {
        /// GEOID such as `08001-8134801173`
        geoid: String,
        /// Path or URL of the precinct `GeoJSON`
        #[arg(long, env = DATA_ENV_VAR, default_value = DEFAULT_DATA_PATH)]
        data: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the counties present in the collection for a state
    Counties {
        /// Full state name
        #[arg(long, default_value = "Colorado")]
        state: String,
        /// Path or URL of the precinct `GeoJSON`
        #[arg(long, env = DATA_ENV_VAR, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },
    /// Start the map server
    Serve {
        /// Address to bind (overrides `BIND_ADDR`)
        #[arg(long)]
        bind_addr: Option<String>,
        /// Port to bind (overrides `PORT`)
        #[arg(long)]
        port: Option<u16>,
        /// Path or URL of the precinct `GeoJSON` (overrides `PRECINCT_MAP_DATA`)
        #[arg(long)]
        data: Option<String>,
    },
}

/// Top-level actions offered by the interactive menu.
enum Action {
    Explore,
    Decode,
    Classify,
    Server,
}

impl Action {
    const ALL: &[Self] = &[Self::Explore, Self::Decode, Self::Classify, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Explore => "Explore precinct results",
            Self::Decode => "Decode a GEOID",
            Self::Classify => "Classify a margin",
            Self::Server => "Start server",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = precinct_map_cli_utils::init_logger();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_interactive(&multi).await;
    };

    match command {
        Commands::Decode { geoid } => {
            let location = precinct_map_geography_models::decode(&geoid);
            if location.is_unknown() {
                log::warn!("{geoid} is not a recognizable GEOID");
            }
            println!("{}", report::render_location(&location));
        }
        Commands::Classify { margin } => print_bucket(margin),
        Commands::Summary {
            state,
            county,
            data,
            json,
        } => {
            let collection = load(&multi, &data).await?;
            let state = resolve_state(&state);
            let scope = county.map_or_else(
                || AggregateScope::state(state.clone()),
                |county| AggregateScope::county(state.clone(), county),
            );
            let mut selection = SelectionState::new();
            let restyle = selection.select_scope(&collection, scope);

            if json {
                println!("{}", serde_json::to_string_pretty(selection.selection())?);
            } else {
                println!("{}", report::render_breadcrumbs(&selection.breadcrumbs()));
                println!("{}", report::render_selection(selection.selection()));
                if let Some(bounds) = restyle.bounds {
                    println!(
                        "  Bounds:      [{:.4}, {:.4}, {:.4}, {:.4}]",
                        bounds.west, bounds.south, bounds.east, bounds.north
                    );
                }
            }
        }
        Commands::Precinct { geoid, data, json } => {
            let collection = load(&multi, &data).await?;
            let mut selection = SelectionState::new();
            if selection.click_feature(&collection, &geoid).is_none() {
                return Err(format!("No precinct with GEOID {geoid}").into());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(selection.selection())?);
            } else {
                println!("{}", report::render_breadcrumbs(&selection.breadcrumbs()));
                println!("{}", report::render_selection(selection.selection()));
            }
        }
        Commands::Counties { state, data } => {
            let collection = load(&multi, &data).await?;
            let state = resolve_state(&state);
            let counties = collection.counties(&state);
            if counties.is_empty() {
                log::warn!("No counties found for {state}");
            }
            for county in counties {
                println!("{county}");
            }
        }
        Commands::Serve {
            bind_addr,
            port,
            data,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(bind_addr) = bind_addr {
                config.bind_addr = bind_addr;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(data) = data {
                config.data_source = DataSource::parse(&data);
            }

            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new().block_on(precinct_map_server::run_server(config))
            })
            .await??;
        }
    }

    Ok(())
}

async fn run_interactive(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    println!("Precinct Map");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::Explore => {
            let data: String = Input::new()
                .with_prompt("Precinct data (path or URL)")
                .default(DataSource::from_env().to_string())
                .interact_text()?;
            explore::run(multi, &DataSource::parse(&data)).await?;
        }
        Action::Decode => {
            let geoid: String = Input::new().with_prompt("GEOID").interact_text()?;
            println!(
                "{}",
                report::render_location(&precinct_map_geography_models::decode(geoid.trim()))
            );
        }
        Action::Classify => {
            let margin: f64 = Input::new()
                .with_prompt("Margin (Democratic share minus Republican share)")
                .interact_text()?;
            print_bucket(margin);
        }
        Action::Server => {
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(precinct_map_server::interactive::run())
            })
            .await??;
        }
    }

    Ok(())
}

/// Accepts any capitalization of a known state name.
fn resolve_state(state: &str) -> String {
    canonical_state_name(state).map_or_else(
        || {
            log::warn!("{state} is not a known state or territory name");
            state.to_string()
        },
        str::to_string,
    )
}

fn print_bucket(margin: f64) {
    let bucket = MarginBucket::classify(margin);
    println!(
        "{} {bucket} {}",
        report::format_margin(margin),
        bucket.color()
    );
}

async fn load(multi: &MultiProgress, data: &str) -> Result<PrecinctCollection, LoadError> {
    let source = DataSource::parse(data);
    let progress = IndicatifProgress::load_bar(multi, &format!("Loading {source}"));
    let collection = source.load(progress.as_ref()).await?;
    log::debug!("{} precincts from {source}", collection.len());
    Ok(collection)
}
