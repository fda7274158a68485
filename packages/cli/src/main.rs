#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line browser for the Canadian offense reference.
//!
//! Browse offenses by category, search by name/section/description, show
//! an offense's citation and sentencing bounds, and resolve the range that
//! applies to an offender of a given age. Running with no subcommand opens
//! the interactive browser.
//!
//! Logging goes through `pretty_env_logger`; set `RUST_LOG=debug` to see
//! catalog loading and resolution details.

mod interactive;
mod lookup;

use clap::{Parser, Subcommand};
use legal_advisor_catalog::{Catalog, quality};
use legal_advisor_cli_utils::render;
use legal_advisor_offense_models::{Jurisdiction, OffenseCategory, Statute};
use legal_advisor_sentencing::resolve;
use serde::Serialize;

use crate::lookup::{CliError, find_offense, parse_category, parse_jurisdiction};

#[derive(Parser)]
#[command(
    name = "legal_advisor",
    about = "Canadian Criminal Code offense and sentencing reference"
)]
struct Cli {
    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand to execute (defaults to the interactive browser).
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List offense categories with their offense counts
    Categories,
    /// List the offenses in a category
    List {
        /// Category name (e.g. `DRUG_OFFENSES` or "Drug Offenses")
        category: String,
        /// Only offenses whose name or section contains this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// Search offense names, sections, and descriptions
    Search {
        /// Text to look for (omit to list every offense)
        #[arg(default_value = "")]
        query: String,
    },
    /// Show one offense in full
    Show {
        /// Offense id or exact name
        offense: String,
    },
    /// Resolve the sentence range for an offender
    Resolve {
        /// Offense id or exact name
        offense: String,
        /// Offender age in years
        #[arg(long)]
        age: u8,
        /// Jurisdiction abbreviation or name
        #[arg(long, default_value = "FED")]
        jurisdiction: String,
    },
    /// List jurisdictions and their courts
    Jurisdictions,
    /// List the statutes offenses are drawn from
    Statutes,
    /// Run the data-quality check over the catalog
    Check,
    /// Browse interactively
    Interactive,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategorySummary {
    category: OffenseCategory,
    label: &'static str,
    description: &'static str,
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JurisdictionSummary {
    jurisdiction: Jurisdiction,
    name: &'static str,
    abbreviation: &'static str,
    courts: &'static [&'static str],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatuteSummary {
    statute: Statute,
    title: &'static str,
    short_name: &'static str,
    act_code: &'static str,
    citation: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    legal_advisor_cli_utils::init_logger();
    let cli = Cli::parse();

    let catalog = Catalog::load()?;
    log::info!(
        "Loaded {} offenses (data v{})",
        catalog.len(),
        catalog.metadata().data_version
    );

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Categories => cmd_categories(&catalog, cli.json)?,
        Commands::List { category, filter } => {
            let category = parse_category(&category)?;
            let offenses =
                catalog.search_in_category(category, filter.as_deref().unwrap_or_default());
            if cli.json {
                print_json(&offenses)?;
            } else {
                println!("{}: {}", category.label(), category.description());
                println!();
                print!("{}", render::offense_list(&offenses));
            }
        }
        Commands::Search { query } => {
            let offenses = catalog.search(&query);
            if cli.json {
                print_json(&offenses)?;
            } else {
                print!("{}", render::offense_list(&offenses));
            }
        }
        Commands::Show { offense } => {
            let offense = find_offense(&catalog, &offense)?;
            if cli.json {
                print_json(offense)?;
            } else {
                print!("{}", render::offense_detail(offense, catalog.metadata()));
            }
        }
        Commands::Resolve {
            offense,
            age,
            jurisdiction,
        } => {
            let offense = find_offense(&catalog, &offense)?;
            let jurisdiction = parse_jurisdiction(&jurisdiction)?;
            let result = resolve(offense, age, jurisdiction);
            if cli.json {
                print_json(&result)?;
            } else {
                print!("{}", render::sentence_result(&result));
            }
        }
        Commands::Jurisdictions => cmd_jurisdictions(cli.json)?,
        Commands::Statutes => cmd_statutes(cli.json)?,
        Commands::Check => cmd_check(&catalog, cli.json)?,
        Commands::Interactive => interactive::run(&catalog)?,
    }

    Ok(())
}

fn cmd_categories(catalog: &Catalog, json: bool) -> Result<(), CliError> {
    let counts = catalog.category_counts();
    if json {
        let summaries: Vec<CategorySummary> = counts
            .iter()
            .map(|&(category, count)| CategorySummary {
                category,
                label: category.label(),
                description: category.description(),
                count,
            })
            .collect();
        return print_json(&summaries);
    }

    print!("{}", render::metadata_banner(catalog.metadata()));
    println!();
    print!("{}", render::category_table(&counts));
    Ok(())
}

fn cmd_jurisdictions(json: bool) -> Result<(), CliError> {
    if json {
        let summaries: Vec<JurisdictionSummary> = Jurisdiction::all()
            .iter()
            .map(|&jurisdiction| JurisdictionSummary {
                jurisdiction,
                name: jurisdiction.name(),
                abbreviation: jurisdiction.abbreviation(),
                courts: jurisdiction.courts(),
            })
            .collect();
        return print_json(&summaries);
    }

    print!("{}", render::jurisdiction_table(Jurisdiction::all()));
    Ok(())
}

fn cmd_statutes(json: bool) -> Result<(), CliError> {
    if json {
        let summaries: Vec<StatuteSummary> = Statute::all()
            .iter()
            .map(|&statute| StatuteSummary {
                statute,
                title: statute.title(),
                short_name: statute.short_name(),
                act_code: statute.act_code(),
                citation: statute.citation(),
            })
            .collect();
        return print_json(&summaries);
    }

    print!("{}", render::statute_table(Statute::all()));
    Ok(())
}

fn cmd_check(catalog: &Catalog, json: bool) -> Result<(), CliError> {
    let issues = quality::check(catalog);
    for issue in &issues {
        log::warn!("{issue}");
    }

    if json {
        print_json(&issues)?;
    } else {
        print!("{}", render::issue_report(&issues));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CliError::DataIssues(issues.len()))
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
