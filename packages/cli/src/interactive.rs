//! Interactive browser for the offense reference.
//!
//! Menu-driven flow built on `dialoguer`: pick a category or search, narrow
//! the list, choose an offense, then resolve its sentence range for an
//! offender age and jurisdiction.

use dialoguer::{Confirm, Input, Select};
use legal_advisor_catalog::Catalog;
use legal_advisor_cli_utils::render;
use legal_advisor_offense_models::{Jurisdiction, Offense, Statute};
use legal_advisor_sentencing::resolve;

use crate::lookup::CliError;

/// Runs the interactive menu loop until the user exits.
///
/// # Errors
///
/// * If a prompt fails (e.g. stdin is not a terminal)
pub fn run(catalog: &Catalog) -> Result<(), CliError> {
    print!("{}", render::metadata_banner(catalog.metadata()));

    loop {
        println!();
        let items = &[
            "Browse by category",
            "Search offenses",
            "Jurisdictions",
            "Statutes",
            "Exit",
        ];

        let selection = Select::new()
            .with_prompt("Offense reference")
            .items(items)
            .default(0)
            .interact()?;

        match selection {
            0 => handle_browse(catalog)?,
            1 => handle_search(catalog)?,
            2 => print!("{}", render::jurisdiction_table(Jurisdiction::all())),
            3 => print!("{}", render::statute_table(Statute::all())),
            4 => {
                println!("Goodbye.");
                return Ok(());
            }
            _ => unreachable!(),
        }
    }
}

fn handle_browse(catalog: &Catalog) -> Result<(), CliError> {
    let counts = catalog.category_counts();
    let mut items: Vec<String> = counts
        .iter()
        .map(|(category, count)| format!("{} ({count})", category.label()))
        .collect();
    items.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(0)
        .interact()?;

    let Some(&(category, _)) = counts.get(selection) else {
        return Ok(());
    };
    println!("{}", category.description());

    let filter: String = Input::new()
        .with_prompt("Filter by name or section (blank for all)")
        .allow_empty(true)
        .interact_text()?;

    let offenses = catalog.search_in_category(category, &filter);
    pick_offense(catalog, category.label(), &offenses)
}

fn handle_search(catalog: &Catalog) -> Result<(), CliError> {
    let query: String = Input::new()
        .with_prompt("Search name, section, or description")
        .allow_empty(true)
        .interact_text()?;

    let offenses = catalog.search(&query);
    pick_offense(catalog, "Results", &offenses)
}

fn pick_offense(catalog: &Catalog, prompt: &str, offenses: &[&Offense]) -> Result<(), CliError> {
    if offenses.is_empty() {
        println!("No offenses found.");
        return Ok(());
    }

    let mut items: Vec<String> = offenses
        .iter()
        .map(|o| format!("{} (s. {})", o.name, o.section))
        .collect();
    items.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(format!("{prompt} ({} offense(s))", offenses.len()))
        .items(&items)
        .default(0)
        .interact()?;

    let Some(offense) = offenses.get(selection) else {
        return Ok(());
    };

    println!();
    print!("{}", render::offense_detail(offense, catalog.metadata()));
    println!();

    if Confirm::new()
        .with_prompt("Resolve sentence for an offender?")
        .default(true)
        .interact()?
    {
        handle_resolve(offense)?;
    }

    Ok(())
}

fn handle_resolve(offense: &Offense) -> Result<(), CliError> {
    let age: u8 = Input::new()
        .with_prompt("Offender age")
        .default(18)
        .interact_text()?;

    let jurisdictions = Jurisdiction::all();
    let items: Vec<String> = jurisdictions
        .iter()
        .map(|j| format!("{} ({})", j.name(), j.abbreviation()))
        .collect();
    let selection = Select::new()
        .with_prompt("Jurisdiction")
        .items(&items)
        .default(0)
        .interact()?;
    let jurisdiction = jurisdictions
        .get(selection)
        .copied()
        .unwrap_or_default();

    println!();
    print!("{}", render::sentence_result(&resolve(offense, age, jurisdiction)));
    Ok(())
}
