//! Resolves command-line arguments to catalog entries and enum values.

use legal_advisor_catalog::{Catalog, CatalogError};
use legal_advisor_offense_models::{Jurisdiction, Offense, OffenseCategory};
use uuid::Uuid;

/// Errors surfaced to the command-line user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The embedded catalog failed to load.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No category matches the argument.
    #[error("Unknown category \"{0}\" (try the `categories` command)")]
    UnknownCategory(String),

    /// No jurisdiction matches the argument.
    #[error("Unknown jurisdiction \"{0}\" (try the `jurisdictions` command)")]
    UnknownJurisdiction(String),

    /// No offense has this id or name.
    #[error("No offense with id or name \"{0}\"")]
    OffenseNotFound(String),

    /// Several offenses share this name.
    #[error("\"{name}\" matches {} offenses; use one of the ids: {}", .ids.len(), .ids.iter().map(Uuid::to_string).collect::<Vec<_>>().join(", "))]
    AmbiguousOffense {
        /// Name that was looked up.
        name: String,
        /// Ids of every matching offense.
        ids: Vec<Uuid>,
    },

    /// The data-quality check found problems.
    #[error("{0} data-quality issue(s) found")]
    DataIssues(usize),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An interactive prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Parses a category by enum name or display label.
///
/// # Errors
///
/// * If nothing matches `input`
pub fn parse_category(input: &str) -> Result<OffenseCategory, CliError> {
    OffenseCategory::lookup(input).ok_or_else(|| CliError::UnknownCategory(input.to_string()))
}

/// Parses a jurisdiction by abbreviation, name, or enum name.
///
/// # Errors
///
/// * If nothing matches `input`
pub fn parse_jurisdiction(input: &str) -> Result<Jurisdiction, CliError> {
    Jurisdiction::lookup(input).ok_or_else(|| CliError::UnknownJurisdiction(input.to_string()))
}

/// Finds an offense by id, or by exact (case-insensitive) name.
///
/// # Errors
///
/// * If no offense matches
/// * If the name matches more than one offense
pub fn find_offense<'a>(catalog: &'a Catalog, key: &str) -> Result<&'a Offense, CliError> {
    let key = key.trim();

    if let Ok(id) = key.parse::<Uuid>() {
        return catalog
            .get(id)
            .ok_or_else(|| CliError::OffenseNotFound(key.to_string()));
    }

    let matches: Vec<&Offense> = catalog
        .all()
        .iter()
        .filter(|o| o.name.eq_ignore_ascii_case(key))
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::OffenseNotFound(key.to_string())),
        [offense] => Ok(offense),
        many => Err(CliError::AmbiguousOffense {
            name: key.to_string(),
            ids: many.iter().map(|o| o.id).collect(),
        }),
    }
}
