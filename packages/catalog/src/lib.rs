#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The offense catalog and its read-only lookup queries.
//!
//! A [`Catalog`] is built once by the caller (usually from the embedded
//! TOML tables via [`Catalog::load`]) and then handed out by reference.
//! Nothing mutates it after construction, so it can be shared across
//! threads without locking. Every lookup is total: an unrepresented
//! category or a query that matches nothing yields an empty result.

pub mod quality;
pub mod registry;

use legal_advisor_offense_models::{Offense, OffenseCategory};
use serde::Serialize;
use uuid::Uuid;

/// Errors that can occur while building the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An embedded offense table could not be parsed.
    #[error("Failed to parse {file}.toml: {source}")]
    Parse {
        /// File stem of the offending table.
        file: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Provenance of the authored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    /// Version of the authored data set.
    pub data_version: &'static str,
    /// Date the data was last reviewed (ISO 8601).
    pub last_updated: &'static str,
    /// Statutes the data is drawn from.
    pub source_note: &'static str,
}

/// Metadata for the embedded data set.
pub const EMBEDDED_METADATA: CatalogMetadata = CatalogMetadata {
    data_version: "2.0.0",
    last_updated: "2025-02-12",
    source_note: "Based on Criminal Code (R.S.C., 1985, c. C-46), CDSA, and related federal \
                  statutes",
};

/// Immutable, ordered collection of offenses.
#[derive(Debug, Clone)]
pub struct Catalog {
    offenses: Vec<Offense>,
    metadata: CatalogMetadata,
}

impl Catalog {
    /// Builds the catalog from the embedded offense tables.
    ///
    /// # Errors
    ///
    /// * If an embedded table is malformed
    pub fn load() -> Result<Self, CatalogError> {
        let offenses = registry::load_offenses()?;
        log::debug!("Catalog loaded with {} offenses", offenses.len());
        Ok(Self {
            offenses,
            metadata: EMBEDDED_METADATA,
        })
    }

    /// Builds the catalog from the embedded offense tables.
    ///
    /// # Panics
    ///
    /// Panics if any embedded table is malformed (the tables are compiled
    /// in, so this is caught by the registry tests).
    #[must_use]
    pub fn embedded() -> Self {
        Self::load().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Builds a catalog over caller-supplied offenses, keeping their order.
    #[must_use]
    pub const fn from_offenses(offenses: Vec<Offense>) -> Self {
        Self {
            offenses,
            metadata: EMBEDDED_METADATA,
        }
    }

    /// Every offense, in authoring order.
    #[must_use]
    pub fn all(&self) -> &[Offense] {
        &self.offenses
    }

    /// Offenses in `category`, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: OffenseCategory) -> Vec<&Offense> {
        self.offenses
            .iter()
            .filter(|o| o.category == category)
            .collect()
    }

    /// Offenses whose name, section, or description contains `query`,
    /// ignoring case. An empty query returns the whole catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Offense> {
        if query.is_empty() {
            return self.offenses.iter().collect();
        }
        let needle = query.to_lowercase();
        self.offenses
            .iter()
            .filter(|o| {
                contains_folded(&o.name, &needle)
                    || contains_folded(&o.section, &needle)
                    || contains_folded(&o.description, &needle)
            })
            .collect()
    }

    /// Offenses in `category` whose name or section contains `query`,
    /// ignoring case. An empty query returns the whole category.
    #[must_use]
    pub fn search_in_category(&self, category: OffenseCategory, query: &str) -> Vec<&Offense> {
        if query.is_empty() {
            return self.by_category(category);
        }
        let needle = query.to_lowercase();
        self.offenses
            .iter()
            .filter(|o| o.category == category)
            .filter(|o| contains_folded(&o.name, &needle) || contains_folded(&o.section, &needle))
            .collect()
    }

    /// Looks up an offense by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Offense> {
        self.offenses.iter().find(|o| o.id == id)
    }

    /// Offense count for every category in display order, zero counts
    /// included.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(OffenseCategory, usize)> {
        OffenseCategory::all()
            .iter()
            .map(|&category| {
                let count = self
                    .offenses
                    .iter()
                    .filter(|o| o.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// Provenance of the data set.
    #[must_use]
    pub const fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Number of offenses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.offenses.len()
    }

    /// Whether the catalog holds no offenses.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offenses.is_empty()
    }
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use legal_advisor_offense_models::{Sentence, Statute};

    use super::*;

    fn offense(name: &str, section: &str, category: OffenseCategory) -> Offense {
        Offense::new(
            name,
            section,
            Statute::CriminalCode,
            category,
            format!("{name} description"),
            Sentence::years(5),
        )
    }

    fn mixed_catalog() -> Catalog {
        Catalog::from_offenses(vec![
            offense("Possession", "4(1)", OffenseCategory::DrugOffenses),
            offense("Theft Under $5,000", "334(b)", OffenseCategory::PropertyOffenses),
            offense("Trafficking", "5(1)", OffenseCategory::DrugOffenses),
            offense("Assault", "266", OffenseCategory::ViolentCrimes),
            offense("Production", "7(1)", OffenseCategory::DrugOffenses),
        ])
    }

    fn names(offenses: &[&Offense]) -> Vec<String> {
        offenses.iter().map(|o| o.name.clone()).collect()
    }

    #[test]
    fn by_category_keeps_catalog_order() {
        let catalog = mixed_catalog();
        assert_eq!(
            names(&catalog.by_category(OffenseCategory::DrugOffenses)),
            ["Possession", "Trafficking", "Production"]
        );
    }

    #[test]
    fn by_category_of_unrepresented_category_is_empty() {
        let catalog = mixed_catalog();
        assert!(catalog.by_category(OffenseCategory::Terrorism).is_empty());
    }

    #[test]
    fn every_offense_is_in_its_own_category() {
        let catalog = Catalog::embedded();
        for offense in catalog.all() {
            assert!(
                catalog
                    .by_category(offense.category)
                    .iter()
                    .any(|o| o.id == offense.id),
                "{} missing from {:?}",
                offense.name,
                offense.category
            );
        }
    }

    #[test]
    fn empty_search_is_identity() {
        let catalog = Catalog::embedded();
        let results = catalog.search("");
        assert_eq!(results.len(), catalog.len());
        for (found, expected) in results.iter().zip(catalog.all()) {
            assert_eq!(found.id, expected.id);
        }
    }

    #[test]
    fn search_matches_name_section_or_description_case_insensitively() {
        let catalog = Catalog::embedded();
        for query in ["MURDER", "assault", "320.1", "firearm", "Cannabis", "zzzz"] {
            let needle = query.to_lowercase();
            let results = catalog.search(query);
            for offense in &results {
                assert!(
                    offense.name.to_lowercase().contains(&needle)
                        || offense.section.to_lowercase().contains(&needle)
                        || offense.description.to_lowercase().contains(&needle),
                    "{} does not match {query}",
                    offense.name
                );
            }
            let expected = catalog
                .all()
                .iter()
                .filter(|o| {
                    o.name.to_lowercase().contains(&needle)
                        || o.section.to_lowercase().contains(&needle)
                        || o.description.to_lowercase().contains(&needle)
                })
                .count();
            assert_eq!(results.len(), expected, "query {query}");
        }
    }

    #[test]
    fn search_finds_by_section() {
        let catalog = mixed_catalog();
        assert_eq!(names(&catalog.search("334")), ["Theft Under $5,000"]);
        assert!(catalog.search("no such offense").is_empty());
    }

    #[test]
    fn search_in_category_ignores_description_and_other_categories() {
        let catalog = mixed_catalog();
        assert_eq!(
            names(&catalog.search_in_category(OffenseCategory::DrugOffenses, "TRAFF")),
            ["Trafficking"]
        );
        assert!(
            catalog
                .search_in_category(OffenseCategory::DrugOffenses, "description")
                .is_empty()
        );
        assert_eq!(
            catalog
                .search_in_category(OffenseCategory::DrugOffenses, "")
                .len(),
            3
        );
    }

    #[test]
    fn get_by_id() {
        let catalog = mixed_catalog();
        let assault = &catalog.all()[3];
        assert_eq!(catalog.get(assault.id).map(|o| o.name.as_str()), Some("Assault"));
        assert!(catalog.get(Uuid::nil()).is_none());
    }

    #[test]
    fn category_counts_cover_every_category() {
        let catalog = mixed_catalog();
        let counts = catalog.category_counts();
        assert_eq!(counts.len(), OffenseCategory::all().len());
        assert!(counts.contains(&(OffenseCategory::DrugOffenses, 3)));
        assert!(counts.contains(&(OffenseCategory::Homicide, 0)));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), catalog.len());
    }

    #[test]
    fn embedded_ids_are_unique() {
        let catalog = Catalog::embedded();
        let mut ids: Vec<Uuid> = catalog.all().iter().map(|o| o.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn embedded_metadata() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.metadata().data_version, "2.0.0");
        assert_eq!(catalog.len(), registry::EXPECTED_OFFENSE_COUNT);
        assert!(!catalog.is_empty());
    }
}
