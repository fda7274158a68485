//! Data-quality checks over authored offense data.
//!
//! The catalog and the resolver take the data as given. This module is
//! the separate pass that reports authoring problems (duplicated
//! citations, minimums above maximums, youth caps above adult caps) so a
//! maintainer can review them. Issues never block catalog construction.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use legal_advisor_offense_models::{
    Offense, OffenseCategory, Sentence, Statute, YOUTH_MAX_AGE, YOUTH_MIN_AGE,
};
use serde::Serialize;
use uuid::Uuid;

use crate::Catalog;

/// A single authoring problem found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataIssue {
    /// Two offenses share an id.
    #[error("duplicate id {id} shared by {count} offenses")]
    DuplicateId {
        /// The repeated id.
        id: Uuid,
        /// How many offenses carry it.
        count: usize,
    },

    /// The same statute section is cited by more than one offense.
    #[error("{} s. {section} cited by: {}", .statute.short_name(), .names.join(", "))]
    DuplicateSection {
        /// Governing statute.
        statute: Statute,
        /// Section cited more than once.
        section: String,
        /// Names of the offenses citing it, in catalog order.
        names: Vec<String>,
    },

    /// The same offense name is listed more than once.
    #[error("\"{name}\" listed under {}", format_categories(.categories))]
    DuplicateName {
        /// Repeated name.
        name: String,
        /// Categories it appears in, in catalog order.
        categories: Vec<OffenseCategory>,
    },

    /// A mandatory minimum exceeds the maximum.
    #[error("\"{name}\": minimum {minimum} exceeds maximum {maximum}")]
    MinimumExceedsMaximum {
        /// Offense name.
        name: String,
        /// Authored minimum.
        minimum: Sentence,
        /// Authored maximum.
        maximum: Sentence,
    },

    /// A youth maximum exceeds the adult maximum.
    #[error("\"{name}\": youth maximum {youth_maximum} exceeds adult maximum {adult_maximum}")]
    YouthMaximumExceedsAdult {
        /// Offense name.
        name: String,
        /// Youth-regime maximum.
        youth_maximum: Sentence,
        /// Adult maximum.
        adult_maximum: Sentence,
    },

    /// A youth modifier covers ages other than 12 to 17.
    #[error("\"{name}\": youth modifier covers ages {min_age}-{max_age}, expected 12-17")]
    YouthAgeBand {
        /// Offense name.
        name: String,
        /// Authored lower bound.
        min_age: u8,
        /// Authored upper bound.
        max_age: u8,
    },
}

fn format_categories(categories: &[OffenseCategory]) -> String {
    categories
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs every check over `catalog`.
///
/// Issues are grouped by kind (ids, sections, names, then per-offense
/// checks in catalog order).
#[must_use]
pub fn check(catalog: &Catalog) -> Vec<DataIssue> {
    let offenses = catalog.all();
    let mut issues = Vec::new();

    issues.extend(duplicate_ids(offenses));
    issues.extend(duplicate_sections(offenses));
    issues.extend(duplicate_names(offenses));
    for offense in offenses {
        issues.extend(check_offense(offense));
    }

    issues
}

fn duplicate_ids(offenses: &[Offense]) -> Vec<DataIssue> {
    let mut counts: BTreeMap<Uuid, usize> = BTreeMap::new();
    for offense in offenses {
        *counts.entry(offense.id).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, count)| DataIssue::DuplicateId { id, count })
        .collect()
}

fn duplicate_sections(offenses: &[Offense]) -> Vec<DataIssue> {
    let mut order: Vec<(Statute, String)> = Vec::new();
    let mut by_section: BTreeMap<(Statute, String), Vec<String>> = BTreeMap::new();

    for offense in offenses {
        let key = (offense.statute, offense.section.trim().to_string());
        let names = by_section.entry(key.clone()).or_default();
        if names.is_empty() {
            order.push(key);
        }
        names.push(offense.name.clone());
    }

    order
        .into_iter()
        .filter_map(|key| {
            let names = by_section.remove(&key)?;
            let (statute, section) = key;
            (names.len() > 1).then_some(DataIssue::DuplicateSection {
                statute,
                section,
                names,
            })
        })
        .collect()
}

fn duplicate_names(offenses: &[Offense]) -> Vec<DataIssue> {
    let mut order: Vec<String> = Vec::new();
    let mut by_name: BTreeMap<String, Vec<OffenseCategory>> = BTreeMap::new();

    for offense in offenses {
        let categories = by_name.entry(offense.name.clone()).or_default();
        if categories.is_empty() {
            order.push(offense.name.clone());
        }
        categories.push(offense.category);
    }

    order
        .into_iter()
        .filter_map(|name| {
            let categories = by_name.remove(&name)?;
            (categories.len() > 1).then_some(DataIssue::DuplicateName { name, categories })
        })
        .collect()
}

fn check_offense(offense: &Offense) -> Vec<DataIssue> {
    let mut issues = Vec::new();

    if let Some(minimum) = offense.minimum_sentence
        && minimum.custodial_cmp(&offense.maximum_sentence) == Some(Ordering::Greater)
    {
        issues.push(DataIssue::MinimumExceedsMaximum {
            name: offense.name.clone(),
            minimum,
            maximum: offense.maximum_sentence,
        });
    }

    if let Some(modifier) = &offense.youth_modifier {
        if modifier
            .max_youth_sentence
            .custodial_cmp(&offense.maximum_sentence)
            == Some(Ordering::Greater)
        {
            issues.push(DataIssue::YouthMaximumExceedsAdult {
                name: offense.name.clone(),
                youth_maximum: modifier.max_youth_sentence,
                adult_maximum: offense.maximum_sentence,
            });
        }

        if modifier.min_age != YOUTH_MIN_AGE || modifier.max_age != YOUTH_MAX_AGE {
            issues.push(DataIssue::YouthAgeBand {
                name: offense.name.clone(),
                min_age: modifier.min_age,
                max_age: modifier.max_age,
            });
        }
    }

    issues
}
