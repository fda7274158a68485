//! Offense registry: loads the authored offense tables from embedded TOML.
//!
//! Each `.toml` file in `packages/catalog/offenses/` holds the offenses of
//! one category and is baked into the binary at compile time via
//! [`include_str!`]. The order below is the catalog's authoring order.

use legal_advisor_offense_models::{
    Offense, OffenseCategory, Sentence, Statute, YouthModifier, YouthModifierSpec,
};
use serde::Deserialize;

use crate::CatalogError;

/// TOML tables embedded at compile time.
const OFFENSE_TOMLS: &[(&str, &str)] = &[
    ("homicide", include_str!("../offenses/homicide.toml")),
    (
        "violent_crimes",
        include_str!("../offenses/violent_crimes.toml"),
    ),
    (
        "sexual_offenses",
        include_str!("../offenses/sexual_offenses.toml"),
    ),
    (
        "children_offenses",
        include_str!("../offenses/children_offenses.toml"),
    ),
    (
        "property_offenses",
        include_str!("../offenses/property_offenses.toml"),
    ),
    ("drug_offenses", include_str!("../offenses/drug_offenses.toml")),
    (
        "financial_crimes",
        include_str!("../offenses/financial_crimes.toml"),
    ),
    ("cyber_crimes", include_str!("../offenses/cyber_crimes.toml")),
    (
        "weapons_firearms",
        include_str!("../offenses/weapons_firearms.toml"),
    ),
    ("admin_justice", include_str!("../offenses/admin_justice.toml")),
    ("public_order", include_str!("../offenses/public_order.toml")),
    ("terrorism", include_str!("../offenses/terrorism.toml")),
    (
        "traffic_offenses",
        include_str!("../offenses/traffic_offenses.toml"),
    ),
    (
        "moral_offenses",
        include_str!("../offenses/moral_offenses.toml"),
    ),
    (
        "environmental_offenses",
        include_str!("../offenses/environmental_offenses.toml"),
    ),
    (
        "organizations_offenses",
        include_str!("../offenses/organizations_offenses.toml"),
    ),
];

/// Total number of authored offenses (used in tests).
#[cfg(test)]
pub(crate) const EXPECTED_OFFENSE_COUNT: usize = 295;

/// One `.toml` file: a list of `[[offenses]]` tables.
#[derive(Debug, Deserialize)]
struct OffenseFile {
    offenses: Vec<OffenseRecord>,
}

/// An offense as authored. The id is derived, never written by hand, and
/// the statute defaults to the Criminal Code.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffenseRecord {
    pub name: String,
    pub section: String,
    #[serde(default)]
    pub statute: Statute,
    pub category: OffenseCategory,
    pub description: String,
    #[serde(default)]
    pub minimum_sentence: Option<Sentence>,
    pub maximum_sentence: Sentence,
    #[serde(default)]
    pub youth_modifier: Option<YouthModifierSpec>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<OffenseRecord> for Offense {
    fn from(record: OffenseRecord) -> Self {
        Self {
            id: Self::derive_id(
                record.statute,
                record.category,
                &record.section,
                &record.name,
            ),
            name: record.name,
            section: record.section,
            statute: record.statute,
            category: record.category,
            description: record.description,
            minimum_sentence: record.minimum_sentence,
            maximum_sentence: record.maximum_sentence,
            youth_modifier: record.youth_modifier.map(YouthModifier::from),
            notes: record.notes,
        }
    }
}

/// Parses one offense table.
///
/// # Errors
///
/// * If the TOML is malformed or a record does not match the authored
///   offense shape
pub fn parse_offense_toml(toml_str: &str) -> Result<Vec<OffenseRecord>, toml::de::Error> {
    toml::de::from_str::<OffenseFile>(toml_str).map(|file| file.offenses)
}

/// Parses every embedded offense table, in authoring order.
///
/// # Errors
///
/// * If any embedded table fails to parse; the error names the file
pub fn load_offenses() -> Result<Vec<Offense>, CatalogError> {
    let mut offenses = Vec::new();

    for (file, toml) in OFFENSE_TOMLS {
        let records = parse_offense_toml(toml).map_err(|source| CatalogError::Parse {
            file: (*file).to_string(),
            source,
        })?;
        log::debug!("Loaded {} offenses from {file}.toml", records.len());
        offenses.extend(records.into_iter().map(Offense::from));
    }

    Ok(offenses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_offenses() {
        let offenses = load_offenses().unwrap();
        assert_eq!(offenses.len(), EXPECTED_OFFENSE_COUNT);
    }

    #[test]
    fn every_category_is_represented() {
        let offenses = load_offenses().unwrap();
        for category in OffenseCategory::all() {
            assert!(
                offenses.iter().any(|o| o.category == *category),
                "no offenses authored for {category:?}"
            );
        }
    }

    #[test]
    fn all_offenses_have_required_fields() {
        for offense in &load_offenses().unwrap() {
            assert!(!offense.name.trim().is_empty(), "offense name is empty");
            assert!(
                !offense.section.trim().is_empty(),
                "{}: section is empty",
                offense.name
            );
            assert!(
                !offense.description.trim().is_empty(),
                "{}: description is empty",
                offense.name
            );
        }
    }

    #[test]
    fn parses_defaults_and_presets() {
        let records = parse_offense_toml(
            r#"
            [[offenses]]
            name = "Assault"
            section = "266"
            category = "VIOLENT_CRIMES"
            description = "Applying force without consent."
            maximum_sentence = { imprisonment = { value = 5, unit = "years" } }
            youth_modifier = "minor"

            [[offenses]]
            name = "Possession"
            section = "4(1)"
            statute = "CONTROLLED_DRUGS_AND_SUBSTANCES_ACT"
            category = "DRUG_OFFENSES"
            description = "Possessing a scheduled substance."
            minimum_sentence = { fine = { amount = 1000 } }
            maximum_sentence = "life_imprisonment"
            notes = "Hybrid offense."
            "#,
        )
        .unwrap();

        let assault = Offense::from(records[0].clone());
        assert_eq!(assault.statute, Statute::CriminalCode);
        assert_eq!(assault.minimum_sentence, None);
        assert_eq!(assault.maximum_sentence, Sentence::years(5));
        assert_eq!(
            assault.youth_modifier.unwrap().max_youth_sentence,
            Sentence::years(2)
        );
        assert_eq!(assault.notes, None);

        let possession = Offense::from(records[1].clone());
        assert_eq!(possession.statute, Statute::ControlledDrugsAndSubstancesAct);
        assert_eq!(possession.minimum_sentence, Some(Sentence::fine(1000)));
        assert_eq!(possession.maximum_sentence, Sentence::LifeImprisonment);
        assert_eq!(possession.youth_modifier, None);
        assert_eq!(possession.notes.as_deref(), Some("Hybrid offense."));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = parse_offense_toml(
            r#"
            [[offenses]]
            name = "Assault"
            section = "266"
            category = "VIOLENT_CRIMES"
            description = "Applying force without consent."
            maximum_sentence = "life_imprisonment"
            severity = 3
            "#,
        );
        assert!(result.is_err());
    }
}
