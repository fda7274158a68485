//! Canadian jurisdictions and their courts.
//!
//! Jurisdiction is context for display only. Every offense in the catalog
//! is federal, so the selected jurisdiction never changes a sentence.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Federal jurisdiction plus the ten provinces and three territories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Jurisdiction {
    /// Federal courts (FED)
    #[default]
    Federal,
    /// Alberta (AB)
    Alberta,
    /// British Columbia (BC)
    BritishColumbia,
    /// Manitoba (MB)
    Manitoba,
    /// New Brunswick (NB)
    NewBrunswick,
    /// Newfoundland and Labrador (NL)
    NewfoundlandAndLabrador,
    /// Northwest Territories (NT)
    NorthwestTerritories,
    /// Nova Scotia (NS)
    NovaScotia,
    /// Nunavut (NU)
    Nunavut,
    /// Ontario (ON)
    Ontario,
    /// Prince Edward Island (PE)
    PrinceEdwardIsland,
    /// Quebec (QC)
    Quebec,
    /// Saskatchewan (SK)
    Saskatchewan,
    /// Yukon (YT)
    Yukon,
}

impl Jurisdiction {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Federal => "Federal",
            Self::Alberta => "Alberta",
            Self::BritishColumbia => "British Columbia",
            Self::Manitoba => "Manitoba",
            Self::NewBrunswick => "New Brunswick",
            Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Self::NorthwestTerritories => "Northwest Territories",
            Self::NovaScotia => "Nova Scotia",
            Self::Nunavut => "Nunavut",
            Self::Ontario => "Ontario",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::Quebec => "Quebec",
            Self::Saskatchewan => "Saskatchewan",
            Self::Yukon => "Yukon",
        }
    }

    /// Postal abbreviation (`FED` for federal).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Federal => "FED",
            Self::Alberta => "AB",
            Self::BritishColumbia => "BC",
            Self::Manitoba => "MB",
            Self::NewBrunswick => "NB",
            Self::NewfoundlandAndLabrador => "NL",
            Self::NorthwestTerritories => "NT",
            Self::NovaScotia => "NS",
            Self::Nunavut => "NU",
            Self::Ontario => "ON",
            Self::PrinceEdwardIsland => "PE",
            Self::Quebec => "QC",
            Self::Saskatchewan => "SK",
            Self::Yukon => "YT",
        }
    }

    /// Courts of this jurisdiction, highest first.
    #[must_use]
    pub const fn courts(self) -> &'static [&'static str] {
        match self {
            Self::Federal => &[
                "Supreme Court of Canada",
                "Federal Court of Appeal",
                "Federal Court",
            ],
            Self::Alberta => &[
                "Court of Appeal of Alberta",
                "Court of King's Bench of Alberta",
                "Alberta Court of Justice",
            ],
            Self::BritishColumbia => &[
                "Court of Appeal for British Columbia",
                "Supreme Court of British Columbia",
                "Provincial Court of British Columbia",
            ],
            Self::Manitoba => &[
                "Court of Appeal of Manitoba",
                "Court of King's Bench of Manitoba",
                "Provincial Court of Manitoba",
            ],
            Self::NewBrunswick => &[
                "Court of Appeal of New Brunswick",
                "Court of King's Bench of New Brunswick",
                "Provincial Court of New Brunswick",
            ],
            Self::NewfoundlandAndLabrador => &[
                "Court of Appeal of Newfoundland and Labrador",
                "Supreme Court of Newfoundland and Labrador",
                "Provincial Court of Newfoundland and Labrador",
            ],
            Self::NorthwestTerritories => &[
                "Court of Appeal for the Northwest Territories",
                "Supreme Court of the Northwest Territories",
                "Territorial Court of the Northwest Territories",
            ],
            Self::NovaScotia => &[
                "Nova Scotia Court of Appeal",
                "Supreme Court of Nova Scotia",
                "Provincial Court of Nova Scotia",
            ],
            Self::Nunavut => &["Court of Appeal of Nunavut", "Nunavut Court of Justice"],
            Self::Ontario => &[
                "Court of Appeal for Ontario",
                "Superior Court of Justice",
                "Ontario Court of Justice",
            ],
            Self::PrinceEdwardIsland => &[
                "Court of Appeal of Prince Edward Island",
                "Supreme Court of Prince Edward Island",
                "Provincial Court of Prince Edward Island",
            ],
            Self::Quebec => &[
                "Court of Appeal of Quebec",
                "Superior Court of Quebec",
                "Court of Québec",
            ],
            Self::Saskatchewan => &[
                "Court of Appeal for Saskatchewan",
                "Court of King's Bench for Saskatchewan",
                "Provincial Court of Saskatchewan",
            ],
            Self::Yukon => &[
                "Court of Appeal of Yukon",
                "Supreme Court of Yukon",
                "Territorial Court of Yukon",
            ],
        }
    }

    /// Looks up a jurisdiction by abbreviation, display name, or enum name,
    /// ignoring ASCII case (`"on"`, `"Ontario"`, `"PRINCE_EDWARD_ISLAND"`).
    #[must_use]
    pub fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(found) = input.parse::<Self>() {
            return Some(found);
        }
        Self::all().iter().copied().find(|j| {
            j.abbreviation().eq_ignore_ascii_case(input) || j.name().eq_ignore_ascii_case(input)
        })
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Federal,
            Self::Alberta,
            Self::BritishColumbia,
            Self::Manitoba,
            Self::NewBrunswick,
            Self::NewfoundlandAndLabrador,
            Self::NorthwestTerritories,
            Self::NovaScotia,
            Self::Nunavut,
            Self::Ontario,
            Self::PrinceEdwardIsland,
            Self::Quebec,
            Self::Saskatchewan,
            Self::Yukon,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_federal_and_thirteen_provinces_and_territories() {
        assert_eq!(Jurisdiction::all().len(), 14);
        assert_eq!(
            Jurisdiction::all()
                .iter()
                .filter(|j| **j == Jurisdiction::Federal)
                .count(),
            1
        );
    }

    #[test]
    fn abbreviations_are_unique() {
        let mut abbrs: Vec<&str> = Jurisdiction::all()
            .iter()
            .map(|j| j.abbreviation())
            .collect();
        abbrs.sort_unstable();
        abbrs.dedup();
        assert_eq!(abbrs.len(), 14);
    }

    #[test]
    fn every_jurisdiction_has_courts() {
        for j in Jurisdiction::all() {
            assert!(!j.courts().is_empty(), "{j:?} has no courts");
        }
    }

    #[test]
    fn lookup_accepts_abbreviation_name_and_variant() {
        assert_eq!(Jurisdiction::lookup("on"), Some(Jurisdiction::Ontario));
        assert_eq!(
            Jurisdiction::lookup("Prince Edward Island"),
            Some(Jurisdiction::PrinceEdwardIsland)
        );
        assert_eq!(
            Jurisdiction::lookup("british_columbia"),
            Some(Jurisdiction::BritishColumbia)
        );
        assert_eq!(Jurisdiction::lookup("FED"), Some(Jurisdiction::Federal));
        assert_eq!(Jurisdiction::lookup("Atlantis"), None);
    }
}
