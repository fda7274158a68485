//! Governing federal statutes and their consolidated-act references.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Base URL of the consolidated federal acts on the Justice Laws website.
pub const JUSTICE_LAWS_ACTS_URL: &str = "https://laws-lois.justice.gc.ca/eng/acts";

/// The federal statute an offense is created by.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Statute {
    /// Criminal Code, R.S.C. 1985, c. C-46
    #[default]
    CriminalCode,
    /// Controlled Drugs and Substances Act, S.C. 1996, c. 19
    ControlledDrugsAndSubstancesAct,
    /// Cannabis Act, S.C. 2018, c. 16
    CannabisAct,
    /// Competition Act, R.S.C. 1985, c. C-34
    CompetitionAct,
    /// Copyright Act, R.S.C. 1985, c. C-42
    CopyrightAct,
    /// Canadian Environmental Protection Act, 1999, S.C. 1999, c. 33
    EnvironmentalProtectionAct,
    /// Fisheries Act, R.S.C. 1985, c. F-14
    FisheriesAct,
    /// Income Tax Act, R.S.C. 1985, c. 1 (5th Supp.)
    IncomeTaxAct,
    /// Security of Information Act, R.S.C. 1985, c. O-5
    SecurityOfInformationAct,
    /// Species at Risk Act, S.C. 2002, c. 29
    SpeciesAtRiskAct,
    /// Wild Animal and Plant Protection and Regulation of International and
    /// Interprovincial Trade Act, S.C. 1992, c. 52
    WildAnimalAndPlantProtectionAct,
}

impl Statute {
    /// Full title of the act.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CriminalCode => "Criminal Code",
            Self::ControlledDrugsAndSubstancesAct => "Controlled Drugs and Substances Act",
            Self::CannabisAct => "Cannabis Act",
            Self::CompetitionAct => "Competition Act",
            Self::CopyrightAct => "Copyright Act",
            Self::EnvironmentalProtectionAct => "Canadian Environmental Protection Act, 1999",
            Self::FisheriesAct => "Fisheries Act",
            Self::IncomeTaxAct => "Income Tax Act",
            Self::SecurityOfInformationAct => "Security of Information Act",
            Self::SpeciesAtRiskAct => "Species at Risk Act",
            Self::WildAnimalAndPlantProtectionAct => {
                "Wild Animal and Plant Protection and Regulation of International and \
                 Interprovincial Trade Act"
            }
        }
    }

    /// Short name commonly used in citations and headings.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::CriminalCode => "Criminal Code",
            Self::ControlledDrugsAndSubstancesAct => "CDSA",
            Self::CannabisAct => "Cannabis Act",
            Self::CompetitionAct => "Competition Act",
            Self::CopyrightAct => "Copyright Act",
            Self::EnvironmentalProtectionAct => "CEPA 1999",
            Self::FisheriesAct => "Fisheries Act",
            Self::IncomeTaxAct => "Income Tax Act",
            Self::SecurityOfInformationAct => "SOIA",
            Self::SpeciesAtRiskAct => "SARA",
            Self::WildAnimalAndPlantProtectionAct => "WAPPRIITA",
        }
    }

    /// Chapter code the Justice Laws website files the consolidated act
    /// under (e.g. `C-46`).
    #[must_use]
    pub const fn act_code(self) -> &'static str {
        match self {
            Self::CriminalCode => "C-46",
            Self::ControlledDrugsAndSubstancesAct => "C-38.8",
            Self::CannabisAct => "C-24.5",
            Self::CompetitionAct => "C-34",
            Self::CopyrightAct => "C-42",
            Self::EnvironmentalProtectionAct => "C-15.31",
            Self::FisheriesAct => "F-14",
            Self::IncomeTaxAct => "I-3.3",
            Self::SecurityOfInformationAct => "O-5",
            Self::SpeciesAtRiskAct => "S-15.3",
            Self::WildAnimalAndPlantProtectionAct => "W-8.5",
        }
    }

    /// Statutory citation.
    #[must_use]
    pub const fn citation(self) -> &'static str {
        match self {
            Self::CriminalCode => "R.S.C., 1985, c. C-46",
            Self::ControlledDrugsAndSubstancesAct => "S.C. 1996, c. 19",
            Self::CannabisAct => "S.C. 2018, c. 16",
            Self::CompetitionAct => "R.S.C., 1985, c. C-34",
            Self::CopyrightAct => "R.S.C., 1985, c. C-42",
            Self::EnvironmentalProtectionAct => "S.C. 1999, c. 33",
            Self::FisheriesAct => "R.S.C., 1985, c. F-14",
            Self::IncomeTaxAct => "R.S.C., 1985, c. 1 (5th Supp.)",
            Self::SecurityOfInformationAct => "R.S.C., 1985, c. O-5",
            Self::SpeciesAtRiskAct => "S.C. 2002, c. 29",
            Self::WildAnimalAndPlantProtectionAct => "S.C. 1992, c. 52",
        }
    }

    /// Builds the Justice Laws URL for `section` of this act.
    ///
    /// Subsection and paragraph qualifiers are dropped since the site
    /// publishes one page per section: `"320.14(1)(a)"` links to
    /// `section-320.14.html`.
    #[must_use]
    pub fn section_url(self, section: &str) -> String {
        format!(
            "{JUSTICE_LAWS_ACTS_URL}/{}/section-{}.html",
            self.act_code(),
            section_base(section)
        )
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CriminalCode,
            Self::ControlledDrugsAndSubstancesAct,
            Self::CannabisAct,
            Self::CompetitionAct,
            Self::CopyrightAct,
            Self::EnvironmentalProtectionAct,
            Self::FisheriesAct,
            Self::IncomeTaxAct,
            Self::SecurityOfInformationAct,
            Self::SpeciesAtRiskAct,
            Self::WildAnimalAndPlantProtectionAct,
        ]
    }
}

/// Strips subsection/paragraph qualifiers: `"279(1)"` -> `"279"`.
#[must_use]
pub fn section_base(section: &str) -> &str {
    let trimmed = section.trim();
    trimmed
        .find('(')
        .map_or(trimmed, |idx| trimmed[..idx].trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_base_strips_qualifiers() {
        assert_eq!(section_base("235(1)"), "235");
        assert_eq!(section_base("320.14(1)(a)"), "320.14");
        assert_eq!(section_base("270.01"), "270.01");
        assert_eq!(section_base(" 464(a) "), "464");
    }

    #[test]
    fn builds_criminal_code_urls() {
        assert_eq!(
            Statute::CriminalCode.section_url("235(1)"),
            "https://laws-lois.justice.gc.ca/eng/acts/C-46/section-235.html"
        );
    }

    #[test]
    fn builds_urls_for_other_statutes() {
        assert_eq!(
            Statute::ControlledDrugsAndSubstancesAct.section_url("5(1)"),
            "https://laws-lois.justice.gc.ca/eng/acts/C-38.8/section-5.html"
        );
        assert_eq!(
            Statute::SpeciesAtRiskAct.section_url("32(2)"),
            "https://laws-lois.justice.gc.ca/eng/acts/S-15.3/section-32.html"
        );
    }

    #[test]
    fn default_statute_is_criminal_code() {
        assert_eq!(Statute::default(), Statute::CriminalCode);
    }

    #[test]
    fn parses_screaming_snake_case() {
        let statute: Statute = "CANNABIS_ACT".parse().unwrap();
        assert_eq!(statute, Statute::CannabisAct);
        assert_eq!(Statute::all().len(), 11);
    }
}
