#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Offense taxonomy and sentencing types for the Canadian offense reference.
//!
//! Defines the [`Offense`] record and everything hanging off it: the
//! closed [`OffenseCategory`] enumeration, governing [`Statute`], the
//! [`Sentence`] sum type, [`YouthModifier`], display-only
//! [`Jurisdiction`], and the [`AgeCategory`] bands used when resolving a
//! sentence.

pub mod jurisdiction;
pub mod sentence;
pub mod statute;
pub mod youth;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use uuid::Uuid;

pub use jurisdiction::Jurisdiction;
pub use sentence::{Sentence, SentenceTerm, SentenceUnit};
pub use statute::Statute;
pub use youth::{
    YOUTH_MAX_AGE, YOUTH_MIN_AGE, YouthModifier, YouthModifierPreset, YouthModifierSpec,
};

/// Top-level offense groupings used for browsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum OffenseCategory {
    /// Assault, robbery, threats, harassment
    ViolentCrimes,
    /// Murder, manslaughter, infanticide
    Homicide,
    /// Sexual assault, exploitation
    SexualOffenses,
    /// Theft, break and enter, mischief
    PropertyOffenses,
    /// Possession, trafficking, production of controlled substances
    DrugOffenses,
    /// Fraud, money laundering, forgery, tax evasion
    FinancialCrimes,
    /// Computer offenses, identity theft
    CyberCrimes,
    /// Firearm and prohibited weapon offenses
    WeaponsFirearms,
    /// Obstruction, perjury, breach, escape
    AdminJustice,
    /// Riots, unlawful assembly, hate propaganda
    PublicOrder,
    /// Terrorist activity and national security
    Terrorism,
    /// Impaired and dangerous operation, flight from police
    TrafficOffenses,
    /// Abuse, abandonment, luring of children
    ChildrenOffenses,
    /// Obscenity, commodification of sexual services, indecent acts
    MoralOffenses,
    /// Pollution and wildlife offenses
    EnvironmentalOffenses,
    /// Criminal organizations, conspiracy, parties to offenses
    OrganizationsOffenses,
}

impl OffenseCategory {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViolentCrimes => "Violent Crimes",
            Self::Homicide => "Homicide",
            Self::SexualOffenses => "Sexual Offenses",
            Self::PropertyOffenses => "Property Offenses",
            Self::DrugOffenses => "Drug Offenses",
            Self::FinancialCrimes => "Financial Crimes",
            Self::CyberCrimes => "Cyber Crimes",
            Self::WeaponsFirearms => "Weapons & Firearms",
            Self::AdminJustice => "Administration of Justice",
            Self::PublicOrder => "Public Order",
            Self::Terrorism => "Terrorism & National Security",
            Self::TrafficOffenses => "Traffic Offenses",
            Self::ChildrenOffenses => "Offenses Against Children",
            Self::MoralOffenses => "Moral & Decency Offenses",
            Self::EnvironmentalOffenses => "Environmental Offenses",
            Self::OrganizationsOffenses => "Criminal Organizations",
        }
    }

    /// One-line summary of what the category covers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ViolentCrimes => {
                "Assault, robbery, threats, harassment, and other violent offenses"
            }
            Self::Homicide => "Murder, manslaughter, infanticide, and causing death",
            Self::SexualOffenses => "Sexual assault, exploitation, and related offenses",
            Self::PropertyOffenses => "Theft, break and enter, mischief, and property damage",
            Self::DrugOffenses => "Possession, trafficking, production of controlled substances",
            Self::FinancialCrimes => "Fraud, embezzlement, money laundering, forgery, tax evasion",
            Self::CyberCrimes => "Computer offenses, hacking, identity theft, online fraud",
            Self::WeaponsFirearms => "Firearm offenses, prohibited weapons, trafficking",
            Self::AdminJustice => "Obstruction, perjury, breach of conditions, escape",
            Self::PublicOrder => "Riots, unlawful assembly, hate crimes, disturbing peace",
            Self::Terrorism => "Terrorist activities, financing, participation in groups",
            Self::TrafficOffenses => "Impaired driving, dangerous operation, flight from police",
            Self::ChildrenOffenses => "Child abuse, abandonment, exploitation, luring",
            Self::MoralOffenses => "Obscenity, prostitution-related, indecent acts",
            Self::EnvironmentalOffenses => {
                "Pollution, wildlife crimes, environmental destruction"
            }
            Self::OrganizationsOffenses => {
                "Gang participation, organized crime, criminal conspiracy"
            }
        }
    }

    /// Looks up a category by enum name or display label, ignoring case.
    #[must_use]
    pub fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(found) = input.parse::<Self>() {
            return Some(found);
        }
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(input))
    }

    /// Returns all variants of this enum, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ViolentCrimes,
            Self::Homicide,
            Self::SexualOffenses,
            Self::PropertyOffenses,
            Self::DrugOffenses,
            Self::FinancialCrimes,
            Self::CyberCrimes,
            Self::WeaponsFirearms,
            Self::AdminJustice,
            Self::PublicOrder,
            Self::Terrorism,
            Self::TrafficOffenses,
            Self::ChildrenOffenses,
            Self::MoralOffenses,
            Self::EnvironmentalOffenses,
            Self::OrganizationsOffenses,
        ]
    }
}

/// One codified offense with its citation and sentencing bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offense {
    /// Stable identifier derived from statute, category, section and name.
    pub id: Uuid,
    /// Human-readable offense name.
    pub name: String,
    /// Section locator within the statute (e.g. `"235(1)"`).
    pub section: String,
    /// Statute creating the offense.
    pub statute: Statute,
    /// Browsing category.
    pub category: OffenseCategory,
    /// Plain-language description of the prohibited conduct.
    pub description: String,
    /// Mandatory minimum, if any.
    pub minimum_sentence: Option<Sentence>,
    /// Maximum sentence on indictment (or the only available maximum).
    pub maximum_sentence: Sentence,
    /// Youth-regime override of the maximum.
    pub youth_modifier: Option<YouthModifier>,
    /// Free-text notes (summary conviction ranges, firearm minimums, ...).
    pub notes: Option<String>,
}

impl Offense {
    /// Creates an offense with no minimum, youth modifier, or notes.
    ///
    /// The id is derived via [`Offense::derive_id`].
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        section: impl Into<String>,
        statute: Statute,
        category: OffenseCategory,
        description: impl Into<String>,
        maximum_sentence: Sentence,
    ) -> Self {
        let name = name.into();
        let section = section.into();
        Self {
            id: Self::derive_id(statute, category, &section, &name),
            name,
            section,
            statute,
            category,
            description: description.into(),
            minimum_sentence: None,
            maximum_sentence,
            youth_modifier: None,
            notes: None,
        }
    }

    /// Sets the mandatory minimum.
    #[must_use]
    pub const fn with_minimum(mut self, minimum: Sentence) -> Self {
        self.minimum_sentence = Some(minimum);
        self
    }

    /// Sets the youth modifier.
    #[must_use]
    pub fn with_youth_modifier(mut self, modifier: YouthModifier) -> Self {
        self.youth_modifier = Some(modifier);
        self
    }

    /// Sets the free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Derives the stable id for an offense as a UUID v5 over
    /// `statute|category|section|name`.
    ///
    /// The category is part of the key because the same offense is
    /// sometimes listed under two categories.
    #[must_use]
    pub fn derive_id(
        statute: Statute,
        category: OffenseCategory,
        section: &str,
        name: &str,
    ) -> Uuid {
        let key = format!("{statute}|{category}|{}|{}", section.trim(), name.trim());
        Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes())
    }

    /// `"Section 235(1)"`.
    #[must_use]
    pub fn formatted_section(&self) -> String {
        format!("Section {}", self.section)
    }

    /// Link to this offense's section on the Justice Laws website.
    #[must_use]
    pub fn section_url(&self) -> String {
        self.statute.section_url(&self.section)
    }
}

/// Age band an offender falls into for sentencing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeCategory {
    /// Under 12: below the age of criminal responsibility.
    Child,
    /// 12 to 17 inclusive: Youth Criminal Justice Act.
    Youth,
    /// 18 and over.
    Adult,
}

impl AgeCategory {
    /// Classifies an age into exactly one band.
    #[must_use]
    pub const fn for_age(age: u8) -> Self {
        if age < YOUTH_MIN_AGE {
            Self::Child
        } else if age <= YOUTH_MAX_AGE {
            Self::Youth
        } else {
            Self::Adult
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Child => "Child",
            Self::Youth => "Youth",
            Self::Adult => "Adult",
        }
    }

    /// Inclusive `(min, max)` ages covered by the band.
    #[must_use]
    pub const fn age_range(self) -> (u8, u8) {
        match self {
            Self::Child => (0, YOUTH_MIN_AGE - 1),
            Self::Youth => (YOUTH_MIN_AGE, YOUTH_MAX_AGE),
            Self::Adult => (YOUTH_MAX_AGE + 1, u8::MAX),
        }
    }

    /// General sentencing context for the band.
    #[must_use]
    pub const fn sentencing_notes(self) -> &'static str {
        match self {
            Self::Child => {
                "No person under 12 can be convicted of an offense (Criminal Code s. 13)."
            }
            Self::Youth => {
                "Subject to Youth Criminal Justice Act. Maximum sentences are significantly \
                 reduced."
            }
            Self::Adult => "Full adult sentences apply under the Criminal Code.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assault() -> Offense {
        Offense::new(
            "Assault",
            "266",
            Statute::CriminalCode,
            OffenseCategory::ViolentCrimes,
            "Intentionally applying force without consent.",
            Sentence::years(5),
        )
    }

    #[test]
    fn ids_are_stable_and_distinct() {
        let a = assault();
        let b = assault();
        assert_eq!(a.id, b.id);

        let other = Offense::new(
            "Assault with a Weapon",
            "267(a)",
            Statute::CriminalCode,
            OffenseCategory::ViolentCrimes,
            "",
            Sentence::years(10),
        );
        assert_ne!(a.id, other.id);
    }

    #[test]
    fn same_section_in_another_statute_gets_another_id() {
        let drugs = OffenseCategory::DrugOffenses;
        let a = Offense::derive_id(Statute::CriminalCode, drugs, "5(1)", "Trafficking");
        let b = Offense::derive_id(
            Statute::ControlledDrugsAndSubstancesAct,
            drugs,
            "5(1)",
            "Trafficking",
        );
        assert_ne!(a, b);
    }

    #[test]
    fn same_offense_in_two_categories_gets_two_ids() {
        let a = Offense::derive_id(
            Statute::CriminalCode,
            OffenseCategory::ViolentCrimes,
            "87",
            "Pointing a Firearm",
        );
        let b = Offense::derive_id(
            Statute::CriminalCode,
            OffenseCategory::WeaponsFirearms,
            "87",
            "Pointing a Firearm",
        );
        assert_ne!(a, b);
    }

    #[test]
    fn formats_section_and_url() {
        let offense = assault();
        assert_eq!(offense.formatted_section(), "Section 266");
        assert_eq!(
            offense.section_url(),
            "https://laws-lois.justice.gc.ca/eng/acts/C-46/section-266.html"
        );
    }

    #[test]
    fn age_bands_at_boundaries() {
        assert_eq!(AgeCategory::for_age(11), AgeCategory::Child);
        assert_eq!(AgeCategory::for_age(12), AgeCategory::Youth);
        assert_eq!(AgeCategory::for_age(17), AgeCategory::Youth);
        assert_eq!(AgeCategory::for_age(18), AgeCategory::Adult);
        assert_eq!(AgeCategory::for_age(0), AgeCategory::Child);
        assert_eq!(AgeCategory::for_age(u8::MAX), AgeCategory::Adult);
    }

    #[test]
    fn age_ranges_cover_every_age_once() {
        for age in 0..=u8::MAX {
            let band = AgeCategory::for_age(age);
            let (min, max) = band.age_range();
            assert!((min..=max).contains(&age), "{age} outside {band:?}");
        }
    }

    #[test]
    fn category_lookup_by_label_or_name() {
        assert_eq!(
            OffenseCategory::lookup("drug_offenses"),
            Some(OffenseCategory::DrugOffenses)
        );
        assert_eq!(
            OffenseCategory::lookup("Weapons & Firearms"),
            Some(OffenseCategory::WeaponsFirearms)
        );
        assert_eq!(OffenseCategory::lookup("jaywalking"), None);
        assert_eq!(OffenseCategory::all().len(), 16);
    }
}
