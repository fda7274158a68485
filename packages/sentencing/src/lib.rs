#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Resolves the sentence range that applies to an offender.
//!
//! [`resolve`] is a pure function of the offense, the offender's age and
//! the jurisdiction. Age picks the band: offenders aged 12 to 17 are
//! sentenced under the Youth Criminal Justice Act when the offense carries
//! a youth modifier. Jurisdiction is carried through for display and never
//! changes the range.

use legal_advisor_offense_models::{AgeCategory, Jurisdiction, Offense, Sentence};
use serde::Serialize;

/// First note on every youth-regime result.
pub const YOUTH_REGIME_NOTE: &str = "Youth Criminal Justice Act applies.";

/// Sentence range for one offense, offender age and jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceResult<'a> {
    /// The offense that was resolved.
    pub offense: &'a Offense,
    /// Age band the offender falls into.
    pub age_category: AgeCategory,
    /// Jurisdiction shown alongside the result.
    pub jurisdiction: Jurisdiction,
    /// Applicable minimum, if any.
    pub minimum_sentence: Option<Sentence>,
    /// Applicable maximum.
    pub maximum_sentence: Sentence,
    /// Advisory notes, in display order.
    pub notes: Vec<String>,
}

impl SentenceResult<'_> {
    /// `"<min> to <max>"`, or `"Up to <max>"` with no minimum.
    #[must_use]
    pub fn formatted_range(&self) -> String {
        self.minimum_sentence.map_or_else(
            || format!("Up to {}", self.maximum_sentence),
            |min| format!("{min} to {}", self.maximum_sentence),
        )
    }

    /// Whether the youth regime replaced the adult range.
    #[must_use]
    pub fn is_youth_regime(&self) -> bool {
        self.notes.first().is_some_and(|n| n == YOUTH_REGIME_NOTE)
    }
}

/// Resolves the applicable sentence range.
///
/// * Youth (12-17) with a youth modifier: the minimum is dropped, the
///   maximum becomes the modifier's youth maximum, and the notes open with
///   [`YOUTH_REGIME_NOTE`] followed by the modifier's own note.
/// * Child (under 12): the offense's range is passed through unchanged and
///   the notes open with the band's note on the age of criminal
///   responsibility.
/// * Otherwise the offense's range is passed through unchanged.
///
/// The offense's own note, if any, is always last.
#[must_use]
pub fn resolve(offense: &Offense, age: u8, jurisdiction: Jurisdiction) -> SentenceResult<'_> {
    let age_category = AgeCategory::for_age(age);
    let mut notes = Vec::new();

    let (minimum_sentence, maximum_sentence) = match (age_category, &offense.youth_modifier) {
        (AgeCategory::Youth, Some(modifier)) => {
            notes.push(YOUTH_REGIME_NOTE.to_string());
            notes.extend(modifier.notes.clone());
            (None, modifier.max_youth_sentence)
        }
        (AgeCategory::Child, _) => {
            notes.push(AgeCategory::Child.sentencing_notes().to_string());
            (offense.minimum_sentence, offense.maximum_sentence)
        }
        (AgeCategory::Youth | AgeCategory::Adult, _) => {
            (offense.minimum_sentence, offense.maximum_sentence)
        }
    };

    notes.extend(offense.notes.clone());

    log::debug!(
        "Resolved \"{}\" for age {age} ({age_category}) in {}: min={minimum_sentence:?} max={maximum_sentence:?}",
        offense.name,
        jurisdiction.abbreviation(),
    );

    SentenceResult {
        offense,
        age_category,
        jurisdiction,
        minimum_sentence,
        maximum_sentence,
        notes,
    }
}
