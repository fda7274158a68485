//! Youth Criminal Justice Act sentencing modifiers.

use serde::{Deserialize, Serialize};

use crate::Sentence;

/// Youngest age at which a person can be found guilty of an offense.
pub const YOUTH_MIN_AGE: u8 = 12;
/// Oldest age still sentenced under the youth regime.
pub const YOUTH_MAX_AGE: u8 = 17;

/// Alternate maximum sentence for offenders aged 12 to 17.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouthModifier {
    /// Maximum youth sentence replacing the adult maximum.
    pub max_youth_sentence: Sentence,
    /// Youngest age the modifier applies to.
    #[serde(default = "default_min_age")]
    pub min_age: u8,
    /// Oldest age the modifier applies to.
    #[serde(default = "default_max_age")]
    pub max_age: u8,
    /// Explains deviations from the plain maximum.
    #[serde(default)]
    pub notes: Option<String>,
}

const fn default_min_age() -> u8 {
    YOUTH_MIN_AGE
}

const fn default_max_age() -> u8 {
    YOUTH_MAX_AGE
}

impl YouthModifier {
    /// A modifier with the standard 12-17 band and no note.
    #[must_use]
    pub const fn new(max_youth_sentence: Sentence) -> Self {
        Self {
            max_youth_sentence,
            min_age: YOUTH_MIN_AGE,
            max_age: YOUTH_MAX_AGE,
            notes: None,
        }
    }

    /// Attaches an explanatory note.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Named youth modifiers shared by most catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YouthModifierPreset {
    /// Lower-end offenses: up to 2 years.
    Minor,
    /// General youth ceiling under s. 42(2)(n) YCJA.
    Standard,
    /// First and second degree murder under s. 42(2)(q) YCJA.
    Murder,
}

impl YouthModifierPreset {
    /// Expands the preset into a concrete [`YouthModifier`].
    #[must_use]
    pub fn modifier(self) -> YouthModifier {
        match self {
            Self::Minor => YouthModifier::new(Sentence::years(2)),
            Self::Standard => YouthModifier::new(Sentence::years(3)).with_notes(
                "Youth custody and supervision is capped at 2 years, or 3 years where the \
                 adult maximum is life imprisonment (YCJA s. 42(2)(n)).",
            ),
            Self::Murder => YouthModifier::new(Sentence::years(10)).with_notes(
                "First degree: up to 10 years, no more than 6 in custody followed by \
                 conditional supervision. Second degree: up to 7 years, no more than 4 in \
                 custody. An adult sentence may be sought for youths 14 and older.",
            ),
        }
    }
}

/// How authored data refers to a youth modifier: by preset name or as an
/// inline table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YouthModifierSpec {
    /// One of the named presets (`youth_modifier = "standard"`).
    Preset(YouthModifierPreset),
    /// A fully spelled-out modifier.
    Custom(YouthModifier),
}

impl From<YouthModifierSpec> for YouthModifier {
    fn from(spec: YouthModifierSpec) -> Self {
        match spec {
            YouthModifierSpec::Preset(preset) => preset.modifier(),
            YouthModifierSpec::Custom(modifier) => modifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_preset_is_two_years_without_note() {
        let m = YouthModifierPreset::Minor.modifier();
        assert_eq!(m.max_youth_sentence, Sentence::years(2));
        assert_eq!(m.notes, None);
        assert_eq!((m.min_age, m.max_age), (12, 17));
    }

    #[test]
    fn murder_preset_carries_custody_split_note() {
        let m = YouthModifierPreset::Murder.modifier();
        assert_eq!(m.max_youth_sentence, Sentence::years(10));
        assert!(m.notes.unwrap().contains("custody"));
    }

    #[test]
    fn spec_accepts_preset_name_or_inline_table() {
        let preset: YouthModifierSpec = serde_json::from_str(r#""standard""#).unwrap();
        assert_eq!(
            YouthModifier::from(preset),
            YouthModifierPreset::Standard.modifier()
        );

        let custom: YouthModifierSpec = serde_json::from_str(
            r#"{"maxYouthSentence":{"imprisonment":{"value":18,"unit":"months"}}}"#,
        )
        .unwrap();
        let custom = YouthModifier::from(custom);
        assert_eq!(custom.max_youth_sentence, Sentence::months(18));
        assert_eq!(custom.min_age, 12);
        assert_eq!(custom.max_age, 17);
        assert_eq!(custom.notes, None);
    }
}
