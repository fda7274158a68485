//! Sentence values and their display formatting.
//!
//! A [`Sentence`] is either a duration-bearing kind (imprisonment,
//! probation), a fine, or one of the fixed dispositions that carry no
//! quantity (life imprisonment, discharges, suspended sentence, summary
//! conviction maximum).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Unit of a [`SentenceTerm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceUnit {
    /// Calendar days.
    Days,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

impl SentenceUnit {
    /// Singular label, used when the term's value is exactly 1.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Days => "day",
            Self::Months => "month",
            Self::Years => "year",
        }
    }

    /// Plural label.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    /// Approximate length of one unit in days.
    const fn approx_days(self) -> u32 {
        match self {
            Self::Days => 1,
            Self::Months => 30,
            Self::Years => 365,
        }
    }
}

/// A length of time: a value paired with a [`SentenceUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentenceTerm {
    /// Number of units.
    pub value: u32,
    /// Unit the value is expressed in.
    pub unit: SentenceUnit,
}

impl SentenceTerm {
    /// A term of `value` days.
    #[must_use]
    pub const fn days(value: u32) -> Self {
        Self {
            value,
            unit: SentenceUnit::Days,
        }
    }

    /// A term of `value` months.
    #[must_use]
    pub const fn months(value: u32) -> Self {
        Self {
            value,
            unit: SentenceUnit::Months,
        }
    }

    /// A term of `value` years.
    #[must_use]
    pub const fn years(value: u32) -> Self {
        Self {
            value,
            unit: SentenceUnit::Years,
        }
    }

    /// Approximate length of this term in days (30-day months, 365-day
    /// years). Only meant for ordering terms against each other.
    #[must_use]
    pub const fn approx_days(self) -> u64 {
        self.value as u64 * self.unit.approx_days() as u64
    }
}

impl std::fmt::Display for SentenceTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = if self.value == 1 {
            self.unit.singular()
        } else {
            self.unit.plural()
        };
        write!(f, "{} {unit}", self.value)
    }
}

/// A sentence bound attached to an offense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentence {
    /// Custody for a fixed term.
    Imprisonment(SentenceTerm),
    /// Community supervision for a fixed term.
    Probation(SentenceTerm),
    /// Monetary fine, in whole dollars.
    Fine {
        /// Fine amount in dollars.
        amount: u32,
    },
    /// Imprisonment for life.
    LifeImprisonment,
    /// Discharge subject to conditions.
    ConditionalDischarge,
    /// Discharge without conditions.
    AbsoluteDischarge,
    /// Sentence suspended, usually alongside probation.
    Suspended,
    /// The general maximum for summary conviction offences.
    SummaryMaximum,
}

impl Sentence {
    /// Shorthand for [`Sentence::Imprisonment`] measured in years.
    #[must_use]
    pub const fn years(value: u32) -> Self {
        Self::Imprisonment(SentenceTerm::years(value))
    }

    /// Shorthand for [`Sentence::Imprisonment`] measured in months.
    #[must_use]
    pub const fn months(value: u32) -> Self {
        Self::Imprisonment(SentenceTerm::months(value))
    }

    /// Shorthand for [`Sentence::Imprisonment`] measured in days.
    #[must_use]
    pub const fn days(value: u32) -> Self {
        Self::Imprisonment(SentenceTerm::days(value))
    }

    /// Shorthand for [`Sentence::Fine`].
    #[must_use]
    pub const fn fine(amount: u32) -> Self {
        Self::Fine { amount }
    }

    /// Compares two custodial sentences by severity.
    ///
    /// Imprisonment terms compare by approximate length and life
    /// imprisonment outranks any term. Returns `None` when either side is
    /// not custodial (fines, probation, discharges, and so on), since those
    /// have no meaningful ordering against custody.
    #[must_use]
    pub fn custodial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Imprisonment(a), Self::Imprisonment(b)) => {
                Some(a.approx_days().cmp(&b.approx_days()))
            }
            (Self::LifeImprisonment, Self::LifeImprisonment) => Some(Ordering::Equal),
            (Self::LifeImprisonment, Self::Imprisonment(_)) => Some(Ordering::Greater),
            (Self::Imprisonment(_), Self::LifeImprisonment) => Some(Ordering::Less),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Imprisonment(term) => write!(f, "{term}"),
            Self::Probation(term) => write!(f, "{term} probation"),
            Self::Fine { amount } => write!(f, "${} fine", group_thousands(*amount)),
            Self::LifeImprisonment => f.write_str("Life imprisonment"),
            Self::ConditionalDischarge => f.write_str("Conditional discharge"),
            Self::AbsoluteDischarge => f.write_str("Absolute discharge"),
            Self::Suspended => f.write_str("Suspended sentence"),
            Self::SummaryMaximum => f.write_str("Summary conviction maximum"),
        }
    }
}

/// Formats `value` with comma thousands separators (`1000000` -> `1,000,000`).
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
