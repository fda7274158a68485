//! Plain-text rendering of catalog entries and sentence results.
//!
//! Every function returns a `String` so callers decide where it goes
//! (stdout, a pager, a test assertion).

use std::fmt::Write as _;

use legal_advisor_catalog::{CatalogMetadata, quality::DataIssue};
use legal_advisor_offense_models::{AgeCategory, Jurisdiction, Offense, OffenseCategory, Statute};
use legal_advisor_sentencing::SentenceResult;

/// Width of the horizontal rules under table headers.
const RULE_WIDTH: usize = 78;

/// Shown at the end of every offense detail block.
pub const DISCLAIMER: &str = "This information is for educational purposes only and does not \
                              constitute legal advice. Consult a qualified lawyer for legal \
                              matters.";

/// Table of categories with their offense counts.
#[must_use]
pub fn category_table(counts: &[(OffenseCategory, usize)]) -> String {
    let mut out = String::new();
    writeln!(out, "{:<32} {:>5}  DESCRIPTION", "CATEGORY", "COUNT").unwrap();
    writeln!(out, "{}", "-".repeat(RULE_WIDTH)).unwrap();
    for (category, count) in counts {
        writeln!(
            out,
            "{:<32} {count:>5}  {}",
            category.label(),
            category.description()
        )
        .unwrap();
    }
    out
}

/// One line per offense: id, section, name.
#[must_use]
pub fn offense_list(offenses: &[&Offense]) -> String {
    if offenses.is_empty() {
        return "No offenses found.\n".to_string();
    }

    let mut out = String::new();
    writeln!(out, "{:<36}  {:<14} NAME", "ID", "SECTION").unwrap();
    writeln!(out, "{}", "-".repeat(RULE_WIDTH)).unwrap();
    for offense in offenses {
        writeln!(
            out,
            "{:<36}  {:<14} {}",
            offense.id, offense.section, offense.name
        )
        .unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "{} offense(s)", offenses.len()).unwrap();
    out
}

/// Full detail block for one offense, closing with the data provenance
/// and [`DISCLAIMER`].
#[must_use]
pub fn offense_detail(offense: &Offense, metadata: &CatalogMetadata) -> String {
    let mut out = String::new();
    writeln!(out, "{}", offense.name).unwrap();
    writeln!(out, "{}", "=".repeat(offense.name.chars().count())).unwrap();
    writeln!(
        out,
        "{} of the {} ({})",
        offense.formatted_section(),
        offense.statute.title(),
        offense.statute.citation()
    )
    .unwrap();
    writeln!(out, "Category: {}", offense.category.label()).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", offense.description).unwrap();
    writeln!(out).unwrap();

    match &offense.minimum_sentence {
        Some(min) => {
            writeln!(out, "Minimum: {min}").unwrap();
        }
        None => {
            writeln!(out, "Minimum: none").unwrap();
        }
    }
    writeln!(out, "Maximum: {}", offense.maximum_sentence).unwrap();

    if let Some(modifier) = &offense.youth_modifier {
        writeln!(
            out,
            "Youth ({}-{}): up to {}",
            modifier.min_age, modifier.max_age, modifier.max_youth_sentence
        )
        .unwrap();
        if let Some(notes) = &modifier.notes {
            writeln!(out, "  {notes}").unwrap();
        }
    }

    if let Some(notes) = &offense.notes {
        writeln!(out).unwrap();
        writeln!(out, "Notes: {notes}").unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Source: {}", offense.section_url()).unwrap();
    writeln!(out, "Id:     {}", offense.id).unwrap();
    writeln!(
        out,
        "Data:   v{} (updated {})",
        metadata.data_version, metadata.last_updated
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{DISCLAIMER}").unwrap();
    out
}

/// Resolved sentence range with its advisory notes.
///
/// The age band's general note is shown under the offender line unless the
/// resolver already listed it.
#[must_use]
pub fn sentence_result(result: &SentenceResult<'_>) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} ({})",
        result.offense.name,
        result.offense.formatted_section()
    )
    .unwrap();
    writeln!(
        out,
        "Offender: {} ({}) | Jurisdiction: {} ({})",
        result.age_category.label(),
        age_band(result.age_category),
        result.jurisdiction.name(),
        result.jurisdiction.abbreviation()
    )
    .unwrap();

    let band_note = result.age_category.sentencing_notes();
    if !result.notes.iter().any(|n| n == band_note) {
        writeln!(out, "  {band_note}").unwrap();
    }

    let label = if result.is_youth_regime() {
        "Youth range"
    } else {
        "Range"
    };
    writeln!(out, "{label}: {}", result.formatted_range()).unwrap();
    for note in &result.notes {
        writeln!(out, "  * {note}").unwrap();
    }
    out
}

/// `"12-17"`, or `"18+"` for the open-ended adult band.
fn age_band(category: AgeCategory) -> String {
    let (min, max) = category.age_range();
    if max == u8::MAX {
        format!("{min}+")
    } else {
        format!("{min}-{max}")
    }
}

/// Statutes with their citations and consolidated act codes.
#[must_use]
pub fn statute_table(statutes: &[Statute]) -> String {
    let mut out = String::new();
    writeln!(out, "{:<16} {:<6} TITLE", "SHORT NAME", "CODE").unwrap();
    writeln!(out, "{}", "-".repeat(RULE_WIDTH)).unwrap();
    for statute in statutes {
        writeln!(
            out,
            "{:<16} {:<6} {}",
            statute.short_name(),
            statute.act_code(),
            statute.title()
        )
        .unwrap();
        writeln!(out, "{:<23} {}", "", statute.citation()).unwrap();
    }
    out
}

/// Jurisdictions with their courts.
#[must_use]
pub fn jurisdiction_table(jurisdictions: &[Jurisdiction]) -> String {
    let mut out = String::new();
    for jurisdiction in jurisdictions {
        writeln!(
            out,
            "{:<4} {}",
            jurisdiction.abbreviation(),
            jurisdiction.name()
        )
        .unwrap();
        for court in jurisdiction.courts() {
            writeln!(out, "       {court}").unwrap();
        }
    }
    out
}

/// Data-quality report.
#[must_use]
pub fn issue_report(issues: &[DataIssue]) -> String {
    if issues.is_empty() {
        return "No data-quality issues found.\n".to_string();
    }

    let mut out = String::new();
    for issue in issues {
        writeln!(out, "- {issue}").unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "{} issue(s)", issues.len()).unwrap();
    out
}

/// Data version banner.
#[must_use]
pub fn metadata_banner(metadata: &CatalogMetadata) -> String {
    format!(
        "Data v{} (updated {}). {}.\n",
        metadata.data_version, metadata.last_updated, metadata.source_note
    )
}

#[cfg(test)]
mod tests {
    use legal_advisor_catalog::EMBEDDED_METADATA;
    use legal_advisor_offense_models::{Sentence, YouthModifierPreset};
    use legal_advisor_sentencing::resolve;

    use super::*;

    fn robbery() -> Offense {
        Offense::new(
            "Robbery",
            "344",
            Statute::CriminalCode,
            OffenseCategory::ViolentCrimes,
            "Theft with violence or threats of violence.",
            Sentence::LifeImprisonment,
        )
        .with_youth_modifier(YouthModifierPreset::Standard.modifier())
        .with_notes("4-year min if firearm.")
    }

    #[test]
    fn detail_includes_citation_range_and_url() {
        let text = offense_detail(&robbery(), &EMBEDDED_METADATA);
        assert!(text.contains("Section 344 of the Criminal Code (R.S.C., 1985, c. C-46)"));
        assert!(text.contains("Minimum: none"));
        assert!(text.contains("Maximum: Life imprisonment"));
        assert!(text.contains("Youth (12-17): up to 3 years"));
        assert!(text.contains("Notes: 4-year min if firearm."));
        assert!(text.contains("https://laws-lois.justice.gc.ca/eng/acts/C-46/section-344.html"));
    }

    #[test]
    fn detail_ends_with_provenance_and_disclaimer() {
        let text = offense_detail(&robbery(), &EMBEDDED_METADATA);
        assert!(text.contains("Data:   v2.0.0 (updated 2025-02-12)"));
        assert!(text.ends_with(&format!("{DISCLAIMER}\n")));
        assert!(DISCLAIMER.contains("does not constitute legal advice"));
    }

    #[test]
    fn sentence_result_lists_notes_in_order() {
        let offense = robbery();
        let text = sentence_result(&resolve(&offense, 16, Jurisdiction::Quebec));
        assert!(text.contains("Offender: Youth (12-17) | Jurisdiction: Quebec (QC)"));
        assert!(text.contains("Youth range: Up to 3 years"));
        assert!(text.contains(AgeCategory::Youth.sentencing_notes()));
        let youth = text.find("Youth Criminal Justice Act applies.").unwrap();
        let own = text.find("4-year min if firearm.").unwrap();
        assert!(youth < own);
    }

    #[test]
    fn adult_result_shows_band_note_and_plain_range() {
        let offense = robbery();
        let text = sentence_result(&resolve(&offense, 30, Jurisdiction::Federal));
        assert!(text.contains("Offender: Adult (18+) | Jurisdiction: Federal (FED)"));
        assert!(text.contains(AgeCategory::Adult.sentencing_notes()));
        assert!(text.contains("\nRange: Up to Life imprisonment\n"));
    }

    #[test]
    fn child_band_note_is_not_repeated() {
        let offense = robbery();
        let text = sentence_result(&resolve(&offense, 10, Jurisdiction::Federal));
        assert!(text.contains("Offender: Child (0-11)"));
        assert_eq!(text.matches(AgeCategory::Child.sentencing_notes()).count(), 1);
    }

    #[test]
    fn statute_table_lists_citations() {
        let text = statute_table(Statute::all());
        assert!(text.contains("CDSA"));
        assert!(text.contains("R.S.C., 1985, c. C-46"));
        assert_eq!(text.lines().count(), 2 + 2 * Statute::all().len());
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(offense_list(&[]), "No offenses found.\n");
    }

    #[test]
    fn list_counts_offenses() {
        let offense = robbery();
        let text = offense_list(&[&offense]);
        assert!(text.contains("Robbery"));
        assert!(text.ends_with("1 offense(s)\n"));
    }

    #[test]
    fn banner_mentions_version() {
        assert!(metadata_banner(&EMBEDDED_METADATA).starts_with("Data v2.0.0 (updated 2025-02-12)."));
    }

    #[test]
    fn empty_issue_report() {
        assert_eq!(issue_report(&[]), "No data-quality issues found.\n");
    }
}
