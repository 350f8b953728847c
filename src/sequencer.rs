//! Display-identifier sequencing.
//!
//! Derives the next human-readable `<PREFIX>-<NNN>` identifier for a
//! collection by scanning the numeric suffixes of an existing snapshot.

use crate::record::Record;

/// Zero-pad width used when a collection does not configure its own.
pub const DEFAULT_PAD_WIDTH: usize = 3;

/// Compute the next display identifier for a collection snapshot.
///
/// Each record's `display_id` is split on `-` and its suffix parsed as an
/// unsigned integer; records with a missing, malformed, or non-numeric
/// suffix contribute 0. The result is `max + 1`, left-zero-padded to
/// `width` digits (wider values render at full width, never truncated).
///
/// Pure function of the snapshot. Not safe under concurrent creation: two
/// callers sequencing from the same snapshot before either persists will
/// mint the same identifier. Atomic allocation belongs at the store, not
/// here.
pub fn next_display_id(prefix: &str, existing: &[Record], width: usize) -> String {
    let next = next_suffix(existing);
    format!("{prefix}-{next:0width$}")
}

/// The numeric suffix the next record created from this snapshot receives.
pub fn next_suffix(existing: &[Record]) -> u32 {
    existing
        .iter()
        .map(|record| parse_suffix(record.display_id.as_deref()))
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

fn parse_suffix(display_id: Option<&str>) -> u32 {
    display_id
        .and_then(|id| id.rsplit_once('-'))
        .and_then(|(_, suffix)| suffix.parse::<u32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_display_id(display_id: &str) -> Record {
        let mut record = Record::new();
        record.display_id = Some(display_id.to_string());
        record
    }

    #[test]
    fn test_empty_snapshot_starts_at_one() {
        assert_eq!(next_display_id("CLI", &[], DEFAULT_PAD_WIDTH), "CLI-001");
    }

    #[test]
    fn test_contiguous_sequence_continues() {
        let records: Vec<Record> = (1..=4)
            .map(|n| with_display_id(&format!("JOB-{n:03}")))
            .collect();
        assert_eq!(
            next_display_id("JOB", &records, DEFAULT_PAD_WIDTH),
            "JOB-005"
        );
    }

    #[test]
    fn test_gap_in_sequence_uses_max() {
        let records = vec![with_display_id("CLI-001"), with_display_id("CLI-004")];
        assert_eq!(
            next_display_id("CLI", &records, DEFAULT_PAD_WIDTH),
            "CLI-005"
        );
    }

    #[test]
    fn test_malformed_suffixes_are_ignored() {
        let records = vec![
            with_display_id("CLI-002"),
            with_display_id("CLI"),        // no separator
            with_display_id("CLI-abc"),    // non-numeric suffix
            Record::new(),                 // no display id at all
        ];
        assert_eq!(
            next_display_id("CLI", &records, DEFAULT_PAD_WIDTH),
            "CLI-003"
        );
    }

    #[test]
    fn test_all_malformed_treated_as_zero() {
        let records = vec![with_display_id("CLI"), with_display_id("nope")];
        assert_eq!(next_suffix(&records), 1);
    }

    #[test]
    fn test_values_past_pad_width_render_full_width() {
        let records = vec![with_display_id("JOB-999")];
        assert_eq!(
            next_display_id("JOB", &records, DEFAULT_PAD_WIDTH),
            "JOB-1000"
        );
    }

    #[test]
    fn test_custom_pad_width() {
        assert_eq!(next_display_id("ROLE", &[], 4), "ROLE-0001");
    }

    #[test]
    fn test_prefix_containing_separator_parses_last_segment() {
        let records = vec![with_display_id("CLI-EU-007")];
        assert_eq!(next_suffix(&records), 8);
    }

    #[test]
    fn test_deterministic_for_fixed_snapshot() {
        let records = vec![with_display_id("CLI-002")];
        let a = next_display_id("CLI", &records, DEFAULT_PAD_WIDTH);
        let b = next_display_id("CLI", &records, DEFAULT_PAD_WIDTH);
        assert_eq!(a, b);
    }
}
