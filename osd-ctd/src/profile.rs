//! WHP-exchange profile parsing.
//!
//! A ct1 profile file is a fixed-format preamble of [`HEADER_LINES`] lines
//! followed by comma-delimited data rows of 14 positional fields
//! (7 measurement/flag pairs, pressure first). Some source variants close
//! with a non-measurement footer row (`END_DATA`); [`FooterPolicy`] says
//! whether the final data row is trimmed. The policy is an explicit input,
//! never inferred from data shape, because silently unifying the two
//! variants changes sample counts.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::ProfileParseError;

/// Fixed preamble length of the ct1 files in this corpus.
/// Documented, not auto-detected.
pub const HEADER_LINES: usize = 39;

/// Number of comma-delimited fields on a data row:
/// CTDPRS, CTDPRS_FLAG_W, CTDTMP, CTDTMP_FLAG_W, CTDSAL, CTDSAL_FLAG_W,
/// CTDOXY, CTDOXY_FLAG_W, CTDXMISS, CTDXMISS_FLAG_W, CTDFLUOR,
/// CTDFLUOR_FLAG_W, CTDRINKO, CTDRINKO_FLAG_W
pub const PROFILE_ROW_LENGTH: usize = 14;

/// WHP-exchange missing-value sentinel, stored when a non-pressure field
/// fails numeric coercion. Chart clip ranges keep it out of view.
pub const MISSING_VALUE: f64 = -999.0;

/// WHP quality flag recorded alongside a missing or unparseable field.
pub const MISSING_FLAG: i32 = 9;

/// Whether the final data row of a source file is a footer to drop.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FooterPolicy {
    /// Drop the last data row (the variant whose files end in `END_DATA`).
    Trim,
    /// Keep every data row.
    Keep,
}

/// One depth sample: seven measurements, each with a WHP quality flag.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileSample {
    /// Pressure in decibars; the depth axis of every chart.
    pub pressure: f64,
    pub pressure_flag: i32,
    /// Temperature in degrees C (ITS-90)
    pub temperature: f64,
    pub temperature_flag: i32,
    /// Salinity on the PSS-78 scale
    pub salinity: f64,
    pub salinity_flag: i32,
    /// Dissolved oxygen in umol/kg
    pub oxygen: f64,
    pub oxygen_flag: i32,
    /// Transmissivity in %
    pub transmissivity: f64,
    pub transmissivity_flag: i32,
    /// Fluorescence (relative units)
    pub fluorescence: f64,
    pub fluorescence_flag: i32,
    /// Dissolved oxygen from the secondary (RINKO) sensor, umol/kg
    pub oxygen_rinko: f64,
    pub oxygen_rinko_flag: i32,
}

/// The parsed measurement series for one station.
///
/// Recomputed from the backing file on every render request and discarded
/// afterwards; there is no profile cache.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub samples: Vec<ProfileSample>,
}

impl Profile {
    /// Invariant check: samples ordered by non-decreasing pressure.
    /// The source guarantees this ordering; the loader does not enforce it.
    pub fn is_pressure_ordered(&self) -> bool {
        self.samples
            .windows(2)
            .all(|pair| pair[0].pressure <= pair[1].pressure)
    }
}

/// Parse profile text: skip exactly [`HEADER_LINES`] preamble lines, map
/// the remaining comma-delimited rows positionally onto the 14 fields,
/// then apply the footer policy.
///
/// Pressure must coerce to a float on every kept row; downstream renderers
/// rely on a numeric depth axis (a categorical axis silently reorders and
/// mislabels depth). Any other field that fails coercion is stored as the
/// WHP missing sentinel with flag 9.
pub fn parse_profile(text: &str, policy: FooterPolicy) -> Result<Profile, ProfileParseError> {
    let total_lines = text.lines().count();
    if total_lines < HEADER_LINES + 1 {
        return Err(ProfileParseError::Truncated {
            lines: total_lines,
            required: HEADER_LINES + 1,
        });
    }

    // Skip the preamble; the line count check above guarantees it is there.
    let mut data_text = text;
    for _ in 0..HEADER_LINES {
        match data_text.split_once('\n') {
            Some((_, tail)) => data_text = tail,
            None => {
                return Err(ProfileParseError::Truncated {
                    lines: total_lines,
                    required: HEADER_LINES + 1,
                })
            }
        }
    }

    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data_text.as_bytes())
        .records()
        .collect::<Result<Vec<_>, _>>()?;

    if policy == FooterPolicy::Trim {
        records.pop();
    }

    let mut samples = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let line_no = HEADER_LINES + i + 1; // 1-based line in the file
        if record.len() != PROFILE_ROW_LENGTH {
            return Err(ProfileParseError::FieldCount {
                line: line_no,
                expected: PROFILE_ROW_LENGTH,
                found: record.len(),
            });
        }

        let raw = |idx: usize| record.get(idx).unwrap_or("").trim();
        let pressure: f64 = raw(0).parse().map_err(|_| ProfileParseError::BadPressure {
            line: line_no,
            value: raw(0).to_string(),
        })?;
        let value = |idx: usize| raw(idx).parse::<f64>().unwrap_or(MISSING_VALUE);
        let flag = |idx: usize| raw(idx).parse::<i32>().unwrap_or(MISSING_FLAG);

        samples.push(ProfileSample {
            pressure,
            pressure_flag: flag(1),
            temperature: value(2),
            temperature_flag: flag(3),
            salinity: value(4),
            salinity_flag: flag(5),
            oxygen: value(6),
            oxygen_flag: flag(7),
            transmissivity: value(8),
            transmissivity_flag: flag(9),
            fluorescence: value(10),
            fluorescence_flag: flag(11),
            oxygen_rinko: value(12),
            oxygen_rinko_flag: flag(13),
        });
    }

    Ok(Profile { samples })
}

/// Read and parse a profile file from disk.
pub fn load_profile(path: &str, policy: FooterPolicy) -> Result<Profile, ProfileParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ProfileParseError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_profile(&text, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileParseError;

    /// Build a synthetic ct1 file: 39 preamble lines plus the given data rows.
    fn synthetic_profile(data_rows: &[&str]) -> String {
        let mut text = String::new();
        text.push_str("CTD,20181022ODF\n");
        for i in 2..=HEADER_LINES {
            text.push_str(&format!("# header line {}\n", i));
        }
        for row in data_rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    const ROW_SHALLOW: &str = "2.0,2,10.8551,2,32.9103,2,310.1,2,89.4,2,0.064,2,308.8,2";
    const ROW_DEEP: &str = "4.0,2,10.8570,2,32.9102,2,309.8,2,89.4,2,0.062,2,308.5,2";
    const ROW_FOOTER: &str = "END_DATA";

    #[test]
    fn test_parse_trims_footer_row() {
        let text = synthetic_profile(&[ROW_SHALLOW, ROW_DEEP, ROW_FOOTER]);
        let profile = parse_profile(&text, FooterPolicy::Trim).unwrap();
        assert_eq!(profile.samples.len(), 2);
        let first = &profile.samples[0];
        assert!((first.pressure - 2.0).abs() < f64::EPSILON);
        assert!((first.temperature - 10.8551).abs() < f64::EPSILON);
        assert!((first.salinity - 32.9103).abs() < f64::EPSILON);
        assert!((first.oxygen - 310.1).abs() < f64::EPSILON);
        assert!((first.transmissivity - 89.4).abs() < f64::EPSILON);
        assert!((first.fluorescence - 0.064).abs() < f64::EPSILON);
        assert!((first.oxygen_rinko - 308.8).abs() < f64::EPSILON);
        assert_eq!(first.pressure_flag, 2);
        assert_eq!(first.oxygen_rinko_flag, 2);
    }

    #[test]
    fn test_parse_keeps_all_rows_without_footer() {
        let text = synthetic_profile(&[ROW_SHALLOW, ROW_DEEP]);
        let profile = parse_profile(&text, FooterPolicy::Keep).unwrap();
        assert_eq!(profile.samples.len(), 2);
    }

    #[test]
    fn test_trim_drops_last_measurement_when_no_footer() {
        // Trim is a policy, not a heuristic: it removes the final row even
        // when that row is a legitimate sample.
        let text = synthetic_profile(&[ROW_SHALLOW, ROW_DEEP]);
        let profile = parse_profile(&text, FooterPolicy::Trim).unwrap();
        assert_eq!(profile.samples.len(), 1);
    }

    #[test]
    fn test_keep_rejects_footer_field_count() {
        let text = synthetic_profile(&[ROW_SHALLOW, ROW_FOOTER]);
        match parse_profile(&text, FooterPolicy::Keep) {
            Err(ProfileParseError::FieldCount { line, found, .. }) => {
                assert_eq!(line, HEADER_LINES + 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected FieldCount error, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_file_rejected() {
        let mut text = String::new();
        for i in 1..=HEADER_LINES {
            text.push_str(&format!("# header line {}\n", i));
        }
        match parse_profile(&text, FooterPolicy::Trim) {
            Err(ProfileParseError::Truncated { lines, required }) => {
                assert_eq!(lines, HEADER_LINES);
                assert_eq!(required, HEADER_LINES + 1);
            }
            other => panic!("expected Truncated error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_pressure_rejected() {
        let bad = "surface,2,10.8551,2,32.9103,2,310.1,2,89.4,2,0.064,2,308.8,2";
        let text = synthetic_profile(&[bad, ROW_FOOTER]);
        match parse_profile(&text, FooterPolicy::Trim) {
            Err(ProfileParseError::BadPressure { line, value }) => {
                assert_eq!(line, HEADER_LINES + 1);
                assert_eq!(value, "surface");
            }
            other => panic!("expected BadPressure error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_measurement_becomes_missing_sentinel() {
        let gappy = "2.0,2,,9,32.9103,2,n/a,9,89.4,2,0.064,2,308.8,2";
        let text = synthetic_profile(&[gappy, ROW_FOOTER]);
        let profile = parse_profile(&text, FooterPolicy::Trim).unwrap();
        let sample = &profile.samples[0];
        assert!((sample.temperature - MISSING_VALUE).abs() < f64::EPSILON);
        assert!((sample.oxygen - MISSING_VALUE).abs() < f64::EPSILON);
        assert_eq!(sample.temperature_flag, 9);
        // pressure still numeric, untouched by the lenient path
        assert!((sample.pressure - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pressure_order_invariant_check() {
        let text = synthetic_profile(&[ROW_SHALLOW, ROW_DEEP, ROW_FOOTER]);
        let ordered = parse_profile(&text, FooterPolicy::Trim).unwrap();
        assert!(ordered.is_pressure_ordered());

        let text = synthetic_profile(&[ROW_DEEP, ROW_SHALLOW, ROW_FOOTER]);
        let unordered = parse_profile(&text, FooterPolicy::Trim).unwrap();
        assert!(!unordered.is_pressure_ordered());
    }

    #[test]
    fn test_failed_parse_leaves_no_residue() {
        // The loader is a pure function: a truncated file fails its own
        // call only, and the next parse starts clean.
        assert!(parse_profile("too\nshort\n", FooterPolicy::Trim).is_err());
        let good = synthetic_profile(&[ROW_SHALLOW, ROW_FOOTER]);
        let profile = parse_profile(&good, FooterPolicy::Trim).unwrap();
        assert_eq!(profile.samples.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match load_profile("data/no-such-profile.csv", FooterPolicy::Trim) {
            Err(ProfileParseError::Io { path, .. }) => {
                assert_eq!(path, "data/no-such-profile.csv")
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
