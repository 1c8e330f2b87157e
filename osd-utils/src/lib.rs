//! Shared utility functions for OSD crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse a date string in "YYYYMMDD" format (the compact form used in
    /// WHP-exchange file names, e.g. "20180918")
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Parse a date in either "YYYY-MM-DD" or compact "YYYYMMDD" form.
    /// Curated index files carry both spellings.
    pub fn parse_date_flexible(s: &str) -> anyhow::Result<NaiveDate> {
        parse_date(s).or_else(|_| parse_date_compact(s))
    }

}

/// Coordinate helpers for chart annotations and index validation.
pub mod coords {
    /// Format a latitude for a chart annotation, e.g. "Lat: 56.0583N".
    pub fn annotate_latitude(lat: f64) -> String {
        format!("Lat: {:.4}N", lat)
    }

    /// Format a longitude for a chart annotation, e.g. "Lon: -156.9622E".
    pub fn annotate_longitude(lon: f64) -> String {
        format!("Lon: {:.4}E", lon)
    }

    /// True when the pair is a plausible WGS84 coordinate.
    pub fn in_bounds(lat: f64, lon: f64) -> bool {
        (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_annotations() {
            assert_eq!(annotate_latitude(56.05826), "Lat: 56.0583N");
            assert_eq!(annotate_longitude(-156.9622), "Lon: -156.9622E");
        }

        #[test]
        fn test_in_bounds() {
            assert!(in_bounds(56.05826, -156.9622));
            assert!(!in_bounds(91.0, 0.0));
            assert!(!in_bounds(0.0, -181.0));
        }
    }
}
