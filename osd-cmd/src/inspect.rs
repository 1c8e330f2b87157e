//! Profile inspection: the CLI-side exerciser for the profile loader.

use anyhow::Context;
use osd_ctd::profile::{load_profile, FooterPolicy};

/// Parse one profile file and print a short summary.
pub fn run_inspect(file: &str, keep_footer: bool) -> anyhow::Result<()> {
    let policy = if keep_footer {
        FooterPolicy::Keep
    } else {
        FooterPolicy::Trim
    };
    let profile =
        load_profile(file, policy).with_context(|| format!("failed to parse {}", file))?;

    println!("{}: {} samples", file, profile.samples.len());
    if let (Some(first), Some(last)) = (profile.samples.first(), profile.samples.last()) {
        println!(
            "  pressure: {:.1} to {:.1} DBars",
            first.pressure, last.pressure
        );
        println!("  surface temperature: {:.4} deg C", first.temperature);
        println!("  surface salinity: {:.4} PSS-78", first.salinity);
        println!("  surface oxygen: {:.1} umol/kg", first.oxygen);
    }
    if !profile.is_pressure_ordered() {
        println!("  warning: samples are not ordered by increasing pressure");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use osd_ctd::profile::HEADER_LINES;

    #[test]
    fn test_inspect_summarizes_valid_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("33RR20180918_00001_00002_ct1.csv");

        let mut text = String::new();
        for i in 1..=HEADER_LINES {
            text.push_str(&format!("# header line {}\n", i));
        }
        text.push_str("2.0,2,10.8551,2,32.9103,2,310.1,2,89.4,2,0.064,2,308.8,2\n");
        text.push_str("END_DATA\n");
        std::fs::write(&path, text).unwrap();

        run_inspect(path.to_str().unwrap(), false).unwrap();
    }

    #[test]
    fn test_inspect_propagates_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.csv");
        std::fs::write(&path, "too\nshort\n").unwrap();
        assert!(run_inspect(path.to_str().unwrap(), false).is_err());
    }
}
