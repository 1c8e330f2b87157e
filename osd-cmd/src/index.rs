//! Location index generation from raw ct1 profile files.
//!
//! Scans every `*.csv` under the data directory, pulls the `LATITUDE = ` /
//! `LONGITUDE = ` marker lines out of each preamble, derives the survey
//! date and location/drop numbers from the file name, and writes the
//! `filename,date,locn,drop,lat,long` index.
//!
//! The output is hand-curated afterwards to one sounding per physical
//! location, so the map shows a single dataset per dot.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};
use osd_ctd::station::INDEX_HEADER;
use osd_utils::{coords, dates};

/// Marker lines in the ct1 preamble. Latitude precedes longitude in every
/// file of this corpus.
const LATITUDE_MARKER: &str = "LATITUDE = ";
const LONGITUDE_MARKER: &str = "LONGITUDE = ";

/// Build the location index for all profile files in `data_dir`.
pub fn run_build_index(data_dir: &str, output: &str) -> anyhow::Result<()> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(data_dir)
        .with_context(|| format!("cannot read data directory {}", data_dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    info!("Scanning {} csv files under {}", paths.len(), data_dir);

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("cannot create index file {}", output))?;
    writer.write_record(INDEX_HEADER.split(','))?;

    let mut written = 0u32;
    let mut skipped = 0u32;
    for path in &paths {
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                skipped += 1;
                continue;
            }
        };

        let (date, locn, drop) = match filename_parts(file_name) {
            Some(parts) => parts,
            None => {
                warn!("Skipping {}: unrecognized file name layout", file_name);
                skipped += 1;
                continue;
            }
        };

        let (lat, lon) = match scan_profile_markers(path)? {
            Some(pair) => pair,
            None => {
                warn!("Skipping {}: no latitude/longitude markers", file_name);
                skipped += 1;
                continue;
            }
        };

        if !coords::in_bounds(lat, lon) {
            warn!("Skipping {}: ({}, {}) is out of bounds", file_name, lat, lon);
            skipped += 1;
            continue;
        }

        let filename = path.to_string_lossy().to_string();
        let lat_s = lat.to_string();
        let lon_s = lon.to_string();
        writer.write_record([
            filename.as_str(),
            date.as_str(),
            locn.as_str(),
            drop.as_str(),
            lat_s.as_str(),
            lon_s.as_str(),
        ])?;
        written += 1;
    }
    writer.flush()?;

    info!(
        "Index complete: {} stations written to {}, {} files skipped",
        written, output, skipped
    );
    info!("Hand-curate the output to one sounding per physical location before serving it.");
    Ok(())
}

/// Derive (date, locn, drop) from a `{cruise}_{locn}_{drop}_ct1.csv` name.
/// The cruise segment ends in the compact departure date, e.g.
/// `33RR20180918`.
fn filename_parts(file_name: &str) -> Option<(String, String, String)> {
    let mut segments = file_name.split('_');
    let cruise = segments.next()?;
    let locn = segments.next()?;
    let drop = segments.next()?;
    if cruise.len() < 8 || locn.is_empty() || drop.is_empty() {
        return None;
    }
    let date = &cruise[cruise.len() - 8..];
    dates::parse_date_compact(date).ok()?;
    Some((date.to_string(), locn.to_string(), drop.to_string()))
}

/// Extract (lat, lon) from a profile preamble. Returns None when either
/// marker is missing or unparseable.
fn scan_profile_markers(path: &Path) -> anyhow::Result<Option<(f64, f64)>> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut lat: Option<f64> = None;
    for line in BufReader::new(file).lines() {
        let line = line?;
        if let Some(rest) = line.strip_prefix(LATITUDE_MARKER) {
            lat = rest.trim().parse().ok();
        } else if let Some(rest) = line.strip_prefix(LONGITUDE_MARKER) {
            // latitude precedes longitude in every file of this corpus
            let lon: f64 = match rest.trim().parse() {
                Ok(v) => v,
                Err(_) => return Ok(None),
            };
            return Ok(lat.map(|lat| (lat, lon)));
        }
    }
    Ok(None)
}
