use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::IndexLoadError;

/// Expected header row of the station index file, columns in fixed order.
pub const INDEX_HEADER: &str = "filename,date,locn,drop,lat,long";

/// Number of columns in a station index row.
pub const INDEX_ROW_LENGTH: usize = 6;

/// One sounding station from the curated location index.
///
/// `source_file` is the unique key; it names the WHP-exchange CSV file
/// holding the station's depth profile and must resolve to a readable file.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    pub source_file: String,
    pub date: NaiveDate,
    /// Location label from the cruise numbering (e.g. "00001")
    pub location: String,
    /// Drop/cast identifier within the location (e.g. "00002")
    pub cast: String,
    /// Latitude in signed decimal degrees
    pub latitude: f64,
    /// Longitude in signed decimal degrees
    pub longitude: f64,
}

impl Station {
    /// Look up a station by its backing file reference.
    pub fn find_by_file<'a>(stations: &'a [Station], source_file: &str) -> Option<&'a Station> {
        stations.iter().find(|s| s.source_file == source_file)
    }
}

/// Parse the station index CSV text into stations.
///
/// The first row must be exactly `filename,date,locn,drop,lat,long`.
/// No deduplication is performed; the index is curated upstream to one
/// station per physical location.
pub fn parse_station_index(csv_text: &str) -> Result<Vec<Station>, IndexLoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let header = rdr.headers()?.iter().collect::<Vec<_>>().join(",");
    if header != INDEX_HEADER {
        return Err(IndexLoadError::Header {
            found: header,
            expected: INDEX_HEADER,
        });
    }

    let mut stations = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let record = row?;
        let row_no = i + 2; // 1-based, counting the header row
        if record.len() != INDEX_ROW_LENGTH {
            return Err(IndexLoadError::ColumnCount {
                row: row_no,
                expected: INDEX_ROW_LENGTH,
                found: record.len(),
            });
        }

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();
        let date = osd_utils::dates::parse_date_flexible(field(1)).map_err(|_| {
            IndexLoadError::Field {
                row: row_no,
                field: "date",
                value: field(1).to_string(),
            }
        })?;
        let latitude: f64 = field(4).parse().map_err(|_| IndexLoadError::Field {
            row: row_no,
            field: "lat",
            value: field(4).to_string(),
        })?;
        let longitude: f64 = field(5).parse().map_err(|_| IndexLoadError::Field {
            row: row_no,
            field: "long",
            value: field(5).to_string(),
        })?;

        stations.push(Station {
            source_file: field(0).to_string(),
            date,
            location: field(2).to_string(),
            cast: field(3).to_string(),
            latitude,
            longitude,
        });
    }

    log::info!("station index: {} stations", stations.len());
    Ok(stations)
}

/// Read and parse a station index file from disk.
pub fn load_station_index(path: &str) -> Result<Vec<Station>, IndexLoadError> {
    let csv_text = std::fs::read_to_string(path).map_err(|source| IndexLoadError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_station_index(&csv_text)
}
