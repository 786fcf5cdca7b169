//! CSV export of sampling sites.
//!
//! Fixed contract for the download collaborator: `Latitude,Longitude`
//! header, one row per site in selection order, unquoted 6-decimal floats,
//! no index column.

use crate::error::{Error, Result};
use crate::sample::SamplingSite;

/// Renders sites as CSV in selection order.
pub fn to_csv(sites: &[SamplingSite]) -> String {
    let mut out = String::from("Latitude,Longitude\n");
    for site in sites {
        out.push_str(&format!("{:.6},{:.6}\n", site.latitude, site.longitude));
    }
    out
}

/// Parses a previously exported CSV back into (latitude, longitude) pairs.
pub fn parse_csv(csv: &str) -> Result<Vec<(f64, f64)>> {
    // tolerate CRLF endings and stray whitespace from externally edited files
    let mut lines = csv.lines();
    match lines.next().map(str::trim) {
        Some("Latitude,Longitude") => {}
        other => {
            return Err(Error::InvalidParameter(format!(
                "unexpected CSV header: {other:?}"
            )));
        }
    }

    let mut pairs = Vec::new();
    for (row, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (lat, lon) = line.split_once(',').ok_or_else(|| {
            Error::InvalidParameter(format!("CSV row {} has no comma", row + 2))
        })?;
        let lat: f64 = lat.trim().parse().map_err(|_| {
            Error::InvalidParameter(format!("CSV row {} has a bad latitude", row + 2))
        })?;
        let lon: f64 = lon.trim().parse().map_err(|_| {
            Error::InvalidParameter(format!("CSV row {} has a bad longitude", row + 2))
        })?;
        pairs.push((lat, lon));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sites() -> Vec<SamplingSite> {
        vec![
            SamplingSite {
                index: 1,
                latitude: 40.5175,
                longitude: -109.5625,
            },
            SamplingSite {
                index: 2,
                latitude: 40.520833,
                longitude: -109.570001,
            },
        ]
    }

    #[test]
    fn header_and_row_format() {
        let csv = to_csv(&sites());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Latitude,Longitude");
        assert_eq!(lines[1], "40.517500,-109.562500");
        assert_eq!(lines[2], "40.520833,-109.570001");
    }

    #[test]
    fn round_trip_preserves_coordinates() {
        let original = sites();
        let pairs = parse_csv(&to_csv(&original)).unwrap();
        assert_eq!(pairs.len(), original.len());
        for (pair, site) in pairs.iter().zip(&original) {
            assert_eq!(pair.0, site.latitude);
            assert_eq!(pair.1, site.longitude);
        }
    }

    #[test]
    fn empty_site_list_is_header_only() {
        assert_eq!(to_csv(&[]), "Latitude,Longitude\n");
        assert!(parse_csv("Latitude,Longitude\n").unwrap().is_empty());
    }

    #[test]
    fn crlf_export_reimports() {
        let csv = to_csv(&sites()).replace('\n', "\r\n");
        let pairs = parse_csv(&csv).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (40.5175, -109.5625));
    }

    #[test]
    fn carriage_return_residue_reimports() {
        // a bare \r is not a line terminator and ends up inside the last
        // field unless trimmed
        let csv = "Latitude,Longitude\r\n40.517500,-109.562500\r";
        let pairs = parse_csv(csv).unwrap();
        assert_eq!(pairs, vec![(40.5175, -109.5625)]);
    }

    #[test]
    fn wrong_header_rejected() {
        assert!(parse_csv("lat,lon\n1.0,2.0\n").is_err());
    }
}
