//! Export download links.
//!
//! Export files are produced by the service; only their URLs are built here.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::error::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    GeoJson,
    Kml,
    Gpx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::GeoJson,
        ExportFormat::Kml,
        ExportFormat::Gpx,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::GeoJson => "geojson",
            ExportFormat::Kml => "kml",
            ExportFormat::Gpx => "gpx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlannerError::InvalidValue {
                kind: "export format",
                value: s.to_string(),
            })
    }
}

/// `{base_url}/api/export.{ext}?kod_obce={kod}` with the code query-encoded.
pub fn export_url(
    base_url: &str,
    kod_obce: &str,
    format: ExportFormat,
) -> Result<Url, PlannerError> {
    let raw = format!(
        "{}/api/export.{}",
        base_url.trim_end_matches('/'),
        format.extension()
    );
    Url::parse_with_params(&raw, &[("kod_obce", kod_obce)])
        .map_err(|err| PlannerError::InvalidUrl(format!("{raw}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_url_per_format() {
        let url = export_url("http://localhost:8000/", "530701", ExportFormat::Kml).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/export.kml?kod_obce=530701");
    }

    #[test]
    fn encodes_code() {
        let url = export_url("http://localhost:8000", "53 07&01", ExportFormat::Csv).unwrap();
        assert_eq!(url.query(), Some("kod_obce=53+07%2601"));
    }

    #[test]
    fn rejects_bad_base() {
        assert!(matches!(
            export_url("not a url", "1", ExportFormat::Gpx),
            Err(PlannerError::InvalidUrl(_))
        ));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("GeoJSON".parse::<ExportFormat>().unwrap(), ExportFormat::GeoJson);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
