use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};

use super::model::{LaunchDataset, LaunchRecord, OUTCOME_FAILURE, OUTCOME_SUCCESS};

/// Columns every dataset export must carry. `Booster Version` is optional and
/// anything else (e.g. the unnamed pandas index) is ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
    "Flight Number",
];

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the launch table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Remote CSV fetched once over HTTP(S).
    Url(String),
    /// Local `.csv` or `.json` file.
    Path(PathBuf),
}

impl DataSource {
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::Path(PathBuf::from(s))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset. A single attempt is made; any failure is returned
/// to the caller, which treats it as fatal.
pub async fn load(source: &DataSource, fetch_timeout: Duration) -> Result<LaunchDataset> {
    match source {
        DataSource::Url(url) => fetch_csv(url, fetch_timeout).await,
        DataSource::Path(path) => load_file(path),
    }
}

/// Load a dataset from a local file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the [`REQUIRED_COLUMNS`]
/// * `.json` – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening CSV file {}", path.display()))?;
            parse_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading JSON file {}", path.display()))?;
            parse_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// HTTP fetch
// ---------------------------------------------------------------------------

async fn fetch_csv(url: &str, timeout: Duration) -> Result<LaunchDataset> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("building HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetching {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?;

    let body = response
        .bytes()
        .await
        .with_context(|| format!("reading response body from {url}"))?;

    log::debug!("Fetched {} bytes from {url}", body.len());
    parse_csv(body.as_ref())
}

// ---------------------------------------------------------------------------
// CSV / JSON parsing
// ---------------------------------------------------------------------------

/// Parse a CSV export (header row + one launch per line).
pub fn parse_csv<R: io::Read>(input: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_columns(headers.iter())?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        validate_record(&record, row_no)?;
        records.push(record);
    }

    finish(records)
}

/// Parse a records-oriented JSON export (`df.to_json(orient='records')`).
pub fn parse_json(text: &str) -> Result<LaunchDataset> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(text).context("Expected a top-level JSON array of objects")?;

    let mut records = Vec::with_capacity(rows.len());
    for (row_no, row) in rows.into_iter().enumerate() {
        check_columns(row.keys().map(String::as_str))
            .with_context(|| format!("JSON row {row_no}"))?;
        let record: LaunchRecord = serde_json::from_value(serde_json::Value::Object(row))
            .with_context(|| format!("JSON row {row_no}"))?;
        validate_record(&record, row_no)?;
        records.push(record);
    }

    finish(records)
}

fn check_columns<'a>(present: impl Iterator<Item = &'a str>) -> Result<()> {
    let present: Vec<&str> = present.map(str::trim).collect();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !present.contains(col))
        .collect();

    if !missing.is_empty() {
        bail!("dataset is missing required column(s): {}", missing.join(", "));
    }
    Ok(())
}

fn validate_record(record: &LaunchRecord, row_no: usize) -> Result<()> {
    if record.class != OUTCOME_SUCCESS && record.class != OUTCOME_FAILURE {
        bail!("row {row_no}: class must be 0 or 1, got {}", record.class);
    }
    if !record.payload_mass_kg.is_finite() {
        bail!(
            "row {row_no}: payload mass '{}' is not a finite number",
            record.payload_mass_kg
        );
    }
    Ok(())
}

fn finish(records: Vec<LaunchRecord>) -> Result<LaunchDataset> {
    let dataset = LaunchDataset::from_records(records)?;
    log::info!(
        "Parsed {} launches from {} sites, payload range [{}, {}] kg",
        dataset.len(),
        dataset.sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{sample_csv, sample_records};

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    #[test]
    fn test_parse_csv_sample() {
        let ds = parse_csv(sample_csv().as_bytes()).unwrap();
        assert_eq!(ds.records(), sample_records().as_slice());
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
        assert_eq!(ds.sites().len(), 4);
    }

    #[test]
    fn test_booster_version_is_optional() {
        let csv = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   1,CCAFS LC-40,0,0.0,v1.0\n";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].booster_version, None);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "Flight Number,Launch Site,Payload Mass (kg),Booster Version Category\n\
                   1,CCAFS LC-40,0.0,v1.0\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("class"), "{err:#}");
    }

    #[test]
    fn test_class_outside_binary_rejected() {
        let csv = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   1,CCAFS LC-40,2,0.0,v1.0\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("class must be 0 or 1"), "{err:#}");
    }

    #[test]
    fn test_malformed_number_rejected() {
        let csv = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   1,CCAFS LC-40,1,heavy,v1.0\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"), "{err:#}");
    }

    #[test]
    fn test_empty_csv_rejected() {
        let csv = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("no launch records"), "{err:#}");
    }

    #[test]
    fn test_parse_json_records() {
        let json = r#"[
            {"Flight Number": 1, "Launch Site": "KSC LC-39A", "class": 1,
             "Payload Mass (kg)": 2490.0, "Booster Version Category": "FT"},
            {"Flight Number": 2, "Launch Site": "VAFB SLC-4E", "class": 0,
             "Payload Mass (kg)": 500, "Booster Version Category": "v1.1",
             "Booster Version": "F9 v1.1  B1003"}
        ]"#;
        let ds = parse_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.max_payload(), 2490.0);
        assert_eq!(ds.records()[1].booster_version.as_deref(), Some("F9 v1.1  B1003"));
    }

    #[test]
    fn test_parse_json_missing_column() {
        let json = r#"[{"Flight Number": 1, "Launch Site": "KSC LC-39A", "class": 1}]"#;
        let err = parse_json(json).unwrap_err();
        assert!(format!("{err:#}").contains("Payload Mass (kg)"), "{err:#}");
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(
            DataSource::parse("https://example.com/launches.csv"),
            DataSource::Url("https://example.com/launches.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("data/launches.json"),
            DataSource::Path(PathBuf::from("data/launches.json"))
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("launches.parquet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    async fn serve_once(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_fetch_from_url() {
        let base = serve_once(Router::new().route("/launches.csv", get(|| async { sample_csv() }))).await;
        let source = DataSource::parse(&format!("{base}/launches.csv"));

        let ds = load(&source, Duration::from_secs(5)).await.unwrap();
        assert_eq!(ds.len(), sample_records().len());
    }

    #[tokio::test]
    async fn test_fetch_http_error_is_fatal() {
        let base = serve_once(
            Router::new().route("/gone.csv", get(|| async { (StatusCode::NOT_FOUND, "nope") })),
        )
        .await;
        let source = DataSource::parse(&format!("{base}/gone.csv"));

        let err = load(&source, Duration::from_secs(5)).await.unwrap_err();
        assert!(format!("{err:#}").contains("404"), "{err:#}");
    }
}
