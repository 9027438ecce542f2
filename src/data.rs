use crate::{
    baselines::Baseline,
    error::{ReportError, Result},
    metrics::Metric,
};
use csv::ReaderBuilder;
use log::{debug, error};
use serde::{de, Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Columns that must be present in the header of every results file.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "CompNodes",
    "INC",
    "TimingCost",
    "BandwidthUsage_Msg",
    "BandwidthUsage_Byte",
    "ComplTimeDiff",
];

/// One simulation run, as appended to the results file by the simulator.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResultRow {
    #[serde(deserialize_with = "deserialize_node_count")]
    pub comp_nodes: u64,
    /// Cohort flag. Integers, floats and `true`/`false` are all accepted, so
    /// `1`, `1.0` and `true` select the same cohort.
    #[serde(rename = "INC", deserialize_with = "deserialize_flag")]
    pub inc: f64,
    pub timing_cost: f64,
    #[serde(rename = "BandwidthUsage_Msg")]
    pub bandwidth_usage_msg: f64,
    #[serde(rename = "BandwidthUsage_Byte")]
    pub bandwidth_usage_byte: f64,
    pub compl_time_diff: f64,
    // Written by the simulator but never plotted
    #[serde(default)]
    pub ports: Option<u64>,
    #[serde(default)]
    pub total_ticks: Option<u64>,
}

fn parse_flag(field: &str) -> std::result::Result<f64, String> {
    let field = field.trim();
    if field.eq_ignore_ascii_case("true") {
        return Ok(1.0);
    }
    if field.eq_ignore_ascii_case("false") {
        return Ok(0.0);
    }

    field
        .parse::<f64>()
        .map_err(|_| format!("expected a numeric or boolean flag, found '{field}'"))
}

/// Accepts `16` as well as `16.0`, but not `16.5` or negative counts.
fn parse_node_count(field: &str) -> std::result::Result<u64, String> {
    let field = field.trim();
    if let Ok(count) = field.parse::<u64>() {
        return Ok(count);
    }

    match field.parse::<f64>() {
        Ok(count) if count.fract() == 0.0 && count >= 0.0 && count <= u64::MAX as f64 => {
            Ok(count as u64)
        }
        _ => Err(format!(
            "expected a non-negative whole number of nodes, found '{field}'"
        )),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let field = String::deserialize(deserializer)?;
    parse_flag(&field).map_err(de::Error::custom)
}

fn deserialize_node_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let field = String::deserialize(deserializer)?;
    parse_node_count(&field).map_err(de::Error::custom)
}

#[derive(Debug)]
pub struct ResultSet {
    pub path: PathBuf,
    pub rows: Vec<ResultRow>,
}

/// Rows of a `ResultSet` whose `INC` flag matches `baseline`, in file order.
#[derive(Debug)]
pub struct Cohort<'a> {
    pub baseline: Baseline,
    pub rows: Vec<&'a ResultRow>,
}

impl Cohort<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(CompNodes, metric)` pairs to draw for this cohort.
    pub fn points(&self, metric: &Metric) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.comp_nodes as f64, metric.value(row)))
            .collect()
    }

    pub fn node_range(&self) -> Option<(u64, u64)> {
        let min = self.rows.iter().map(|row| row.comp_nodes).min()?;
        let max = self.rows.iter().map(|row| row.comp_nodes).max()?;
        Some((min, max))
    }
}

pub fn load(path: &Path) -> Result<ResultSet> {
    if !path.exists() {
        error!("results file does not exist (path={})", path.display());
        return Err(ReportError::FileNotFound(path.to_path_buf()));
    }

    let parse_error = |source: csv::Error| {
        error!(
            "error parsing results file (path={}, error={source})",
            path.display()
        );
        ReportError::Parse {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(parse_error)?;

    let headers = reader.headers().map_err(parse_error)?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        error!(
            "results file is missing a required column (path={}, column={column})",
            path.display()
        );
        return Err(ReportError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        });
    }

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<ResultRow>, csv::Error>>()
        .map_err(parse_error)?;
    debug!("loaded {} rows from {}", rows.len(), path.display());

    Ok(ResultSet {
        path: path.to_path_buf(),
        rows,
    })
}

fn select(results: &ResultSet, baseline: Baseline) -> Cohort<'_> {
    Cohort {
        baseline,
        rows: results
            .rows
            .iter()
            .filter(|row| row.inc == baseline.flag())
            .collect(),
    }
}

/// Split the results into the INC-enabled and traditional cohorts. Rows
/// with any other `INC` value end up in neither.
pub fn split(results: &ResultSet) -> (Cohort<'_>, Cohort<'_>) {
    let inc_enabled = select(results, Baseline::IncEnabled);
    let traditional = select(results, Baseline::Traditional);

    let num_excluded = results.rows.len() - inc_enabled.len() - traditional.len();
    debug!(
        "split results (path={}, inc-enabled={}, traditional={}, excluded={num_excluded})",
        results.path.display(),
        inc_enabled.len(),
        traditional.len()
    );

    (inc_enabled, traditional)
}
