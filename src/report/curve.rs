use crate::report::Snapshot;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumString,
    EnumIter,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CurveFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Sampled history of one streaming-average run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageCurve {
    started_at: DateTime<Utc>,
    snapshots: Vec<Snapshot>,
}

impl AverageCurve {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            snapshots: vec![],
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot)
    }
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
    pub fn latest(&self) -> Option<Snapshot> {
        self.snapshots.last().copied()
    }
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "values_seen{d}value{d}mean{d}seconds", d = delimiter)?;
        for s in &self.snapshots {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{:.6}",
                s.values_seen,
                s.value,
                s.mean,
                s.seconds,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)?;
        w.flush()
    }
}

impl Default for AverageCurve {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;
    use std::fs;
    use tempfile::NamedTempFile;

    fn snap(seen: u64, value: f64, mean: f64, secs: f64) -> Snapshot {
        Snapshot {
            values_seen: seen,
            value,
            mean,
            seconds: secs,
        }
    }

    fn two_rows() -> AverageCurve {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut c = AverageCurve::new(start);
        c.push(snap(1, 1.0, 1.0, 0.5));
        c.push(snap(2, 2.0, 1.5, 1.0));
        c
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let c = AverageCurve::default();
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert!(c.latest().is_none());
    }

    #[test]
    fn push_increases_len_and_latest_returns_copy() {
        let c = two_rows();
        assert_eq!(c.len(), 2);
        let last = c.latest().unwrap();
        assert_eq!(last.values_seen, 2);
        assert_eq!(last.mean, 1.5);
    }

    #[test]
    fn export_csv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), CurveFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
values_seen,value,mean,seconds
1,1.000000000000,1.000000000000,0.500000
2,2.000000000000,1.500000000000,1.000000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), CurveFormat::Tsv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
values_seen\tvalue\tmean\tseconds
1\t1.000000000000\t1.000000000000\t0.500000
2\t2.000000000000\t1.500000000000\t1.000000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_json_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), CurveFormat::Json).unwrap();

        let got: Value = serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        assert_eq!(got["started_at"], "2024-05-01T12:00:00Z");
        let rows = got["snapshots"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["values_seen"], 2);
        assert_eq!(rows[1]["mean"], 1.5);
    }

    #[test]
    fn export_empty_csv() {
        let tf = NamedTempFile::new().unwrap();
        AverageCurve::default()
            .export(tf.path(), CurveFormat::Csv)
            .unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(got, "values_seen,value,mean,seconds\n");
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("csv".parse::<CurveFormat>(), Ok(CurveFormat::Csv));
        assert_eq!("TSV".parse::<CurveFormat>(), Ok(CurveFormat::Tsv));
        assert_eq!("json".parse::<CurveFormat>(), Ok(CurveFormat::Json));
        assert!("xml".parse::<CurveFormat>().is_err());
        assert_eq!(CurveFormat::Json.to_string(), "json");
    }
}
