//! Batch scoring: one WKT per line in, one JSON record per line out.

use anyhow::{Context, Result};
use complexity::{Complexity, Shape};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::provenance::digest;

/// Output record for one input line (1-based line numbers).
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Record {
    Scored {
        line: usize,
        score: f64,
        dist_entropy: f64,
        angle_entropy: f64,
        smoothness: f64,
    },
    Failed {
        line: usize,
        error: String,
    },
}

/// Counts and input digest reported after a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scored: usize,
    pub failed: usize,
    /// `sha256:<hex>` of the input file as read.
    pub input_sha256: String,
}

/// Score every shape line of `src`; blank lines and `#` comments are skipped.
///
/// Shapes are independent, so each one is scored on its own rayon task;
/// records come back in input order.
pub fn score_lines(src: &str, max_j: usize) -> Vec<Record> {
    let lines: Vec<(usize, &str)> = src
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .collect();
    lines
        .par_iter()
        .map(|&(line, wkt)| match Shape::from_wkt(wkt) {
            Ok(shape) => {
                let b = Complexity::new(shape, max_j).breakdown();
                Record::Scored {
                    line,
                    score: b.score,
                    dist_entropy: b.dist_entropy,
                    angle_entropy: b.angle_entropy,
                    smoothness: b.smoothness,
                }
            }
            Err(e) => {
                tracing::warn!(line, error = %e, "skipping unparsable shape");
                Record::Failed {
                    line,
                    error: e.to_string(),
                }
            }
        })
        .collect()
}

/// Read `input`, score it, and write JSON lines to `out`.
pub fn run(input: &Path, out: &Path, max_j: usize) -> Result<Summary> {
    let src = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let records = score_lines(&src, max_j);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let mut w = BufWriter::new(file);
    let mut summary = Summary {
        input_sha256: digest(src.as_bytes()),
        ..Summary::default()
    };
    for r in &records {
        match r {
            Record::Scored { .. } => summary.scored += 1,
            Record::Failed { .. } => summary.failed += 1,
        }
        serde_json::to_writer(&mut w, r)?;
        w.write_all(b"\n")?;
    }
    w.flush()
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    const SRC: &str = "\
# two shapes and a broken line
POLYGON ((0 0, 4 0, 5 3, 2 5, -1 2, 0 0))

LINESTRING (0 0, 1 x)
LINESTRING (0 0, 2 1, 3 3, 5 2)
";

    #[test]
    fn score_lines_keeps_order_and_line_numbers() {
        let records = score_lines(SRC, 3);
        assert_eq!(records.len(), 3);
        assert!(matches!(records[0], Record::Scored { line: 2, .. }));
        assert!(matches!(records[1], Record::Failed { line: 4, .. }));
        assert!(matches!(records[2], Record::Scored { line: 5, .. }));
    }

    #[test]
    fn scored_record_matches_library() {
        let records = score_lines("POLYGON ((0 0, 4 0, 5 3, 2 5, -1 2, 0 0))", 4);
        let expected = complexity::api::score_wkt("POLYGON ((0 0, 4 0, 5 3, 2 5, -1 2, 0 0))", 4)
            .unwrap();
        match &records[0] {
            Record::Scored { score, .. } => assert_eq!(*score, expected),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn run_writes_json_lines() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("shapes.wkt");
        let out = dir.path().join("nested/scores.jsonl");
        fs::write(&input, SRC).unwrap();
        let summary = run(&input, &out, 3).unwrap();
        assert_eq!(
            summary,
            Summary {
                scored: 2,
                failed: 1,
                input_sha256: digest(SRC.as_bytes()),
            }
        );
        let text = fs::read_to_string(&out).unwrap();
        let rows: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["line"], 2);
        assert!(rows[0]["score"].as_f64().unwrap() > 0.0);
        assert!(rows[1]["error"].as_str().unwrap().contains("invalid number"));
    }

    #[test]
    fn run_reports_missing_input() {
        let dir = tempdir().unwrap();
        let err = run(&dir.path().join("nope.wkt"), &dir.path().join("o.jsonl"), 3).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
