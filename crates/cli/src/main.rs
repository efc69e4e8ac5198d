use anyhow::{Context, Result};
use clap::Parser;
use complexity::{Complexity, Shape};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod batch;
mod provenance;

#[derive(Parser, Debug)]
#[command(name = "complexity")]
#[command(about = "calculate geometry complexity")]
struct Cmd {
    /// The WKT string of a polygon or line string
    #[arg(long)]
    wkt: Option<String>,

    /// Resolution search bound: levels 2^1..2^j are tried
    #[arg(short = 'j', long = "resolution", default_value_t = 3)]
    resolution: usize,

    /// Print sub-scores as JSON instead of the bare score
    #[arg(long)]
    breakdown: bool,

    /// Batch mode: file with one WKT per line
    #[arg(long, requires = "out", conflicts_with = "wkt")]
    input: Option<PathBuf>,

    /// Batch mode: JSON lines output (provenance sidecar is written next to it)
    #[arg(long, requires = "input")]
    out: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cmd = Cmd::parse();
    match (&cmd.input, &cmd.out, &cmd.wkt) {
        (Some(input), Some(out), _) => run_batch(input.clone(), out.clone(), cmd.resolution),
        (_, _, Some(wkt)) if !wkt.trim().is_empty() => {
            run_single(wkt, cmd.resolution, cmd.breakdown)
        }
        _ => {
            eprintln!("please specify wkt");
            Ok(ExitCode::from(1))
        }
    }
}

fn run_single(wkt: &str, max_j: usize, breakdown: bool) -> Result<ExitCode> {
    tracing::info!(max_j, breakdown, "score");
    let shape = Shape::from_wkt(wkt).context("parsing wkt")?;
    let cx = Complexity::new(shape, max_j);
    if breakdown {
        let b = cx.breakdown();
        let obj = serde_json::json!({
            "score": b.score,
            "dist_entropy": b.dist_entropy,
            "angle_entropy": b.angle_entropy,
            "smoothness": b.smoothness,
            "max_j": max_j,
        });
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        println!("{}", cx.score());
    }
    Ok(ExitCode::SUCCESS)
}

fn run_batch(input: PathBuf, out: PathBuf, max_j: usize) -> Result<ExitCode> {
    tracing::info!(input = %input.display(), out = %out.display(), max_j, "batch");
    let summary = batch::run(&input, &out, max_j)?;
    tracing::info!(
        scored = summary.scored,
        failed = summary.failed,
        input_sha256 = %summary.input_sha256,
        "batch_done"
    );
    let sidecar = provenance::Sidecar::new(&input, &out, max_j, &summary);
    provenance::write_sidecar(&sidecar)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolution_is_three() {
        let cmd = Cmd::try_parse_from(["complexity", "--wkt", "POINT (0 0)"]).unwrap();
        assert_eq!(cmd.resolution, 3);
        assert!(!cmd.breakdown);
    }

    #[test]
    fn short_resolution_flag() {
        let cmd = Cmd::try_parse_from(["complexity", "--wkt", "POINT (0 0)", "-j", "5"]).unwrap();
        assert_eq!(cmd.resolution, 5);
    }

    #[test]
    fn batch_flags_require_each_other() {
        assert!(Cmd::try_parse_from(["complexity", "--input", "a.wkt"]).is_err());
        assert!(Cmd::try_parse_from(["complexity", "--out", "a.jsonl"]).is_err());
        assert!(Cmd::try_parse_from([
            "complexity",
            "--input",
            "a.wkt",
            "--out",
            "a.jsonl",
            "--wkt",
            "POINT (0 0)"
        ])
        .is_err());
    }

    #[test]
    fn missing_wkt_parses_but_exits_one() {
        let cmd = Cmd::try_parse_from(["complexity"]).unwrap();
        assert!(cmd.wkt.is_none() && cmd.input.is_none());
    }

    #[test]
    fn run_batch_writes_sidecar_with_input_digest() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("shapes.wkt");
        let out = dir.path().join("scores.jsonl");
        let src = "POINT (1 2)\nLINESTRING (0 0, 1 x)\n";
        std::fs::write(&input, src).unwrap();
        run_batch(input.clone(), out.clone(), 4).unwrap();
        let side = dir.path().join("scores.provenance.json");
        let parsed: provenance::Sidecar =
            serde_json::from_slice(&std::fs::read(side).unwrap()).unwrap();
        assert_eq!(parsed.input, input);
        assert_eq!(parsed.output, out);
        assert_eq!(parsed.input_sha256, provenance::digest(src.as_bytes()));
        assert_eq!((parsed.scored, parsed.failed, parsed.max_j), (1, 1, 4));
    }

    #[test]
    fn run_single_rejects_bad_wkt() {
        assert!(run_single("POLYGON ((0 0, 1", 3, false).is_err());
        assert!(run_single("POLYGON ((0 0, 1 0, 1 1, 0 0))", 3, true).is_ok());
    }
}
