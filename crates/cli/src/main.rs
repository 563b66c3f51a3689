use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use halfcourt::api::{classify, generate, Diagram, MeasurementSet, Point, Shape, Stroke};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Handball half-court geometry tools")]
struct Cmd {
    /// Measurement set as JSON; IHF defaults when omitted
    #[arg(long, global = true)]
    input: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write the full diagram (tagged segments, arcs, markers) as JSON
    Geometry {
        #[arg(long)]
        out: String,
    },
    /// Write sampled polylines as a CSV table (feature, sample, x, y, stroke)
    Points {
        #[arg(long, default_value_t = 200)]
        samples: usize,
        #[arg(long)]
        out: String,
    },
    /// Classify a court point into goal area / free-throw zone / field
    Zone {
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Print the measurement set and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let m = load_measurements(cmd.input.as_deref())?;
    match cmd.action {
        Action::Geometry { out } => geometry(&m, out),
        Action::Points { samples, out } => points(&m, samples, out),
        Action::Zone { x, y } => zone(&m, x, y),
        Action::Report => report(&m),
    }
}

fn load_measurements(input: Option<&str>) -> Result<MeasurementSet> {
    let Some(path) = input else {
        tracing::info!("using IHF default measurements");
        return Ok(MeasurementSet::default());
    };
    let bytes = std::fs::read(path).with_context(|| format!("reading {path}"))?;
    let m: MeasurementSet =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {path}"))?;
    tracing::info!(input = path, "loaded measurements");
    Ok(m)
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn build(m: &MeasurementSet) -> Result<Diagram> {
    let diagram = generate(m).context("generating court diagram")?;
    let (lo, hi) = diagram.bounds();
    tracing::debug!(
        items = diagram.len(),
        min_x = lo.x,
        min_y = lo.y,
        max_x = hi.x,
        max_y = hi.y,
        "diagram"
    );
    Ok(diagram)
}

fn geometry(m: &MeasurementSet, out: String) -> Result<()> {
    let diagram = build(m)?;
    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&diagram)?)
        .with_context(|| format!("writing {out}"))?;
    let prov = write_sidecar(
        out_path,
        Payload {
            command: "geometry",
            measurements: m,
            items: diagram.len(),
            samples_per_arc: None,
        },
    )?;
    tracing::info!(out, items = diagram.len(), provenance = %prov.display(), "geometry");
    Ok(())
}

fn points(m: &MeasurementSet, samples: usize, out: String) -> Result<()> {
    let diagram = build(m)?;
    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    let rows = write_points(&diagram, samples, out_path)?;
    let prov = write_sidecar(
        out_path,
        Payload {
            command: "points",
            measurements: m,
            items: diagram.len(),
            samples_per_arc: Some(samples),
        },
    )?;
    tracing::info!(out, rows, samples, provenance = %prov.display(), "points");
    Ok(())
}

/// Flatten every stroked shape into one row per point; returns the row count.
fn write_points(diagram: &Diagram, samples: usize, out: &Path) -> Result<usize> {
    let mut features: Vec<String> = Vec::new();
    let mut index: Vec<u32> = Vec::new();
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    let mut strokes: Vec<&str> = Vec::new();
    for it in diagram.items() {
        let Some(pts) = it.shape.polyline(samples) else {
            continue;
        };
        let stroke = match &it.shape {
            Shape::Segment(s) => s.stroke,
            Shape::Arc(a) => a.stroke,
            _ => Stroke::Solid,
        };
        let name = it.feature.to_string();
        for (k, p) in pts.iter().enumerate() {
            features.push(name.clone());
            index.push(k as u32);
            xs.push(p.x);
            ys.push(p.y);
            strokes.push(match stroke {
                Stroke::Solid => "solid",
                Stroke::Dashed => "dashed",
            });
        }
    }
    let mut df = df!(
        "feature" => features,
        "sample" => index,
        "x" => xs,
        "y" => ys,
        "stroke" => strokes
    )?;
    let mut file =
        std::fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(df.height())
}

fn zone(m: &MeasurementSet, x: f64, y: f64) -> Result<()> {
    m.validate().context("validating measurements")?;
    let z = classify(m, Point::new(x, y));
    tracing::info!(x, y, zone = ?z, "zone");
    println!("{}", serde_json::to_string(&z)?);
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    code_rev: String,
    halfcourt_version: &'static str,
    measurements: &'a MeasurementSet,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> Report<'a> {
    fn new(m: &'a MeasurementSet) -> Self {
        let error = m.validate().err().map(|e| e.to_string());
        Self {
            code_rev: provenance::code_rev(),
            halfcourt_version: halfcourt::VERSION,
            measurements: m,
            valid: error.is_none(),
            error,
        }
    }
}

fn report(m: &MeasurementSet) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Report::new(m))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn points_table_reads_back() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("points.csv");
        let diagram = generate(&MeasurementSet::default()).unwrap();
        let rows = write_points(&diagram, 10, &out).unwrap();
        // 10 segments x 2 points + 5 arcs x 10 samples (9 m arcs stay above the goal line)
        assert_eq!(rows, 10 * 2 + 5 * 10);
        let df = LazyCsvReader::new(&out).finish().unwrap().collect().unwrap();
        assert_eq!(df.height(), rows);
        assert_eq!(df.width(), 5);
    }

    #[test]
    fn measurements_load_from_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("m.json");
        std::fs::write(
            &path,
            serde_json::to_vec(&MeasurementSet::default()).unwrap(),
        )
        .unwrap();
        let m = load_measurements(path.to_str()).unwrap();
        assert_eq!(m, MeasurementSet::default());
        assert_eq!(load_measurements(None).unwrap(), MeasurementSet::default());
    }

    #[test]
    fn report_names_the_failed_rule() {
        let bad = MeasurementSet {
            goal_area_radius: 9_000.0,
            ..MeasurementSet::default()
        };
        let doc = serde_json::to_value(Report::new(&bad)).unwrap();
        assert_eq!(doc["valid"], false);
        assert!(doc["error"]
            .as_str()
            .unwrap()
            .contains("goal_area_radius < free_throw_radius"));

        let ok = serde_json::to_value(Report::new(&MeasurementSet::default())).unwrap();
        assert_eq!(ok["valid"], true);
        assert!(ok.get("error").is_none());
    }

    #[test]
    fn invalid_measurements_surface_as_errors() {
        let m = MeasurementSet {
            goal_area_radius: 9_000.0,
            ..MeasurementSet::default()
        };
        let err = build(&m).unwrap_err();
        assert!(format!("{err:#}").contains("goal_area_radius < free_throw_radius"));
    }
}
