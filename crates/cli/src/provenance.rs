use anyhow::{Context, Result};
use halfcourt::api::MeasurementSet;
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command wrote and which inputs produced it.
pub struct Payload<'a> {
    pub command: &'static str,
    pub measurements: &'a MeasurementSet,
    /// Diagram item count at the time of writing.
    pub items: usize,
    /// Arc density for sampled outputs; `None` for exact geometry.
    pub samples_per_arc: Option<usize>,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    halfcourt_version: &'static str,
    callsite: Callsite,
    command: &'static str,
    measurements: &'a MeasurementSet,
    items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples_per_arc: Option<usize>,
    outputs: Vec<String>,
}

/// Write `<stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload<'_>) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let sidecar = Sidecar {
        code_rev: code_rev(),
        halfcourt_version: halfcourt::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        command: payload.command,
        measurements: payload.measurements,
        items: payload.items,
        samples_per_arc: payload.samples_per_arc,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `court.csv` → `court.provenance.json`, same directory.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|rev| !rev.is_empty())
}
