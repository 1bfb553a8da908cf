use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Shape of a batch input: row count, parameter ranges and distinct groups.
#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub rows: usize,
    pub m_range: Option<(i64, i64)>,
    pub l_range: Option<(i64, i64)>,
    pub groups: BTreeSet<(i64, i64)>,
}

impl BatchSummary {
    pub fn from_rows(rows: &[(String, i64, i64)]) -> Self {
        let widen = |r: Option<(i64, i64)>, x: i64| match r {
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            None => Some((x, x)),
        };
        rows.iter().fold(Self::default(), |mut acc, (_, m, l)| {
            acc.rows += 1;
            acc.m_range = widen(acc.m_range, *m);
            acc.l_range = widen(acc.l_range, *l);
            acc.groups.insert((*m, *l));
            acc
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "rows": self.rows,
            "m_range": self.m_range,
            "l_range": self.l_range,
            "groups": self.groups.iter().map(|&(m, l)| format!("BS({m},{l})")).collect::<Vec<_>>(),
        })
    }
}

/// Metadata recorded next to a batch result.
pub struct Payload {
    pub params: Value,
    pub batch: BatchSummary,
}

impl Payload {
    pub fn new(params: Value, batch: BatchSummary) -> Self {
        Self { params, batch }
    }
}

/// Write `<artifact-stem>.provenance.json` with the code revision, library
/// version, callsite, params, batch summary and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": bsturn::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "batch": payload.batch.to_json(),
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("results"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
