use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: run parameters plus the configuration files read.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<PathBuf>,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            tag: None,
        }
    }

    pub fn with_inputs<I: IntoIterator<Item = PathBuf>>(mut self, inputs: I) -> Self {
        self.inputs.extend(inputs);
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// JSON block shared by sidecars and `report`.
pub fn document(payload: &Payload, outputs: &[&Path]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "bikekin_version": bikekin::VERSION,
        "tag": payload.tag,
        "inputs": payload
            .inputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>(),
        "params": payload.params,
        "outputs": outputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>(),
    })
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
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
    let mut doc = document(&payload, &[artifact]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
