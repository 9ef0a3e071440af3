use crate::{bail, Result, SnapshotFetcher};
use std::path::{Path, PathBuf};

/// Files never worth pulling with a snapshot: docs and the legacy pickle
/// checkpoints that duplicate the safetensors weights.
pub const IGNORE_PATTERNS: [&str; 2] = ["*.md", "*.pt"];

/// A `organization/model_name` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelId {
    pub organization: String,
    pub model_name: String,
}

impl ModelId {
    /// Splitting must yield exactly two non-empty segments; anything else is
    /// a usage error raised before any filesystem or network action.
    pub fn parse(model_id: &str) -> Result<Self> {
        let segments: Vec<&str> = model_id.split('/').collect();
        match segments.as_slice() {
            [organization, model_name] if !organization.is_empty() && !model_name.is_empty() => {
                Ok(Self {
                    organization: organization.to_string(),
                    model_name: model_name.to_string(),
                })
            }
            _ => bail!(
                "Invalid model id '{}': expected the format 'organization/model_name'",
                model_id
            ),
        }
    }

    pub fn repo_id(&self) -> String {
        format!("{}/{}", self.organization, self.model_name)
    }

    pub fn target_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.organization).join(&self.model_name)
    }
}

/// Outcome of a single invocation. `Aborted` still maps to a zero exit, but
/// the caller can tell it apart from a real download or a skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded(PathBuf),
    AlreadyExists(PathBuf),
    Aborted,
}

pub fn ensure_base_dir_exists(base_dir: &Path) -> bool {
    if !base_dir.exists() {
        println!(
            "Base directory {} does not exist. Creating it now...",
            base_dir.display()
        );
        match std::fs::create_dir_all(base_dir) {
            Ok(()) => println!("Created base directory: {}", base_dir.display()),
            Err(e) => {
                eprintln!("Error creating base directory: {}", e);
                return false;
            }
        }
    }
    true
}

/// Downloads `model_id` under `base_dir/org/name`, skipping the fetch when
/// that directory already exists. Fetch errors are not caught here.
pub fn download_model(
    fetcher: &dyn SnapshotFetcher,
    model_id: &str,
    base_dir: &Path,
) -> Result<DownloadOutcome> {
    let model_id = ModelId::parse(model_id)?;

    if !ensure_base_dir_exists(base_dir) {
        println!("Aborting download due to base directory issues.");
        return Ok(DownloadOutcome::Aborted);
    }

    let full_path = model_id.target_path(base_dir);
    if full_path.exists() {
        println!(
            "Model {} already exists at {}",
            model_id.repo_id(),
            full_path.display()
        );
        return Ok(DownloadOutcome::AlreadyExists(full_path));
    }

    println!(
        "Downloading model {} to {}",
        model_id.repo_id(),
        full_path.display()
    );
    std::fs::create_dir_all(&full_path)?;

    fetcher.fetch_snapshot(&model_id.repo_id(), &full_path, &IGNORE_PATTERNS)?;

    println!("Download complete. Model saved to {}", full_path.display());
    Ok(DownloadOutcome::Downloaded(full_path))
}
