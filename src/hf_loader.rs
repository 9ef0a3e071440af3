use crate::{anyhow, Result};
use dotenv::dotenv;
use std::path::Path;

// See hf_fetch/src/bin/hf_fetch_cli.rs for cli instructions
// Snapshots land in the hub cache first, then get copied to the target dir.

/// Narrow seam over the snapshot-download operation so the orchestrator can
/// run against a fake in tests.
pub trait SnapshotFetcher {
    /// Populates `local_dir` with every file of the remote repo except those
    /// matching `ignore_patterns`.
    fn fetch_snapshot(
        &self,
        repo_id: &str,
        local_dir: &Path,
        ignore_patterns: &[&str],
    ) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct HuggingFaceFetcher {
    pub hf_token: Option<String>,
}

impl HuggingFaceFetcher {
    pub fn new(hf_token: Option<String>) -> Self {
        Self { hf_token }
    }

    pub fn hf_token(mut self, hf_token: &str) -> Self {
        self.hf_token = Some(hf_token.to_string());
        self
    }

    fn get_hf_token(&self) -> Option<String> {
        if let Some(hf_token) = &self.hf_token {
            Some(hf_token.to_owned())
        } else {
            dotenv().ok(); // Load .env file
            if let Ok(hf_token) = dotenv::var("HUGGING_FACE_TOKEN") {
                Some(hf_token)
            } else {
                None
            }
        }
    }
}

impl SnapshotFetcher for HuggingFaceFetcher {
    fn fetch_snapshot(
        &self,
        repo_id: &str,
        local_dir: &Path,
        ignore_patterns: &[&str],
    ) -> Result<()> {
        let api = hf_hub::api::sync::ApiBuilder::new()
            .with_progress(true)
            .with_token(self.get_hf_token())
            .build()
            .map_err(|e| anyhow!(e))?;
        let repo = api.model(repo_id.to_string());
        let info = repo.info().map_err(|e| anyhow!(e))?;

        for sibling in info.siblings {
            if is_ignored(&sibling.rfilename, ignore_patterns) {
                continue;
            }
            let cached_path = repo.get(&sibling.rfilename).map_err(|e| anyhow!(e))?;
            let dest_path = local_dir.join(&sibling.rfilename);
            if let Some(parent) = dest_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(&cached_path, &dest_path)?;
        }
        Ok(())
    }
}

/// Matches the `*suffix` and exact-name pattern forms used for snapshot
/// exclusion filters.
pub fn is_ignored(rfilename: &str, ignore_patterns: &[&str]) -> bool {
    ignore_patterns.iter().any(|pattern| {
        if let Some(suffix) = pattern.strip_prefix('*') {
            rfilename.ends_with(suffix)
        } else {
            rfilename == *pattern
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_suffix_patterns() {
        let patterns = ["*.md", "*.pt"];
        assert!(is_ignored("README.md", &patterns));
        assert!(is_ignored("docs/usage.md", &patterns));
        assert!(is_ignored("pytorch_model.pt", &patterns));
        assert!(!is_ignored("model.safetensors", &patterns));
        assert!(!is_ignored("config.json", &patterns));
    }

    #[test]
    fn ignore_exact_patterns() {
        let patterns = [".gitattributes"];
        assert!(is_ignored(".gitattributes", &patterns));
        assert!(!is_ignored("tokenizer.json", &patterns));
    }

    #[test]
    fn no_patterns_keeps_everything() {
        assert!(!is_ignored("README.md", &[]));
    }

    #[test]
    #[ignore = "requires internet access"]
    fn fetch_snapshot_basic() {
        let dir = std::env::temp_dir().join("hf_fetch_snapshot_test");
        std::fs::create_dir_all(&dir).unwrap();
        HuggingFaceFetcher::default()
            .fetch_snapshot("hf-internal-testing/tiny-random-bert", &dir, &["*.md", "*.pt"])
            .unwrap();
        assert!(dir.join("config.json").is_file());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
