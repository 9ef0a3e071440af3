pub mod downloader;
pub mod hf_loader;

pub use downloader::{download_model, DownloadOutcome, ModelId};
pub use hf_loader::{HuggingFaceFetcher, SnapshotFetcher};

pub(crate) use anyhow::{anyhow, bail, Result};
