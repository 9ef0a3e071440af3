use anyhow::Result;
use hf_fetch::{download_model, HuggingFaceFetcher};
use std::path::PathBuf;

// cargo run -p hf_fetch --bin hf_fetch_cli -- "acme/bert-tiny" --base_dir "/tmp/models"

pub fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let default_base_dir = std::env::var("USER")
        .ok()
        .map(|username| format!("/work/{}/models", username));

    let matches = clap::Command::new("Model Downloader")
        .version("1.0")
        .about("Downloads a model snapshot from the Hugging Face Hub")
        .arg(
            clap::Arg::new("model_id")
                .help("The model id in the format 'organization/model_name'")
                .required(true),
        )
        .arg(
            clap::Arg::new("base_dir")
                .help("Base directory for model downloads (default: /work/<USER>/models)")
                .long("base_dir")
                .required(false),
        )
        .arg(
            clap::Arg::new("hf_token")
                .help("HF token")
                .long("hf_token")
                .required(false),
        )
        .get_matches();

    let model_id = matches.get_one::<String>("model_id").unwrap();
    let base_dir = match matches.get_one::<String>("base_dir") {
        Some(base_dir) => PathBuf::from(base_dir),
        None => match default_base_dir {
            Some(base_dir) => PathBuf::from(base_dir),
            None => anyhow::bail!("USER is not set; pass --base_dir explicitly"),
        },
    };
    let hf_token = matches
        .get_one::<String>("hf_token")
        .map(|token| token.to_owned());

    let fetcher = HuggingFaceFetcher::new(hf_token);
    download_model(&fetcher, model_id.as_str(), &base_dir)?;

    Ok(())
}
