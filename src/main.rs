//! Proof-of-contribution entrypoint.
//!
//! Reads the archive from the input directory, scores it and writes
//! `results.json` to the output directory.

use mimalloc::MiMalloc;

use sixgpt_proof::config::Config;
use sixgpt_proof::proof::Proof;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        dlp_id = config.dlp_id,
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        min_examples = config.min_examples,
        "Proof starting"
    );

    let proof = Proof::from_config(&config)?;
    let response = proof.generate().await?;

    let path = response.write_to_dir(&config.output_dir)?;
    tracing::info!(
        path = %path.display(),
        valid = response.valid,
        score = response.score,
        number_examples = response.attributes.number_examples,
        number_sampled = response.attributes.number_sampled,
        "Proof written"
    );

    println!("{}", response.to_json_pretty()?);

    Ok(())
}
