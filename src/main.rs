//! Medguide: Symptom-to-disease inference with medication guidance.
//!
//! Thin command-line entry point. Everything interesting lives in the
//! library; this binary only wires up logging, loads the reference data
//! and model from injected paths, and frames one request.
//!
//! Usage:
//!   medguide <data-dir>              read a JSON request from stdin
//!   medguide <data-dir> drugs        print the known drug list
//!   medguide <data-dir> check A B    check one drug pair directly
//!
//! The data directory (or `MEDGUIDE_DATA_DIR`) must hold the reference
//! CSV tables; the model artifact defaults to `model.json` inside it and
//! can be overridden with `MEDGUIDE_MODEL`.

use std::io::Read;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use medguide::adapters::linear::ModelArtifact;
use medguide::adapters::tables::{self, DataSources};
use medguide::{InferenceRequest, InferenceService, ReferenceData};

fn main() -> Result<()> {
    // Reports go to stdout as JSON, so logs go to stderr to keep the
    // output stream machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let data_dir = match args.first() {
        Some(dir) => dir.clone(),
        None => std::env::var("MEDGUIDE_DATA_DIR")
            .context("Pass a data directory or set MEDGUIDE_DATA_DIR")?,
    };

    let sources = DataSources::from_dir(&data_dir);
    let model_path = std::env::var("MEDGUIDE_MODEL")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::Path::new(&data_dir).join("model.json"));

    tracing::info!("Loading reference data from {data_dir}...");
    let guidance = tables::load_guidance(&sources)?;
    let medications = tables::load_medications(&sources)?;
    let interactions = tables::load_interactions(&sources)?;

    tracing::info!("Loading model artifact from {}...", model_path.display());
    let artifact = ModelArtifact::load(&model_path)?;
    let (symptoms, diseases, classifier) = artifact.into_parts()?;

    let reference = Arc::new(ReferenceData::new(
        symptoms,
        diseases,
        guidance,
        medications,
        interactions,
    ));
    let service = InferenceService::new(reference, Arc::new(classifier));

    match args.get(1).map(String::as_str) {
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request from stdin")?;
            let request = InferenceRequest::from_json(&body)?;
            let report = service.run(&request)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Some("drugs") => {
            println!("{}", serde_json::to_string_pretty(&service.known_drugs())?);
        }
        Some("check") => {
            let (a, b) = match (args.get(2), args.get(3)) {
                (Some(a), Some(b)) => (a, b),
                _ => bail!("Usage: medguide <data-dir> check <drug1> <drug2>"),
            };
            println!("{}", serde_json::to_string_pretty(&service.check_pair(a, b))?);
        }
        Some(other) => bail!("Unknown command: {other}"),
    }

    Ok(())
}
