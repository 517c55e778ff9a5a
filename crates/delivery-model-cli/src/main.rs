mod dynamic;
mod render;

use anyhow::{Context, Result};
use delivery_model_config::Config;
use delivery_model_engine::{ItemListingResponse, ItemResponse, ModelProvider};
use dynamic::{DynamicItem, provider_from_config};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
    process,
};

/// Resolves every item of a listing or single item response file.
fn resolve_file(provider: &ModelProvider, payload_path: &Path) -> Result<Vec<DynamicItem>> {
    let json = fs::read_to_string(payload_path)
        .with_context(|| format!("Failed to read {}", payload_path.display()))?;

    // Listing responses carry `items`, single item responses carry `item`
    let models = match ItemListingResponse::from_json(&json) {
        Ok(listing) => {
            log::info!(
                "Resolving {} items with {} linked items",
                listing.items.len(),
                listing.modular_content.len()
            );
            provider.listing(&listing)
        }
        Err(listing_err) => {
            let response = ItemResponse::from_json(&json).with_context(|| {
                format!(
                    "{} is neither a listing ({listing_err}) nor a single item response",
                    payload_path.display()
                )
            })?;
            provider.get_model(&response.item, &response.modular_content).into_iter().collect()
        }
    };

    Ok(models
        .into_iter()
        .filter_map(|model| model.downcast::<DynamicItem>())
        .map(|model| *model)
        .collect())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let payload_path = match args.len() {
        2 => PathBuf::from(&args[1]),
        1 => match config.payload_path.clone() {
            Some(path) => path,
            None => {
                eprintln!("Error: No payload file provided and none configured");
                eprintln!("Usage: {} <response.json>", args[0]);
                eprintln!("Or set payload_path in {}", config_path.display());
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [response.json]", args[0]);
            process::exit(1);
        }
    };

    if config.types.is_empty() {
        log::warn!(
            "No content types configured in {}; every item will be skipped",
            config_path.display()
        );
    }

    let provider = provider_from_config(&config);
    let items = resolve_file(&provider, &payload_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for item in &items {
        render::write_item(&mut out, item)?;
    }

    Ok(())
}
