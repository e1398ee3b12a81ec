use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use persona_photos::application::ResolvePhotoUseCase;
use persona_photos::domain::entities::PersonaCode;
use persona_photos::infrastructure::{
    AppConfig, CliArgs, ImageProbe, LocalAssetIndex, StorageManager, resolve_api_base,
};
use persona_photos::presentation::{render_candidates, render_json, render_resolved};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = match &args.config {
        Some(_) => StorageManager::with_dir(PathBuf::new()),
        None => StorageManager::new()?,
    };

    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_env(|key| std::env::var(key).ok());
    config.merge_with_args(args);

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = persona_photos::VERSION, "Starting persona-photos");

    if args.api_host.is_some() || config.api_base.is_some() {
        let api_base = resolve_api_base(config.api_base.as_deref(), args.api_host.as_deref());
        info!(api_base = %api_base, "API base URL");
        println!("API base: {api_base}");
    }

    let asset_index = Arc::new(LocalAssetIndex::scan_dir(&config.photo_dir)?);
    let probe = Arc::new(ImageProbe::new(&config.probe)?);
    let use_case = ResolvePhotoUseCase::new(config.remote_base(), asset_index, probe);

    debug!(?use_case, "Photo resolver ready");

    for raw in &args.codes {
        let code = PersonaCode::new(raw.as_str());

        if args.no_probe {
            let candidates = use_case.candidates(&code);
            if args.json {
                println!("{}", render_json(&candidates)?);
            } else {
                print!("{}", render_candidates(&candidates));
            }
            continue;
        }

        let resolved = use_case.execute(code).await;
        if args.json {
            println!("{}", render_json(&resolved)?);
        } else {
            print!("{}", render_resolved(&resolved));
        }
    }

    Ok(())
}
