use ad_console::config::AppConfig;
use ad_console::context::{use_language, LanguageProvider};
use ad_console::document::Document;
use ad_console::i18n::{Language, LanguageMetrics, Translator};
use ad_console::preference::LanguagePreferenceStore;
use ad_console::shell;
use ad_console::storage::FileStore;
use anyhow::{Context, Result};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ad_console=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    if config.api.debug {
        info!("API configuration: {}", serde_json::to_string(&config.api)?);
    }

    let storage = FileStore::new(&config.storage_path);
    info!("Using storage file {:?}", storage.path());

    let store = LanguagePreferenceStore::init(storage, Translator::new(), Document::new());
    let provider = LanguageProvider::new(store);

    // Optional argument: language code to switch to
    let requested = std::env::args().nth(1);

    let html = provider.scope(|| -> Result<String> {
        let ctx = use_language()?;

        if let Some(code) = requested.as_deref() {
            let language = Language::from_code(code)?;
            ctx.set_language(&language)
                .with_context(|| format!("Failed to switch language to '{}'", code))?;
        }

        Ok(shell::render(&ctx, &config.api, 0))
    })?;

    println!("{}", html);
    info!(
        "Language metrics: {}",
        serde_json::to_string(&LanguageMetrics::global().report())?
    );

    Ok(())
}
