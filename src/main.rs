use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

mod composer;
mod config;
mod feed;
mod legend;
mod models;
mod overlay;
mod style;
mod template_engine;
mod utils;

use config::Config;
use template_engine::TemplateEngine;

const TEMPLATE_DIR: &str = "templates";
const PAGE_TEMPLATE: &str = "map";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = Config::load()?;

    // One fetch, one render, one file written.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let template_engine = TemplateEngine::new(Path::new(TEMPLATE_DIR))?;
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
        .build()?;

    if config.tiles.access_token.is_empty() {
        warn!(
            "tile access token is empty; base layers will not load (set {} or tiles.access_token)",
            config::TOKEN_ENV_VAR
        );
    }

    info!("fetching earthquake feed from {}", config.feed_url);
    let feed = feed::fetch_feed(&http_client, &config.feed_url).await?;
    info!("feed contains {} features", feed.features.len());

    let overlay = overlay::build_overlay(&feed.features);
    if overlay.skipped > 0 {
        warn!("{} malformed features skipped", overlay.skipped);
    }
    info!("bound {} markers", overlay.markers.len());

    let map = composer::build_map(&config, overlay);

    let mut context = tera::Context::new();
    context.insert("map", &map);
    let page = template_engine.render(PAGE_TEMPLATE, &context)?;

    let output_path = Path::new(&config.output_path);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(output_path, &page)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!("wrote {} ({} bytes)", output_path.display(), page.len());

    Ok(())
}
