// Render the club page to static files
//
// Usage: cargo run --bin render_site
// Output: $SITE_OUTPUT_DIR/index.html (and page.json when SITE_EMIT_JSON is set)

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use velo_club_site::site::current_year;
use velo_club_site::{build_page_data, ContentStore, JsonFormatter, RenderConfig, SiteError, SiteGenerator};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "velo_club_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RenderConfig::from_env().context("reading render configuration")?;
    let year = config.year.unwrap_or_else(current_year);

    tracing::info!("Configuration:");
    tracing::info!("  SITE_OUTPUT_DIR: {}", config.output_dir.display());
    tracing::info!("  SITE_YEAR: {}", year);
    tracing::info!("  SITE_EMIT_JSON: {}", config.emit_json);

    let store = ContentStore::velo_club_slv();
    let page = build_page_data(&store, year);
    let html = SiteGenerator::new().assemble(&page)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| SiteError::Io {
        path: config.output_dir.clone(),
        source,
    })?;
    write_file(&config.output_dir.join("index.html"), &html)?;

    if config.emit_json {
        let json = JsonFormatter::format(&page)?;
        write_file(&config.output_dir.join("page.json"), &json)?;
    }

    tracing::info!("Site written to {}", config.output_dir.display());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), SiteError> {
    fs::write(path, contents).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
