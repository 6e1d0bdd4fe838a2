use anyhow::{Context, Result};
use folio::{Config, PostStore, SiteSettings, generate_site};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let settings = match &config.settings {
        Some(path) => SiteSettings::load_from_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => None,
    };
    let options = config.site_options(settings);

    let store = PostStore::load_dir(&config.posts).context("Failed to load posts")?;
    if store.is_empty() {
        log::warn!("No posts found in {}", config.posts.display());
    }

    let summary = generate_site(&options, &store).context("Failed to generate site")?;

    for path in &summary.written {
        println!("Generated: {}", path.display());
    }
    log::info!(
        "Generated {} post pages into {}",
        summary.post_count,
        options.output.display()
    );

    if !config.no_open
        && let Some(index) = summary.index_path()
        && let Err(e) = open::that(index)
    {
        log::warn!("Failed to open {} in browser: {:#}", index.display(), e);
    }

    Ok(())
}
