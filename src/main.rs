use anyhow::{Context, Result};
use repo_contents::{config::ContentsConfig, contents::request::SerializeRequest, logger};
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(ContentsConfig::default_path);

    let config = ContentsConfig::load(&path)
        .with_context(|| format!("Cannot load config file {}", path.display()))?;

    logger::init(&config.log_level)?;

    log::info!("Starting");
    let route = config.route().context("Invalid contents location")?;

    let change = config
        .into_change()
        .context("Cannot build the contents request")?;
    log::info!("Prepared {} request: {}", change.kind(), change);

    let body = change
        .into_request()
        .context("Cannot serialize the contents request")?;

    log::debug!("Rendering request for {}", route.uri());
    println!("{} {}", change.method(), route.uri());
    println!("{}", body);

    Ok(())
}
