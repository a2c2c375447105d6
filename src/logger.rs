use anyhow::{Context, Result};
use log::Level;
use simple_logger::init_with_level;
use std::str::FromStr;

pub fn init(level: &str) -> Result<()> {
    init_with_level(parse_level(level)?)?;

    Ok(())
}

fn parse_level(level: &str) -> Result<Level> {
    Level::from_str(level).with_context(|| format!("Invalid log level `{}`", level))
}
