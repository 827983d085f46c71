//! CLI subcommand implementations.

pub mod notifications;
pub mod send;
pub mod templates;

use anyhow::{bail, Result};
use notifications_api::types::Personalisation;
use serde_json::Value;

/// Parses repeated `key=value` arguments into template personalisation.
/// Later duplicates win.
pub fn parse_personalisation(pairs: &[String]) -> Result<Personalisation> {
    let mut personalisation = Personalisation::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("personalisation must be key=value, got '{}'", pair);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("personalisation key is empty in '{}'", pair);
        }
        personalisation.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(personalisation)
}
