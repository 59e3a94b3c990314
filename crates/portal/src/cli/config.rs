//! `portal config`: load public runtime config sources and show the resolved record.

use super::error::HelpfulError;
use portal_config::{keys, PortalConfig, RawConfig};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Arguments for the config command
#[derive(Debug)]
pub struct ConfigArgs {
    pub file: Option<PathBuf>,
    pub no_env: bool,
    pub json: bool,
}

/// Build the raw mapping: file first, environment on top.
pub fn load_raw(args: &ConfigArgs) -> anyhow::Result<RawConfig> {
    let mut raw = RawConfig::new();

    if let Some(path) = &args.file {
        let from_file =
            RawConfig::from_file(path).map_err(|e| HelpfulError::config_file(path, &e))?;
        for key in from_file.unrecognized_keys() {
            if key == keys::NEXT_PUBLIC_EGO_PUBLIC_KEY {
                warn!(
                    "{} is ignored; the public key is read from {}",
                    key,
                    keys::EGO_PUBLIC_KEY
                );
            } else {
                warn!(key, path = %path.display(), "Ignoring unrecognized config key");
            }
        }
        raw.merge(from_file);
    }

    if !args.no_env {
        raw.merge(RawConfig::from_env());
    }

    debug!(keys = raw.len(), "Public runtime config loaded");
    Ok(raw)
}

/// Run the config command
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let raw = load_raw(&args)?;
    let config = PortalConfig::resolve(Some(&raw));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        for (name, value) in config.entries() {
            println!("{} = {}", name, value);
        }
    }

    Ok(())
}
