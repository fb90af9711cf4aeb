use std::str::FromStr;

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::Level;

const BUNDLED_CONFIG: &str = include_str!("../assets/marquee.toml");

// characters that would let a token escape the css rule it is interpolated into
const FORBIDDEN_COLOR_CHARS: &[char] = &[';', '{', '}', '<', '>'];

// marquee configuration
//
// there is no filesystem in the browser, so the document is compiled in and
// validated once at startup before anything renders
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
    pub mount_id: String,
    pub log_level: String,
    pub theme: Theme,
}

// the color tokens every styled element is generated from
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Theme {
    pub red: String,
    pub white: WhiteShades,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WhiteShades {
    pub lighter: String,
    pub darker: String,
}

// the config table is a subtable of the root node, same as the server config
#[derive(Debug, Deserialize)]
struct TomlConfigFile {
    config: AppConfig,
}

impl AppConfig {
    pub fn bundled() -> anyhow::Result<Self> {
        Self::parse(BUNDLED_CONFIG).context("failed to load bundled config")
    }

    pub fn parse(doc: &str) -> anyhow::Result<Self> {
        let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config")?;
        let config = data.config;

        if config.mount_id.trim().is_empty() {
            bail!("mount_id must not be empty");
        }

        config.level()?;
        config.theme.validate()?;

        Ok(config)
    }

    pub fn level(&self) -> anyhow::Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| anyhow::Error::msg(format!("unknown log_level {}", self.log_level)))
    }
}

impl Theme {
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_color("theme.red", &self.red)?;
        validate_color("theme.white.lighter", &self.white.lighter)?;
        validate_color("theme.white.darker", &self.white.darker)?;
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            red: String::from("#E51013"),
            white: WhiteShades {
                lighter: String::from("#ffffff"),
                darker: String::from("#e5e5e5"),
            },
        }
    }
}

fn validate_color(key: &str, value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        bail!("{key} must not be empty");
    }

    if value.contains(FORBIDDEN_COLOR_CHARS) {
        bail!("{key} is not a css color: {value}");
    }

    Ok(())
}
