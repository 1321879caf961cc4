use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use usaddr_entities::address::Format;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "usaddr.toml";

const ENV_NAME_RENDER_FORMAT: &str = "USADDR_RENDER_FORMAT";

#[derive(Debug)]
pub struct Config {
    pub render: Render,
}

#[derive(Debug)]
pub struct Render {
    /// Used when no format is given on the command line.
    pub format: Format,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(format) = env::var(ENV_NAME_RENDER_FORMAT) {
            cfg.override_render_format(&format)?;
        }
        Ok(cfg)
    }

    fn override_render_format(&mut self, format: &str) -> Result<()> {
        self.render.format = parse_format(format)?;
        log::info!("Use render format '{}'", self.render.format);
        Ok(())
    }
}

fn parse_format(format: &str) -> Result<Format> {
    format
        .parse()
        .map_err(|_| anyhow!("Unknown render format '{format}' (expected line1, line2 or default)"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { render } = from;
        let raw::Render { format } = render.unwrap_or_default();
        let render = Render {
            format: parse_format(&format)?,
        };
        Ok(Self { render })
    }
}
