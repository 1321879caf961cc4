use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("usaddr.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub render: Option<Render>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Render {
    pub format: String,
}

impl Default for Render {
    fn default() -> Self {
        Config::default().render.expect("Render configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert_eq!(cfg.render.unwrap().format, "default");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.render.is_none());
        assert_eq!(Render::default().format, "default");
    }
}
