use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

// The one permitted environment variable: the tile access credential, so it
// can stay out of checked-in config files.
pub const TOKEN_ENV_VAR: &str = "QUAKEMAP_ACCESS_TOKEN";

const CONFIG_PATH: &str = "quakemap.toml";
const EXAMPLE_CONFIG_PATH: &str = "quakemap.example.toml";

pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub tiles: TileConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MapConfig {
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TileConfig {
    #[serde(default = "default_tile_template")]
    pub url_template: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u32,
    #[serde(default = "default_base_layers")]
    pub base_layers: Vec<BaseLayerConfig>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BaseLayerConfig {
    pub name: String,
    pub style: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = if Path::new(CONFIG_PATH).exists() {
            CONFIG_PATH
        } else if Path::new(EXAMPLE_CONFIG_PATH).exists() {
            EXAMPLE_CONFIG_PATH
        } else {
            bail!(
                "configuration file not found; create {} or keep {} alongside the binary",
                CONFIG_PATH,
                EXAMPLE_CONFIG_PATH
            );
        };

        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        let mut config =
            Self::from_toml(&content).with_context(|| format!("failed to load {}", path))?;

        if let Ok(token) = env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                config.tiles.access_token = token;
            }
        }
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.feed_url)
            .with_context(|| format!("feed_url {:?} is not a valid URL", self.feed_url))?;
        if self.tiles.base_layers.is_empty() {
            bail!("at least one base layer must be configured");
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
        }
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: default_tile_template(),
            access_token: String::new(),
            attribution: default_attribution(),
            max_zoom: default_max_zoom(),
            base_layers: default_base_layers(),
        }
    }
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_output_path() -> String {
    "site/index.html".to_string()
}

fn default_page_title() -> String {
    "Earthquake Map".to_string()
}

// Frames the continental United States, the usual coverage of the feed.
fn default_center() -> [f64; 2] {
    [31.5, -100.0]
}

fn default_zoom() -> f64 {
    4.0
}

fn default_tile_template() -> String {
    "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={token}".to_string()
}

fn default_attribution() -> String {
    concat!(
        "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, ",
        "Imagery &copy; <a href=\"https://www.mapbox.com/\">Mapbox</a>"
    )
    .to_string()
}

fn default_max_zoom() -> u32 {
    18
}

fn default_base_layers() -> Vec<BaseLayerConfig> {
    [
        ("Satellite Map", "mapbox.satellite"),
        ("Light Map", "mapbox.light"),
        ("Dark Map", "mapbox.dark"),
    ]
    .into_iter()
    .map(|(name, style)| BaseLayerConfig {
        name: name.to_string(),
        style: style.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_full_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.output_path, "site/index.html");
        assert_eq!(config.map.center, [31.5, -100.0]);
        assert_eq!(config.map.zoom, 4.0);
        assert_eq!(config.tiles.max_zoom, 18);
        assert_eq!(config.tiles.access_token, "");
        assert_eq!(config.tiles.base_layers.len(), 3);
        assert_eq!(config.tiles.base_layers[0].style, "mapbox.satellite");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_toml(
            r#"
            feed_url = "https://example.com/quakes.geojson"
            output_path = "out/map.html"

            [map]
            center = [10.0, 20.0]
            zoom = 6

            [tiles]
            access_token = "pk.configured"
            max_zoom = 12

            [[tiles.base_layers]]
            name = "Only Map"
            style = "example.street"
            "#,
        )
        .unwrap();

        assert_eq!(config.feed_url, "https://example.com/quakes.geojson");
        assert_eq!(config.map.center, [10.0, 20.0]);
        assert_eq!(config.map.zoom, 6.0);
        assert_eq!(config.tiles.access_token, "pk.configured");
        assert_eq!(config.tiles.max_zoom, 12);
        assert_eq!(config.tiles.base_layers.len(), 1);
        assert_eq!(config.tiles.base_layers[0].name, "Only Map");
    }

    #[test]
    fn base_layer_order_is_preserved() {
        let config = Config::from_toml(
            r#"
            [[tiles.base_layers]]
            name = "B"
            style = "x.b"

            [[tiles.base_layers]]
            name = "A"
            style = "x.a"
            "#,
        )
        .unwrap();
        let names: Vec<&str> = config.tiles.base_layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn invalid_feed_url_is_rejected() {
        assert!(Config::from_toml(r#"feed_url = "not a url""#).is_err());
    }

    // The only test that touches the process environment; cargo runs tests
    // from the package root, where the example config is checked in.
    #[test]
    fn env_token_overrides_the_config_file() {
        env::set_var(TOKEN_ENV_VAR, "pk.from-env");
        let config = Config::load().unwrap();
        env::remove_var(TOKEN_ENV_VAR);
        assert_eq!(config.tiles.access_token, "pk.from-env");
    }

    #[test]
    fn empty_base_layer_list_is_rejected() {
        let err = Config::from_toml("[tiles]\nbase_layers = []").unwrap_err();
        assert!(err.to_string().contains("base layer"));
    }
}
