use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use ethwall::crop::AspectRatio;
use ethwall::draw::{OUTLINE_COLOR, WATERMARK_FONT, WATERMARK_OPACITY, WATERMARK_RATIO, WATERMARK_TEXT};
use ethwall::pixel::BRIGHTNESS;
use ethwall::WallpaperOptions;
use image::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Logo placement
    pub geometry: GeometryConfig,
    /// Pixel filter applied to mirrored regions
    pub filter: FilterConfig,
    /// Logo edge drawing
    pub outline: OutlineConfig,
    /// Text stamped in the bottom-right corner
    pub watermark: WatermarkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct GeometryConfig {
    /// Multiplier for the Ethereum logo
    pub scale: f64,
    /// Width part of the crop aspect ratio
    pub aspect_width: u32,
    /// Height part of the crop aspect ratio
    pub aspect_height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct FilterConfig {
    /// Factor applied to every channel of a mirrored pixel
    pub brightness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct OutlineConfig {
    pub enabled: bool,
    /// RGBA edge color
    pub color: [u8; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WatermarkConfig {
    pub enabled: bool,
    pub text: String,
    /// RGB text color
    pub color: [u8; 3],
    /// TrueType/OpenType font file
    pub font: PathBuf,
    /// Opacity of the text, 0-1
    pub opacity: f32,
    /// Font size is the image width divided by this
    pub ratio: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            scale: 1.0,
            aspect_width: AspectRatio::WALLPAPER.width,
            aspect_height: AspectRatio::WALLPAPER.height,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig { brightness: BRIGHTNESS }
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        OutlineConfig { enabled: true, color: OUTLINE_COLOR.0 }
    }
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        WatermarkConfig {
            enabled: true,
            text: WATERMARK_TEXT.to_string(),
            color: [255, 255, 255],
            font: PathBuf::from(WATERMARK_FONT),
            opacity: WATERMARK_OPACITY,
            ratio: WATERMARK_RATIO,
        }
    }
}

impl Config {

    pub fn load(config_path: &Path) -> anyhow::Result<Config> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let config: Config = match config_path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&config_str)?,
            Some("toml") => toml::from_str(&config_str)?,
            _ => bail!("Unsupported config file format. Use .json or .toml"),
        };
        Ok(config)
    }

    pub fn save_default(config_path: &Path) -> anyhow::Result<()> {
        let config = Config::default();
        let config_str = match config_path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::to_string_pretty(&config)?,
            _ => serde_json::to_string_pretty(&config)?, // Default to JSON
        };

        let mut file = File::create(config_path)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
        file.write_all(config_str.as_bytes())?;
        println!("Generated default configuration file: {}", config_path.display());
        Ok(())
    }

    pub fn options(&self) -> WallpaperOptions {
        WallpaperOptions {
            scale: self.geometry.scale,
            brightness: self.filter.brightness,
            aspect: AspectRatio::new(self.geometry.aspect_width, self.geometry.aspect_height),
            outline: self.outline.enabled.then_some(Rgba(self.outline.color)),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_options() {
        assert_eq!(Config::default().options(), WallpaperOptions::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[geometry]\nscale = 1.5\n\n[watermark]\nenabled = false\n").unwrap();
        assert_eq!(config.geometry.scale, 1.5);
        assert_eq!(config.geometry.aspect_width, 1920);
        assert!(!config.watermark.enabled);
        assert_eq!(config.watermark.text, WATERMARK_TEXT);
        assert_eq!(config.watermark.color, [255, 255, 255]);
        assert_eq!(config.filter.brightness, BRIGHTNESS);
    }

    #[test]
    fn json_can_disable_outline() {
        let json = r#"{"outline": {"enabled": false, "color": [1, 2, 3, 4]}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.outline.color, [1, 2, 3, 4]);
        assert_eq!(config.options().outline, None);
    }
}
