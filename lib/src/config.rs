use crate::consts::*;
use crate::errors::*;
use crate::util::*;

use std::path::PathBuf;

use serde::Deserialize;
use serde::Deserializer;
use smart_default::SmartDefault;

make_log_macro!(debug, "config");

#[derive(Deserialize, Clone, Debug, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct BrightSyncConfig {
    /// File the kernel exposes the current brightness in.
    #[default(PathBuf::from(DEFAULT_BRIGHTNESS_FILE))]
    pub brightness_file: PathBuf,

    /// Display control tool to invoke.
    #[default(String::from(DEFAULT_TOOL))]
    pub tool: String,

    /// Output name handed to the display control tool.
    #[default(String::from(DEFAULT_OUTPUT))]
    pub output: String,

    /// Largest value the brightness file is expected to hold.
    #[default(MAX_BRIGHTNESS)]
    #[serde(deserialize_with = "deserialize_max_brightness")]
    pub max_brightness: f64,

    /// Offset added to the rescaled value.
    #[default(BRIGHTNESS_OFFSET)]
    pub offset: f64,
}

fn deserialize_max_brightness<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let max_brightness: f64 = Deserialize::deserialize(deserializer)?;
    debug!("{:?}", max_brightness);

    if max_brightness <= 0.0 {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Float(max_brightness),
            &"a number greater than zero",
        ));
    }

    Ok(max_brightness)
}

impl BrightSyncConfig {
    /// Loads the user's config file if one exists, falls back to defaults
    /// otherwise.
    pub async fn new() -> Result<Self> {
        if let Some(config_path) = find_file("config", Some("toml")) {
            deserialize_toml_file(config_path).await
        } else {
            Ok(BrightSyncConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = BrightSyncConfig::default();
        assert_eq!(config.brightness_file, PathBuf::from(DEFAULT_BRIGHTNESS_FILE));
        assert_eq!(config.tool, DEFAULT_TOOL);
        assert_eq!(config.output, DEFAULT_OUTPUT);
        assert_eq!(config.max_brightness, MAX_BRIGHTNESS);
        assert_eq!(config.offset, BRIGHTNESS_OFFSET);
    }

    #[test]
    fn parses_partial_overrides() {
        let config: BrightSyncConfig = toml::from_str(
            r#"
            brightness_file = "/sys/class/backlight/intel_backlight/brightness"
            output = "HDMI-1"
            max_brightness = 100.0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.brightness_file,
            PathBuf::from("/sys/class/backlight/intel_backlight/brightness")
        );
        assert_eq!(config.output, "HDMI-1");
        assert_eq!(config.max_brightness, 100.0);
        assert_eq!(config.tool, DEFAULT_TOOL);
        assert_eq!(config.offset, BRIGHTNESS_OFFSET);
    }

    #[test]
    fn rejects_non_positive_max_brightness() {
        assert!(toml::from_str::<BrightSyncConfig>("max_brightness = 0.0").is_err());
        assert!(toml::from_str::<BrightSyncConfig>("max_brightness = -1.0").is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<BrightSyncConfig>("displays = 2").is_err());
    }
}
