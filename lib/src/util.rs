use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tokio::io::AsyncReadExt as _;

use crate::consts::CONFIG_DIR_NAME;
use crate::errors::*;

macro_rules! make_log_macro {
    (@wdoll $macro_name:ident, $block_name:literal, ($dol:tt)) => {
        #[allow(dead_code)]
        macro_rules! $macro_name {
            ($dol($args:tt)+) => {
                ::log::$macro_name!(target: $block_name, $dol($args)+);
            };
        }
    };
    ($macro_name:ident, $block_name:literal) => {
        make_log_macro!(@wdoll $macro_name, $block_name, ($));
    };
}

pub async fn deserialize_toml_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = read_file(path).await?;

    toml::from_str(&contents).map_err(|err| {
        #[allow(deprecated)]
        let location_msg = err
            .span()
            .map(|span| {
                let line = 1 + contents.as_bytes()[..(span.start)]
                    .iter()
                    .filter(|b| **b == b'\n')
                    .count();
                format!(" at line {line}")
            })
            .unwrap_or_default();
        BrightSyncError::Other(format!(
            "Failed to deserialize TOML file {}{}: {}",
            path.display(),
            location_msg,
            err.message()
        ))
    })
}

pub async fn read_file(path: impl AsRef<Path>) -> std::io::Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut content = String::new();
    file.read_to_string(&mut content).await?;
    Ok(content.trim_end().to_string())
}

/// Look up a file in our directory under the user's config dir.
pub fn find_file(file: &str, extension: Option<&str>) -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(CONFIG_DIR_NAME);
    path.push(file);
    if let Some(extension) = extension {
        path.set_extension(extension);
    }
    path.exists().then_some(path)
}

/// Rescale a raw brightness reading to the scale the display tool expects.
/// The result is intentionally not clamped.
pub fn normalize(raw: f64, max_brightness: f64, offset: f64) -> f64 {
    raw / max_brightness + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn normalize_matches_reference_values() {
        assert_eq!(normalize(50.0, 99.0, 0.15), 50.0 / 99.0 + 0.15);
        assert_eq!(normalize(0.0, 99.0, 0.15), 0.15);
        assert_eq!(normalize(99.0, 99.0, 0.15), 1.15);
    }

    #[test]
    fn normalize_passes_extremes_through_unclamped() {
        assert_eq!(normalize(990.0, 99.0, 0.15), 10.15);
        assert_eq!(normalize(-99.0, 99.0, 0.15), -0.85);
    }

    #[tokio::test]
    async fn read_file_trims_trailing_whitespace() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"42\n").unwrap();
        assert_eq!(read_file(file.path()).await.unwrap(), "42");
    }
}
