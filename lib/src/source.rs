use crate::errors::*;
use crate::util::*;

use std::path::{Path, PathBuf};

make_log_macro!(debug, "source");

/// Reads brightness values from the file the kernel exposes them in.
///
/// The file is opened fresh on every read, nothing is cached between cycles.
pub struct BrightnessSource {
    path: PathBuf,
}

impl BrightnessSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the first line of the brightness file and parse it as a float.
    ///
    /// Zero, negative and out-of-range values parse fine and are returned
    /// unchanged.
    pub async fn read(&self) -> Result<f64> {
        let contents = read_file(&self.path).await?;
        let value = contents.lines().next().unwrap_or_default().trim().parse()?;
        debug!("{} holds {value}", self.path.display());
        Ok(value)
    }
}
