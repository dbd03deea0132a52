use crate::errors::*;

use async_trait::async_trait;
use tokio::process::Command;

make_log_macro!(debug, "backend");

/// Applies a normalized brightness value to the display.
///
/// The real implementation shells out to a display control tool; tests
/// substitute their own to observe applied values without spawning anything.
#[async_trait]
pub trait DisplayBackend: Send + Sync {
    async fn apply(&self, brightness: f64) -> Result<()>;
}

/// Backend that invokes an xrandr-style tool:
/// `<tool> --output <output> --brightness <value>`.
pub struct XrandrBackend {
    tool: String,
    output: String,
}

impl XrandrBackend {
    pub fn new(tool: &str, output: &str) -> Self {
        Self {
            tool: tool.to_string(),
            output: output.to_string(),
        }
    }
}

#[async_trait]
impl DisplayBackend for XrandrBackend {
    async fn apply(&self, brightness: f64) -> Result<()> {
        let status = Command::new(&self.tool)
            .arg("--output")
            .arg(&self.output)
            .arg("--brightness")
            .arg(brightness.to_string())
            .status()
            .await?;

        if status.success() {
            debug!("brightness set to {brightness:.2}");
            Ok(())
        } else {
            Err(BrightSyncError::DisplayCommand {
                tool: self.tool.clone(),
                status,
            })
        }
    }
}
