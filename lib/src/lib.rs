#![warn(clippy::match_same_arms)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::unnecessary_wraps)]

#[macro_use]
mod util;
mod backend;
mod config;
mod consts;
mod errors;
mod source;
mod watcher;

use futures::StreamExt as _;

pub use crate::backend::{DisplayBackend, XrandrBackend};
pub use crate::config::BrightSyncConfig;
pub use crate::errors::BrightSyncError;
use crate::errors::*;
use crate::source::BrightnessSource;
use crate::util::*;
use crate::watcher::*;

make_log_macro!(debug, "brightsync");

/// Used to construct [`BrightSync`]
pub struct BrightSyncBuilder {
    config: Option<BrightSyncConfig>,
    backend: Option<Box<dyn DisplayBackend>>,
    poll_interval: Duration,
}

impl Default for BrightSyncBuilder {
    fn default() -> Self {
        Self {
            config: None,
            backend: None,
            poll_interval: Duration::from_secs(2),
        }
    }
}

impl BrightSyncBuilder {
    /// Create a new [`BrightSyncBuilder`].
    pub fn new() -> Self {
        BrightSyncBuilder::default()
    }

    /// Defaults to [`BrightSyncConfig::new()`].
    pub fn with_config(mut self, config: BrightSyncConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the display backend. Defaults to [`XrandrBackend`]; tests use
    /// this to observe applied values without invoking a real display tool.
    pub fn with_backend(mut self, backend: Box<dyn DisplayBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Default poll_interval is 2 seconds.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Returns the constructed [`BrightSync`] instance.
    pub async fn build(self) -> Result<BrightSync> {
        let config = match self.config {
            Some(config) => config,
            None => BrightSyncConfig::new().await?,
        };

        let backend: Box<dyn DisplayBackend> = match self.backend {
            Some(backend) => backend,
            None => Box::new(XrandrBackend::new(&config.tool, &config.output)),
        };

        BrightSync::new(config, backend, self.poll_interval)
    }
}

/// Watches a single brightness file and mirrors its value to the display.
pub struct BrightSync {
    config: BrightSyncConfig,
    source: BrightnessSource,
    backend: Box<dyn DisplayBackend>,
    _poll_watcher: PollWatcher,
    _inotify_watcher: INotifyWatcher,
    rx: Receiver<notify::Result<notify::Event>>,
}

impl BrightSync {
    pub(crate) fn new(
        config: BrightSyncConfig,
        backend: Box<dyn DisplayBackend>,
        poll_interval: Duration,
    ) -> Result<Self> {
        let (_poll_watcher, _inotify_watcher, rx) =
            brightness_file_watcher(&config.brightness_file, poll_interval)?;
        let source = BrightnessSource::new(&config.brightness_file);

        Ok(BrightSync {
            config,
            source,
            backend,
            _poll_watcher,
            _inotify_watcher,
            rx,
        })
    }

    /// Wait for the brightness file to be modified.
    ///
    /// Yields once per observed modification; events for unrelated paths are
    /// skipped. Returns an error when the watch machinery shuts down.
    pub async fn next(&mut self) -> Result<()> {
        while let Some(res) = self.rx.next().await {
            let event = res?;
            debug!("{:?}", event);
            if !event.kind.is_modify() {
                continue;
            }
            let file_name = self.config.brightness_file.file_name();
            if event
                .paths
                .iter()
                .any(|p| p == &self.config.brightness_file || p.file_name() == file_name)
            {
                return Ok(());
            }
        }
        Err(BrightSyncError::WatchEnded)
    }

    /// Read the current raw value from the brightness file.
    pub async fn read(&self) -> Result<f64> {
        self.source.read().await
    }

    /// Rescale a raw value and hand it to the display backend.
    ///
    /// Returns the normalized value that was applied. Out-of-range raw values
    /// pass through unclamped.
    pub async fn apply(&self, raw: f64) -> Result<f64> {
        let normalized = normalize(raw, self.config.max_brightness, self.config.offset);
        self.backend.apply(normalized).await?;
        Ok(normalized)
    }

    /// Perform one full read-and-apply cycle.
    pub async fn sync(&self) -> Result<f64> {
        let raw = self.read().await?;
        self.apply(raw).await
    }
}
