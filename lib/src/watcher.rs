pub(crate) use futures::channel::mpsc::Receiver;
use futures::{channel::mpsc::channel, SinkExt};
use notify::{Config, Event, RecursiveMode, Result};
pub(crate) use notify::{INotifyWatcher, PollWatcher, Watcher};

use std::path::Path;
pub use std::time::Duration;

/// Set up modification watches on a single brightness file.
///
/// sysfs does not emit inotify events for driver-initiated writes, so a
/// content-comparing poll watcher runs alongside the inotify one. Fails if
/// the file does not exist.
pub fn brightness_file_watcher<P: AsRef<Path>>(
    path: P,
    poll_interval: Duration,
) -> Result<(PollWatcher, INotifyWatcher, Receiver<Result<Event>>)> {
    let (mut tx, rx) = channel(1);

    let config = Config::default()
        .with_compare_contents(true) // crucial part for pseudo filesystems
        .with_poll_interval(poll_interval);

    let mut poll_tx = tx.clone();
    let mut poll_watcher = PollWatcher::new(
        move |res: notify::Result<Event>| {
            futures::executor::block_on(async {
                let _ = poll_tx.send(res).await;
            });
        },
        config,
    )?;

    let mut inotify_watcher = INotifyWatcher::new(
        move |res: notify::Result<Event>| {
            futures::executor::block_on(async {
                let _ = tx.send(res).await;
            });
        },
        config,
    )?;

    poll_watcher.watch(path.as_ref(), RecursiveMode::NonRecursive)?;
    inotify_watcher.watch(path.as_ref(), RecursiveMode::NonRecursive)?;

    Ok((poll_watcher, inotify_watcher, rx))
}
