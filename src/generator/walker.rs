use std::{path::Path, sync::mpsc::SyncSender};

use log::error;
use walkdir::WalkDir;

use super::{data::Post, parser::parse_post};

/// How many parsed posts the walker may run ahead of the consumer.
pub(super) const QUEUE_CAPACITY: usize = 5;

/// Visits every non-directory entry under `root`, parses it and sends the
/// resulting [`Post`] on `tx`. Unreadable entries are logged and skipped.
/// The channel closes when `tx` is dropped at the end of the walk.
pub(super) fn walk(root: &Path, tx: SyncSender<Post>) {
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("error walking {root:?}: {e}");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("error reading file {path:?}: {e}");
                continue;
            }
        };
        // strip_prefix cannot fail for entries yielded under `root`
        let relative_path = path.strip_prefix(root).unwrap_or(path);
        let post = parse_post(relative_path, &String::from_utf8_lossy(&bytes));

        if tx.send(post).is_err() {
            error!("post receiver went away, stopping walk of {root:?}");
            return;
        }
    }
}
