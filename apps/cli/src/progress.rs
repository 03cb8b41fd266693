// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Progress reporting through the log.

use roominfo_core::{Progress, ProgressObserver};

/// Logs "room N of M" at every 10% step and on completion.
#[derive(Debug, Default)]
pub struct LogProgress {
    last_step: Option<u32>,
}

impl ProgressObserver for LogProgress {
    fn room_processed(&mut self, progress: Progress) {
        let step = progress.percent() / 10;
        if self.last_step != Some(step) || progress.processed == progress.total {
            self.last_step = Some(step);
            tracing::info!(
                processed = progress.processed,
                total = progress.total,
                percent = progress.percent(),
                "Rooms processed {}/{}",
                progress.processed,
                progress.total
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_tracked() {
        let mut progress = LogProgress::default();
        progress.room_processed(Progress { processed: 1, total: 20 });
        assert_eq!(progress.last_step, Some(0));
        progress.room_processed(Progress { processed: 4, total: 20 });
        assert_eq!(progress.last_step, Some(2));
        assert!(!progress.is_cancelled());
    }
}
