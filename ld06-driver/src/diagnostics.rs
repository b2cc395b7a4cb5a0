use crate::constants::DIAGNOSTICS_PERIOD_MS;
use log::debug;
use std::time::{Duration, Instant};

/// Counters of the reader loop, reported once per period.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Diagnostics {
    pub(crate) bytes_received: usize,
    pub(crate) frames_emitted: usize,
    pub(crate) frames_rejected: usize,
    pub(crate) samples_emitted: usize,
    pub(crate) samples_dropped: usize,
}

pub(crate) struct DiagnosticsReporter {
    period: Duration,
    last_report: Instant,
    counters: Diagnostics,
}

impl DiagnosticsReporter {
    pub(crate) fn new() -> DiagnosticsReporter {
        DiagnosticsReporter::with_period(Duration::from_millis(DIAGNOSTICS_PERIOD_MS))
    }

    pub(crate) fn with_period(period: Duration) -> DiagnosticsReporter {
        DiagnosticsReporter {
            period,
            last_report: Instant::now(),
            counters: Diagnostics::default(),
        }
    }

    pub(crate) fn counters(&mut self) -> &mut Diagnostics {
        &mut self.counters
    }

    /// Logs and resets the counters once the period has elapsed. Returns the
    /// reported counters.
    pub(crate) fn report_if_due(&mut self, now: Instant) -> Option<Diagnostics> {
        if now.duration_since(self.last_report) < self.period {
            return None;
        }
        let c = std::mem::take(&mut self.counters);
        debug!(
            "{} bytes/sec, {} packets ({} rejected), {} samples ({} dropped)",
            c.bytes_received,
            c.frames_emitted,
            c.frames_rejected,
            c.samples_emitted,
            c.samples_dropped
        );
        self.last_report = now;
        Some(c)
    }
}
