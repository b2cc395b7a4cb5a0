use crate::constants::MAX_CONSECUTIVE_READ_ERRORS;
use crate::diagnostics::{Diagnostics, DiagnosticsReporter};
use crate::error::LD06Error;
use crate::framer::Framer;
use crate::packet::{speed, timestamp, try_decode};
use crate::serial::read_available;
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, Sender};
use crossbeam_utils::Backoff;
use ld06_data::Sample;
use log::{error, trace, warn};
use serialport::SerialPort;
use std::sync::mpsc::{self, TrySendError};
use std::thread::JoinHandle;
use std::time::Instant;

/// Struct that contains driver threads.
pub struct DriverThreads {
    pub(crate) reader_terminator_tx: Sender<bool>,
    pub(crate) reader_thread: Option<JoinHandle<()>>,
}

/// Consecutive read failures of the port. Only the first failure of a run is
/// logged; the reader gives up once `limit` failures follow each other.
pub(crate) struct ReadErrors {
    consecutive: usize,
    limit: usize,
}

impl ReadErrors {
    pub(crate) fn new(limit: usize) -> ReadErrors {
        ReadErrors {
            consecutive: 0,
            limit,
        }
    }

    /// Returns `false` when the reader should stop.
    pub(crate) fn record(&mut self, err: &LD06Error) -> bool {
        self.consecutive += 1;
        if self.consecutive == 1 {
            warn!("Failed to read the serial port: {err}");
        }
        if self.consecutive >= self.limit {
            error!(
                "Serial port failed {} times in a row. Last error: {err}",
                self.consecutive
            );
            return false;
        }
        true
    }

    pub(crate) fn reset(&mut self) {
        if self.consecutive > 1 {
            warn!("Serial port recovered after {} failed reads", self.consecutive);
        }
        self.consecutive = 0;
    }
}

/// Reader loop. Owns the framer; decoded samples are the only data leaving
/// this thread.
pub(crate) fn read_device_signal(
    port: &mut Box<dyn SerialPort>,
    sample_tx: mpsc::SyncSender<Sample>,
    reader_terminator_rx: Receiver<bool>,
) {
    let mut framer = Framer::new();
    let mut reporter = DiagnosticsReporter::new();
    let backoff = Backoff::new();
    let mut read_errors = ReadErrors::new(MAX_CONSECUTIVE_READ_ERRORS);
    loop {
        if do_terminate(&reader_terminator_rx) {
            return;
        }
        reporter.report_if_due(Instant::now());

        let signal = match read_available(port) {
            Ok(signal) => signal,
            Err(e) => {
                if !read_errors.record(&e) {
                    return;
                }
                sleep_ms(10);
                continue;
            }
        };
        read_errors.reset();

        if signal.is_empty() {
            if backoff.is_completed() {
                sleep_ms(1);
            } else {
                backoff.snooze();
            }
            continue;
        }
        backoff.reset();

        if !process_signal(&mut framer, &signal, &sample_tx, reporter.counters()) {
            trace!("Sample receiver is gone. Stopping the reader.");
            return;
        }
    }
}

/// Frames and decodes `signal`, forwarding every sample. Returns `false` once
/// the receiving side has been dropped.
pub(crate) fn process_signal(
    framer: &mut Framer,
    signal: &[u8],
    sample_tx: &mpsc::SyncSender<Sample>,
    counters: &mut Diagnostics,
) -> bool {
    counters.bytes_received += signal.len();
    for packet in framer.frames(signal.iter().copied()) {
        counters.frames_emitted += 1;
        let samples = match try_decode(&packet) {
            Ok(samples) => samples,
            Err(e) => {
                counters.frames_rejected += 1;
                trace!("Packet dropped. {e}");
                continue;
            }
        };
        trace!(
            "Packet at {} ms, {} degree/s, {} samples",
            timestamp(&packet),
            speed(&packet),
            samples.len()
        );
        for sample in samples {
            match sample_tx.try_send(sample) {
                Ok(()) => counters.samples_emitted += 1,
                Err(TrySendError::Full(_)) => counters.samples_dropped += 1,
                Err(TrySendError::Disconnected(_)) => return false,
            }
        }
    }
    true
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join driver threads.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    // The reader may already have stopped on its own
    let _ = driver_threads.reader_terminator_tx.send(true);

    if let Some(thread) = driver_threads.reader_thread.take() {
        if thread.join().is_err() {
            error!("Reader thread panicked");
        }
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_packet, uniform_points};

    #[test]
    fn test_process_signal() {
        let (sample_tx, sample_rx) = mpsc::sync_channel::<Sample>(100);
        let mut framer = Framer::new();
        let mut counters = Diagnostics::default();

        let good = make_packet(0, 1000, &uniform_points(2000, 200));
        let mut bad = make_packet(1000, 2000, &uniform_points(2000, 200));
        bad[46] ^= 0x01;

        let mut signal = vec![0x54, 0x99];
        signal.extend_from_slice(&bad);
        signal.extend_from_slice(&good);

        // Packets split across reads are reassembled
        assert!(process_signal(&mut framer, &signal[..30], &sample_tx, &mut counters));
        assert!(process_signal(&mut framer, &signal[30..], &sample_tx, &mut counters));

        let samples = sample_rx.try_iter().collect::<Vec<_>>();
        assert_eq!(samples.len(), 12);
        assert_eq!(samples[0].to_string(), "0.00,2000,200");

        assert_eq!(counters.bytes_received, signal.len());
        assert_eq!(counters.frames_emitted, 2);
        assert_eq!(counters.frames_rejected, 1);
        assert_eq!(counters.samples_emitted, 12);
        assert_eq!(counters.samples_dropped, 0);
    }

    #[test]
    fn test_process_signal_drops_when_receiver_is_full() {
        let (sample_tx, sample_rx) = mpsc::sync_channel::<Sample>(5);
        let mut framer = Framer::new();
        let mut counters = Diagnostics::default();

        let packet = make_packet(0, 1000, &uniform_points(2000, 200));
        assert!(process_signal(&mut framer, &packet, &sample_tx, &mut counters));

        assert_eq!(sample_rx.try_iter().count(), 5);
        assert_eq!(counters.samples_emitted, 5);
        assert_eq!(counters.samples_dropped, 7);
    }

    #[test]
    fn test_process_signal_stops_when_receiver_is_dropped() {
        let (sample_tx, sample_rx) = mpsc::sync_channel::<Sample>(5);
        drop(sample_rx);
        let mut framer = Framer::new();
        let mut counters = Diagnostics::default();

        let packet = make_packet(0, 1000, &uniform_points(2000, 200));
        assert!(!process_signal(&mut framer, &packet, &sample_tx, &mut counters));
    }

    #[test]
    fn test_read_errors_stop_after_limit() {
        let mut read_errors = ReadErrors::new(3);
        let err = || LD06Error::IoError(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(read_errors.record(&err()));
        assert!(read_errors.record(&err()));
        assert!(!read_errors.record(&err()));
    }

    #[test]
    fn test_read_errors_reset_on_success() {
        let mut read_errors = ReadErrors::new(3);
        let err = || LD06Error::IoError(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(read_errors.record(&err()));
        assert!(read_errors.record(&err()));
        read_errors.reset();
        assert!(read_errors.record(&err()));
        assert!(read_errors.record(&err()));
        assert!(!read_errors.record(&err()));
    }

    #[test]
    fn test_do_terminate() {
        let (tx, rx) = crossbeam_channel::bounded(10);
        assert!(!do_terminate(&rx));
        tx.send(true).unwrap();
        assert!(do_terminate(&rx));
    }
}
