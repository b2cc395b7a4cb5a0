use std::sync::mpsc;

mod constants;
mod crc;
mod diagnostics;
mod driver_threads;
mod error;
mod framer;
mod motor;
mod numeric;
mod packet;
mod serial;
#[cfg(test)]
mod testing;
mod time;

use crate::constants::SAMPLE_CHANNEL_SIZE;
use crate::driver_threads::read_device_signal;
use crate::motor::spin_up;
use crate::serial::{flush, open_port};
use crossbeam_channel::bounded;
use ld06_data::{model_baud_rate, LidarModel, Sample};

pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::LD06Error;
pub use crate::framer::{Framer, Packet};
pub use crate::motor::{MotorControl, NoMotor};
pub use crate::packet::{decode, try_decode};

/// Function to launch the LD06 driver.
/// # Arguments
///
/// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
/// * `model` - Model
/// * `motor` - Output driving the motor PWM pin. Use `NoMotor` when it is not wired.
pub fn run_driver<M: MotorControl + ?Sized>(
    port_name: &str,
    model: LidarModel,
    motor: &mut M,
) -> Result<(DriverThreads, mpsc::Receiver<Sample>), LD06Error> {
    let baud_rate = model_baud_rate(model);
    let mut port = open_port(port_name, baud_rate)?;

    spin_up(motor);
    flush(&mut port)?;

    let (reader_terminator_tx, reader_terminator_rx) = bounded(10);
    let (sample_tx, sample_rx) = mpsc::sync_channel::<Sample>(SAMPLE_CHANNEL_SIZE);

    let reader_thread = Some(std::thread::spawn(move || {
        read_device_signal(&mut port, sample_tx, reader_terminator_rx);
    }));

    let driver_threads = DriverThreads {
        reader_terminator_tx,
        reader_thread,
    };

    Ok((driver_threads, sample_rx))
}
