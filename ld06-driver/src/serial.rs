use crate::constants::SERIAL_TIMEOUT_MS;
use crate::error::LD06Error;
use serialport::SerialPort;
use std::io::Read;
use std::time::Duration;

pub(crate) fn open_port(port_name: &str, baud_rate: u32) -> Result<Box<dyn SerialPort>, LD06Error> {
    let port = serialport::new(port_name, baud_rate)
        .timeout(Duration::from_millis(SERIAL_TIMEOUT_MS))
        .open()?;
    Ok(port)
}

pub(crate) fn get_n_read(port: &mut Box<dyn SerialPort>) -> Result<usize, LD06Error> {
    let n_u32: u32 = port.bytes_to_read()?;
    Ok(n_u32.try_into().unwrap_or(0))
}

/// Discards bytes received before the driver started.
pub(crate) fn flush(port: &mut Box<dyn SerialPort>) -> Result<(), LD06Error> {
    let n_read: usize = get_n_read(port).unwrap_or(0);
    if n_read == 0 {
        return Ok(());
    }
    let mut stale: Vec<u8> = vec![0; n_read];
    port.read_exact(stale.as_mut_slice())?;
    Ok(())
}

/// Reads whatever the port has buffered. Returns an empty vector when no
/// byte is available.
pub(crate) fn read_available(port: &mut Box<dyn SerialPort>) -> Result<Vec<u8>, LD06Error> {
    let n_read: usize = get_n_read(port)?;
    if n_read == 0 {
        return Ok(Vec::new());
    }
    let mut data: Vec<u8> = vec![0; n_read];
    let n = port.read(data.as_mut_slice())?;
    data.truncate(n);
    Ok(data)
}
