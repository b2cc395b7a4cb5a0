use crate::constants::{MOTOR_DUTY, MOTOR_SPIN_UP_MS};
use crate::error::LD06Error;
use crate::time::sleep_ms;
use log::{info, warn};

/// Output driving the PWM pin of the sensor motor.
pub trait MotorControl {
    /// Sets the PWM duty cycle, 0 (stopped) to 255 (full speed).
    fn set_duty(&mut self, duty: u8) -> Result<(), LD06Error>;
}

/// For sensors whose PWM pin is left unconnected. The LD06 then regulates its
/// own rotation speed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMotor;

impl MotorControl for NoMotor {
    fn set_duty(&mut self, _duty: u8) -> Result<(), LD06Error> {
        Ok(())
    }
}

/// Issues the one-time spin-up command and waits for the motor to settle.
/// A failure is logged and otherwise ignored: the sensor streams packets
/// regardless of the PWM input.
pub(crate) fn spin_up<M: MotorControl + ?Sized>(motor: &mut M) {
    match motor.set_duty(MOTOR_DUTY) {
        Ok(()) => info!("Motor started with duty {}", MOTOR_DUTY),
        Err(e) => warn!("{e}"),
    }
    sleep_ms(MOTOR_SPIN_UP_MS);
}
