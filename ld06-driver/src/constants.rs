pub(crate) const PACKET_HEADER: u8 = 0x54;
pub(crate) const PACKET_VERLEN: u8 = 0x2C;
pub(crate) const PACKET_SIZE: usize = 47;
pub(crate) const POINTS_PER_PACKET: usize = 12;
pub(crate) const POINT_SIZE: usize = 3;
pub(crate) const POINTS_OFFSET: usize = 6;
pub(crate) const SPEED_INDEX: usize = 2;
pub(crate) const START_ANGLE_INDEX: usize = 4;
pub(crate) const END_ANGLE_INDEX: usize = 42;
pub(crate) const TIMESTAMP_INDEX: usize = 44;
pub(crate) const CHECKSUM_INDEX: usize = PACKET_SIZE - 1;
// Minimum confidence is exclusive
pub(crate) const CONFIDENCE_THRESHOLD: u8 = 100;
// Angles are transmitted in 0.01 degree
pub(crate) const FULL_CIRCLE_CENTIDEGREE: u16 = 36000;
pub(crate) const MOTOR_DUTY: u8 = 255;
pub(crate) const MOTOR_SPIN_UP_MS: u64 = 500;
pub(crate) const DIAGNOSTICS_PERIOD_MS: u64 = 1000;
pub(crate) const SERIAL_TIMEOUT_MS: u64 = 10;
// About one second of retries at the 10 ms error delay
pub(crate) const MAX_CONSECUTIVE_READ_ERRORS: usize = 100;
pub(crate) const SAMPLE_CHANNEL_SIZE: usize = 2000;
