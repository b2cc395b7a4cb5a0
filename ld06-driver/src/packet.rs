use crate::constants::{
    CHECKSUM_INDEX, CONFIDENCE_THRESHOLD, END_ANGLE_INDEX, FULL_CIRCLE_CENTIDEGREE, PACKET_HEADER,
    PACKET_SIZE, PACKET_VERLEN, POINTS_OFFSET, POINTS_PER_PACKET, POINT_SIZE, SPEED_INDEX,
    START_ANGLE_INDEX, TIMESTAMP_INDEX,
};
use crate::crc::calc_crc;
use crate::error::LD06Error;
use crate::numeric::{centidegree_to_degree, to_string, to_u16};
use ld06_data::Sample;

pub(crate) fn validate_packet(packet: &[u8]) -> Result<(), LD06Error> {
    if packet.len() != PACKET_SIZE {
        return Err(LD06Error::InvalidPacketLength(packet.len()));
    }
    if packet[0..2] != [PACKET_HEADER, PACKET_VERLEN] {
        return Err(LD06Error::InvalidMagicNumber(to_string(&packet[0..2])));
    }
    Ok(())
}

pub(crate) fn err_if_checksum_mismatched(packet: &[u8]) -> Result<(), LD06Error> {
    let calculated = calc_crc(&packet[..CHECKSUM_INDEX]);
    let expected = packet[CHECKSUM_INDEX];
    if calculated != expected {
        return Err(LD06Error::ChecksumMismatch(expected, calculated));
    }
    Ok(())
}

/// Rotation speed in degree per second.
pub(crate) fn speed(packet: &[u8]) -> u16 {
    to_u16(packet[SPEED_INDEX], packet[SPEED_INDEX + 1])
}

/// Sensor timestamp in ms. Wraps around at 30000.
pub(crate) fn timestamp(packet: &[u8]) -> u16 {
    to_u16(packet[TIMESTAMP_INDEX], packet[TIMESTAMP_INDEX + 1])
}

pub(crate) fn start_angle(packet: &[u8]) -> u16 {
    to_u16(packet[START_ANGLE_INDEX], packet[START_ANGLE_INDEX + 1])
}

pub(crate) fn end_angle(packet: &[u8]) -> u16 {
    to_u16(packet[END_ANGLE_INDEX], packet[END_ANGLE_INDEX + 1])
}

/// Angular distance between two consecutive points, in 0.01 degree.
/// A packet whose end angle is below its start angle crossed 0 degree.
pub(crate) fn angle_step(start_angle: u16, end_angle: u16) -> f64 {
    let (start, end) = (start_angle as f64, end_angle as f64);
    let angle_diff = if end_angle >= start_angle {
        end - start
    } else {
        FULL_CIRCLE_CENTIDEGREE as f64 - start + end
    };
    angle_diff / ((POINTS_PER_PACKET - 1) as f64)
}

/// Angle of the `index`-th point in degree, in [0, 360).
pub(crate) fn point_angle(start_angle: u16, angle_step: f64, index: usize) -> f64 {
    let angle_degree = centidegree_to_degree(start_angle as f64 + angle_step * (index as f64));
    if angle_degree >= 360. {
        angle_degree - 360.
    } else {
        angle_degree
    }
}

fn point_index(idx: usize) -> usize {
    POINTS_OFFSET + idx * POINT_SIZE
}

fn is_valid_point(distance: u16, confidence: u8) -> bool {
    distance > 0 && confidence > CONFIDENCE_THRESHOLD
}

/// Validates `packet` and converts its points into samples, reporting why a
/// packet was rejected.
pub fn try_decode(packet: &[u8]) -> Result<Vec<Sample>, LD06Error> {
    validate_packet(packet)?;
    err_if_checksum_mismatched(packet)?;

    let start_angle = start_angle(packet);
    let angle_step = angle_step(start_angle, end_angle(packet));

    let samples = (0..POINTS_PER_PACKET)
        .filter_map(|i| {
            let offset = point_index(i);
            let distance = to_u16(packet[offset], packet[offset + 1]);
            let confidence = packet[offset + 2];
            if !is_valid_point(distance, confidence) {
                return None;
            }
            Some(Sample {
                angle_degree: point_angle(start_angle, angle_step, i),
                distance,
                confidence,
            })
        })
        .collect();
    Ok(samples)
}

/// Converts a candidate packet into samples.
///
/// A packet with a wrong header or checksum produces no sample. Points with
/// zero distance or a confidence of 100 or below are skipped.
pub fn decode(packet: &[u8]) -> Vec<Sample> {
    try_decode(packet).unwrap_or_default()
}
