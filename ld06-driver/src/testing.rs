use crate::constants::{
    CHECKSUM_INDEX, END_ANGLE_INDEX, PACKET_HEADER, PACKET_SIZE, PACKET_VERLEN, POINTS_OFFSET,
    POINTS_PER_PACKET, POINT_SIZE, SPEED_INDEX, START_ANGLE_INDEX, TIMESTAMP_INDEX,
};
use crate::crc::calc_crc;
use crate::framer::Packet;

pub(crate) fn uniform_points(distance: u16, confidence: u8) -> [(u16, u8); POINTS_PER_PACKET] {
    [(distance, confidence); POINTS_PER_PACKET]
}

/// Builds a well-formed packet with a correct trailing checksum.
pub(crate) fn make_packet(
    start_angle: u16,
    end_angle: u16,
    points: &[(u16, u8); POINTS_PER_PACKET],
) -> Packet {
    let mut packet = [0u8; PACKET_SIZE];
    packet[0] = PACKET_HEADER;
    packet[1] = PACKET_VERLEN;
    // 3600 degree/s, i.e. 10 Hz
    packet[SPEED_INDEX..SPEED_INDEX + 2].copy_from_slice(&3600u16.to_le_bytes());
    packet[START_ANGLE_INDEX..START_ANGLE_INDEX + 2].copy_from_slice(&start_angle.to_le_bytes());
    for (i, (distance, confidence)) in points.iter().enumerate() {
        let offset = POINTS_OFFSET + i * POINT_SIZE;
        packet[offset..offset + 2].copy_from_slice(&distance.to_le_bytes());
        packet[offset + 2] = *confidence;
    }
    packet[END_ANGLE_INDEX..END_ANGLE_INDEX + 2].copy_from_slice(&end_angle.to_le_bytes());
    packet[TIMESTAMP_INDEX..TIMESTAMP_INDEX + 2].copy_from_slice(&12345u16.to_le_bytes());
    packet[CHECKSUM_INDEX] = calc_crc(&packet[..CHECKSUM_INDEX]);
    packet
}
