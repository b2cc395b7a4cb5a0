/// Little-endian u16 from the low and high byte.
pub(crate) fn to_u16(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) + (low as u16)
}

pub(crate) fn centidegree_to_degree(angle: f64) -> f64 {
    angle / 100.
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}
