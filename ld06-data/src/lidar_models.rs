#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensors speaking the 47-byte LD06 scan protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LidarModel {
    LD06,
    LD19,
}

pub fn model_baud_rate(model: LidarModel) -> u32 {
    match model {
        LidarModel::LD06 | LidarModel::LD19 => 230_400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_baud_rate() {
        assert_eq!(model_baud_rate(LidarModel::LD06), 230_400);
        assert_eq!(model_baud_rate(LidarModel::LD19), 230_400);
    }
}
