#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One calibrated measurement decoded from a scan packet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Scan angle in degree, in the range [0, 360).
    pub angle_degree: f64,
    /// Distance to an object in mm.
    pub distance: u16,
    /// Return strength of the laser pulse.
    pub confidence: u8,
}

/// Renders the text record `angle,distance,confidence` with the angle
/// rounded to two decimals, e.g. `12.34,1500,210`.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:.2},{},{}",
            self.angle_degree, self.distance, self.confidence
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseSampleError {
    FieldCount(usize),
    InvalidAngle(String),
    InvalidDistance(String),
    InvalidConfidence(String),
}

impl fmt::Display for ParseSampleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseSampleError::FieldCount(n) => {
                write!(f, "Sample record must have 3 fields. Actually {} fields.", n)
            }
            ParseSampleError::InvalidAngle(s) => write!(f, "Invalid angle \"{}\".", s),
            ParseSampleError::InvalidDistance(s) => write!(f, "Invalid distance \"{}\".", s),
            ParseSampleError::InvalidConfidence(s) => write!(f, "Invalid confidence \"{}\".", s),
        }
    }
}

impl Error for ParseSampleError {}

impl FromStr for Sample {
    type Err = ParseSampleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ParseSampleError::FieldCount(fields.len()));
        }
        let angle_degree = fields[0]
            .parse::<f64>()
            .map_err(|_| ParseSampleError::InvalidAngle(fields[0].to_string()))?;
        let distance = fields[1]
            .parse::<u16>()
            .map_err(|_| ParseSampleError::InvalidDistance(fields[1].to_string()))?;
        let confidence = fields[2]
            .parse::<u8>()
            .map_err(|_| ParseSampleError::InvalidConfidence(fields[2].to_string()))?;
        Ok(Sample {
            angle_degree,
            distance,
            confidence,
        })
    }
}
