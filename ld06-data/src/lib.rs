pub mod lidar_models;
pub mod sample;

pub use lidar_models::{model_baud_rate, LidarModel};
pub use sample::{ParseSampleError, Sample};
