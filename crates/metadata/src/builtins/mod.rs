//! Built-in key declarations, grouped by camera subsystem.

pub mod color_correction;
pub mod control;
pub mod flash;
pub mod info;
pub mod led;
pub mod lens;
pub mod noise_reduction;
pub mod scaler;
pub mod sensor;
pub mod statistics;
pub mod tonemap;
