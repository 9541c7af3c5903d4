pub mod cli;
pub mod params;
