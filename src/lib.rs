pub mod config;
pub mod error;
pub mod io;
pub mod matrices;
pub mod params;
pub mod q15;
pub mod report;
pub mod samples;
