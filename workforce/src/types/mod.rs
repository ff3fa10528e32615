pub mod params;
pub mod worker;
