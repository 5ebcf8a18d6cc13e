mod region;

pub use region::{Region, RegionError};

#[cfg(test)]
mod tests;
