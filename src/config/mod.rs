mod file;
mod store;

pub use file::{Bounds, ConfigFile, Cutoff, Settings};
pub use store::{ConfigError, ConfigStore, DEFAULT_FILE, Profile, USER_FILE};

#[cfg(test)]
mod tests;
