use tracing::debug;

use super::device::{DeviceError, Swipe, SwipeDevice};

/// Keeps every swipe in memory instead of touching a screen.
#[derive(Debug, Default, Clone)]
pub struct DryRunDevice {
    swipes: Vec<Swipe>,
}

impl DryRunDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swipes(&self) -> &[Swipe] {
        &self.swipes
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.swipes.iter().map(|s| s.duration_ms as u64).sum()
    }
}

impl SwipeDevice for DryRunDevice {
    fn send_swipe(&mut self, swipe: &Swipe) -> Result<(), DeviceError> {
        debug!(%swipe, "dry run");
        self.swipes.push(*swipe);
        Ok(())
    }
}
