use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose section reveal logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Number of floating particles behind the hero.
pub const PARTICLE_COUNT: usize = 20;

/// Share of a section that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Mount-triggered sections flip after one frame so the hidden state gets painted first.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 20;

pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
