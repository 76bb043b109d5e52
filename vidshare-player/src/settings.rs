use std::time::Duration;

pub const DEFAULT_INITIAL_VOLUME: f64 = 0.5;
/// Controls hide after this long without pointer movement.
pub const DEFAULT_IDLE_HIDE_DELAY: Duration = Duration::from_millis(3000);
/// Controls hide this long after the pointer left the video.
pub const DEFAULT_LEAVE_HIDE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSettings {
	pub initial_volume: f64,
	pub idle_hide_delay: Duration,
	pub leave_hide_delay: Duration,
}

impl Default for PlayerSettings {
	fn default() -> Self {
		Self {
			initial_volume: DEFAULT_INITIAL_VOLUME,
			idle_hide_delay: DEFAULT_IDLE_HIDE_DELAY,
			leave_hide_delay: DEFAULT_LEAVE_HIDE_DELAY,
		}
	}
}
