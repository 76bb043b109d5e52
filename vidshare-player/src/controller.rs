use crate::element::{ControlsPanel, Element, Label, PlaybackSurface, PlayerElements, Slider, VideoContainer};
use crate::error::PlayerError;
use crate::settings::PlayerSettings;
use crate::time_format::format_time;
use crate::view_reporter::ViewReporter;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

pub const PLAY_LABEL: &str = "Play";
pub const PAUSE_LABEL: &str = "Pause";
pub const ENTER_FULLSCREEN_LABEL: &str = "Enter Full Screen⭐️";
pub const EXIT_FULLSCREEN_LABEL: &str = "Exit Full Screen⭐️";

/// Keeps the player controls of one watch page in sync with its media surface.
///
/// Play/pause and mute state are read from the surface, never cached. The controller itself
/// owns the last volume chosen on the slider and the two pending hide timers. Timers and view
/// reports are tokio tasks, so the controller has to live inside a tokio runtime. Dropping it
/// cancels pending timers but not view reports that are already in flight.
pub struct PlaybackUiController {
	surface: Arc<dyn PlaybackSurface>,
	play_button: Arc<dyn Label>,
	volume_slider: Arc<dyn Slider>,
	timeline: Arc<dyn Slider>,
	fullscreen_button: Arc<dyn Label>,
	current_time: Arc<dyn Label>,
	total_time: Arc<dyn Label>,
	controls: Arc<dyn ControlsPanel>,
	container: Arc<dyn VideoContainer>,
	view_reporter: Arc<dyn ViewReporter>,
	settings: PlayerSettings,
	volume_value: f64,
	idle_hide: Option<AbortHandle>,
	leave_hide: Option<AbortHandle>,
}

impl PlaybackUiController {
	pub fn new(
		elements: PlayerElements,
		settings: PlayerSettings,
		view_reporter: Arc<dyn ViewReporter>,
	) -> Result<Self, PlayerError> {
		let PlayerElements {
			surface,
			play_button,
			mute_button,
			volume_slider,
			timeline,
			fullscreen_button,
			current_time,
			total_time,
			controls,
			container,
		} = elements;

		let surface = require(surface, Element::Surface)?;
		let play_button = require(play_button, Element::PlayButton)?;
		// Mute clicks arrive as events; the button itself is never written to.
		require(mute_button, Element::MuteButton)?;

		let controller = Self {
			surface,
			play_button,
			volume_slider: require(volume_slider, Element::VolumeSlider)?,
			timeline: require(timeline, Element::Timeline)?,
			fullscreen_button: require(fullscreen_button, Element::FullscreenButton)?,
			current_time: require(current_time, Element::CurrentTime)?,
			total_time: require(total_time, Element::TotalTime)?,
			controls: require(controls, Element::Controls)?,
			container: require(container, Element::Container)?,
			view_reporter,
			settings,
			volume_value: settings.initial_volume,
			idle_hide: None,
			leave_hide: None,
		};
		controller.surface.set_volume(controller.volume_value);

		Ok(controller)
	}

	/// Last volume chosen on the slider, restored when unmuting.
	pub fn volume_value(&self) -> f64 {
		self.volume_value
	}

	pub fn toggle_play(&self) {
		if self.surface.paused() {
			self.surface.play();
			self.play_button.set_text(PAUSE_LABEL);
		} else {
			self.surface.pause();
			self.play_button.set_text(PLAY_LABEL);
		}
	}

	/// The surface started playing, possibly without the play button being involved.
	pub fn on_play(&self) {
		self.play_button.set_text(PAUSE_LABEL);
	}

	/// The surface paused, e.g. because a platform pauses on leaving fullscreen.
	pub fn on_pause(&self) {
		self.play_button.set_text(PLAY_LABEL);
	}

	/// Flips the muted flag. The surface volume stays untouched, only the slider shows 0 while muted.
	pub fn toggle_mute(&self) {
		if self.surface.muted() {
			self.surface.set_muted(false);
			self.volume_slider.set_value(self.volume_value);
		} else {
			self.surface.set_muted(true);
			self.volume_slider.set_value(0.0);
		}
	}

	pub fn set_volume(&mut self, new_value: f64) {
		// Sliders never produce negative values, this only guards against out of range input.
		// Zero does not mute.
		self.surface.set_muted(new_value < 0.0);
		self.volume_value = new_value;
		self.surface.set_volume(new_value);
	}

	pub fn on_metadata_ready(&self) {
		let duration = self.surface.duration();
		self.total_time.set_text(&format_time(duration));
		self.timeline.set_max(duration);
	}

	pub fn on_position_changed(&self) {
		let position = self.surface.current_time();
		self.current_time.set_text(&format_time(position));
		self.timeline.set_value(position.floor());
	}

	/// Seeks to exactly `value`, the timeline's max is the only bound.
	pub fn on_scrubber_input(&self, value: f64) {
		self.surface.set_current_time(value);
	}

	pub fn toggle_fullscreen(&self) {
		if self.container.is_fullscreen() {
			self.container.exit_fullscreen();
			self.fullscreen_button.set_text(ENTER_FULLSCREEN_LABEL);
		} else {
			self.container.request_fullscreen();
			self.fullscreen_button.set_text(EXIT_FULLSCREEN_LABEL);
		}
	}

	pub fn on_pointer_move(&mut self) {
		if let Some(leave_hide) = self.leave_hide.take() {
			leave_hide.abort();
		}
		if let Some(idle_hide) = self.idle_hide.take() {
			idle_hide.abort();
		}

		self.controls.show();
		self.idle_hide = Some(self.schedule_hide(self.settings.idle_hide_delay));
	}

	/// Schedules hiding the controls. A pending idle hide keeps running.
	pub fn on_pointer_leave(&mut self) {
		let leave_hide = self.schedule_hide(self.settings.leave_hide_delay);
		if let Some(superseded) = self.leave_hide.replace(leave_hide) {
			superseded.abort();
		}
	}

	/// Reports one view for the video in the container.
	///
	/// The id is read at call time. The report runs detached: it is neither retried nor cancelled
	/// and its failure is only logged. Every call reports, there is no deduplication.
	pub fn on_playback_ended(&self) {
		let Some(video_id) = self.container.video_id() else {
			warn!("Playback ended, but the video container has no video id. Not reporting the view.");
			return;
		};

		let view_reporter = Arc::clone(&self.view_reporter);
		tokio::spawn(async move {
			match view_reporter.report_view(&video_id).await {
				Ok(()) => debug!("Reported view of video '{video_id}'."),
				Err(error) => debug!("Failed to report view of video '{video_id}': {error}"),
			}
		});
	}

	fn schedule_hide(&self, delay: Duration) -> AbortHandle {
		let controls = Arc::clone(&self.controls);
		tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			controls.hide();
		})
		.abort_handle()
	}
}

impl Drop for PlaybackUiController {
	fn drop(&mut self) {
		for timer in [self.idle_hide.take(), self.leave_hide.take()].into_iter().flatten() {
			timer.abort();
		}
	}
}

fn require<T: ?Sized>(element: Option<Arc<T>>, which: Element) -> Result<Arc<T>, PlayerError> {
	element.ok_or(PlayerError::MissingElement(which))
}
