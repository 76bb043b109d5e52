use static_assertions::assert_obj_safe;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// The media element the player is bound to.
///
/// Times are in seconds. Implementations are handles, so every method takes `&self`.
pub trait PlaybackSurface: Send + Sync + 'static {
	fn paused(&self) -> bool;
	fn play(&self);
	fn pause(&self);
	fn muted(&self) -> bool;
	fn set_muted(&self, muted: bool);
	fn set_volume(&self, volume: f64);
	fn current_time(&self) -> f64;
	fn set_current_time(&self, seconds: f64);
	/// `NaN` until the metadata has been loaded.
	fn duration(&self) -> f64;
}

/// Anything with a text label: buttons and time displays.
pub trait Label: Send + Sync + 'static {
	fn set_text(&self, text: &str);
}

/// Range input, used for the volume slider and the timeline.
pub trait Slider: Send + Sync + 'static {
	fn set_value(&self, value: f64);
	fn set_max(&self, max: f64);
}

pub trait ControlsPanel: Send + Sync + 'static {
	fn show(&self);
	fn hide(&self);
}

/// The element wrapping the surface and its controls.
pub trait VideoContainer: Send + Sync + 'static {
	/// Whether this container is the document's current fullscreen element.
	fn is_fullscreen(&self) -> bool;
	fn request_fullscreen(&self);
	fn exit_fullscreen(&self);
	/// Id of the video being watched, as carried by the container's data attribute.
	fn video_id(&self) -> Option<String>;
}

assert_obj_safe!(PlaybackSurface);
assert_obj_safe!(Label);
assert_obj_safe!(Slider);
assert_obj_safe!(ControlsPanel);
assert_obj_safe!(VideoContainer);

/// Names the elements a player needs, displayed as their ids on the watch page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
	Surface,
	PlayButton,
	MuteButton,
	VolumeSlider,
	Timeline,
	FullscreenButton,
	CurrentTime,
	TotalTime,
	Controls,
	Container,
}

impl Display for Element {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		use Element::*;
		let id = match self {
			Surface => "video",
			PlayButton => "play",
			MuteButton => "mute",
			VolumeSlider => "volume",
			Timeline => "timeline",
			FullscreenButton => "fullScreen",
			CurrentTime => "currentTime",
			TotalTime => "totalTime",
			Controls => "videoControls",
			Container => "videoContainer",
		};
		formatter.write_str(id)
	}
}

/// Element handles as discovered by the host. Every one of them is required, which is checked
/// when a [`PlaybackUiController`](crate::PlaybackUiController) is created from them.
#[derive(Clone, Default)]
pub struct PlayerElements {
	pub surface: Option<Arc<dyn PlaybackSurface>>,
	pub play_button: Option<Arc<dyn Label>>,
	pub mute_button: Option<Arc<dyn Label>>,
	pub volume_slider: Option<Arc<dyn Slider>>,
	pub timeline: Option<Arc<dyn Slider>>,
	pub fullscreen_button: Option<Arc<dyn Label>>,
	pub current_time: Option<Arc<dyn Label>>,
	pub total_time: Option<Arc<dyn Label>>,
	pub controls: Option<Arc<dyn ControlsPanel>>,
	pub container: Option<Arc<dyn VideoContainer>>,
}

impl PlayerElements {
	#[must_use]
	pub fn with_surface(mut self, surface: Arc<dyn PlaybackSurface>) -> Self {
		self.surface = Some(surface);
		self
	}

	#[must_use]
	pub fn with_play_button(mut self, play_button: Arc<dyn Label>) -> Self {
		self.play_button = Some(play_button);
		self
	}

	#[must_use]
	pub fn with_mute_button(mut self, mute_button: Arc<dyn Label>) -> Self {
		self.mute_button = Some(mute_button);
		self
	}

	#[must_use]
	pub fn with_volume_slider(mut self, volume_slider: Arc<dyn Slider>) -> Self {
		self.volume_slider = Some(volume_slider);
		self
	}

	#[must_use]
	pub fn with_timeline(mut self, timeline: Arc<dyn Slider>) -> Self {
		self.timeline = Some(timeline);
		self
	}

	#[must_use]
	pub fn with_fullscreen_button(mut self, fullscreen_button: Arc<dyn Label>) -> Self {
		self.fullscreen_button = Some(fullscreen_button);
		self
	}

	#[must_use]
	pub fn with_current_time(mut self, current_time: Arc<dyn Label>) -> Self {
		self.current_time = Some(current_time);
		self
	}

	#[must_use]
	pub fn with_total_time(mut self, total_time: Arc<dyn Label>) -> Self {
		self.total_time = Some(total_time);
		self
	}

	#[must_use]
	pub fn with_controls(mut self, controls: Arc<dyn ControlsPanel>) -> Self {
		self.controls = Some(controls);
		self
	}

	#[must_use]
	pub fn with_container(mut self, container: Arc<dyn VideoContainer>) -> Self {
		self.container = Some(container);
		self
	}
}
