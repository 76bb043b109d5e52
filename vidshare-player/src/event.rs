use crate::controller::PlaybackUiController;
use tokio::sync::mpsc;
use tracing::debug;

/// Everything the player reacts to, as delivered by the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerEvent {
	/// Click on the play/pause button.
	PlayClicked,
	/// The surface started playing.
	Play,
	/// The surface paused.
	Pause,
	MuteClicked,
	/// Input on the volume slider.
	VolumeInput(f64),
	LoadedMetadata,
	TimeUpdate,
	/// Input on the timeline, in seconds.
	TimelineInput(f64),
	FullscreenClicked,
	PointerMove,
	PointerLeave,
	/// Playback reached the end of the video.
	Ended,
}

impl PlaybackUiController {
	pub fn handle_event(&mut self, event: PlayerEvent) {
		use PlayerEvent::*;
		match event {
			PlayClicked => self.toggle_play(),
			Play => self.on_play(),
			Pause => self.on_pause(),
			MuteClicked => self.toggle_mute(),
			VolumeInput(value) => self.set_volume(value),
			LoadedMetadata => self.on_metadata_ready(),
			TimeUpdate => self.on_position_changed(),
			TimelineInput(value) => self.on_scrubber_input(value),
			FullscreenClicked => self.toggle_fullscreen(),
			PointerMove => self.on_pointer_move(),
			PointerLeave => self.on_pointer_leave(),
			Ended => self.on_playback_ended(),
		}
	}
}

/// Runs the page's event loop: events are handled one at a time, in order, until every sender
/// is gone. The controller is dropped afterwards, which cancels its pending timers.
pub async fn run_event_loop(mut controller: PlaybackUiController, mut events: mpsc::UnboundedReceiver<PlayerEvent>) {
	while let Some(event) = events.recv().await {
		controller.handle_event(event);
	}
	debug!("Player event source closed, tearing down the controller.");
}
