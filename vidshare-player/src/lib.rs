//! Presentation controller for the watch page video player.
//!
//! The controller mirrors the state of a media surface into a fixed set of controls and turns
//! user gestures into playback commands. All rendering and decoding stays with the host; the
//! controller only talks to it through the traits in [`element`].

pub mod controller;
pub mod element;
pub mod error;
pub mod event;
pub mod settings;
pub mod time_format;
pub mod view_reporter;


pub use controller::PlaybackUiController;
pub use element::{ControlsPanel, Element, Label, PlaybackSurface, PlayerElements, Slider, VideoContainer};
pub use error::PlayerError;
pub use event::{PlayerEvent, run_event_loop};
pub use settings::PlayerSettings;
pub use time_format::format_time;
pub use view_reporter::{HttpViewReporter, ViewReportError, ViewReporter};
