use crate::comment::repository::SharedCommentRepository;
use crate::configuration::Configuration;
use crate::video::repository::SharedVideoRepository;
use axum::extract::FromRef;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub video_repository: SharedVideoRepository,
	pub comment_repository: SharedCommentRepository,
}

impl ApplicationContext {
	pub fn new(configuration: Configuration) -> ApplicationContext {
		Self {
			configuration,
			video_repository: Default::default(),
			comment_repository: Default::default(),
		}
	}
}
