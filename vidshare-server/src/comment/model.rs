use crate::video::model::VideoId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Deref,
	derive_more::Display,
	Serialize,
	Deserialize,
	Debug,
	Clone,
	PartialEq,
	Eq,
	Hash,
)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
	pub fn new_v4() -> Self {
		Self(uuid::Uuid::new_v4().to_string())
	}
}

impl From<&str> for CommentId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
	pub id: CommentId,
	pub video_id: VideoId,
	pub username: String,
	pub text: String,
	pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewComment {
	pub video_id: VideoId,
	pub username: String,
	pub text: String,
}
