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
	PartialOrd,
	Ord,
)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
	pub fn new_v4() -> Self {
		Self(uuid::Uuid::new_v4().to_string())
	}
}

impl From<&str> for VideoId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
	pub id: VideoId,
	pub title: String,
	pub description: String,
	pub hashtags: Vec<String>,
	pub file_url: String,
	pub created_at: DateTime<Utc>,
	pub views: u64,
}

/// Everything needed to create a [`Video`], hashtags still as raw user input.
#[derive(Clone, Debug, Default)]
pub struct NewVideo {
	pub title: String,
	pub description: String,
	pub hashtags: String,
	pub file_url: String,
}

#[derive(Clone, Debug, Default)]
pub struct VideoUpdate {
	pub title: String,
	pub description: String,
	pub hashtags: String,
}
