use crate::comment::model::{Comment, CommentId, NewComment};
use crate::video::model::{NewVideo, Video, VideoId, VideoUpdate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateVideoRequest {
	pub title: String,
	#[serde(default)]
	pub description: String,
	/// Comma separated, `#` is optional.
	#[serde(default)]
	pub hashtags: String,
	pub file_url: String,
}

impl From<CreateVideoRequest> for NewVideo {
	fn from(request: CreateVideoRequest) -> Self {
		let CreateVideoRequest {
			title,
			description,
			hashtags,
			file_url,
		} = request;
		NewVideo {
			title,
			description,
			hashtags,
			file_url,
		}
	}
}

#[derive(Deserialize)]
pub struct UpdateVideoRequest {
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub hashtags: String,
}

impl From<UpdateVideoRequest> for VideoUpdate {
	fn from(request: UpdateVideoRequest) -> Self {
		let UpdateVideoRequest {
			title,
			description,
			hashtags,
		} = request;
		VideoUpdate {
			title,
			description,
			hashtags,
		}
	}
}

#[derive(Deserialize)]
pub struct SearchQuery {
	pub keyword: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct VideoResponse {
	pub id: VideoId,
	pub title: String,
	pub description: String,
	pub hashtags: Vec<String>,
	pub file_url: String,
	pub created_at: DateTime<Utc>,
	pub views: u64,
}

impl From<Video> for VideoResponse {
	fn from(video: Video) -> Self {
		let Video {
			id,
			title,
			description,
			hashtags,
			file_url,
			created_at,
			views,
		} = video;
		VideoResponse {
			id,
			title,
			description,
			hashtags,
			file_url,
			created_at,
			views,
		}
	}
}

#[derive(Deserialize)]
pub struct CreateCommentRequest {
	pub username: String,
	pub text: String,
}

impl CreateCommentRequest {
	pub fn into_new_comment(self, video_id: VideoId) -> NewComment {
		let CreateCommentRequest { username, text } = self;
		NewComment {
			video_id,
			username,
			text,
		}
	}
}

/// What the watch page needs to render a comment it just posted.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCommentResponse {
	pub new_comment_id: CommentId,
	pub username: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CommentResponse {
	pub id: CommentId,
	pub video_id: VideoId,
	pub username: String,
	pub text: String,
	pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
	fn from(comment: Comment) -> Self {
		let Comment {
			id,
			video_id,
			username,
			text,
			created_at,
		} = comment;
		CommentResponse {
			id,
			video_id,
			username,
			text,
			created_at,
		}
	}
}
