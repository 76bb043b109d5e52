use crate::comment::model::{Comment, CommentId, NewComment};
use crate::comment::{CommentError, validate};
use crate::video::model::VideoId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::Arc;

pub type SharedCommentRepository = Arc<Mutex<CommentRepository>>;

/// Comments in the order they were written.
///
/// Knows nothing about videos, callers check that the video exists. When both repositories are
/// locked, the video repository is locked first.
#[derive(Default)]
pub struct CommentRepository {
	comments: IndexMap<CommentId, Comment>,
}

impl CommentRepository {
	pub fn create(&mut self, new_comment: NewComment, created_at: DateTime<Utc>) -> Result<Comment, CommentError> {
		let NewComment {
			video_id,
			username,
			text,
		} = new_comment;
		validate(&username, &text)?;

		let comment = Comment {
			id: CommentId::new_v4(),
			video_id,
			username: username.trim().to_string(),
			text,
			created_at,
		};
		self.comments.insert(comment.id.clone(), comment.clone());
		Ok(comment)
	}

	/// Comments on one video, oldest first.
	pub fn for_video(&self, video_id: &VideoId) -> Vec<Comment> {
		self.comments
			.values()
			.filter(|comment| &comment.video_id == video_id)
			.cloned()
			.collect()
	}

	/// Only removes the comment if it belongs to `video_id`.
	pub fn remove(&mut self, video_id: &VideoId, comment_id: &CommentId) -> Result<Comment, CommentError> {
		if self
			.comments
			.get(comment_id)
			.is_none_or(|comment| &comment.video_id != video_id)
		{
			return Err(CommentError::NotFound);
		}

		self.comments.shift_remove(comment_id).ok_or(CommentError::NotFound)
	}

	/// Removes every comment on a video, returns how many there were.
	pub fn remove_for_video(&mut self, video_id: &VideoId) -> usize {
		let count_before = self.comments.len();
		self.comments.retain(|_, comment| &comment.video_id != video_id);
		count_before - self.comments.len()
	}
}
