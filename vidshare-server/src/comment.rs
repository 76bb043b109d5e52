use thiserror::Error;

pub mod model;
pub mod repository;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommentError {
	#[error("Comment text was empty or whitespace-only.")]
	TextEmpty,
	#[error("Username was empty or whitespace-only.")]
	UsernameEmpty,
	#[error("Comment not found.")]
	NotFound,
}

fn validate(username: &str, text: &str) -> Result<(), CommentError> {
	if username.trim().is_empty() {
		return Err(CommentError::UsernameEmpty);
	}

	if text.trim().is_empty() {
		return Err(CommentError::TextEmpty);
	}

	Ok(())
}
