use thiserror::Error;

pub mod model;
pub mod repository;

pub const MAX_TITLE_LENGTH: usize = 80;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VideoError {
	#[error("Video title was empty or whitespace-only.")]
	TitleEmpty,
	#[error("Video title is too long. (>80 characters)")]
	TitleTooLong,
	#[error("Video description is too long. (>2000 characters)")]
	DescriptionTooLong,
	#[error("Video not found.")]
	NotFound,
}

/// Turns comma separated user input into hashtags, e.g. `"rust, #async"` into `["#rust", "#async"]`.
pub fn format_hashtags(hashtags: &str) -> Vec<String> {
	hashtags
		.split(',')
		.map(str::trim)
		.filter(|word| !word.is_empty())
		.map(|word| {
			if word.starts_with('#') {
				word.to_string()
			} else {
				format!("#{word}")
			}
		})
		.collect()
}

fn validate(title: &str, description: &str) -> Result<(), VideoError> {
	if title.trim().is_empty() {
		return Err(VideoError::TitleEmpty);
	}

	if title.chars().count() > MAX_TITLE_LENGTH {
		return Err(VideoError::TitleTooLong);
	}

	if description.chars().count() > MAX_DESCRIPTION_LENGTH {
		return Err(VideoError::DescriptionTooLong);
	}

	Ok(())
}
