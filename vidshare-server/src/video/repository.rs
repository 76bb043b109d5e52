use crate::video::model::{NewVideo, Video, VideoId, VideoUpdate};
use crate::video::{VideoError, format_hashtags, validate};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::cmp::Reverse;
use std::sync::Arc;

pub type SharedVideoRepository = Arc<Mutex<VideoRepository>>;

/// Keeps videos in insertion order, so videos created at the same instant still list stably.
#[derive(Default)]
pub struct VideoRepository {
	videos: IndexMap<VideoId, Video>,
}

impl VideoRepository {
	pub fn create(&mut self, new_video: NewVideo, created_at: DateTime<Utc>) -> Result<Video, VideoError> {
		let NewVideo {
			title,
			description,
			hashtags,
			file_url,
		} = new_video;
		validate(&title, &description)?;

		let video = Video {
			id: VideoId::new_v4(),
			title,
			description,
			hashtags: format_hashtags(&hashtags),
			file_url,
			created_at,
			views: 0,
		};
		self.videos.insert(video.id.clone(), video.clone());
		Ok(video)
	}

	pub fn get(&self, id: &VideoId) -> Option<Video> {
		self.videos.get(id).cloned()
	}

	/// All videos, newest first.
	pub fn trending(&self) -> Vec<Video> {
		newest_first(self.videos.values())
	}

	/// Videos whose title starts or ends with `keyword`, ignoring case.
	pub fn search(&self, keyword: &str) -> Vec<Video> {
		let keyword = keyword.trim().to_lowercase();
		if keyword.is_empty() {
			return Vec::new();
		}

		newest_first(self.videos.values().filter(|video| {
			let title = video.title.to_lowercase();
			title.starts_with(&keyword) || title.ends_with(&keyword)
		}))
	}

	pub fn update(&mut self, id: &VideoId, update: VideoUpdate) -> Result<Video, VideoError> {
		let VideoUpdate {
			title,
			description,
			hashtags,
		} = update;
		let video = self.videos.get_mut(id).ok_or(VideoError::NotFound)?;
		validate(&title, &description)?;

		video.title = title;
		video.description = description;
		video.hashtags = format_hashtags(&hashtags);
		Ok(video.clone())
	}

	pub fn remove(&mut self, id: &VideoId) -> Result<(), VideoError> {
		self.videos.shift_remove(id).map(|_| ()).ok_or(VideoError::NotFound)
	}

	/// Counts one view, returns the new view count.
	pub fn register_view(&mut self, id: &VideoId) -> Result<u64, VideoError> {
		let video = self.videos.get_mut(id).ok_or(VideoError::NotFound)?;
		video.views = video.views.saturating_add(1);
		Ok(video.views)
	}
}

/// Ties on `created_at` list the later inserted video first.
fn newest_first<'a>(videos: impl DoubleEndedIterator<Item = &'a Video>) -> Vec<Video> {
	let mut videos = videos.rev().cloned().collect::<Vec<_>>();
	videos.sort_by_key(|video| Reverse(video.created_at));
	videos
}
