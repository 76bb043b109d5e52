use crate::comment::CommentError;
use crate::comment::model::CommentId;
use crate::comment::repository::SharedCommentRepository;
use crate::context::ApplicationContext;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::models::{
	CommentResponse, CreateCommentRequest, CreateVideoRequest, CreatedCommentResponse, SearchQuery, UpdateVideoRequest,
	VideoResponse,
};
use crate::server::rest_api::response::Created;
use crate::video::VideoError;
use crate::video::model::VideoId;
use crate::video::repository::SharedVideoRepository;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;
use tracing::{debug, info};

pub mod error;
pub mod models;
pub mod response;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.route("/videos", get(trending).post(create_video))
		.route("/videos/search", get(search))
		.route("/videos/{id}", get(get_video).put(update_video).delete(remove_video))
		.route("/videos/{id}/view", post(register_view))
		.route("/videos/{id}/comments", get(comments).post(create_comment))
		.route("/videos/{id}/comments/{comment_id}", delete(remove_comment))
}

async fn trending(State(video_repository): State<SharedVideoRepository>) -> Json<Vec<VideoResponse>> {
	let videos = video_repository.lock().trending();
	Json(videos.into_iter().map(VideoResponse::from).collect())
}

async fn search(
	State(video_repository): State<SharedVideoRepository>,
	Query(SearchQuery { keyword }): Query<SearchQuery>,
) -> Json<Vec<VideoResponse>> {
	let videos = video_repository.lock().search(keyword.as_deref().unwrap_or_default());
	Json(videos.into_iter().map(VideoResponse::from).collect())
}

async fn create_video(
	State(video_repository): State<SharedVideoRepository>,
	Json(request): Json<CreateVideoRequest>,
) -> Result<Created<Json<VideoResponse>>, VideoError> {
	let video = video_repository.lock().create(request.into(), Utc::now())?;

	info!("Created video '{}' with id {}.", video.title, video.id);
	Ok(Created(Json(video.into())))
}

async fn get_video(
	State(video_repository): State<SharedVideoRepository>,
	Path(id): Path<VideoId>,
) -> Result<Json<VideoResponse>, VideoError> {
	let video = video_repository.lock().get(&id).ok_or(VideoError::NotFound)?;
	Ok(Json(video.into()))
}

async fn update_video(
	State(video_repository): State<SharedVideoRepository>,
	Path(id): Path<VideoId>,
	Json(request): Json<UpdateVideoRequest>,
) -> Result<Json<VideoResponse>, VideoError> {
	let video = video_repository.lock().update(&id, request.into())?;
	Ok(Json(video.into()))
}

async fn remove_video(
	State(video_repository): State<SharedVideoRepository>,
	State(comment_repository): State<SharedCommentRepository>,
	Path(id): Path<VideoId>,
) -> Result<StatusCode, VideoError> {
	let mut video_repository = video_repository.lock();
	video_repository.remove(&id)?;
	let removed_comments = comment_repository.lock().remove_for_video(&id);

	info!("Removed video with id {id} and its {removed_comments} comments.");
	Ok(StatusCode::NO_CONTENT)
}

async fn register_view(
	State(video_repository): State<SharedVideoRepository>,
	Path(id): Path<VideoId>,
) -> Result<StatusCode, VideoError> {
	let views = video_repository.lock().register_view(&id)?;

	debug!("Video {id} now has {views} views.");
	Ok(StatusCode::OK)
}

async fn comments(
	State(video_repository): State<SharedVideoRepository>,
	State(comment_repository): State<SharedCommentRepository>,
	Path(id): Path<VideoId>,
) -> Result<Json<Vec<CommentResponse>>, VideoError> {
	let video_repository = video_repository.lock();
	video_repository.get(&id).ok_or(VideoError::NotFound)?;

	let comments = comment_repository.lock().for_video(&id);
	Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

async fn create_comment(
	State(video_repository): State<SharedVideoRepository>,
	State(comment_repository): State<SharedCommentRepository>,
	Path(id): Path<VideoId>,
	Json(request): Json<CreateCommentRequest>,
) -> Result<Created<Json<CreatedCommentResponse>>, ApiErrorResponse> {
	// Held until the comment is stored, so the video can't be removed in between.
	let video_repository = video_repository.lock();
	video_repository.get(&id).ok_or(VideoError::NotFound)?;

	let comment = comment_repository
		.lock()
		.create(request.into_new_comment(id), Utc::now())?;

	info!("'{}' commented on video {}.", comment.username, comment.video_id);
	Ok(Created(Json(CreatedCommentResponse {
		new_comment_id: comment.id,
		username: comment.username,
	})))
}

async fn remove_comment(
	State(comment_repository): State<SharedCommentRepository>,
	Path((video_id, comment_id)): Path<(VideoId, CommentId)>,
) -> Result<StatusCode, CommentError> {
	comment_repository.lock().remove(&video_id, &comment_id)?;

	info!("Removed comment {comment_id} from video {video_id}.");
	Ok(StatusCode::NO_CONTENT)
}
