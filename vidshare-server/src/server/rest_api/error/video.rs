use crate::server::rest_api::error::ApiErrorResponse;
use crate::video::VideoError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl From<VideoError> for ApiErrorResponse {
	fn from(error: VideoError) -> Self {
		use VideoError::*;
		let (r#type, status) = match error {
			TitleEmpty => ("video-title-empty", StatusCode::BAD_REQUEST),
			TitleTooLong => ("video-title-too-long", StatusCode::BAD_REQUEST),
			DescriptionTooLong => ("video-description-too-long", StatusCode::BAD_REQUEST),
			NotFound => ("video-not-found", StatusCode::NOT_FOUND),
		};

		ApiErrorResponse {
			r#type,
			status: status.as_u16(),
			message: error.to_string(),
		}
	}
}

impl IntoResponse for VideoError {
	fn into_response(self) -> Response {
		ApiErrorResponse::from(self).into_response()
	}
}
