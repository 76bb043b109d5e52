use crate::comment::CommentError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl From<CommentError> for ApiErrorResponse {
	fn from(error: CommentError) -> Self {
		use CommentError::*;
		let (r#type, status) = match error {
			TextEmpty => ("comment-text-empty", StatusCode::BAD_REQUEST),
			UsernameEmpty => ("comment-username-empty", StatusCode::BAD_REQUEST),
			NotFound => ("comment-not-found", StatusCode::NOT_FOUND),
		};

		ApiErrorResponse {
			r#type,
			status: status.as_u16(),
			message: error.to_string(),
		}
	}
}

impl IntoResponse for CommentError {
	fn into_response(self) -> Response {
		ApiErrorResponse::from(self).into_response()
	}
}
