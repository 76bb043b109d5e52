use async_trait::async_trait;
use reqwest::StatusCode;
use static_assertions::assert_obj_safe;
use thiserror::Error;

/// Registers a finished playback with the server.
#[async_trait]
pub trait ViewReporter: Send + Sync + 'static {
	async fn report_view(&self, video_id: &str) -> Result<(), ViewReportError>;
}

assert_obj_safe!(ViewReporter);

#[derive(Error, Debug)]
pub enum ViewReportError {
	#[error("Failed to send view report: {0}")]
	Request(#[from] reqwest::Error),
	#[error("View report was answered with status {0}.")]
	UnexpectedStatus(StatusCode),
}

/// Reports views via `POST /api/videos/{id}/view`.
///
/// The request has no body and any 2xx answer counts as success, its body is ignored.
#[derive(Clone)]
pub struct HttpViewReporter {
	client: reqwest::Client,
	base_url: String,
}

impl HttpViewReporter {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self::with_client(reqwest::Client::new(), base_url)
	}

	pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
		Self {
			client,
			base_url: base_url.into(),
		}
	}

	pub fn view_url(&self, video_id: &str) -> String {
		let base_url = self.base_url.trim_end_matches('/');
		format!("{base_url}/api/videos/{video_id}/view")
	}
}

#[async_trait]
impl ViewReporter for HttpViewReporter {
	async fn report_view(&self, video_id: &str) -> Result<(), ViewReportError> {
		let response = self.client.post(self.view_url(video_id)).send().await?;

		let status = response.status();
		if !status.is_success() {
			return Err(ViewReportError::UnexpectedStatus(status));
		}

		Ok(())
	}
}
