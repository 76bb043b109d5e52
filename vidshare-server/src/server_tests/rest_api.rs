use crate::server::rest_api::models::{CommentResponse, CreatedCommentResponse, VideoResponse};
use crate::server_tests::start_test_server;
use crate::server_tests::test_client::TestClient;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use vidshare_player::{HttpViewReporter, ViewReporter};

async fn create_video(test_client: &TestClient, title: &str) -> VideoResponse {
	let response = test_client
		.post("/api/videos")
		.json(&json!({
			"title": title,
			"description": "Filmed on a Tuesday.",
			"hashtags": "rust, #video",
			"file_url": "uploads/videos/abc",
		}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CREATED, response.status());

	response.json().await.expect("Failed to parse video JSON")
}

async fn fetch_video(test_client: &TestClient, id: &str) -> VideoResponse {
	test_client.get_json(&format!("/api/videos/{id}")).await
}

async fn fetch_titles(test_client: &TestClient, path: &str) -> Vec<String> {
	let videos = test_client.get_json::<Vec<VideoResponse>>(path).await;
	videos.into_iter().map(|video| video.title).collect()
}

async fn create_comment(test_client: &TestClient, video_id: &str, text: &str) -> CreatedCommentResponse {
	let response = test_client
		.post(&format!("/api/videos/{video_id}/comments"))
		.json(&json!({ "username": "alice", "text": text }))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CREATED, response.status());

	response.json().await.expect("Failed to parse comment JSON")
}

async fn fetch_comment_texts(test_client: &TestClient, video_id: &str) -> Vec<String> {
	let comments = test_client
		.get_json::<Vec<CommentResponse>>(&format!("/api/videos/{video_id}/comments"))
		.await;
	comments.into_iter().map(|comment| comment.text).collect()
}

#[tokio::test]
async fn should_create_and_get_video() {
	let (test_client, _context) = start_test_server().await;

	let created = create_video(&test_client, "First upload").await;
	let fetched = fetch_video(&test_client, &created.id).await;

	assert_eq!(created, fetched);
	assert_eq!("First upload", fetched.title);
	assert_eq!(vec!["#rust", "#video"], fetched.hashtags);
	assert_eq!(0, fetched.views);
}

#[tokio::test]
async fn should_reject_video_without_title() {
	let (test_client, _context) = start_test_server().await;

	let response = test_client
		.post("/api/videos")
		.json(&json!({ "title": "  ", "file_url": "uploads/videos/abc" }))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let error = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!(
		json!({
			"type": "video-title-empty",
			"status": 400,
			"message": "Video title was empty or whitespace-only.",
		}),
		error
	);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_video() {
	let (test_client, _context) = start_test_server().await;

	let response = test_client.get("/api/videos/42").send().await.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let error = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!(json!("video-not-found"), error["type"]);
}

#[tokio::test]
async fn should_list_trending_videos_newest_first() {
	let (test_client, _context) = start_test_server().await;
	create_video(&test_client, "first").await;
	tokio::time::sleep(Duration::from_millis(5)).await;
	create_video(&test_client, "second").await;

	let titles = fetch_titles(&test_client, "/api/videos").await;

	assert_eq!(vec!["second", "first"], titles);
}

#[tokio::test]
async fn should_search_videos_by_title() {
	let (test_client, _context) = start_test_server().await;
	create_video(&test_client, "Cats doing things").await;
	create_video(&test_client, "Dogs doing things").await;

	let titles = fetch_titles(&test_client, "/api/videos/search?keyword=cats").await;
	assert_eq!(vec!["Cats doing things"], titles);

	let titles = fetch_titles(&test_client, "/api/videos/search").await;
	assert!(titles.is_empty());
}

#[tokio::test]
async fn should_update_video() {
	let (test_client, _context) = start_test_server().await;
	let created = create_video(&test_client, "Draft").await;

	let response = test_client
		.put(&format!("/api/videos/{}", created.id))
		.json(&json!({ "title": "Final cut", "hashtags": "final" }))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let updated = fetch_video(&test_client, &created.id).await;
	assert_eq!("Final cut", updated.title);
	assert_eq!("", updated.description);
	assert_eq!(vec!["#final"], updated.hashtags);
}

#[tokio::test]
async fn should_delete_video() {
	let (test_client, _context) = start_test_server().await;
	let created = create_video(&test_client, "Short lived").await;
	let path = format!("/api/videos/{}", created.id);

	let response = test_client.delete(&path).send().await.expect("Request failed.");
	assert_eq!(StatusCode::NO_CONTENT, response.status());

	let response = test_client.delete(&path).send().await.expect("Request failed.");
	assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn should_register_view() {
	let (test_client, context) = start_test_server().await;
	let created = create_video(&test_client, "Watch me").await;

	let response = test_client
		.post(&format!("/api/videos/{}/view", created.id))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!(1, fetch_video(&test_client, &created.id).await.views);
	assert_eq!(
		Some(1),
		context.video_repository.lock().get(&created.id).map(|video| video.views)
	);
}

#[tokio::test]
async fn should_not_register_view_for_unknown_video() {
	let (test_client, _context) = start_test_server().await;

	let response = test_client
		.post("/api/videos/42/view")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn player_view_reporter_should_count_views() {
	let (test_client, _context) = start_test_server().await;
	let created = create_video(&test_client, "Played twice").await;
	let reporter: Arc<dyn ViewReporter> = Arc::new(HttpViewReporter::new(test_client.base_url()));

	reporter.report_view(&created.id).await.expect("Failed to report view");
	reporter.report_view(&created.id).await.expect("Failed to report view");

	assert_eq!(2, fetch_video(&test_client, &created.id).await.views);
	assert!(reporter.report_view("42").await.is_err());
}

#[tokio::test]
async fn should_create_comment() {
	let (test_client, context) = start_test_server().await;
	let video = create_video(&test_client, "Worth discussing").await;

	let response = test_client
		.post(&format!("/api/videos/{}/comments", video.id))
		.json(&json!({ "username": "alice", "text": "Great video!" }))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::CREATED, response.status());
	let body = response.json::<Value>().await.expect("Failed to parse comment JSON");
	let new_comment_id = body["newCommentId"].as_str().expect("Missing newCommentId");
	assert_eq!(json!("alice"), body["username"]);

	let comments = context.comment_repository.lock().for_video(&video.id);
	assert_eq!(1, comments.len());
	assert_eq!(new_comment_id, comments[0].id.as_str());
	assert_eq!("Great video!", comments[0].text);
	assert_eq!(vec!["Great video!"], fetch_comment_texts(&test_client, &video.id).await);
}

#[tokio::test]
async fn should_not_comment_on_unknown_video() {
	let (test_client, _context) = start_test_server().await;

	let response = test_client
		.post("/api/videos/42/comments")
		.json(&json!({ "username": "alice", "text": "Hello?" }))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let error = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!(json!("video-not-found"), error["type"]);
}

#[tokio::test]
async fn should_reject_blank_comment() {
	let (test_client, _context) = start_test_server().await;
	let video = create_video(&test_client, "Speechless").await;

	let response = test_client
		.post(&format!("/api/videos/{}/comments", video.id))
		.json(&json!({ "username": "alice", "text": " \n " }))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let error = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!(
		json!({
			"type": "comment-text-empty",
			"status": 400,
			"message": "Comment text was empty or whitespace-only.",
		}),
		error
	);
	assert!(fetch_comment_texts(&test_client, &video.id).await.is_empty());
}

#[tokio::test]
async fn should_delete_comment() {
	let (test_client, _context) = start_test_server().await;
	let video = create_video(&test_client, "Heated debate").await;
	let kept = create_comment(&test_client, &video.id, "Keep me").await;
	let removed = create_comment(&test_client, &video.id, "Delete me").await;
	let path = format!("/api/videos/{}/comments/{}", video.id, removed.new_comment_id);

	let response = test_client.delete(&path).send().await.expect("Request failed.");
	assert_eq!(StatusCode::NO_CONTENT, response.status());
	assert_eq!(vec!["Keep me"], fetch_comment_texts(&test_client, &video.id).await);

	let response = test_client.delete(&path).send().await.expect("Request failed.");
	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let error = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!(json!("comment-not-found"), error["type"]);
	assert_ne!(kept.new_comment_id, removed.new_comment_id);
}

#[tokio::test]
async fn should_not_delete_comment_through_another_video() {
	let (test_client, _context) = start_test_server().await;
	let video = create_video(&test_client, "Commented").await;
	let other_video = create_video(&test_client, "Unrelated").await;
	let comment = create_comment(&test_client, &video.id, "Mine").await;

	let response = test_client
		.delete(&format!(
			"/api/videos/{}/comments/{}",
			other_video.id, comment.new_comment_id
		))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
	assert_eq!(vec!["Mine"], fetch_comment_texts(&test_client, &video.id).await);
}

#[tokio::test]
async fn deleting_video_should_delete_its_comments() {
	let (test_client, context) = start_test_server().await;
	let video = create_video(&test_client, "Going away").await;
	create_comment(&test_client, &video.id, "Bye").await;

	let response = test_client
		.delete(&format!("/api/videos/{}", video.id))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NO_CONTENT, response.status());
	assert!(context.comment_repository.lock().for_video(&video.id).is_empty());
	let response = test_client
		.get(&format!("/api/videos/{}/comments", video.id))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::NOT_FOUND, response.status());
}
