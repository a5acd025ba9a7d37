// tests/api_tests.rs

use edly_leaderboard::{config::Config, routes, state::AppState};
use serde_json::{Value, json};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app(config: Config) -> String {
    let state = AppState { config };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn sample_snapshot() -> Value {
    json!({
        "questions": {
            "q1": {
                "question_text": "Capital of France?",
                "answer_options": [{"key": 1, "text": "Paris"}, {"key": 2, "text": "Lyon"}],
                "correct_option_key": 1
            },
            "q2": {
                "question_text": "2 + 3?",
                "answer_options": [{"key": 1, "text": "4"}, {"key": 2, "text": "5"}],
                "correct_option_key": 2
            }
        },
        "answers": {
            "u-alice": {
                "q1": {"chosen_option_key": 1, "submitter_name": "alice", "submitted_at": 300},
                "q2": {"chosen_option_key": 2, "submitter_name": "alice", "submitted_at": 900}
            },
            "u-bob": {
                "q1": {"chosen_option_key": 1, "submitter_name": "bob", "submitted_at": 100}
            },
            "u-carl": {
                "q1": {"chosen_option_key": 1, "submitter_name": "carl", "submitted_at": 200},
                "q_deleted": {"chosen_option_key": 3, "submitter_name": "carl", "submitted_at": 250}
            }
        },
        "control": {"current_quiz_id": "q2", "is_answer_revealed": true}
    })
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn leaderboard_ranks_posted_snapshot() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/leaderboard", address))
        .json(&sample_snapshot())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("json body");

    let entries = body["entries"].as_array().expect("entries array");
    let ids: Vec<&str> = entries
        .iter()
        .map(|e| e["user_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["u-alice", "u-bob", "u-carl"]);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["score"], 2);
    assert_eq!(entries[0]["last_correct_answer_at"], 900);
    assert_eq!(entries[2]["answers_by_quiz"]["q_deleted"], 3);
    assert_eq!(body["total_players"], 3);

    assert_eq!(body["status"]["paused"], false);
    assert_eq!(body["status"]["active_quiz"]["correct_answer_text"], "5");
}

#[tokio::test]
async fn empty_snapshot_gives_empty_board() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/leaderboard", address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["entries"], json!([]));
    assert_eq!(body["total_players"], 0);
    assert_eq!(body["status"]["paused"], true);
}

#[tokio::test]
async fn limit_trims_entries_not_total() {
    let config = Config {
        leaderboard_limit: Some(1),
        ..Config::default()
    };
    let address = spawn_app(config).await;
    let client = reqwest::Client::new();

    let configured: Value = client
        .post(&format!("{}/api/leaderboard", address))
        .json(&sample_snapshot())
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("json body");
    assert_eq!(configured["entries"].as_array().map(Vec::len), Some(1));
    assert_eq!(configured["total_players"], 3);

    let overridden: Value = client
        .post(&format!("{}/api/leaderboard?limit=2", address))
        .json(&sample_snapshot())
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("json body");
    assert_eq!(overridden["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(overridden["entries"][1]["user_id"], "u-bob");
}

#[tokio::test]
async fn status_endpoint_reports_pause() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/leaderboard/status", address))
        .json(&json!({"control": {"is_answer_revealed": true}}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["paused"], true);
    assert_eq!(body["answers_revealed"], true);
    assert!(body.get("active_quiz").is_none());
}

#[tokio::test]
async fn current_quiz_hides_answer_key() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(&format!("{}/api/quiz/current", address))
        .json(&json!({"snapshot": sample_snapshot(), "user_id": "u-bob"}))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("json body");

    assert_eq!(body["quiz"]["id"], "q2");
    assert!(body["quiz"].get("correct_option_key").is_none());
    assert_eq!(body["has_answered"], false);
}

#[tokio::test]
async fn submit_answer_flow() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    // Bob has not answered q2 yet
    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&json!({
            "snapshot": sample_snapshot(),
            "user_id": "u-bob",
            "quiz_id": "q2",
            "submitter_name": "bob",
            "chosen_option_key": 2
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let record: Value = response.json().await.expect("json body");
    assert_eq!(record["quiz_id"], "q2");
    assert!(record["submitted_at"].as_i64().unwrap_or(0) > 0);

    // Alice already answered q2
    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&json!({
            "snapshot": sample_snapshot(),
            "user_id": "u-alice",
            "quiz_id": "q2",
            "submitter_name": "alice",
            "chosen_option_key": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 409);
    let body: Value = response.json().await.expect("json body");
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn question_authoring_validates_answer_key() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let ok = client
        .post(&format!("{}/api/quiz/questions", address))
        .json(&json!({
            "question": "Largest planet?",
            "answers": [{"key": 1, "text": "Mars"}, {"key": 2, "text": "Jupiter"}],
            "rightAnswer": 2
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(ok.status().as_u16(), 201);
    let prepared: Value = ok.json().await.expect("json body");
    assert_eq!(prepared["correct_option_key"], 2);

    let bad = client
        .post(&format!("{}/api/quiz/questions", address))
        .json(&json!({
            "question_text": "Largest planet?",
            "answer_options": [{"key": 1, "text": "Mars"}],
            "correct_option_key": 4
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(bad.status().as_u16(), 400);
}

#[tokio::test]
async fn partial_records_do_not_fail_the_board() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/leaderboard", address))
        .json(&json!({
            "quiz": {
                "q1": {"question": "Pick", "answers": [{"key": 1, "text": "a"}], "rightAnswer": 1}
            },
            "UserAnswers": {
                "u1": {"q1": {"answerId": 1, "userName": "ok", "timestamp": 10}},
                "u2": {"q1": {"userName": "partial", "timestamp": 5}}
            }
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["total_players"], 2);
    assert_eq!(body["entries"][0]["user_id"], "u1");
    assert_eq!(body["entries"][0]["score"], 1);
    assert_eq!(body["entries"][1]["score"], 0);
    assert_eq!(body["entries"][1]["answers_by_quiz"]["q1"], Value::Null);
}

#[tokio::test]
async fn zero_limit_means_unlimited() {
    let config = Config {
        leaderboard_limit: Some(1),
        ..Config::default()
    };
    let address = spawn_app(config).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(&format!("{}/api/leaderboard?limit=0", address))
        .json(&sample_snapshot())
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("json body");

    assert_eq!(body["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["total_players"], 3);
}

#[tokio::test]
async fn control_commands_update_flags() {
    let address = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/control", address))
        .json(&json!({
            "snapshot": sample_snapshot(),
            "command": {"type": "activate", "quiz_id": "q1"}
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);
    let control: Value = response.json().await.expect("json body");
    assert_eq!(control["current_quiz_id"], "q1");
    assert_eq!(control["is_answer_revealed"], false);
    assert!(control["question_change_timestamp"].as_i64().unwrap_or(0) > 0);

    let paused: Value = client
        .post(&format!("{}/api/control", address))
        .json(&json!({"snapshot": sample_snapshot(), "command": {"type": "pause"}}))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("json body");
    assert_eq!(paused["current_quiz_id"], Value::Null);

    let toggled: Value = client
        .post(&format!("{}/api/control", address))
        .json(&json!({"snapshot": sample_snapshot(), "command": {"type": "toggle_reveal"}}))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("json body");
    assert_eq!(toggled["is_answer_revealed"], false);

    let unknown = client
        .post(&format!("{}/api/control", address))
        .json(&json!({
            "snapshot": sample_snapshot(),
            "command": {"type": "activate", "quiz_id": "nope"}
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unknown.status().as_u16(), 404);
}
