//! End-to-end pipeline tests: text input through extraction, clarification,
//! and JSONL persistence, with only the Messages API mocked

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use health_voice::application::{RecordingSessionUseCase, SessionOutcome};
use health_voice::infrastructure::{
    ClaudeExtractor, FixedTranscriber, JsonlLogStore, NullAudioSource,
};

fn messages_body(output: &serde_json::Value) -> serde_json::Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{"type": "text", "text": output.to_string()}],
        "stop_reason": "end_turn"
    })
}

fn read_rows(store_file: &std::path::Path) -> Vec<serde_json::Value> {
    std::fs::read_to_string(store_file)
        .unwrap_or_default()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn utterance_is_saved_as_one_batch() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("logs.jsonl");

    let output = json!({
        "items": [
            {
                "category": "voeding",
                "subcategory": null,
                "content": {"items": ["water"], "meal_type": "drank", "quantity": null, "calories": null},
                "confidence": 0.95,
                "original_text": "dronk een glas water"
            },
            {
                "category": "beweging",
                "subcategory": null,
                "content": {"activity": "wandelen", "duration_minutes": 30, "intensity": "licht", "distance_km": null},
                "confidence": 0.9,
                "original_text": "30 minuten gewandeld"
            }
        ],
        "needs_clarification": null
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&output)))
        .expect(1)
        .mount(&server)
        .await;

    let transcript = "dronk een glas water en 30 minuten gewandeld";
    let use_case = RecordingSessionUseCase::new(
        NullAudioSource::new(),
        FixedTranscriber::new(transcript),
        ClaudeExtractor::new("test-key").with_base_url(server.uri()),
        JsonlLogStore::new(&store_file),
    );

    use_case.start().await.unwrap();
    let outcome = use_case.stop().await.unwrap();

    let logs = match outcome {
        SessionOutcome::Saved(logs) => logs,
        other => panic!("expected saved outcome, got {:?}", other),
    };
    assert_eq!(logs.len(), 2);

    let rows = read_rows(&store_file);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], "voeding");
    assert_eq!(rows[1]["category"], "beweging");
    assert_eq!(rows[0]["raw_transcript"], transcript);
    assert_eq!(rows[1]["raw_transcript"], transcript);
    assert_eq!(rows[0]["logged_at"], rows[1]["logged_at"]);
    assert_eq!(rows[0]["was_edited"], false);
    assert_eq!(rows[0]["synced"], false);
}

#[tokio::test]
async fn clarification_round_trip_merges_held_items() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("logs.jsonl");

    let first = json!({
        "items": [{
            "category": "voeding",
            "subcategory": null,
            "content": {"items": ["water"], "meal_type": "drank", "quantity": null, "calories": null},
            "confidence": 0.95,
            "original_text": "dronk water"
        }],
        "needs_clarification": {
            "field": "dosage",
            "question": "Welke dosering magnesium?"
        }
    });

    let second = json!({
        "items": [{
            "category": "supplement",
            "subcategory": null,
            "content": {"name": "magnesium", "dosage": "500", "unit": "mg", "quantity": null},
            "confidence": 0.93,
            "original_text": "nam magnesium"
        }],
        "needs_clarification": null
    });

    // Re-extraction request embeds the answer; the first request does not
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("Antwoord: 500mg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&second)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&first)))
        .expect(1)
        .mount(&server)
        .await;

    let use_case = RecordingSessionUseCase::new(
        NullAudioSource::new(),
        FixedTranscriber::new("dronk water en nam magnesium"),
        ClaudeExtractor::new("test-key").with_base_url(server.uri()),
        JsonlLogStore::new(&store_file),
    );

    use_case.start().await.unwrap();
    let outcome = use_case.stop().await.unwrap();
    assert!(matches!(outcome, SessionOutcome::NeedsClarification(_)));

    // Nothing is persisted while the answer is pending
    assert!(read_rows(&store_file).is_empty());

    let saved = use_case.submit_clarification("500mg").await.unwrap();
    assert_eq!(saved.logs.len(), 2);
    assert!(saved.ignored_followup.is_none());

    // Held item first, re-extraction item after, one shared batch
    let rows = read_rows(&store_file);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], "voeding");
    assert_eq!(rows[1]["category"], "supplement");
    assert_eq!(rows[0]["raw_transcript"], "dronk water en nam magnesium");
    assert!(rows[0]["audio_duration_ms"].is_null());
}

#[tokio::test]
async fn garbage_model_output_still_saves_the_utterance() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("logs.jsonl");

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "content": [{"type": "text", "text": "dit is geen json"}],
            "stop_reason": "end_turn"
        })))
        .mount(&server)
        .await;

    let use_case = RecordingSessionUseCase::new(
        NullAudioSource::new(),
        FixedTranscriber::new("was vandaag erg moe"),
        ClaudeExtractor::new("test-key").with_base_url(server.uri()),
        JsonlLogStore::new(&store_file),
    );

    use_case.start().await.unwrap();
    let outcome = use_case.stop().await.unwrap();

    let logs = match outcome {
        SessionOutcome::Saved(logs) => logs,
        other => panic!("expected saved outcome, got {:?}", other),
    };
    assert_eq!(logs.len(), 1);

    let rows = read_rows(&store_file);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["category"], "overig");
    assert_eq!(rows[0]["confidence_score"], 0.3);
    assert_eq!(rows[0]["content"]["description"], "was vandaag erg moe");
}
