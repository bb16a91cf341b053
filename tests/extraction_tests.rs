//! Extraction adapter integration tests against a mock Messages API

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use health_voice::application::ports::{ExtractionError, Extractor};
use health_voice::domain::category::Category;
use health_voice::domain::extraction::{ClarificationAnswer, FALLBACK_CONFIDENCE};
use health_voice::infrastructure::ClaudeExtractor;

/// Wrap model output text in a Messages API response envelope
fn messages_body(text: &str) -> serde_json::Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
}

fn extractor_for(server: &MockServer) -> ClaudeExtractor {
    ClaudeExtractor::new("test-key").with_base_url(server.uri())
}

#[tokio::test]
async fn multi_item_utterance_is_split() {
    let server = MockServer::start().await;

    let output = json!({
        "items": [
            {
                "category": "voeding",
                "subcategory": "drank",
                "content": {"items": ["water"], "meal_type": "drank", "quantity": "1 glas", "calories": null},
                "confidence": 0.95,
                "original_text": "dronk net een glas water"
            },
            {
                "category": "supplement",
                "subcategory": null,
                "content": {"name": "vitamine D", "dosage": "1000", "unit": "IU", "quantity": null},
                "confidence": 0.92,
                "original_text": "nam mijn vitamine D van 1000 IU"
            }
        ],
        "needs_clarification": null
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&output.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let result = extractor_for(&server)
        .extract("dronk net een glas water en nam mijn vitamine D van 1000 IU", None)
        .await
        .unwrap();

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].category, Category::Voeding);
    assert_eq!(result.items[0].subcategory, Some("drank".to_string()));
    assert_eq!(result.items[1].category, Category::Supplement);
    assert_eq!(result.items[1].confidence, 0.92);
    assert!(result.needs_clarification.is_none());
}

#[tokio::test]
async fn empty_result_passes_through_unchanged() {
    let server = MockServer::start().await;

    let output = json!({"items": [], "needs_clarification": null});

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&output.to_string())))
        .mount(&server)
        .await;

    let result = extractor_for(&server).extract("eh", None).await.unwrap();

    // Nothing recognized and nothing to ask: not a fallback case
    assert!(result.items.is_empty());
    assert!(result.needs_clarification.is_none());
}

#[tokio::test]
async fn prose_wrapped_json_is_unwrapped() {
    let server = MockServer::start().await;

    let text = format!(
        "Hier is de extractie:\n{}\nLaat het weten als er iets mist.",
        json!({
            "items": [{
                "category": "slaap",
                "subcategory": null,
                "content": {"duration_hours": 7.5, "quality": "goed", "notes": null},
                "confidence": 0.9,
                "original_text": "7 en een half uur geslapen"
            }],
            "needs_clarification": null
        })
    );

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&text)))
        .mount(&server)
        .await;

    let result = extractor_for(&server)
        .extract("7 en een half uur geslapen", None)
        .await
        .unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].category, Category::Slaap);
}

#[tokio::test]
async fn unparseable_output_degrades_to_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(messages_body("Sorry, dit kan ik niet verwerken.")),
        )
        .mount(&server)
        .await;

    let result = extractor_for(&server)
        .extract("mompel mompel", None)
        .await
        .unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].category, Category::Overig);
    assert_eq!(result.items[0].confidence, FALLBACK_CONFIDENCE);
    assert_eq!(result.items[0].original_text, "mompel mompel");
    assert!(result.needs_clarification.is_none());
}

#[tokio::test]
async fn clarification_answer_rides_with_original_transcript() {
    let server = MockServer::start().await;

    let output = json!({
        "items": [{
            "category": "supplement",
            "subcategory": null,
            "content": {"name": "magnesium", "dosage": "500", "unit": "mg", "quantity": null},
            "confidence": 0.93,
            "original_text": "nam magnesium"
        }],
        "needs_clarification": null
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("Originele input: \\\"nam magnesium\\\""))
        .and(body_string_contains("Veld: dosage"))
        .and(body_string_contains("Antwoord: 500mg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&output.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let answer = ClarificationAnswer {
        field: "dosage".to_string(),
        answer: "500mg".to_string(),
    };

    let result = extractor_for(&server)
        .extract("nam magnesium", Some(&answer))
        .await
        .unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].category, Category::Supplement);
}

#[tokio::test]
async fn clarification_request_is_surfaced() {
    let server = MockServer::start().await;

    let output = json!({
        "items": [],
        "needs_clarification": {
            "field": "dosage",
            "question": "Welke dosering heb je genomen?"
        }
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(&output.to_string())))
        .mount(&server)
        .await;

    let result = extractor_for(&server)
        .extract("nam iets", None)
        .await
        .unwrap();

    assert!(result.items.is_empty());
    let question = result.needs_clarification.unwrap();
    assert_eq!(question.field, "dosage");
    assert_eq!(question.question, "Welke dosering heb je genomen?");
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .extract("dronk water", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::InvalidApiKey));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .extract("dronk water", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::RateLimited));
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .extract("dronk water", None)
        .await
        .unwrap_err();

    match err {
        ExtractionError::ApiError(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("overloaded"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_transcript_never_hits_the_api() {
    let server = MockServer::start().await;
    // No mock mounted: a request would 404 and map to ApiError

    let err = extractor_for(&server)
        .extract("   ", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::EmptyTranscript));
}
