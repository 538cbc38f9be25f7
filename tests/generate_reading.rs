//! 실제 HTTP 왕복을 흉내 내는 stub completion 서비스로 전체 흐름을 검증한다.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, test, web};
use serde_json::{Value, json};

use jlpt_reader::application::config::Config;
use jlpt_reader::application::ports::CompletionGateway;
use jlpt_reader::application::usecases::generate_reading::GenerateReadingUseCase;
use jlpt_reader::domain::error::{ErrorCategory, GenerationError};
use jlpt_reader::domain::level::JlptLevel;
use jlpt_reader::domain::passage::PassageRequest;
use jlpt_reader::infrastructure::gateway::ChatCompletionsGateway;
use jlpt_reader::interface::http::{AppState, configure};

struct StubCompletions {
    status: u16,
    body: String,
    hits: AtomicUsize,
    last: Mutex<Option<(Option<String>, Value)>>,
}

async fn completions(
    stub: web::Data<StubCompletions>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    let auth = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *stub.last.lock().unwrap() = Some((auth, body.into_inner()));

    HttpResponse::build(StatusCode::from_u16(stub.status).unwrap())
        .content_type("application/json")
        .body(stub.body.clone())
}

struct StubServer {
    endpoint: String,
    stub: web::Data<StubCompletions>,
    handle: ServerHandle,
}

impl StubServer {
    fn start(status: u16, body: String) -> Self {
        let stub = web::Data::new(StubCompletions {
            status,
            body,
            hits: AtomicUsize::new(0),
            last: Mutex::new(None),
        });
        let data = stub.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/v1/chat/completions", web::post().to(completions))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stub server");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            endpoint: format!("http://{addr}/v1/chat/completions"),
            stub,
            handle,
        }
    }

    fn gateway(&self) -> ChatCompletionsGateway {
        let config: Config = serde_json::from_value(json!({
            "gateway": { "endpoint": self.endpoint, "api_key": "test-key" }
        }))
        .unwrap();
        ChatCompletionsGateway::from_config(&config).unwrap()
    }

    fn hits(&self) -> usize {
        self.stub.hits.load(Ordering::SeqCst)
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

fn envelope(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
    .to_string()
}

fn token(word: &str, reading: Option<&str>, meaning: &str, kind: &str) -> Value {
    json!({ "word": word, "reading": reading, "meaning": meaning, "type": kind })
}

/// 4문장, 문장 길이 12 + 10 + 11 + 9 = 42.
fn tokyo_passage() -> Value {
    json!({
        "title": "東京の毎日",
        "title_reading": "とうきょうのまいにち",
        "sentences": [
            {
                "text": "東京の朝はにぎやかです。",
                "tokens": [
                    token("東京", Some("とうきょう"), "Tokyo", "noun"),
                    token("の", None, "possessive particle", "particle"),
                    token("朝", Some("あさ"), "morning", "noun"),
                    token("は", None, "topic marker", "particle"),
                    token("にぎやか", None, "lively", "adjective"),
                    token("です", None, "to be", "expression"),
                    token("。", None, "period", "expression")
                ]
            },
            {
                "text": "私は電車で行きます。",
                "tokens": [
                    token("私", Some("わたし"), "I", "noun"),
                    token("は", None, "topic marker", "particle"),
                    token("電車", Some("でんしゃ"), "train", "noun"),
                    token("で", None, "by means of", "particle"),
                    token("行きます", Some("いきます"), "to go", "verb"),
                    token("。", None, "period", "expression")
                ]
            },
            {
                "text": "駅にパン屋があります。",
                "tokens": [
                    token("駅", Some("えき"), "station", "noun"),
                    token("に", None, "location particle", "particle"),
                    token("パン屋", Some("ぱんや"), "bakery", "noun"),
                    token("が", None, "subject marker", "particle"),
                    token("あります", None, "to exist", "verb"),
                    token("。", None, "period", "expression")
                ]
            },
            {
                "text": "夜はご飯をたべる。",
                "tokens": [
                    token("夜", Some("よる"), "night", "noun"),
                    token("は", None, "topic marker", "particle"),
                    token("ご飯", Some("ごはん"), "meal", "noun"),
                    token("を", None, "object marker", "particle"),
                    token("たべる", None, "to eat", "verb"),
                    token("。", None, "period", "expression")
                ]
            }
        ]
    })
}

fn fenced(passage: &Value) -> String {
    format!(
        "```json\n{}\n```",
        serde_json::to_string_pretty(passage).unwrap()
    )
}

#[actix_web::test]
async fn fenced_passage_round_trip_through_gateway() {
    let server = StubServer::start(200, envelope(&fenced(&tokyo_passage())));
    let gateway = server.gateway();
    let use_case = GenerateReadingUseCase { gateway: &gateway };

    let result = use_case
        .execute(&PassageRequest::new("Tokyo daily life", "N5"))
        .await
        .unwrap();

    assert_eq!(result.character_count, 42);
    assert_eq!(result.level, "N5");
    assert_eq!(result.topic, "Tokyo daily life");
    assert_eq!(result.passage.sentences.len(), 4);
    assert_eq!(result.passage.title_reading.as_deref(), Some("とうきょうのまいにち"));
    assert_eq!(server.hits(), 1);

    let (auth, body) = server.stub.last.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(body["model"], "google/gemini-2.5-flash");
    assert_eq!(body["temperature"], 0.7);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert!(
        messages[0]["content"]
            .as_str()
            .unwrap()
            .contains(JlptLevel::N5.guideline())
    );
    assert_eq!(messages[1]["role"], "user");
    assert!(
        messages[1]["content"]
            .as_str()
            .unwrap()
            .contains("Tokyo daily life")
    );

    server.stop().await;
}

#[actix_web::test]
async fn http_endpoint_returns_contract_end_to_end() {
    let server = StubServer::start(200, envelope(&fenced(&tokyo_passage())));
    let gateway: Arc<dyn CompletionGateway> = Arc::new(server.gateway());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState { gateway }))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate-reading")
        .set_json(json!({ "topic": "Tokyo daily life", "level": "N5" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["characterCount"], 42);
    assert_eq!(body["level"], "N5");
    assert_eq!(body["topic"], "Tokyo daily life");
    assert_eq!(body["passage"], tokyo_passage());

    server.stop().await;
}

#[actix_web::test]
async fn upstream_429_is_rate_limited() {
    let server = StubServer::start(429, json!({ "error": "slow down" }).to_string());
    let err = server
        .gateway()
        .complete(&prompt())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::RateLimited));
    assert_eq!(err.category(), ErrorCategory::RateLimited);
    assert_eq!(err.status_code(), 429);
    server.stop().await;
}

#[actix_web::test]
async fn upstream_402_is_quota_exhausted() {
    let server = StubServer::start(402, json!({ "error": "no credits" }).to_string());
    let err = server
        .gateway()
        .complete(&prompt())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::QuotaExhausted));
    assert_eq!(err.status_code(), 402);
    server.stop().await;
}

#[actix_web::test]
async fn other_upstream_status_is_generic_failure() {
    let server = StubServer::start(503, "service unavailable".to_string());
    let err = server
        .gateway()
        .complete(&prompt())
        .await
        .unwrap_err();

    match &err {
        GenerationError::Upstream { status, body } => {
            assert_eq!(*status, 503);
            assert_eq!(body, "service unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status_code(), 500);
    server.stop().await;
}

#[actix_web::test]
async fn empty_completion_is_an_error() {
    let server = StubServer::start(200, envelope(""));
    let err = server
        .gateway()
        .complete(&prompt())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::EmptyCompletion));

    let no_choices = StubServer::start(200, json!({ "choices": [] }).to_string());
    let err = no_choices
        .gateway()
        .complete(&prompt())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::EmptyCompletion));

    server.stop().await;
    no_choices.stop().await;
}

#[actix_web::test]
async fn missing_credential_never_calls_upstream() {
    let server = StubServer::start(200, envelope(&fenced(&tokyo_passage())));
    let config: Config = serde_json::from_value(json!({
        "gateway": {
            "endpoint": server.endpoint,
            "api_key_env": "JLPT_READER_TEST_NEVER_SET"
        }
    }))
    .unwrap();
    let gateway = ChatCompletionsGateway::from_config(&config).unwrap();

    let err = gateway.complete(&prompt()).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert_eq!(server.hits(), 0);
    server.stop().await;
}

#[actix_web::test]
async fn unreachable_endpoint_is_upstream_failure() {
    // 포트만 잡았다가 바로 닫아 연결 거부를 유도한다.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config: Config = serde_json::from_value(json!({
        "gateway": {
            "endpoint": format!("http://127.0.0.1:{port}/v1/chat/completions"),
            "api_key": "test-key"
        }
    }))
    .unwrap();
    let gateway = ChatCompletionsGateway::from_config(&config).unwrap();

    let err = gateway.complete(&prompt()).await.unwrap_err();

    assert!(matches!(err, GenerationError::Transport(_)), "{err:?}");
    assert_eq!(err.category(), ErrorCategory::Upstream);
    assert_eq!(err.category().code(), "upstream");
    assert_eq!(err.status_code(), 500);
}

#[actix_web::test]
async fn malformed_model_output_fails_without_partial_passage() {
    let server = StubServer::start(
        200,
        envelope("```json\n{\"title\": \"東京\", \"sentences\": [{\"text\": \"東京\"\n```"),
    );
    let gateway = server.gateway();
    let use_case = GenerateReadingUseCase { gateway: &gateway };

    let err = use_case
        .execute(&PassageRequest::new("Tokyo", "N5"))
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::MalformedOutput);
    assert_eq!(err.status_code(), 500);
    server.stop().await;
}

fn prompt() -> jlpt_reader::domain::prompt::PassagePrompt {
    jlpt_reader::domain::prompt::build_passage_prompt(&PassageRequest::new("tea", "N5"))
}
