//! Integration tests for the content client.
//!
//! These tests run the client against a mocked backend and verify the
//! complete fetch -> resolve -> merge pipeline, the form submissions, and
//! the degradation behavior on server failures.

use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use devosoft_content::client::{endpoints, ApiClient};
use devosoft_content::error::{ApiError, FormError};
use devosoft_content::forms::{ContactMessage, EmailSubscription, JobApplication};
use devosoft_content::i18n::Locale;
use devosoft_content::pages::{load_blog_page, load_contact_page, CONTACT_FIELDS_OFFSET};

// ==================== Test Helpers ====================

fn envelope(results: serde_json::Value) -> serde_json::Value {
    json!({
        "count": results.as_array().map(|a| a.len()).unwrap_or(0),
        "next": null,
        "previous": null,
        "results": results
    })
}

/// A fields collection whose contact entries sit at the expected offset,
/// deliberately served out of creation order.
fn fields_payload() -> serde_json::Value {
    let mut fields: Vec<serde_json::Value> = Vec::new();

    // Filler entries created before the contact block
    for n in 0..CONTACT_FIELDS_OFFSET {
        fields.push(json!({
            "created_at": format!("2024-01-{:02}T00:00:00Z", n + 1),
            "updated_at": format!("2024-01-{:02}T00:00:00Z", n + 1),
            "title": format!("filler-{}", n),
            "value": format!("filler-value-{}", n)
        }));
    }

    fields.push(json!({
        "created_at": "2024-02-01T00:00:00Z",
        "updated_at": "2024-02-01T00:00:00Z",
        "title": "Elektron pochta",
        "title_en": "Email us",
        "title_ru": "Напишите нам",
        "value": "info@devosoft.uz",
        "value_en": null,
        "value_ru": null
    }));
    fields.push(json!({
        "created_at": "2024-02-02T00:00:00Z",
        "updated_at": "2024-02-02T00:00:00Z",
        "title": "Telefon raqami",
        "title_en": "Call us",
        "value": "+998 90 123 45 67"
    }));

    // Serve shuffled: the client must sort by created_at before the
    // positional merge.
    let payload: Vec<serde_json::Value> = fields.iter().rev().cloned().collect();
    json!(payload)
}

async fn mock_get(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ==================== Fetch-and-Sort Tests ====================

#[tokio::test]
async fn fetch_sorted_orders_results_by_created_at() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        endpoints::FIELDS,
        envelope(json!([
            {"title": "c", "created_at": "2024-03-01T00:00:00Z"},
            {"title": "a", "created_at": "2024-01-01T00:00:00Z"},
            {"title": "b", "created_at": "2024-02-01T00:00:00Z"}
        ])),
    )
    .await;

    let client = ApiClient::new(server.uri());
    let records = client.fields().await.expect("fetch should succeed");

    let titles: Vec<_> = records.iter().filter_map(|r| r.text("title")).collect();
    assert_eq!(titles, ["a", "b", "c"]);
}

#[tokio::test]
async fn fetch_records_propagates_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::POSTS))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.posts().await.expect_err("should fail");

    match err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_records_rejects_malformed_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::FAQS))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.faqs().await.expect_err("should fail");

    assert!(matches!(err, ApiError::Parse { .. }));
}

// ==================== Contact Page Tests ====================

#[tokio::test]
async fn contact_page_merges_fields_into_cards() {
    let server = MockServer::start().await;
    mock_get(&server, endpoints::FIELDS, envelope(fields_payload())).await;
    mock_get(
        &server,
        endpoints::FAQS,
        envelope(json!([{
            "created_at": "2024-01-01T00:00:00Z",
            "title": "Savol",
            "title_en": "Question",
            "description": "Javob",
            "description_en": "Answer"
        }])),
    )
    .await;
    mock_get(
        &server,
        endpoints::SERVICES,
        envelope(json!([{"id": "svc-1", "title": "Veb", "title_en": "Web"}])),
    )
    .await;

    let client = ApiClient::new(server.uri());
    let page = load_contact_page(&client, Locale::ENGLISH).await;

    // Four cards regardless of how many field records arrived
    assert_eq!(page.cards.len(), 4);
    assert_eq!(page.cards[0].description, "Email us");
    // value_en is null: resolution falls back to the base value
    assert_eq!(page.cards[0].contact, "info@devosoft.uz");
    assert_eq!(page.cards[1].description, "Call us");
    // Only two records past the offset: the last two cards stay static
    assert_eq!(page.cards[2].description, "Visit our office");

    assert_eq!(page.faqs.data()[0].title, "Question");
    assert_eq!(page.services.data()[0].title, "Web");
    assert!(!page.fields_failed);
}

#[tokio::test]
async fn contact_page_russian_resolution() {
    let server = MockServer::start().await;
    mock_get(&server, endpoints::FIELDS, envelope(fields_payload())).await;
    mock_get(&server, endpoints::FAQS, envelope(json!([]))).await;
    mock_get(&server, endpoints::SERVICES, envelope(json!([]))).await;

    let client = ApiClient::new(server.uri());
    let page = load_contact_page(&client, Locale::RUSSIAN).await;

    assert_eq!(page.cards[0].description, "Напишите нам");
    // No ru variant on the second record: falls back to base title
    assert_eq!(page.cards[1].description, "Telefon raqami");
}

#[tokio::test]
async fn contact_page_survives_fields_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::FIELDS))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mock_get(&server, endpoints::FAQS, envelope(json!([]))).await;
    mock_get(&server, endpoints::SERVICES, envelope(json!([]))).await;

    let client = ApiClient::new(server.uri());
    let page = load_contact_page(&client, Locale::UZBEK).await;

    // Page resolved (not loading), cards fall back to static defaults,
    // the failure is flagged, and nothing panicked.
    assert!(page.fields_failed);
    assert_eq!(page.cards.len(), 4);
    assert_eq!(page.cards[0].title, "Email");
    assert!(!page.faqs.is_loading());
    assert!(page.faqs.data().is_empty());
}

#[tokio::test]
async fn contact_page_with_empty_backend_is_fully_static() {
    let server = MockServer::start().await;
    mock_get(&server, endpoints::FIELDS, envelope(json!([]))).await;
    mock_get(&server, endpoints::FAQS, envelope(json!([]))).await;
    mock_get(&server, endpoints::SERVICES, envelope(json!([]))).await;

    let client = ApiClient::new(server.uri());
    let page = load_contact_page(&client, Locale::ENGLISH).await;

    assert_eq!(page.cards.len(), 4);
    assert_eq!(page.cards[0].contact, "info@devosoft.uz");
    assert!(!page.fields_failed);
    // Loaded-but-empty, not loading and not failed
    assert!(!page.faqs.is_loading());
    assert!(!page.faqs.is_failed());
}

// ==================== Blog Page Tests ====================

#[tokio::test]
async fn blog_page_loads_localized_posts() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        endpoints::POSTS,
        envelope(json!([{
            "id": "post-1",
            "created_at": "2024-01-01T00:00:00Z",
            "title": "Yangilik",
            "title_en": "News",
            "context": "Matn",
            "context_en": "Body",
            "tags": [{"title": "Texnologiya", "title_en": "Tech"}],
            "estimated_read_time": 3,
            "featured": false,
            "posted": true
        }])),
    )
    .await;

    let client = ApiClient::new(server.uri());
    let page = load_blog_page(&client, Locale::ENGLISH).await;

    let posts = page.posts.data();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "News");
    assert_eq!(posts[0].tags, ["Tech".to_string()]);
    assert!(posts[0].posted);
}

// ==================== Subscription Tests ====================

#[tokio::test]
async fn empty_email_never_reaches_the_network() {
    let server = MockServer::start().await;
    // Any POST arriving here fails the test on drop
    Mock::given(method("POST"))
        .and(path(endpoints::EMAIL_LISTS))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = EmailSubscription::new("", "Subscribed from footer form");
    assert_eq!(result, Err(FormError::EmailRequired));
    assert_eq!(
        FormError::EmailRequired.message(Locale::UZBEK),
        "Email kiritilishi kerak!"
    );
}

#[tokio::test]
async fn subscription_posts_expected_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::EMAIL_LISTS))
        .and(body_json(json!({
            "notes": "Subscribed from footer form",
            "email": "user@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "notes": "Subscribed from footer form",
            "email": "user@example.com",
            "created_at": "2024-05-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let subscription =
        EmailSubscription::new("user@example.com", "Subscribed from footer form").unwrap();

    let record = client
        .subscribe(&subscription)
        .await
        .expect("subscription should succeed");
    assert_eq!(record.text("email"), Some("user@example.com"));
}

#[tokio::test]
async fn rejected_subscription_keeps_the_form_value() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::EMAIL_LISTS))
        .respond_with(ResponseTemplate::new(400).set_body_string("duplicate"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let subscription = EmailSubscription::new("user@example.com", "footer").unwrap();

    let err = client
        .subscribe(&subscription)
        .await
        .expect_err("should be rejected");
    assert!(matches!(err, ApiError::Status { .. }));

    // The payload is still in hand: the user can retry without retyping
    assert_eq!(subscription.email, "user@example.com");
}

// ==================== Contact Message Tests ====================

#[tokio::test]
async fn contact_message_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::MESSAGES))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "msg-1",
            "created_at": "2024-05-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let message = ContactMessage {
        first_name: "Aziz".to_string(),
        last_name: "Karimov".to_string(),
        phone_number: "+998 90 123 45 67".to_string(),
        email: "aziz@example.com".to_string(),
        company: "Example LLC".to_string(),
        message: "Salom!".to_string(),
        service: "svc-1".to_string(),
    };

    message.validate().expect("message should validate");
    client
        .send_message(&message)
        .await
        .expect("send should succeed");
}

// ==================== Job Application Tests ====================

#[tokio::test]
async fn application_uploads_resume_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::APPLICATIONS))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "app-1",
            "status": "Submitted",
            "job_posting": "job-42",
            "created_at": "2024-05-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = tempfile::TempDir::new().expect("temp dir");
    let resume_path = temp_dir.path().join("resume.pdf");
    std::fs::write(&resume_path, b"%PDF-1.4 fake resume").expect("write resume");

    let client = ApiClient::new(server.uri());
    let application = JobApplication {
        notes: String::new(),
        full_name: "Aziz Karimov".to_string(),
        description: "Backend developer".to_string(),
        phone_number: "+998 90 123 45 67".to_string(),
        email: "aziz@example.com".to_string(),
        job_posting: "job-42".to_string(),
        resume: Some(resume_path),
    };

    application.validate().expect("application should validate");
    let record = client
        .submit_application(&application)
        .await
        .expect("submission should succeed");

    assert_eq!(record.text("status"), Some("Submitted"));
}

#[tokio::test]
async fn application_with_missing_resume_file_fails_before_posting() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoints::APPLICATIONS))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let application = JobApplication {
        full_name: "Aziz Karimov".to_string(),
        email: "aziz@example.com".to_string(),
        job_posting: "job-42".to_string(),
        resume: Some("/nonexistent/resume.pdf".into()),
        ..JobApplication::default()
    };

    let err = client
        .submit_application(&application)
        .await
        .expect_err("should fail reading the attachment");
    assert!(matches!(err, ApiError::Attachment { .. }));
}
