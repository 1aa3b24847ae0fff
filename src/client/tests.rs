//! Tests for the Spark client

use super::*;
use crate::download::FilePayload;
use crate::error::Error;
use crate::models::{
    AccessTokenRequest, Message, NewMembership, NewMessage, NewRoom, PersonQuery,
    RefreshTokenRequest, WebhookParams,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> SparkClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/v1", server.uri()))
        .token("bot-token")
        .build()
        .unwrap();
    SparkClient::new(config).unwrap()
}

// ============================================================================
// Rooms
// ============================================================================

#[tokio::test]
async fn test_create_room() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms"))
        .and(header("Authorization", "Bearer bot-token"))
        .and(body_json(json!({"title": "Ops"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r1",
            "title": "Ops",
            "type": "group"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let room = client.create_room(&NewRoom::new("Ops")).await.unwrap();
    assert_eq!(room.id, "r1");
    assert_eq!(room.title.as_deref(), Some("Ops"));
}

#[tokio::test]
async fn test_remove_room() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/rooms/r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.remove_room("r1").await.unwrap();
}

#[tokio::test]
async fn test_list_rooms_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rooms"))
        .and(query_param("max", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "r1"}, {"id": "r2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let rooms = client.list_rooms().await.unwrap();
    let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
}

#[tokio::test]
async fn test_list_rooms_follows_links() {
    let server = MockServer::start().await;
    let next = format!("{}/v1/rooms?max=200&cursor=p2", server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/rooms"))
        .and(query_param("cursor", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "r3"}]
        })))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/rooms"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", format!("<{next}>; rel=\"next\"").as_str())
                .set_body_json(json!({"items": [{"id": "r1"}, {"id": "r2"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let rooms = client.list_rooms().await.unwrap();
    let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2", "r3"]);
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_send_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_json(json!({"roomId": "r1", "text": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "roomId": "r1",
            "text": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let message = client
        .send_message(&NewMessage::to_room("r1", "hello"))
        .await
        .unwrap();
    assert_eq!(message.id, "m1");
}

#[tokio::test]
async fn test_get_and_delete_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/messages/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "files": ["https://files.example.com/f1"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/messages/m1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let message = client.get_message("m1").await.unwrap();
    assert_eq!(message.file_uris(), ["https://files.example.com/f1".to_string()]);
    client.delete_message("m1").await.unwrap();
}

#[tokio::test]
async fn test_get_message_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/messages/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"not found"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_message("gone").await.unwrap_err();
    match err {
        Error::Client { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"message":"not found"}"#);
        }
        other => panic!("Expected client error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_messages_encodes_room_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/messages"))
        .and(query_param("roomId", "room/1 a"))
        .and(query_param("max", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "m1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let messages = client.list_messages("room/1 a").await.unwrap();
    assert_eq!(messages.len(), 1);
}

// ============================================================================
// People & Memberships
// ============================================================================

#[tokio::test]
async fn test_get_person_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/people/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "emails": ["ana@example.com"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let people = client
        .get_person(&PersonQuery::ById("p1".into()))
        .await
        .unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].emails, vec!["ana@example.com".to_string()]);
}

#[tokio::test]
async fn test_get_person_by_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/people"))
        .and(query_param("email", "ana@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "p1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let people = client
        .get_person(&PersonQuery::ByEmail("ana@example.com".into()))
        .await
        .unwrap();
    assert_eq!(people[0].id, "p1");
}

#[tokio::test]
async fn test_memberships() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/memberships"))
        .and(body_json(json!({"roomId": "r1", "personEmail": "ana@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ms1",
            "roomId": "r1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/rooms/r1/participants"))
        .and(body_json(json!(["ana@example.com", "bo@example.com"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"added": 2})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/memberships/ms1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let membership = client
        .add_member_to_room(&NewMembership::by_email("r1", "ana@example.com"))
        .await
        .unwrap();
    assert_eq!(membership.id, "ms1");

    let added = client
        .add_user_to_room("r1", &json!(["ana@example.com", "bo@example.com"]))
        .await
        .unwrap();
    assert_eq!(added["added"], 2);

    client.remove_user_from_room("ms1").await.unwrap();
}

// ============================================================================
// Webhooks
// ============================================================================

#[tokio::test]
async fn test_webhooks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/webhooks"))
        .and(body_json(json!({
            "name": "hook",
            "targetUrl": "https://bot.example.com/hook",
            "resource": "messages",
            "event": "created",
            "filter": "roomId=r1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "w1",
            "name": "hook"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/webhooks/w1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let webhook = client
        .add_webhook(&WebhookParams::new("hook", "https://bot.example.com/hook", "r1"))
        .await
        .unwrap();
    assert_eq!(webhook.id, "w1");
    client.delete_webhook("w1").await.unwrap();
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_get_file_uris() {
    let messages: Vec<Message> = serde_json::from_value(json!([
        {"id": "m1", "files": ["u1", "u2"]},
        {"id": "m2"},
        {"id": "m3", "files": ["u3"]}
    ]))
    .unwrap();

    assert_eq!(get_file_uris(&messages), vec!["u1", "u2", "u3"]);
    assert!(get_file_uris(&[]).is_empty());
}

#[tokio::test]
async fn test_download_file_pdf_with_token_override() {
    let server = MockServer::start().await;
    let bytes = vec![0x25u8, 0x50, 0x44, 0x46, 0x00, 0xff];

    Mock::given(method("GET"))
        .and(path("/v1/contents/f1"))
        .and(header("Authorization", "Bearer other-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", "attachment; filename=\"report.pdf\"")
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(bytes.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let uri = format!("{}/v1/contents/f1", server.uri());
    let download = client
        .download_file(&uri, Some("other-token"))
        .await
        .unwrap();

    assert_eq!(download.file_name, "report.pdf");
    assert_eq!(download.blob, FilePayload::Base64(STANDARD.encode(&bytes)));
}

#[tokio::test]
async fn test_download_file_text_uses_default_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contents/f2"))
        .and(header("Authorization", "Bearer bot-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", "attachment; filename=\"notes.txt\"")
                .insert_header("content-type", "text/plain")
                .set_body_string("plain words"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let uri = format!("{}/v1/contents/f2", server.uri());
    let download = client.download_file(&uri, None).await.unwrap();

    assert_eq!(download.file_name, "notes.txt");
    assert_eq!(download.blob.to_content().unwrap(), b"plain words");
    assert!(!download.blob.is_base64());
}

// ============================================================================
// OAuth
// ============================================================================

#[tokio::test]
async fn test_access_token_grants() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/access_token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("redirect_uri=https%3A%2F%2Fbot.example.com%2Fcb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-1",
            "expires_in": 1209600,
            "refresh_token": "rt-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/access_token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let token = client
        .request_access_token(&AccessTokenRequest {
            client_id: "cid".into(),
            client_secret: "secret".into(),
            code: "c0de".into(),
            redirect_uri: "https://bot.example.com/cb".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.access_token, "at-1");
    assert_eq!(token.refresh_token.as_deref(), Some("rt-1"));

    let token = client
        .refresh_access_token(&RefreshTokenRequest {
            client_id: "cid".into(),
            client_secret: "secret".into(),
            refresh_token: "rt-1".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.access_token, "at-2");
}
