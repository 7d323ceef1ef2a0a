//! End-to-end dispatch tests over file stores and a mocked Messages API.

use chrono::Local;
use kidconnect_core::{Recipient, ScheduledItem};
use kidconnect_dispatch::{
    DailyCampaignDispatcher, DispatchOutcome, ImmediateBroadcastDispatcher, IneligibleReason,
};
use kidconnect_integration_tests::{file_context, received_payloads, RECIPIENTS_JSON5};
use kidconnect_store::{parse_records, DeliveryLog, FileStores, RecipientDirectory, ScheduleStore};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn accepting_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"message_uuid": "test"})))
        .mount(&server)
        .await;
    server
}

async fn seeded_stores(dir: &TempDir) -> FileStores {
    let stores = FileStores::in_dir(dir.path());
    let recipients: Vec<Recipient> = parse_records(RECIPIENTS_JSON5).unwrap();
    stores.directory.replace_all(recipients).await.unwrap();
    stores
}

#[tokio::test]
async fn test_broadcast_end_to_end() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir).await;
    let server = accepting_server().await;
    let started = Local::now();

    let dispatcher = ImmediateBroadcastDispatcher::new(file_context(&stores, &server));
    let summary = dispatcher.broadcast("Picture day tomorrow", None).await.unwrap();

    assert_eq!(summary.sent, 2);
    assert_eq!(summary.outcomes.len(), 4);
    assert!(matches!(
        &summary.outcomes[1],
        DispatchOutcome::SkippedIneligible {
            reason: IneligibleReason::NoPhoneNumber,
            ..
        }
    ));
    assert!(matches!(
        &summary.outcomes[3],
        DispatchOutcome::SkippedIneligible {
            reason: IneligibleReason::NotWhitelisted,
            ..
        }
    ));

    let payloads = received_payloads(&server).await;
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0]["to"], "27831112222");
    assert_eq!(payloads[0]["text"], "Hi Amy, Picture day tomorrow");
    assert_eq!(payloads[0]["channel"], "whatsapp");
    assert_eq!(payloads[1]["to"], "27833334444");

    let records = stores.log.list_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message_content, "Hi Amy, Picture day tomorrow");
    assert_eq!(records[1].recipient_name, "Cara");
    assert_eq!(records[1].class, "B");
    assert!(records.iter().all(|r| r.timestamp >= started));

    let raw = std::fs::read_to_string(stores.log.path()).unwrap();
    assert_eq!(raw.lines().count(), 2);
    assert!(raw.contains("\"Recipient Number\":\"27831112222\""));
}

#[tokio::test]
async fn test_broadcast_to_one_class() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir).await;
    let server = accepting_server().await;

    let dispatcher = ImmediateBroadcastDispatcher::new(file_context(&stores, &server));
    let summary = dispatcher.broadcast("Class B outing", Some("B")).await.unwrap();

    assert_eq!(summary.sent, 1);
    assert_eq!(received_payloads(&server).await.len(), 1);
}

#[tokio::test]
async fn test_rejected_sends_leave_log_untouched() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir).await;
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let dispatcher = ImmediateBroadcastDispatcher::new(file_context(&stores, &server));
    let summary = dispatcher.broadcast("Hello", None).await.unwrap();

    assert_eq!(summary.sent, 0);
    assert_eq!(summary.failed(), 2);
    assert!(stores.log.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_daily_campaign_end_to_end() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir).await;
    let today = Local::now().date_naive();
    stores
        .schedule
        .replace_all(vec![
            ScheduledItem::new(today, "Sports day"),
            ScheduledItem::new(today.succ_opt().unwrap(), "Not yet"),
            ScheduledItem::new(today, "Bring sunscreen"),
        ])
        .await
        .unwrap();
    let server = accepting_server().await;

    let dispatcher =
        DailyCampaignDispatcher::new(file_context(&stores, &server), Arc::new(stores.schedule.clone()));
    let summary = dispatcher.run_daily_campaign(today).await.unwrap();

    assert_eq!(summary.sent, 2);
    assert_eq!(summary.aggregated_items, 2);

    let payloads = received_payloads(&server).await;
    assert_eq!(
        payloads[0]["text"],
        "Hello Amy,\n\nSports day\n\nBring sunscreen\nThank you, have a lovely day - Speelkas Admin"
    );

    let records = stores.log.list_all().await.unwrap();
    assert_eq!(records[0].message_content, "Scheduled: Sports day\n\nBring sunscreen\n\n");

    // A repeated trigger on the same day sends nothing new.
    let again = dispatcher.run_daily_campaign(today).await.unwrap();
    assert_eq!(again.sent, 0);
    assert_eq!(received_payloads(&server).await.len(), 2);
    assert_eq!(stores.log.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_daily_campaign_without_content_contacts_nobody() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir).await;
    let today = Local::now().date_naive();
    stores
        .schedule
        .replace_all(vec![ScheduledItem::new(today.succ_opt().unwrap(), "Tomorrow")])
        .await
        .unwrap();
    let server = accepting_server().await;

    let dispatcher =
        DailyCampaignDispatcher::new(file_context(&stores, &server), Arc::new(stores.schedule.clone()));
    let summary = dispatcher.run_daily_campaign(today).await.unwrap();

    assert!(summary.is_empty());
    assert!(received_payloads(&server).await.is_empty());
    assert!(!stores.log.path().exists());
}
