use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::Instant;

use folio::{
    core::{
        msg::{contact::ContactMsg, nav::NavMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
        timer::TimerId,
    },
    domain::{
        contact::{ContactPayload, Field},
        ui::Page,
    },
    infrastructure::{
        config::{Config, ContactConfig},
        mail::{HttpMailClient, MailClient, MailError},
        mail_service::MailService,
        timer_service::{TimerOperation, TimerService},
    },
    integration::runtime::Runtime,
};

fn contact_runtime() -> Runtime {
    let config = Config::embedded().expect("embedded config");
    let state = AppState::new_with_config(config).with_start_page(Page::Contact);
    Runtime::new_with_executor(state)
}

fn fill_form(runtime: &mut Runtime) {
    for (field, value) in [
        (Field::Name, "Jane"),
        (Field::Email, "jane@x.com"),
        (Field::Subject, "Hi"),
        (Field::Message, "Hello"),
    ] {
        runtime.send_msg(Msg::Contact(ContactMsg::SetField(field, value.to_string())));
    }
    runtime.run_update_cycle().expect("update cycle");
}

fn http_client(server: &MockServer) -> Arc<dyn MailClient> {
    let client = HttpMailClient::new(&ContactConfig {
        endpoint: server.url("/api/send-email"),
        ..Default::default()
    })
    .expect("client");
    Arc::new(client)
}

/// Runtime + MailService against `client`; timer operations are captured
/// instead of executed.
fn wire(
    runtime: &mut Runtime,
    client: Arc<dyn MailClient>,
) -> (
    mpsc::UnboundedReceiver<RawMsg>,
    mpsc::UnboundedReceiver<TimerOperation>,
) {
    let (service_tx, service_rx) = mpsc::unbounded_channel();
    let (mail_tx, _cancel, service) = MailService::new(client, service_tx);
    service.run();
    runtime.add_mail_sender(mail_tx).expect("executor");

    let (timer_tx, timer_rx) = mpsc::unbounded_channel();
    runtime.add_timer_sender(timer_tx).expect("executor");
    (service_rx, timer_rx)
}

#[tokio::test]
async fn test_successful_submit_clears_fields_and_schedules_ack() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/send-email").json_body(json!({
                "name": "Jane",
                "email": "jane@x.com",
                "subject": "Hi",
                "message": "Hello"
            }));
            then.status(200).json_body(json!({ "id": "abc" }));
        })
        .await;

    let mut runtime = contact_runtime();
    let (mut service_rx, mut timer_rx) = wire(&mut runtime, http_client(&server));
    fill_form(&mut runtime);

    runtime.send_msg(Msg::Contact(ContactMsg::Submit));
    runtime.run_update_cycle().expect("update cycle");
    assert!(runtime.state().contact.submitting);

    let raw = service_rx.recv().await.expect("mail completed");
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle().expect("update cycle");

    mock.assert_async().await;
    let contact = &runtime.state().contact;
    assert!(!contact.submitting);
    assert!(contact.submitted);
    assert!(contact.fields.get(Field::Name).is_empty());
    assert!(contact.fields.get(Field::Message).is_empty());

    // The acknowledgment is dismissed by a 5 s timer
    let ack = loop {
        match timer_rx.recv().await.expect("timer operation") {
            TimerOperation::Schedule { key, after } if key.id == TimerId::AckDismiss => {
                break (key, after);
            }
            _ => continue,
        }
    };
    assert_eq!(ack.1, Duration::from_secs(5));

    runtime.send_raw_msg(RawMsg::TimerFired(ack.0));
    runtime.run_update_cycle().expect("update cycle");
    assert!(!runtime.state().contact.submitted);
}

#[tokio::test]
async fn test_rejection_keeps_fields_and_shows_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/send-email");
            then.status(400).json_body(json!({ "error": "Invalid email" }));
        })
        .await;

    let mut runtime = contact_runtime();
    let (mut service_rx, _timer_rx) = wire(&mut runtime, http_client(&server));
    fill_form(&mut runtime);

    runtime.send_msg(Msg::Contact(ContactMsg::Submit));
    runtime.run_update_cycle().expect("update cycle");
    let raw = service_rx.recv().await.expect("mail completed");
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle().expect("update cycle");

    let state = runtime.state();
    assert!(state.has_modal());
    assert_eq!(
        state.contact.notice.as_ref().map(|n| n.body.as_str()),
        Some("Invalid email")
    );
    assert!(!state.contact.submitting);
    assert!(!state.contact.submitted);
    assert_eq!(state.contact.fields.get(Field::Email).content, "jane@x.com");
}

#[tokio::test]
async fn test_transport_failure_uses_generic_notice() {
    let mut runtime = contact_runtime();
    let client: Arc<dyn MailClient> = Arc::new(
        HttpMailClient::new(&ContactConfig {
            endpoint: "http://127.0.0.1:9/api/send-email".into(),
            timeout_secs: 2,
            ..Default::default()
        })
        .expect("client"),
    );
    let (mut service_rx, _timer_rx) = wire(&mut runtime, client);
    fill_form(&mut runtime);

    runtime.send_msg(Msg::Contact(ContactMsg::Submit));
    runtime.run_update_cycle().expect("update cycle");
    let raw = service_rx.recv().await.expect("mail completed");
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle().expect("update cycle");

    let contact = &runtime.state().contact;
    assert_eq!(
        contact.notice.as_ref().map(|n| n.body.as_str()),
        Some("Failed to send message. Please try again.")
    );
    assert_eq!(contact.fields.get(Field::Name).content, "Jane");
}

#[tokio::test]
async fn test_empty_field_prompts_without_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/send-email");
            then.status(200);
        })
        .await;

    let mut runtime = contact_runtime();
    let (_service_rx, _timer_rx) = wire(&mut runtime, http_client(&server));
    runtime.send_msg(Msg::Contact(ContactMsg::SetField(Field::Name, "Jane".into())));
    runtime.send_msg(Msg::Contact(ContactMsg::Submit));
    runtime.run_update_cycle().expect("update cycle");

    assert_eq!(runtime.state().contact.prompt, Some(Field::Email));
    assert!(!runtime.state().contact.submitting);
    mock.assert_hits_async(0).await;
}

/// Relay that answers immediately without touching the network.
struct AcceptingClient;

#[async_trait]
impl MailClient for AcceptingClient {
    async fn send(&self, _payload: &ContactPayload) -> Result<(), MailError> {
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_acknowledgment_disappears_after_exactly_five_seconds() {
    let mut runtime = contact_runtime();
    let (service_tx, mut service_rx) = mpsc::unbounded_channel();
    let (mail_tx, _mail_cancel, mail) = MailService::new(Arc::new(AcceptingClient), service_tx.clone());
    mail.run();
    let (timer_tx, _timer_cancel, timers) = TimerService::new(service_tx);
    timers.run();
    runtime.add_mail_sender(mail_tx).expect("executor");
    runtime.add_timer_sender(timer_tx).expect("executor");
    fill_form(&mut runtime);

    runtime.send_msg(Msg::Contact(ContactMsg::Submit));
    runtime.run_update_cycle().expect("update cycle");

    let raw = service_rx.recv().await.expect("mail completed");
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle().expect("update cycle");
    assert!(runtime.state().contact.submitted);
    let acknowledged_at = Instant::now();

    let raw = service_rx.recv().await.expect("ack timer");
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle().expect("update cycle");

    assert_eq!(acknowledged_at.elapsed(), Duration::from_secs(5));
    assert!(!runtime.state().contact.submitted);
}

#[tokio::test]
async fn test_result_after_leaving_page_is_dropped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/send-email");
            then.status(500).json_body(json!({ "error": "boom" }));
        })
        .await;

    let mut runtime = contact_runtime();
    let (mut service_rx, _timer_rx) = wire(&mut runtime, http_client(&server));
    fill_form(&mut runtime);
    runtime.send_msg(Msg::Contact(ContactMsg::Submit));
    runtime.send_msg(Msg::Nav(NavMsg::Select(Page::Home)));
    runtime.send_msg(Msg::Nav(NavMsg::Select(Page::Contact)));
    runtime.run_update_cycle().expect("update cycle");

    let raw = service_rx.recv().await.expect("mail completed");
    runtime.send_raw_msg(raw);
    runtime.run_update_cycle().expect("update cycle");

    assert!(!runtime.state().has_modal());
    assert!(!runtime.state().contact.submitting);
}
