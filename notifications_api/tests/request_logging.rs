use std::io::Write;
use std::sync::{Arc, Mutex};

use notifications_api::{Client, Error};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Installs a debug-level subscriber for the current thread that writes into
/// the returned buffer. `#[tokio::test]` runs on a single thread, so every
/// event emitted while the guard is alive lands in the buffer.
fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

#[tokio::test]
async fn elapsed_time_logged_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notifications/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), "service-id", "api-key").unwrap();
    let (logs, _guard) = capture_logs();
    client.get_notification("abc").await.unwrap();

    let output = logs.contents();
    assert!(output.contains("API request GET"), "logs: {}", output);
    assert!(output.contains("finished in"), "logs: {}", output);
    assert!(!output.contains("failed with"), "logs: {}", output);
}

#[tokio::test]
async fn elapsed_time_logged_on_http_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notifications/abc"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), "service-id", "api-key").unwrap();
    let (logs, _guard) = capture_logs();
    let result = client.get_notification("abc").await;
    assert!(matches!(result, Err(Error::Http(_))));

    let output = logs.contents();
    assert!(output.contains("failed with 500"), "logs: {}", output);
    assert!(output.contains("finished in"), "logs: {}", output);
}

#[tokio::test]
async fn elapsed_time_logged_on_transport_failure() {
    // Nothing listens on port 1.
    let client = Client::new("http://127.0.0.1:1", "service-id", "api-key").unwrap();
    let (logs, _guard) = capture_logs();
    let result = client.get_notification("abc").await;
    assert!(matches!(result, Err(Error::Http(ref e)) if e.is_transport_failure()));

    let output = logs.contents();
    assert!(output.contains("failed with no status"), "logs: {}", output);
    assert!(output.contains("finished in"), "logs: {}", output);
}
