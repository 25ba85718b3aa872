// testing.rs
use crate::{error::PanelError, transport::Transport};
use async_trait::async_trait;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

/// Records every request and answers from a canned status body.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<String>>,
    status_body: Mutex<Option<String>>,
    status_code: Mutex<Option<u16>>,
}

impl RecordingTransport {
    pub fn with_status(body: &str) -> Self {
        let transport = Self::default();
        transport.set_status(Some(body));
        transport
    }

    pub fn set_status(&self, body: Option<&str>) {
        *self.status_body.lock().unwrap() = body.map(str::to_string);
    }

    /// Answers the status request with a non-2xx code, keeping the body.
    pub fn set_status_code(&self, code: u16) {
        *self.status_code.lock().unwrap() = Some(code);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path_and_query: &str) -> Result<String, PanelError> {
        self.requests
            .lock()
            .unwrap()
            .push(path_and_query.to_string());

        if path_and_query.starts_with('/') {
            return Ok("OK".to_string());
        }

        let body = self.status_body.lock().unwrap().clone();
        let code = *self.status_code.lock().unwrap();
        match (body, code) {
            (Some(body), None) => Ok(body),
            (body, code) => Err(PanelError::Status {
                path: path_and_query.to_string(),
                status: code.unwrap_or(404),
                body: body.unwrap_or_else(|| "Not found".to_string()),
            }),
        }
    }
}

/// Formatted log output collected while a [`LogCapture`] guard is alive.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a thread-local subscriber writing into the returned capture.
    ///
    /// `#[tokio::test]` runs on a current-thread runtime, so every event the
    /// test awaits is seen as long as the guard is held.
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// Whether some line was logged at `level` and contains `text`.
    pub fn has(&self, level: &str, text: &str) -> bool {
        self.contents()
            .lines()
            .any(|line| line.contains(level) && line.contains(text))
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
