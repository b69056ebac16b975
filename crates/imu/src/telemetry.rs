use {
    crate::*,
    std::{
        io::{BufRead, BufReader, ErrorKind, Read},
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    },
    tokio::{
        sync::watch,
        task::{JoinHandle, spawn_blocking},
    },
};

// serial reads give up after this long so the worker can notice a close
const READ_TIMEOUT_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub path: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            path: "/dev/ttyUSB0".to_string(),
            baud_rate: 115_200,
            timeout: Duration::from_millis(READ_TIMEOUT_MS),
        }
    }
}

impl TelemetryConfig {
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Connected,
    /// Ended by `close()` or by the peer hanging up.
    Closed,
    /// Ended by a read error.
    Failed(String),
}

/// Names of the serial ports present on this machine.
pub fn list_ports() -> Result<Vec<String>, TelemetryError> {
    Ok(serialport::available_ports()?
        .into_iter()
        .map(|port| port.port_name)
        .collect())
}

// bytes that are not UTF-8 are dropped rather than replaced
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace(char::REPLACEMENT_CHARACTER, "")
}

fn handle_line(bytes: &[u8], state: &OrientationState) {
    let line = decode_line(bytes);
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    match line.parse::<OrientationSample>() {
        Ok(sample) => state.publish(sample),
        Err(error) => log::debug!("dropping telemetry line {line:?}: {error}"),
    }
}

/// Read newline-terminated telemetry from `reader` and publish every valid
/// line into `state` until `cancel` is raised (`Ok`) or the stream ends
/// (`ConnectionClosed`) or fails (`Io`). Malformed lines never end the loop,
/// and read timeouts keep any partial line for the next read.
pub fn run_reader<R: BufRead>(
    mut reader: R,
    state: &OrientationState,
    cancel: &AtomicBool,
) -> Result<(), TelemetryError> {
    let mut line = Vec::with_capacity(64);
    while !cancel.load(Ordering::Relaxed) {
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                if !line.is_empty() {
                    handle_line(&line, state);
                }
                return Err(TelemetryError::ConnectionClosed);
            }
            Ok(_) => {
                // no newline means EOF cut the line short; the next read says so
                if line.last() == Some(&b'\n') {
                    handle_line(&line, state);
                    line.clear();
                }
            }
            Err(error)
                if matches!(
                    error.kind(),
                    ErrorKind::TimedOut | ErrorKind::Interrupted | ErrorKind::WouldBlock
                ) => {}
            Err(error) => return Err(error.into()),
        }
    }
    Ok(())
}

/// A running telemetry link: a blocking worker feeding `OrientationState`.
///
/// Must be created from inside a tokio runtime.
pub struct TelemetryIn {
    name: String,
    cancel: Arc<AtomicBool>,
    status: watch::Receiver<LinkStatus>,
    join_handle: Option<JoinHandle<()>>,
}

impl TelemetryIn {
    /// Open the serial port described by `config` and start reading.
    pub fn open(
        config: &TelemetryConfig,
        state: Arc<OrientationState>,
    ) -> Result<Self, TelemetryError> {
        let port = serialport::new(&config.path, config.baud_rate)
            .timeout(config.timeout)
            .open()?;
        log::info!(
            "telemetry: opened {} at {} baud",
            config.path,
            config.baud_rate
        );
        Ok(Self::from_reader(config.path.clone(), port, state))
    }

    /// Start reading telemetry from any byte stream.
    pub fn from_reader<R: Read + Send + 'static>(
        name: impl Into<String>,
        reader: R,
        state: Arc<OrientationState>,
    ) -> Self {
        let name = name.into();
        let cancel = Arc::new(AtomicBool::new(false));
        let (status_tx, status) = watch::channel(LinkStatus::Connected);

        let join_handle = spawn_blocking({
            let cancel = Arc::clone(&cancel);
            let name = name.clone();
            move || {
                let status = match run_reader(BufReader::new(reader), &state, &cancel) {
                    Ok(()) => {
                        log::info!("telemetry worker {name}: cancelled");
                        LinkStatus::Closed
                    }
                    Err(TelemetryError::ConnectionClosed) => {
                        log::info!("telemetry worker {name}: stream closed");
                        LinkStatus::Closed
                    }
                    Err(error) => {
                        log::error!("telemetry worker {name}: {error}");
                        LinkStatus::Failed(error.to_string())
                    }
                };
                // nobody listening is fine, the link is being torn down
                let _ = status_tx.send(status);
            }
        });

        Self {
            name,
            cancel,
            status,
            join_handle: Some(join_handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> LinkStatus {
        self.status.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.status() == LinkStatus::Connected
    }

    /// Wait until the worker has stopped and return how it ended.
    pub async fn finished(&mut self) -> LinkStatus {
        match self
            .status
            .wait_for(|status| *status != LinkStatus::Connected)
            .await
        {
            Ok(status) => status.clone(),
            // sender dropped without a final status: the worker panicked
            Err(_) => LinkStatus::Failed("telemetry worker died".to_string()),
        }
    }

    /// Ask the worker to stop after its current read. Does not wait.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Stop the worker and wait for it to release the stream.
    pub async fn close(mut self) -> LinkStatus {
        self.cancel();
        if let Some(join_handle) = self.join_handle.take() {
            if let Err(error) = join_handle.await {
                log::error!("telemetry worker {}: join failed: {error}", self.name);
            }
        }
        self.status()
    }
}

impl Drop for TelemetryIn {
    fn drop(&mut self) {
        // the worker exits on its next timeout and drops the port
        self.cancel();
    }
}
