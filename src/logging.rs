//! Log setup. Events are formatted by `tracing-subscriber` and handed to the
//! stderr buffer, so nothing is written over the TUI while it owns the screen.

use std::io;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "HOT_DICE_LOG";

/// Collects one formatted event and forwards it on drop.
pub struct EventWriter {
    buf: Vec<u8>,
}

impl io::Write for EventWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for EventWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        crate::stderr_buffer::warn(line.trim_end().to_string());
    }
}

pub struct BufferedStderr;

impl<'a> MakeWriter<'a> for BufferedStderr {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> Self::Writer {
        EventWriter { buf: Vec::new() }
    }
}

/// Install the global subscriber. `HOT_DICE_LOG` wins over the verbose flag.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "hot_dice=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(BufferedStderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging setup failed: {}", e);
    }
}
