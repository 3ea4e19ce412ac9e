//! JSON-lines driver for the event adapter.
//!
//! Each input line is one [`Gesture`]. For every gesture the driver writes
//! the render patches it produced, one JSON object per line, followed by a
//! single outcome line. A view layer on the other end of the pipe applies
//! the patches in order.
//!
//! ```text
//! → {"gesture":"submit","text":"buy milk"}
//! ← {"patch":"append","position":0,"task":{"id":1,"text":"buy milk","done":false}}
//! ← {"patch":"clear_input"}
//! ← {"outcome":"ok","task":{"id":1,"text":"buy milk","done":false}}
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Serialize;
use todo_core::{ErrorKind, EventAdapter, Gesture, PatchLog, Task, TaskError};

/// Result line written after the patches of each gesture.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum Outcome {
    Ok { task: Task },
    Error { kind: ErrorKind, message: String },
    Invalid { message: String },
}

impl From<std::result::Result<Task, TaskError>> for Outcome {
    fn from(result: std::result::Result<Task, TaskError>) -> Self {
        match result {
            Ok(task) => Outcome::Ok { task },
            Err(e) => Outcome::Error {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

/// An event session reading gestures from `input` and writing to `output`.
pub struct EventSession<R, W> {
    input: R,
    output: W,
    adapter: EventAdapter<PatchLog>,
}

impl<R: BufRead, W: Write> EventSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            adapter: EventAdapter::new(PatchLog::new()),
        }
    }

    /// Processes gestures until input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read gesture")?;
            if read == 0 {
                info!("Input closed, ending event session");
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            let outcome = match serde_json::from_str::<Gesture>(line.trim()) {
                Ok(gesture) => {
                    debug!("Dispatching {gesture:?}");
                    Outcome::from(self.adapter.dispatch(gesture))
                }
                Err(e) => {
                    warn!("Ignoring malformed gesture: {e}");
                    Outcome::Invalid {
                        message: e.to_string(),
                    }
                }
            };

            for patch in self.adapter.view_mut().drain() {
                self.write_json(&patch)?;
            }
            self.write_json(&outcome)?;
            self.output.flush().context("Failed to flush output")?;
        }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.output, value).context("Failed to encode output")?;
        writeln!(self.output)?;
        Ok(())
    }
}
