//! Console progress for interactive runs
//!
//! Prints stage banners and previews where the reviewer reads them (stdout,
//! or stderr when stdout is reserved for a machine-readable summary) and
//! forwards every event to [`LoggingHandler`].

use crate::progress::{LoggingHandler, ProgressEvent, ProgressHandler};

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress {
    logger: LoggingHandler,
    use_stderr: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stderr() -> Self {
        Self {
            use_stderr: true,
            ..Self::default()
        }
    }

    /// Lines shown to the reviewer for `event`, if any.
    pub fn render(event: &ProgressEvent) -> Vec<String> {
        match event {
            ProgressEvent::Started { repo } => {
                vec![format!("Fetching README for: {} ...", repo)]
            }
            ProgressEvent::StageStarted { stage } => vec![format!("\n=== {} ===", stage)],
            ProgressEvent::StageComplete { preview, .. } => preview.clone(),
            _ => Vec::new(),
        }
    }
}

impl ProgressHandler for ConsoleProgress {
    fn on_progress(&self, event: &ProgressEvent) {
        for line in Self::render(event) {
            if self.use_stderr {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        }
        self.logger.on_progress(event);
    }
}
