use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

/// Receives progress of a queued job. Called inline from the polling loop,
/// an error returned here aborts the job wait.
pub trait QueueEventHandler: Send + Sync {
    fn on_completed(&self, request_id: &str) -> Result<()>;
    fn on_log(&self, message: &str) -> Result<()>;
    fn on_queued(&self, request_id: &str, position: Option<u64>) -> Result<()>;
}

pub struct DefaultQueueEventHandler;

impl QueueEventHandler for DefaultQueueEventHandler {
    fn on_completed(&self, request_id: &str) -> Result<()> {
        debug!("Request {request_id} completed");
        Ok(())
    }

    fn on_log(&self, message: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{message}")?;
        stdout.flush()?;
        Ok(())
    }

    fn on_queued(&self, request_id: &str, position: Option<u64>) -> Result<()> {
        match position {
            Some(position) => debug!("Request {request_id} in queue at position {position}"),
            None => debug!("Request {request_id} in queue"),
        }
        Ok(())
    }
}
