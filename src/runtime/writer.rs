//! Background layout writer
//!
//! One long-lived thread owns every write to the `LayoutStore`. Jobs are
//! handled in submission order, so the newest record for a key is always the
//! one left in the store. Jobs that queue up while a write is running are
//! taken as one batch, and only the last record per key in that batch is
//! written.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::messages::{LayoutMsg, Msg};
use crate::persistence::LayoutStore;

/// A record waiting to be written
#[derive(Debug, Clone, PartialEq)]
pub struct PersistJob {
    pub key: String,
    pub contents: String,
}

/// Handle to the writer thread
///
/// Every submitted job gets exactly one `LayoutMsg::PersistCompleted` reply.
/// Dropping the handle lets queued jobs finish, then joins the thread.
pub struct LayoutWriter {
    jobs: Option<Sender<PersistJob>>,
    handle: Option<JoinHandle<()>>,
}

impl LayoutWriter {
    pub fn spawn(store: Arc<dyn LayoutStore>, replies: Sender<Msg>) -> Self {
        let (jobs, queue) = mpsc::channel();
        let handle = std::thread::spawn(move || run(store.as_ref(), queue, replies));
        Self {
            jobs: Some(jobs),
            handle: Some(handle),
        }
    }

    /// Queue a write. Hands the job back if the thread is gone.
    pub fn submit(&self, job: PersistJob) -> Result<(), PersistJob> {
        match &self.jobs {
            Some(jobs) => jobs.send(job).map_err(|e| e.0),
            None => Err(job),
        }
    }
}

impl Drop for LayoutWriter {
    fn drop(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("layout writer thread panicked");
            }
        }
    }
}

fn run(store: &dyn LayoutStore, queue: Receiver<PersistJob>, replies: Sender<Msg>) {
    while let Ok(first) = queue.recv() {
        let mut batch = vec![first];
        batch.extend(queue.try_iter());

        let mut results: HashMap<&str, Result<(), String>> = HashMap::new();
        for (index, job) in batch.iter().enumerate() {
            let superseded = batch[index + 1..].iter().any(|later| later.key == job.key);
            if superseded {
                continue;
            }
            let result = store.save(&job.key, &job.contents).map_err(|e| e.to_string());
            results.insert(job.key.as_str(), result);
        }
        if batch.len() > results.len() {
            tracing::trace!(
                queued = batch.len(),
                written = results.len(),
                "collapsed layout writes"
            );
        }

        for job in &batch {
            // A superseded job shares the outcome of the write that replaced it
            let result = results.get(job.key.as_str()).cloned().unwrap_or(Ok(()));
            let reply = Msg::Layout(LayoutMsg::PersistCompleted {
                key: job.key.clone(),
                result,
            });
            if replies.send(reply).is_err() {
                return;
            }
        }
    }
}
