//! The mounted shell: model, command execution and host resources

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use super::writer::{LayoutWriter, PersistJob};

use crate::commands::Cmd;
use crate::config::ShellConfig;
use crate::error::Result;
use crate::messages::{AppMsg, LayoutMsg, Msg};
use crate::model::AppModel;
use crate::persistence::LayoutStore;
use crate::pointer::{ListenerId, PointerHost};
use crate::update::update;

/// Upper bound on waiting for one background write in `flush`
const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// A mounted dashboard shell driving a `PointerHost`
///
/// Messages go in through `dispatch`; commands returned by `update` are
/// executed here. Layout writes go to a single writer thread and report back
/// over a channel that `pump` drains.
pub struct Shell<H: PointerHost> {
    model: AppModel,
    host: H,
    /// Handle of the shared pointer-down listener while attached
    listener: Option<ListenerId>,
    writer: LayoutWriter,
    msg_rx: Receiver<Msg>,
    pending_writes: usize,
    needs_redraw: bool,
    torn_down: bool,
}

impl<H: PointerHost> Shell<H> {
    /// Build the model from `config`, restoring persisted layouts from `store`
    pub fn mount(config: &ShellConfig, store: Arc<dyn LayoutStore>, host: H) -> Result<Self> {
        let model = AppModel::new(config, store.as_ref())?;
        let (msg_tx, msg_rx) = mpsc::channel();
        let writer = LayoutWriter::spawn(store, msg_tx);
        tracing::info!(
            menus = model.menus.len(),
            groups = model.layout_sources.len(),
            "shell mounted"
        );
        Ok(Self {
            model,
            host,
            listener: None,
            writer,
            msg_rx,
            pending_writes: 0,
            needs_redraw: true,
            torn_down: false,
        })
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Listener handle currently held, if any
    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    /// Writes started but not yet reported back
    pub fn pending_writes(&self) -> usize {
        self.pending_writes
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether anything visible changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Deliver one message. Ignored after teardown.
    ///
    /// `AppMsg::Teardown` unmounts the shell exactly like `teardown`.
    pub fn dispatch(&mut self, msg: Msg) {
        if self.torn_down {
            tracing::debug!(msg = ?msg, "message after teardown ignored");
            return;
        }
        if matches!(msg, Msg::App(AppMsg::Teardown)) {
            self.teardown();
            return;
        }
        self.apply(msg);
    }

    fn apply(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.needs_redraw = true;
        }

        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::PersistLayout { key, contents } => {
                match self.writer.submit(PersistJob { key, contents }) {
                    Ok(()) => self.pending_writes += 1,
                    Err(job) => self.apply(Msg::Layout(LayoutMsg::PersistCompleted {
                        key: job.key,
                        result: Err("layout writer stopped".to_string()),
                    })),
                }
            }
            Cmd::AttachPointerListener => {
                if self.listener.is_some() {
                    tracing::warn!("pointer listener already attached");
                    return;
                }
                self.listener = Some(self.host.add_pointer_listener());
            }
            Cmd::DetachPointerListener => match self.listener.take() {
                Some(id) => self.host.remove_pointer_listener(id),
                None => tracing::debug!("no pointer listener to detach"),
            },
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Apply completed background results without blocking.
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.complete(msg);
            applied += 1;
        }
        applied
    }

    /// Block until every outstanding write has reported back
    pub fn flush(&mut self) {
        while self.pending_writes > 0 {
            match self.msg_rx.recv_timeout(FLUSH_TIMEOUT) {
                Ok(msg) => self.complete(msg),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        pending = self.pending_writes,
                        "gave up waiting for layout writes"
                    );
                    break;
                }
                // Only once the writer thread has exited
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    fn complete(&mut self, msg: Msg) {
        if matches!(msg, Msg::Layout(LayoutMsg::PersistCompleted { .. })) {
            self.pending_writes = self.pending_writes.saturating_sub(1);
        }
        self.apply(msg);
    }

    /// Unmount: close menus, wait for writes and release the listener.
    ///
    /// Safe to call any number of times; `Drop` calls it too.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.apply(Msg::App(AppMsg::Teardown));
        self.flush();

        if let Some(id) = self.listener.take() {
            tracing::warn!(listener = id.0, "listener still held at teardown, removing");
            self.host.remove_pointer_listener(id);
        }
        self.torn_down = true;
        tracing::info!("shell unmounted");
    }
}

impl<H: PointerHost> Drop for Shell<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
