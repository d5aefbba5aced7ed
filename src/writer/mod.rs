//! Bounded hand-off between producers and the single backend writer thread.
//!
//! Producers block when the queue is full. The writer thread is the only place that
//! touches destinations, the file handle, or rotation bookkeeping, so none of that
//! needs a lock.

mod backend;

use crate::internal;
use crate::logger::Settings;
use crate::rotate::RotationHint;

use arc_swap::ArcSwap;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Queue depth used unless configured otherwise.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// One formatted record plus what the rotation policy needs to place it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteJob {
    /// Terminated record line.
    pub record: String,
    pub hint: RotationHint,
}

/// Queue item. `Shutdown` is the sentinel that ends the writer.
#[derive(Debug)]
pub(crate) enum Message {
    Write(WriteJob),
    Shutdown,
}

/// Producer-side handle to the writer thread.
#[derive(Debug)]
pub struct Writer {
    tx: Sender<Message>,
    done: Receiver<()>,
    close_requested: AtomicBool,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl Writer {
    /// Starts the writer thread. It reads settings from `settings` for every job.
    pub(crate) fn spawn(capacity: usize, settings: Arc<ArcSwap<Settings>>) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity.max(1));
        let (done_tx, done) = crossbeam_channel::bounded::<()>(0);

        let thread = thread::Builder::new()
            .name("rotolog-writer".to_string())
            .spawn(move || backend::run(rx, done_tx, &settings));

        let thread = match thread {
            Ok(handle) => Some(handle),
            Err(e) => {
                // The closure (and with it the receiver and done sender) was dropped, so
                // the writer reads as already shut down and sends are discarded.
                internal::error("WRITER", &format!("Failed to start writer thread: {e}"));
                None
            }
        };

        Self {
            tx,
            done,
            close_requested: AtomicBool::new(false),
            thread: Mutex::new(thread),
        }
    }

    /// Blocks while the queue is full. After shutdown the job is silently discarded.
    pub fn send(&self, job: WriteJob) {
        let _ = self.tx.send(Message::Write(job));
    }

    /// Requests shutdown without waiting for the drain. No-op once shutdown completed.
    pub fn close(&self) {
        if self.is_closed() {
            return;
        }
        self.close_requested.store(true, Ordering::Release);
        let _ = self.tx.send(Message::Shutdown);
    }

    /// Non-blocking probe of the done signal.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.done.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Blocks until the writer has processed the sentinel and released its file.
    ///
    /// Returns immediately if called without a prior `close`; it would never finish otherwise.
    pub fn wait(&self) {
        if !self.close_requested.load(Ordering::Acquire) && !self.is_closed() {
            return;
        }
        // Nothing is ever sent on `done`; recv returns once the writer drops its end.
        let _ = self.done.recv();
        let handle = self.thread.lock().ok().and_then(|mut guard| guard.take());
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }

    /// Jobs currently queued and not yet picked up.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tx.len()
    }
}
