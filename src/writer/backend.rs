//! The consumer loop. Runs on its own thread for the whole life of a logger.

use super::{Message, WriteJob};
use crate::internal;
use crate::logger::Settings;
use crate::output::{Destinations, FileOptions};
use crate::rotate::RotationHint;

use arc_swap::ArcSwap;
use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Processes jobs in queue order until the sentinel arrives or every producer is gone.
///
/// Dropping `rx` closes the queue and dropping `done` fires the done signal; both happen
/// after the file handle has been released.
pub(super) fn run(rx: Receiver<Message>, done: Sender<()>, settings: &ArcSwap<Settings>) {
    let mut destinations = Destinations::new();

    drain(&rx, |job| process(&mut destinations, &settings.load(), job));

    destinations.close();
    drop(rx);
    drop(done);
    internal::debug("WRITER", "Writer stopped");
}

/// Hands each job to `handle` until the sentinel. A panic costs only the job that raised it.
fn drain(rx: &Receiver<Message>, mut handle: impl FnMut(&WriteJob)) {
    for message in rx {
        let job = match message {
            Message::Write(job) => job,
            Message::Shutdown => break,
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handle(&job)));
        if let Err(payload) = outcome {
            internal::error(
                "WRITER",
                &format!("Recovered from panic: {}", panic_message(payload.as_ref())),
            );
        }
    }
}

fn process(destinations: &mut Destinations, settings: &Settings, job: &WriteJob) {
    let options = FileOptions {
        dir: &settings.dir,
        rotate: settings.rotate,
        max_size: settings.rotate_size,
    };
    let hint = adapt_hint(job, options.strategy().is_size_based());

    destinations.rebuild(settings.handler, &options, &hint);
    destinations.write(&job.record);
}

/// The strategy may have changed between enqueue and processing; the policy needs the
/// kind of hint that matches the strategy in force now.
fn adapt_hint(job: &WriteJob, size_based: bool) -> RotationHint {
    match (job.hint, size_based) {
        (RotationHint::Time(_), true) => RotationHint::Bytes(job.record.len() as u64),
        (RotationHint::Bytes(_), false) => RotationHint::Time(Local::now()),
        (hint, _) => hint,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
