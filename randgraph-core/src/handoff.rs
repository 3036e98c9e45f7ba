//! Rendezvous handoff of a lazy element stream from a worker thread.
//!
//! [`spawn`] moves an iterator onto a dedicated thread that hands each item
//! over through a zero-capacity channel, so the producer runs at most one
//! element ahead of the consumer. Dropping the [`Handoff`] or calling
//! [`Handoff::cancel`] disconnects the channel, so the producer's next send
//! fails and the worker exits.
//!
//! The worker only observes the disconnect when it tries to hand over its
//! next element. For sparse streams that can take a while, so dropping
//! detaches the worker and returns at once; [`Handoff::cancel`] waits for it.

use std::{
    io,
    iter::FusedIterator,
    panic,
    sync::mpsc::{self, Receiver, SyncSender},
    thread::{self, JoinHandle},
};

use tracing::{debug, warn};

const WORKER_NAME: &str = "randgraph-handoff";

/// Consumer end of a stream produced on a worker thread.
///
/// # Examples
/// ```
/// use randgraph_core::{BinomialBuilder, handoff};
///
/// let generator = BinomialBuilder::new(50, 4, 0.5)
///     .with_seed(11)
///     .build()
///     .expect("parameters are valid");
/// let vertices = handoff::spawn(generator.vertices())?;
/// let edges = handoff::spawn(generator.into_edges())?;
/// assert_eq!(vertices.count(), 50);
/// assert!(edges.take(3).all(|e| e.v0() < e.v1()));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Handoff<T> {
    receiver: Option<Receiver<T>>,
    worker: Option<JoinHandle<()>>,
}

/// Starts producing `items` on a new worker thread.
///
/// # Errors
/// Returns an [`io::Error`] when the operating system refuses to create the
/// worker thread.
pub fn spawn<I>(items: I) -> io::Result<Handoff<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    let items = items.into_iter();
    let (sender, receiver) = mpsc::sync_channel(0);
    let worker = thread::Builder::new()
        .name(WORKER_NAME.to_owned())
        .spawn(move || produce(items, &sender))?;
    debug!("handoff producer started");
    Ok(Handoff {
        receiver: Some(receiver),
        worker: Some(worker),
    })
}

fn produce<I: Iterator>(items: I, sender: &SyncSender<I::Item>) {
    let mut handed_off = 0_usize;
    for item in items {
        if sender.send(item).is_err() {
            debug!(handed_off, "handoff cancelled by consumer");
            return;
        }
        handed_off += 1;
    }
    debug!(handed_off, "handoff producer finished");
}

impl<T> Handoff<T> {
    /// Stops the producer and waits for the worker thread to exit.
    ///
    /// Blocks until the producer finishes computing its pending element.
    pub fn cancel(mut self) {
        self.receiver = None;
        let Some(worker) = self.worker.take() else {
            return;
        };
        if worker.join().is_err() {
            warn!("handoff producer panicked after cancellation");
        }
    }
}

impl<T> Iterator for Handoff<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let receiver = self.receiver.as_ref()?;
        if let Ok(item) = receiver.recv() {
            return Some(item);
        }
        self.receiver = None;
        if let Some(Err(payload)) = self.worker.take().map(JoinHandle::join) {
            panic::resume_unwind(payload);
        }
        None
    }
}

impl<T> FusedIterator for Handoff<T> {}

impl<T> Drop for Handoff<T> {
    fn drop(&mut self) {
        self.receiver = None;
        if self.worker.take().is_some() {
            debug!("handoff dropped; producer detached");
        }
    }
}
