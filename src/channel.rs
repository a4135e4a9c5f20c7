//! In-order traversal on a worker thread.

use log::debug;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use super::node::Arena;
use super::tree::IntoIter;

/// Entries of a tree handed over, one at a time and in ascending order, by a worker thread.
///
/// The worker and the consumer meet at an unbuffered channel: the worker blocks until the
/// consumer asks for the next entry, and the consumer blocks until the worker delivers it.
/// The channel is closed once the worker has handed over the last entry, after which
/// `next` returns `None`.
///
/// Dropping a `Channel` before it is exhausted (or calling `cancel`) disconnects it. The
/// worker notices on its next handoff, stops walking and exits; the drop waits for it, so no
/// worker outlives its channel.
///
/// # Examples
///
/// ```
/// let tree: rbtree::Tree<_, _> = (0..100).map(|i| (i, i * i)).collect();
///
/// let mut channel = tree.iter_channel();
/// assert_eq!(channel.next(), Some((0, 0)));
/// assert_eq!(channel.next(), Some((1, 1)));
///
/// // stops the worker without draining the remaining entries
/// channel.cancel();
/// ```
pub struct Channel<K, V> {
    receiver: Option<Receiver<(K, V)>>,
    worker: Option<JoinHandle<()>>,
}

impl<K, V> Channel<K, V> where K: Send + 'static, V: Send + 'static {
    pub(crate) fn spawn(arena: Arena<K, V>) -> Self {
        let (sender, receiver) = mpsc::sync_channel(0);

        // nothing to hand over; dropping the sender closes the channel right away
        if arena.len() == 0 {
            return Channel { receiver: Some(receiver), worker: None };
        }

        let worker = thread::spawn(move || produce(arena, sender));
        Channel { receiver: Some(receiver), worker: Some(worker) }
    }
}

impl<K, V> Channel<K, V> {
    /// Disconnects the channel and waits for its worker to exit.
    pub fn cancel(self) {}

    fn disconnect(&mut self) {
        self.receiver = None;

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() { debug!("channel worker panicked"); }
        }
    }
}

impl<K, V> Iterator for Channel<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let entry = self.receiver.as_ref()?.recv().ok();
        if entry.is_none() { self.disconnect(); }
        entry
    }
}

impl<K, V> Drop for Channel<K, V> {
    fn drop(&mut self) { self.disconnect(); }
}

fn produce<K, V>(arena: Arena<K, V>, sender: SyncSender<(K, V)>) {
    let len = arena.len();
    debug!("channel worker walking {} entries", len);

    for (sent, entry) in IntoIter::new(arena).enumerate() {
        if sender.send(entry).is_err() {
            debug!("channel disconnected after {} of {} entries", sent, len);
            return;
        }
    }

    debug!("channel worker handed over {} entries", len);
}
