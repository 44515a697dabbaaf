//! Bounded hand-off channel used for every synchronization field of a generated mock.

use std::fmt;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};

/// A bounded channel that owns both of its ends.
///
/// Because the channel holds its own receiver and sender, it can never disconnect while it is alive: `send` blocks
/// until there is room (or a receiver, at capacity zero) and `recv` blocks until a value arrives.
///
/// Cloning a `Chan` yields another handle to the same channel.
pub struct Chan<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
    capacity: usize,
    /// Produces the value delivered for `nil`; `None` when the carried type has no absent value.
    absent: Option<fn() -> T>,
}

impl<T> Chan<T> {
    /// Create a channel holding at most `capacity` unreceived values. Zero means rendezvous.
    ///
    /// Such a channel rejects `nil()` with [`DispatchError::NilNotAccepted`](crate::DispatchError::NilNotAccepted),
    /// even when `T` is an `Option`. Build `Option` channels with [`Chan::nullable`] to let `nil()` deliver `None`,
    /// or deliver a typed `None::<U>` instead.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        Self {
            tx,
            rx,
            capacity,
            absent: None,
        }
    }

    /// Send a value, blocking while the channel is full.
    pub fn send(&self, value: T) {
        self.tx
            .send(value)
            .expect("INVARIANT: Chan owns its receiver, so the channel cannot disconnect");
    }

    /// Send without blocking, returning the value if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), T> {
        self.tx.try_send(value).map_err(|e| e.into_inner())
    }

    /// Receive a value, blocking until one is available.
    pub fn recv(&self) -> T {
        self.rx
            .recv()
            .expect("INVARIANT: Chan owns its sender, so the channel cannot disconnect")
    }

    pub fn try_recv(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Receive a value, giving up after `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<T> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Number of values sent but not yet received.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `nil` can be delivered into this channel. Only channels built with [`Chan::nullable`] accept it.
    pub fn accepts_nil(&self) -> bool {
        self.absent.is_some()
    }

    pub(crate) fn absent_value(&self) -> Option<T> {
        self.absent.map(|make| make())
    }
}

impl<T: Default> Chan<T> {
    /// Create a channel whose carried type has an absent value (`T::default()`, e.g. `None` for `Option<_>`).
    pub fn nullable(capacity: usize) -> Self {
        Self {
            absent: Some(T::default),
            ..Self::new(capacity)
        }
    }
}

impl<T> Clone for Chan<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            rx: self.rx.clone(),
            capacity: self.capacity,
            absent: self.absent,
        }
    }
}

impl<T> fmt::Debug for Chan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chan")
            .field("type", &std::any::type_name::<T>())
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn test_zero_capacity_send_waits_for_receiver() {
        let chan: Chan<i32> = Chan::new(0);
        assert_eq!(chan.try_send(1), Err(1));

        let (done_tx, done_rx) = mpsc::channel();
        let sender = chan.clone();
        let handle = thread::spawn(move || {
            sender.send(5);
            done_tx.send(()).unwrap();
        });

        assert!(done_rx.recv_timeout(Duration::from_millis(50)).is_err());
        assert_eq!(chan.recv(), 5);
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_capacity_n_absorbs_n_sends() {
        let chan: Chan<&str> = Chan::new(2);
        assert_eq!(chan.try_send("a"), Ok(()));
        assert_eq!(chan.try_send("b"), Ok(()));
        assert_eq!(chan.try_send("c"), Err("c"));
        assert_eq!(chan.len(), 2);
        assert_eq!(chan.recv(), "a");
        assert_eq!(chan.recv(), "b");
        assert!(chan.is_empty());
    }

    #[test]
    fn test_nullable_produces_default() {
        let chan: Chan<Option<String>> = Chan::nullable(1);
        assert!(chan.accepts_nil());
        assert_eq!(chan.absent_value(), Some(None));

        let plain: Chan<Option<String>> = Chan::new(1);
        assert!(!plain.accepts_nil());
    }

    #[test]
    fn test_recv_timeout_on_empty() {
        let chan: Chan<u8> = Chan::new(1);
        assert_eq!(chan.recv_timeout(Duration::from_millis(10)), None);
        assert_eq!(chan.capacity(), 1);
    }
}
