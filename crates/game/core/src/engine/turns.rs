use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::state::Tick;

use super::TurnError;

/// Handle for one scheduled wake-up.
///
/// Tickets compare by identity: every call to [`TurnQueue::schedule`] mints a
/// distinct one, even for the same payload and time. Holders cancel a wake-up
/// by dropping their copy; the popped ticket then no longer matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Internal representation of a scheduled wake-up.
#[derive(Debug)]
struct Entry<T> {
    time: Tick,
    sequence: u64,
    payload: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (Tick, u64) {
        (self.time, self.sequence)
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Time-ordered event queue.
///
/// Entries are ordered by `(time, sequence)` where the sequence strictly
/// increases with every insertion, so same-tick entries fire in scheduling
/// order. There is no removal besides [`TurnQueue::pop`].
#[derive(Debug)]
pub struct TurnQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    time: Tick,
    next_sequence: u64,
}

impl<T> TurnQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            time: Tick::ZERO,
            next_sequence: 0,
        }
    }

    /// Returns the current timeline clock value.
    pub fn time(&self) -> Tick {
        self.time
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Time of the earliest queued entry.
    pub fn peek_time(&self) -> Option<Tick> {
        self.heap.peek().map(|Reverse(entry)| entry.time)
    }

    /// Inserts `payload` at `time() + delay` and returns its ticket.
    pub fn schedule(&mut self, delay: u64, payload: T) -> Ticket {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Entry {
            time: self.time + delay,
            sequence,
            payload,
        }));
        Ticket(sequence)
    }

    /// Removes the globally earliest entry and advances the clock to it.
    pub fn pop(&mut self) -> Result<(Ticket, T), TurnError> {
        let Reverse(entry) = self.heap.pop().ok_or(TurnError::EmptyQueue { time: self.time })?;
        self.time = entry.time;
        Ok((Ticket(entry.sequence), entry.payload))
    }
}

impl<T> Default for TurnQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_delay_clamps_to_end_of_time() {
        let mut queue = TurnQueue::new();
        queue.schedule(250, "first");
        queue.pop().unwrap();
        queue.schedule(u64::MAX, "never");
        assert_eq!(queue.peek_time(), Some(Tick(u64::MAX)));
    }

    #[test]
    fn pops_in_time_order_and_advances_clock() {
        let mut queue = TurnQueue::new();
        queue.schedule(300, "late");
        queue.schedule(100, "early");
        queue.schedule(200, "middle");

        let order: Vec<_> = (0..3)
            .map(|_| {
                let (_, payload) = queue.pop().unwrap();
                (payload, queue.time())
            })
            .collect();

        assert_eq!(
            order,
            vec![
                ("early", Tick(100)),
                ("middle", Tick(200)),
                ("late", Tick(300))
            ]
        );
    }

    #[test]
    fn same_tick_entries_fire_in_insertion_order() {
        let mut queue = TurnQueue::new();
        let x = queue.schedule(50, 'x');
        let y = queue.schedule(50, 'y');
        let z = queue.schedule(50, 'z');

        assert_eq!(queue.pop().unwrap(), (x, 'x'));
        assert_eq!(queue.pop().unwrap(), (y, 'y'));
        assert_eq!(queue.pop().unwrap(), (z, 'z'));
    }

    #[test]
    fn delay_is_relative_to_current_time() {
        let mut queue = TurnQueue::new();
        queue.schedule(100, 1);
        queue.pop().unwrap();
        queue.schedule(0, 2);
        queue.schedule(50, 3);

        assert_eq!(queue.peek_time(), Some(Tick(100)));
        queue.pop().unwrap();
        let (_, payload) = queue.pop().unwrap();
        assert_eq!(payload, 3);
        assert_eq!(queue.time(), Tick(150));
    }

    #[test]
    fn tickets_are_unique_for_identical_entries() {
        let mut queue = TurnQueue::new();
        let a = queue.schedule(10, ());
        let b = queue.schedule(10, ());
        assert_ne!(a, b);
    }

    #[test]
    fn popping_empty_queue_is_an_error() {
        let mut queue: TurnQueue<()> = TurnQueue::new();
        assert_eq!(
            queue.pop(),
            Err(TurnError::EmptyQueue { time: Tick::ZERO })
        );
    }
}
