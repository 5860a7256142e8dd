use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap of payloads keyed by due time. Ties fire in insertion order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry<T> {
    due_at: u64,
    seq: u64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.due_at, self.seq) == (other.due_at, other.seq)
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due_at, self.seq).cmp(&(other.due_at, other.seq))
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due_at: u64, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { due_at, seq, payload }));
    }

    /// Removes and returns every payload due at or before `now`.
    pub fn drain_due(&mut self, now: u64) -> Vec<T> {
        let mut due = Vec::new();
        while self.heap.peek().is_some_and(|Reverse(e)| e.due_at <= now) {
            if let Some(Reverse(entry)) = self.heap.pop() {
                due.push(entry.payload);
            }
        }
        due
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, "c");
        queue.schedule(100, "a");
        queue.schedule(200, "b");

        assert!(queue.drain_due(99).is_empty());
        assert_eq!(queue.drain_due(250), vec!["a", "b"]);
        assert!(!queue.is_empty());
        assert_eq!(queue.drain_due(1_000), vec!["c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let mut queue = TimerQueue::new();
        for label in ["first", "second", "third"] {
            queue.schedule(50, label);
        }
        assert_eq!(queue.drain_due(50), vec!["first", "second", "third"]);
    }

    #[test]
    fn payloads_scheduled_while_draining_wait_for_next_drain() {
        let mut queue = TimerQueue::new();
        queue.schedule(10, 1);
        for n in queue.drain_due(10) {
            queue.schedule(10, n + 1);
        }
        assert_eq!(queue.drain_due(10), vec![2]);
        assert!(queue.is_empty());
    }
}
