use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

/// A monotonic id generator.
///
/// Whoever owns the sequence owns the id space: two sequences hand out
/// overlapping ids, one sequence never repeats an id. Once `i32::MAX` has
/// been issued the sequence is exhausted rather than wrapping around.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicI32,
    exhausted: AtomicBool,
}

impl IdSequence {
    /// Creates a sequence whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a sequence whose first id is `first`.
    pub fn starting_at(first: i32) -> Self {
        Self {
            next: AtomicI32::new(first),
            exhausted: AtomicBool::new(false),
        }
    }

    /// Takes the next id, or reports [`Error::IdsExhausted`] once `i32::MAX`
    /// has been issued.
    pub fn try_next_id(&self) -> Result<i32> {
        if self.exhausted.load(Ordering::SeqCst) {
            return Err(Error::IdsExhausted { last: i32::MAX });
        }
        match self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
        {
            Ok(id) => {
                log::trace!("IdSequence issued id {}", id);
                Ok(id)
            }
            // `next` is stuck at i32::MAX; the first caller to get here takes it
            Err(last) => {
                if self.exhausted.swap(true, Ordering::SeqCst) {
                    Err(Error::IdsExhausted { last })
                } else {
                    log::warn!("IdSequence issued its last id {}", last);
                    Ok(last)
                }
            }
        }
    }

    /// Takes the next id.
    ///
    /// # Panics
    ///
    /// Panics when the sequence is exhausted. Use
    /// [`try_next_id`](Self::try_next_id) to handle that case.
    pub fn next_id(&self) -> i32 {
        match self.try_next_id() {
            Ok(id) => id,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) will issue,
    /// or `None` when the sequence is exhausted.
    pub fn peek(&self) -> Option<i32> {
        if self.exhausted.load(Ordering::SeqCst) {
            None
        } else {
            Some(self.next.load(Ordering::SeqCst))
        }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequence_is_monotonic() {
        let seq = IdSequence::new();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.peek(), Some(3));
    }

    #[test]
    fn test_sequence_starting_at() {
        let seq = IdSequence::starting_at(100);
        assert_eq!(seq.next_id(), 100);
    }

    #[test]
    fn test_sequence_stops_at_max_instead_of_wrapping() {
        let seq = IdSequence::starting_at(i32::MAX - 1);
        assert_eq!(seq.try_next_id(), Ok(i32::MAX - 1));
        assert_eq!(seq.try_next_id(), Ok(i32::MAX));
        assert_eq!(seq.peek(), None);
        assert_eq!(
            seq.try_next_id(),
            Err(Error::IdsExhausted { last: i32::MAX })
        );
        assert!(seq.try_next_id().is_err());
    }

    #[test]
    #[should_panic(expected = "id sequence exhausted")]
    fn test_next_id_panics_when_exhausted() {
        let seq = IdSequence::starting_at(i32::MAX);
        assert_eq!(seq.next_id(), i32::MAX);
        seq.next_id();
    }

    #[test]
    fn test_sequence_unique_across_threads() {
        let seq = Arc::new(IdSequence::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || (0..100).map(|_| seq.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {} issued twice", id);
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
