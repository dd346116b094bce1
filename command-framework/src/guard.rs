use std::sync::atomic::{AtomicUsize, Ordering};

/// Which way a call is being bridged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `execute` is running by waiting on `execute_async`.
    SyncToAsync,
    /// `execute_async` is running by offloading `execute`.
    AsyncToSync,
}

impl Direction {
    fn opposite(self) -> Self {
        match self {
            Direction::SyncToAsync => Direction::AsyncToSync,
            Direction::AsyncToSync => Direction::SyncToAsync,
        }
    }
}

/// Detects mutual delegation between the two default execution paths.
///
/// Each path counts its in-flight bridges. A path may only bridge while the
/// opposite counter is zero; if the opposite side is already bridging into
/// it, neither side has a real implementation.
#[derive(Debug, Default)]
pub struct BridgeGuard {
    sync_to_async: AtomicUsize,
    async_to_sync: AtomicUsize,
}

impl BridgeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, direction: Direction) -> &AtomicUsize {
        match direction {
            Direction::SyncToAsync => &self.sync_to_async,
            Direction::AsyncToSync => &self.async_to_sync,
        }
    }

    /// Registers a bridge in `direction`.
    ///
    /// Returns `None` when the opposite direction is already in flight. The
    /// returned ticket releases the registration when dropped.
    pub fn enter(&self, direction: Direction) -> Option<BridgeTicket<'_>> {
        let own = self.counter(direction);
        own.fetch_add(1, Ordering::SeqCst);
        let other = self.counter(direction.opposite()).load(Ordering::SeqCst);
        if other > 0 {
            own.fetch_sub(1, Ordering::SeqCst);
            log::trace!("{:?} refused: {} opposite bridge(s) in flight", direction, other);
            return None;
        }
        log::trace!("{:?} bridge entered", direction);
        Some(BridgeTicket {
            counter: own,
            direction,
        })
    }

    /// In-flight `execute` → `execute_async` bridges.
    pub fn sync_to_async(&self) -> usize {
        self.sync_to_async.load(Ordering::SeqCst)
    }

    /// In-flight `execute_async` → `execute` bridges.
    pub fn async_to_sync(&self) -> usize {
        self.async_to_sync.load(Ordering::SeqCst)
    }

    /// True when no bridge is in flight.
    pub fn is_idle(&self) -> bool {
        self.sync_to_async() == 0 && self.async_to_sync() == 0
    }
}

/// Registration of one in-flight bridge; released on drop.
#[derive(Debug)]
pub struct BridgeTicket<'a> {
    counter: &'a AtomicUsize,
    direction: Direction,
}

impl BridgeTicket<'_> {
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Drop for BridgeTicket<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
        log::trace!("{:?} bridge released", self.direction);
    }
}
