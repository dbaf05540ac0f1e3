//! Lock-free distribution of tiles to worker threads.
//!
//! The queue is a fixed array of work orders and a single atomic
//! cursor. Claiming is one fetch-and-add; there are no retries, no
//! revisits, and no cancellation. Orders are immutable once built, so
//! claimed orders are shared by reference and the claiming thread
//! clones the embedded generator as its working state.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use beam_math::Xorshift32;
use rand::SeedableRng;

use crate::tile::Tile;

/// A tile plus the generator state that renders it.
#[derive(Debug, Clone)]
pub struct WorkOrder {
    pub tile: Tile,
    pub rng: Xorshift32,
}

/// Fixed set of work orders handed out through an atomic cursor.
#[derive(Debug)]
pub struct WorkQueue {
    orders: Vec<WorkOrder>,
    next_order: AtomicUsize,
    tiles_retired: AtomicU64,
    bounces: AtomicU64,
}

impl WorkQueue {
    /// Build one order per tile, in the given (row-major) order.
    ///
    /// Each order's generator is seeded from the base seed plus the
    /// order's position, so a tile renders the same pixels no matter
    /// which thread claims it or when.
    pub fn new(tiles: Vec<Tile>, base_seed: u64) -> Self {
        let orders = tiles
            .into_iter()
            .enumerate()
            .map(|(index, tile)| WorkOrder {
                tile,
                rng: Xorshift32::seed_from_u64(base_seed.wrapping_add(index as u64)),
            })
            .collect();

        Self {
            orders,
            next_order: AtomicUsize::new(0),
            tiles_retired: AtomicU64::new(0),
            bounces: AtomicU64::new(0),
        }
    }

    /// Claim the next order, or None once the queue is exhausted.
    ///
    /// Every order is handed out exactly once: the fetch-and-add gives
    /// each caller a distinct index, and indices past the end just keep
    /// returning None.
    pub fn claim(&self) -> Option<&WorkOrder> {
        let index = self.next_order.fetch_add(1, Ordering::Relaxed);
        self.orders.get(index)
    }

    /// Record a finished tile; returns how many are retired so far.
    pub fn retire_tile(&self) -> u64 {
        self.tiles_retired.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Fold one trace call's bounce count into the shared total.
    pub fn add_bounces(&self, bounces: u64) {
        self.bounces.fetch_add(bounces, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn tiles_retired(&self) -> u64 {
        self.tiles_retired.load(Ordering::Relaxed)
    }

    pub fn bounces_computed(&self) -> u64 {
        self.bounces.load(Ordering::Relaxed)
    }
}
