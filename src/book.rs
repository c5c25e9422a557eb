// lob_engine/src/book.rs
//
// C4: the side index.
//
// Two dense, price-indexed arrays of `Level` (one per side) plus a pair of
// best-price cursors, plus the id → handle lookup. Everything here is sized
// once at construction and never resized on the hot path.
//
// The cursors (`max_bid_price`/`min_ask_price`) are hints, not truths: they
// are only ever advanced *inward* by the matching loop in `engine.rs`, and a
// `cancel` that empties the best level does not retreat them. The next
// `submit` that scans past the stale cursor catches it up. See `engine.rs`
// for the scan.

use crate::arena::Handle;
use crate::level::Level;
use crate::order::OrderId;
use crate::types::Side;

/// Sentinel `max_bid_price` for an empty bid side: below any valid price.
const NO_BID: i32 = 0;

/// The two-sided price ladder plus the order id lookup.
pub struct Book {
    bids: Vec<Level>,
    asks: Vec<Level>,
    /// Highest price at which `bids` is known non-empty, or `NO_BID` (0) if
    /// there may be no resting bids. A hint bounding the true best from
    /// above is not guaranteed; see module docs.
    pub max_bid_price: i32,
    /// Lowest price at which `asks` is known non-empty, or `max_price + 1`
    /// if there may be no resting asks.
    pub min_ask_price: i32,
    lookup: Vec<Option<Handle>>,
    max_price: i32,
}

impl Book {
    pub fn new(max_price: i32, max_id: u64) -> Self {
        // Index 0 is unused (prices are 1-based) but kept so `bids[price]`
        // needs no offset arithmetic.
        let levels = (max_price as usize) + 1;
        let lookup_len = (max_id as usize) + 1;
        Self {
            bids: vec![Level::empty(); levels],
            asks: vec![Level::empty(); levels],
            max_bid_price: NO_BID,
            min_ask_price: max_price + 1,
            lookup: vec![None; lookup_len],
            max_price,
        }
    }

    #[inline]
    pub fn max_price(&self) -> i32 {
        self.max_price
    }

    #[inline]
    pub fn price_in_range(&self, price: i32) -> bool {
        price > 0 && price <= self.max_price
    }

    #[inline]
    pub fn id_in_range(&self, id: OrderId) -> bool {
        (id as usize) < self.lookup.len()
    }

    #[inline]
    pub fn level(&self, side: Side, price: i32) -> &Level {
        match side {
            Side::Buy => &self.bids[price as usize],
            Side::Sell => &self.asks[price as usize],
        }
    }

    #[inline]
    pub fn level_mut(&mut self, side: Side, price: i32) -> &mut Level {
        match side {
            Side::Buy => &mut self.bids[price as usize],
            Side::Sell => &mut self.asks[price as usize],
        }
    }

    /// `true` if `id` is currently in the lookup (a resting order holds it).
    ///
    /// Ids outside the configured range are never "present" — callers must
    /// check `id_in_range` separately to distinguish "not found" from "out
    /// of range", since the two are handled differently by `submit`.
    #[inline]
    pub fn contains_id(&self, id: OrderId) -> bool {
        self.id_in_range(id) && self.lookup[id as usize].is_some()
    }

    #[inline]
    pub fn lookup_get(&self, id: OrderId) -> Option<Handle> {
        self.lookup.get(id as usize).copied().flatten()
    }

    #[inline]
    pub fn lookup_insert(&mut self, id: OrderId, handle: Handle) {
        self.lookup[id as usize] = Some(handle);
    }

    #[inline]
    pub fn lookup_remove(&mut self, id: OrderId) {
        self.lookup[id as usize] = None;
    }

    /// Advance the bid cursor inward (downward) if `price` is a new best.
    #[inline]
    pub fn advance_bid(&mut self, price: i32) {
        if price > self.max_bid_price {
            self.max_bid_price = price;
        }
    }

    /// Advance the ask cursor inward (upward) if `price` is a new best.
    #[inline]
    pub fn advance_ask(&mut self, price: i32) {
        if price < self.min_ask_price {
            self.min_ask_price = price;
        }
    }
}
