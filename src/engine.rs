// lob_engine/src/engine.rs
//
// C5: the public entry points. `submit` validates an incoming order, crosses
// it against the opposing side, and rests whatever quantity survives.
// `cancel` removes a resting order. Every state change is reported to the
// caller-supplied `Sink` before the call returns; nothing is ever thrown —
// see `event::RejectReason`.

use tracing::{debug, trace};

use crate::arena::Arena;
use crate::book::Book;
use crate::config::EngineConfig;
use crate::event::{BookUpdate, OrderAdded, RejectReason, Trade};
use crate::order::{Order, OrderId};
use crate::sink::Sink;
use crate::types::Side;

/// A single-instrument, single-threaded limit order book.
pub struct MatchingEngine {
    arena: Arena,
    book: Book,
}

impl MatchingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            arena: Arena::with_capacity(config.arena_capacity),
            book: Book::new(config.max_price, config.max_id),
        }
    }

    /// The true best bid, scanning past any empty levels the cursor hasn't
    /// caught up to yet. Read-only: does not advance `max_bid_price`.
    pub fn best_bid(&self) -> Option<i32> {
        let mut price = self.book.max_bid_price;
        while price > 0 {
            if !self.book.level(Side::Buy, price).is_empty() {
                return Some(price);
            }
            price -= 1;
        }
        None
    }

    /// The true best ask, scanning past any empty levels the cursor hasn't
    /// caught up to yet. Read-only: does not advance `min_ask_price`.
    pub fn best_ask(&self) -> Option<i32> {
        let max_price = self.book.max_price();
        let mut price = self.book.min_ask_price;
        while price <= max_price {
            if !self.book.level(Side::Sell, price).is_empty() {
                return Some(price);
            }
            price += 1;
        }
        None
    }

    /// Submit a new order. Validates, matches against the opposing side,
    /// and rests any residual quantity. See spec §4.1/§4.3 for the exact
    /// event ordering this method preserves.
    pub fn submit<S: Sink>(&mut self, id: OrderId, price: i32, quantity: u32, side: Side, sink: &mut S) {
        trace!(id, price, quantity, ?side, "submit");

        if quantity == 0 {
            debug!(id, "rejected: invalid quantity");
            sink.on_order_rejected(id, RejectReason::InvalidQuantity);
            return;
        }
        if !self.book.price_in_range(price) {
            debug!(id, price, "rejected: invalid price");
            sink.on_order_rejected(id, RejectReason::InvalidPrice);
            return;
        }
        if !self.book.id_in_range(id) {
            // Out-of-range ids are silently ignored: no event at all.
            return;
        }
        if self.book.contains_id(id) {
            debug!(id, "rejected: duplicate id");
            sink.on_order_rejected(id, RejectReason::DuplicateId);
            return;
        }

        let mut order = Order::new(id, price, quantity, side);

        match side {
            Side::Buy => self.match_against_asks(&mut order, sink),
            Side::Sell => self.match_against_bids(&mut order, sink),
        }

        if order.quantity > 0 {
            let handle = self.arena.allocate(order);
            if handle.is_none() {
                debug!(id, "rejected: arena exhausted");
                sink.on_order_rejected(id, RejectReason::SystemFull);
                return;
            }

            let residual = order.quantity;
            let level = self.book.level_mut(side, price);
            level.push_back(&mut self.arena, handle, residual);
            let total_volume = level.total_volume;
            self.book.lookup_insert(id, handle);

            match side {
                Side::Buy => self.book.advance_bid(price),
                Side::Sell => self.book.advance_ask(price),
            }

            sink.on_order_added(OrderAdded {
                id,
                price,
                quantity: residual,
                side,
            });
            sink.on_order_book_update(BookUpdate {
                side,
                price,
                total_volume,
            });
        }
    }

    /// Cancel a resting order. Emits `OrderRejected(OrderNotFound)` if `id`
    /// does not currently name a resting order.
    pub fn cancel<S: Sink>(&mut self, id: OrderId, sink: &mut S) {
        trace!(id, "cancel");

        if !self.book.id_in_range(id) {
            // Out-of-range ids are silently ignored: no event at all.
            return;
        }

        let Some(handle) = self.book.lookup_get(id) else {
            debug!(id, "rejected: order not found");
            sink.on_order_rejected(id, RejectReason::OrderNotFound);
            return;
        };

        let order = *self.arena.get(handle);
        let level = self.book.level_mut(order.side, order.price);
        level.total_volume -= order.quantity as u64;
        let total_volume = level.total_volume;
        level.unlink(&mut self.arena, handle);

        self.book.lookup_remove(id);
        self.arena.deallocate(handle);

        sink.on_order_book_update(BookUpdate {
            side: order.side,
            price: order.price,
            total_volume,
        });
        sink.on_order_cancelled(id);
    }

    /// Cross a buy aggressor against the resting asks.
    fn match_against_asks<S: Sink>(&mut self, agg: &mut Order, sink: &mut S) {
        let max_price = self.book.max_price();
        while agg.quantity > 0 && self.book.min_ask_price <= max_price {
            let price = self.book.min_ask_price;
            if self.book.level(Side::Sell, price).is_empty() {
                self.book.min_ask_price += 1;
                continue;
            }
            if price > agg.price {
                break;
            }
            self.match_at_level(agg, Side::Sell, price, sink);
            if self.book.level(Side::Sell, price).is_empty() {
                self.book.min_ask_price += 1;
            }
        }
    }

    /// Cross a sell aggressor against the resting bids.
    fn match_against_bids<S: Sink>(&mut self, agg: &mut Order, sink: &mut S) {
        while agg.quantity > 0 && self.book.max_bid_price > 0 {
            let price = self.book.max_bid_price;
            if self.book.level(Side::Buy, price).is_empty() {
                self.book.max_bid_price -= 1;
                continue;
            }
            if price < agg.price {
                break;
            }
            self.match_at_level(agg, Side::Buy, price, sink);
            if self.book.level(Side::Buy, price).is_empty() {
                self.book.max_bid_price -= 1;
            }
        }
    }

    /// Drain `level` against `agg` until one side is exhausted. `resting_side`
    /// is the side of the book `price` belongs to (the opposite of `agg`'s).
    fn match_at_level<S: Sink>(&mut self, agg: &mut Order, resting_side: Side, price: i32, sink: &mut S) {
        loop {
            if agg.quantity == 0 {
                break;
            }
            let head = self.book.level(resting_side, price).front();
            if head.is_none() {
                break;
            }

            let resting_id = self.arena.get(head).id;
            let resting_quantity = self.arena.get(head).quantity;
            let traded = agg.quantity.min(resting_quantity);

            agg.quantity -= traded;
            self.arena.get_mut(head).quantity -= traded;

            let level = self.book.level_mut(resting_side, price);
            level.total_volume -= traded as u64;
            let total_volume = level.total_volume;

            sink.on_trade(Trade {
                aggressor_id: agg.id,
                resting_id,
                price,
                quantity: traded,
            });
            sink.on_order_book_update(BookUpdate {
                side: resting_side,
                price,
                total_volume,
            });

            if self.arena.get(head).quantity == 0 {
                let level = self.book.level_mut(resting_side, price);
                level.pop_front(&mut self.arena);
                self.book.lookup_remove(resting_id);
                self.arena.deallocate(head);
            }
        }
    }
}
