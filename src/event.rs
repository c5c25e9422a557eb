// lob_engine/src/event.rs
//
// The vocabulary the engine uses to talk to a `Sink`: trades, book-level
// volume updates, and the handful of reasons an order can be rejected.
//
// Nothing here is ever thrown as a Rust error — rejections are reported
// through the sink, not propagated via `Result`, because an invalid order is
// an expected, rate-relevant outcome for a matching engine, not a bug.

use crate::order::OrderId;
use crate::types::Side;

/// Reason an order was not accepted. Reported via `Sink::on_order_rejected`,
/// never returned as an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Quantity is zero.
    InvalidQuantity,
    /// Price is non-positive or exceeds the book's configured `max_price`.
    InvalidPrice,
    /// `id` is already held by a resting order.
    DuplicateId,
    /// `cancel` named an id that is in range but has no resting order.
    /// Ids at or beyond the configured `max_id` are silently ignored
    /// instead — see `Book::id_in_range`.
    OrderNotFound,
    /// The arena has no free slots left for a new resting order.
    SystemFull,
}

/// An order has just become resting. Reported via `Sink::on_order_added`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAdded {
    pub id: OrderId,
    pub price: i32,
    pub quantity: u32,
    pub side: Side,
}

/// A single fill produced while matching an incoming order against the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    /// Id of the order that crossed the spread and triggered the match.
    pub aggressor_id: OrderId,
    /// Id of the resting order it matched against.
    pub resting_id: OrderId,
    pub price: i32,
    pub quantity: u32,
}

/// Used by `Sink::on_order_book_update`: best-price/total-volume snapshot
/// for one side, taken after the update that triggered it has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookUpdate {
    pub side: Side,
    pub price: i32,
    pub total_volume: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_reason_is_plain_data() {
        let r = RejectReason::InvalidPrice;
        assert_eq!(r, RejectReason::InvalidPrice);
        assert_ne!(r, RejectReason::DuplicateId);
    }

    #[test]
    fn trade_fields_are_accessible() {
        let t = Trade {
            aggressor_id: 1,
            resting_id: 2,
            price: 100,
            quantity: 5,
        };
        assert_eq!(t.price, 100);
    }
}
