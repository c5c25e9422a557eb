// lob_engine/src/sink/collecting.rs

use crate::event::{BookUpdate, OrderAdded, RejectReason, Trade};
use crate::order::OrderId;
use crate::sink::Sink;

/// A `Sink` that appends every event to in-memory vectors, in arrival order.
/// Meant for tests and offline analysis — not sized for a long-running
/// production process.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub orders_added: Vec<OrderAdded>,
    pub orders_cancelled: Vec<OrderId>,
    pub orders_rejected: Vec<(OrderId, RejectReason)>,
    pub trades: Vec<Trade>,
    pub book_updates: Vec<BookUpdate>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for CollectingSink {
    fn on_order_added(&mut self, added: OrderAdded) {
        self.orders_added.push(added);
    }

    fn on_order_cancelled(&mut self, id: OrderId) {
        self.orders_cancelled.push(id);
    }

    fn on_order_rejected(&mut self, id: OrderId, reason: RejectReason) {
        self.orders_rejected.push((id, reason));
    }

    fn on_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    fn on_order_book_update(&mut self, update: BookUpdate) {
        self.book_updates.push(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn collecting_sink_records_events_in_order() {
        let mut sink = CollectingSink::new();
        sink.on_order_added(OrderAdded {
            id: 1,
            price: 100,
            quantity: 10,
            side: Side::Sell,
        });
        sink.on_order_added(OrderAdded {
            id: 2,
            price: 100,
            quantity: 15,
            side: Side::Buy,
        });
        sink.on_trade(Trade {
            aggressor_id: 2,
            resting_id: 1,
            price: 100,
            quantity: 5,
        });
        sink.on_order_book_update(BookUpdate {
            side: Side::Buy,
            price: 100,
            total_volume: 0,
        });

        assert_eq!(sink.orders_added.len(), 2);
        assert_eq!(sink.orders_added[0].id, 1);
        assert_eq!(sink.orders_added[1].id, 2);
        assert_eq!(sink.trades.len(), 1);
        assert_eq!(sink.book_updates.len(), 1);
    }
}
