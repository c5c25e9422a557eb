// lob_engine/src/sink/printing.rs

use crate::event::{BookUpdate, OrderAdded, RejectReason, Trade};
use crate::order::OrderId;
use crate::sink::Sink;

/// A `Sink` that writes a line to stdout for every event. Meant for manual
/// inspection of a run, not production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintingSink;

impl Sink for PrintingSink {
    fn on_order_added(&mut self, added: OrderAdded) {
        println!(
            "order added: id={} price={} quantity={} side={:?}",
            added.id, added.price, added.quantity, added.side
        );
    }

    fn on_order_cancelled(&mut self, id: OrderId) {
        println!("order cancelled: id={id}");
    }

    fn on_order_rejected(&mut self, id: OrderId, reason: RejectReason) {
        println!("order rejected: id={id} reason={reason:?}");
    }

    fn on_trade(&mut self, trade: Trade) {
        println!(
            "trade: aggressor={} resting={} price={} quantity={}",
            trade.aggressor_id, trade.resting_id, trade.price, trade.quantity
        );
    }

    fn on_order_book_update(&mut self, update: BookUpdate) {
        println!(
            "book update: side={:?} price={} total_volume={}",
            update.side, update.price, update.total_volume
        );
    }
}
