// lob_engine/src/sink.rs
//
// The engine is instrumented, not silent: every state change it makes is
// reported synchronously to a `Sink` before `submit`/`cancel` returns. A
// `Sink` is a capability set, not a queue — implementations are expected to
// return quickly and never block the caller.

use crate::event::{BookUpdate, OrderAdded, RejectReason, Trade};
use crate::order::OrderId;

/// Observer for engine state changes.
///
/// All methods have a default no-op body so implementations only need to
/// override the events they care about.
pub trait Sink {
    fn on_order_added(&mut self, _added: OrderAdded) {}
    fn on_order_cancelled(&mut self, _id: OrderId) {}
    fn on_order_rejected(&mut self, _id: OrderId, _reason: RejectReason) {}
    fn on_trade(&mut self, _trade: Trade) {}
    fn on_order_book_update(&mut self, _update: BookUpdate) {}
}

mod collecting;
mod null;
mod printing;

pub use collecting::CollectingSink;
pub use null::NullSink;
pub use printing::PrintingSink;
