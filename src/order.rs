// lob_engine/src/order.rs
//
// C1: the resting-order record.
//
// An `Order` is identity (`id`, `price`, `side`) plus mutable residual
// `quantity` plus the intrusive `prev`/`next` links that thread it into its
// price level's FIFO. It never allocates on its own — it only ever lives
// inside an arena slot (see `arena.rs`).

use crate::arena::Handle;
use crate::types::Side;

/// External, caller-assigned order identifier.
pub type OrderId = u64;

/// A single resting order.
///
/// `prev`/`next` are arena handles, not pointers: the FIFO a level keeps is
/// an intrusive doubly-linked list threaded through these fields.
#[derive(Debug, Clone, Copy)]
pub struct Order {
    pub id: OrderId,
    pub price: i32,
    pub quantity: u32,
    pub side: Side,
    pub prev: Handle,
    pub next: Handle,
}

impl Order {
    pub fn new(id: OrderId, price: i32, quantity: u32, side: Side) -> Self {
        Self {
            id,
            price,
            quantity,
            side,
            prev: Handle::NONE,
            next: Handle::NONE,
        }
    }
}
