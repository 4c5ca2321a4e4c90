//! pilk-core
//!
//! Pure client-side model for the PILK trader dashboard:
//! - wire types (snapshot, positions, requests, acks)
//! - display views derived from positions
//! - fetch sequencing (last issued wins)

pub mod side;
pub mod snapshot;
pub mod messages;
pub mod view;
pub mod sequence;

pub use side::{PositionSide, TradeAction};

pub use snapshot::{AccountSnapshot, PendingOrder, Position};

pub use messages::{LimitOrderRequest, ServerAck, TradeIntent};

pub use view::{OrderView, PositionView, Tone};
pub use sequence::{FetchSequencer, SnapshotSlot};
