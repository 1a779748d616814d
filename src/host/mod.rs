// Host-facing capability surface
//
// The GUI shell owns the event loop and the widgets; the command core only
// sees it through these types: an event-subscription capability and the
// per-action presentation records the registry keeps in sync.

pub mod action;
pub mod events;

pub use action::{ActionHandle, ActionSpec};
pub use events::{ACTION_TRIGGERED, EventSource, Slot, SubscribeError};
