// Event subscription capability provided by the GUI shell

use thiserror::Error;

/// Event name a presentation action fires when the user activates it
pub const ACTION_TRIGGERED: &str = "triggered";

/// Callback invoked by the host when a subscribed event fires
pub type Slot = Box<dyn FnMut()>;

/// Errors a host reports when a subscription cannot be set up
#[derive(Debug, Error)]
pub enum SubscribeError {
    /// The host does not expose the requested event
    #[error("event source does not provide event `{0}`")]
    UnknownEvent(String),
    /// The host cannot accept subscriptions at all
    #[error("event source cannot accept subscriptions: {0}")]
    Unavailable(String),
}

/// Capability the GUI shell exposes so commands can be wired to triggers
///
/// A toolkit shell implements this over its own signal mechanism; tests
/// implement it over a plain callback table. The command core never
/// touches an event loop itself.
pub trait EventSource {
    /// Subscribe `handler` to the named event
    ///
    /// # Errors
    /// Returns an error when the event is unknown to this source or the
    /// source cannot take subscriptions.
    fn subscribe(&mut self, event: &str, handler: Slot) -> Result<(), SubscribeError>;
}
