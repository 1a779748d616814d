// Component Designer command core - library exports

pub mod command;
pub mod config;
pub mod host;

// Re-export commonly used types for convenience
pub use command::args::CommandArgs;
pub use command::registry::{CommandRegistry, RegistryError};
pub use command::stack::CommandStack;
pub use command::trait_def::{Command, CommandError, CommandResult};
pub use config::SessionConfig;
pub use host::action::{ActionHandle, ActionSpec};
pub use host::events::{ACTION_TRIGGERED, EventSource, Slot, SubscribeError};
