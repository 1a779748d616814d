// Command Pattern core for the component designer
//
// This module implements the undo/redo machinery the editor shell builds
// its menus and toolbars on. All document-changing operations go through
// Command.
//
// Architecture:
// - Command trait: defines execute(), unexecute(), label()
// - CommandStack: bounded history with an undo/redo cursor
// - CommandRegistry: named singleton commands plus presentation handles
// - CommandArgs: keyed parameter bundle handed to command factories
//
// Integration with the GUI shell:
// - The shell registers named commands at menu construction time
// - Each user trigger executes a fresh clone and appends it to the stack
// - Undo/redo replay the recorded clones in cursor order

pub mod args;
pub mod registry;
pub mod stack;
pub mod trait_def;

pub use args::CommandArgs;
pub use registry::CommandRegistry;
pub use stack::CommandStack;
pub use trait_def::Command;
