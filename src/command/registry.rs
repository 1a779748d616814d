// CommandRegistry - named commands and their presentation handles

use crate::command::args::{CommandArgs, LABEL_KEY};
use crate::command::trait_def::Command;
use crate::host::action::{ActionHandle, ActionSpec};
use crate::host::events::{ACTION_TRIGGERED, EventSource, Slot, SubscribeError};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced while wiring a command into the host shell
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No slot was supplied for a command that still needs wiring
    #[error("no slot available to wire `{0}`")]
    MissingSlot(String),

    /// The host rejected the subscription
    #[error("event wiring failed for `{name}`")]
    Wiring {
        name: String,
        #[source]
        source: SubscribeError,
    },
}

/// Registry of one session's named commands
///
/// Each logical action name maps to a single command instance built on
/// first registration; invocations receive fresh clones via
/// [`get_command`](Self::get_command) so history entries never alias each
/// other. The registry also owns the presentation bookkeeping the shell
/// reads to enable or disable its menu entries. Presentation entries are
/// created and removed in lockstep with the commands; task registrations
/// record an explicit "no presentation" marker.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    actions: HashMap<String, Option<ActionHandle>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named command behind a menu/toolbar action
    ///
    /// The first registration wires `slot` to the action's trigger event
    /// on `source` and instantiates the command via `factory`, with the
    /// registry name injected into `args` under the reserved label key.
    /// Later registrations reuse the stored command and only refresh the
    /// presentation handle; no re-wiring happens on that path.
    ///
    /// # Errors
    /// Fails when a new command has no slot to wire, or when the host
    /// rejects the subscription. The registry is left untouched in both
    /// cases.
    pub fn register_command(
        &mut self,
        name: &str,
        factory: impl FnOnce(CommandArgs) -> Box<dyn Command>,
        args: CommandArgs,
        spec: ActionSpec,
        source: &mut dyn EventSource,
        slot: Option<Slot>,
    ) -> Result<ActionHandle, RegistryError> {
        if !self.commands.contains_key(name) {
            self.instantiate(name, factory, args, source, ACTION_TRIGGERED, slot)?;
        }
        let handle = ActionHandle::new(spec);
        self.actions.insert(name.to_owned(), Some(handle.clone()));
        Ok(handle)
    }

    /// Register a named command driven by an arbitrary host event
    ///
    /// Tasks follow the same instantiation path as actions but are wired
    /// to the given `event` on `source` and carry no presentation; nothing
    /// in a menu reflects them.
    ///
    /// # Errors
    /// Same failure modes as [`register_command`](Self::register_command).
    pub fn register_task(
        &mut self,
        name: &str,
        factory: impl FnOnce(CommandArgs) -> Box<dyn Command>,
        args: CommandArgs,
        source: &mut dyn EventSource,
        event: &str,
        slot: Option<Slot>,
    ) -> Result<(), RegistryError> {
        if !self.commands.contains_key(name) {
            self.instantiate(name, factory, args, source, event, slot)?;
        }
        self.actions.insert(name.to_owned(), None);
        Ok(())
    }

    fn instantiate(
        &mut self,
        name: &str,
        factory: impl FnOnce(CommandArgs) -> Box<dyn Command>,
        mut args: CommandArgs,
        source: &mut dyn EventSource,
        event: &str,
        slot: Option<Slot>,
    ) -> Result<(), RegistryError> {
        let slot = slot.ok_or_else(|| RegistryError::MissingSlot(name.to_owned()))?;
        source
            .subscribe(event, slot)
            .map_err(|source| RegistryError::Wiring {
                name: name.to_owned(),
                source,
            })?;

        args.insert(LABEL_KEY, name);
        let command = factory(args);
        self.commands.insert(name.to_owned(), command);
        debug!(name, event, "registered command");
        Ok(())
    }

    /// Fresh clone of the named command, if registered
    ///
    /// Each call returns an independent instance; mutating one
    /// invocation's parameters never affects commands already recorded in
    /// the history.
    pub fn get_command(&self, name: &str) -> Option<Box<dyn Command>> {
        self.commands.get(name).map(|command| command.clone_command())
    }

    /// Toggle the enabled flag on a named action
    ///
    /// When `status_text` is given, the displayed hint is composed from it
    /// plus either the tooltip of the action named `fallback_from`, when
    /// that lookup succeeds, or the bare `fallback_from` name otherwise.
    /// Unknown or un-presented names are ignored.
    pub fn set_disabled(
        &mut self,
        name: &str,
        disabled: bool,
        status_text: Option<&str>,
        fallback_from: Option<&str>,
    ) {
        let fallback_hint = fallback_from
            .map(|other| self.tooltip_of(other).unwrap_or_else(|| other.to_owned()));

        let Some(Some(handle)) = self.actions.get(name) else {
            return;
        };
        handle.set_enabled(!disabled);

        if let Some(text) = status_text {
            let mut hint = text.to_owned();
            if let Some(extra) = fallback_hint {
                hint.push_str(&extra);
            }
            handle.set_status_text(Some(hint));
        }
    }

    fn tooltip_of(&self, name: &str) -> Option<String> {
        self.actions
            .get(name)
            .and_then(|entry| entry.as_ref())
            .and_then(|handle| handle.tooltip())
    }

    /// Remove a named command and its presentation entry
    ///
    /// No-op when the name was never registered.
    pub fn remove_command(&mut self, name: &str) {
        if self.commands.remove(name).is_some() {
            debug!(name, "removed command");
        }
        self.actions.remove(name);
    }

    /// Presentation handle of a named action, when one exists
    pub fn action(&self, name: &str) -> Option<ActionHandle> {
        self.actions.get(name).and_then(|entry| entry.clone())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
