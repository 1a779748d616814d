// Presentation state shared between the registry and the shell

use std::sync::{Arc, Mutex};

/// Declarative description of a menu/toolbar action
///
/// What the shell knows about an action at construction time. The
/// registry turns it into a live [`ActionHandle`] on registration.
#[derive(Debug, Clone, Default)]
pub struct ActionSpec {
    /// Menu text
    pub text: String,
    /// Hover hint, also reused when composing disable hints
    pub tooltip: Option<String>,
    /// Key sequence displayed next to the menu text
    pub shortcut: Option<String>,
}

impl ActionSpec {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            tooltip: None,
            shortcut: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = Some(tooltip.to_owned());
        self
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_owned());
        self
    }
}

/// Live presentation state of one action
#[derive(Debug)]
struct ActionState {
    enabled: bool,
    status_text: Option<String>,
    text: String,
    tooltip: Option<String>,
    shortcut: Option<String>,
}

/// Shared handle over one action's presentation state
///
/// The registry flips the enabled flag and hint text; the shell reads
/// them back when refreshing its menus. Wrapped in Arc<Mutex<>> so both
/// sides observe the same record.
#[derive(Debug, Clone)]
pub struct ActionHandle {
    state: Arc<Mutex<ActionState>>,
}

impl ActionHandle {
    /// Create a fresh, enabled handle from a spec
    pub fn new(spec: ActionSpec) -> Self {
        Self {
            state: Arc::new(Mutex::new(ActionState {
                enabled: true,
                status_text: None,
                text: spec.text,
                tooltip: spec.tooltip,
                shortcut: spec.shortcut,
            })),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.lock().map(|state| state.enabled).unwrap_or(false)
    }

    pub fn set_enabled(&self, enabled: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.enabled = enabled;
        }
    }

    /// Hint shown while the action is disabled, when one was composed
    pub fn status_text(&self) -> Option<String> {
        self.state.lock().ok().and_then(|state| state.status_text.clone())
    }

    pub fn set_status_text(&self, status_text: Option<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.status_text = status_text;
        }
    }

    pub fn text(&self) -> String {
        self.state.lock().map(|state| state.text.clone()).unwrap_or_default()
    }

    pub fn tooltip(&self) -> Option<String> {
        self.state.lock().ok().and_then(|state| state.tooltip.clone())
    }

    pub fn shortcut(&self) -> Option<String> {
        self.state.lock().ok().and_then(|state| state.shortcut.clone())
    }
}
