// Example: Wiring the command core into an editor shell
// This shows the register / trigger / undo loop a GUI shell runs

use designer_commands::{
    ActionSpec, Command, CommandArgs, CommandError, CommandRegistry, CommandResult, CommandStack,
    EventSource, SessionConfig, Slot, SubscribeError,
};
use std::sync::{Arc, Mutex};

// Stand-in for the toolkit's signal table
#[derive(Default)]
struct Shell {
    wired: Vec<String>,
}

impl EventSource for Shell {
    fn subscribe(&mut self, event: &str, _handler: Slot) -> Result<(), SubscribeError> {
        self.wired.push(event.to_owned());
        Ok(())
    }
}

// One document-editing command: append a component name
struct AddComponentCommand {
    document: Arc<Mutex<Vec<String>>>,
    label: String,
    component: String,
}

impl Command for AddComponentCommand {
    fn label(&self) -> &str {
        &self.label
    }

    fn execute(&mut self) -> CommandResult<()> {
        let mut document = self
            .document
            .lock()
            .map_err(|_| CommandError::InvalidState("document lock poisoned".into()))?;
        document.push(self.component.clone());
        Ok(())
    }

    fn unexecute(&mut self) -> CommandResult<()> {
        let mut document = self
            .document
            .lock()
            .map_err(|_| CommandError::InvalidState("document lock poisoned".into()))?;
        document.pop();
        Ok(())
    }

    fn clone_command(&self) -> Box<dyn Command> {
        Box::new(Self {
            document: Arc::clone(&self.document),
            label: self.label.clone(),
            component: self.component.clone(),
        })
    }
}

fn main() {
    let document = Arc::new(Mutex::new(Vec::new()));
    let mut shell = Shell::default();
    let mut registry = CommandRegistry::new();
    let mut stack = CommandStack::from_config(&SessionConfig::default());

    // Menu construction time: register the named command once
    let doc = Arc::clone(&document);
    let handle = registry
        .register_command(
            "add-field",
            move |args| {
                Box::new(AddComponentCommand {
                    document: doc,
                    label: args.label().unwrap_or("add-field").to_owned(),
                    component: args.string("component").unwrap_or("field").to_owned(),
                })
            },
            CommandArgs::new().with("component", "field"),
            ActionSpec::new("Add &Field").with_tooltip("Append a field to the component"),
            &mut shell,
            Some(Box::new(|| println!("menu entry triggered"))),
        )
        .expect("shell accepts the wiring");

    println!("menu entry `{}` enabled: {}", handle.text(), handle.is_enabled());

    // User trigger: execute a fresh clone, then record it
    let mut command = registry.get_command("add-field").expect("registered");
    command.execute().expect("command executes");
    stack.append(command);
    println!("document: {:?}", document.lock().unwrap());
    println!("undo menu text: Undo {}", stack.undo_label().unwrap_or("-"));

    // Undo menu entry: replay the inverse of the recorded command
    if let Some(recorded) = stack.undo() {
        recorded.unexecute().expect("command reverts");
    }
    println!("document after undo: {:?}", document.lock().unwrap());
    println!("redo available: {}", stack.can_redo());
}
