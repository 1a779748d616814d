use criterion::{Criterion, black_box, criterion_group, criterion_main};
use designer_commands::{Command, CommandResult, CommandStack};

struct NoopCommand {
    label: String,
}

impl NoopCommand {
    fn new(label: &str) -> Box<dyn Command> {
        Box::new(Self {
            label: label.to_owned(),
        })
    }
}

impl Command for NoopCommand {
    fn label(&self) -> &str {
        &self.label
    }

    fn execute(&mut self) -> CommandResult<()> {
        Ok(())
    }

    fn unexecute(&mut self) -> CommandResult<()> {
        Ok(())
    }

    fn clone_command(&self) -> Box<dyn Command> {
        NoopCommand::new(&self.label)
    }
}

/// Benchmark appends on a full stack (every append evicts the oldest entry)
fn bench_append_at_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("command_stack");

    for capacity in [16usize, 128, 1024] {
        let mut stack = CommandStack::new(capacity);
        for index in 0..capacity {
            stack.append(NoopCommand::new(&format!("edit {index}")));
        }

        group.bench_function(format!("append_evicting_{capacity}"), |b| {
            b.iter(|| {
                stack.append(black_box(NoopCommand::new("edit")));
            });
        });
    }
    group.finish();
}

/// Benchmark walking the whole history back and forth
fn bench_undo_redo_cycle(c: &mut Criterion) {
    let capacity = 128usize;
    let mut stack = CommandStack::new(capacity);
    for index in 0..capacity {
        stack.append(NoopCommand::new(&format!("edit {index}")));
    }

    c.bench_function("undo_redo_full_cycle", |b| {
        b.iter(|| {
            while let Some(command) = stack.undo() {
                black_box(command.label());
            }
            while let Some(command) = stack.redo() {
                black_box(command.label());
            }
        });
    });
}

criterion_group!(benches, bench_append_at_capacity, bench_undo_redo_cycle);
criterion_main!(benches);
