//! Snapshot rendering for the terminal.

use todo_core::{Task, TaskList};

pub const TITLE: &str = "ToDo List App";

/// How snapshots are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders one snapshot in the requested format.
pub fn render(list: &TaskList, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(list)),
        OutputFormat::Json => serde_json::to_string(list),
    }
}

/// Human-readable list; done tasks are struck through.
pub fn render_text(list: &TaskList) -> String {
    let mut out = String::from(TITLE);
    if list.is_empty() {
        out.push_str("\n  (no tasks)");
        return out;
    }

    for task in list {
        out.push('\n');
        out.push_str(&render_task(task));
    }
    out.push_str(&format!("\n{}/{} done", list.done_count(), list.len()));
    out
}

fn render_task(task: &Task) -> String {
    if task.is_done() {
        format!("  {}. [x] ~~{}~~", task.id(), task.text())
    } else {
        format!("  {}. [ ] {}", task.id(), task.text())
    }
}
