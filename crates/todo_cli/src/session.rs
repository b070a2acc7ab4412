//! Interactive prompt session.
//!
//! # Responsibility
//! - Own the one store instance for the process lifetime.
//! - Feed parsed input into the store and print every new snapshot.
//!
//! # Invariants
//! - The store is only mutated through `TaskStore::dispatch`.
//! - Frames are collected by a store listener and printed in change order.

use crate::command::{parse_line, Command, HELP};
use crate::render::{render, OutputFormat};
use anyhow::{Context, Result};
use log::{info, warn};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use todo_core::{core_version, TaskList, TaskStore};

/// Whether the read loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    store: TaskStore,
    frames: Rc<RefCell<Vec<TaskList>>>,
    format: OutputFormat,
    quiet: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, format: OutputFormat, quiet: bool) -> Self {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut store = TaskStore::new();
        let sink = Rc::clone(&frames);
        store.subscribe(move |list: &TaskList| sink.borrow_mut().push(list.clone()));

        Self {
            store,
            frames,
            format,
            quiet,
            out,
        }
    }

    /// Reads lines until EOF or `quit`.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("event=session_start module=cli status=ok");
        if !self.quiet {
            writeln!(
                self.out,
                "todo {}: type `help` for commands",
                core_version()
            )?;
        }

        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("failed to read input line")?;
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        info!(
            "event=session_end module=cli status=ok revision={} len={}",
            self.store.revision(),
            self.store.snapshot().len()
        );
        Ok(())
    }

    /// Applies one prompt line.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match parse_line(line) {
            Ok(Command::Action(action)) => {
                self.store.dispatch(action);
                self.flush_frames()?;
            }
            Ok(Command::List) => {
                let snapshot = self.store.snapshot();
                self.write_frame(&snapshot)?;
            }
            Ok(Command::Help) => writeln!(self.out, "{HELP}")?,
            Ok(Command::Quit) => return Ok(Flow::Quit),
            Ok(Command::Empty) => {}
            Err(err) => {
                warn!("event=parse_input module=cli status=rejected");
                writeln!(self.out, "error: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    #[cfg(test)]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn prompt(&mut self) -> Result<()> {
        if !self.quiet {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn flush_frames(&mut self) -> Result<()> {
        let frames: Vec<TaskList> = self.frames.borrow_mut().drain(..).collect();
        for frame in &frames {
            self.write_frame(frame)?;
        }
        Ok(())
    }

    fn write_frame(&mut self, list: &TaskList) -> Result<()> {
        let rendered = render(list, self.format).context("failed to render task list")?;
        writeln!(self.out, "{rendered}")?;
        Ok(())
    }
}
