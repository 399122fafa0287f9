//! Console front-end
//!
//! Drives the calibration and settings pages from a line-oriented terminal
//! session. Spin boxes and labels are in-memory; typing `set x 0.2` puts
//! `0.2` into the X spin box and presses its set button. Every result is
//! written to the console's own writer.

use printpanel_core::OffsetAxis;
use printpanel_ui::{
    input_control_name, CalibrationScreen, ConfirmationDialog, ControlFactory, LabelDisplay,
    OffsetDisplay, OffsetInput, PageAction, PageResponse, RestoreOutcome, ScreenPage,
    SettingsScreen, SpinBoxInput,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Creates console controls and keeps the spin boxes reachable by name
#[derive(Default)]
pub struct ConsoleFactory {
    inputs: RefCell<HashMap<String, SpinBoxInput>>,
}

impl ConsoleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into a spin box; false if no page asked for it
    pub fn type_into(&self, name: &str, text: &str) -> bool {
        match self.inputs.borrow().get(name) {
            Some(input) => {
                input.set_raw(text);
                true
            }
            None => false,
        }
    }
}

impl ControlFactory for ConsoleFactory {
    fn input(&self, _page: &str, name: &str) -> Option<Box<dyn OffsetInput>> {
        let input = SpinBoxInput::new();
        self.inputs
            .borrow_mut()
            .insert(name.to_string(), input.clone());
        Some(Box::new(input))
    }

    fn display(&self, _page: &str, _name: &str) -> Option<Box<dyn OffsetDisplay>> {
        Some(Box::new(LabelDisplay::new()))
    }
}

/// Dialog on stderr; answers are read from stdin
pub struct StdinDialog;

impl ConfirmationDialog for StdinDialog {
    fn warning_ok(&self, message: &str) {
        eprintln!("WARNING: {}", message);
    }

    fn warning_yes_no(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                debug!("Failed to read answer: {}", e);
                false
            }
        }
    }
}

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Open(String),
    Back,
    Set { axis: char, value: String },
    Restore,
    Pages,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("").to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        match (command.as_str(), args.as_slice()) {
            ("open", [page]) => Ok(Self::Open(page.to_string())),
            ("back", []) => Ok(Self::Back),
            ("set", [axis, value]) => {
                let mut letters = axis.chars();
                match (letters.next(), letters.next()) {
                    (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(Self::Set {
                        axis: letter.to_ascii_uppercase(),
                        value: value.to_string(),
                    }),
                    _ => Err(format!("not an axis: {}", axis)),
                }
            }
            ("restore", []) => Ok(Self::Restore),
            ("pages", []) => Ok(Self::Pages),
            ("help", _) | ("?", _) => Ok(Self::Help),
            ("quit", []) | ("exit", []) => Ok(Self::Quit),
            ("", _) => Err("empty command".to_string()),
            _ => Err(format!("unrecognised command: {}", line.trim())),
        }
    }
}

const HELP: &str = "\
Commands:
  pages               list calibration pages
  open <page>         open a calibration page
  set <axis> <value>  set an offset on the open page (z on nozzle_offset, x|y|z on tool_offset)
  back                return to the main calibration page
  restore             restore default print settings
  quit                exit";

/// Whether the session continues after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<'a, W: Write> {
    screen: CalibrationScreen,
    settings: SettingsScreen,
    factory: &'a ConsoleFactory,
    out: W,
}

impl<'a, W: Write> Console<'a, W> {
    pub fn new(
        screen: CalibrationScreen,
        settings: SettingsScreen,
        factory: &'a ConsoleFactory,
        out: W,
    ) -> Self {
        Self {
            screen,
            settings,
            factory,
            out,
        }
    }

    /// Read commands until `quit` or end of input
    ///
    /// Each line is read separately so that yes/no prompts can read stdin
    /// in between.
    pub fn run(&mut self, input: impl Fn(&mut String) -> io::Result<usize>) -> anyhow::Result<()> {
        writeln!(self.out, "{}", HELP)?;
        loop {
            write!(self.out, "{}> ", self.prompt())?;
            self.out.flush()?;

            let mut line = String::new();
            if input(&mut line)? == 0 {
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ConsoleCommand>() {
                Ok(command) => {
                    if self.execute(command)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(e) => writeln!(self.out, "{} (try 'help')", e)?,
            }
        }
    }

    fn prompt(&self) -> String {
        match self.screen.current() {
            ScreenPage::Main => "calibration".to_string(),
            ScreenPage::Page(id) => id.to_string(),
        }
    }

    fn resolve_axis(&self, letter: char) -> Option<OffsetAxis> {
        self.screen
            .current_page()?
            .axes()
            .iter()
            .copied()
            .find(|axis| axis.letter() == letter)
    }

    /// Run one command
    pub fn execute(&mut self, command: ConsoleCommand) -> io::Result<Flow> {
        match command {
            ConsoleCommand::Pages => {
                for (id, title) in self.screen.ids().into_iter().zip(self.screen.titles()) {
                    writeln!(self.out, "  {:<16} {}", id, title)?;
                }
            }
            ConsoleCommand::Open(id) => {
                if let Err(e) = self.screen.open(&id) {
                    writeln!(self.out, "{}", e)?;
                }
            }
            ConsoleCommand::Back => self.screen.back(),
            ConsoleCommand::Set { axis, value } => self.set(axis, &value)?,
            ConsoleCommand::Restore => match self.settings.restore_print_settings() {
                RestoreOutcome::Restored => writeln!(self.out, "Print settings restored")?,
                RestoreOutcome::Declined => writeln!(self.out, "Restore cancelled")?,
                RestoreOutcome::Failed(failed) => {
                    writeln!(self.out, "Restore stopped at {}", failed.command)?
                }
            },
            ConsoleCommand::Help => writeln!(self.out, "{}", HELP)?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn set(&mut self, letter: char, value: &str) -> io::Result<()> {
        if self.screen.current() == ScreenPage::Main {
            return writeln!(self.out, "Open a calibration page first");
        }
        let Some(axis) = self.resolve_axis(letter) else {
            return writeln!(self.out, "No {} offset on this page", letter);
        };
        if !self.factory.type_into(input_control_name(axis), value) {
            return writeln!(self.out, "{} offset input is not available", axis);
        }

        match self.screen.dispatch(PageAction::Set(axis)) {
            Ok(PageResponse::Committed(outcome)) => writeln!(
                self.out,
                "{} offset: {} (sent {})",
                outcome.axis,
                outcome.displayed.display_text(),
                outcome.commands.join(", ")
            ),
            Ok(PageResponse::Failed(e)) => writeln!(self.out, "Not applied: {}", e),
            Ok(PageResponse::Ignored) => writeln!(self.out, "{} offset is disabled", axis),
            Ok(PageResponse::NavigateBack) => Ok(()),
            Err(e) => writeln!(self.out, "{}", e),
        }
    }
}

/// Read one line from stdin without holding the lock between lines
pub fn read_stdin_line(line: &mut String) -> io::Result<usize> {
    io::stdin().lock().read_line(line)
}
