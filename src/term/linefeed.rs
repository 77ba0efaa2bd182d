extern crate ansi_term;
extern crate linefeed;
use super::{Console, ReadLine};
use crate::lang::Error;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io;

/// Interactive console with line editing and history.
pub struct LineEditor {
    interface: Interface<DefaultTerminal>,
}

impl LineEditor {
    pub fn new() -> io::Result<LineEditor> {
        let interface = Interface::new("BASIC")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(LineEditor { interface })
    }
}

impl Console for LineEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadLine> {
        self.interface.set_prompt(prompt)?;
        Ok(match self.interface.read_line()? {
            ReadResult::Input(string) => ReadLine::Input(string),
            ReadResult::Signal(Signal::Interrupt) => {
                self.interface.set_buffer("")?;
                ReadLine::Interrupt
            }
            ReadResult::Signal(_) | ReadResult::Eof => ReadLine::Eof,
        })
    }

    fn print(&mut self, s: &str) -> io::Result<()> {
        self.interface.write_fmt(format_args!("{}", s))
    }

    fn error(&mut self, error: &Error) -> io::Result<()> {
        self.interface
            .write_fmt(format_args!("{}\n", Style::new().bold().paint(error.to_string())))
    }

    fn add_history(&mut self, line: String) {
        self.interface.add_history_unique(line);
    }
}
