/*!
## Terminal Module

Drives a `Runtime` from a console: reads lines, pumps events, prints
output and errors.

*/

extern crate ctrlc;
use crate::lang::Error;
use crate::mach::{Event, Listing, Runtime};
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, IsTerminal};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod linefeed;
mod plain;

/// Outcome of asking the console for a line.
pub enum ReadLine {
    Input(String),
    Interrupt,
    Eof,
}

/// Both consoles implement this so the session loop doesn't care which
/// one it is talking to.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadLine>;
    fn print(&mut self, s: &str) -> io::Result<()>;
    fn error(&mut self, error: &Error) -> io::Result<()>;
    fn add_history(&mut self, _line: String) {}
}

/// Runs a session and returns the process exit code.
pub fn main(mut runtime: Runtime) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let result = if io::stdin().is_terminal() {
        match linefeed::LineEditor::new() {
            Ok(mut console) => main_loop(&mut console, &mut runtime, &interrupted),
            Err(error) => Err(error),
        }
    } else {
        main_loop(&mut plain::Plain::new(), &mut runtime, &interrupted)
    };
    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

pub fn main_loop<C: Console>(
    console: &mut C,
    runtime: &mut Runtime,
    interrupted: &AtomicBool,
) -> io::Result<i32> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Stopped => match console.read_line("")? {
                ReadLine::Input(string) => {
                    if runtime.enter(&string) {
                        console.add_history(string);
                    }
                }
                ReadLine::Interrupt => {}
                ReadLine::Eof => break,
            },
            Event::Input(prompt) => match console.read_line(&prompt)? {
                ReadLine::Input(string) => {
                    runtime.enter(&string);
                }
                ReadLine::Interrupt => runtime.interrupt(),
                ReadLine::Eof => break,
            },
            Event::Print(s) => console.print(&s)?,
            Event::List(s) => console.print(&format!("{}\n", s))?,
            Event::Error(error) => {
                console.error(&error)?;
                if error.is_fatal() {
                    return Ok(1);
                }
            }
            Event::Running => {}
            Event::Quit => break,
        }
    }
    Ok(0)
}

/// Reads a program file into `listing`.
pub fn load(filename: &Path, mut listing: Listing) -> io::Result<Listing> {
    let reader = BufReader::new(File::open(filename)?);
    for (index, line) in reader.lines().enumerate() {
        if let Err(error) = listing.load_str(&line?) {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "{} in line {} of the file. (Not BASIC line number)",
                    error,
                    index + 1
                ),
            ));
        }
    }
    Ok(listing)
}
