use super::exec::{input_value, Flow};
use super::{Listing, Var, MAX_LINE_LEN};
use crate::error;
use crate::lang::ast::{Command, Statement};
use crate::lang::{Error, Line};
use std::collections::VecDeque;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter runtime
///
/// The runtime never touches a terminal. A driver feeds it lines with
/// `enter` and pumps `execute` for events until it reports `Stopped`.

#[derive(Debug, Default)]
pub struct Runtime {
    listing: Listing,
    var: Var,
    state: State,
    pending: VecDeque<Event>,
}

/// Events for the user interface.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Waiting for a command or program line.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    Print(String),
    List(String),
    /// Waiting for a value. Carries the prompt.
    Input(String),
    Error(Error),
    /// The session should end.
    Quit,
}

#[derive(Debug)]
enum State {
    Stopped,
    /// Next line to run and whether it was reached by a jump.
    Running(u32, bool),
    /// Variable awaiting a value and the line that asked for it.
    Input(Rc<str>, Option<u32>),
}

impl Default for State {
    fn default() -> State {
        State::Stopped
    }
}

const INPUT_PROMPT: &str = " ? ";

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_line_limit(limit: u32) -> Runtime {
        Runtime {
            listing: Listing::with_limit(limit),
            ..Runtime::default()
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Replaces the program, as when loading from a file.
    pub fn set_listing(&mut self, listing: Listing) {
        self.state = State::Stopped;
        self.listing = listing;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(..))
    }

    /// Enters a line of input from the user.
    /// Returns true when the line is worth keeping in history.
    pub fn enter(&mut self, string: &str) -> bool {
        if let State::Input(var_name, resume) = &self.state {
            let (var_name, resume) = (var_name.clone(), *resume);
            self.enter_input(var_name, resume, string);
            return false;
        }
        if string.len() > MAX_LINE_LEN {
            self.pending.push_back(Event::Error(error!(LineBufferOverflow)));
            return false;
        }
        let line = Line::new(string);
        if line.is_empty() {
            if let Some(num) = line.number() {
                self.listing.remove(num);
                return true;
            }
            return false;
        }
        if !line.is_direct() {
            if let Err(error) = self.listing.insert(line) {
                self.pending.push_back(Event::Error(error));
            }
            return true;
        }
        match line.command() {
            Some(command) => self.command(command),
            None => match line.ast() {
                Ok(statement) => self.direct(statement),
                Err(error) => self.pending.push_back(Event::Error(error)),
            },
        }
        true
    }

    /// Stops a running program or an `INPUT` in progress.
    pub fn interrupt(&mut self) {
        if let State::Stopped = self.state {
            return;
        }
        self.state = State::Stopped;
        self.pending.push_back(Event::Error(error!(Break)));
    }

    /// Runs at most `cycles` program lines and reports what happened.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.pending.pop_front() {
            return event;
        }
        for _ in 0..cycles {
            match self.state {
                State::Stopped => return Event::Stopped,
                State::Input(..) => return Event::Input(INPUT_PROMPT.to_string()),
                State::Running(line, jumped) => match self.step(line, jumped) {
                    Ok(Some(event)) => return event,
                    Ok(None) => continue,
                    Err(error) => {
                        self.state = State::Stopped;
                        return Event::Error(error);
                    }
                },
            }
        }
        match self.state {
            State::Stopped => Event::Stopped,
            _ => Event::Running,
        }
    }

    fn command(&mut self, command: Command) {
        match command {
            Command::Run => {
                self.listing.reset_counts();
                if let Some(first) = self.listing.first() {
                    self.state = State::Running(first, false);
                }
            }
            Command::List => {
                for line in self.listing.lines() {
                    self.pending.push_back(Event::List(line.to_string()));
                }
            }
            Command::Clear => {
                self.listing.clear();
                self.var.clear();
            }
            Command::Quit => self.pending.push_back(Event::Quit),
        }
    }

    fn direct(&mut self, statement: Statement) {
        let flow = match statement {
            Statement::Let(..) | Statement::Print(..) | Statement::Input(..) => {
                statement.execute(&mut self.var, &self.listing)
            }
            Statement::End => Ok(Flow::Halt),
            Statement::Rem(..) | Statement::Goto(..) | Statement::If(..) => {
                Err(error!(SyntaxError; "ILLEGAL DIRECT"))
            }
        };
        match flow {
            Ok(Flow::Print(s)) => self.pending.push_back(Event::Print(s)),
            Ok(Flow::Input(var_name)) => self.state = State::Input(var_name, None),
            Ok(Flow::Halt) => self.pending.push_back(Event::Quit),
            Ok(Flow::Next) | Ok(Flow::Jump(_)) => {}
            Err(error) => self.pending.push_back(Event::Error(error)),
        }
    }

    fn enter_input(&mut self, var_name: Rc<str>, resume: Option<u32>, string: &str) {
        match input_value(string) {
            Some(value) => {
                self.var.store(&var_name, value);
                match resume {
                    Some(line) => self.advance(line),
                    None => self.state = State::Stopped,
                }
            }
            None => self
                .pending
                .push_back(Event::Print("INVALID NUMBER\n".to_string())),
        }
    }

    fn advance(&mut self, line: u32) {
        self.state = match self.listing.next(line) {
            Some(next) => State::Running(next, false),
            None => State::Stopped,
        };
    }

    /// One transition of the control-flow loop.
    fn step(&mut self, line: u32, jumped: bool) -> Result<Option<Event>> {
        if !self.listing.contains(line) {
            self.state = State::Stopped;
            if jumped {
                return Err(error!(LineNumberError));
            }
            return Ok(None);
        }
        self.listing.increment(line)?;
        let statement = match self.listing.statement(line) {
            Some(statement) => statement,
            None => return Err(error!(LineNumberError)),
        };
        let flow = match statement {
            Statement::Goto(target) => Flow::Jump(*target),
            Statement::If(_, _, _, target) => {
                if statement.is_condition_true(&self.var)? {
                    Flow::Jump(*target)
                } else {
                    Flow::Next
                }
            }
            Statement::End => Flow::Halt,
            Statement::Let(..)
            | Statement::Print(..)
            | Statement::Input(..)
            | Statement::Rem(..) => statement.execute(&mut self.var, &self.listing)?,
        };
        match flow {
            Flow::Next => {
                self.advance(line);
                Ok(None)
            }
            Flow::Print(s) => {
                self.advance(line);
                Ok(Some(Event::Print(s)))
            }
            Flow::Input(var_name) => {
                self.state = State::Input(var_name, Some(line));
                Ok(Some(Event::Input(INPUT_PROMPT.to_string())))
            }
            Flow::Jump(target) => {
                self.state = State::Running(target, true);
                Ok(None)
            }
            Flow::Halt => {
                self.state = State::Stopped;
                Ok(None)
            }
        }
    }
}
