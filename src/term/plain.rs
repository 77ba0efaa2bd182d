use super::{Console, ReadLine};
use crate::lang::Error;
use std::io::{self, BufRead, Write};

/// Console for piped input. Output is written exactly as the program
/// produces it so transcripts can be compared.
pub struct Plain {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Plain {
    pub fn new() -> Plain {
        Plain {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Console for Plain {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadLine> {
        if !prompt.is_empty() {
            let mut out = self.stdout.lock();
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }
        let mut string = String::new();
        if self.stdin.lock().read_line(&mut string)? == 0 {
            return Ok(ReadLine::Eof);
        }
        let len = string.trim_end_matches(&['\r', '\n'][..]).len();
        string.truncate(len);
        Ok(ReadLine::Input(string))
    }

    fn print(&mut self, s: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(s.as_bytes())?;
        out.flush()
    }

    fn error(&mut self, error: &Error) -> io::Result<()> {
        self.print(&format!("{}\n", error))
    }
}
