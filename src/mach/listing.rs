use super::{DEFAULT_LINE_LIMIT, MAX_LINE_LEN};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Lines are kept in ascending line number order. Each stored line owns
/// its parsed statement and an execution counter; all three are
/// inserted, replaced and removed together.

#[derive(Debug)]
pub struct Listing {
    source: BTreeMap<u32, Entry>,
    limit: u32,
}

#[derive(Debug)]
struct Entry {
    line: Line,
    statement: Statement,
    count: u32,
}

impl Entry {
    fn line(&self) -> &Line {
        &self.line
    }
}

impl Default for Listing {
    fn default() -> Listing {
        Listing::with_limit(DEFAULT_LINE_LIMIT)
    }
}

impl Listing {
    /// `limit` is the execution count at which a line becomes an
    /// `EXECUTION LIMIT EXCEEDED` error.
    pub fn with_limit(limit: u32) -> Listing {
        Listing {
            source: BTreeMap::new(),
            limit,
        }
    }

    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn contains(&self, num: u32) -> bool {
        self.source.contains_key(&num)
    }

    /// Parses and stores a numbered line, replacing any previous line with
    /// the same number. Nothing changes if the line does not parse.
    pub fn insert(&mut self, line: Line) -> Result<Option<Line>> {
        let num = match line.number() {
            Some(0) => return Err(error!(LineNumberError; "LINE NUMBERS START AT 1")),
            Some(num) => num,
            None => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        };
        let statement = line.ast()?;
        let entry = Entry {
            line,
            statement,
            count: 0,
        };
        Ok(self.source.insert(num, entry).map(|old| old.line))
    }

    pub fn remove(&mut self, num: u32) -> Option<Line> {
        self.source.remove(&num).map(|entry| entry.line)
    }

    pub fn source(&self, num: u32) -> Option<String> {
        self.source.get(&num).map(|entry| entry.line.source())
    }

    pub fn statement(&self, num: u32) -> Option<&Statement> {
        self.source.get(&num).map(|entry| &entry.statement)
    }

    pub fn count(&self, num: u32) -> Option<u32> {
        self.source.get(&num).map(|entry| entry.count)
    }

    pub fn first(&self) -> LineNumber {
        self.source.keys().next().copied()
    }

    pub fn next(&self, num: u32) -> LineNumber {
        self.source
            .range((Excluded(num), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.entries().map(Entry::line)
    }

    fn entries(&self) -> Values<'_, u32, Entry> {
        self.source.values()
    }

    pub fn increment(&mut self, num: u32) -> Result<()> {
        let limit = self.limit;
        match self.source.get_mut(&num) {
            Some(entry) => {
                entry.count = entry.count.saturating_add(1);
                if entry.count >= limit {
                    Err(error!(ExecutionLimit))
                } else {
                    Ok(())
                }
            }
            None => Err(error!(LineNumberError)),
        }
    }

    pub fn reset_counts(&mut self) {
        for entry in self.source.values_mut() {
            entry.count = 0;
        }
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<()> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::new(line);
        if line.is_empty() {
            if let Some(num) = line.number() {
                self.remove(num);
            }
            Ok(())
        } else if line.is_direct() {
            Err(error!(DirectStatementInFile))
        } else {
            self.insert(line)?;
            Ok(())
        }
    }
}
