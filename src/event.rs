use std::io::{self, BufRead, Read};

use crate::buffer::LINE_TERMINATOR;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Event {
    Quit,
    List,
    Save(String),
    Load(String),
    View(String),
    New,
    Delete,
    Stat,
    Dir,
    Help,

    /// Any line that is not a command, terminator included.
    Text(Vec<u8>),

    /// A line longer than the limit. Its bytes have been discarded.
    Overlong(usize),
}

impl Event {
    /// Commands are matched on the first whitespace-separated word, exactly
    /// and case-sensitively. The second word is the file argument; one that
    /// is not valid UTF-8 comes back empty and is rejected as a bad filename.
    pub fn parse(line: Vec<u8>) -> Event {
        if line.first() != Some(&b'.') {
            return Event::Text(line);
        }

        let command = {
            let mut words = line
                .split(|b| b.is_ascii_whitespace())
                .filter(|word| !word.is_empty());
            let keyword = words.next().unwrap_or_default();
            let mut arg = || {
                words
                    .next()
                    .and_then(|word| std::str::from_utf8(word).ok())
                    .unwrap_or_default()
                    .to_string()
            };

            match keyword {
                b".quit" => Some(Event::Quit),
                b".list" => Some(Event::List),
                b".save" => Some(Event::Save(arg())),
                b".load" => Some(Event::Load(arg())),
                b".view" => Some(Event::View(arg())),
                b".new" => Some(Event::New),
                b".del" => Some(Event::Delete),
                b".stat" => Some(Event::Stat),
                b".dir" => Some(Event::Dir),
                b".help" => Some(Event::Help),
                _ => None,
            }
        };

        command.unwrap_or(Event::Text(line))
    }
}

/// Pulls events out of a line-oriented reader, never holding more than
/// `max_line` bytes of a single line in memory.
pub struct EventReader<R> {
    reader: R,
    max_line: usize,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(reader: R, max_line: usize) -> Self {
        Self { reader, max_line }
    }

    pub fn max_line(&self) -> usize {
        self.max_line
    }

    pub fn next_event(&mut self) -> io::Result<Option<Event>> {
        let mut line = Vec::new();
        (&mut self.reader)
            .take(self.max_line as u64)
            .read_until(LINE_TERMINATOR, &mut line)?;

        if line.is_empty() {
            return Ok(None);
        }

        if line.len() == self.max_line && line.last() != Some(&LINE_TERMINATOR) {
            let rest = self.discard_line()?;
            if rest > 0 {
                return Ok(Some(Event::Overlong(line.len() + rest)));
            }
        }

        Ok(Some(Event::parse(line)))
    }

    fn discard_line(&mut self) -> io::Result<usize> {
        let mut dropped = 0;
        loop {
            let available = self.reader.fill_buf()?;
            let len = available.len();
            if len == 0 {
                return Ok(dropped);
            }

            match available.iter().position(|&b| b == LINE_TERMINATOR) {
                Some(i) => {
                    self.reader.consume(i + 1);
                    return Ok(dropped + i + 1);
                }
                None => {
                    self.reader.consume(len);
                    dropped += len;
                }
            }
        }
    }
}
