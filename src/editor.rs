use crate::{
    buffer::Buffer,
    config::Config,
    dir,
    error::IoError,
    event::{Event, EventReader},
    persist,
};

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};
use tracing::{debug, info, warn};

const HELP: &str = "
Commands:
.quit\t\texit program, no save
.list\t\tshow buffer
.save [file]\tsave buffer to file
.load [file]\tload file to buffer
.view [file]\tdisplay contents of file
.new\t\tclear buffer
.del\t\tdelete last line of buffer
.stat\t\tshow buffer status
.dir\t\tdisplay files in current directory
.help\t\tshow this listing
";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    Running,
    Terminated,
}

/// One editing session: reads events from `R`, writes everything the user
/// sees to `W`.
pub struct Editor<R, W> {
    events: EventReader<R>,
    out: W,
    buffer: Buffer,
    workdir: PathBuf,
    color: bool,
    state: State,
}

impl<R: BufRead, W: Write> Editor<R, W> {
    pub fn new(config: &Config, input: R, out: W) -> anyhow::Result<Self> {
        let buffer = Buffer::new(config.capacity).context("Memory Error (fatal)")?;

        Ok(Self {
            events: EventReader::new(input, config.max_line),
            out,
            buffer,
            workdir: PathBuf::from("."),
            color: config.color,
            state: State::Running,
        })
    }

    /// Resolve file names and list entries relative to `dir` instead of the
    /// process working directory.
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = dir.into();
        self
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.say("Type .help for a command list")?;
        self.out.flush()?;

        while self.state == State::Running {
            let event = match self.events.next_event().context("reading input")? {
                Some(event) => event,
                None => {
                    debug!("end of input");
                    Event::Quit
                }
            };

            self.handle_event(event)?;
            self.out.flush()?;
        }

        Ok(())
    }

    pub fn handle_event(&mut self, ev: Event) -> anyhow::Result<()> {
        debug!(event = ?ev, "dispatch");

        match ev {
            Event::Quit => self.handle_quit()?,
            Event::List => self.out.write_all(self.buffer.contents())?,
            Event::Save(name) => self.handle_save(&name)?,
            Event::Load(name) => self.handle_load(&name)?,
            Event::View(name) => self.handle_view(&name)?,
            Event::New => self.handle_new()?,
            Event::Delete => {
                self.buffer.delete_last_line();
            }
            Event::Stat => self.handle_stat()?,
            Event::Dir => self.handle_dir()?,
            Event::Help => write!(self.out, "\n{HELP}\n")?,
            Event::Text(line) => self.handle_text(&line)?,
            Event::Overlong(len) => {
                let max = self.events.max_line();
                warn!(len, max, "discarded overlong line");
                self.warn(&format!("Line too long ({len} bytes, max {max}), discarded"))?;
            }
        }

        Ok(())
    }

    fn handle_quit(&mut self) -> anyhow::Result<()> {
        if self.buffer.is_dirty() {
            self.warn("(buffer not saved on exit)")?;
        }
        self.say("Exiting")?;
        self.state = State::Terminated;
        Ok(())
    }

    fn handle_text(&mut self, line: &[u8]) -> anyhow::Result<()> {
        if let Err(err) = self.buffer.append(line) {
            warn!(%err, "line rejected");
            self.warn("Warning: buffer full")?;
        }
        Ok(())
    }

    fn handle_new(&mut self) -> anyhow::Result<()> {
        if self.buffer.is_dirty() {
            self.warn("(buffer not saved)")?;
        }
        self.buffer.clear();
        self.say("Buffer Cleared")
    }

    fn handle_save(&mut self, name: &str) -> anyhow::Result<()> {
        match persist::save(self.buffer.contents(), &self.resolve(name)) {
            Ok(()) => {
                self.buffer.mark_saved();
                self.say(&format!("Buffer Saved to {name}"))
            }
            Err(err) => self.report_io(name, err),
        }
    }

    fn handle_load(&mut self, name: &str) -> anyhow::Result<()> {
        let bytes = match persist::load(&self.resolve(name)) {
            Ok(bytes) => bytes,
            Err(err) => return self.report_io(name, err),
        };

        match self.buffer.replace(&bytes) {
            Ok(()) => {
                self.buffer.mark_saved();
                info!(file = name, bytes = bytes.len(), "loaded file into buffer");
                self.say(&format!("File {name} loaded"))
            }
            Err(err) => {
                warn!(file = name, %err, "file does not fit in buffer");
                self.error("Warning: buffer full")?;
                self.error("Aborted.")
            }
        }
    }

    fn handle_view(&mut self, name: &str) -> anyhow::Result<()> {
        match persist::load(&self.resolve(name)) {
            Ok(bytes) => {
                self.out.write_all(&bytes)?;
                writeln!(self.out)?;
                Ok(())
            }
            Err(err) => self.report_io(name, err),
        }
    }

    fn handle_stat(&mut self) -> anyhow::Result<()> {
        let saved = if self.buffer.is_dirty() { "No" } else { "Yes" };
        writeln!(self.out, "Buffer Status:")?;
        writeln!(self.out, "Buffer Size (bytes):\t{}", self.buffer.byte_len())?;
        writeln!(self.out, "Lines of text:\t\t{}", self.buffer.line_count())?;
        writeln!(self.out, "Buffer Saved:\t\t{saved}")?;
        Ok(())
    }

    fn handle_dir(&mut self) -> anyhow::Result<()> {
        let names = match dir::list_entries(&self.workdir) {
            Ok(names) => names,
            Err(err) => {
                warn!(%err, dir = %self.workdir.display(), "directory listing failed");
                return self.error("Directory listing error: Aborted.");
            }
        };

        writeln!(self.out, "\nFiles:")?;
        for name in names {
            writeln!(self.out, "{name}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// An empty name stays empty so the persistence layer can reject it.
    fn resolve(&self, name: &str) -> PathBuf {
        if name.is_empty() {
            PathBuf::new()
        } else {
            self.workdir.join(Path::new(name))
        }
    }

    fn report_io(&mut self, name: &str, err: IoError) -> anyhow::Result<()> {
        warn!(file = name, %err, "file operation failed");

        let message = match err {
            IoError::InvalidPath => "Bad filename".to_string(),
            IoError::CreateFailed { .. } => format!("Error creating file {name}"),
            IoError::WriteFailed { .. } => format!("Error writing file {name}"),
            IoError::OpenFailed { .. } | IoError::ReadFailed { .. } => {
                format!("Error reading file {name}")
            }
        };

        self.error(&message)?;
        self.error("Aborted.")
    }

    fn say(&mut self, msg: &str) -> anyhow::Result<()> {
        queue!(self.out, Print(msg), Print("\n"))?;
        Ok(())
    }

    fn warn(&mut self, msg: &str) -> anyhow::Result<()> {
        if self.color {
            queue!(self.out, PrintStyledContent(msg.yellow()), Print("\n"))?;
            Ok(())
        } else {
            self.say(msg)
        }
    }

    fn error(&mut self, msg: &str) -> anyhow::Result<()> {
        if self.color {
            queue!(self.out, PrintStyledContent(msg.red()), Print("\n"))?;
            Ok(())
        } else {
            self.say(msg)
        }
    }
}
