use crate::error::{AllocError, BufferFull};

pub const LINE_TERMINATOR: u8 = b'\n';

/// The session's text: a flat byte sequence with a hard capacity and a
/// dirty flag tracking whether it changed since the last save or load.
#[derive(Debug)]
pub struct Buffer {
    content: Vec<u8>,
    capacity: usize,
    dirty: bool,
}

impl Buffer {
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        let mut content = Vec::new();
        content
            .try_reserve_exact(capacity)
            .map_err(|source| AllocError { capacity, source })?;

        Ok(Self {
            content,
            capacity,
            dirty: false,
        })
    }

    pub fn append(&mut self, line: &[u8]) -> Result<(), BufferFull> {
        let available = self.available();
        if line.len() > available {
            return Err(BufferFull {
                requested: line.len(),
                available,
            });
        }

        self.content.extend_from_slice(line);
        self.dirty = true;
        Ok(())
    }

    /// Removes the most recently entered logical line.
    ///
    /// A trailing terminator is dropped first, then everything back to (but
    /// not including) the previous terminator. Returns `false` and leaves the
    /// dirty flag alone when the buffer was already empty.
    pub fn delete_last_line(&mut self) -> bool {
        let Some(&last) = self.content.last() else {
            return false;
        };

        let end = if last == LINE_TERMINATOR {
            self.content.len() - 1
        } else {
            self.content.len()
        };

        let keep = self.content[..end]
            .iter()
            .rposition(|&b| b == LINE_TERMINATOR)
            .map_or(0, |i| i + 1);

        self.content[keep..].fill(0);
        self.content.truncate(keep);
        self.dirty = true;
        true
    }

    pub fn clear(&mut self) {
        self.content.fill(0);
        self.content.clear();
        self.dirty = true;
    }

    pub fn replace(&mut self, bytes: &[u8]) -> Result<(), BufferFull> {
        if bytes.len() > self.capacity {
            return Err(BufferFull {
                requested: bytes.len(),
                available: self.capacity,
            });
        }

        self.clear();
        self.append(bytes)
    }

    pub fn contents(&self) -> &[u8] {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.content
            .iter()
            .filter(|&&b| b == LINE_TERMINATOR)
            .count()
    }

    pub fn byte_len(&self) -> usize {
        self.content.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.capacity - self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
