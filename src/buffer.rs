use crate::config::TextEncoding;
use std::{cell::RefCell, fs, io, path::Path};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Cursor {
    /// 0-based line index.
    pub line: usize,
    /// Byte offset into the line, counted in the host's encoding.
    pub idx: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    pub number: usize,
    pub filepath: String,
    pub contents: Vec<String>,
}

impl Buffer {
    pub fn new(number: usize, filepath: String) -> io::Result<Self> {
        let contents = fs::read_to_string(&filepath)?
            .lines()
            .map(|s| s.to_string())
            .collect();
        Ok(Buffer {
            number,
            filepath,
            contents,
        })
    }

    pub fn from_lines<S: AsRef<str>>(number: usize, lines: &[S]) -> Self {
        Buffer {
            number,
            filepath: String::new(),
            contents: lines.iter().map(|l| l.as_ref().to_string()).collect(),
        }
    }

    #[inline]
    pub fn line(&self, index: usize) -> &str {
        self.contents.get(index).map(String::as_str).unwrap_or("")
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.contents.len()
    }
}

/// What the completion functions need from the editor hosting them.
pub trait Host {
    /// All open buffers, in the editor's list order.
    fn buffers(&self) -> &[Buffer];
    /// Position of the current buffer inside `buffers()`.
    fn current_buffer_index(&self) -> usize;
    fn cursor(&self) -> Cursor;
    /// Display a message on the editor's error channel.
    fn report_error(&self, message: &str);

    /// Panics when `current_buffer_index()` is out of range; hosts keep
    /// it pointing at an open buffer.
    fn current_buffer(&self) -> &Buffer {
        &self.buffers()[self.current_buffer_index()]
    }

    /// The current line up to the cursor, whose offset is read in
    /// `encoding`. A cursor inside a character cuts before it.
    fn line_up_to_cursor(&self, encoding: TextEncoding) -> &str {
        let cursor = self.cursor();
        let line = self.current_buffer().line(cursor.line);
        let mut counted = 0;
        for (i, ch) in line.char_indices() {
            counted += encoding.char_len(ch);
            if counted > cursor.idx {
                return &line[..i];
            }
        }
        line
    }
}

/// A plain in-memory editor state. Errors reported through it are kept
/// until drained.
#[derive(Debug)]
pub struct Workspace {
    pub buffers: Vec<Buffer>,
    pub current: usize,
    pub cursor_pos: Cursor,
    errors: RefCell<Vec<String>>,
}

impl Workspace {
    pub fn new(buffers: Vec<Buffer>, current: usize, cursor_pos: Cursor) -> Self {
        Workspace {
            buffers,
            current,
            cursor_pos,
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Open every path as a buffer, numbered from 1 in argument order.
    pub fn open<P: AsRef<Path>>(paths: &[P], current: usize, cursor_pos: Cursor) -> io::Result<Self> {
        let mut buffers = Vec::with_capacity(paths.len());
        for (i, p) in paths.iter().enumerate() {
            buffers.push(Buffer::new(i + 1, p.as_ref().display().to_string())?);
        }
        Ok(Workspace::new(buffers, current, cursor_pos))
    }

    pub fn take_errors(&self) -> Vec<String> {
        self.errors.take()
    }
}

impl Host for Workspace {
    fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    fn current_buffer_index(&self) -> usize {
        self.current
    }

    fn cursor(&self) -> Cursor {
        self.cursor_pos
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
