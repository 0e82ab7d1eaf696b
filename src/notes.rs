use std::fmt;

use log::{debug, trace};

use crate::error::{SolidLabError, SolidLabResult};

/// Separator used by [`NoteList::join`].
pub const DEFAULT_SEPARATOR: char = ',';

/// An ordered, append-only list of short text notes.
///
/// Each instance owns its notes; cloning deep-copies them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteList {
    notes: Vec<String>,
}

impl NoteList {
    /// Creates an empty note list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library semantic version (`MAJOR.MINOR.PATCH`).
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Appends a note to the end of the list.
    ///
    /// Any text is accepted, including the empty string.
    pub fn add_note(&mut self, text: impl Into<String>) {
        let text = text.into();
        trace!("add_note position={} len={}", self.notes.len(), text.len());
        self.notes.push(text);
    }

    /// Number of stored notes.
    pub fn size(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the note at `index` (0-based).
    ///
    /// Returns [`SolidLabError::OutOfRange`] if `index >= size()`.
    pub fn note(&self, index: usize) -> SolidLabResult<&str> {
        match self.notes.get(index) {
            Some(note) => Ok(note.as_str()),
            None => {
                debug!("note read rejected index={} len={}", index, self.notes.len());
                Err(SolidLabError::OutOfRange {
                    index,
                    len: self.notes.len(),
                })
            }
        }
    }

    /// Joins all notes with [`DEFAULT_SEPARATOR`].
    pub fn join(&self) -> String {
        self.join_with(DEFAULT_SEPARATOR)
    }

    /// Joins all notes in insertion order, placing `separator` between
    /// adjacent notes only.
    ///
    /// An empty list always yields an empty string.
    pub fn join_with(&self, separator: char) -> String {
        let Some((first, rest)) = self.notes.split_first() else {
            return String::new();
        };

        let content: usize = self.notes.iter().map(String::len).sum();
        let mut out = String::with_capacity(content + rest.len() * separator.len_utf8());

        out.push_str(first);
        for note in rest {
            out.push(separator);
            out.push_str(note);
        }

        trace!("join notes={} len={}", self.notes.len(), out.len());
        out
    }

    /// Iterates over the notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.notes.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl<S: Into<String>> Extend<S> for NoteList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for text in iter {
            self.add_note(text);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for NoteList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = NoteList::new();
        list.extend(iter);
        list
    }
}

impl fmt::Display for NoteList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}
