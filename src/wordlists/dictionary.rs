//! Line-delimited dictionary file
//!
//! The file is scanned once when opened to count its lines and once more per
//! drawn word. Lines are not validated up front; an empty line only fails if
//! it happens to be drawn.

use crate::core::Word;
use crate::error::HangmanError;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Dictionary used when no path is given on the command line
pub const DEFAULT_DICTIONARY: &str = "dict.txt";

/// An open word list with its cached line count
#[derive(Debug)]
pub struct WordList {
    path: PathBuf,
    reader: BufReader<File>,
    line_count: usize,
}

impl WordList {
    /// Open a word list and count its lines
    ///
    /// A last line without a terminator still counts.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryUnavailable` if the file cannot be opened or read,
    /// and `EmptyDictionary` if it holds no lines at all.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HangmanError> {
        let path = path.as_ref().to_path_buf();
        let unavailable = |source: io::Error| HangmanError::DictionaryUnavailable {
            path: path.clone(),
            source,
        };

        let file = File::open(&path).map_err(unavailable)?;
        let mut reader = BufReader::new(file);
        let line_count = count_lines(&mut reader).map_err(unavailable)?;
        reader.rewind().map_err(unavailable)?;

        if line_count == 0 {
            return Err(HangmanError::EmptyDictionary { path });
        }

        info!(path = %path.display(), line_count, "opened dictionary");

        Ok(Self {
            path,
            reader,
            line_count,
        })
    }

    /// Draw a uniformly random line as the target word
    ///
    /// The caller owns the generator; seed it once per process rather than
    /// per draw.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWord` if the drawn line has nothing but a terminator, and
    /// `DictionaryUnavailable` if the file can no longer be read.
    pub fn random_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Word, HangmanError> {
        let index = rng.random_range(0..self.line_count);
        let line = self.read_line_at(index).map_err(|source| {
            HangmanError::DictionaryUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(line = index + 1, "drew word");

        Word::new(line).map_err(|_| HangmanError::EmptyWord { line: index + 1 })
    }

    /// Release the file handle
    pub fn close(self) {
        debug!(path = %self.path.display(), "closed dictionary");
    }

    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_line_at(&mut self, index: usize) -> io::Result<String> {
        self.reader.rewind()?;

        let mut buf = Vec::new();
        for _ in 0..=index {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "dictionary shrank while open",
                ));
            }
        }

        self.reader.rewind()?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn count_lines<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut lines = 0;
    while reader.read_until(b'\n', &mut buf)? > 0 {
        lines += 1;
        buf.clear();
    }
    Ok(lines)
}
