use crate::core::{AccumulatorError, Observation};
use crate::streams::ValueStream;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::{Path, PathBuf};

/// Splits on whitespace and commas, dropping empty pieces.
pub(crate) fn split_tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Stream of numbers read lazily from a text file.
///
/// Values are separated by whitespace and/or commas. Blank lines and lines
/// starting with `#` are skipped. The file is read one line at a time. A line
/// that is not valid UTF-8 yields one `InvalidInput`; an I/O error while
/// reading ends the stream.
#[derive(Debug)]
pub struct TextFileStream {
    path: PathBuf,
    reader: BufReader<File>,
    pending: VecDeque<Result<String, AccumulatorError>>,
    position: usize,
    exhausted: bool,
}

impl TextFileStream {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let reader = BufReader::new(File::open(&path)?);
        Ok(Self {
            path,
            reader,
            pending: VecDeque::new(),
            position: 0,
            exhausted: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pulls lines until at least one token is pending or the file ends.
    fn fill(&mut self) {
        let mut buf = Vec::new();
        while self.pending.is_empty() && !self.exhausted {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => self.exhausted = true,
                Ok(_) => match String::from_utf8(buf) {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if !trimmed.is_empty() && !trimmed.starts_with('#') {
                            self.pending.extend(split_tokens(trimmed).map(Ok));
                        }
                        buf = line.into_bytes();
                    }
                    Err(e) => {
                        let lossy = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                        self.pending.push_back(Err(AccumulatorError::invalid(lossy)));
                        buf = e.into_bytes();
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "read failed, ending stream");
                    self.exhausted = true;
                }
            }
        }
    }
}

impl ValueStream for TextFileStream {
    fn has_more_values(&self) -> bool {
        !self.pending.is_empty() || !self.exhausted
    }

    fn next_value(&mut self) -> Option<Result<Observation, AccumulatorError>> {
        self.fill();
        let token = self.pending.pop_front()?;
        let pos = self.position;
        self.position += 1;
        Some(
            token
                .and_then(|t| t.parse::<Observation>())
                .map_err(|e| e.at_position(pos)),
        )
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.reader = BufReader::new(File::open(&self.path)?);
        self.pending.clear();
        self.position = 0;
        self.exhausted = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{ErrorKind, Write};
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(content.as_bytes()).unwrap();
        tf.flush().unwrap();
        tf
    }

    fn drain(s: &mut TextFileStream) -> Vec<Result<Observation, AccumulatorError>> {
        s.values().collect()
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = TextFileStream::new("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn reads_whitespace_and_comma_separated_values() {
        let tf = file_with("# header\n1 2,3\n\n  4.5 ,, 6\n");
        let mut s = TextFileStream::new(tf.path()).unwrap();
        let got: Vec<Observation> = drain(&mut s).into_iter().map(Result::unwrap).collect();
        assert_eq!(
            got,
            vec![
                Observation::Int(1),
                Observation::Int(2),
                Observation::Int(3),
                Observation::Float(4.5),
                Observation::Int(6),
            ]
        );
        assert!(!s.has_more_values());
    }

    #[test]
    fn bad_tokens_carry_their_position() {
        let tf = file_with("1\nabc\n3\n");
        let mut s = TextFileStream::new(tf.path()).unwrap();
        let got = drain(&mut s);
        assert_eq!(got.len(), 3);
        assert_eq!(
            got[1],
            Err(AccumulatorError::InvalidInput {
                input: "abc".into(),
                position: Some(1),
            })
        );
        assert_eq!(got[2], Ok(Observation::Int(3)));
    }

    #[test]
    fn undecodable_line_is_an_invalid_value_not_the_end() {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(b"1\n2\n\xff\n100\n").unwrap();
        tf.flush().unwrap();
        let mut s = TextFileStream::new(tf.path()).unwrap();
        let got = drain(&mut s);
        assert_eq!(got.len(), 4);
        assert!(matches!(
            got[2],
            Err(AccumulatorError::InvalidInput {
                position: Some(2),
                ..
            })
        ));
        assert_eq!(got[3], Ok(Observation::Int(100)));
    }

    #[test]
    fn empty_file_is_an_empty_stream() {
        let tf = file_with("");
        let mut s = TextFileStream::new(tf.path()).unwrap();
        assert!(s.next_value().is_none());
        assert!(!s.has_more_values());
    }

    #[test]
    fn restart_reopens_the_file() {
        let tf = file_with("10 20\n");
        let mut s = TextFileStream::new(tf.path()).unwrap();
        let first = drain(&mut s);
        s.restart().unwrap();
        let second = drain(&mut s);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
