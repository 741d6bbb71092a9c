//! Line input from the terminal.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// The line was not valid UTF-8 (e.g. a legacy CP949 terminal).
    Undecodable,
    Eof,
}

/// Reads newline-terminated lines without letting bad encodings end the loop.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    pub async fn read_line(&mut self) -> std::io::Result<InputEvent> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(InputEvent::Eof);
        }
        let line = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(match std::str::from_utf8(line) {
            Ok(text) => InputEvent::Line(text.to_string()),
            Err(_) => InputEvent::Undecodable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bad_encoding_is_skipped_and_reading_continues() {
        // "안녕" in EUC-KR, then a normal line.
        let mut reader = LineReader::new(b"\xbe\xc8\xb3\xe7\nHello\n".as_slice());
        assert_eq!(reader.read_line().await.unwrap(), InputEvent::Undecodable);
        assert_eq!(
            reader.read_line().await.unwrap(),
            InputEvent::Line("Hello".to_string())
        );
        assert_eq!(reader.read_line().await.unwrap(), InputEvent::Eof);
    }

    #[tokio::test]
    async fn strips_line_endings_and_keeps_unterminated_tail() {
        let mut reader = LineReader::new("안녕하세요\r\nlast".as_bytes());
        assert_eq!(
            reader.read_line().await.unwrap(),
            InputEvent::Line("안녕하세요".to_string())
        );
        assert_eq!(
            reader.read_line().await.unwrap(),
            InputEvent::Line("last".to_string())
        );
        assert_eq!(reader.read_line().await.unwrap(), InputEvent::Eof);
    }

    #[tokio::test]
    async fn empty_line_is_still_a_line() {
        let mut reader = LineReader::new(b"\n".as_slice());
        assert_eq!(
            reader.read_line().await.unwrap(),
            InputEvent::Line(String::new())
        );
    }
}
