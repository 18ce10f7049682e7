// Output seam: where emitted candidates go.

use std::io::{self, Write};

/// Consumer of the ordered candidate stream.
pub trait CandidateSink {
    /// Accept one candidate. An error aborts the run.
    fn accept(&mut self, candidate: &str) -> io::Result<()>;

    /// Called once after the last candidate of a successful run.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects candidates in memory.
impl CandidateSink for Vec<String> {
    fn accept(&mut self, candidate: &str) -> io::Result<()> {
        self.push(candidate.to_string());
        Ok(())
    }
}

/// Writes one candidate per line as UTF-8.
///
/// Wrap files in a `BufWriter`; `finish` flushes the writer.
pub struct LineSink<W: Write> {
    writer: W,
    lines: u64,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines handed to the writer so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CandidateSink for LineSink<W> {
    fn accept(&mut self, candidate: &str) -> io::Result<()> {
        self.writer.write_all(candidate.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `capacity` bytes, then fails every write.
    struct FullDisk {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
            }
            let n = buf.len().min(room);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_sink_writes_lines() {
        let mut sink = LineSink::new(Vec::new());
        sink.accept("p4ss").unwrap();
        sink.accept("\u{20AC}uro").unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.lines(), 2);
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "p4ss\n\u{20AC}uro\n");
    }

    #[test]
    fn line_sink_reports_write_failure() {
        let mut sink = LineSink::new(FullDisk {
            written: Vec::new(),
            capacity: 6,
        });
        sink.accept("abc").unwrap();
        let err = sink.accept("defg").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert_eq!(sink.lines(), 1);
        assert_eq!(sink.into_inner().written, b"abc\nde");
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<String> = Vec::new();
        sink.accept("x").unwrap();
        sink.finish().unwrap();
        assert_eq!(sink, vec!["x"]);
    }
}
