//! Byte-count reporting for upload and download streams.

use std::io::{self, Read, Write};

/// Called with `(bytes_so_far, total_if_known)` after every chunk.
pub type ProgressListener = Box<dyn FnMut(u64, Option<u64>) + Send>;

/// Wraps an upload body and reports how much of it has been read.
pub struct ProgressReader<R: Read> {
    inner: R,
    sent: u64,
    total: Option<u64>,
    listener: Option<ProgressListener>,
}

impl<R: Read> ProgressReader<R> {
    pub fn new(inner: R, total: Option<u64>, listener: Option<ProgressListener>) -> Self {
        Self {
            inner,
            sent: 0,
            total,
            listener,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.sent
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read_bytes = self.inner.read(buf)?;
        if read_bytes > 0 {
            self.sent = self.sent.saturating_add(read_bytes as u64);
            if let Some(cb) = self.listener.as_mut() {
                cb(self.sent, self.total);
            }
        }
        Ok(read_bytes)
    }
}

/// Wraps a download destination and reports how much has been written.
pub struct ProgressWriter<W: Write> {
    inner: W,
    written: u64,
    total: Option<u64>,
    listener: Option<ProgressListener>,
}

impl<W: Write> ProgressWriter<W> {
    pub fn new(inner: W, total: Option<u64>, listener: Option<ProgressListener>) -> Self {
        Self {
            inner,
            written: 0,
            total,
            listener,
        }
    }

    pub fn bytes_written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        if written > 0 {
            self.written = self.written.saturating_add(written as u64);
            if let Some(cb) = self.listener.as_mut() {
                cb(self.written, self.total);
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    fn recording_listener() -> (ProgressListener, Arc<Mutex<Vec<(u64, Option<u64>)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: ProgressListener = Box::new(move |done, total| {
            sink.lock().unwrap().push((done, total));
        });
        (listener, seen)
    }

    #[test]
    fn reader_reports_cumulative_bytes() {
        let (listener, seen) = recording_listener();
        let mut reader = ProgressReader::new(Cursor::new(vec![7u8; 10]), Some(10), Some(listener));
        let mut buf = [0u8; 4];
        while reader.read(&mut buf).unwrap() > 0 {}

        assert_eq!(reader.bytes_read(), 10);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(4, Some(10)), (8, Some(10)), (10, Some(10))]
        );
    }

    #[test]
    fn writer_reports_and_forwards() {
        let (listener, seen) = recording_listener();
        let mut out = Vec::new();
        {
            let mut writer = ProgressWriter::new(&mut out, None, Some(listener));
            writer.write_all(b"hello ").unwrap();
            writer.write_all(b"box").unwrap();
            writer.flush().unwrap();
            assert_eq!(writer.bytes_written(), 9);
        }
        assert_eq!(out, b"hello box");
        assert_eq!(seen.lock().unwrap().last(), Some(&(9, None)));
    }
}
