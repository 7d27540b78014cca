use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// A readable, seekable source of bytes that resources can be loaded from.
///
/// Every operation returns `None` on failure. Implement this to load images and
/// other resources from archives, network buffers or any custom storage.
pub trait InputStream {
    /// Read up to `data.len()` bytes, returning the number of bytes actually read.
    fn read(&mut self, data: &mut [u8]) -> Option<u64>;

    /// Move the read position, returning the new position.
    fn seek(&mut self, position: u64) -> Option<u64>;

    /// The current read position.
    fn tell(&mut self) -> Option<u64>;

    /// The total number of bytes in the stream.
    fn size(&mut self) -> Option<u64>;
}

/// An input stream over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct MemoryInputStream<'a> {
    data: &'a [u8],
    offset: u64,
}

impl<'a> MemoryInputStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        MemoryInputStream { data, offset: 0 }
    }
}

impl InputStream for MemoryInputStream<'_> {
    fn read(&mut self, data: &mut [u8]) -> Option<u64> {
        let start = usize::try_from(self.offset).ok()?.min(self.data.len());
        let count = data.len().min(self.data.len() - start);
        data[..count].copy_from_slice(&self.data[start..start + count]);
        self.offset += count as u64;
        Some(count as u64)
    }

    fn seek(&mut self, position: u64) -> Option<u64> {
        self.offset = position.min(self.data.len() as u64);
        Some(self.offset)
    }

    fn tell(&mut self) -> Option<u64> {
        Some(self.offset)
    }

    fn size(&mut self) -> Option<u64> {
        Some(self.data.len() as u64)
    }
}

/// An input stream reading from a file on disk.
#[derive(Debug)]
pub struct FileInputStream {
    file: File,
}

impl FileInputStream {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(FileInputStream {
            file: File::open(path)?,
        })
    }
}

impl InputStream for FileInputStream {
    fn read(&mut self, data: &mut [u8]) -> Option<u64> {
        self.file.read(data).ok().map(|count| count as u64)
    }

    fn seek(&mut self, position: u64) -> Option<u64> {
        self.file.seek(SeekFrom::Start(position)).ok()
    }

    fn tell(&mut self) -> Option<u64> {
        self.file.stream_position().ok()
    }

    fn size(&mut self) -> Option<u64> {
        self.file.metadata().ok().map(|metadata| metadata.len())
    }
}

/// Adapts any [`InputStream`] to [`std::io::Read`] and [`std::io::Seek`].
pub struct InputStreamReader<'a> {
    stream: &'a mut dyn InputStream,
}

impl<'a> InputStreamReader<'a> {
    pub fn new(stream: &'a mut dyn InputStream) -> Self {
        InputStreamReader { stream }
    }
}

fn stream_error(operation: &str) -> io::Error {
    io::Error::other(format!("input stream {operation} failed"))
}

impl Read for InputStreamReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = self.stream.read(buf).ok_or_else(|| stream_error("read"))?;
        usize::try_from(count).map_err(|_| stream_error("read"))
    }
}

impl Seek for InputStreamReader<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(position) => Some(position),
            SeekFrom::Current(offset) => {
                let current = self.stream.tell().ok_or_else(|| stream_error("tell"))?;
                current.checked_add_signed(offset)
            }
            SeekFrom::End(offset) => {
                let size = self.stream.size().ok_or_else(|| stream_error("size"))?;
                size.checked_add_signed(offset)
            }
        }
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "seek before start of stream"))?;

        self.stream.seek(target).ok_or_else(|| stream_error("seek"))
    }
}
