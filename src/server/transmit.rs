//! Streaming a resolved file to the connection.

use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::resource::MimeKind;
use crate::server::error::Error;

/// Chunk size used for binary transfers unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// How a file body is read and sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// One line at a time.
    Text,
    /// Fixed-size chunks until the file size is reached.
    Binary,
}

impl From<MimeKind> for TransferMode {
    fn from(mime: MimeKind) -> Self {
        if mime.is_binary() {
            TransferMode::Binary
        } else {
            TransferMode::Text
        }
    }
}

/// Send the contents of `path` to `writer`.
///
/// Every piece read is written completely before the next read. The file is
/// closed when this returns, whether it succeeds or not.
///
/// # Returns
///
/// The number of body bytes written to `writer`
pub async fn transmit_body<W>(
    path: &Path,
    mode: TransferMode,
    writer: &mut W,
    chunk_size: usize,
) -> Result<u64, Error>
where
    W: AsyncWrite + Unpin,
{
    let file = File::open(path).await?;
    match mode {
        TransferMode::Text => transmit_lines(file, writer).await,
        TransferMode::Binary => transmit_chunks(file, writer, chunk_size).await,
    }
}

async fn transmit_lines<W>(file: File, writer: &mut W) -> Result<u64, Error>
where
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut sent = 0u64;

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&line).await?;
        sent += n as u64;
    }

    Ok(sent)
}

async fn transmit_chunks<W>(mut file: File, writer: &mut W, chunk_size: usize) -> Result<u64, Error>
where
    W: AsyncWrite + Unpin,
{
    if chunk_size == 0 {
        return Err(Error::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            "chunk size must be greater than 0",
        )));
    }

    let size = file.metadata().await?.len();
    let mut chunk = vec![0u8; chunk_size];
    let mut received = 0u64;
    let mut sent = 0u64;

    while received < size {
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("file ended after {received} of {size} bytes"),
            )));
        }
        received += n as u64;
        writer.write_all(&chunk[..n]).await?;
        sent += n as u64;
    }

    Ok(sent)
}
