//! `Content-Length` message framing

use super::error::{IpcError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest body accepted from the daemon
pub const MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

/// Write one framed message and flush.
pub async fn write_frame<W>(writer: &mut W, body: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let header = format!("Content-Length: {}\r\n\r\n", body.len());
    writer.write_all(header.as_bytes()).await?;
    writer.write_all(body).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one framed message body.
///
/// Headers other than `Content-Length` are skipped. End of stream
/// before a complete frame is [`IpcError::TransportClosed`]; a declared
/// length above [`MAX_FRAME_LEN`] is [`IpcError::FrameTooLarge`] and
/// leaves the stream unusable.
pub async fn read_frame<R>(reader: &mut R) -> Result<Vec<u8>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let content_length = read_content_length(reader, &mut line).await?;
    if content_length > MAX_FRAME_LEN {
        return Err(IpcError::FrameTooLarge {
            length: content_length,
            limit: MAX_FRAME_LEN,
        });
    }

    // Skip the rest of the header block
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Err(IpcError::TransportClosed);
        }
        if line.trim().is_empty() {
            break;
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            IpcError::TransportClosed
        } else {
            IpcError::Io(e)
        }
    })?;
    Ok(body)
}

async fn read_content_length<R>(reader: &mut R, line: &mut String) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        line.clear();
        let bytes_read = reader.read_line(line).await?;
        if bytes_read == 0 {
            return Err(IpcError::TransportClosed);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(len_str) = trimmed.strip_prefix("Content-Length:")
            && let Ok(len) = len_str.trim().parse::<usize>()
        {
            return Ok(len);
        }
    }
}
