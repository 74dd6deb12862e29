use tokio::io::{AsyncRead, AsyncReadExt};

use super::{DecodeError, ReadBuffer, Request};
use crate::log::debug;

/// Initial read buffer capacity used by [`decode_from`].
///
/// Kept small, the buffer doubles whenever a single line does not fit.
pub const INITIAL_BUFFER_CAP: usize = 8;

/// Read a request line and header section from `io`.
///
/// Bytes after the header section that were already read are discarded, request bodies are not
/// decoded.
///
/// # Errors
///
/// Returns [`DecodeError::Incomplete`] if `io` reaches end of stream before the header section
/// is complete, [`DecodeError::Parse`] on malformed input, and [`DecodeError::Io`] if a read
/// fails.
pub async fn decode_from<IO>(io: &mut IO) -> Result<Request, DecodeError>
where
    IO: AsyncRead + Unpin,
{
    let mut request = Request::new();
    let mut buffer = ReadBuffer::with_capacity(INITIAL_BUFFER_CAP);

    while !request.is_done() {
        if buffer.is_full() {
            buffer.grow();
            debug!("read buffer grown to {}", buffer.capacity());
        }

        let read = io.read(buffer.unfilled_mut()).await?;
        if read == 0 {
            return Err(DecodeError::Incomplete { state: request.state() });
        }
        buffer.advance(read);

        let parsed = request.parse(buffer.pending())?;
        buffer.consume(parsed);
        buffer.compact();
    }

    Ok(request)
}
