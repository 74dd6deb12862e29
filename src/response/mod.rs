//! HTTP Response encoding.
//!
//! [`Writer`] enforces the order in which a response goes on the wire:
//!
//! 1. [`write_status_line`](Writer::write_status_line)
//! 2. [`write_headers`](Writer::write_headers)
//! 3. either a single [`write_body`](Writer::write_body), or any number of
//!    [`write_chunked_body`](Writer::write_chunked_body) calls ended by
//!    [`write_chunked_body_done`](Writer::write_chunked_body_done) or
//!    [`write_trailers`](Writer::write_trailers)
//!
//! Any call out of that order returns [`WriterError`] without writing anything.
mod write;
mod error;

#[cfg(test)]
mod test;

pub use write::{default_headers, write_chunk, write_headers, write_message, write_status_line};
pub use error::WriterError;

use bytes::BufMut;

use crate::headers::HeaderMap;
use crate::http::StatusCode;

/// [`Writer`] state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriterState {
    /// Expecting the status line.
    StatusLine,
    /// Expecting the header section.
    Headers,
    /// Expecting the body.
    Body,
    /// Response is complete.
    Done,
}

/// HTTP Response writer.
#[derive(Debug)]
pub struct Writer<B> {
    state: WriterState,
    chunked: bool,
    bufm: B,
}

impl<B> Writer<B> {
    /// Create new writer that writes into `bufm`.
    #[inline]
    pub const fn new(bufm: B) -> Self {
        Self {
            state: WriterState::StatusLine,
            chunked: false,
            bufm,
        }
    }

    /// Returns current writer state.
    #[inline]
    pub const fn state(&self) -> WriterState {
        self.state
    }

    /// Returns `true` if the response is complete.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, WriterState::Done)
    }

    /// Returns shared reference to the underlying buffer.
    #[inline]
    pub const fn get_ref(&self) -> &B {
        &self.bufm
    }

    /// Returns the underlying buffer.
    #[inline]
    pub fn into_inner(self) -> B {
        self.bufm
    }

    fn ensure(&self, expected: WriterState) -> Result<(), WriterError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(WriterError::State { expected, actual: self.state })
        }
    }
}

impl<B: BufMut> Writer<B> {
    /// Write the status line.
    pub fn write_status_line(&mut self, status: impl Into<StatusCode>) -> Result<(), WriterError> {
        self.ensure(WriterState::StatusLine)?;
        write_status_line(status.into(), &mut self.bufm);
        self.state = WriterState::Headers;
        Ok(())
    }

    /// Write the header section.
    pub fn write_headers(&mut self, headers: &HeaderMap) -> Result<(), WriterError> {
        self.ensure(WriterState::Headers)?;
        write_headers(headers, &mut self.bufm);
        self.state = WriterState::Body;
        Ok(())
    }

    /// Write the whole body, completing the response.
    ///
    /// Returns the number of bytes written.
    pub fn write_body(&mut self, body: &[u8]) -> Result<usize, WriterError> {
        self.ensure(WriterState::Body)?;
        if self.chunked {
            return Err(WriterError::ChunkedBody);
        }
        self.bufm.put_slice(body);
        self.state = WriterState::Done;
        Ok(body.len())
    }

    /// Write a single chunk of chunked body.
    ///
    /// Writing an empty chunk is a no-op, because a zero length chunk marks the end of the body.
    /// Returns the number of bytes written, including the framing.
    pub fn write_chunked_body(&mut self, chunk: &[u8]) -> Result<usize, WriterError> {
        self.ensure(WriterState::Body)?;
        self.chunked = true;
        if chunk.is_empty() {
            return Ok(0);
        }
        Ok(write_chunk(chunk, &mut self.bufm))
    }

    /// Write the last chunk without trailers, `0\r\n\r\n`, completing the response.
    ///
    /// Returns the number of bytes written.
    pub fn write_chunked_body_done(&mut self) -> Result<usize, WriterError> {
        self.ensure(WriterState::Body)?;
        self.bufm.put_slice(b"0\r\n\r\n");
        self.state = WriterState::Done;
        Ok(5)
    }

    /// Write the last chunk followed by `trailers`, completing the response.
    ///
    /// This is the alternative to [`write_chunked_body_done`] when trailer fields are needed.
    ///
    /// [`write_chunked_body_done`]: Writer::write_chunked_body_done
    pub fn write_trailers(&mut self, trailers: &HeaderMap) -> Result<(), WriterError> {
        self.ensure(WriterState::Body)?;
        self.bufm.put_slice(b"0\r\n");
        write_headers(trailers, &mut self.bufm);
        self.state = WriterState::Done;
        Ok(())
    }
}
