//! Connection server.
//!
//! Each accepted connection is served on its own task: exactly one request is decoded, passed to
//! the [`Handler`] together with a write buffer, and the buffer is flushed before the connection
//! is closed. Failures are contained to the connection they happen on.
use std::future::poll_fn;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::headers::HeaderError;
use crate::http::StatusCode;
use crate::log::{debug, error, info, warning};
use crate::request::{Request, decode_from};
use crate::response::{WriterError, write_message};

pub use listener::Listener;


const DEFAULT_BUFFER_CAP: usize = 1024;

// ===== Handler =====

/// Request handler.
///
/// The handler writes the complete response into `bufm`, usually through a
/// [`Writer`](crate::response::Writer). A response left incomplete is sent as is.
///
/// Returning [`HandlerError`] discards whatever was written and sends an error response instead.
pub trait Handler: Send + Sync + 'static {
    /// Write the response for `req` into `bufm`.
    fn call(&self, bufm: &mut BytesMut, req: &Request) -> Result<(), HandlerError>;
}

impl<F> Handler for F
where
    F: Fn(&mut BytesMut, &Request) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    #[inline]
    fn call(&self, bufm: &mut BytesMut, req: &Request) -> Result<(), HandlerError> {
        self(bufm, req)
    }
}

/// An error returned by [`Handler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerError {
    status: StatusCode,
    message: String,
}

impl HandlerError {
    /// Create new error that responds with `status` and `message` as body.
    pub fn new(status: impl Into<StatusCode>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Returns the status code of the error response.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the body of the error response.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for HandlerError {}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl From<WriterError> for HandlerError {
    fn from(value: WriterError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, value.to_string())
    }
}

impl From<HeaderError> for HandlerError {
    fn from(value: HeaderError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, value.to_string())
    }
}

// ===== Server =====

/// Bind a TCP listener on all interfaces at `port` and start serving.
pub async fn serve<H: Handler>(port: u16, handler: H) -> io::Result<Server<SocketAddr>> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    Server::new(listener, handler)
}

/// Running server handle.
///
/// Dropping the handle does not stop the server, use [`close`](Server::close) or
/// [`shutdown`](Server::shutdown).
#[derive(Debug)]
pub struct Server<A> {
    addr: A,
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
    task: JoinHandle<()>,
}

impl<A> Server<A> {
    /// Start serving connections accepted from `listener`.
    ///
    /// Must be called within a tokio runtime.
    pub fn new<L, H>(listener: L, handler: H) -> io::Result<Self>
    where
        L: Listener<Addr = A>,
        A: std::fmt::Debug,
        H: Handler,
    {
        let addr = listener.local_addr()?;
        info!("listening on {addr:?}");

        let closed = Arc::new(AtomicBool::new(false));
        let notify = Arc::new(Notify::new());
        let task = tokio::spawn(accept_loop(
            listener,
            Arc::new(handler),
            Arc::clone(&closed),
            Arc::clone(&notify),
        ));

        Ok(Self { addr, closed, notify, task })
    }

    /// Returns the address the listener is bound to.
    #[inline]
    pub fn local_addr(&self) -> &A {
        &self.addr
    }

    /// Returns `true` if [`close`](Server::close) has been called.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Stop accepting connections and close the listener.
    ///
    /// Connections already accepted run to completion. Calling this more than once is a no-op.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.notify.notify_one();
        }
    }

    /// [`close`](Server::close) the server and wait until the listener is dropped.
    pub async fn shutdown(self) {
        self.close();
        if let Err(err) = self.task.await {
            error!("accept loop terminated abnormally: {err}");
        }
    }
}

async fn accept_loop<L: Listener, H: Handler>(
    listener: L,
    handler: Arc<H>,
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
) {
    loop {
        let accepted = tokio::select! {
            accepted = poll_fn(|cx| listener.poll_accept(cx)) => accepted,
            () = notify.notified() => break,
        };

        match accepted {
            Ok((io, addr)) => {
                debug!("accepted connection from {addr:?}");
                tokio::spawn(connection(io, Arc::clone(&handler)));
            }
            Err(err) => {
                if closed.load(Ordering::Acquire) {
                    break;
                }
                error!("error accepting new connection: {err}");
            }
        }
    }

    info!("server closed");
}

// ===== Connection =====

async fn connection<IO, H>(mut io: IO, handler: Arc<H>)
where
    IO: AsyncRead + AsyncWrite + Unpin,
    H: Handler,
{
    let mut bufm = BytesMut::with_capacity(DEFAULT_BUFFER_CAP);

    match decode_from(&mut io).await {
        Ok(request) => {
            debug!("> {} {}", request.method(), request.target());

            if let Err(err) = handler.call(&mut bufm, &request) {
                warning!("handler failed, responding with {err}");
                bufm.clear();
                write_message(err.status(), err.message(), &mut bufm);
            }
        }
        Err(err) => {
            let status = err.status();
            warning!("failed to decode request: {err}, responding with {status}");
            write_message(status, &err.to_string(), &mut bufm);
        }
    }

    if let Err(err) = flush(&mut io, &mut bufm).await {
        error!("error writing response: {err}");
    }
}

async fn flush<IO>(io: &mut IO, bufm: &mut BytesMut) -> io::Result<()>
where
    IO: AsyncWrite + Unpin,
{
    io.write_all_buf(bufm).await?;
    io.shutdown().await
}

// ===== Listener =====

mod listener {
    use std::{io, net::SocketAddr, task::Poll};
    use tokio::io::{AsyncRead, AsyncWrite};
    use tokio::net::{TcpListener, TcpStream};

    #[cfg(unix)]
    use tokio::net::{UnixListener, UnixStream};

    /// Source of transport connections.
    pub trait Listener: Send + Sync + 'static {
        type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

        type Addr: std::fmt::Debug + Send;

        fn poll_accept(
            &self,
            cx: &mut std::task::Context,
        ) -> Poll<io::Result<(Self::Stream, Self::Addr)>>;

        fn local_addr(&self) -> io::Result<Self::Addr>;
    }

    impl Listener for TcpListener {
        type Stream = TcpStream;

        type Addr = SocketAddr;

        #[inline]
        fn poll_accept(
            &self,
            cx: &mut std::task::Context,
        ) -> Poll<io::Result<(Self::Stream, Self::Addr)>> {
            TcpListener::poll_accept(self, cx)
        }

        #[inline]
        fn local_addr(&self) -> io::Result<Self::Addr> {
            TcpListener::local_addr(self)
        }
    }

    #[cfg(unix)]
    impl Listener for UnixListener {
        type Stream = UnixStream;

        type Addr = tokio::net::unix::SocketAddr;

        #[inline]
        fn poll_accept(
            &self,
            cx: &mut std::task::Context,
        ) -> Poll<io::Result<(Self::Stream, Self::Addr)>> {
            UnixListener::poll_accept(self, cx)
        }

        #[inline]
        fn local_addr(&self) -> io::Result<Self::Addr> {
            UnixListener::local_addr(self)
        }
    }
}
