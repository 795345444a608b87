//! Turmoil TCP adapter.
//!
//! Lets wire tests run a real [`hybi_core::Sender`] over a simulated
//! network: the client side wraps the write half in a
//! [`hybi_core::StreamSink`], the server side reads raw bytes and inspects
//! them with [`crate::FrameView`].

use std::io;

use turmoil::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use turmoil::net::{TcpListener, TcpStream};

/// Listener half of the simulated transport.
pub struct SimTransport {
    listener: TcpListener,
}

impl SimTransport {
    /// Bind a listener inside the simulation.
    ///
    /// # Errors
    ///
    /// Propagates simulated bind failures.
    pub async fn bind(addr: &str) -> io::Result<Self> {
        Ok(Self { listener: TcpListener::bind(addr).await? })
    }

    /// Accept one connection, returning (send, recv) halves.
    ///
    /// # Errors
    ///
    /// Propagates simulated accept failures.
    pub async fn accept(&self) -> io::Result<(OwnedWriteHalf, OwnedReadHalf)> {
        let (stream, _addr) = self.listener.accept().await?;
        let (read, write) = stream.into_split();
        Ok((write, read))
    }

    /// Connect to a host inside the simulation.
    ///
    /// # Errors
    ///
    /// Propagates simulated connect failures.
    pub async fn connect_to(addr: &str) -> io::Result<TcpStream> {
        TcpStream::connect(addr).await
    }
}
