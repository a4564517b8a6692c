use std::io;
use std::net::SocketAddr;

/// Fatal server errors. Either one ends the process with a nonzero exit.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
