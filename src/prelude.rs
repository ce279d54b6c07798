//! Commonly used types and utilities for ease of import.

pub use crate::{project, Board, Outcome, Placement, Player, Projection, RenderState, Session};

#[cfg(feature = "std")]
pub use crate::{
    init_logging, AuthorityHost, ClientNode, RandomController, RemoteGame, ScriptedController,
    StubAuthority,
};

#[cfg(feature = "std")]
pub use crate::transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
