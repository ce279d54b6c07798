#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
mod authority;
mod board;
#[cfg(feature = "std")]
mod client;
#[cfg(feature = "std")]
pub mod client_node;
mod common;
mod config;
mod controller;
#[cfg(feature = "std")]
mod controller_cli;
pub mod domain;
#[cfg(feature = "std")]
mod host;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod projection;
pub mod protocol;
#[cfg(feature = "std")]
mod service;
mod session;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
mod ui;

#[cfg(feature = "std")]
pub use authority::*;
pub use board::*;
#[cfg(feature = "std")]
pub use client::*;
#[cfg(feature = "std")]
pub use client_node::*;
pub use common::*;
pub use config::*;
pub use controller::*;
#[cfg(feature = "std")]
pub use controller_cli::*;
pub use domain::*;
#[cfg(feature = "std")]
pub use host::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use projection::*;
pub use protocol::*;
#[cfg(feature = "std")]
pub use service::*;
pub use session::*;
#[cfg(feature = "std")]
pub use transport::tcp::TcpTransport;
#[cfg(feature = "std")]
pub use ui::*;
