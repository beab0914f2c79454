//! Transport layer for the MCP server.
//!
//! The server speaks newline-delimited JSON-RPC over standard input/output.
//! Framing, the initialize handshake and request/response correlation are
//! handled by rmcp; this module only owns the connection lifecycle.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
