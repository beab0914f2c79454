//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the only mode this server runs in.

use rmcp::ServiceExt;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the server over the process's stdin/stdout.
    ///
    /// Returns once the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let (stdin, stdout) = rmcp::transport::stdio();
        Self::serve(server, stdin, stdout).await
    }

    /// Run the server over any pair of byte streams.
    pub async fn serve<R, W>(server: McpServer, reader: R, writer: W) -> TransportResult<()>
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let name = server.name().to_string();

        let service = server
            .serve((reader, writer))
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        info!("{} MCP server running on stdio", name);

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
