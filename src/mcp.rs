use std::sync::Arc;

use rmcp::{
    ServerHandler,
    ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult,
        Content,
        Implementation,
        ServerCapabilities,
        ServerInfo,
    },
    tool,
    tool_handler,
    tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    corpus::Corpus,
    error,
    search::{self, SearchRequest, SearchResponse},
};

#[derive(Clone)]
pub struct AidaMcpServer {
    corpus: Arc<Corpus>,
    tool_router: ToolRouter<Self>,
}

impl AidaMcpServer {
    fn new(corpus: Corpus) -> Self {
        Self {
            corpus: Arc::new(corpus),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router(router = tool_router)]
impl AidaMcpServer {
    /// Keyword search over the scraped BPS Kota Medan corpus.
    #[tool(
        name = "aida_search",
        description = "Search scraped BPS Kota Medan pages by keyword. Returns up to 10 ranked results with snippets."
    )]
    pub async fn aida_search(
        &self,
        params: Parameters<SearchToolParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let params = params.0;
        let request = SearchRequest {
            query: params.query,
            message: params.message,
        };

        let query = search::resolve_query(&request);
        let response = search::execute_search(&query, &self.corpus);

        let summary = format_search_summary(&response);
        let structured = serde_json::to_value(&response)
            .map_err(|e| mcp_error("failed to serialize search results", e))?;

        let mut result = CallToolResult::success(vec![Content::text(summary)]);
        result.structured_content = Some(structured);
        Ok(result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AidaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(
                Implementation::new("aida", env!("CARGO_PKG_VERSION"))
                    .with_title("aida MCP"),
            )
            .with_instructions(
                "Use aida_search to find BPS Kota Medan statistics pages by keyword.",
            )
    }
}

/// Parameters for the `aida_search` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchToolParams {
    /// Search query string.
    pub query: Option<String>,
    /// Chat-style message to search for; used when `query` is absent.
    pub message: Option<String>,
}

fn format_search_summary(response: &SearchResponse) -> String {
    if response.results.is_empty() {
        return format!("No results found for \"{}\"", response.query);
    }

    let mut lines = Vec::with_capacity(response.results.len() + 1);
    let suffix = if response.results.len() == 1 { "" } else { "s" };
    lines.push(format!(
        "Found {} result{} for \"{}\":",
        response.results.len(),
        suffix,
        response.query
    ));

    for hit in &response.results {
        lines.push(format!("{:.2} {} {}", hit.score, hit.title, hit.url));
    }

    lines.join("\n")
}

fn mcp_error(message: &str, error: impl std::fmt::Display) -> rmcp::ErrorData {
    rmcp::ErrorData::internal_error(
        message.to_string(),
        Some(json!({ "error": error.to_string() })),
    )
}

pub fn run_mcp(corpus: Corpus) -> error::Result<()> {
    let server = AidaMcpServer::new(corpus);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            error::Error::Config(format!("failed to start tokio runtime: {e}"))
        })?;

    runtime.block_on(async move {
        let transport = rmcp::transport::stdio();
        let running = server.serve(transport).await.map_err(|e| {
            error::Error::Config(format!(
                "MCP server initialization failed: {e}"
            ))
        })?;
        running.waiting().await.map_err(|e| {
            error::Error::Config(format!("MCP server error: {e}"))
        })?;
        Ok(())
    })
}
