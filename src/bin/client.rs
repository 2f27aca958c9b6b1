//! Sample MCP client for testing the Context7 MCP server.

use rmcp::model::CallToolRequestParams;
use rmcp::transport::StreamableHttpClientTransport;
use rmcp::ServiceExt;

const SERVER_URL: &str = "http://localhost:3012/mcp";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let transport = StreamableHttpClientTransport::from_uri(SERVER_URL);
    let client = ().serve(transport).await?;

    // List tools
    let tools = client.list_tools(Default::default()).await?;
    println!("\nAvailable tools ({}):\n", tools.tools.len());
    for tool in &tools.tools {
        println!("  {}", tool.name);
        if let Some(description) = &tool.description {
            let preview: String = description.chars().take(80).collect();
            println!("    {preview}...");
        }
        println!();
    }

    // Test resolve_library_id
    println!("--- resolve_library_id ---");
    let resolved = client
        .call_tool(CallToolRequestParams {
            name: "resolve_library_id".into(),
            arguments: serde_json::json!({ "library_name": "react" })
                .as_object()
                .cloned(),
            meta: None,
            task: None,
        })
        .await?;
    println!("{resolved:#?}\n");

    // Test get_library_docs
    println!("--- get_library_docs ---");
    let docs = client
        .call_tool(CallToolRequestParams {
            name: "get_library_docs".into(),
            arguments: serde_json::json!({
                "library_id": "/facebook/react",
                "topic": "hooks",
                "tokens": 5000,
            })
            .as_object()
            .cloned(),
            meta: None,
            task: None,
        })
        .await?;
    let rendered = format!("{docs:#?}");
    if rendered.len() > 1000 {
        let preview: String = rendered.chars().take(1000).collect();
        println!("{preview}...");
    } else {
        println!("{rendered}");
    }

    client.cancel().await?;
    Ok(())
}
