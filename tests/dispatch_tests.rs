//! End-to-end dispatch tests: JSON-RPC request in, response envelope out,
//! with upstreams served by mockito.

use std::time::Duration;

use mockito::{mock, server_url, Matcher};
use serde_json::{json, Value};

use monad_mcp_server::{
    chain::{marketplace::MarketplaceClient, rpc::RpcClient},
    config::Config,
    mcp::{
        handler::handle_mcp_request,
        protocol::{error_codes, Request, Response},
        tools::build_registry,
    },
    AppState,
};

fn test_state() -> AppState {
    let base = server_url();
    let timeout = Duration::from_secs(5);
    AppState {
        config: Config {
            port: 0,
            monad_rpc_url: base.clone(),
            magiceden_api_url: base.clone(),
            upstream_timeout_secs: 5,
        },
        rpc: RpcClient::new(&base, timeout).unwrap(),
        marketplace: MarketplaceClient::new(&base, timeout).unwrap(),
    }
}

async fn dispatch(method: &str, params: Value) -> Response {
    let registry = build_registry();
    let req = Request {
        jsonrpc: "2.0".to_string(),
        id: json!(1),
        method: method.to_string(),
        params: Some(params),
    };
    handle_mcp_request(req, &registry, test_state())
        .await
        .expect("request with id must get a response")
}

async fn call_tool(name: &str, arguments: Value) -> Response {
    dispatch("tools/call", json!({ "name": name, "arguments": arguments })).await
}

fn envelope_text(resp: &Response) -> String {
    let result = resp.result.as_ref().expect("expected success envelope");
    let content = result["content"].as_array().expect("content array");
    assert_eq!(content.len(), 1, "envelope must hold exactly one item");
    assert_eq!(content[0]["type"], "text");
    content[0]["text"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn tools_list_advertises_three_tools_in_order() {
    let resp = dispatch("tools/list", json!({})).await;
    let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["get_balance", "get_nft_portfolio", "get_trending_collections"]
    );
    assert_eq!(tools[0]["inputSchema"]["required"][0], "address");
}

#[tokio::test]
async fn unknown_tool_is_a_protocol_error() {
    let resp = call_tool("get_weather", json!({})).await;
    assert!(resp.result.is_none());
    let err = resp.error.unwrap();
    assert_eq!(err.code, error_codes::METHOD_NOT_FOUND);
    assert!(err.message.contains("get_weather"));
}

#[tokio::test]
async fn unknown_method_is_a_protocol_error() {
    let resp = dispatch("resources/list", json!({})).await;
    assert_eq!(resp.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn missing_required_argument_is_invalid_params() {
    let resp = call_tool("get_balance", json!({})).await;
    let err = resp.error.unwrap();
    assert_eq!(err.code, error_codes::INVALID_PARAMS);
    assert!(err.message.contains("'address'"));
}

#[tokio::test]
async fn balance_of_one_mon_renders_as_unit() {
    let _rpc = mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBalance",
            "params": ["0x1111111111111111111111111111111111111111", "latest"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0xde0b6b3a7640000"}"#)
        .create();

    let resp = call_tool(
        "get_balance",
        json!({"address": "0x1111111111111111111111111111111111111111"}),
    )
    .await;
    assert_eq!(
        envelope_text(&resp),
        "Balance for 0x1111111111111111111111111111111111111111: 1 MON"
    );
}

#[tokio::test]
async fn rpc_error_object_becomes_failure_text() {
    let _rpc = mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "params": ["0xStray", "latest"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"bad address"}}"#)
        .create();

    let resp = call_tool("get_balance", json!({"address": "0xStray"})).await;
    let text = envelope_text(&resp);
    assert!(text.starts_with("Failed to retrieve balance for 0xStray."));
    assert!(text.contains("bad address"));
}

#[tokio::test]
async fn empty_portfolio_is_a_valid_envelope() {
    let _m = mock("GET", "/users/0xempty/tokens/v7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tokens":[]}"#)
        .create();

    let resp = call_tool("get_nft_portfolio", json!({"address": "0xempty"})).await;
    let text = envelope_text(&resp);
    assert!(text.contains("Total NFTs: 0"));
    assert!(!text.contains("- Name:"));
}

#[tokio::test]
async fn portfolio_record_uses_fallbacks_for_absent_fields() {
    let _m = mock("GET", "/users/0xholder/tokens/v7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"tokens":[{"token":{"name":"Foo","tokenId":"1","contract":"0xabc","kind":"ERC721"}}]}"#,
        )
        .create();

    let resp = call_tool("get_nft_portfolio", json!({"address": "0xholder"})).await;
    let text = envelope_text(&resp);
    assert!(text.starts_with("NFT Portfolio for 0xholder:\n\nTotal NFTs: 1\n\n"));
    assert!(text.ends_with(
        "- Name: Foo\n  Collection: Unknown collection\n  Token ID: 1\n  Contract: 0xabc\n  Type: ERC721"
    ));
}

#[tokio::test]
async fn trending_volume_change_is_percent_formatted() {
    let _m = mock("GET", "/collections/trending-mints/v1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"mints":[{"name":"Molandaks","volumeChange":{"1day":0.1234}}]}"#)
        .create();

    let resp = call_tool("get_trending_collections", json!({})).await;
    let text = envelope_text(&resp);
    assert!(text.contains("Total Collections: 1"));
    assert!(text.contains("1. Molandaks"));
    assert!(text.contains("Volume Change (24h): 12.34%"));
}

#[tokio::test]
async fn upstream_500_is_reported_as_failure_text_not_error() {
    let _m = mock("GET", "/users/0xboom/tokens/v7")
        .with_status(500)
        .with_body("upstream exploded")
        .create();

    let resp = call_tool("get_nft_portfolio", json!({"address": "0xboom"})).await;
    assert!(resp.error.is_none());
    let text = envelope_text(&resp);
    assert!(text.starts_with("Failed to retrieve NFT portfolio for 0xboom."));
    assert!(text.contains("upstream exploded"));
}

#[tokio::test]
async fn identical_invocations_produce_identical_text() {
    let _m = mock("GET", "/users/0xsame/tokens/v7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tokens":[{"token":{"name":"Twin","tokenId":"2","contract":"0xd","kind":"ERC721"}}]}"#)
        .expect(2)
        .create();

    let first = call_tool("get_nft_portfolio", json!({"address": "0xsame"})).await;
    let second = call_tool("get_nft_portfolio", json!({"address": "0xsame"})).await;
    assert_eq!(envelope_text(&first), envelope_text(&second));
}

#[tokio::test]
async fn notification_gets_no_response() {
    let registry = build_registry();
    let req = Request {
        jsonrpc: "2.0".to_string(),
        id: Value::Null,
        method: "tools/list".to_string(),
        params: None,
    };
    assert!(handle_mcp_request(req, &registry, test_state())
        .await
        .is_none());
}
