//! maximo-request — 从 JSON/YAML 输入文件发送一次 Maximo 请求
//!
//! Usage:
//!   maximo-request [<input-file>|-]     Send the request described by the input document
//!   maximo-request version              Show version information
//!   maximo-request help                 Show usage

use anyhow::Context;
use maximo_request::{Error, ErrorContext, MaximoClient};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let source = args.get(1).map(String::as_str).unwrap_or("-");

    match source {
        "version" | "--version" | "-V" => cmd_version(),
        "help" | "--help" | "-h" => print_usage(),
        path => {
            let outcome = cmd_send(path).await;
            if let Err(e) = &outcome {
                eprintln!("Error: {e:#}");
            }
            std::process::exit(exit_code(&outcome));
        }
    }
}

/// 0 on success, 1 when Maximo reported a failure, 2 on any other error.
fn exit_code(outcome: &anyhow::Result<bool>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"maximo-request — send one request to IBM Maximo Manage

USAGE:
    maximo-request [<input-file>|-]

ARGS:
    <input-file>    Input document (.json, .yaml or .yml); `-` or nothing reads JSON from stdin

COMMANDS:
    version         Show version information
    help            Show this help message

ENVIRONMENT:
    MAXIMO_API_KEY                       Default API key when the input has none
    MAXIMO_HTTP_TIMEOUT_SECS             Request timeout (default 30)
    MAXIMO_HTTP_POOL_MAX_IDLE_PER_HOST   Idle connections per host (default 32)
    MAXIMO_HTTP_POOL_IDLE_TIMEOUT_SECS   Idle connection timeout (default 90)
    MAXIMO_PROXY_URL                     Proxy for all requests
    RUST_LOG                             Log filter (default warn)

EXIT STATUS:
    0 on success, 1 when Maximo reports a failure, 2 on any other error"#
    );
}

fn cmd_version() {
    println!("maximo-request {}", env!("CARGO_PKG_VERSION"));
}

async fn cmd_send(source: &str) -> anyhow::Result<bool> {
    let input =
        read_input(source).with_context(|| format!("failed to load input from {}", source))?;
    let client = MaximoClient::from_env().context("failed to build client")?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let result = client.request_json(&input, &cancel).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.is_success())
}

/// Read the input document from `source`, or from stdin for `-`.
fn read_input(source: &str) -> maximo_request::Result<Value> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return parse_document(&text, false);
    }

    let path = Path::new(source);
    let text = std::fs::read_to_string(path)?;
    parse_document(&text, is_yaml(path))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn parse_document(text: &str, yaml: bool) -> maximo_request::Result<Value> {
    let parsed = if yaml {
        serde_yaml::from_str(text).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(text).map_err(|e| e.to_string())
    };
    let format = if yaml { "YAML" } else { "JSON" };
    parsed.map_err(|e| {
        Error::validation_with_context(
            format!("Input is not a valid {} document: {}", format, e),
            ErrorContext::new().with_source("cli"),
        )
    })
}
