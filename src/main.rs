// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io::Read;

use tokio_util::sync::CancellationToken;

use findcodes::config::{build_runtime, load_and_validate_config, Config};
use findcodes::envelope::RequestEnvelope;
use findcodes::observability;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [--config <service.yaml>] <envelope-json | ->", program);
    eprintln!("Example: {} '{{\"useCaseId\":\"find-codes\",\"input\":{{\"text\":\"abc\"}}}}'", program);
    eprintln!("         cat request.json | {} -", program);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("findcodes");

    let mut config_path: Option<String> = None;
    let mut envelope_arg: Option<String> = None;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => match rest.next() {
                Some(path) => config_path = Some(path.clone()),
                None => usage(program),
            },
            _ if envelope_arg.is_none() => envelope_arg = Some(arg.clone()),
            _ => usage(program),
        }
    }
    let Some(envelope_arg) = envelope_arg else {
        usage(program);
    };

    let envelope_text = if envelope_arg == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        envelope_arg
    };
    let envelope: RequestEnvelope = serde_json::from_str(&envelope_text)?;

    let config = match config_path {
        Some(path) => load_and_validate_config(&path)?,
        None => Config::default(),
    };
    let registry = build_runtime(&config)?;

    // Ctrl-C withdraws the request; the token threads down to the
    // process-kill step of any in-flight worker invocation.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let handler = registry.resolve(&envelope.use_case_id)?;
    let result = handler.execute(&envelope, &cancel).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
