//! desk-runner: headless driver for the credit-scoring desk.
//!
//! Usage:
//!   desk-runner --seed 12345 --page analytics
//!   desk-runner --seed 12345 --export applications.csv
//!   desk-runner --seed 12345 --config desk.json --ipc-mode
//!
//! IPC protocol: one JSON request per stdin line, one JSON reply per line.
//!   {"type":"get_view"}
//!   {"type":"export_csv"}
//!   {"type":"command","command":{"cmd":"select_page","page":"analytics"}}
//!   {"type":"quit"}

use anyhow::Result;
use scoring_core::{
    command::DeskCommand, config::DeskConfig, router::Page, session::Session,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetView,
    ExportCsv,
    Command {
        command: DeskCommand,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let config_path = arg_value(&args, "--config");
    let export_path = arg_value(&args, "--export");
    let page: Page = arg_value(&args, "--page").unwrap_or("dashboard").parse()?;

    let mut config = match config_path {
        Some(path) => DeskConfig::load(path)?,
        None => DeskConfig::default(),
    };
    // Pin --as-of for reproducible output; otherwise "now" is the wall clock.
    config.data.as_of = match arg_value(&args, "--as-of") {
        Some(raw) => chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")?,
        None => chrono::Local::now().naive_local(),
    };

    let mut session = Session::new(seed, config);
    log::info!("session started: seed={seed}");

    if ipc_mode {
        return run_ipc_loop(&mut session, io::stdin().lock(), io::stdout());
    }

    if let Some(path) = export_path {
        std::fs::write(path, session.export_csv())?;
        println!("wrote {} applications to {path}", session.data().applications.len());
        return Ok(());
    }

    session.select_page(page);
    println!("{}", serde_json::to_string_pretty(&session.render())?);
    Ok(())
}

fn run_ipc_loop<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut output: W) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(output, "{}", err_json)?;
                output.flush()?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetView => {
                writeln!(output, "{}", serde_json::to_string(&session.render())?)?;
            }
            IpcRequest::ExportCsv => {
                let reply = serde_json::json!({
                    "file_name":    scoring_core::application_lookup::CSV_FILE_NAME,
                    "content_type": scoring_core::application_lookup::CSV_CONTENT_TYPE,
                    "body":         session.export_csv(),
                });
                writeln!(output, "{}", reply)?;
            }
            IpcRequest::Command { command } => match session.apply(command) {
                Ok(()) => writeln!(output, "{}", serde_json::to_string(&session.render())?)?,
                Err(e) => {
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(output, "{}", err_json)?;
                }
            },
        }
        output.flush()?;
    }
    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies(input: &str) -> Vec<serde_json::Value> {
        let mut session = Session::new(7, DeskConfig::default());
        let mut out = Vec::new();
        run_ipc_loop(&mut session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn navigation_and_rollback_reply_with_views() {
        let out = replies(concat!(
            r#"{"type":"get_view"}"#, "\n",
            r#"{"type":"command","command":{"cmd":"select_page","page":"rule_builder"}}"#, "\n",
            r#"{"type":"command","command":{"cmd":"rollback_rule_version"}}"#, "\n",
        ));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["page"], "dashboard");
        assert_eq!(out[1]["page"], "rule_builder");
        let notices = out[2]["notices"].as_array().unwrap();
        assert!(notices.iter().any(|n| n["message"] == "Rolled back to rule version v2.0"));
    }

    #[test]
    fn errors_are_replied_and_the_loop_keeps_going() {
        let out = replies(concat!(
            "not json\n",
            "\n",
            r#"{"type":"command","command":{"cmd":"simulate_rule"}}"#, "\n",
            r#"{"type":"export_csv"}"#, "\n",
            r#"{"type":"quit"}"#, "\n",
            r#"{"type":"get_view"}"#, "\n",
        ));
        assert_eq!(out.len(), 3);
        assert!(out[0]["error"].is_string());
        assert!(out[1]["error"].as_str().unwrap().contains("Rule Builder"));
        assert_eq!(out[2]["file_name"], "applications.csv");
        assert!(out[2]["body"].as_str().unwrap().starts_with("id,product,score,riskLevel,status"));
    }
}
