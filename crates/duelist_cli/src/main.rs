//! CLI probe for `duelist_core`.
//!
//! # Responsibility
//! - Verify core crate linkage (`ping`, version).
//! - Render a todo JSON file the way the list view would, for quick checks.
//!
//! Usage: `duelist [TODOS_JSON] [--now RFC3339]`

use chrono::{DateTime, Local};
use duelist_core::{render_list, ListRender, TodoRecord};
use std::process::ExitCode;

struct Args {
    todos_path: Option<String>,
    now: Option<DateTime<Local>>,
}

fn main() -> ExitCode {
    println!("duelist_core ping={}", duelist_core::ping());
    println!("duelist_core version={}", duelist_core::core_version());

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: duelist [TODOS_JSON] [--now RFC3339]");
            return ExitCode::from(2);
        }
    };

    let Some(path) = args.todos_path else {
        return ExitCode::SUCCESS;
    };
    match render_file(&path, args.now.unwrap_or_else(Local::now)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        todos_path: None,
        now: None,
    };
    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        if arg == "--now" {
            let value = raw.next().ok_or("--now requires a value")?;
            let parsed = DateTime::parse_from_rfc3339(&value)
                .map_err(|err| format!("invalid --now `{value}`: {err}"))?;
            args.now = Some(parsed.with_timezone(&Local));
        } else if args.todos_path.is_none() {
            args.todos_path = Some(arg);
        } else {
            return Err(format!("unexpected argument `{arg}`"));
        }
    }
    Ok(args)
}

fn render_file(path: &str, now: DateTime<Local>) -> Result<Vec<String>, String> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("cannot read `{path}`: {err}"))?;
    let todos: Vec<TodoRecord> =
        serde_json::from_str(&raw).map_err(|err| format!("cannot decode `{path}`: {err}"))?;
    Ok(render_lines(&todos, &now))
}

fn render_lines(todos: &[TodoRecord], now: &DateTime<Local>) -> Vec<String> {
    let render = render_list(todos, now);
    let mut lines = Vec::new();
    match &render {
        ListRender::Empty { message } => lines.push((*message).to_string()),
        ListRender::Items { summary, cards, .. } => {
            if let Some(summary) = summary {
                lines.push(summary.to_string());
            }
            for card in cards {
                lines.push(format!(
                    "[{}] {} due={} class=\"{}\"{}",
                    card.id,
                    card.title,
                    card.due_date.as_deref().unwrap_or("-"),
                    card.class_name(),
                    card.glyph().map(|glyph| format!(" {glyph}")).unwrap_or_default()
                ));
            }
        }
    }
    lines
}
