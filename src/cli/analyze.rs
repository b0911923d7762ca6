//! Analyze command implementation

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

use super::utils::{load_table, read_input};
use crate::alphabet;
use crate::analyze::{analyze, CharacterSet, MessageInfo};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Message text to analyze (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the message from a file instead
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Replacement table file (.json or .toml)
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Emit the result as pretty-printed JSON
    #[arg(long)]
    pub json: bool,

    /// Append a per-character cost breakdown
    #[arg(long, conflicts_with = "json")]
    pub breakdown: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let text = read_input(&args.text, args.file.as_deref())?;
    let table = load_table(args.table.as_deref())?;

    let info = analyze(&text, &table);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    print_summary(&info);
    if args.breakdown {
        print_breakdown(&text, info.is_gsm);
    }

    Ok(())
}

fn print_summary(info: &MessageInfo) {
    let set = match info.character_set {
        CharacterSet::Gsm7 => style(info.character_set).green(),
        CharacterSet::Ucs2 => style(info.character_set).yellow(),
    };
    println!("Character set: {}", set);
    println!("Count: {}", info.count);
    println!("Segments: {}", style(info.segment_count).bold());

    if !info.accented_chars.is_empty() {
        println!("Replaceable characters:");
        for ch in &info.accented_chars {
            println!("  {} (U+{})", ch, alphabet::hex_key(*ch));
        }
    }
}

fn print_breakdown(text: &str, is_gsm: bool) {
    let mut seen: Vec<char> = Vec::new();
    for ch in text.chars() {
        if !seen.contains(&ch) {
            seen.push(ch);
        }
    }
    if seen.is_empty() {
        return;
    }

    println!("Breakdown:");
    for ch in seen {
        let rendered = display_char(ch);
        let pad = 3usize.saturating_sub(rendered.width());
        let class = if alphabet::is_basic(ch) {
            "basic"
        } else if alphabet::is_extended(ch) {
            "extended"
        } else {
            "non-GSM"
        };
        let cost = if is_gsm && alphabet::is_extended(ch) { 2 } else { 1 };
        println!(
            "  {}{} U+{}  {:<8} {} {}",
            rendered,
            " ".repeat(pad),
            alphabet::hex_key(ch),
            class,
            cost,
            if cost == 1 { "unit" } else { "units" }
        );
    }
}

fn display_char(ch: char) -> String {
    match ch {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        ' ' => "' '".to_string(),
        ch if ch.is_control() => format!("U+{}", alphabet::hex_key(ch)),
        ch => ch.to_string(),
    }
}
