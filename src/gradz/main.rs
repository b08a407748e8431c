use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use gradz::api::GradzApi;
use gradz::commands::config::ConfigAction;
use gradz::commands::{CmdMessage, MessageLevel, NoteOverview};
use gradz::config::Thresholds;
use gradz::error::Result;
use gradz::model::Difficulty;
use gradz::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: GradzApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Tag { query }) => handle_tag(&mut ctx, query),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Config { key, value, reset }) => handle_config(&ctx, key, value, reset),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let proj_dirs =
        ProjectDirs::from("com", "gradz", "gradz").expect("Could not determine config dir");

    let collection = cli
        .collection
        .clone()
        .or_else(|| std::env::var_os("GRADZ_COLLECTION").map(PathBuf::from))
        .unwrap_or_else(|| proj_dirs.data_dir().join("collection.json"));

    let config_dir = cli
        .config_dir
        .clone()
        .or_else(|| std::env::var_os("GRADZ_CONFIG_DIR").map(PathBuf::from))
        .unwrap_or_else(|| proj_dirs.config_dir().to_path_buf());

    let store = FileStore::new(collection);
    AppContext {
        api: GradzApi::new(store, config_dir),
    }
}

fn handle_tag(ctx: &mut AppContext, query: Option<String>) -> Result<()> {
    let result = ctx.api.assign_tags(query.as_deref().unwrap_or(""))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    ctx: &AppContext,
    key: Option<String>,
    value: Option<String>,
    reset: bool,
) -> Result<()> {
    let action = if reset {
        ConfigAction::Reset
    } else {
        match (key, value) {
            (None, _) => ConfigAction::ShowAll,
            (Some(k), None) => ConfigAction::ShowKey(k),
            (Some(k), Some(v)) => ConfigAction::Set(k, v),
        }
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_thresholds(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_thresholds(cfg: &Thresholds) {
    println!("{}", "Very Hard".bold());
    println!("  very_hard_lapses_min    = {}", cfg.very_hard_lapses_min);
    println!("  very_hard_ease_max_pct  = {}", cfg.very_hard_ease_max_pct);
    println!("{}", "Hard".bold());
    println!("  hard_lapses_min         = {}", cfg.hard_lapses_min);
    println!("  hard_ease_max_pct       = {}", cfg.hard_ease_max_pct);
    println!("{}", "Easy".bold());
    println!("  easy_lapses_max         = {}", cfg.easy_lapses_max);
    println!("  easy_ivl_min            = {}", cfg.easy_ivl_min);
    println!("  easy_ease_min_pct       = {}", cfg.easy_ease_min_pct);
    println!("{}", "Very Easy".bold());
    println!("  very_easy_ivl_min       = {}", cfg.very_easy_ivl_min);
    println!("  very_easy_ease_min_pct  = {}", cfg.very_easy_ease_min_pct);
}

const TITLE_WIDTH: usize = 44;
const DECK_WIDTH: usize = 20;

fn print_notes(rows: &[NoteOverview]) {
    if rows.is_empty() {
        println!("No notes found.");
        return;
    }

    for row in rows {
        let title = row.note.fields.first().map(String::as_str).unwrap_or("");
        let left = format!(
            "{}. {}",
            row.note.id,
            truncate_to_width(title, TITLE_WIDTH)
        );
        let left_pad = (TITLE_WIDTH + 8).saturating_sub(left.width());

        let decks = truncate_to_width(&row.decks.join(", "), DECK_WIDTH);
        let deck_pad = DECK_WIDTH.saturating_sub(decks.width());

        let cards = format!("{} card{}", row.cards, if row.cards == 1 { "" } else { "s" });

        println!(
            "{}{}{}{}  {:>8}  {}",
            left,
            " ".repeat(left_pad),
            decks.dimmed(),
            " ".repeat(deck_pad),
            cards,
            format_difficulty(row.difficulty)
        );
    }
}

fn format_difficulty(difficulty: Option<Difficulty>) -> ColoredString {
    match difficulty {
        Some(Difficulty::VeryHard) => "VeryHard".red(),
        Some(Difficulty::Hard) => "Hard".yellow(),
        Some(Difficulty::Medium) => "Medium".normal(),
        Some(Difficulty::Easy) => "Easy".green(),
        Some(Difficulty::VeryEasy) => "VeryEasy".bright_green(),
        None => "-".dimmed(),
    }
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
