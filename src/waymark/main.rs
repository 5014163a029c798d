use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::collections::BTreeSet;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use waymark::api::{CmdMessage, ConfigAction, MessageLevel, WaymarkApi, WaymarkPaths};
use waymark::config::WaymarkConfig;
use waymark::error::Result;
use waymark::model::{Record, ResolvedTitle, Scope};
use waymark::routes::RouteRule;
use waymark::source::json::JsonFileSource;
use waymark::title;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WaymarkApi<JsonFileSource>,
    scope: Scope,
    title_prefix: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Title { paths, page }) => handle_title(&ctx, paths, page),
        Some(Commands::Filter { query, fields }) => handle_filter(&ctx, query, fields),
        Some(Commands::Routes) => handle_routes(&ctx),
        Some(Commands::Doctor) => handle_doctor(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_routes(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_waymark_dir = cwd.join(".waymark");

    let proj_dirs =
        ProjectDirs::from("com", "waymark", "waymark").expect("Could not determine config dir");
    let global_config_dir = proj_dirs.config_dir().to_path_buf();

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_waymark_dir,
        Scope::Global => &global_config_dir,
    };
    let config = WaymarkConfig::load(config_dir).unwrap_or_default();

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_file));
    let source = JsonFileSource::new(data_file);

    let paths = WaymarkPaths {
        project: Some(project_waymark_dir),
        global: global_config_dir,
    };
    let title_prefix = config.title_prefix.clone();
    let api = WaymarkApi::new(source, paths, &config);

    Ok(AppContext {
        api,
        scope,
        title_prefix,
    })
}

fn handle_title(ctx: &AppContext, paths: Vec<String>, page: bool) -> Result<()> {
    let result = ctx.api.resolve_titles(&paths)?;
    print_titles(&result.resolved, &ctx.title_prefix, page);
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(ctx: &AppContext, query: String, fields: Option<String>) -> Result<()> {
    let fields = fields.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    });
    let result = ctx.api.filter_records(&query, fields)?;
    print_records(&result.listed_records, result.total_records, &query);
    print_messages(&result.messages);
    Ok(())
}

fn handle_routes(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_routes()?;
    print_routes(&result.routes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        println!("title-prefix = {}", config.title_prefix);
        println!("fields = {}", config.searchable_fields.join(","));
        println!("data-file = {}", config.data_file);
        if !config.routes.is_empty() {
            println!("routes = {} configured", config.routes.len());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
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

fn print_titles(resolved: &[ResolvedTitle], prefix: &str, page: bool) {
    let path_width = resolved.iter().map(|r| r.path.width()).max().unwrap_or(0);

    for entry in resolved {
        let padding = " ".repeat(path_width.saturating_sub(entry.path.width()));
        let shown = if page {
            title::document_title(prefix, &entry.title)
        } else {
            entry.title.clone()
        };
        println!("{}{}  {}", entry.path.dimmed(), padding, shown.bold());
    }
}

fn print_routes(rules: &[RouteRule]) {
    let pattern_width = rules
        .iter()
        .map(|r| r.pattern.to_string().width())
        .max()
        .unwrap_or(0);

    for (i, rule) in rules.iter().enumerate() {
        let pattern = rule.pattern.to_string();
        let padding = " ".repeat(pattern_width.saturating_sub(pattern.width()));
        println!(
            "{:>3}. {}{}  {}",
            i + 1,
            pattern,
            padding,
            rule.title.bold()
        );
    }
}

const MAX_COLUMN_WIDTH: usize = 40;

fn print_records(records: &[Record], total: usize, query: &str) {
    if total == 0 {
        println!("No records loaded.");
        return;
    }
    if records.is_empty() {
        println!(
            "No matches for \"{}\" ({} records searched).",
            query.trim(),
            total
        );
        return;
    }

    let columns: Vec<String> = records
        .iter()
        .flat_map(|r| r.field_names().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|column| {
            let value_width = records
                .iter()
                .map(|r| r.field_or_empty(column).width())
                .max()
                .unwrap_or(0);
            value_width.max(column.width()).min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad_cell(column, *width))
        .collect();
    println!("{}", header.join("  ").bold());

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| pad_cell(record.field_or_empty(column), *width))
            .collect();
        println!("{}", row.join("  "));
    }

    if records.len() < total {
        println!(
            "{}",
            format!("{} of {} records.", records.len(), total).dimmed()
        );
    }
}

fn pad_cell(value: &str, width: usize) -> String {
    let shown = if value.width() > width {
        truncate_to_width(value, width)
    } else {
        value.to_string()
    };
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
