//! # CLI Layer
//!
//! One possible presentation client for the contact book. This is the only
//! place that parses arguments, reads stdin, or writes to the terminal.
//!
//! - `run()`: parse, set up tracing, open the store, dispatch
//! - `handle_*()`: per-command handlers driving a [`ContactView`]

use super::setup::{Cli, Commands};
use super::view::{ContactEdits, ContactView};
use clap::Parser;
use contactbook::api::ConfigAction;
use contactbook::error::Result;
use contactbook::init::initialize;
use contactbook::model::Scope;
use contactbook::store::fs::FileStore;
use std::io::{self, BufRead, Stdout, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    view: ContactView<FileStore, Stdout>,
    scope: Scope,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli);
    ctx.view.report_load_status()?;

    match cli.command {
        Some(Commands::Add {
            name,
            phone,
            email,
            address,
        }) => ctx.view.add(&name, &phone, &email, &address),
        Some(Commands::List) | None => ctx.view.refresh(),
        Some(Commands::Search { name }) => ctx.view.search(&name),
        Some(Commands::Update {
            name,
            new_name,
            phone,
            email,
            address,
        }) => {
            let edits = ContactEdits {
                new_name,
                phone,
                email,
                address,
            };
            ctx.view.update(&name, edits)
        }
        Some(Commands::Delete { name, yes }) => handle_delete(&mut ctx, &name, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "contactbook=debug"
    } else {
        "warn"
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .init();
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global);
    tracing::debug!(file = %ctx.data_file.display(), scope = ?ctx.scope, "opened contact book");

    AppContext {
        view: ContactView::new(ctx.api, ctx.config.placeholder, io::stdout()),
        scope: ctx.scope,
    }
}

fn handle_delete(ctx: &mut AppContext, name: &str, yes: bool) -> Result<()> {
    if !yes {
        // Fail on unknown names before asking.
        ctx.view.api().find_contact(name)?;
        let prompt = format!("Are you sure you want to delete contact '{}'? [y/N] ", name);
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }
    ctx.view.delete(name)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.view.api().config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        println!("file-name = {}", config.file_name);
        println!("placeholder = {}", config.placeholder);
    }
    ctx.view.print_messages(&result.messages)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
