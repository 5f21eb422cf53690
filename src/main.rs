mod config;
mod error;
mod export;
mod icons;
mod model;
mod report;
mod selection;
mod sources;
mod state;
mod store;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use crate::config::load_config;
use crate::icons::IconResolver;
use crate::sources::notifications::{load_notifications, load_package_index};
use crate::state::EvaluationState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate application compatibility for a system upgrade", long_about = None)]
struct Args {
    /// JSON-lines file with worker notifications ("-" for stdin)
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Package index snapshot applied before the events
    #[arg(short, long)]
    index: Option<PathBuf>,

    /// Keep a compatible package for reinstallation (repeatable)
    #[arg(short, long = "select")]
    select: Vec<String>,

    /// Keep every compatible package
    #[arg(long)]
    select_all: bool,

    /// Write the migrate list to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Root holding applications/ and icons/
    #[arg(long)]
    share_root: Option<PathBuf>,

    /// Locale for localized names, e.g. zh_CN
    #[arg(long)]
    locale: Option<String>,

    /// Leave NoDisplay=true entries out of the table
    #[arg(long)]
    hide_hidden: bool,

    /// Resolve and print icon files
    #[arg(long)]
    show_icons: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Load Config, CLI flags win
    let mut config = load_config()?;
    if let Some(root) = args.share_root {
        config.general.share_root = root;
    }
    if args.locale.is_some() {
        config.general.locale = args.locale;
    }
    if args.hide_hidden {
        config.evaluation.hide_no_display = true;
    }

    // 2. Replay worker notifications
    let mut state = EvaluationState::from_config(&config);
    if let Some(path) = &args.index {
        state.store.set_package_index(load_package_index(path)?);
    }
    if let Some(path) = &args.events {
        state.apply_all(load_notifications(path)?);
    }

    // 3. User picks
    if args.select_all {
        state.select_all(true);
    }
    for package in &args.select {
        state.select(package, true);
    }

    // 4. Output
    let resolver = args.show_icons.then(|| {
        IconResolver::new(
            state.store.icon_search_paths().to_vec(),
            config.evaluation.fallback_icon.clone(),
        )
    });
    print!("{}", report::render_table(&state, resolver.as_ref()));

    let migrate_list = state.migrate_list();
    if state.selection.is_empty() {
        println!("\nNo applications selected for reinstallation");
    } else {
        println!("\nMigrate list ({}): {}", state.selection.len(), migrate_list.join(", "));
    }
    if let Some(path) = &args.export {
        export::write_migrate_list(path, &migrate_list)?;
    }

    Ok(())
}
