use anyhow::{Context, Result};
use clap::Parser;
use std::process;

mod apply;
mod cli;
mod list;
mod revert;
mod show;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::List {
            directory,
            recursive,
            include_backups,
            output,
        } => list::handle_list(&directory, recursive, include_backups, output),

        Commands::Apply {
            candidates,
            output,
            quiet,
        } => apply::handle_apply(&candidates, output, quiet),

        Commands::Show { backup, output } => show::handle_show(&backup, output),

        Commands::Revert {
            backup,
            items,
            output,
            quiet,
        } => revert::handle_revert(&backup, &items, output, quiet),
    }
}
