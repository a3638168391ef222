use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use colored::Colorize;
use gsclean::{clean_server_files, discover_containers, gsc_tag, CleanupLists, Container};
use humansize::{format_size, BINARY};
use std::io::{self, Write};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    name = "gsclean",
    author,
    version,
    about = "Clean a game server container's server_files",
    long_about = "Clean a game server container's server_files.\n\n!!! WARNING: \
        \"Cleaning\" a game server container will DELETE ALL SERVER FILES, including \
        configurations and saves. !!! If you want to be sure not to delete something \
        by accident, use the --interactive flag.",
    group(ArgGroup::new("selection").required(true).args(["gsc", "all"]))
)]
struct Args {
    /// Ask before cleaning the directories
    #[arg(long, short)]
    interactive: bool,

    /// Show more verbose output
    #[arg(long, short)]
    verbose: bool,

    /// The name of a game server container that should be cleaned (repeatable)
    #[arg(long = "gsc", short = 'c', value_name = "NAME")]
    gsc: Vec<String>,

    /// Clean all game server containers
    #[arg(long, short)]
    all: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let lists = CleanupLists::load_defaults()?;

    run(&args, Path::new("."), &lists)
}

fn run(args: &Args, base: &Path, lists: &CleanupLists) -> Result<()> {
    let names = if args.all {
        let discovered = discover_containers(base, lists)?;
        println!("Cleaning all game server containers.");
        println!("{discovered:?}");
        discovered
    } else {
        args.gsc.clone()
    };

    for name in &names {
        let container = Container::new(base, name);
        let tag = gsc_tag(name);
        let server_files = container.server_files();

        if !container.exists() {
            println!(
                "{tag} {}",
                format!(
                    "Gameserver {name} not found. Skipping {}",
                    server_files.display()
                )
                .yellow()
            );
            // Deliberately no continue: the server_files check below reports
            // missing containers too.
        }
        if !container.has_server_files() {
            println!(
                "{tag} {}",
                format!(
                    "Directory server_files does not exist. Skipping {}",
                    server_files.display()
                )
                .yellow()
            );
            continue;
        }

        if container.is_clean(lists)? {
            println!(
                "{tag} {}",
                format!(
                    "Game server container is still clean. Skipping {}",
                    server_files.display()
                )
                .green()
            );
            continue;
        }

        if args.interactive && !confirm_clean(&server_files)? {
            println!("Not cleaning {}", server_files.display());
            continue;
        }

        println!(
            "{tag} {}",
            format!("Cleaning {}", server_files.display()).bold()
        );
        let stats = clean_server_files(&server_files, lists, args.verbose)?;
        if args.verbose {
            println!(
                "  -- removed {} files and {} directories ({})",
                stats.files_deleted,
                stats.dirs_removed,
                format_size(stats.bytes_freed, BINARY)
            );
        }
    }

    Ok(())
}

/// Ask the operator to confirm cleaning one server_files directory. Only the
/// literal answer `y` confirms.
fn confirm_clean(server_files: &Path) -> Result<bool> {
    print!(
        "Clean {}? This will delete all server files including saves. (y/n) ",
        server_files.display()
    );
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read confirmation")?;

    Ok(input.trim() == "y")
}
