use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use renamer::config::{self, Configuration, DEFAULT_PRESET_FILE};
use renamer::folder::scan_folder;
use renamer::models::{FileEntry, Selection};
use renamer::rename_engine::project_previews;
use renamer::tui::{App, run_tui};
use renamer::{History, execute_batch, logging};

#[derive(Parser, Debug)]
#[command(name = "renamer", version, about = "Batch rename the files of one folder")]
struct Cli {
    /// Folder whose files are renamed
    #[arg(default_value = ".")]
    folder: PathBuf,

    /// Preset JSON to load at startup (and the target of save/load in the UI)
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Where log output goes; defaults to renamer.log in the temp directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the previews and exit without renaming
    #[arg(long, conflicts_with = "apply")]
    preview: bool,

    /// Rename without the interactive screen
    #[arg(long)]
    apply: bool,

    /// Force simulation mode regardless of the preset
    #[arg(long)]
    simulate: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    if !cli.folder.is_dir() {
        bail!("not a folder: {}", cli.folder.display());
    }

    let mut config = match &cli.preset {
        Some(path) => config::load_preset(path)
            .with_context(|| format!("loading preset {}", path.display()))?,
        None => Configuration::default(),
    };
    if cli.simulate {
        config.simulation_mode = true;
    }

    if cli.preview || cli.apply {
        return run_headless(&cli.folder, config, cli.apply);
    }

    let preset_path = cli
        .preset
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PRESET_FILE));
    run_tui(App::new(cli.folder, preset_path, config))
}

fn run_headless(folder: &Path, config: Configuration, apply: bool) -> Result<()> {
    let mut entries = scan_folder(folder, &config.filter_extension)?;
    project_previews(&mut entries, &config, &Selection::all())?;
    print_previews(&entries);

    if !apply {
        return Ok(());
    }

    let mut history = History::new();
    let report = execute_batch(folder, &mut entries, &Selection::all(), &config, &mut history)?;
    for name in &report.skipped {
        println!("Skipped (target exists): {name}");
    }
    println!("{}", report.summary());
    Ok(())
}

fn print_previews(entries: &[FileEntry]) {
    let width = entries
        .iter()
        .map(|entry| entry.original_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut changes = 0usize;
    for entry in entries {
        if let Some(preview) = &entry.preview_name {
            println!("{:<width$}  ->  {}", entry.original_name, preview);
            changes += 1;
        }
    }
    println!("{changes} of {} file(s) would change", entries.len());
}
