//! battlemat command line
//!
//! # Commands
//!
//! - `battlemat resolve <MODE> <START> <END>` - print the regions a gesture selects
//! - `battlemat paint <MAP> <TOOL> <START> <END>` - apply one tool gesture to a map file
//! - `battlemat show <MAP>` - list the tiles stored in a map file
//!
//! Points are given in tile space as `x,y`. Set `RUST_LOG` for logging.

use anyhow::{bail, Context, Result};
use battlemat_editor::battlemat_core::{load_map, Tile};
use battlemat_editor::battlemat_resolve::ResolverKind;
use battlemat_editor::{Editor, EditorPreferences, EditorTool};
use clap::{Parser, Subcommand};
use glam::DVec2;
use std::path::PathBuf;

/// Battle map region painting
#[derive(Parser)]
#[command(name = "battlemat")]
#[command(about = "Resolve gestures and paint walls, doors and terrain on battle maps", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the regions a gesture selects as JSON
    Resolve {
        /// Selection mode: box, square, edge, diag, fill or circle
        #[arg(name = "MODE")]
        mode: ResolverKind,

        /// Gesture start in tile space, as `x,y`
        #[arg(name = "START", value_parser = parse_point, allow_hyphen_values = true)]
        start: DVec2,

        /// Gesture end in tile space, as `x,y`
        #[arg(name = "END", value_parser = parse_point, allow_hyphen_values = true)]
        end: DVec2,
    },

    /// Apply one tool gesture to a map file
    Paint {
        /// Map file, created if it does not exist
        #[arg(name = "MAP")]
        map: PathBuf,

        /// Tool: box_wall, circle_wall, diag_wall, door, terrain_difficult,
        /// terrain_water or eraser
        #[arg(name = "TOOL")]
        tool: EditorTool,

        /// Gesture start in tile space, as `x,y`
        #[arg(name = "START", value_parser = parse_point, allow_hyphen_values = true)]
        start: DVec2,

        /// Gesture end in tile space, as `x,y`
        #[arg(name = "END", value_parser = parse_point, allow_hyphen_values = true)]
        end: DVec2,

        /// Write the result here instead of back to MAP
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the tiles stored in a map file
    Show {
        #[arg(name = "MAP")]
        map: PathBuf,
    },
}

fn parse_point(s: &str) -> Result<DVec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("`{v}` is not a finite number"))
    };
    Ok(DVec2::new(coord(x)?, coord(y)?))
}

fn describe(tile: &Tile) -> String {
    tile.edges()
        .map(|(region, state)| format!("{region}={state}"))
        .chain(tile.fills().map(|(region, state)| format!("{region}={state}")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve(mode: ResolverKind, start: DVec2, end: DVec2) -> Result<()> {
    let regions = mode.resolve(start, end);
    println!("{}", serde_json::to_string_pretty(&regions)?);
    Ok(())
}

fn paint(
    map: PathBuf,
    tool: EditorTool,
    start: DVec2,
    end: DVec2,
    output: Option<PathBuf>,
) -> Result<()> {
    if tool == EditorTool::Move {
        bail!("the move tool does not edit maps");
    }

    let mut preferences = EditorPreferences::load();
    let mut editor = Editor::with_preferences(&preferences);
    if map.exists() {
        editor
            .open(&map)
            .with_context(|| format!("failed to open {}", map.display()))?;
    }

    editor.set_tool(tool);
    if !editor.select_tiles(start, end)? {
        println!("Nothing changed.");
        return Ok(());
    }
    if let Some(status) = editor.status() {
        println!("{status}");
    }

    let target = output.unwrap_or(map);
    editor
        .save(&target)
        .with_context(|| format!("failed to save {}", target.display()))?;

    preferences.add_recent_map(&target);
    if let Err(err) = preferences.save() {
        log::warn!("Failed to save preferences: {err}");
    }
    Ok(())
}

fn show(map: PathBuf) -> Result<()> {
    let tiles = load_map(&map).with_context(|| format!("failed to open {}", map.display()))?;
    for (index, tile) in tiles.iter() {
        println!("{index} {}", describe(tile));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { mode, start, end } => resolve(mode, start, end),
        Commands::Paint {
            map,
            tool,
            start,
            end,
            output,
        } => paint(map, tool, start, end, output),
        Commands::Show { map } => show(map),
    }
}
