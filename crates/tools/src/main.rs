use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use delve_core::{
    CellKind, Game, GameConfig, Grid, LevelGenerator, Pos, load_config, save_config,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one dungeon level and print it as ASCII
    Map {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 1)]
        level: i32,
        /// Optional JSON config controlling dimensions and feature counts
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Auto-play a seeded run down to a target level and print the outcome
    Simulate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Dungeon level to stop at
        #[arg(short, long, default_value_t = 3)]
        levels: i32,
        #[arg(long, default_value_t = 100_000)]
        max_ticks: u32,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write a default config file to edit by hand
    InitConfig { path: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Map { seed, level, config } => {
            let config = resolve_config(config.as_deref())?;
            let grid = LevelGenerator::new(seed, config.grid_width, config.grid_height)
                .with_counts(config.monster_count, config.treasure_count)
                .generate(level);
            print!("{}", render_map(&grid));
            println!(
                "seed {seed}, level {level}: entrance ({}, {}), exit ({}, {})",
                grid.entrance.x, grid.entrance.y, grid.exit.x, grid.exit.y
            );
        }
        Command::Simulate { seed, levels, max_ticks, config } => {
            let config = resolve_config(config.as_deref())?;
            let mut game = Game::new(seed, config)?;

            let mut clock = 0.0;
            let mut ticks = 0;
            while ticks < max_ticks && game.level() < levels {
                if game.player().path.is_empty() {
                    let exit = game.grid().exit;
                    game.move_to(exit);
                }
                clock += 0.05;
                game.update(clock);
                ticks += 1;
            }

            println!("Run complete after {ticks} ticks.");
            println!(
                "Level: {} | Health: {}/{} | Score: {}",
                game.level(),
                game.player().health,
                game.player().max_health,
                game.player().score
            );
            if !game.player().is_alive() {
                println!("The player did not survive the descent.");
            }
            println!("Event log:");
            for event in game.log() {
                println!("  {event:?}");
            }
            println!("Snapshot hash: {}", game.snapshot_hash());
        }
        Command::InitConfig { path } => {
            save_config(&path, &GameConfig::default())
                .with_context(|| format!("failed to write config to {}", path.display()))?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}

fn resolve_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(p) => load_config(p)
            .with_context(|| format!("failed to load config from {}", p.display())),
        None => Ok(GameConfig::default()),
    }
}

fn render_map(grid: &Grid) -> String {
    let mut text = String::new();
    for y in 0..grid.height {
        for x in 0..grid.width {
            let cell = grid.cell_at(Pos { y: y as i32, x: x as i32 });
            text.push(match cell.kind {
                CellKind::Wall => '#',
                CellKind::Empty => '.',
                CellKind::Entrance => '<',
                CellKind::Exit => '>',
                CellKind::Monster => 'M',
                CellKind::Treasure => '$',
            });
        }
        text.push('\n');
    }
    text
}
