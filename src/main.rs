use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_n_3d::config::AppConfig;
use connect_n_3d::env::{decode_action, Environment, Step};
use connect_n_3d::game::Player;

/// Replay a sequence of column actions on a 3-D connect-N board.
#[derive(Parser)]
#[command(name = "connect-n-3d", about = "Play 3-D connect-N moves from the command line")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board side length
    #[arg(long)]
    grid_size: Option<usize>,

    /// Override number in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Override first player (1 or -1)
    #[arg(long, allow_hyphen_values = true)]
    first_player: Option<i8>,

    /// Print one JSON object per step instead of text
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Actions in 0..G^2 (width * G + depth), comma or space separated
    #[arg(value_delimiter = ',', num_args = 0..)]
    actions: Vec<usize>,
}

#[derive(serde::Serialize)]
struct StepRecord<'a> {
    step: usize,
    action: usize,
    width: usize,
    depth: usize,
    reward: f32,
    done: bool,
    turn: i8,
    winner: i8,
    couldnt_locate: bool,
    observation: &'a [i8],
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(grid_size) = cli.grid_size {
        app_config.game.grid_size = grid_size;
    }
    if let Some(win_length) = cli.win_length {
        app_config.game.win_length = win_length;
    }
    if let Some(value) = cli.first_player {
        app_config.game.first_player =
            Player::from_value(value).context("parsing --first-player")?;
    }

    let mut env = Environment::with_options(app_config.game, app_config.env)
        .context("building environment")?;
    let grid_size = app_config.game.grid_size;

    if cli.actions.is_empty() {
        bail!(
            "no actions given (expected values in 0..{})",
            env.action_space_size()
        );
    }

    for (idx, &action) in cli.actions.iter().enumerate() {
        let step = env
            .step(action)
            .with_context(|| format!("step {} (action {})", idx + 1, action))?;
        let (width, depth) = decode_action(action, grid_size)?;
        report(idx + 1, action, (width, depth), &step, cli.json)?;

        if step.done {
            if idx + 1 < cli.actions.len() {
                log::info!(
                    "game over; ignoring {} remaining action(s)",
                    cli.actions.len() - idx - 1
                );
            }
            break;
        }
    }

    if !cli.json {
        println!();
        print!("{}", env.engine().board());
    }

    Ok(())
}

fn report(
    index: usize,
    action: usize,
    column: (usize, usize),
    step: &Step,
    json: bool,
) -> Result<()> {
    if json {
        let record = StepRecord {
            step: index,
            action,
            width: column.0,
            depth: column.1,
            reward: step.reward,
            done: step.done,
            turn: step.info.turn.value(),
            winner: step.info.winner_value(),
            couldnt_locate: step.info.couldnt_locate,
            observation: step.observation.values(),
        };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!(
            "step {:>3} | turn {:>2} | action {:>3} -> ({}, {}) | reward {:>7.2} | done {:<5} | winner {:>2} | couldnt_locate {}",
            index,
            step.info.turn.value(),
            action,
            column.0,
            column.1,
            step.reward,
            step.done,
            step.info.winner_value(),
            step.info.couldnt_locate,
        );
    }
    Ok(())
}
