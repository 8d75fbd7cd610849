mod config;
mod terminal;

use clap::{Parser, ValueEnum};
use std::io;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{SideAssignment, TicTacToeSettings};
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};

#[derive(Clone, Copy, ValueEnum)]
enum PlayerSide {
    X,
    O,
    Random,
}

impl From<PlayerSide> for SideAssignment {
    fn from(side: PlayerSide) -> Self {
        match side {
            PlayerSide::X => SideAssignment::PlayerIsX,
            PlayerSide::O => SideAssignment::PlayerIsO,
            PlayerSide::Random => SideAssignment::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play N x N tic-tac-toe against a minimax bot")]
struct Args {
    /// Board size, 3 to 10
    #[arg(long)]
    size: Option<u32>,
    /// Search depth for boards larger than 3x3
    #[arg(long)]
    depth: Option<u32>,
    /// Seed for side assignment
    #[arg(long)]
    seed: Option<u64>,
    /// Which mark you play
    #[arg(long, value_enum)]
    player: Option<PlayerSide>,
    /// Keep the final position instead of filling the board with the winner's mark
    #[arg(long)]
    no_fill: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<String>,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(size) = self.size {
            config.game.board_size = size;
        }
        if let Some(depth) = self.depth {
            config.game.search_depth = depth;
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(player) = self.player {
            config.game.side_assignment = player.into();
        }
        if self.no_fill {
            config.game.fill_on_win = false;
        }
        if self.use_log_prefix {
            config.use_log_prefix = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    let prefix = if config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let settings = TicTacToeSettings::from(&config.game);
    let mut rng = match config.game.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    terminal::run(settings, &mut rng, stdin.lock(), &mut stdout)?;

    log!("Client exited");
    Ok(())
}
