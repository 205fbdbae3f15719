use std::io;

use seabattle::{
    init_logging, AiPlayer, CliPlayer, GameConfig, Participant, Session, Side, OPPONENT_NAME,
    PLAYER_NAME, STANDARD_FLEET, DEFAULT_GRID_SIZE,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, help = "Grid dimension N of the N×N battlefield")]
    size: usize,
    #[arg(long, value_delimiter = ',', help = "Ship lengths to deploy, in order (default 4,3,3,2,2,2,1,1,1,1)")]
    fleet: Vec<usize>,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let fleet = if self.fleet.is_empty() {
            STANDARD_FLEET.to_vec()
        } else {
            self.fleet.clone()
        };
        Ok(GameConfig::new(self.size, fleet)?)
    }

    /// Independent generators for the two sides, derived from one seed when given.
    fn rngs(&self) -> (SmallRng, SmallRng) {
        match self.seed {
            Some(s) => (
                SmallRng::seed_from_u64(s),
                SmallRng::seed_from_u64(s.wrapping_add(1)),
            ),
            None => {
                let mut seed_rng = rand::rng();
                (
                    SmallRng::from_rng(&mut seed_rng),
                    SmallRng::from_rng(&mut seed_rng),
                )
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot on the console.
    Play(GameArgs),
    /// Watch two bots play each other.
    Watch(GameArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let config = args.config()?;
            if let Some(s) = args.seed {
                println!("Using fixed seed: {} (bot will be reproducible)", s);
            }
            let (rng1, rng2) = args.rngs();
            println!("Welcome to SeaBattle!");
            let human = CliPlayer::new(io::stdin().lock(), io::stdout(), rng1);
            let player = Participant::new(PLAYER_NAME, config.size(), Box::new(human))?;
            let bot = Participant::new(OPPONENT_NAME, config.size(), Box::new(AiPlayer::new(rng2)))?;
            let mut session = Session::new(config, player, bot)?;

            let winner = session.run()?;
            println!("\nGame over!");
            match winner {
                Side::Player => println!("Congratulations, you won!"),
                Side::Opponent => println!("The bot won."),
            }
            println!("\nBot fleet:\n{}", session.opponent().grid());
        }
        Commands::Watch(args) => {
            let config = args.config()?;
            let (rng1, rng2) = args.rngs();
            let first = Participant::new("Bot 1", config.size(), Box::new(AiPlayer::new(rng1)))?;
            let second = Participant::new("Bot 2", config.size(), Box::new(AiPlayer::new(rng2)))?;
            let mut session = Session::new(config, first, second)?;

            session.run()?;
            let summary = session.summary();
            println!("{}:\n{}", session.player().name(), session.player().grid());
            println!("{}:\n{}", session.opponent().name(), session.opponent().grid());
            let winner = match summary.winner {
                Some(Side::Player) => session.player().name(),
                _ => session.opponent().name(),
            };
            println!(
                "{} wins after {} rounds ({} / {} shots)",
                winner, summary.rounds, summary.player_shots, summary.opponent_shots
            );
        }
    }
    Ok(())
}
