use seabattle::{AiPlayer, GameConfig, Participant, Session};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::standard();
    let p1 = AiPlayer::new(SmallRng::seed_from_u64(seed1));
    let p2 = AiPlayer::new(SmallRng::seed_from_u64(seed2));
    let player = Participant::new("player1", config.size(), Box::new(p1))?;
    let opponent = Participant::new("player2", config.size(), Box::new(p2))?;

    let mut session = Session::new(config, player, opponent)?;
    session.run()?;

    println!("{}", serde_json::to_string(&session.summary())?);
    Ok(())
}
