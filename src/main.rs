#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui, AiPlayer, CliPlayer, GameConfig, GameError, GameSession, PlayerError, Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let the computer play against itself and print the result.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig::default();

    match cli.command {
        Commands::Play { seed } => {
            ui::greet();
            let rng = make_rng(seed);
            let mut session = GameSession::new(&config, CliPlayer::stdin(), AiPlayer::new(), rng)?;
            ui::print_boards(session.user_board(), session.computer_board());
            println!("{}", "-".repeat(20));
            println!("Your move!");

            let result = session.run_with(|session, report| {
                println!("{}", ui::describe_turn(report));
                ui::print_boards(session.user_board(), session.computer_board());
                if !session.is_over() {
                    println!("{}", "-".repeat(20));
                    match session.to_move() {
                        Side::User => println!("Your move!"),
                        Side::Computer => println!("Computer's move!"),
                    }
                }
            });
            println!("{}", "-".repeat(20));
            match result {
                Ok(Side::User) => println!("You win!"),
                Ok(Side::Computer) => println!("The computer wins!"),
                Err(GameError::Player(PlayerError::InputClosed)) => println!("Game abandoned."),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Sim { seed, json } => {
            let rng = if json {
                // keep stdout clean for the JSON document
                seed.map(SmallRng::seed_from_u64)
                    .unwrap_or_else(|| SmallRng::from_rng(&mut rand::rng()))
            } else {
                make_rng(seed)
            };
            let mut session = GameSession::new(&config, AiPlayer::new(), AiPlayer::new(), rng)?;
            session.run()?;
            let summary = session.summary();
            if json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                ui::print_boards(session.user_board(), session.computer_board());
                println!(
                    "Winner: {:?} after {} moves ({} vs {} shots)",
                    summary.winner, summary.moves, summary.user_shots, summary.computer_shots
                );
            }
        }
    }
    Ok(())
}
