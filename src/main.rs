#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use flotilla::{
    init_logging, Cell, Coordinate, Match, MatchConfig, Numbered, Player, PlayerId, VesselClass,
    DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a seeded match with random placements and random volleys.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: u8,
        #[arg(long, default_value_t = 2000)]
        max_turns: u32,
        #[arg(long, help = "Print every turn report as a JSON line")]
        trace: bool,
        #[arg(long, help = "Print the final summary as JSON")]
        json: bool,
    },
    /// List vessel classes and their hull lengths.
    Classes,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            seed,
            size,
            max_turns,
            trace,
            json,
        } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = MatchConfig {
                board_size: size,
                ..MatchConfig::default()
            };
            config.validate()?;
            let outcome = simulate(&config, &mut rng, max_turns, trace)?;
            report(&outcome, json)?;
        }
        Commands::Classes => {
            println!("{:<4}{:<12}{:>4}  {}", "", "Class", "HP", "Glyph");
            for class in VesselClass::ALL {
                println!(
                    "{:<4}{:<12}{:>4}  {}",
                    class.abbrev(),
                    class.name(),
                    class.capacity(),
                    class.symbol()
                );
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
struct Outcome {
    game: Match,
    turns: u32,
    shots: usize,
}

#[cfg(feature = "std")]
fn simulate(
    config: &MatchConfig,
    rng: &mut SmallRng,
    max_turns: u32,
    trace: bool,
) -> anyhow::Result<Outcome> {
    let mut players = Vec::with_capacity(2);
    for id in [PlayerId::One, PlayerId::Two] {
        let mut player = Player::new(id, format!("Player {}", id.number()), config.board_size)?;
        player.commission_all(&config.fleet, &mut Numbered)?;
        player.deploy_randomly(rng)?;
        players.push(player);
    }
    let player2 = players.pop().ok_or_else(|| anyhow::anyhow!("missing player 2"))?;
    let player1 = players.pop().ok_or_else(|| anyhow::anyhow!("missing player 1"))?;

    let mut game = Match::new(player1, player2)?;
    game.confirm_setup(PlayerId::One)?;
    game.confirm_setup(PlayerId::Two)?;
    game.begin()?;

    let mut turns = 0;
    let mut shots = 0;
    while game.winner().is_none() && game.turn() <= max_turns {
        let mut open: Vec<Coordinate> = game
            .current_player()
            .targeting()
            .cells()
            .filter(|c| !c.is_hit())
            .map(Cell::coord)
            .collect();
        let volley = game.current_player().battle_total().min(open.len());
        for i in 0..volley {
            let j = rng.random_range(i..open.len());
            open.swap(i, j);
        }
        for &at in &open[..volley] {
            game.add_order(at)?;
        }
        let turn = game.resolve_turn()?;
        turns = turn.turn;
        shots += turn.shots.len();
        if trace {
            println!("{}", serde_json::to_string(&turn)?);
        }
    }
    Ok(Outcome { game, turns, shots })
}

#[cfg(feature = "std")]
fn report(outcome: &Outcome, as_json: bool) -> anyhow::Result<()> {
    let game = &outcome.game;
    let winner = game.winner().map(|id| format!("player{}", id.number()));
    let sunk1 = game.player(PlayerId::One).fleet().sunk_total();
    let sunk2 = game.player(PlayerId::Two).fleet().sunk_total();

    if as_json {
        let summary = json!({
            "winner": winner,
            "turns": outcome.turns,
            "shots": outcome.shots,
            "sunk": {"player1": sunk1, "player2": sunk2},
        });
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        match winner {
            Some(w) => println!("Winner: {} after {} turns", w, outcome.turns),
            None => println!("No winner after {} turns", outcome.turns),
        }
        println!("Shots fired: {}", outcome.shots);
        println!("Vessels lost: player1 {}, player2 {}", sunk1, sunk2);
    }
    Ok(())
}
