use std::io;

use board_game_traits::{Color, GameResult};
use clap::{Arg, ArgAction, Command};
use log::{info, warn};

use othello_engine::agent::{
    Agent, ExpectimaxAgent, FirstMoveAgent, GreedyAgent, MinmaxAgent, MonteCarloAgent,
    MostFlipsAgent,
};
use othello_engine::position::Board;
use othello_engine::search::{MctsSetting, SearchSetting};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const AGENT_NAMES: [&str; 6] = ["minmax", "expectimax", "mcts", "greedy", "first", "flips"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchSettings {
    search_setting: SearchSetting,
    mcts_setting: MctsSetting,
    seed: u64,
    games: u64,
}

pub fn main() -> io::Result<()> {
    let matches = Command::new("Othello engine match runner")
        .version("0.1")
        .about("Play games of Othello between two engine agents")
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .env("SIZE")
                .help("Board size")
                .num_args(1)
                .default_value("8")
                .value_parser(clap::value_parser!(u64).range(4..=8)),
        )
        .arg(
            Arg::new("black")
                .short('b')
                .long("black")
                .env("BLACK")
                .help("Agent playing black, which moves first")
                .num_args(1)
                .default_value("minmax")
                .value_parser(AGENT_NAMES),
        )
        .arg(
            Arg::new("white")
                .short('w')
                .long("white")
                .env("WHITE")
                .help("Agent playing white")
                .num_args(1)
                .default_value("mcts")
                .value_parser(AGENT_NAMES),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .env("DEPTH")
                .help("Search depth in plies for minmax and expectimax")
                .num_args(1)
                .default_value("3")
                .value_parser(clap::value_parser!(u16).range(1..)),
        )
        .arg(
            Arg::new("noPruning")
                .long("no-pruning")
                .env("NO_PRUNING")
                .help("Disable alpha-beta pruning in minmax")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("simulations")
                .long("simulations")
                .env("SIMULATIONS")
                .help("Random playouts per move for the Monte Carlo agent")
                .num_args(1)
                .default_value("100")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .env("SEED")
                .help("Seed for the Monte Carlo agents. Game n uses seeds derived from seed + n")
                .num_args(1)
                .default_value("42")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("games")
                .short('g')
                .long("games")
                .env("GAMES")
                .help("Number of games to play")
                .num_args(1)
                .default_value("1")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("LOGFILE")
                .value_name("othello.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .get_matches();

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    let logger_result = if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Warn)
                    .chain(io::stderr()),
            )
            .apply()
    } else {
        log_dispatcher
            .level(log::LevelFilter::Warn)
            .chain(io::stderr())
            .apply()
    };
    logger_result.map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let search_setting = SearchSetting::new(*matches.get_one::<u16>("depth").unwrap())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?
        .add_pruning(!matches.get_flag("noPruning"));
    let mcts_setting = MctsSetting::new(*matches.get_one::<u64>("simulations").unwrap())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let settings = MatchSettings {
        search_setting,
        mcts_setting,
        seed: *matches.get_one::<u64>("seed").unwrap(),
        games: *matches.get_one::<u64>("games").unwrap(),
    };
    let black = matches.get_one::<String>("black").unwrap();
    let white = matches.get_one::<String>("white").unwrap();

    match *matches.get_one::<u64>("size").unwrap() {
        4 => run_games::<4>(black, white, settings),
        5 => run_games::<5>(black, white, settings),
        6 => run_games::<6>(black, white, settings),
        7 => run_games::<7>(black, white, settings),
        8 => run_games::<8>(black, white, settings),
        _ => unreachable!(),
    }
    Ok(())
}

fn build_agent<const S: usize>(
    name: &str,
    color: Color,
    settings: &MatchSettings,
    seed: u64,
) -> Box<dyn Agent<S>> {
    match name {
        "minmax" => Box::new(MinmaxAgent::new(color, settings.search_setting)),
        "expectimax" => Box::new(ExpectimaxAgent::new(color, settings.search_setting)),
        "mcts" => Box::new(MonteCarloAgent::with_seed(
            color,
            settings.mcts_setting,
            seed,
        )),
        "greedy" => Box::new(GreedyAgent::new(color)),
        "first" => Box::new(FirstMoveAgent::new(color)),
        "flips" => Box::new(MostFlipsAgent::new(color)),
        s => panic!("Unknown agent {}", s),
    }
}

fn run_games<const S: usize>(black_name: &str, white_name: &str, settings: MatchSettings) {
    let mut black_wins = 0;
    let mut white_wins = 0;
    let mut draws = 0;

    for game in 0..settings.games {
        // Offset white's seed, so two Monte Carlo agents don't play out the same random games
        let seed = settings.seed.wrapping_add(game);
        let mut black = build_agent::<S>(black_name, Color::Black, &settings, seed);
        let mut white = build_agent::<S>(white_name, Color::White, &settings, seed ^ (1 << 32));

        info!(
            "Starting game {} on {}s, {} (black) vs {} (white)",
            game + 1,
            S,
            black_name,
            white_name
        );
        let board = play_game(black.as_mut(), white.as_mut());
        let (black_discs, white_discs) = board.score();

        println!("{}", board);
        match board.game_result() {
            Some(GameResult::BlackWin) => {
                black_wins += 1;
                println!(
                    "Game {}: {} (black) wins {}-{}",
                    game + 1,
                    black_name,
                    black_discs,
                    white_discs
                );
            }
            Some(GameResult::WhiteWin) => {
                white_wins += 1;
                println!(
                    "Game {}: {} (white) wins {}-{}",
                    game + 1,
                    white_name,
                    white_discs,
                    black_discs
                );
            }
            Some(GameResult::Draw) => {
                draws += 1;
                println!("Game {}: draw {}-{}", game + 1, black_discs, white_discs);
            }
            None => warn!("Game {} ended without a result", game + 1),
        }
    }

    if settings.games > 1 {
        println!(
            "{} (black) {} wins, {} (white) {} wins, {} draws",
            black_name, black_wins, white_name, white_wins, draws
        );
    }
}

/// Play out a game from the start position. A side without legal moves passes.
fn play_game<'a, const S: usize>(
    black: &'a mut dyn Agent<S>,
    white: &'a mut dyn Agent<S>,
) -> Board<S> {
    let mut board = <Board<S>>::start_position();
    let mut side_to_move = Color::Black;
    let mut ply = 0;

    while !board.is_terminal() {
        let agent = match side_to_move {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };
        match agent.make_move(&board) {
            Some(mv) => {
                if !board.apply_move(mv, side_to_move) {
                    warn!("{} tried illegal move {}, passing", side_to_move, mv);
                } else {
                    ply += 1;
                    info!("{}. {} plays {}", ply, side_to_move, mv);
                }
            }
            None => info!("{} has no legal moves, and passes", side_to_move),
        }
        side_to_move = !side_to_move;
    }
    board
}
