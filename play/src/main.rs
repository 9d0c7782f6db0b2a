use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use log::{info, LevelFilter};
use mcts::Mcts;
use mimalloc::MiMalloc;
use tictactoe::{Game, GameResult, Player};

use crate::{cli::Args, tree::print_root_children};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod tree;

const N: usize = 3;

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        simple_logging::log_to_file(path, LevelFilter::Info)?;
    }

    loop {
        play_game(&args)?;
        if !ask_yes_no("Do you want to play again? (yes/no): ")? {
            println!("Thanks for playing!");
            break;
        }
    }
    Ok(())
}

fn play_game(args: &Args) -> io::Result<()> {
    let mut tree = Mcts::new(args.exploration);
    let mut game: Game<N> = Game::default();
    println!("{game}");

    loop {
        // Player's turn.
        game = read_human_move(&game)?;
        println!("{game}");
        if game.result != GameResult::Ongoing {
            break;
        }

        // Computer's turn.
        println!("Computer's turn...");
        let root = game;
        for _ in 0..args.rollouts {
            tree.do_rollout(&root);
        }
        game = tree.choose(&root);
        info!(
            "engine moved after {} rollouts, {} visits at the root",
            args.rollouts,
            tree.visits(&root)
        );
        println!("{game}");
        if args.show_tree {
            print_root_children(&tree, &root);
        }
        if game.result != GameResult::Ongoing {
            break;
        }
    }

    info!("game over: {:?}", game.result);
    match game.result {
        GameResult::Winner(Player::X) => println!("Congratulations! You won!"),
        GameResult::Winner(Player::O) => println!("Sorry, you lost. Better luck next time!"),
        GameResult::Draw => println!("It's a draw!"),
        GameResult::Ongoing => unreachable!(),
    }
    Ok(())
}

fn read_human_move(game: &Game<N>) -> io::Result<Game<N>> {
    loop {
        print!("Your turn! Enter row,col (e.g. 1,1): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.is_empty() {
            eprintln!("Got EOF");
            process::exit(1)
        }

        let (row, col) = match parse_square(input.trim()) {
            Some(square) => square,
            None => {
                println!("Invalid input! Please enter row,col (e.g. 1,1).");
                continue;
            }
        };
        match game.play(row, col) {
            Ok(next) => return Ok(next),
            Err(err) => println!("Invalid move! ({err})"),
        }
    }
}

fn parse_square(input: &str) -> Option<(usize, usize)> {
    let (row, col) = input.split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;
    // Squares are entered one-based.
    Some((row.checked_sub(1)?, col.checked_sub(1)?))
}

fn ask_yes_no(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("yes"))
}
