//! Self-play demo: the engine plays both sides until the game ends.

use caissa::board::{find_best_move, Board, Difficulty};

fn main() {
    env_logger::init();

    let difficulty = match std::env::args().nth(1).as_deref() {
        Some("easy") => Difficulty::Easy,
        Some("hard") => Difficulty::Hard,
        _ => Difficulty::Medium,
    };

    let mut board = Board::new();
    let depth = difficulty.depth();

    loop {
        if let Some(result) = board.game_result() {
            println!("\n{board}");
            println!("{result}");
            break;
        }

        let Some(m) = find_best_move(&mut board, depth) else {
            break;
        };

        let move_number = board.fullmove_number();
        let white_moved = board.white_to_move();
        let san = board.play(m);
        if white_moved {
            print!("{move_number}. {san} ");
        } else {
            println!("{san}");
        }
    }

    print!("\nMoves: ");
    for san in board.move_history() {
        print!("{san} ");
    }
    println!();
}
