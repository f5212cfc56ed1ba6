#![cfg(feature = "std")]

use std::string::String;

use crate::{
    board::{Board, Cell},
    game::{Side, TurnReport},
};

fn cell_symbol(cell: Cell, concealed: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship if concealed => 'O',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss => 'T',
        Cell::Buffer => '.',
    }
}

/// Render a board as text with 1-based row and column headers. Ships are
/// hidden when the board is concealed; shot markers always show.
pub fn render_board(board: &Board) -> String {
    let width = board.size().to_string().len();
    let mut out = std::format!("{:width$}", "", width = width);
    for c in 1..=board.size() {
        out.push_str(&std::format!(" {:>width$}", c, width = width));
    }
    for (r, row) in board.rows().enumerate() {
        out.push_str(&std::format!("\n{:>width$}", r + 1, width = width));
        for &cell in row {
            let symbol = cell_symbol(cell, board.is_concealed());
            out.push_str(&std::format!(" {:>width$}", symbol, width = width));
        }
    }
    out
}

/// Print both boards, the user's first.
pub fn print_boards(user: &Board, computer: &Board) {
    std::println!("{}", "-".repeat(20));
    std::println!("Your board:");
    std::println!("{}", render_board(user));
    std::println!("{}", "-".repeat(20));
    std::println!("Computer's board:");
    std::println!("{}", render_board(computer));
}

/// Describe a move for the console.
pub fn describe_turn(report: &TurnReport) -> String {
    let who = match report.side {
        Side::User => "You",
        Side::Computer => "Computer",
    };
    let mut line = std::format!("{} fired at {}: {}", who, report.target, report.outcome);
    if report.repeat {
        line.push_str(" Shoot again.");
    }
    line
}

/// Print the greeting and the input format.
pub fn greet() {
    std::println!("-------------------");
    std::println!("    Welcome to     ");
    std::println!("    Sea Battle     ");
    std::println!("-------------------");
    std::println!(" input format: x y ");
    std::println!(" x - row number    ");
    std::println!(" y - column number ");
    std::println!(" O empty  ■ ship  X hit  T miss  . revealed water");
}
