use std::error::Error;
use std::io::{BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, GameStatus, Position, TicTacToeGame, TicTacToeSettings,
};
use tictactoe_common::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: usize, col: usize },
    NewGame,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line {
        "q" | "quit" => return Ok(Command::Quit),
        "n" | "new" => return Ok(Command::NewGame),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected `row col`, got `{}`", line));
    };

    let row = row
        .parse()
        .map_err(|_| format!("Invalid row `{}`", row))?;
    let col = col
        .parse()
        .map_err(|_| format!("Invalid column `{}`", col))?;
    Ok(Command::Place { row, col })
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..board.size() {
        out.push_str(&format!("{:>2}", col));
    }
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&format!("{:>2} ", row));
        for cell in cells {
            out.push(' ');
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

fn describe_status(game: &TicTacToeGame) -> Option<String> {
    let sides = game.sides();
    match game.status() {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some("Draw.".to_string()),
        status => {
            let winner = status.winner()?;
            let who = if sides.is_bot(winner) { "Bot" } else { "You" };
            let line = game
                .winning_line()
                .map(|line| format!(" from {} to {}", line.start, line.end))
                .unwrap_or_default();
            Some(format!("{} ({}) won{}.", who, winner.symbol(), line))
        }
    }
}

fn start_game<W: Write>(
    settings: TicTacToeSettings,
    rng: &mut SessionRng,
    output: &mut W,
) -> Result<TicTacToeGame, Box<dyn Error>> {
    let game = TicTacToeGame::new(settings, rng)?;
    let sides = game.sides();
    writeln!(
        output,
        "New game. You play {}, the bot plays {}.",
        sides.player.symbol(),
        sides.bot.symbol()
    )?;
    if let Some(opening) = game.last_move() {
        writeln!(output, "Bot opens at {}.", opening)?;
    }
    Ok(game)
}

/// Plays games read from `input` until it is exhausted or the user quits.
pub fn run<R: BufRead, W: Write>(
    settings: TicTacToeSettings,
    rng: &mut SessionRng,
    input: R,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let mut game = start_game(settings, rng, output)?;
    write!(output, "{}", render_board(game.board()))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::NewGame) => {
                game = start_game(settings, rng, output)?;
            }
            Ok(Command::Place { row, col }) => {
                let free_before = game.board().free_count();
                match game.apply_player_move(row, col) {
                    Ok(outcome) => {
                        if let Some(reply) = outcome.bot_move {
                            writeln!(output, "Bot plays {}.", reply)?;
                        } else if !outcome.is_game_over() && game.board().free_count() == free_before {
                            writeln!(
                                output,
                                "Cell {} is already taken, move ignored.",
                                Position::new(row, col)
                            )?;
                        }
                    }
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            Err(e) => writeln!(output, "{}", e)?,
        }

        write!(output, "{}", render_board(game.board()))?;
        if let Some(message) = describe_status(&game) {
            log!("Game over: {}", message);
            writeln!(output, "{} Enter `n` for a new game or `q` to quit.", message)?;
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{Mark, SideAssignment};

    fn settings(side_assignment: SideAssignment) -> TicTacToeSettings {
        TicTacToeSettings {
            side_assignment,
            ..TicTacToeSettings::default()
        }
    }

    fn play(settings: TicTacToeSettings, script: &str) -> String {
        let mut output = Vec::new();
        run(settings, &mut SessionRng::new(8), script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1 2"), Ok(Command::Place { row: 1, col: 2 }));
        assert_eq!(parse_command(" 0,2 "), Ok(Command::Place { row: 0, col: 2 }));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert!(parse_command("1").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("-1 0").is_err());
    }

    #[test]
    fn test_render_board() {
        let board = Board::from_rows(vec![
            vec![Mark::X, Mark::Empty, Mark::Empty],
            vec![Mark::Empty, Mark::O, Mark::Empty],
            vec![Mark::Empty, Mark::Empty, Mark::Empty],
        ])
        .unwrap();
        assert_eq!(
            render_board(&board),
            "    0 1 2\n 0  X . .\n 1  . O .\n 2  . . .\n"
        );
    }

    #[test]
    fn test_player_move_gets_reply() {
        let output = play(settings(SideAssignment::PlayerIsX), "1 1\nq\n");
        assert!(output.contains("You play X"));
        assert!(output.contains("Bot plays"));
    }

    #[test]
    fn test_bot_opens_when_holding_x() {
        let output = play(settings(SideAssignment::PlayerIsO), "q\n");
        assert!(output.contains("Bot opens at (0, 0)."));
    }

    #[test]
    fn test_out_of_bounds_is_reported() {
        let output = play(settings(SideAssignment::PlayerIsX), "5 5\nq\n");
        assert!(output.contains("outside the 3x3 board"));
    }

    #[test]
    fn test_occupied_cell_is_reported() {
        let output = play(settings(SideAssignment::PlayerIsO), "0 0\nq\n");
        assert!(output.contains("already taken"));
    }

    #[test]
    fn test_bot_win_is_announced() {
        // Weak play from the player; the bot must not lose.
        let output = play(settings(SideAssignment::PlayerIsX), "1 0\n2 0\n2 1\n2 2\nq\n");
        assert!(output.contains("Bot (O) won") || output.contains("Draw."));
        assert!(!output.contains("You (X) won"));
    }
}
