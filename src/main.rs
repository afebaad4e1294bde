use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use plychess_session::{Command, Game, SessionConfig, Turn, parse_command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    info!("plychess starting");

    let mut game = Game::new(SessionConfig::default());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", game.board().pretty())?;
    writeln!(out, "You play White. Enter moves like e2e4, or: new, board, depth N, position <placement>, quit.")?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "rejected command");
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match cmd {
            Command::New => {
                game.reset();
                writeln!(out, "{}", game.board().pretty())?;
            }
            Command::Board => writeln!(out, "{}", game.board().pretty())?,
            Command::Depth(depth) => match game.config_mut().set_depth(depth) {
                Ok(()) => writeln!(out, "depth set to {depth}")?,
                Err(e) => {
                    warn!(error = %e, "rejected depth");
                    writeln!(out, "error: {e}")?;
                }
            },
            Command::Position(board) => {
                game = Game::with_board(*game.config(), board);
                writeln!(out, "{}", game.board().pretty())?;
            }
            Command::Quit => break,
            Command::Move(text) => match game.play(&text) {
                Ok(turn) => report(&mut out, &game, &turn)?,
                Err(e) => {
                    warn!(input = %text, error = %e, "rejected move");
                    writeln!(out, "error: {e}")?;
                }
            },
        }
        out.flush()?;
    }

    info!("plychess shutting down");
    Ok(())
}

fn report(out: &mut impl Write, game: &Game, turn: &Turn) -> io::Result<()> {
    if let Some(reply) = turn.reply {
        writeln!(out, "engine plays {reply}")?;
    }
    writeln!(out, "{}", game.board().pretty())?;
    if turn.outcome.is_over() {
        writeln!(out, "{}", turn.outcome)?;
    }
    Ok(())
}
