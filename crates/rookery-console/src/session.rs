//! Event-driven console session owning a single game.
//!
//! A reader thread turns stdin lines into commands and sends them over a
//! channel; the session loop owns the [`Board`] and applies them one at a
//! time, so the board is never shared.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use tracing::{debug, info, warn};

use rookery_core::{Board, Color, Coord, MoveError, MoveOutcome};

use crate::command::{Command, ConsoleOption, parse_command};
use crate::error::ConsoleError;

/// Knobs adjustable via `set`.
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    /// Print the board after every applied move.
    pub autoshow: bool,
}

/// Events processed by the main session loop.
enum SessionEvent {
    Command(Result<Command, ConsoleError>),
    InputClosed,
}

/// A console game: the board plus the current click selection.
pub struct Session {
    board: Board,
    selected: Option<Coord>,
    config: ConsoleConfig,
}

impl Session {
    /// Create a session with the starting position.
    pub fn new() -> Self {
        Self::with_config(ConsoleConfig::default())
    }

    /// Create a session with the starting position and the given settings.
    pub fn with_config(config: ConsoleConfig) -> Self {
        Self {
            board: Board::new(),
            selected: None,
            config,
        }
    }

    /// The game being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The square selected by the last `click`, if any.
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Run the console loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), ConsoleError> {
        let (tx, rx) = mpsc::channel::<SessionEvent>();

        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        debug!(cmd = %trimmed, "received console command");
                        if tx.send(SessionEvent::Command(parse_command(trimmed))).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "stdin read failed");
                        break;
                    }
                }
            }
            let _ = tx.send(SessionEvent::InputClosed);
        });

        let stdout = io::stdout();
        for event in &rx {
            let lines = match event {
                SessionEvent::Command(Ok(Command::Quit)) | SessionEvent::InputClosed => break,
                SessionEvent::Command(Ok(cmd)) => self.handle(cmd),
                SessionEvent::Command(Err(e)) => {
                    warn!(error = %e, "console parse error");
                    vec![format!("error {e}")]
                }
            };
            let mut out = stdout.lock();
            for line in lines {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
        }

        info!("rookery console shutting down");
        Ok(())
    }

    /// Apply one command and return the reply lines.
    pub fn handle(&mut self, cmd: Command) -> Vec<String> {
        match cmd {
            Command::New => self.handle_new(),
            Command::Select(at) => self.handle_select(at),
            Command::Click(at) => self.handle_click(at),
            Command::Move { from, to } => self.handle_move(from, to),
            Command::Show => self.show_lines(),
            Command::Captured => self.handle_captured(),
            Command::Turn => vec![format!("turn {}", self.board.side_to_move())],
            Command::Check => self.handle_check(),
            Command::Set(option) => self.handle_set(option),
            Command::Quit | Command::Unknown(_) => Vec::new(),
        }
    }

    fn handle_new(&mut self) -> Vec<String> {
        self.board = Board::new();
        self.selected = None;
        info!("new game");
        vec!["ok new".to_string()]
    }

    fn handle_select(&mut self, at: Coord) -> Vec<String> {
        let destinations = self.board.select(at);
        self.selected = (!destinations.is_empty()).then_some(at);
        vec![moves_line(&destinations)]
    }

    /// Mirror a click on a rendered board.
    ///
    /// With a selection, clicking a highlighted square plays the move. Any
    /// other click on a piece of the side to move (re)selects it.
    fn handle_click(&mut self, at: Coord) -> Vec<String> {
        if let Some(from) = self.selected
            && from != at
            && self.board.square_data(at).is_available()
        {
            return self.handle_move(from, at);
        }

        let own_piece = self
            .board
            .piece_at(at)
            .is_some_and(|p| p.color() == self.board.side_to_move());
        if own_piece {
            return self.handle_select(at);
        }
        vec![format!("ignored {at}")]
    }

    fn handle_move(&mut self, from: Coord, to: Coord) -> Vec<String> {
        self.selected = None;
        match self.board.play(from, to) {
            Ok(outcome) => {
                let mut lines = vec![outcome_line(&outcome)];
                if self.config.autoshow {
                    lines.extend(self.show_lines());
                }
                lines
            }
            Err(e) => {
                self.board.clear_highlights();
                reject_line(&e)
            }
        }
    }

    fn handle_captured(&self) -> Vec<String> {
        Color::ALL
            .iter()
            .map(|&color| {
                let names: Vec<String> = self
                    .board
                    .lost_pieces(color)
                    .iter()
                    .map(|p| p.kind().to_string())
                    .collect();
                format!("captured {color}: {}", names.join(" "))
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn handle_check(&self) -> Vec<String> {
        let side = self.board.side_to_move();
        match self.board.checker(side) {
            Some(checker) => vec![format!("check {side} {checker}")],
            None => vec!["check none".to_string()],
        }
    }

    fn handle_set(&mut self, option: ConsoleOption) -> Vec<String> {
        match option {
            ConsoleOption::AutoShow(on) => {
                self.config.autoshow = on;
                vec![format!("ok autoshow {}", if on { "on" } else { "off" })]
            }
        }
    }

    fn show_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .board
            .pretty()
            .to_string()
            .lines()
            .map(str::to_string)
            .collect();
        lines.push(format!("{} to move", self.board.side_to_move()));
        lines
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn moves_line(destinations: &[Coord]) -> String {
    let mut line = String::from("moves");
    for to in destinations {
        line.push(' ');
        line.push_str(&to.to_string());
    }
    line
}

fn outcome_line(outcome: &MoveOutcome) -> String {
    let mut line = format!("ok {outcome}");
    if let Some(victim) = outcome.captured {
        line.push_str(&format!(" capture {}", victim.asset()));
    }
    if let Some(side) = outcome.castle {
        line.push_str(&format!(" castle {side}"));
    }
    if let Some(checker) = outcome.checker {
        line.push_str(&format!(" check {checker}"));
    }
    line
}

fn reject_line(err: &MoveError) -> Vec<String> {
    vec![format!("error {err}")]
}
