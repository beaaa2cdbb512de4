//! # Play Command
//!
//! Interactive high-card duel in the terminal.
//!
//! This is the presentation adapter around [`RoundEngine`]: it renders the
//! table, turns typed slot numbers into `play_card` calls, and drains the
//! engine's step queue with real pauses in between so a round unfolds at a
//! readable pace.
//!
//! ## Features
//!
//! - Card slots numbered from 1; `n` deals a new game, `q` quits
//! - Invalid input is reported on stderr and the prompt repeats
//! - Round outcomes and status notices printed as they happen
//! - Optional JSONL round history (`--log`)

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_card, format_final, format_score, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_play_input};
use highcard_engine::cards::Owner;
use highcard_engine::engine::{EngineConfig, Pacing, RoundEngine};
use highcard_engine::game::Notice;
use highcard_engine::logger::{RoundLogger, RoundRecord};
use highcard_engine::policy::create_policy;
use highcard_engine::scheduler::StepQueue;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Command-line flags for `play`; each one overrides the resolved config.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub hand_size: Option<usize>,
    pub pace: Option<f64>,
    pub log: Option<PathBuf>,
    pub rounds: Option<u32>,
}

impl PlayOptions {
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(size) = self.hand_size {
            cfg.hand_size = size;
        }
        if let Some(pace) = self.pace {
            cfg.pace = pace;
        }
        cfg
    }
}

/// Real-time stand-in for the engine's virtual clock.
struct Pacer {
    pace: f64,
}

impl Pacer {
    fn wait(&self, delay: Duration) {
        if self.pace > 0.0 && !delay.is_zero() {
            std::thread::sleep(delay.mul_f64(self.pace));
        }
    }
}

/// Handle the play command.
///
/// # Arguments
///
/// * `opts` - Flags from the command line
/// * `out` - Output stream for the table and notices
/// * `err` - Error stream for warnings and invalid input
/// * `stdin` - Input stream for player commands
///
/// # Returns
///
/// * `Ok(())` when the player quits, input ends, or `--rounds` is reached
/// * `Err(CliError)` if configuration is invalid, the log file cannot be
///   written, or output fails
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let cfg = opts.apply(resolved.config);
    execute_play_command(cfg, opts.log, opts.rounds, stdin, out, err)
}

fn execute_play_command(
    cfg: Config,
    log: Option<PathBuf>,
    rounds: Option<u32>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if let Err(e) = config::validate(&cfg) {
        ui::write_error(err, &e.to_string())?;
        return Err(e.into());
    }

    let seed = cfg.seed.unwrap_or_else(rand::random);
    if cfg.seed.is_none() {
        ui::display_warning(err, &format!("no seed given; this game uses seed {}", seed))?;
    }
    let policy = create_policy(&cfg.policy)?;
    let mut engine = RoundEngine::with_parts(
        EngineConfig {
            player_hand: cfg.hand_size,
            opponent_hand: cfg.hand_size,
            seed: Some(seed),
            pacing: Pacing::default(),
        },
        policy,
        StepQueue::new(),
    )?;
    let mut logger = log.map(RoundLogger::create).transpose()?;
    let pacer = Pacer { pace: cfg.pace };

    writeln!(
        out,
        "play: hand_size={} seed={} pace={} policy={}",
        cfg.hand_size,
        seed,
        cfg.pace,
        engine.policy_name()
    )?;
    writeln!(out, "{}", format_table(&engine))?;

    let mut played = 0u32;
    let mut announced = false;
    loop {
        if rounds.is_some_and(|n| played >= n) {
            break;
        }
        let hand = engine.hand(Owner::Player);
        if engine.is_game_over() {
            if !announced {
                writeln!(out, "{}", format_final(&engine.score()))?;
                announced = true;
            }
            write!(out, "New game (n) or quit (q): ")?;
        } else {
            write!(
                out,
                "Play a card (1-{}), n = new game, q = quit: ",
                hand.len()
            )?;
        }
        out.flush()?;

        let input = match read_stdin_line(stdin) {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out)?;
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                ui::write_error(err, "Input is not valid UTF-8; line ignored")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        match parse_play_input(&input, hand.len()) {
            ParseResult::Play(slot) => {
                let Some(card) = hand.slot(slot) else {
                    continue;
                };
                if engine.play_card(card.id) {
                    writeln!(out, "You play: {}", format_card(card))?;
                    played += drive_round(&mut engine, &pacer, &mut logger, seed, out)?;
                    writeln!(out, "{}", format_table(&engine))?;
                }
            }
            ParseResult::NewGame => {
                engine.new_game();
                announced = false;
                show_notices(&mut engine, &pacer, out)?;
                writeln!(out, "{}", format_table(&engine))?;
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
            }
        }
    }

    writeln!(out, "Rounds played: {}", played)?;
    writeln!(out, "{}", format_score(&engine.score()))?;
    Ok(())
}

/// Prints posted notices. When no step follows them they stay on screen for
/// their own duration before the table is redrawn.
fn show_notices(engine: &mut RoundEngine, pacer: &Pacer, out: &mut dyn Write) -> io::Result<()> {
    let notices = engine.drain_notices();
    for notice in &notices {
        ui::write_notice(out, notice)?;
    }
    pacer.wait(linger(&notices, !engine.scheduler().is_empty()));
    Ok(())
}

fn linger(notices: &[Notice], step_pending: bool) -> Duration {
    if step_pending {
        return Duration::ZERO;
    }
    let longest = notices.iter().map(|n| n.duration).max();
    longest.unwrap_or_default()
}

/// Fires every pending step, pausing for each delay. Returns the number of
/// rounds that were scored.
fn drive_round(
    engine: &mut RoundEngine,
    pacer: &Pacer,
    logger: &mut Option<RoundLogger>,
    seed: u64,
    out: &mut dyn Write,
) -> Result<u32, CliError> {
    let mut scored = 0;
    while let Some(delay) = engine.scheduler().next_delay() {
        pacer.wait(delay);
        let before = engine.play_area();
        engine.tick();
        if before.opponent.is_none()
            && let Some(card) = engine.play_area().opponent
        {
            writeln!(out, "CPU plays: {}", format_card(&card))?;
        }
        show_notices(engine, pacer, out)?;
        for outcome in engine.drain_outcomes() {
            scored += 1;
            if let Some(l) = logger.as_mut() {
                let record = RoundRecord::from_outcome(
                    l.next_id(),
                    Some(seed),
                    engine.generation(),
                    &outcome,
                    engine.score(),
                );
                l.write(&record)?;
            }
        }
    }
    Ok(scored)
}
