//! Fleetly: an RSVP speed reader for the terminal.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use fleetly_core::{MIN_WPM, Player, RateConfig, TickResult};
use fleetly_term::{Command, TermSession, TermSink, poll_command};
use log::info;

/// Rate adjustment applied per +/- press.
const WPM_STEP: u16 = 10;
/// Poll interval while no advancement is pending.
const IDLE_POLL_MS: u64 = 50;
/// Interval between effective-rate log lines.
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Built-in passage played when no file is given.
const SAMPLE_TEXT: &str = "The Time Traveller (for so it will be convenient to speak of him) was \
expounding a recondite matter to us. His grey eyes shone and twinkled, and his usually pale face \
was flushed and animated. The fire burned brightly, and the soft radiance of the incandescent \
lights in the lilies of silver caught the bubbles that flashed and passed in our glasses. There \
was that luxury of after-dinner atmosphere, when thought runs gracefully free of the trammels of \
precision. And he put it to us in this way, marking the points with a lean forefinger, as we sat \
and lazily admired his earnestness over this new paradox (as we thought it) and his fecundity.";

#[derive(Parser, Debug)]
#[command(name = "fleetly")]
#[command(about = "RSVP speed reader: one word at a time, anchored on its recognition point")]
struct Args {
    /// Plain-text file to read; a built-in sample plays when omitted.
    file: Option<PathBuf>,

    /// Starting rate in words per minute (minimum 50).
    #[arg(short, long, default_value_t = 400)]
    wpm: u16,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => SAMPLE_TEXT.to_string(),
    };

    let session = TermSession::enter().context("failed to set up the terminal")?;
    let result = run(&text, args.wpm);
    drop(session);
    result
}

fn run(text: &str, wpm: u16) -> Result<()> {
    let mut player = Player::new(
        TermSink::new(),
        RateConfig {
            words_per_minute: wpm,
        },
    );
    player.load_text(text);

    let clock = Instant::now();
    let mut report_start = Instant::now();
    let mut report_words = 0u64;

    draw_status(&mut player)?;

    loop {
        let now_ms = clock.elapsed().as_millis() as u64;
        match player.tick(now_ms) {
            TickResult::Advanced => {
                report_words += 1;
                draw_status(&mut player)?;
            }
            TickResult::Finished => draw_status(&mut player)?,
            TickResult::NoChange => {}
        }

        let elapsed = report_start.elapsed();
        if elapsed >= REPORT_INTERVAL {
            if report_words > 0 {
                let elapsed_ms = elapsed.as_millis().max(1) as u64;
                info!(
                    "effective_wpm={:.1} words={} elapsed_ms={}",
                    report_words as f64 * 60_000.0 / elapsed_ms as f64,
                    report_words,
                    elapsed_ms
                );
            }
            report_words = 0;
            report_start = Instant::now();
        }

        let timeout = poll_timeout(&player, clock.elapsed().as_millis() as u64);
        let Some(command) = poll_command(timeout)? else {
            continue;
        };

        let now_ms = clock.elapsed().as_millis() as u64;
        match command {
            Command::TogglePlay => {
                if player.is_running() {
                    player.stop();
                } else {
                    if player.word_count() == 0 {
                        // Nothing loaded; fall back to the source text.
                        player.load_text(text);
                    }
                    if player.position() >= player.word_count() {
                        player.set_position(0);
                    }
                    player.start(now_ms);
                }
            }
            Command::RateUp => {
                let raised = player.words_per_minute().saturating_add(WPM_STEP);
                player.change_rate(raised, now_ms);
            }
            Command::RateDown => {
                let lowered = player
                    .words_per_minute()
                    .saturating_sub(WPM_STEP)
                    .max(MIN_WPM);
                player.change_rate(lowered, now_ms);
            }
            Command::StepBack => {
                player.stop();
                player.set_position(player.position().saturating_sub(1));
            }
            Command::StepForward => {
                player.stop();
                player.set_position(player.position() + 1);
            }
            Command::Restart => {
                player.stop();
                player.set_position(0);
            }
            Command::Suspend => player.stop(),
            Command::Redraw => {
                let last = player.word_count().saturating_sub(1);
                player.set_position(player.position().min(last));
            }
            Command::Quit => break,
        }
        draw_status(&mut player)?;
    }

    Ok(())
}

/// Sleep until the pending advancement is due, or briefly while idle; input
/// events interrupt the wait either way.
fn poll_timeout(player: &Player<TermSink>, now_ms: u64) -> Duration {
    match player.next_due_ms() {
        Some(due_ms) => Duration::from_millis(due_ms.saturating_sub(now_ms)),
        None => Duration::from_millis(IDLE_POLL_MS),
    }
}

fn draw_status(player: &mut Player<TermSink>) -> Result<()> {
    let wpm = player.words_per_minute();
    let position = player.position();
    let total = player.word_count();
    let running = player.is_running();
    player.sink_mut().draw_status(wpm, position, total, running)?;
    Ok(())
}
