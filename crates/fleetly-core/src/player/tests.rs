use super::*;
use crate::render::{PresentationSink, WordFrame};

/// Sink that records every render and clear it receives.
#[derive(Default)]
struct RecordingSink {
    rendered: Vec<(String, usize)>,
    clears: usize,
}

impl PresentationSink for RecordingSink {
    fn render(&mut self, frame: &WordFrame<'_>) {
        self.rendered
            .push((frame.word().to_string(), frame.orp_offset()));
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

fn player_with(text: &str, wpm: u16) -> Player<RecordingSink> {
    let mut player = Player::new(
        RecordingSink::default(),
        RateConfig {
            words_per_minute: wpm,
        },
    );
    player.load_text(text);
    player
}

fn rendered_words(player: &Player<RecordingSink>) -> Vec<&str> {
    player
        .sink()
        .rendered
        .iter()
        .map(|(word, _)| word.as_str())
        .collect()
}

#[test]
fn load_renders_the_first_word_and_resets() {
    let player = player_with("alpha beta", 400);
    assert_eq!(rendered_words(&player), ["alpha"]);
    assert_eq!(player.position(), 0);
    assert!(!player.is_running());
    assert_eq!(player.next_due_ms(), None);
}

#[test]
fn load_blank_text_clears_the_display() {
    let mut player = player_with("alpha", 400);
    player.load_text("   \n ");
    assert_eq!(player.word_count(), 0);
    assert_eq!(player.sink().clears, 1);
    assert!(!player.is_running());
    assert_eq!(player.next_due_ms(), None);
}

#[test]
fn start_renders_the_current_word_and_schedules() {
    let mut player = player_with("cat dog", 400);
    player.start(1_000);
    assert!(player.is_running());
    assert_eq!(player.next_due_ms(), Some(1_150));
    assert_eq!(rendered_words(&player), ["cat", "cat"]);
}

#[test]
fn start_while_running_is_a_noop() {
    let mut player = player_with("cat dog", 400);
    player.start(0);
    let renders = player.sink().rendered.len();
    player.start(40);
    assert_eq!(player.next_due_ms(), Some(150));
    assert_eq!(player.sink().rendered.len(), renders);
}

#[test]
fn start_on_an_empty_sequence_is_a_noop() {
    let mut player = Player::new(RecordingSink::default(), RateConfig::default());
    player.start(0);
    assert!(!player.is_running());
    assert_eq!(player.next_due_ms(), None);
    assert!(player.sink().rendered.is_empty());
}

#[test]
fn tick_before_the_deadline_does_nothing() {
    let mut player = player_with("cat dog", 400);
    player.start(0);
    assert_eq!(player.tick(149), TickResult::NoChange);
    assert_eq!(player.position(), 0);
    assert_eq!(player.next_due_ms(), Some(150));
}

#[test]
fn advancement_walks_the_sequence_to_terminal_idle() {
    let mut player = player_with("one two three", 400);
    player.start(0);

    assert_eq!(player.tick(150), TickResult::Advanced);
    assert_eq!(player.position(), 1);
    assert_eq!(player.next_due_ms(), Some(300));

    assert_eq!(player.tick(300), TickResult::Advanced);
    assert_eq!(player.tick(450), TickResult::Finished);

    assert_eq!(player.position(), 3);
    assert!(!player.is_running());
    assert_eq!(player.next_due_ms(), None);
    assert_eq!(rendered_words(&player), ["one", "one", "two", "three"]);
    // The last word stays on the sink at the end.
    assert_eq!(player.sink().clears, 0);
    assert_eq!(player.tick(10_000), TickResult::NoChange);
}

#[test]
fn schedule_uses_the_pacing_penalties() {
    let mut player = player_with("Stop! go", 400);
    player.start(0);
    // 150 + 37.5, rounded to the nearest millisecond.
    assert_eq!(player.next_due_ms(), Some(188));

    let mut player = player_with("elephant go", 400);
    player.start(0);
    assert_eq!(player.next_due_ms(), Some(190));
}

#[test]
fn stop_preserves_the_position_and_cancels_the_timer() {
    let mut player = player_with("one two three", 400);
    player.start(0);
    player.tick(150);
    player.stop();

    assert_eq!(player.position(), 1);
    assert!(!player.is_running());
    assert_eq!(player.next_due_ms(), None);
    assert_eq!(player.tick(10_000), TickResult::NoChange);
}

#[test]
fn stop_then_start_leaves_one_pending_advancement() {
    let mut player = player_with("one two three", 400);
    player.start(0);
    player.stop();
    player.start(200);

    assert_eq!(player.next_due_ms(), Some(350));
    assert_eq!(player.tick(349), TickResult::NoChange);
    assert_eq!(player.tick(350), TickResult::Advanced);
    assert_eq!(player.position(), 1);
}

#[test]
fn load_while_running_cancels_the_inflight_advancement() {
    let mut player = player_with("one two three", 400);
    player.start(0);
    player.load_text("fresh words");

    assert_eq!(player.position(), 0);
    assert!(!player.is_running());
    assert_eq!(player.next_due_ms(), None);
    assert_eq!(rendered_words(&player).last(), Some(&"fresh"));
    // The old deadline must not fire against the new sequence.
    assert_eq!(player.tick(10_000), TickResult::NoChange);
}

#[test]
fn change_rate_while_running_reschedules_without_rerender() {
    let mut player = player_with("cat dog", 400);
    player.start(0);
    let renders = player.sink().rendered.len();

    player.change_rate(200, 50);
    assert_eq!(player.next_due_ms(), Some(350));
    assert_eq!(player.sink().rendered.len(), renders);
    assert_eq!(player.words_per_minute(), 200);
}

#[test]
fn change_rate_while_idle_waits_for_start() {
    let mut player = player_with("cat dog", 400);
    player.change_rate(100, 0);
    assert_eq!(player.next_due_ms(), None);

    player.start(0);
    assert_eq!(player.next_due_ms(), Some(600));
}

#[test]
fn change_rate_clamps_low_values() {
    let mut player = player_with("cat dog", 400);
    player.change_rate(10, 0);
    assert_eq!(player.words_per_minute(), MIN_WPM);

    player.start(0);
    assert_eq!(player.next_due_ms(), Some(1_200));
}

#[test]
fn set_position_clamps_and_renders_the_target() {
    let mut player = player_with("one two three", 400);
    player.set_position(2);
    assert_eq!(player.position(), 2);
    assert_eq!(rendered_words(&player).last(), Some(&"three"));
    assert!(!player.is_running());

    player.set_position(99);
    assert_eq!(player.position(), 3);
    assert!(!player.is_running());
}

#[test]
fn set_position_to_the_end_cancels_playback() {
    let mut player = player_with("one two three", 400);
    player.start(0);
    player.set_position(player.word_count());

    assert!(!player.is_running());
    assert_eq!(player.next_due_ms(), None);
    assert_eq!(player.tick(10_000), TickResult::NoChange);
}

#[test]
fn start_at_the_terminal_position_is_a_noop() {
    let mut player = player_with("one two", 400);
    player.start(0);
    player.tick(150);
    player.tick(300);
    assert_eq!(player.position(), 2);

    player.start(1_000);
    assert!(!player.is_running());

    // Rewinding makes the sequence playable again.
    player.set_position(0);
    player.start(1_000);
    assert!(player.is_running());
    assert_eq!(player.next_due_ms(), Some(1_150));
}

#[test]
fn current_word_is_none_at_the_terminal_position() {
    let mut player = player_with("one", 400);
    assert_eq!(player.current_word(), Some("one"));
    player.set_position(1);
    assert_eq!(player.current_word(), None);
}
