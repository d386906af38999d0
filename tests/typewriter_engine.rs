mod common;

use common::ms;
use folio::platform::{Fired, TimerQueue};
use folio::ui::typewriter::{TypewriterEngine, TypewriterTiming, TypingMode, MIN_TICK};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tick;

fn timing() -> TypewriterTiming {
    TypewriterTiming {
        typing_speed: ms(100),
        deleting_speed: ms(50),
        pause: ms(2000),
    }
}

fn engine(phrases: &[&str]) -> (TypewriterEngine<Tick>, TimerQueue<Tick>) {
    let phrases = phrases.iter().map(|p| p.to_string()).collect();
    let mut timers = TimerQueue::new();
    let mut engine = TypewriterEngine::new(phrases, timing(), Tick);
    engine.mount(&mut timers);
    (engine, timers)
}

/// Fire every timer due by `until`, recording (time, text) after each.
fn run_until(
    engine: &mut TypewriterEngine<Tick>,
    timers: &mut TimerQueue<Tick>,
    until: u64,
) -> Vec<(u64, String)> {
    let mut seen = Vec::new();
    while let Some(Fired { token, .. }) = timers.pop_due(ms(until)) {
        engine.on_timer(token, timers);
        seen.push((timers.now().as_millis() as u64, engine.display_text().to_string()));
    }
    timers.advance_to(ms(until));
    seen
}

#[test]
fn types_one_character_per_typing_interval() {
    let (mut engine, mut timers) = engine(&["Rust"]);
    assert_eq!(engine.display_text(), "");

    run_until(&mut engine, &mut timers, 99);
    assert_eq!(engine.display_text(), "");
    run_until(&mut engine, &mut timers, 100);
    assert_eq!(engine.display_text(), "R");
    run_until(&mut engine, &mut timers, 400);
    assert_eq!(engine.display_text(), "Rust");
}

#[test]
fn holds_full_phrase_for_the_pause_then_deletes_faster() {
    let (mut engine, mut timers) = engine(&["ab", "c"]);
    run_until(&mut engine, &mut timers, 200);
    assert_eq!(engine.display_text(), "ab");

    // Still paused just before 200 + 2000
    run_until(&mut engine, &mut timers, 2199);
    assert_eq!(engine.display_text(), "ab");
    assert_eq!(engine.mode(), TypingMode::Typing);

    run_until(&mut engine, &mut timers, 2200);
    assert_eq!(engine.mode(), TypingMode::Deleting);
    assert_eq!(engine.display_text(), "ab");

    run_until(&mut engine, &mut timers, 2250);
    assert_eq!(engine.display_text(), "a");
    run_until(&mut engine, &mut timers, 2300);
    assert_eq!(engine.display_text(), "");
    assert_eq!(engine.phrase_index(), 1);
    assert_eq!(engine.mode(), TypingMode::Typing);

    run_until(&mut engine, &mut timers, 2400);
    assert_eq!(engine.display_text(), "c");
}

#[test]
fn two_phrase_cycle_repeats_every_eight_ticks() {
    let (mut engine, mut timers) = engine(&["A", "BB"]);
    let seen = run_until(&mut engine, &mut timers, 4550);

    let expected: Vec<(u64, String)> = [
        (100, "A"),
        (2100, "A"),
        (2150, ""),
        (2250, "B"),
        (2350, "BB"),
        (4350, "BB"),
        (4400, "B"),
        (4450, ""),
        (4550, "A"),
    ]
    .iter()
    .map(|(t, s)| (*t, s.to_string()))
    .collect();
    assert_eq!(seen, expected);
    assert_eq!(engine.phrase_index(), 0);
}

#[test]
fn display_is_always_a_prefix_of_the_current_phrase() {
    let phrases = ["Software Engineer", "Data Scientist", "University Student"];
    let (mut engine, mut timers) = engine(&phrases);
    for _ in 0..400 {
        let Some(Fired { token, .. }) = timers.pop_due(ms(u64::MAX / 2)) else {
            panic!("typewriter stopped scheduling");
        };
        engine.on_timer(token, &mut timers);
        let phrase = phrases[engine.phrase_index()];
        assert!(phrase.starts_with(engine.display_text()));
        assert_eq!(timers.pending_count(), 1);
    }
}

#[test]
fn empty_phrase_list_stays_blank_and_schedules_nothing() {
    let (mut engine, mut timers) = engine(&[]);
    assert_eq!(engine.display_text(), "");
    assert!(!engine.is_scheduled());
    assert_eq!(timers.pending_count(), 0);
    assert!(run_until(&mut engine, &mut timers, 10_000).is_empty());
}

#[test]
fn dispose_cancels_pending_timer() {
    let (mut engine, mut timers) = engine(&["Rust"]);
    run_until(&mut engine, &mut timers, 100);
    assert!(engine.is_scheduled());

    engine.dispose();
    assert!(engine.is_disposed());
    assert_eq!(timers.pending_count(), 0);
    assert!(run_until(&mut engine, &mut timers, 10_000).is_empty());
    assert_eq!(engine.display_text(), "R");
}

#[test]
fn stale_token_is_ignored() {
    let (mut engine, mut timers) = engine(&["Rust"]);
    let Some(fired) = timers.pop_due(ms(100)) else {
        panic!("first tick missing");
    };
    assert!(engine.on_timer(fired.token, &mut timers));
    // Replaying the same token must not type again
    assert!(!engine.on_timer(fired.token, &mut timers));
    assert_eq!(engine.display_text(), "R");
}

#[test]
fn multibyte_phrases_are_typed_by_character() {
    let (mut engine, mut timers) = engine(&["héllo"]);
    run_until(&mut engine, &mut timers, 200);
    assert_eq!(engine.display_text(), "hé");
}

#[test]
fn blank_phrase_with_zero_pause_still_advances_the_clock() {
    let mut timers = TimerQueue::new();
    let timing = TypewriterTiming { pause: ms(0), ..timing() };
    let mut engine = TypewriterEngine::new(vec![String::new()], timing, Tick);
    engine.mount(&mut timers);
    assert!(timers.next_deadline() >= Some(MIN_TICK));

    let seen = run_until(&mut engine, &mut timers, 10);
    assert!(seen.len() <= 10);
    assert!(seen.iter().all(|(_, text)| text.is_empty()));
    assert_eq!(timers.now(), ms(10));
}
