use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use yew::prelude::*;

use crate::motion::timers::{GlooTimers, TimerService};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Erasing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub type_delay_ms: u32,
    pub erase_delay_ms: u32,
    /// Wait after the phrase is complete before entering `Holding`.
    pub hold_delay_ms: u32,
    /// Time spent in `Holding` before erasing starts.
    pub dwell_ms: u32,
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_delay_ms: 70,
            erase_delay_ms: 45,
            hold_delay_ms: 1100,
            dwell_ms: 500,
            looping: true,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

/// What the display layer renders.
#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterFrame {
    pub text: String,
    pub phrase_index: usize,
    pub phase: Phase,
}

impl TypewriterFrame {
    pub fn initial() -> Self {
        Self {
            text: String::new(),
            phrase_index: 0,
            phase: Phase::Typing,
        }
    }
}

/// Typing state machine. Every call to [`Typewriter::advance`] applies one
/// transition; [`Typewriter::next_delay`] says how long the host should wait
/// before the next one. The displayed text is stored as a character count so
/// it is always a prefix of the current phrase.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    phrase_index: usize,
    shown_chars: usize,
    phase: Phase,
    halted: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            config,
            phrase_index: 0,
            shown_chars: 0,
            phase: Phase::Typing,
            halted: false,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn phrase_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }

    pub fn text(&self) -> String {
        self.phrases[self.phrase_index]
            .chars()
            .take(self.shown_chars)
            .collect()
    }

    pub fn frame(&self) -> TypewriterFrame {
        TypewriterFrame {
            text: self.text(),
            phrase_index: self.phrase_index,
            phase: self.phase,
        }
    }

    /// Milliseconds until the next transition, `None` once halted.
    pub fn next_delay(&self) -> Option<u32> {
        if self.halted {
            return None;
        }
        let delay = match self.phase {
            Phase::Typing if self.shown_chars < self.phrase_len() => self.config.type_delay_ms,
            Phase::Typing => self.config.hold_delay_ms,
            Phase::Holding => self.config.dwell_ms,
            Phase::Erasing if self.shown_chars > 0 => self.config.erase_delay_ms,
            Phase::Erasing => 0,
        };
        Some(delay)
    }

    /// Applies one transition. Returns false when halted.
    pub fn advance(&mut self) -> bool {
        if self.halted {
            return false;
        }
        match self.phase {
            Phase::Typing => {
                if self.shown_chars < self.phrase_len() {
                    self.shown_chars += 1;
                } else {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Erasing,
            Phase::Erasing => {
                self.shown_chars = self.shown_chars.saturating_sub(1);
                if self.shown_chars == 0 {
                    self.next_phrase();
                }
            }
        }
        true
    }

    fn next_phrase(&mut self) {
        let last = self.phrases.len() - 1;
        self.phase = Phase::Typing;
        if self.config.looping {
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        } else if self.phrase_index < last {
            self.phrase_index += 1;
        } else {
            self.halted = true;
            return;
        }
        debug!("typewriter moved to phrase {}", self.phrase_index);
    }
}

struct DriverState<T: TimerService> {
    timers: T,
    machine: Typewriter,
    pending: Option<T::Handle>,
    on_frame: Box<dyn Fn(TypewriterFrame)>,
}

/// Runs a [`Typewriter`] on a [`TimerService`].
///
/// Exactly one timer is pending at a time. Scheduling always replaces (and so
/// cancels) the previous handle, and timer callbacks only hold a weak reference,
/// so dropping the driver stops every further update.
pub struct TypewriterDriver<T: TimerService + 'static> {
    state: Rc<RefCell<DriverState<T>>>,
}

impl<T: TimerService + 'static> TypewriterDriver<T> {
    pub fn start(timers: T, machine: Typewriter, on_frame: impl Fn(TypewriterFrame) + 'static) -> Self {
        let state = Rc::new(RefCell::new(DriverState {
            timers,
            machine,
            pending: None,
            on_frame: Box::new(on_frame),
        }));
        Self::schedule(&state);
        Self { state }
    }

    pub fn frame(&self) -> TypewriterFrame {
        self.state.borrow().machine.frame()
    }

    fn schedule(state: &Rc<RefCell<DriverState<T>>>) {
        let mut guard = state.borrow_mut();
        // Drop the stale handle first so two timers never overlap.
        let stale = guard.pending.take();
        drop(stale);
        let Some(delay) = guard.machine.next_delay() else {
            debug!("typewriter halted on phrase {}", guard.machine.phrase_index());
            return;
        };
        let weak: Weak<RefCell<DriverState<T>>> = Rc::downgrade(state);
        let handle = guard.timers.schedule(
            delay,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    Self::fire(&state);
                }
            }),
        );
        guard.pending = Some(handle);
    }

    fn fire(state: &Rc<RefCell<DriverState<T>>>) {
        let frame = {
            let mut guard = state.borrow_mut();
            let fired = guard.pending.take();
            drop(fired);
            guard.machine.advance();
            guard.machine.frame()
        };
        (state.borrow().on_frame)(frame);
        Self::schedule(state);
    }
}

impl<T: TimerService + 'static> Drop for TypewriterDriver<T> {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.state.try_borrow_mut() {
            guard.pending = None;
        }
    }
}

/// Drives a typewriter over `phrases` for as long as the calling component is mounted.
#[hook]
pub fn use_typewriter(phrases: &'static [&'static str], config: TypewriterConfig) -> TypewriterFrame {
    let frame = use_state(TypewriterFrame::initial);

    {
        let setter = frame.setter();
        use_effect_with_deps(
            move |(phrases, config)| {
                let driver = match Typewriter::new(phrases.iter().copied(), *config) {
                    Ok(machine) => {
                        debug!("typewriter mounted with {} phrases", phrases.len());
                        Some(TypewriterDriver::start(GlooTimers, machine, move |next| {
                            setter.set(next)
                        }))
                    }
                    Err(err) => {
                        warn!("typewriter disabled: {}", err);
                        None
                    }
                };
                move || {
                    if driver.is_some() {
                        debug!("typewriter unmounted");
                    }
                    drop(driver);
                }
            },
            (phrases, config),
        );
    }

    (*frame).clone()
}

/// Width in characters of the longest phrase, used to reserve space for the heading.
pub fn longest_phrase_chars(phrases: &[&str]) -> usize {
    phrases
        .iter()
        .map(|phrase| phrase.chars().count())
        .max()
        .unwrap_or(0)
}

/// Splits typed text into the part covered by `accent` and the remainder.
/// Only the characters already typed are returned, so the result never runs
/// ahead of the animation.
pub fn split_accent<'a>(text: &'a str, accent: &str) -> (&'a str, &'a str) {
    let accent_chars = accent.chars().count();
    let boundary = text
        .char_indices()
        .nth(accent_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    text.split_at(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timers::manual::ManualTimers;

    fn quick(looping: bool) -> TypewriterConfig {
        TypewriterConfig {
            type_delay_ms: 10,
            erase_delay_ms: 5,
            hold_delay_ms: 100,
            dwell_ms: 50,
            looping,
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<TypewriterFrame>>>, impl Fn(TypewriterFrame)) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        (frames, move |frame: TypewriterFrame| sink.borrow_mut().push(frame))
    }

    /// Advances until `done` holds, giving up after a bounded number of steps.
    fn step_until(machine: &mut Typewriter, done: impl Fn(&Typewriter) -> bool) {
        for _ in 0..1_000 {
            if done(machine) {
                return;
            }
            machine.advance();
        }
        panic!("typewriter stuck in {:?} on phrase {}", machine.phase(), machine.phrase_index());
    }

    /// Runs one phrase from empty through typing, holding and erasing, ending
    /// on the empty `Typing` frame of whatever phrase comes next.
    fn run_cycle(machine: &mut Typewriter) {
        step_until(machine, |m| m.phase() == Phase::Erasing);
        step_until(machine, |m| m.phase() == Phase::Typing);
        assert_eq!(machine.text(), "");
    }

    #[test]
    fn rejects_empty_phrase_list() {
        let phrases: Vec<String> = Vec::new();
        assert_eq!(
            Typewriter::new(phrases, TypewriterConfig::default()),
            Err(TypewriterError::NoPhrases)
        );
    }

    #[test]
    fn starts_empty_and_typing() {
        let machine = Typewriter::new(["Get Found."], TypewriterConfig::default()).unwrap();
        assert_eq!(machine.frame(), TypewriterFrame::initial());
        assert_eq!(machine.next_delay(), Some(70));
    }

    #[test]
    fn types_holds_then_erases() {
        let mut machine = Typewriter::new(["Go", "Up"], quick(true)).unwrap();

        machine.advance();
        assert_eq!(machine.text(), "G");
        machine.advance();
        assert_eq!(machine.text(), "Go");
        assert_eq!(machine.phase(), Phase::Typing);
        assert_eq!(machine.next_delay(), Some(100));

        machine.advance();
        assert_eq!(machine.phase(), Phase::Holding);
        assert_eq!(machine.next_delay(), Some(50));

        machine.advance();
        assert_eq!(machine.phase(), Phase::Erasing);
        assert_eq!(machine.next_delay(), Some(5));

        machine.advance();
        assert_eq!(machine.text(), "G");
        machine.advance();
        assert_eq!(machine.frame(), TypewriterFrame {
            text: String::new(),
            phrase_index: 1,
            phase: Phase::Typing,
        });
    }

    #[test]
    fn text_is_always_a_prefix_of_the_current_phrase() {
        let phrases = ["Get Found.", "2–4 pieces/mo", "", "Grow Smarter with SEO."];
        let mut machine = Typewriter::new(phrases, quick(true)).unwrap();
        for _ in 0..500 {
            let frame = machine.frame();
            assert!(phrases[frame.phrase_index].starts_with(&frame.text));
            machine.advance();
        }
    }

    #[test]
    fn looping_wraps_back_to_first_phrase() {
        let mut machine = Typewriter::new(["a", "b", "c"], quick(true)).unwrap();
        run_cycle(&mut machine);
        assert_eq!(machine.phrase_index(), 1);
        run_cycle(&mut machine);
        run_cycle(&mut machine);
        assert_eq!(machine.phrase_index(), 0);
        assert!(!machine.is_halted());
    }

    #[test]
    fn single_phrase_loops_onto_itself() {
        let mut machine = Typewriter::new(["solo"], quick(true)).unwrap();
        for _ in 0..3 {
            run_cycle(&mut machine);
            assert_eq!(machine.phrase_index(), 0);
            assert_eq!(machine.phase(), Phase::Typing);
            assert!(!machine.is_halted());
            assert!(machine.next_delay().is_some());
        }
        machine.advance();
        assert_eq!(machine.text(), "s");
    }

    #[test]
    fn non_looping_skips_through_empty_phrases() {
        let mut machine = Typewriter::new(["", "x", ""], quick(false)).unwrap();
        run_cycle(&mut machine);
        assert_eq!(machine.phrase_index(), 1);
        run_cycle(&mut machine);
        run_cycle(&mut machine);
        assert!(machine.is_halted());
        assert_eq!(machine.phrase_index(), 2);
    }

    #[test]
    fn non_looping_advances_without_wrapping() {
        let mut machine = Typewriter::new(["a", "b"], quick(false)).unwrap();
        run_cycle(&mut machine);
        assert_eq!(machine.phrase_index(), 1);
        assert!(!machine.is_halted());
    }

    #[test]
    fn non_looping_halts_after_last_phrase_is_erased() {
        let mut machine = Typewriter::new(["a", "b"], quick(false)).unwrap();
        run_cycle(&mut machine);
        run_cycle(&mut machine);

        assert!(machine.is_halted());
        assert_eq!(machine.phrase_index(), 1);
        assert_eq!(machine.phase(), Phase::Typing);
        assert_eq!(machine.next_delay(), None);
        assert!(!machine.advance());
        assert_eq!(machine.text(), "");
    }

    #[test]
    fn driver_follows_configured_timing() {
        let timers = ManualTimers::default();
        let (frames, sink) = recorder();
        let machine = Typewriter::new(["Hi", "Yo"], quick(true)).unwrap();
        let _driver = TypewriterDriver::start(timers.clone(), machine, sink);

        timers.advance(9);
        assert!(frames.borrow().is_empty());
        timers.advance(1);
        assert_eq!(frames.borrow().last().unwrap().text, "H");

        // "Hi" at 20, holding at 120, erasing at 170, erased at 180
        timers.advance(170);
        assert_eq!(timers.now(), 180);
        let last = frames.borrow().last().cloned().unwrap();
        assert_eq!(last.phrase_index, 1);
        assert_eq!(last.phase, Phase::Typing);
        assert_eq!(last.text, "");
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn driver_keeps_a_single_pending_timer() {
        let timers = ManualTimers::default();
        let (_frames, sink) = recorder();
        let machine = Typewriter::new(["abc", "de"], quick(true)).unwrap();
        let _driver = TypewriterDriver::start(timers.clone(), machine, sink);

        for _ in 0..100 {
            assert_eq!(timers.pending(), 1);
            assert!(timers.fire_next());
        }
    }

    #[test]
    fn driver_stops_scheduling_once_halted() {
        let timers = ManualTimers::default();
        let (frames, sink) = recorder();
        let machine = Typewriter::new(["ab"], quick(false)).unwrap();
        let driver = TypewriterDriver::start(timers.clone(), machine, sink);

        timers.advance(10_000);
        assert_eq!(timers.pending(), 0);
        let count = frames.borrow().len();
        timers.advance(10_000);
        assert_eq!(frames.borrow().len(), count);
        assert_eq!(driver.frame().phrase_index, 0);
    }

    #[test]
    fn dropping_driver_mid_animation_stops_updates() {
        let timers = ManualTimers::default();
        let (frames, sink) = recorder();
        let machine = Typewriter::new(["Get Found.", "Get Leads."], quick(true)).unwrap();
        let driver = TypewriterDriver::start(timers.clone(), machine, sink);

        timers.advance(35);
        let seen = frames.borrow().len();
        assert_eq!(seen, 3);

        drop(driver);
        assert_eq!(timers.pending(), 0);
        timers.advance(60_000);
        assert_eq!(frames.borrow().len(), seen);
    }

    #[test]
    fn longest_phrase_counts_characters() {
        assert_eq!(longest_phrase_chars(&["Get Found.", "Grow Smarter with SEO."]), 22);
        assert_eq!(longest_phrase_chars(&["2–4"]), 3);
        assert_eq!(longest_phrase_chars(&[]), 0);
    }

    #[test]
    fn accent_split_never_runs_ahead_of_typed_text() {
        assert_eq!(split_accent("Grow Sm", "Grow Smarter"), ("Grow Sm", ""));
        assert_eq!(
            split_accent("Grow Smarter with", "Grow Smarter"),
            ("Grow Smarter", " with")
        );
        assert_eq!(split_accent("", "Grow Smarter"), ("", ""));
    }
}
