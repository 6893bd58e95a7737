//! Phrase-rotation typing effect for the landing hero.
//!
//! A `Typewriter` owns a shuffled phrase pool and a single pending timer.
//! Each tick applies one transition (append a character, hold the full
//! phrase, delete a character, or advance to the next phrase) and reschedules
//! itself with the delay the transition asks for. The state machine itself
//! is plain Rust with no timer or DOM dependency, so the whole cycle is
//! testable off the browser.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

/// Delay before the next tick while typing forward.
pub const TYPE_DELAY_MS: u32 = 75;
/// Delay while deleting. Slightly faster than typing on purpose.
pub const DELETE_DELAY_MS: u32 = 70;
/// Pause on a fully typed phrase before deletion starts.
pub const HOLD_DELAY_MS: u32 = 1_000;

/// Fixed set of phrases the effect cycles through. Immutable once built.
#[derive(Debug, Clone)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    /// Panics on an empty pool; callers must supply at least one phrase.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        assert!(!phrases.is_empty(), "phrase pool must not be empty");
        Self { phrases }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn phrase(&self, index: usize) -> &str {
        &self.phrases[index]
    }
}

/// A permutation of pool positions, drawn once per engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledOrder {
    indices: Vec<usize>,
}

impl ShuffledOrder {
    /// Fair Fisher-Yates permutation of `0..len`.
    pub fn shuffle<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(rng);
        Self { indices }
    }

    /// Builds a fixed order. Panics unless `indices` is a permutation of
    /// `0..indices.len()`.
    pub fn from_indices(indices: Vec<usize>) -> Self {
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert!(
            sorted.iter().copied().eq(0..indices.len()),
            "indices must be a permutation of 0..{}",
            indices.len()
        );
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn pool_index(&self, position: usize) -> usize {
        self.indices[position]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

/// The three modes are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingMode {
    Typing,
    HoldingFull,
    Deleting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypingState {
    /// Position within the shuffled order, always `< order.len()`.
    pub phrase_index: usize,
    /// Always a prefix of the current shuffled phrase.
    pub text: String,
    pub mode: TypingMode,
}

impl TypingState {
    fn new() -> Self {
        Self {
            phrase_index: 0,
            text: String::new(),
            mode: TypingMode::Typing,
        }
    }
}

/// The timer-free state machine. `tick()` applies exactly one transition
/// and reports how long to wait before the next one.
#[derive(Debug)]
pub struct TypewriterEngine {
    pool: PhrasePool,
    order: ShuffledOrder,
    state: TypingState,
}

impl TypewriterEngine {
    pub fn new<R: Rng>(pool: PhrasePool, rng: &mut R) -> Self {
        let order = ShuffledOrder::shuffle(pool.len(), rng);
        Self::with_order(pool, order)
    }

    /// Panics if `order` does not cover the whole pool.
    pub fn with_order(pool: PhrasePool, order: ShuffledOrder) -> Self {
        assert_eq!(pool.len(), order.len(), "order must cover the whole pool");
        Self {
            pool,
            order,
            state: TypingState::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    pub fn order(&self) -> &ShuffledOrder {
        &self.order
    }

    pub fn current_phrase(&self) -> &str {
        self.pool.phrase(self.order.pool_index(self.state.phrase_index))
    }

    /// Applies one transition and returns the delay until the next tick.
    pub fn tick(&mut self) -> u32 {
        match self.state.mode {
            TypingMode::Typing => {
                let phrase = self.pool.phrase(self.order.pool_index(self.state.phrase_index));
                match phrase[self.state.text.len()..].chars().next() {
                    Some(c) => {
                        self.state.text.push(c);
                        TYPE_DELAY_MS
                    }
                    None => {
                        self.state.mode = TypingMode::HoldingFull;
                        HOLD_DELAY_MS
                    }
                }
            }
            TypingMode::HoldingFull => {
                self.state.mode = TypingMode::Deleting;
                DELETE_DELAY_MS
            }
            TypingMode::Deleting => {
                if self.state.text.pop().is_some() {
                    DELETE_DELAY_MS
                } else {
                    self.state.phrase_index = (self.state.phrase_index + 1) % self.order.len();
                    self.state.mode = TypingMode::Typing;
                    TYPE_DELAY_MS
                }
            }
        }
    }
}

struct Inner {
    engine: TypewriterEngine,
    pending: Option<Timeout>,
    stopped: bool,
    on_text: Callback<String>,
}

/// Scheduling wrapper around [`TypewriterEngine`]. Owns the pending tick;
/// `stop()` (or dropping the writer) cancels it, after which no further
/// text updates are emitted.
pub struct Typewriter {
    inner: Rc<RefCell<Inner>>,
}

impl Typewriter {
    pub fn new<R: Rng>(pool: PhrasePool, rng: &mut R, on_text: Callback<String>) -> Self {
        let engine = TypewriterEngine::new(pool, rng);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                engine,
                pending: None,
                stopped: false,
                on_text,
            })),
        }
    }

    pub fn start(&self) {
        schedule(self.inner.clone(), TYPE_DELAY_MS);
    }

    /// Cancels the pending tick. Guaranteed final: a stopped writer never
    /// reschedules.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.stopped = true;
        inner.pending = None;
    }

    pub fn is_running(&self) -> bool {
        let inner = self.inner.borrow();
        !inner.stopped && inner.pending.is_some()
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(inner: Rc<RefCell<Inner>>, delay: u32) {
    if inner.borrow().stopped {
        return;
    }
    let target = inner.clone();
    let timeout = Timeout::new(delay, move || {
        let (text, next_delay, on_text) = {
            let mut inner = target.borrow_mut();
            let next_delay = inner.engine.tick();
            (inner.engine.text().to_string(), next_delay, inner.on_text.clone())
        };
        on_text.emit(text);
        schedule(target, next_delay);
    });
    inner.borrow_mut().pending = Some(timeout);
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub phrases: &'static [&'static str],
}

/// Displays the rotating phrase with a blinking cursor. Each mount draws a
/// fresh shuffle; unmounting stops the writer before the next tick fires.
#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |phrases: &&'static [&'static str]| {
                let pool = PhrasePool::new(phrases.iter().copied());
                let mut rng = SmallRng::seed_from_u64(web_sys::js_sys::Date::now() as u64);
                let writer = Typewriter::new(
                    pool,
                    &mut rng,
                    Callback::from(move |t: String| text.set(t)),
                );
                writer.start();
                gloo_console::log!(format!("typewriter started, {} phrases", phrases.len()));
                move || {
                    writer.stop();
                }
            },
            props.phrases,
        );
    }

    html! {
        <span class="typewriter">
            <style>
                {r#"
                    .typewriter-cursor {
                        display: inline-block;
                        margin-left: 2px;
                        font-weight: 300;
                        animation: cursor-blink 0.9s step-end infinite;
                    }
                    @keyframes cursor-blink {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0; }
                    }
                "#}
            </style>
            <span class="typewriter-text">{(*text).clone()}</span>
            <span class="typewriter-cursor">{"|"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(phrases: &[&str]) -> PhrasePool {
        PhrasePool::new(phrases.iter().copied())
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_pool() {
        let mut rng = SmallRng::seed_from_u64(42);
        for len in 1..=18 {
            let order = ShuffledOrder::shuffle(len, &mut rng);
            assert_eq!(order.len(), len);
            let mut sorted = order.as_slice().to_vec();
            sorted.sort_unstable();
            let expected: Vec<usize> = (0..len).collect();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    #[should_panic(expected = "phrase pool must not be empty")]
    fn empty_pool_is_rejected() {
        PhrasePool::new(Vec::<String>::new());
    }

    #[test]
    #[should_panic(expected = "permutation")]
    fn duplicate_indices_are_rejected() {
        ShuffledOrder::from_indices(vec![0, 0, 1]);
    }

    #[test]
    fn text_is_always_a_prefix_of_the_current_phrase() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut engine =
            TypewriterEngine::new(pool(&["Restaurant.", "Gym.", "Cafe.", "Salon."]), &mut rng);
        for _ in 0..500 {
            engine.tick();
            let text = engine.state().text.clone();
            let phrase = engine.current_phrase();
            assert!(
                phrase.starts_with(&text),
                "{:?} is not a prefix of {:?}",
                text,
                phrase
            );
        }
    }

    #[test]
    fn one_cycle_is_n_type_ticks_one_hold_then_n_delete_ticks() {
        let mut engine =
            TypewriterEngine::with_order(pool(&["Gym."]), ShuffledOrder::from_indices(vec![0]));
        let n = "Gym.".len();

        for i in 1..=n {
            assert_eq!(engine.tick(), TYPE_DELAY_MS);
            assert_eq!(engine.text(), &"Gym."[..i]);
        }
        assert_eq!(engine.text(), "Gym.");

        assert_eq!(engine.tick(), HOLD_DELAY_MS);
        assert_eq!(engine.state().mode, TypingMode::HoldingFull);
        assert_eq!(engine.text(), "Gym.");

        assert_eq!(engine.tick(), DELETE_DELAY_MS);
        assert_eq!(engine.state().mode, TypingMode::Deleting);
        assert_eq!(engine.text(), "Gym.");

        for i in (0..n).rev() {
            assert_eq!(engine.tick(), DELETE_DELAY_MS);
            assert_eq!(engine.text(), &"Gym."[..i]);
        }
        assert_eq!(engine.text(), "");

        assert_eq!(engine.tick(), TYPE_DELAY_MS);
        assert_eq!(engine.state().mode, TypingMode::Typing);
        assert_eq!(engine.state().phrase_index, 0);
    }

    #[test]
    fn index_advances_by_one_modulo_pool_length() {
        let mut engine = TypewriterEngine::with_order(
            pool(&["One.", "Two.", "Six."]),
            ShuffledOrder::from_indices(vec![0, 1, 2]),
        );
        // Every phrase is 4 characters, so a full cycle is 4 type ticks,
        // the hold entry and exit, 4 delete ticks and the advance: 11 ticks.
        for expected in [1usize, 2, 0, 1] {
            for _ in 0..11 {
                engine.tick();
            }
            assert_eq!(engine.state().phrase_index, expected);
            assert_eq!(engine.text(), "");
            assert_eq!(engine.state().mode, TypingMode::Typing);
        }
    }

    #[test]
    fn fixed_order_produces_the_expected_text_sequence() {
        let order = ShuffledOrder::from_indices(vec![1, 0]); // "Gym." first, then "Cafe."
        let mut engine = TypewriterEngine::with_order(pool(&["Cafe.", "Gym."]), order);

        let mut texts = Vec::new();
        let mut delays = Vec::new();
        for _ in 0..24 {
            delays.push(engine.tick());
            texts.push(engine.text().to_string());
        }

        // Collapse the no-change ticks (hold entry/exit, index advance).
        texts.dedup();
        assert_eq!(
            texts,
            vec![
                "G", "Gy", "Gym", "Gym.", "Gym", "Gy", "G", "", "C", "Ca", "Caf", "Cafe", "Cafe.",
                "Cafe", "Caf", "Ca", "C", ""
            ]
        );

        // The hold sits between the last append and the first deletion.
        assert_eq!(delays[3], TYPE_DELAY_MS);
        assert_eq!(delays[4], HOLD_DELAY_MS);
        assert_eq!(delays[5], DELETE_DELAY_MS);
        assert_eq!(delays[10], TYPE_DELAY_MS); // advance to "Cafe."
        assert_eq!(delays[16], HOLD_DELAY_MS);
    }

    #[test]
    fn multibyte_phrases_advance_one_character_per_tick() {
        let mut engine =
            TypewriterEngine::with_order(pool(&["Café."]), ShuffledOrder::from_indices(vec![0]));
        let steps = ["C", "Ca", "Caf", "Café", "Café."];
        for expected in steps {
            assert_eq!(engine.tick(), TYPE_DELAY_MS);
            assert_eq!(engine.text(), expected);
        }
        assert_eq!(engine.tick(), HOLD_DELAY_MS);
    }

    #[test]
    fn same_seed_reproduces_the_order_across_instances() {
        let phrases = ["A.", "B.", "C.", "D.", "E.", "F.", "G.", "H."];
        let mut rng1 = SmallRng::seed_from_u64(1);
        let mut rng2 = SmallRng::seed_from_u64(1);
        let first = TypewriterEngine::new(pool(&phrases), &mut rng1);
        let second = TypewriterEngine::new(pool(&phrases), &mut rng2);
        assert_eq!(first.order(), second.order());

        // A separate instance draws its own order, still a valid permutation.
        let mut rng3 = SmallRng::seed_from_u64(999);
        let third = TypewriterEngine::new(pool(&phrases), &mut rng3);
        let mut sorted = third.order().as_slice().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..phrases.len()).collect::<Vec<_>>());
    }

    #[test]
    fn stopped_writer_never_rearms() {
        let mut rng = SmallRng::seed_from_u64(5);
        let writer = Typewriter::new(pool(&["Gym."]), &mut rng, Callback::from(|_: String| {}));
        writer.stop();
        writer.start();
        assert!(!writer.is_running());
    }
}
