use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::effects::visibility::use_in_view;

/// Placeholder alphabet the unrevealed tail is drawn from.
const SCRAMBLE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890@#$%&";

/// Timer cadence for the decode animation. One character locks in every
/// three ticks.
pub const TICK_MS: u32 = 30;
const TICKS_PER_CHAR: u32 = 3;

/// Tiny xorshift generator so the scramble frames are deterministic and the
/// decoder stays testable off the browser.
pub(crate) struct XorShift(u32);

impl XorShift {
    pub(crate) fn new(seed: u32) -> Self {
        // xorshift degenerates on a zero state
        Self(seed.max(1))
    }

    pub(crate) fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    pub(crate) fn pick(&mut self, set: &[u8]) -> char {
        set[self.next() as usize % set.len()] as char
    }
}

/// Drives the decode effect: every tick renders a frame whose locked prefix
/// grows by one character every `TICKS_PER_CHAR` ticks while the tail stays
/// scrambled. The reveal cursor is shared by all characters, so a locked
/// character never reverts.
pub struct TextDecoder {
    chars: Vec<char>,
    ticks: u32,
    rng: XorShift,
}

impl TextDecoder {
    pub fn new(text: &str) -> Self {
        let seed = text
            .bytes()
            .fold(0x9E37_79B9u32, |acc, b| acc.rotate_left(5) ^ u32::from(b));
        Self {
            chars: text.chars().collect(),
            ticks: 0,
            rng: XorShift::new(seed),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.ticks >= self.chars.len() as u32 * TICKS_PER_CHAR
    }

    /// Advances one tick and renders the frame for it. Calling after
    /// completion keeps returning the final text.
    pub fn tick(&mut self) -> String {
        if self.is_complete() {
            return self.chars.iter().collect();
        }
        self.ticks += 1;
        let cursor = (self.ticks / TICKS_PER_CHAR) as usize;
        let rng = &mut self.rng;
        self.chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i < cursor { *c } else { rng.pick(SCRAMBLE_CHARSET) })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct DecodedTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Heading text that resolves out of scrambled noise the first time it
/// scrolls into view. Shows the final text until then, so nothing flashes
/// for users who never reach it. One-shot: later visibility changes are
/// ignored.
#[function_component(DecodedText)]
pub fn decoded_text(props: &DecodedTextProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "-50px");
    let display = use_state(|| props.text.to_string());
    let started = use_mut_ref(|| false);
    let timer: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    {
        let display = display.clone();
        let text = props.text.to_string();
        let started = started.clone();
        let timer = timer.clone();
        use_effect_with_deps(
            move |&in_view| {
                if in_view && !*started.borrow() && !text.is_empty() {
                    *started.borrow_mut() = true;
                    let mut decoder = TextDecoder::new(&text);
                    let handle = timer.clone();
                    let interval = Interval::new(TICK_MS, move || {
                        display.set(decoder.tick());
                        if decoder.is_complete() {
                            if let Some(interval) = handle.borrow_mut().take() {
                                interval.cancel();
                            }
                        }
                    });
                    *timer.borrow_mut() = Some(interval);
                }
                move || {
                    if let Some(interval) = timer.borrow_mut().take() {
                        interval.cancel();
                    }
                }
            },
            in_view,
        );
    }

    html! {
        <span ref={node} class={props.class.clone()}>{ (*display).clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(text: &str) -> (Vec<String>, TextDecoder) {
        let mut decoder = TextDecoder::new(text);
        let mut frames = Vec::new();
        while !decoder.is_complete() {
            frames.push(decoder.tick());
            assert!(frames.len() <= 10_000, "decoder failed to terminate");
        }
        (frames, decoder)
    }

    #[test]
    fn resolves_to_the_exact_final_text() {
        let (frames, _) = run_to_completion("HEALTHSPAN");
        assert_eq!(frames.last().unwrap(), "HEALTHSPAN");
    }

    #[test]
    fn takes_three_ticks_per_character() {
        let (frames, _) = run_to_completion("Summit");
        assert_eq!(frames.len(), 3 * "Summit".len());
    }

    #[test]
    fn empty_text_completes_without_ticking() {
        let decoder = TextDecoder::new("");
        assert!(decoder.is_complete());
    }

    #[test]
    fn locked_characters_never_revert() {
        let text = "Longevity 2026";
        let final_chars: Vec<char> = text.chars().collect();
        let (frames, _) = run_to_completion(text);
        for (tick, frame) in frames.iter().enumerate() {
            let cursor = ((tick as u32 + 1) / TICKS_PER_CHAR) as usize;
            let frame_chars: Vec<char> = frame.chars().collect();
            assert_eq!(frame_chars.len(), final_chars.len());
            assert_eq!(&frame_chars[..cursor], &final_chars[..cursor], "tick {}", tick);
        }
    }

    #[test]
    fn scrambled_tail_stays_inside_the_placeholder_alphabet() {
        let mut decoder = TextDecoder::new("zz zz");
        let frame = decoder.tick();
        for c in frame.chars() {
            assert!(
                SCRAMBLE_CHARSET.contains(&(c as u8)),
                "unexpected placeholder {:?}",
                c
            );
        }
    }

    #[test]
    fn ticking_after_completion_is_stable() {
        let (_, mut decoder) = run_to_completion("Done");
        assert_eq!(decoder.tick(), "Done");
        assert_eq!(decoder.tick(), "Done");
    }

    #[test]
    fn frames_are_deterministic_for_the_same_text() {
        let (a, _) = run_to_completion("repeatable");
        let (b, _) = run_to_completion("repeatable");
        assert_eq!(a, b);
    }
}
