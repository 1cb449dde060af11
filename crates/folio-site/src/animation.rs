//! Cosmetic animations: hero typing text and skill bar fill.

use std::time::Duration;

use serde::Serialize;

use crate::timer::Delay;

/// Words cycled by the hero typing animation.
pub const TYPING_WORDS: [&str; 7] = [
    "Reality",
    "Success",
    "Excellence",
    "Innovation",
    "Perfection",
    "Greatness",
    "Mastery",
];

const TYPE_STEP: Duration = Duration::from_millis(100);
const DELETE_STEP: Duration = Duration::from_millis(50);
const WORD_HOLD: Duration = Duration::from_millis(2000);
const WORD_GAP: Duration = Duration::from_millis(500);
const INITIAL_DELAY: Duration = Duration::from_millis(1000);

/// Typewriter effect that types and deletes each word in turn.
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    text: String,
    word: usize,
    chars: usize,
    deleting: bool,
    active: bool,
    next: Duration,
    restart: Option<Delay>,
}

impl Default for TypingAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingAnimation {
    /// Start from the first word, shown in full.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: TYPING_WORDS[0].to_owned(),
            word: 0,
            chars: 0,
            deleting: false,
            active: true,
            next: INITIAL_DELAY,
            restart: None,
        }
    }

    /// Text currently displayed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stop now and start over after `after`.
    pub fn schedule_restart(&mut self, after: Duration) {
        self.active = false;
        self.restart = Some(Delay::new(after));
    }

    pub fn tick(&mut self, mut elapsed: Duration) {
        if let Some(delay) = self.restart.as_mut() {
            let remaining = delay.remaining();
            if !delay.tick(elapsed) {
                return;
            }
            *self = Self::new();
            elapsed -= remaining;
        }
        if !self.active {
            return;
        }
        while elapsed >= self.next {
            elapsed -= self.next;
            self.next = self.step();
        }
        self.next -= elapsed;
    }

    fn step(&mut self) -> Duration {
        let word = TYPING_WORDS[self.word];
        let len = word.chars().count();
        let mut wait = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_STEP
        } else {
            self.chars += 1;
            TYPE_STEP
        };
        self.text = word.chars().take(self.chars).collect();

        if !self.deleting && self.chars == len {
            wait = WORD_HOLD;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % TYPING_WORDS.len();
            wait = WORD_GAP;
        }
        wait
    }
}

const FILL_STEPS: u32 = 50;
const FILL_STEP: Duration = Duration::from_millis(20);
const FILL_STAGGER: Duration = Duration::from_millis(100);

/// One skill bar frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillBarFrame {
    /// Bar width in percent.
    pub width: u32,
    /// Percentage label.
    pub label: u32,
}

/// Skill bar fill. Runs once per page load.
#[derive(Debug, Clone, Default)]
pub struct SkillFill {
    targets: Vec<u32>,
    elapsed: Option<Duration>,
}

impl SkillFill {
    #[must_use]
    pub fn new(targets: Vec<u32>) -> Self {
        Self {
            targets,
            elapsed: None,
        }
    }

    /// Start the fill. Later calls do nothing.
    pub fn start(&mut self) {
        if self.elapsed.is_none() && !self.targets.is_empty() {
            self.elapsed = Some(Duration::ZERO);
        }
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(total) = self.elapsed.as_mut() {
            *total += elapsed;
        }
    }

    /// Whether every bar has reached its target.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.frames()
            .iter()
            .zip(&self.targets)
            .all(|(frame, target)| frame.label == *target)
    }

    #[must_use]
    pub fn frames(&self) -> Vec<SkillBarFrame> {
        let elapsed = self.elapsed;
        self.targets
            .iter()
            .enumerate()
            .map(|(i, &target)| {
                let delay = FILL_STAGGER * u32::try_from(i).unwrap_or(u32::MAX);
                match elapsed.and_then(|e| e.checked_sub(delay)) {
                    None => SkillBarFrame { width: 0, label: 0 },
                    Some(running) => {
                        let steps = u32::try_from(running.as_millis() / FILL_STEP.as_millis())
                            .unwrap_or(u32::MAX)
                            .min(FILL_STEPS);
                        SkillBarFrame {
                            width: target,
                            label: fill_label(target, steps),
                        }
                    }
                }
            })
            .collect()
    }
}

fn fill_label(target: u32, steps: u32) -> u32 {
    if steps >= FILL_STEPS {
        return target;
    }
    let current = f64::from(target) / f64::from(FILL_STEPS) * f64::from(steps);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = current.round() as u32;
    rounded.min(target)
}
