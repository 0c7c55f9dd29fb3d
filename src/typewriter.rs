use std::time::Duration;

use crate::config::TrackerConfig;

/// Types phrases one character at a time, holds each complete phrase, then
/// clears it and moves on to the next one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    typed: usize,
    type_delay: Duration,
    hold_delay: Duration,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S], config: &TrackerConfig) -> Self {
        Self {
            phrases: phrases.iter().map(|s| s.as_ref().to_string()).collect(),
            phrase: 0,
            typed: 0,
            type_delay: config.type_delay(),
            hold_delay: config.hold_delay(),
        }
    }

    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.typed)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    fn phrase_chars(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map_or(0, |p| p.chars().count())
    }

    /// Delay to wait before calling `tick` again from the current state.
    pub fn next_delay(&self) -> Duration {
        if self.typed < self.phrase_chars() {
            self.type_delay
        } else {
            self.hold_delay
        }
    }

    /// Advances one step and returns the delay before the next one.
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return self.hold_delay;
        }
        if self.typed < self.phrase_chars() {
            self.typed += 1;
        } else {
            self.typed = 0;
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }
        self.next_delay()
    }
}
