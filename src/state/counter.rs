//! Statistics counter animation.
//!
//! A counter climbs from 0 to its target in a fixed number of timer ticks.
//! Frame `k` of `n` shows `floor(target * k / n)`, so values never decrease,
//! never overshoot, and the last frame is the target exactly. The suffix is
//! declared once when the counter is built, never read back from the text
//! being overwritten.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::fmt;

/// Unit appended to every rendered counter value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterSuffix {
    #[default]
    None,
    Plus,
    Percent,
}

impl CounterSuffix {
    /// Parse a declared suffix (`data-suffix`). Unknown values yield `None`.
    #[must_use]
    pub fn from_declared(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" => Some(Self::None),
            "+" => Some(Self::Plus),
            "%" => Some(Self::Percent),
            _ => None,
        }
    }

    /// Infer the suffix from the counter's initial text.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if text.contains('+') {
            Self::Plus
        } else if text.contains('%') {
            Self::Percent
        } else {
            Self::None
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Plus => "+",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for CounterSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target value and suffix for one counter element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u64,
    pub suffix: CounterSuffix,
}

impl CounterSpec {
    /// Build a spec from the element's initial text and optional declared suffix.
    ///
    /// The target is the run of ASCII digits at the start of the trimmed text
    /// (`"150+"` → 150). Returns `None` when the text has no leading digits.
    #[must_use]
    pub fn parse(text: &str, declared_suffix: Option<&str>) -> Option<Self> {
        let trimmed = text.trim();
        let digits_end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
        let Ok(target) = trimmed[..digits_end].parse::<u64>() else {
            return None;
        };
        let suffix = declared_suffix
            .and_then(CounterSuffix::from_declared)
            .unwrap_or_else(|| CounterSuffix::infer(trimmed));
        Some(Self { target, suffix })
    }

    /// Text for a value with this counter's suffix.
    #[must_use]
    pub fn render(&self, value: u64) -> String {
        format!("{value}{}", self.suffix)
    }
}

/// One rendered step of a running counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// A running counter. Dropped (and its timer with it) once `done`.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    /// `steps` of zero is treated as one: the first tick lands on the target.
    #[must_use]
    pub fn new(spec: CounterSpec, steps: u32) -> Self {
        Self { spec, steps: steps.max(1), step: 0 }
    }

    /// Advance one step.
    pub fn tick(&mut self) -> CounterFrame {
        if self.step < self.steps {
            self.step += 1;
        }
        let done = self.is_done();
        CounterFrame { text: self.spec.render(self.value()), done }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        let scaled = u128::from(self.spec.target) * u128::from(self.step) / u128::from(self.steps);
        u64::try_from(scaled).unwrap_or(self.spec.target)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    /// The text the counter settles on.
    #[must_use]
    pub fn final_text(&self) -> String {
        self.spec.render(self.spec.target)
    }
}
