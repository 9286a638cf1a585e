//! Dual string/number editing state for the number field.
//!
//! A controlled field whose value accepts decimals needs special handling.
//! If the committed value were re-rendered on every keystroke, typing "1.5"
//! would collapse to "1" the moment the "." is entered, and the user would
//! end up with "15". The field therefore keeps the text buffer as the
//! displayed truth while editing, and only reports a number upward once the
//! buffer parses as a finished literal.

use thiserror::Error;

/// Errors produced by checked widget construction.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NumberInputError {
    /// `min` exceeded `max`.
    #[error("invalid bounds: min ({min}) exceeds max ({max})")]
    InvalidBounds { min: f64, max: f64 },
    /// A bounds endpoint was NaN.
    #[error("bounds endpoints must not be NaN")]
    NanBound,
}

/// Inclusive numeric range, enforced when an entry is committed on focus
/// loss rather than on every keystroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// The full f64 range; clamping is a no-op.
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Creates bounds, rejecting NaN endpoints and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, NumberInputError> {
        if min.is_nan() || max.is_nan() {
            return Err(NumberInputError::NanBound);
        }
        if min > max {
            return Err(NumberInputError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower endpoint.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper endpoint.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Constrains `v` into `[min, max]`.
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Result of applying a text edit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditOutcome {
    /// The buffer parsed as a finished number; report it upward.
    Propagate(f64),
    /// The buffer holds an in-progress (or unparseable) entry; display it,
    /// report nothing.
    BufferOnly,
}

/// Returns true for the interim strings a user passes through while typing
/// a signed or fractional number.
///
/// The accepted set is exactly an optional "-", then an optional "0.", then
/// an optional "." with nothing after it: "", "-", ".", "-.", "0.", "-0."
/// (plus the harmless "0.." / "-0.." compositions). These are valid to
/// display but not yet parseable as a finished literal, so entries like
/// "-0.5" or ".25" are never rejected mid-keystroke.
pub fn is_incomplete_number(s: &str) -> bool {
    let rest = s.strip_prefix('-').unwrap_or(s);
    let rest = rest.strip_prefix("0.").unwrap_or(rest);
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    rest.is_empty()
}

/// Canonical display form of a value. f64 formatting is shortest
/// round-trip, so whole numbers render without a trailing ".0".
pub fn canonical(v: f64) -> String {
    v.to_string()
}

/// Dual string/number state for a controlled numeric field.
///
/// `buffer` is what the user sees and types into; `committed` is the last
/// value reported upward, and the fallback when the buffer cannot be parsed
/// at commit time.
#[derive(Clone, Debug, PartialEq)]
pub struct EditState {
    buffer: String,
    committed: f64,
    integer_mode: bool,
}

impl EditState {
    /// Creates state displaying `value` (floored in integer mode).
    pub fn new(value: f64, integer_mode: bool) -> Self {
        let value = if integer_mode { value.floor() } else { value };
        Self {
            buffer: canonical(value),
            committed: value,
            integer_mode,
        }
    }

    /// The text currently shown in the field.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The last value reported upward.
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// Whether parsed values are floored toward negative infinity.
    pub fn integer_mode(&self) -> bool {
        self.integer_mode
    }

    /// Parses the buffer if it is a finished, finite literal.
    fn parse_buffer(&self) -> Option<f64> {
        if is_incomplete_number(&self.buffer) {
            return None;
        }
        let v = self.buffer.parse::<f64>().ok()?;
        if !v.is_finite() {
            return None;
        }
        Some(if self.integer_mode { v.floor() } else { v })
    }

    /// Applies a text edit.
    ///
    /// The buffer takes the raw text unconditionally, so the field always
    /// reflects what the user typed even when it is not yet a number.
    /// Finished literals are reported immediately, NOT clamped here;
    /// out-of-range entries are tolerated until [`commit`](Self::commit).
    pub fn edit(&mut self, raw: &str) -> EditOutcome {
        self.buffer.clear();
        self.buffer.push_str(raw);
        match self.parse_buffer() {
            Some(v) => {
                self.committed = v;
                EditOutcome::Propagate(v)
            }
            None => EditOutcome::BufferOnly,
        }
    }

    /// Finalizes the entry on focus loss: parse the buffer (falling back
    /// to the last reported value when it is garbage), floor in integer
    /// mode, clamp into `bounds`, and rewrite the buffer in canonical
    /// form. Idempotent; never yields NaN.
    pub fn commit(&mut self, bounds: Bounds) -> f64 {
        let v = self.parse_buffer().unwrap_or(self.committed);
        let v = bounds.clamp(v);
        self.buffer = canonical(v);
        self.committed = v;
        v
    }

    /// Folds in a value change made by the external owner.
    ///
    /// The buffer is overwritten only when it is not an in-progress entry
    /// AND its numeric reading disagrees with `external`. The agreement
    /// check is what keeps the editor's own reported changes, echoed back
    /// by the owner, from resetting the buffer mid-typing.
    pub fn reconcile(&mut self, external: f64) {
        let buffer_value = self.buffer.parse::<f64>().ok();
        if !is_incomplete_number(&self.buffer) && buffer_value != Some(external) {
            self.buffer = canonical(external);
        }
        self.committed = external;
    }

    /// Discards the buffer and displays `value` (Escape).
    pub fn revert(&mut self, value: f64) {
        self.buffer = canonical(value);
        self.committed = value;
    }

    /// Stepper path: offsets the current reading by `delta`, with the last
    /// reported value standing in while the buffer is mid-entry. The
    /// result is floored in integer mode but NOT clamped; steppers may
    /// take the value out of range until the commit on blur.
    pub fn nudge(&mut self, delta: f64) -> f64 {
        let base = self.parse_buffer().unwrap_or(self.committed);
        let v = base + delta;
        let v = if self.integer_mode { v.floor() } else { v };
        self.buffer = canonical(v);
        self.committed = v;
        v
    }
}
