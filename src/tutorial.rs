//! Guided walkthroughs of the Doomsday method.
//!
//! A tutorial is a fixed list of [`TutorialStep`] descriptors. A
//! [`TutorialSession`] holds one learner's progress through such a list for a
//! single example date and checks each typed answer against the matching
//! value of the date's [`DoomsdayTrace`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    COMPLETE_MESSAGE, CalendarDate, Calculator, DoomsdayTrace, RETRY_MESSAGE, TraceField, Weekday,
};

/// Values accepted so far, keyed by their position in the running formula.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationLedger(BTreeMap<usize, String>);

impl CalculationLedger {
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    /// Stores `value` in `slot`, replacing whatever was there.
    pub fn record(&mut self, slot: usize, value: impl Into<String>) {
        self.0.insert(slot, value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get_or<'a>(&'a self, slot: usize, placeholder: &'a str) -> &'a str {
        self.get(slot).unwrap_or(placeholder)
    }
}

/// Everything a step may look at when rendering its prompt or message.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub date: &'a CalendarDate,
    pub trace: &'a DoomsdayTrace,
    pub ledger: &'a CalculationLedger,
}

/// What a step's answer must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// The canonical decimal form of a trace value. `"04"` does not match 4.
    Number(TraceField),
    /// The weekday a trace value stands for, named in any supported language.
    WeekdayOf(TraceField),
}

impl Expected {
    pub fn accepts(self, trace: &DoomsdayTrace, answer: &str) -> bool {
        let answer = answer.trim();
        match self {
            Self::Number(field) => answer == trace.get(field).to_string(),
            Self::WeekdayOf(field) => Weekday::from_index_wrapping(trace.get(field)).matches(answer),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SuccessMessage {
    Fixed(&'static str),
    Generated(fn(&StepContext<'_>) -> String),
}

impl SuccessMessage {
    pub fn render(&self, ctx: &StepContext<'_>) -> String {
        match self {
            Self::Fixed(text) => (*text).to_owned(),
            Self::Generated(render) => render(ctx),
        }
    }
}

/// Writes an accepted answer into the ledger.
pub type Recorder = fn(&mut CalculationLedger, &str, &DoomsdayTrace);

/// One question of a tutorial.
#[derive(Debug, Clone, Copy)]
pub struct TutorialStep {
    pub prompt: fn(&StepContext<'_>) -> String,
    pub expected: Expected,
    pub success: SuccessMessage,
    pub record: Option<Recorder>,
}

/// Which walkthrough to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorialKind {
    /// From a known year doomsday to the weekday of the date (4 steps).
    Compact,
    /// Finding the doomsday of the year itself (7 steps).
    #[default]
    Extended,
}

impl TutorialKind {
    pub fn steps(self) -> &'static [TutorialStep] {
        match self {
            Self::Compact => &COMPACT_STEPS,
            Self::Extended => &EXTENDED_STEPS,
        }
    }

    /// The running calculation shown under the prompt. Parts not yet
    /// answered are shown by name.
    fn formula(self, ledger: &CalculationLedger) -> String {
        match self {
            Self::Compact => format!(
                "mod 7({} + {}) = {}",
                ledger.get_or(0, "difference"),
                ledger.get_or(1, "doomsday"),
                ledger.get_or(2, "weekday"),
            ),
            Self::Extended => format!(
                "mod 7({} + {} + {} + {}) = {}",
                ledger.get_or(0, "fit12"),
                ledger.get_or(1, "remainder"),
                ledger.get_or(2, "fit4"),
                ledger.get_or(3, "century anchor"),
                ledger.get_or(EXTENDED_RESULT_SLOT, "Doomsday"),
            ),
        }
    }
}

const EXTENDED_RESULT_SLOT: usize = 5;

fn record_part<const SLOT: usize>(ledger: &mut CalculationLedger, value: &str, _: &DoomsdayTrace) {
    ledger.record(SLOT, value);
}

/// Records a sum that still has to be reduced mod 7.
fn record_unreduced<const SLOT: usize>(
    ledger: &mut CalculationLedger,
    value: &str,
    _: &DoomsdayTrace,
) {
    ledger.record(SLOT, format!("mod 7({value})"));
}

fn record_doomsday_sum(ledger: &mut CalculationLedger, value: &str, trace: &DoomsdayTrace) {
    ledger.record(1, trace.doomsday_of_year.to_string());
    record_unreduced::<2>(ledger, value, trace);
}

fn reveal_doomsday(ctx: &StepContext<'_>) -> String {
    format!(
        "Correct! {} is the doomsday of year {}!",
        ctx.trace.doomsday_weekday(),
        ctx.date.year()
    )
}

static COMPACT_STEPS: [TutorialStep; 4] = [
    TutorialStep {
        prompt: |ctx| {
            format!(
                "Step 1: Subtract the doomsday of month {} (see the cheat sheet) from the day of the date, {}.",
                ctx.date.month(),
                ctx.date.day()
            )
        },
        expected: Expected::Number(TraceField::DayDifference),
        success: SuccessMessage::Fixed("Good!"),
        record: Some(record_part::<0>),
    },
    TutorialStep {
        prompt: |ctx| {
            format!(
                "Step 2: Add the doomsday number of {} ({}, found in the doomsday tutorial).",
                ctx.date.year(),
                ctx.trace.doomsday_of_year
            )
        },
        expected: Expected::Number(TraceField::WeekdayTotal),
        success: SuccessMessage::Fixed("Correct!"),
        record: Some(record_doomsday_sum),
    },
    TutorialStep {
        prompt: |_| "Step 3: Now take the total mod 7.".to_owned(),
        expected: Expected::Number(TraceField::WeekdayIndex),
        success: SuccessMessage::Fixed("Nice, one more step!"),
        record: Some(record_part::<2>),
    },
    TutorialStep {
        prompt: |ctx| {
            format!(
                "Step 4: We now have {}, but which weekday is it?",
                ctx.trace.weekday_index
            )
        },
        expected: Expected::WeekdayOf(TraceField::WeekdayIndex),
        success: SuccessMessage::Fixed("You've found the weekday!"),
        record: None,
    },
];

static EXTENDED_STEPS: [TutorialStep; 7] = [
    TutorialStep {
        prompt: |ctx| {
            format!(
                "Step 1: How many times does 12 fit into the last two digits of {}?",
                ctx.date.year()
            )
        },
        expected: Expected::Number(TraceField::CenturyFit),
        success: SuccessMessage::Fixed("Good!"),
        record: Some(record_part::<0>),
    },
    TutorialStep {
        prompt: |_| "Step 2: What is left over after the last step?".to_owned(),
        expected: Expected::Number(TraceField::YearRemainder),
        success: SuccessMessage::Fixed("Correct!"),
        record: Some(record_part::<1>),
    },
    TutorialStep {
        prompt: |ctx| {
            format!(
                "Step 3: Divide the remainder ({}) by 4 and round down.",
                ctx.ledger.get_or(1, "remainder")
            )
        },
        expected: Expected::Number(TraceField::RemainderFit4),
        success: SuccessMessage::Fixed("Nice!"),
        record: Some(record_part::<2>),
    },
    TutorialStep {
        prompt: |_| "Step 4: Add the century anchor. What is it? (see the cheat sheet)".to_owned(),
        expected: Expected::Number(TraceField::CenturyAnchor),
        success: SuccessMessage::Fixed("Almost there!"),
        record: Some(record_part::<3>),
    },
    TutorialStep {
        prompt: |_| "Step 5: Add them all together. What total do you get?".to_owned(),
        expected: Expected::Number(TraceField::YearTotal),
        success: SuccessMessage::Fixed("Correct!"),
        record: Some(record_unreduced::<EXTENDED_RESULT_SLOT>),
    },
    TutorialStep {
        prompt: |_| {
            "Step 6: Take 7 away from the total as many times as you can. What is left?".to_owned()
        },
        expected: Expected::Number(TraceField::DoomsdayOfYear),
        success: SuccessMessage::Fixed("Yes! You have the number, but what day is it?"),
        record: Some(record_part::<EXTENDED_RESULT_SLOT>),
    },
    TutorialStep {
        prompt: |ctx| format!("Step 7: Which weekday is {}?", ctx.trace.doomsday_of_year),
        expected: Expected::WeekdayOf(TraceField::DoomsdayOfYear),
        success: SuccessMessage::Generated(reveal_doomsday),
        record: None,
    },
];

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress(usize),
    Completed,
}

/// Result of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The answer matched; the session moved to the next step.
    Accepted { message: String },
    /// The answer did not match; the session stays on the same step.
    Rejected { message: String },
    /// Every step was already solved; nothing changed.
    AlreadyComplete,
}

impl Verification {
    pub const fn accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Accepted { message } | Self::Rejected { message } => message,
            Self::AlreadyComplete => COMPLETE_MESSAGE,
        }
    }
}

/// One learner's progress through a tutorial for one example date.
///
/// A saved session stores only the date and progress. The trace is computed
/// again on load, so the expected answers always match the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedSession")]
pub struct TutorialSession {
    kind: TutorialKind,
    date: CalendarDate,
    calculator: Calculator,
    #[serde(skip_serializing)]
    trace: DoomsdayTrace,
    step_index: usize,
    ledger: CalculationLedger,
    pending_input: String,
}

/// Serialized form of a [`TutorialSession`].
#[derive(Deserialize)]
struct SavedSession {
    kind: TutorialKind,
    date: CalendarDate,
    #[serde(default)]
    calculator: Calculator,
    step_index: usize,
    #[serde(default)]
    ledger: CalculationLedger,
    #[serde(default)]
    pending_input: String,
}

/// Error type for restoring a saved session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Saved progress points past the last step of the tutorial.
    #[error("Step {step_index} out of range for a tutorial of {step_count} steps")]
    StepOutOfRange { step_index: usize, step_count: usize },
}

impl TryFrom<SavedSession> for TutorialSession {
    type Error = SessionError;

    fn try_from(saved: SavedSession) -> Result<Self, Self::Error> {
        let step_count = saved.kind.steps().len();
        if saved.step_index > step_count {
            return Err(SessionError::StepOutOfRange {
                step_index: saved.step_index,
                step_count,
            });
        }
        Ok(Self {
            kind: saved.kind,
            trace: saved.calculator.compute_trace(&saved.date),
            date: saved.date,
            calculator: saved.calculator,
            step_index: saved.step_index,
            ledger: saved.ledger,
            pending_input: saved.pending_input,
        })
    }
}

impl TutorialSession {
    /// Starts a tutorial on `date` using the Gregorian century anchors.
    pub fn new(kind: TutorialKind, date: CalendarDate) -> Self {
        Self::with_calculator(kind, date, &Calculator::default())
    }

    pub fn with_calculator(kind: TutorialKind, date: CalendarDate, calculator: &Calculator) -> Self {
        let trace = calculator.compute_trace(&date);
        debug!(?kind, %date, "tutorial started");
        Self {
            kind,
            date,
            calculator: *calculator,
            trace,
            step_index: 0,
            ledger: CalculationLedger::default(),
            pending_input: String::new(),
        }
    }

    pub const fn kind(&self) -> TutorialKind {
        self.kind
    }

    pub const fn date(&self) -> &CalendarDate {
        &self.date
    }

    pub const fn trace(&self) -> &DoomsdayTrace {
        &self.trace
    }

    pub const fn ledger(&self) -> &CalculationLedger {
        &self.ledger
    }

    pub fn step_count(&self) -> usize {
        self.kind.steps().len()
    }

    pub fn state(&self) -> SessionState {
        if self.step_index < self.step_count() {
            SessionState::InProgress(self.step_index)
        } else {
            SessionState::Completed
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Completed
    }

    fn current_step(&self) -> Option<&'static TutorialStep> {
        self.kind.steps().get(self.step_index)
    }

    const fn context(&self) -> StepContext<'_> {
        StepContext {
            date: &self.date,
            trace: &self.trace,
            ledger: &self.ledger,
        }
    }

    /// Prompt of the active step, or `None` once the tutorial is complete.
    pub fn current_prompt(&self) -> Option<String> {
        self.current_step().map(|step| (step.prompt)(&self.context()))
    }

    /// Checks `answer` against the active step.
    ///
    /// A match records the answer, advances exactly one step and returns the
    /// step's success message. A mismatch leaves the step unchanged. Either
    /// way the pending input is cleared.
    pub fn submit(&mut self, answer: &str) -> Verification {
        let Some(step) = self.current_step() else {
            debug!("answer submitted to a completed tutorial");
            return Verification::AlreadyComplete;
        };
        self.pending_input.clear();

        if !step.expected.accepts(&self.trace, answer) {
            debug!(step = self.step_index, answer, "answer rejected");
            return Verification::Rejected {
                message: RETRY_MESSAGE.to_owned(),
            };
        }

        let answer = answer.trim();
        if let Some(record) = step.record {
            record(&mut self.ledger, answer, &self.trace);
        }
        let message = step.success.render(&self.context());
        debug!(step = self.step_index, answer, "answer accepted");
        self.step_index += 1;

        Verification::Accepted { message }
    }

    /// Answer typed so far for the active step.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Appends a typed character if it can be part of an answer: digits,
    /// `-`, ASCII letters and accented Latin letters (`ø`, `æ`, `å`, ...).
    /// Returns false when the character was dropped, including every
    /// character typed after the tutorial is complete.
    pub fn type_char(&mut self, c: char) -> bool {
        let allowed = c.is_ascii_alphanumeric() || c == '-' || ('\u{C0}'..='\u{17F}').contains(&c);
        let accepted = allowed && !self.is_complete();
        if accepted {
            self.pending_input.push(c);
        }
        accepted
    }

    pub fn backspace(&mut self) {
        self.pending_input.pop();
    }

    /// Submits the typed answer, as pressing Enter does.
    pub fn submit_pending(&mut self) -> Verification {
        let answer = std::mem::take(&mut self.pending_input);
        self.submit(&answer)
    }

    /// Running calculation with the accepted parts filled in.
    pub fn formula(&self) -> String {
        self.kind.formula(&self.ledger)
    }
}
