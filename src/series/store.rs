use std::fmt;

use log::debug;

use super::error::{Result, SeriesError};
use super::evaluator;
use super::model::{SampleSet, SeriesSpec, SineComponent};
use super::settings::EvaluationSettings;

// ---------------------------------------------------------------------------
// Input workflow state
// ---------------------------------------------------------------------------

/// Where the store is in the input workflow.
///
/// ```text
///  Idle ─declare_count─▶ CountDeclared ─add─▶ Collecting ─add (last)─▶ Ready ─evaluate─▶ Evaluated
///   ▲                          ▲                                                            │
///   └──────── reset ───────────┴──────────────────── declare_count ─────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    CountDeclared,
    Collecting,
    Ready,
    Evaluated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::Idle => "idle",
            SessionState::CountDeclared => "count declared",
            SessionState::Collecting => "collecting",
            SessionState::Ready => "ready",
            SessionState::Evaluated => "evaluated",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// ComponentStore
// ---------------------------------------------------------------------------

/// Collects sine components until the declared count is reached.
#[derive(Debug, Clone, Default)]
pub struct ComponentStore {
    /// `None` until `declare_count` is called.
    declared: Option<usize>,
    components: Vec<SineComponent>,
    evaluated: bool,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh session expecting `n` components.
    ///
    /// Discards whatever was collected before, from any state.
    pub fn declare_count(&mut self, n: i64) -> Result<()> {
        let n = usize::try_from(n).map_err(|_| {
            SeriesError::invalid(format!("component count must not be negative, got {n}"))
        })?;
        self.declared = Some(n);
        self.components.clear();
        self.evaluated = false;
        debug!("declared {n} components");
        Ok(())
    }

    /// Append one component.
    ///
    /// Capacity is checked before the values, so a full store reports
    /// `CapacityExceeded` even for an invalid pair.
    pub fn add_component(&mut self, amplitude: f64, frequency: f64) -> Result<()> {
        let capacity = self.declared.unwrap_or(0);
        if self.components.len() >= capacity {
            return Err(SeriesError::CapacityExceeded(match self.declared {
                Some(n) => format!("all {n} declared components are already collected"),
                None => "no component count has been declared".to_string(),
            }));
        }
        let component = SineComponent::new(amplitude, frequency)?;
        self.components.push(component);
        debug!(
            "collected component {}/{capacity}: {component}",
            self.components.len()
        );
        Ok(())
    }

    /// True once a count was declared and that many components are held.
    pub fn is_complete(&self) -> bool {
        self.declared == Some(self.components.len())
    }

    /// The collected components, in the order they were added.
    pub fn components(&self) -> Result<SeriesSpec> {
        if !self.is_complete() {
            return Err(self.not_ready());
        }
        Ok(SeriesSpec::from_components(self.components.clone()))
    }

    /// Components collected so far, complete or not. For display only.
    pub fn collected(&self) -> &[SineComponent] {
        &self.components
    }

    pub fn declared_count(&self) -> Option<usize> {
        self.declared
    }

    pub fn collected_count(&self) -> usize {
        self.components.len()
    }

    /// How many more components are expected.
    pub fn remaining(&self) -> usize {
        self.declared
            .map_or(0, |n| n.saturating_sub(self.components.len()))
    }

    pub fn state(&self) -> SessionState {
        match self.declared {
            None => SessionState::Idle,
            Some(_) if self.evaluated => SessionState::Evaluated,
            Some(_) if self.is_complete() => SessionState::Ready,
            Some(_) if self.components.is_empty() => SessionState::CountDeclared,
            Some(_) => SessionState::Collecting,
        }
    }

    /// Back to `Idle`, dropping everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the whole session with `components`.
    ///
    /// Runs the same checks as typed input. On error the store is untouched.
    pub fn replace_with<I>(&mut self, components: I) -> Result<()>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let pairs: Vec<(f64, f64)> = components.into_iter().collect();
        let count = i64::try_from(pairs.len())
            .map_err(|_| SeriesError::invalid("too many components"))?;

        let mut fresh = ComponentStore::new();
        fresh.declare_count(count)?;
        for (amplitude, frequency) in pairs {
            fresh.add_component(amplitude, frequency)?;
        }
        *self = fresh;
        Ok(())
    }

    /// Evaluate the collected series and mark the session evaluated.
    pub fn evaluate(&mut self, settings: &EvaluationSettings) -> Result<SampleSet> {
        let spec = self.components()?;
        let samples = evaluator::evaluate(
            &spec,
            settings.domain_start,
            settings.domain_end,
            settings.sample_count,
        )?;
        self.evaluated = true;
        Ok(samples)
    }

    fn not_ready(&self) -> SeriesError {
        SeriesError::NotReady(match self.declared {
            None => "no component count has been declared".to_string(),
            Some(n) => format!(
                "{} of {n} components collected",
                self.components.len()
            ),
        })
    }
}
