use super::ValidationItem;
use super::limits::{LimitTable, Platform};
use super::report::ValidationReport;
use super::rules::{self, RuleContext};
use crate::config::{CampaignConfig, HierarchyConfig};
use crate::data::{DataRow, DataSourceColumn};
use std::time::{Duration, Instant};

/// Delay between the last input change and a scheduled validation run.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// A full snapshot of the inputs one validation run depends on.
#[derive(Debug, Clone)]
pub struct ValidationInputs {
    pub config: HierarchyConfig,
    pub campaign: CampaignConfig,
    pub columns: Vec<DataSourceColumn>,
    pub rows: Vec<DataRow>,
    pub platforms: Vec<Platform>,
}

type RuleEvaluator = Box<dyn Fn(&RuleContext) -> Vec<ValidationItem>>;

/// Stateful wrapper owning the validation cache and debounce bookkeeping.
///
/// One `Validator` is constructed per caller session and passed explicitly;
/// there is no ambient module state. Recomputation is keyed by a
/// serialization of (hierarchy config, row count, platforms, column count):
/// an unchanged key returns the cached report without re-running the rules.
///
/// Scheduling is deterministic and thread-free: [`Validator::schedule`] arms
/// a deadline relative to the caller-supplied clock, superseding any pending
/// run, and [`Validator::poll`] fires the newest pending run once its
/// deadline has elapsed. Superseded runs never execute.
pub struct Validator {
    limits: LimitTable,
    delay: Duration,
    evaluator: RuleEvaluator,
    cache_key: Option<String>,
    cached: Option<ValidationReport>,
    pending: Option<PendingRun>,
    runs: usize,
}

struct PendingRun {
    inputs: ValidationInputs,
    due: Instant,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            limits: LimitTable::default(),
            delay: DEBOUNCE_DELAY,
            evaluator: Box::new(|ctx| rules::run_all(ctx)),
            cache_key: None,
            cached: None,
            pending: None,
            runs: 0,
        }
    }

    /// Replaces the platform limit table.
    pub fn with_limits(mut self, limits: LimitTable) -> Self {
        self.limits = limits;
        self
    }

    /// Replaces the debounce delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replaces the rule evaluator. Tests use this to stub the rules and
    /// observe recomputation.
    pub fn with_evaluator<F>(mut self, evaluator: F) -> Self
    where
        F: Fn(&RuleContext) -> Vec<ValidationItem> + 'static,
    {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Number of rule evaluations performed so far (cache misses).
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Whether a scheduled run is waiting on its deadline.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates immediately, consulting the cache first.
    pub fn validate(&mut self, inputs: &ValidationInputs) -> ValidationReport {
        let key = cache_key(inputs);
        if let (Some(prev), Some(report)) = (&self.cache_key, &self.cached) {
            if key.as_deref() == Some(prev.as_str()) {
                tracing::trace!("validation cache hit");
                return report.clone();
            }
        }

        let limits = self.limits.most_restrictive(&inputs.platforms);
        let ctx = RuleContext {
            config: &inputs.config,
            campaign: &inputs.campaign,
            columns: &inputs.columns,
            rows: &inputs.rows,
            limits,
        };
        let items = (self.evaluator)(&ctx);
        self.runs += 1;
        tracing::debug!(items = items.len(), run = self.runs, "validation run");

        let report = ValidationReport::categorize(items);
        if let Some(key) = key {
            self.cache_key = Some(key);
            self.cached = Some(report.clone());
        }
        report
    }

    /// Schedules a debounced run at `now + delay`.
    ///
    /// A newer schedule supersedes any pending one, so at most one run is
    /// ever in flight and only the most recent inputs are applied.
    pub fn schedule(&mut self, inputs: ValidationInputs, now: Instant) {
        self.pending = Some(PendingRun {
            inputs,
            due: now + self.delay,
        });
    }

    /// Fires the pending run if its deadline has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ValidationReport> {
        let due = self.pending.as_ref().map(|p| p.due)?;
        if now < due {
            return None;
        }
        let run = self.pending.take()?;
        Some(self.validate(&run.inputs))
    }
}

fn cache_key(inputs: &ValidationInputs) -> Option<String> {
    serde_json::to_string(&(
        &inputs.config,
        inputs.rows.len(),
        &inputs.platforms,
        inputs.columns.len(),
    ))
    .ok()
}
