//! Analysis session state.
//!
//! This module models the dashboard's single-threaded reactive state as
//! a [`RetentionSession`]: one employee selection, one competing offer,
//! one strategy, and one custom proposal, with every mutation followed by
//! an immediate synchronous recomputation of the derived proposal state.
//! There is no hidden observer graph; each mutator runs the recompute to
//! completion before returning.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{ProposalField, apply_edit, recommend, seed_proposal};
use crate::directory::{Directory, current_range_for, promotion_ranges_for};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompensationRange, CompetingOffer, CounterProposal, Employee, OfferInputs, Strategy,
};

/// A single analyst's compensation analysis session.
///
/// The session owns the directory datasets and the in-flight analysis
/// inputs. Derived state (the engine suggestion and the active proposal)
/// is recomputed synchronously after every mutation and read back
/// through accessors.
///
/// # Example
///
/// ```no_run
/// use retention_engine::directory::Directory;
/// use retention_engine::models::{OfferInputs, Strategy};
/// use retention_engine::session::RetentionSession;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let directory = Directory::load("./data/retention").unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// let mut session = RetentionSession::new(directory, as_of);
///
/// session.select_employee("1").unwrap();
/// session.set_offer(&OfferInputs {
///     base_pay: Decimal::new(2_800_000, 0),
///     ctc: Decimal::new(3_200_000, 0),
///     variable_percentage: Decimal::ZERO,
/// });
/// session.set_strategy(Strategy::Competitive);
///
/// let proposal = session.active_proposal().unwrap();
/// println!("Proposed CTC: {}", proposal.ctc);
/// ```
#[derive(Debug, Clone)]
pub struct RetentionSession {
    directory: Directory,
    as_of: NaiveDate,
    employee: Option<Employee>,
    current_range: Option<CompensationRange>,
    promotion_range: Option<CompensationRange>,
    offer: CompetingOffer,
    strategy: Strategy,
    custom_proposal: Option<CounterProposal>,
    custom_rationale: Option<String>,
    suggestion: Option<CounterProposal>,
    active: Option<CounterProposal>,
}

impl RetentionSession {
    /// Creates a session over the given datasets.
    ///
    /// The strategy starts as `Competitive`, matching the dashboard's
    /// default selection. `as_of` is the date tenure is measured against.
    pub fn new(directory: Directory, as_of: NaiveDate) -> Self {
        Self {
            directory,
            as_of,
            employee: None,
            current_range: None,
            promotion_range: None,
            offer: CompetingOffer::default(),
            strategy: Strategy::Competitive,
            custom_proposal: None,
            custom_rationale: None,
            suggestion: None,
            active: None,
        }
    }

    /// Returns the underlying directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Returns the selected employee, if any.
    pub fn employee(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    /// Returns the auto-populated current range, if any.
    pub fn current_range(&self) -> Option<&CompensationRange> {
        self.current_range.as_ref()
    }

    /// Returns the selected promotion range, if any.
    pub fn promotion_range(&self) -> Option<&CompensationRange> {
        self.promotion_range.as_ref()
    }

    /// Returns the derived competing offer.
    pub fn offer(&self) -> &CompetingOffer {
        &self.offer
    }

    /// Returns the selected strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the engine suggestion for the current inputs.
    ///
    /// In the three computed modes this is the active proposal; in
    /// Custom mode it is the baseline insight shown next to the editor.
    pub fn suggestion(&self) -> Option<&CounterProposal> {
        self.suggestion.as_ref()
    }

    /// Returns the active proposal reported to consumers.
    ///
    /// `None` while preconditions are unmet, or in Custom mode before
    /// the first edit.
    pub fn active_proposal(&self) -> Option<&CounterProposal> {
        self.active.as_ref()
    }

    /// Returns the active proposal, or the placeholder when there is
    /// none.
    pub fn active_or_placeholder(&self) -> CounterProposal {
        self.active
            .clone()
            .unwrap_or_else(CounterProposal::placeholder)
    }

    /// Selects an employee by id.
    ///
    /// Auto-populates the current range from the employee's job
    /// attributes and resets the promotion selection and any custom
    /// proposal state, as re-selecting does in the dashboard.
    pub fn select_employee(&mut self, id: &str) -> EngineResult<()> {
        let employee = self.directory.get_employee(id)?.clone();
        self.current_range =
            current_range_for(self.directory.ranges(), &employee).cloned();
        self.employee = Some(employee);
        self.promotion_range = None;
        self.custom_proposal = None;
        self.custom_rationale = None;
        self.recompute();
        Ok(())
    }

    /// Clears the employee selection and all dependent state.
    pub fn clear_employee(&mut self) {
        self.employee = None;
        self.current_range = None;
        self.promotion_range = None;
        self.custom_proposal = None;
        self.custom_rationale = None;
        self.recompute();
    }

    /// Enters (or re-enters) the competing offer from raw inputs.
    pub fn set_offer(&mut self, inputs: &OfferInputs) {
        self.offer = CompetingOffer::from_inputs(inputs);
        self.recompute();
    }

    /// Selects the retention strategy.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        self.recompute();
    }

    /// Returns the promotion candidates for the current range.
    pub fn promotion_candidates(&self) -> Vec<&CompensationRange> {
        match &self.current_range {
            Some(range) => promotion_ranges_for(self.directory.ranges(), range),
            None => Vec::new(),
        }
    }

    /// Selects a promotion range by job title, or clears the selection.
    ///
    /// The title must be one of the current promotion candidates.
    pub fn select_promotion_range(&mut self, job_title: Option<&str>) -> EngineResult<()> {
        match job_title {
            None => {
                self.promotion_range = None;
            }
            Some(title) => {
                let candidate = self
                    .promotion_candidates()
                    .into_iter()
                    .find(|r| r.job_title == title)
                    .cloned()
                    .ok_or_else(|| EngineError::RangeNotFound {
                        job_title: title.to_string(),
                        level: self
                            .current_range
                            .as_ref()
                            .and_then(|r| r.numeric_level())
                            .map(|l| (l + 1).to_string())
                            .unwrap_or_else(|| "?".to_string()),
                    })?;
                self.promotion_range = Some(candidate);
            }
        }
        self.recompute();
        Ok(())
    }

    /// Sets or clears the free-text rationale override for the custom
    /// proposal.
    ///
    /// An existing custom proposal is updated in place; with the
    /// override cleared its rationale reverts to the auto-generated
    /// sentence.
    pub fn set_custom_rationale(&mut self, rationale: Option<String>) {
        self.custom_rationale = rationale.filter(|r| !r.is_empty());
        if let (Some(custom), Some(employee)) = (&mut self.custom_proposal, &self.employee) {
            custom.rationale = match &self.custom_rationale {
                Some(rationale) => rationale.clone(),
                None => format!(
                    "Custom proposal with {:.1}% increase over current compensation",
                    custom.increase_over(employee.ctc)
                ),
            };
        }
        self.recompute();
    }

    /// Applies one field edit to the custom proposal.
    ///
    /// Seeds the proposal from the employee's current compensation on
    /// first use. Does nothing while no employee or current range is
    /// selected.
    pub fn edit_custom(&mut self, field: ProposalField, value: Decimal) {
        let (Some(employee), Some(range)) = (&self.employee, &self.current_range) else {
            return;
        };
        let current = self
            .custom_proposal
            .take()
            .unwrap_or_else(|| seed_proposal(employee, self.custom_rationale.as_deref()));
        self.custom_proposal = Some(apply_edit(
            &current,
            field,
            value,
            employee,
            range,
            self.custom_rationale.as_deref(),
        ));
        self.recompute();
    }

    /// Recomputes the derived proposal state from the current inputs.
    fn recompute(&mut self) {
        self.suggestion = match (&self.employee, &self.current_range) {
            (Some(employee), Some(range)) => recommend(
                employee,
                range,
                self.promotion_range.as_ref(),
                &self.offer,
                self.strategy,
                self.as_of,
            ),
            _ => None,
        };

        self.active = if self.strategy == Strategy::Custom {
            self.custom_proposal.clone()
        } else {
            self.suggestion.clone()
        };
    }
}
