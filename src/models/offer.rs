//! Competing offer model and input derivation.
//!
//! This module defines the CompetingOffer struct and the raw input form
//! an analyst fills in, with the derivation rules that complete a partial
//! entry into a full offer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw competing-offer entry as typed by an analyst.
///
/// Any subset of the fields may be filled in; [`CompetingOffer::from_inputs`]
/// derives the missing pieces. Empty fields are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferInputs {
    /// The offered annual base pay, if entered.
    #[serde(default)]
    pub base_pay: Decimal,
    /// The offered total cost-to-company, if entered.
    #[serde(default)]
    pub ctc: Decimal,
    /// The offered variable percentage, if entered.
    #[serde(default)]
    pub variable_percentage: Decimal,
}

/// A competing external offer, fully derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetingOffer {
    /// The offered annual base pay.
    pub base_pay: Decimal,
    /// The offered annual variable pay.
    pub variable_pay: Decimal,
    /// The offered total cost-to-company.
    pub ctc: Decimal,
}

impl CompetingOffer {
    /// Completes a partial offer entry into a full offer.
    ///
    /// Variable pay is derived with the first applicable rule:
    /// - variable % and base pay entered: `base_pay * variable_percentage / 100`
    /// - CTC and base pay entered: `ctc - base_pay`
    /// - otherwise zero.
    ///
    /// CTC is the entered value, or `base_pay + variable_pay` when no CTC
    /// was entered.
    ///
    /// # Examples
    ///
    /// ```
    /// use retention_engine::models::{CompetingOffer, OfferInputs};
    /// use rust_decimal::Decimal;
    ///
    /// let offer = CompetingOffer::from_inputs(&OfferInputs {
    ///     base_pay: Decimal::new(2_600_000, 0),
    ///     ctc: Decimal::ZERO,
    ///     variable_percentage: Decimal::new(15, 0),
    /// });
    /// assert_eq!(offer.variable_pay, Decimal::new(390_000, 0));
    /// assert_eq!(offer.ctc, Decimal::new(2_990_000, 0));
    /// ```
    pub fn from_inputs(inputs: &OfferInputs) -> Self {
        let variable_pay = if inputs.variable_percentage > Decimal::ZERO
            && inputs.base_pay > Decimal::ZERO
        {
            inputs.base_pay * inputs.variable_percentage / Decimal::ONE_HUNDRED
        } else if inputs.ctc > Decimal::ZERO && inputs.base_pay > Decimal::ZERO {
            inputs.ctc - inputs.base_pay
        } else {
            Decimal::ZERO
        };

        let ctc = if inputs.ctc > Decimal::ZERO {
            inputs.ctc
        } else {
            inputs.base_pay + variable_pay
        };

        Self {
            base_pay: inputs.base_pay,
            variable_pay,
            ctc,
        }
    }

    /// Returns true if enough of the offer is entered for analysis.
    ///
    /// The strategy engine only runs once a positive offer CTC exists.
    pub fn is_entered(&self) -> bool {
        self.ctc > Decimal::ZERO
    }

    /// Returns the offer's CTC increase over a current CTC, in percent.
    ///
    /// A non-positive current CTC reads as a 0% increase rather than an
    /// undefined ratio.
    pub fn increase_over(&self, current_ctc: Decimal) -> Decimal {
        if current_ctc <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.ctc - current_ctc) / current_ctc * Decimal::ONE_HUNDRED
    }
}
