//! # jaktlaget-calc
//!
//! The numbers behind the Jaktlaget investor pitch: how many Nordic hunters
//! subscribe at a given adoption rate, what that earns per month and year, and
//! how far a partner's ads reach on the team notice board.
//!
//! ## Quick Start
//!
//! ```rust
//! use jaktlaget_calc::{CalculatorInput, Region, derive};
//!
//! let input = CalculatorInput {
//!     region: Region::Sweden,
//!     adoption_pct: 10.0,
//!     ..CalculatorInput::default()
//! };
//! let out = derive(&input).unwrap();
//! assert_eq!(out.subscribers, 27_704);
//! assert_eq!(out.annual_revenue_sek, 6_316_512);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! jaktcalc --region SE --adoption 10 --price 19
//! jaktcalc --config pitch.toml --json
//! jaktcalc regions
//! jaktcalc projection
//! ```

/// Subscriber, revenue and ad-reach model.
pub mod calculator;

/// Scenario files (TOML/JSON) and flag precedence.
pub mod config;

pub mod error;

/// sv-SE number formatting.
pub mod format;

/// Static revenue projection quoted on the page.
pub mod projection;

/// Active hunting licenses per country.
pub mod regions;

/// Chart inputs.
pub mod series;

pub use calculator::{
    AdReach, CalculatorInput, CalculatorOutput, PricePoint, PriceTier, SliderRange, derive,
};
pub use error::{CalcError, CalcResult};
pub use regions::{HUNTING_LICENSES, LicenseCount, NORDIC_TOTAL, Region};
pub use series::SeriesPoint;
