//! Subscriber, revenue and ad-reach model.
//!
//! Everything here is a pure function of [`CalculatorInput`] and the static
//! license table: no caching, no hidden state. Intermediates are `f64`; counts
//! are rounded half away from zero only at the step that produces them.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::regions::Region;

/// Feed posts per ad slot on the notice board.
pub const POSTS_PER_AD_SLOT: f64 = 3.0;

/// Price points for the quick annual comparison, independent of the selected tier.
pub const COMPARISON_PRICES_SEK: [u32; 2] = [19, 49];

/// Inclusive bounds of a slider control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
}

impl SliderRange {
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min as f64;
        }
        value.clamp(self.min as f64, self.max as f64)
    }

    pub fn clamp_count(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

pub const ADOPTION_RANGE: SliderRange = SliderRange { min: 1, max: 80 };
pub const MAU_RANGE: SliderRange = SliderRange { min: 10, max: 95 };
pub const VIEWS_RANGE: SliderRange = SliderRange { min: 5, max: 120 };
pub const SHARE_OF_VOICE_RANGE: SliderRange = SliderRange { min: 5, max: 100 };

/// Monthly subscription price. Only two tiers are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PriceTier {
    #[default]
    Sek19,
    Sek49,
}

impl PriceTier {
    pub const ALL: [PriceTier; 2] = [PriceTier::Sek19, PriceTier::Sek49];

    pub fn monthly_sek(&self) -> u32 {
        match self {
            PriceTier::Sek19 => 19,
            PriceTier::Sek49 => 49,
        }
    }
}

impl TryFrom<u32> for PriceTier {
    type Error = CalcError;

    fn try_from(sek: u32) -> Result<Self, Self::Error> {
        match sek {
            19 => Ok(PriceTier::Sek19),
            49 => Ok(PriceTier::Sek49),
            other => Err(CalcError::UnknownPriceTier(other)),
        }
    }
}

impl From<PriceTier> for u32 {
    fn from(tier: PriceTier) -> Self {
        tier.monthly_sek()
    }
}

/// Snapshot of every calculator control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorInput {
    pub region: Region,
    /// Share of active licenses assumed to subscribe.
    pub adoption_pct: f64,
    pub price: PriceTier,
    /// Share of subscribers active in a given month.
    pub mau_pct: f64,
    /// Notice-board feed views per monthly active user.
    pub views_per_mau: u32,
    /// Partner's fraction of the ad inventory.
    pub share_of_voice_pct: f64,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            region: Region::Nordic,
            adoption_pct: 10.0,
            price: PriceTier::Sek19,
            mau_pct: 60.0,
            views_per_mau: 30,
            share_of_voice_pct: 20.0,
        }
    }
}

impl CalculatorInput {
    /// Rejects percentages that are not finite or fall outside `[0, 100]`.
    pub fn validate(&self) -> CalcResult<()> {
        check_pct("adoption_pct", self.adoption_pct)?;
        check_pct("mau_pct", self.mau_pct)?;
        check_pct("share_of_voice_pct", self.share_of_voice_pct)?;
        Ok(())
    }

    /// Copy with every field pulled into its slider range.
    pub fn clamped(&self) -> Self {
        Self {
            region: self.region,
            adoption_pct: ADOPTION_RANGE.clamp(self.adoption_pct),
            price: self.price,
            mau_pct: MAU_RANGE.clamp(self.mau_pct),
            views_per_mau: VIEWS_RANGE.clamp_count(self.views_per_mau),
            share_of_voice_pct: SHARE_OF_VOICE_RANGE.clamp(self.share_of_voice_pct),
        }
    }
}

fn check_pct(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::InvalidInput(format!(
            "{field} must be within [0, 100], got {value}"
        )))
    }
}

fn round_count(value: f64) -> u64 {
    value.round() as u64
}

/// Ad exposure estimate for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AdReach {
    pub monthly_active_users: u64,
    /// Chance that a single feed view shows the partner's ad.
    pub ad_probability_per_view: f64,
    pub monthly_impressions: u64,
    /// Users who see the partner's ad at least once.
    pub unique_reach: u64,
}

/// One ad slot per [`POSTS_PER_AD_SLOT`] posts, scaled by the partner's share.
pub fn ad_probability_per_view(share_of_voice_pct: f64) -> f64 {
    (1.0 / POSTS_PER_AD_SLOT) * (share_of_voice_pct / 100.0)
}

impl AdReach {
    /// Reach for an already known active-user count.
    ///
    /// Each view is an independent Bernoulli trial with probability `p`, so a
    /// user is reached with probability `1 - (1 - p)^views`.
    pub fn from_active_users(
        monthly_active_users: u64,
        views_per_mau: u32,
        share_of_voice_pct: f64,
    ) -> Self {
        let p = ad_probability_per_view(share_of_voice_pct);
        let users = monthly_active_users as f64;
        let views = f64::from(views_per_mau);

        let monthly_impressions = round_count(users * views * p);
        let at_least_one = 1.0 - (1.0 - p).powf(views);
        let unique_reach = round_count(users * at_least_one);

        Self {
            monthly_active_users,
            ad_probability_per_view: p,
            monthly_impressions,
            unique_reach,
        }
    }

    pub fn from_subscribers(
        subscribers: u64,
        mau_pct: f64,
        views_per_mau: u32,
        share_of_voice_pct: f64,
    ) -> Self {
        let mau = round_count(subscribers as f64 * (mau_pct / 100.0));
        Self::from_active_users(mau, views_per_mau, share_of_voice_pct)
    }
}

/// Annual revenue at a fixed price point, in millions of SEK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PricePoint {
    pub price_sek: u32,
    pub annual_mkr: f64,
}

/// Annual revenue in Mkr for `subscribers` paying `price_sek` per month.
pub fn annual_mkr(subscribers: u64, price_sek: u32) -> f64 {
    subscribers as f64 * f64::from(price_sek) * 12.0 / 1_000_000.0
}

/// Every figure the page displays for one input snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CalculatorOutput {
    pub base_count: u64,
    pub subscribers: u64,
    pub monthly_revenue_sek: u64,
    pub annual_revenue_sek: u64,
    pub ads: AdReach,
    /// Fixed 19/49 kr scenarios from the current subscriber count.
    pub comparison: [PricePoint; 2],
}

/// Evaluates a scenario.
///
/// Fails with [`CalcError::InvalidInput`] for out-of-domain percentages;
/// callers wanting slider semantics should pass [`CalculatorInput::clamped`].
pub fn derive(input: &CalculatorInput) -> CalcResult<CalculatorOutput> {
    input.validate()?;

    let base_count = input.region.base_count();
    let subscribers = round_count(base_count as f64 * (input.adoption_pct / 100.0));
    let monthly_revenue_sek = subscribers * u64::from(input.price.monthly_sek());
    let annual_revenue_sek = monthly_revenue_sek * 12;

    let ads = AdReach::from_subscribers(
        subscribers,
        input.mau_pct,
        input.views_per_mau,
        input.share_of_voice_pct,
    );

    let comparison = COMPARISON_PRICES_SEK.map(|price_sek| PricePoint {
        price_sek,
        annual_mkr: annual_mkr(subscribers, price_sek),
    });

    Ok(CalculatorOutput {
        base_count,
        subscribers,
        monthly_revenue_sek,
        annual_revenue_sek,
        ads,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sweden(adoption_pct: f64) -> CalculatorInput {
        CalculatorInput {
            region: Region::Sweden,
            adoption_pct,
            ..CalculatorInput::default()
        }
    }

    #[test]
    fn sweden_ten_percent_at_19() {
        let out = derive(&sweden(10.0)).unwrap();
        assert_eq!(out.base_count, 277_042);
        assert_eq!(out.subscribers, 27_704);
        assert_eq!(out.monthly_revenue_sek, 526_376);
        assert_eq!(out.annual_revenue_sek, 6_316_512);
    }

    #[test]
    fn premium_tier_scales_revenue() {
        let input = CalculatorInput {
            price: PriceTier::Sek49,
            ..sweden(10.0)
        };
        let out = derive(&input).unwrap();
        assert_eq!(out.monthly_revenue_sek, 27_704 * 49);
        assert_eq!(out.annual_revenue_sek, 27_704 * 49 * 12);
    }

    #[test]
    fn reach_for_thousand_active_users() {
        let reach = AdReach::from_active_users(1000, 30, 20.0);
        assert!((reach.ad_probability_per_view - 0.2 / 3.0).abs() < 1e-15);
        assert_eq!(reach.monthly_impressions, 2000);
        assert_eq!(reach.unique_reach, 874);
    }

    #[test]
    fn default_scenario_covers_whole_nordics() {
        let out = derive(&CalculatorInput::default()).unwrap();
        assert_eq!(out.base_count, 917_636);
        // 917636 * 0.1 = 91763.6
        assert_eq!(out.subscribers, 91_764);
        // 91764 * 0.6 = 55058.4
        assert_eq!(out.ads.monthly_active_users, 55_058);
        assert_eq!(out.ads.monthly_impressions, 110_116);
    }

    #[test]
    fn subscribers_monotonic_in_adoption() {
        for region in Region::ALL {
            let mut previous = 0;
            for pct in ADOPTION_RANGE.min..=ADOPTION_RANGE.max {
                let input = CalculatorInput {
                    region,
                    adoption_pct: f64::from(pct),
                    ..CalculatorInput::default()
                };
                let out = derive(&input).unwrap();
                let expected =
                    (region.base_count() as f64 * (f64::from(pct) / 100.0)).round() as u64;
                assert_eq!(out.subscribers, expected);
                assert!(out.subscribers >= previous, "{region} at {pct}%");
                previous = out.subscribers;
            }
        }
    }

    #[test]
    fn annual_is_twelve_months() {
        for region in Region::ALL {
            for price in PriceTier::ALL {
                for pct in [1.0, 7.0, 33.0, 80.0] {
                    let input = CalculatorInput {
                        region,
                        price,
                        adoption_pct: pct,
                        ..CalculatorInput::default()
                    };
                    let out = derive(&input).unwrap();
                    assert_eq!(out.annual_revenue_sek, out.monthly_revenue_sek * 12);
                }
            }
        }
    }

    #[test]
    fn unique_reach_never_exceeds_active_users() {
        for views in [VIEWS_RANGE.min, 17, 60, VIEWS_RANGE.max] {
            for sov in [5.0, 20.0, 55.0, 100.0] {
                for mau in [10.0, 60.0, 95.0] {
                    let input = CalculatorInput {
                        mau_pct: mau,
                        views_per_mau: views,
                        share_of_voice_pct: sov,
                        adoption_pct: 80.0,
                        ..CalculatorInput::default()
                    };
                    let ads = derive(&input).unwrap().ads;
                    assert!(ads.unique_reach <= ads.monthly_active_users);
                }
            }
        }
    }

    #[test]
    fn zero_views_reach_nobody() {
        let reach = AdReach::from_active_users(5000, 0, 50.0);
        assert_eq!(reach.monthly_impressions, 0);
        assert_eq!(reach.unique_reach, 0);
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let input = CalculatorInput {
            region: Region::Finland,
            adoption_pct: 37.5,
            price: PriceTier::Sek49,
            mau_pct: 72.0,
            views_per_mau: 88,
            share_of_voice_pct: 43.0,
        };
        let a = derive(&input).unwrap();
        let b = derive(&input).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.ads.ad_probability_per_view.to_bits(),
            b.ads.ad_probability_per_view.to_bits()
        );
        for (x, y) in a.comparison.iter().zip(b.comparison.iter()) {
            assert_eq!(x.annual_mkr.to_bits(), y.annual_mkr.to_bits());
        }
    }

    #[test]
    fn comparison_ignores_selected_tier() {
        let cheap = derive(&sweden(10.0)).unwrap();
        let dear = derive(&CalculatorInput {
            price: PriceTier::Sek49,
            ..sweden(10.0)
        })
        .unwrap();
        assert_eq!(cheap.comparison, dear.comparison);
        assert_eq!(cheap.comparison[0].price_sek, 19);
        assert!((cheap.comparison[0].annual_mkr - 6.316512).abs() < 1e-12);
        assert!((cheap.comparison[1].annual_mkr - 16.289952).abs() < 1e-12);
    }

    #[test]
    fn rejects_out_of_domain_percentages() {
        let err = derive(&sweden(120.0)).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidInput("adoption_pct must be within [0, 100], got 120".into())
        );

        let negative = CalculatorInput {
            share_of_voice_pct: -1.0,
            ..CalculatorInput::default()
        };
        assert!(matches!(derive(&negative), Err(CalcError::InvalidInput(_))));

        let nan = CalculatorInput {
            mau_pct: f64::NAN,
            ..CalculatorInput::default()
        };
        assert!(matches!(derive(&nan), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn clamped_pulls_into_slider_ranges() {
        let wild = CalculatorInput {
            region: Region::Norway,
            adoption_pct: 250.0,
            price: PriceTier::Sek49,
            mau_pct: f64::NAN,
            views_per_mau: 1000,
            share_of_voice_pct: -4.0,
        };
        let tame = wild.clamped();
        assert_eq!(tame.adoption_pct, 80.0);
        assert_eq!(tame.mau_pct, 10.0);
        assert_eq!(tame.views_per_mau, 120);
        assert_eq!(tame.share_of_voice_pct, 5.0);
        assert_eq!(tame.region, Region::Norway);
        assert!(derive(&tame).is_ok());
    }

    #[test]
    fn price_tier_from_sek() {
        assert_eq!(PriceTier::try_from(19), Ok(PriceTier::Sek19));
        assert_eq!(PriceTier::try_from(49), Ok(PriceTier::Sek49));
        assert_eq!(PriceTier::try_from(29), Err(CalcError::UnknownPriceTier(29)));
        let json = serde_json::to_string(&PriceTier::Sek49).unwrap();
        assert_eq!(json, "49");
    }
}
