//! Interactive Nordic calculator.
//!
//! Every control is a signal; the scenario and its outputs are memos over
//! `jaktlaget_calc::derive`, so each input change recomputes synchronously
//! before the next paint.

use jaktlaget_calc::calculator::{
    ADOPTION_RANGE, CalculatorInput, CalculatorOutput, MAU_RANGE, PriceTier, SHARE_OF_VOICE_RANGE,
    VIEWS_RANGE, derive,
};
use jaktlaget_calc::format::{format_count, format_mkr, format_sek};
use jaktlaget_calc::series;
use jaktlaget_calc::{HUNTING_LICENSES, NORDIC_TOTAL, Region};
use leptos::prelude::*;

use super::widgets::{BarChart, Card, Metric, OptionButton, Slider};

#[component]
pub fn Calculator() -> impl IntoView {
    let defaults = CalculatorInput::default();

    let (region, set_region) = signal(defaults.region);
    let (adoption, set_adoption) = signal(defaults.adoption_pct as u32);
    let (price, set_price) = signal(defaults.price);

    let (mau, set_mau) = signal(defaults.mau_pct as u32);
    let (views, set_views) = signal(defaults.views_per_mau);
    let (sov, set_sov) = signal(defaults.share_of_voice_pct as u32);

    let input = Memo::new(move |_| {
        CalculatorInput {
            region: region.get(),
            adoption_pct: f64::from(adoption.get()),
            price: price.get(),
            mau_pct: f64::from(mau.get()),
            views_per_mau: views.get(),
            share_of_voice_pct: f64::from(sov.get()),
        }
        .clamped()
    });
    // Clamped inputs always validate.
    let output: Memo<CalculatorOutput> =
        Memo::new(move |_| derive(&input.get()).unwrap_or_default());

    let revenue_points = Signal::derive(move || series::revenue_comparison(&output.get()));
    let reach_points = Signal::derive(move || series::reach_series(&output.get()));

    view! {
        <section id="calc" class="section">
            <div class="container">
                <div class="panel">
                    <div class="panel-header">
                        <div>
                            <h3 class="panel-title">"Interaktiv Nordisk Kalkylator"</h3>
                            <p class="panel-lead">
                                "Välj område, adoption och pris för att modellera potentiella intäkter och annons‑reach."
                            </p>
                        </div>
                        <div class="panel-note">"Not: Aktiva jaktkort = senaste tillgängliga uppgifter per land."</div>
                    </div>

                    <div class="grid-3">
                        <Card title="Område">
                            <div class="option-grid">
                                {Region::ALL
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <OptionButton
                                                label=r.display_name().to_string()
                                                active=move || region.get() == r
                                                on_click=move |_| set_region.set(r)
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <LicenseNote region=region />
                        </Card>

                        <Card title="Adoption & Pris">
                            <Slider
                                label="Adoption (% av aktiva jaktkort)"
                                range=ADOPTION_RANGE
                                value=adoption
                                set_value=set_adoption
                                suffix="%"
                            />
                            <div class="option-row">
                                {PriceTier::ALL
                                    .into_iter()
                                    .map(|tier| {
                                        view! {
                                            <OptionButton
                                                label=format!("{} kr / mån", tier.monthly_sek())
                                                active=move || price.get() == tier
                                                on_click=move |_| set_price.set(tier)
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Card>

                        <Card title="Resultat – prenumeration">
                            <Metric label="Prenumeranter" value=move || format_count(output.get().subscribers) />
                            <Metric label="Intäkt / månad" value=move || format_sek(output.get().monthly_revenue_sek) />
                            <Metric label="Intäkt / år" value=move || format_sek(output.get().annual_revenue_sek) />
                            <BarChart points=revenue_points gradient="revenueGradient" format_value=|v| format_mkr(v, 1) />
                        </Card>
                    </div>

                    <div class="grid-3">
                        <Card title="BONUS: Annons‑reach (anslagstavla)">
                            <Slider label="MAU av prenumeranter" range=MAU_RANGE value=mau set_value=set_mau suffix="%" />
                            <Slider label="Feed‑visningar / MAU / mån" range=VIEWS_RANGE value=views set_value=set_views />
                            <Slider
                                label="Partnerns SOV av annonsutrymme"
                                range=SHARE_OF_VOICE_RANGE
                                value=sov
                                set_value=set_sov
                                suffix="%"
                            />
                            <p class="assumption">"Antagande: 1 annons per 3 inlägg i anslagstavlan."</p>
                        </Card>

                        <Card title="Resultat – annonser">
                            <Metric label="Månatliga visningar (est.)" value=move || format_count(output.get().ads.monthly_impressions) />
                            <Metric label="Unik reach / månad (est.)" value=move || format_count(output.get().ads.unique_reach) />
                            <Metric label="MAU (antal)" value=move || format_count(output.get().ads.monthly_active_users) />
                            <BarChart points=reach_points gradient="adsGradient" format_value=|v| format_count(v as u64) />
                        </Card>

                        <Card title="Snabbjämförelse (år)">
                            <Metric label="19 kr scenario" value=move || format_mkr(output.get().comparison[0].annual_mkr, 2) />
                            <Metric label="49 kr scenario" value=move || format_mkr(output.get().comparison[1].annual_mkr, 2) />
                            <p class="assumption">
                                "Byt pris i panelen för att sätta huvudscenariot. Jämförelsen uppdateras dynamiskt."
                            </p>
                        </Card>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// License count for the selected region; the aggregate lists every country.
#[component]
fn LicenseNote(region: ReadSignal<Region>) -> impl IntoView {
    view! {
        <div class="license-note">
            {move || match region.get().entry() {
                None => {
                    view! {
                        <div class="note-strong">
                            {format!("Aktiva jaktkort (summa): {}", format_count(NORDIC_TOTAL))}
                        </div>
                        <div class="note-list">
                            {HUNTING_LICENSES
                                .iter()
                                .map(|e| {
                                    view! {
                                        <div>{format!("{} {}: {}", e.region.key(), e.year, format_count(e.count))}</div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                Some(entry) => {
                    view! {
                        <div>
                            "Aktiva jaktkort: "
                            <span class="note-strong">{format_count(entry.count)}</span>
                            <span class="note-muted">{format!(" ({})", entry.year)}</span>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
