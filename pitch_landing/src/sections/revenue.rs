use jaktlaget_calc::format::format_count;
use jaktlaget_calc::projection::{PROJECTION, PROJECTION_PRICES_SEK};
use jaktlaget_calc::series::profit_series;
use leptos::prelude::*;

use super::widgets::GroupedBarChart;

/// Projection table as submitted, plus yearly profit per price point.
#[component]
pub fn RevenueSection() -> impl IntoView {
    view! {
        <section id="revenue" class="section">
            <div class="container">
                <div class="panel">
                    <div class="panel-header">
                        <div>
                            <h3 class="panel-title">"Potentiella intäkter (estimat)"</h3>
                            <p class="panel-lead">
                                "Enligt inlämnad tabell. Prisnivåer används endast för modellering – inte kundkommunikation."
                            </p>
                        </div>
                        <div class="panel-note">"Alla siffror exkl. moms. Drift = uppskattad årlig driftskostnad."</div>
                    </div>

                    <div class="table-wrap">
                        <table class="revenue-table">
                            <thead>
                                <tr>
                                    <th>"Adoption"</th>
                                    <th>"Användare"</th>
                                    {PROJECTION_PRICES_SEK
                                        .iter()
                                        .map(|p| view! { <th>{format!("Årsintäkt ({p} kr)")}</th> })
                                        .collect_view()}
                                    <th>"Drift/år (estimat)"</th>
                                    <th>"Årsvinst (19 / 29 / 49)"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {PROJECTION
                                    .iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td class="cell-strong">{row.adoption_label()}</td>
                                                <td>{format_count(row.users)}</td>
                                                {row
                                                    .revenue_cells()
                                                    .into_iter()
                                                    .map(|cell| view! { <td>{cell}</td> })
                                                    .collect_view()}
                                                <td>{row.opex_cell()}</td>
                                                <td class="cell-accent">{row.profit_cell()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <GroupedBarChart groups=profit_series() axis_label="Årsvinst (Mkr)" />
                </div>
            </div>
        </section>
    }
}
