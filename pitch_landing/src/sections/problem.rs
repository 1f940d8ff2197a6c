use leptos::prelude::*;

use super::widgets::Card;

const PROBLEMS: &[&str] = &[
    "Fragmenterad info: chattgrupper, utspridda dokument, analoga listor.",
    "Risker kring felaktiga bomkoder, passfördelning och samlingstider.",
    "Brist på rollstyrning och spårbarhet vid ändringar.",
];

const SOLUTIONS: &[&str] = &[
    "Samlad plattform: kalender, pass, bomkoder, karta, anslag/chatt.",
    "Roll/behörigheter, notifieringar och tydlig logg av ändringar.",
    "Modern, sober design för förtroende och snabb fältanvändning.",
];

const MOAT: &[&str] = &[
    "Förtroende‑driven design och rollstyrning för jaktlagens verkliga behov.",
    "Onboarding för hela lag – viralitet via inbjudningar, inte enskilda konton.",
    "Modularitet för nordisk expansion (språk, regler, lokala behov).",
];

const RISKS: &[&str] = &[
    "Adoptionsrisk → Pilot med jaktlag, ambassadörer, case‑studies.",
    "Integritetsrisk → GDPR‑först, minimal datalagring, tydliga behörigheter.",
    "Konkurrens → Fokuserad nisch, hög UX‑kvalitet, snabb förbättringstakt.",
];

/// Bulleted list; `tone` picks the bullet color class.
#[component]
fn Bullets(items: &'static [&'static str], tone: &'static str) -> impl IntoView {
    view! {
        <ul class="bullets">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li>
                            <span class=format!("bullet {tone}")>"•"</span>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn ProblemSolution() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container two-col">
                <Card title="Problemet idag">
                    <Bullets items=PROBLEMS tone="bad" />
                </Card>
                <Card title="Vår lösning">
                    <Bullets items=SOLUTIONS tone="good" />
                </Card>
            </div>
        </section>
    }
}

#[component]
pub fn MoatAndRisks() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container two-col">
                <Card title="Försprång / Moat">
                    <Bullets items=MOAT tone="good" />
                </Card>
                <Card title="Risker & åtgärder">
                    <Bullets items=RISKS tone="warn" />
                </Card>
            </div>
        </section>
    }
}
