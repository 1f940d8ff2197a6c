use leptos::prelude::*;

use super::widgets::Card;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Infrastruktur för jaktlag."</span>
                            <span class="hero-subtitle">
                                "Säkrare säsonger, mindre friktion, bättre kommunikation."
                            </span>
                        </h1>
                        <p class="hero-description">
                            "Jaktlaget samlar kalender, pass, bomkoder, kartor och kommunikation i ett "
                            "rollstyrt, GDPR‑medvetet flöde. Designat för förtroende och fältläsbarhet."
                        </p>
                        <div class="hero-cards">
                            <Card title="Affärsmodell">
                                <div class="card-strong">"Prenumeration per medlem"</div>
                                <div class="card-muted">"Prispunkter för modellering: 19 / 49 kr / mån"</div>
                            </Card>
                            <Card title="Bas / antagande">
                                <div class="card-strong">"Nordiska jaktkort"</div>
                                <div class="card-muted">"Interaktiv kalkyl nedan"</div>
                            </Card>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <PhoneFrame />
                        <p class="hero-caption">
                            "Placera en produkt‑screenshot här (ej marknadsföringsmaterial)."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PhoneFrame() -> impl IntoView {
    view! {
        <div class="phone-frame">
            <div class="phone-notch"></div>
            <div class="phone-screen">
                <img src="assets/app-screenshot.jpg" alt="Jaktlaget App Screenshot" />
            </div>
        </div>
    }
}
