use jaktlaget_calc::HUNTING_LICENSES;
use leptos::prelude::*;

#[component]
pub fn Sources() -> impl IntoView {
    let sources = HUNTING_LICENSES
        .iter()
        .map(|e| format!("{} {}", e.region.key(), e.year))
        .collect::<Vec<_>>()
        .join("; ");

    view! {
        <section class="section">
            <div class="container">
                <p class="sources">
                    <span class="sources-label">"Källor:"</span>
                    {format!(
                        " Underlag för aktiva jaktkort (senaste publicerade): {sources}. Uppdatera siffror löpande vid ny statistik."
                    )}
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">
                    {format!("© {year} Jaktlaget. Konfidentiellt underlag för investerare.")}
                </p>
            </div>
        </footer>
    }
}
