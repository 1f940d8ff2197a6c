use leptos::prelude::*;

use super::widgets::AntlersIcon;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="#top" class="nav-brand">
                    <span class="nav-logo">
                        <AntlersIcon />
                    </span>
                    <span class="nav-title">"Jaktlaget"</span>
                    <span class="nav-badge">"Investor Pitch"</span>
                </a>
                <div class="nav-links">
                    <a href="#calc" class="nav-link">"Kalkylator"</a>
                    <a href="#revenue" class="nav-link">"Intäkter"</a>
                    <span class="nav-note">"Konfidentiellt – delning efter överenskommelse"</span>
                </div>
            </div>
        </header>
    }
}
