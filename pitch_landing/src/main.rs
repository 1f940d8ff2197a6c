// Jaktlaget investor pitch — Leptos 0.8 CSR

mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ChartGradients />
        <div class="backdrop"></div>
        <Nav />
        <main>
            <Hero />
            <ProblemSolution />
            <Calculator />
            <RevenueSection />
            <MoatAndRisks />
            <Sources />
        </main>
        <Footer />
    }
}
