use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="pricing" class="cta">
            <div class="container">
                <h2 class="cta-title">"Join 45M+ users today"</h2>
                <p class="cta-description">"Start for free, upgrade anytime."</p>
                <a href="#signup" class="btn btn-primary">"Sign up free"</a>
            </div>
        </section>
    }
}
