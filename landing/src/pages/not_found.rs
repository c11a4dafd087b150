// Fallback route
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="container">
                <h1 class="section-title">"Page not found"</h1>
                <p class="section-description">"The page you are looking for does not exist."</p>
                <a href="/" class="btn btn-primary">"Back to home"</a>
            </div>
        </section>
    }
}
