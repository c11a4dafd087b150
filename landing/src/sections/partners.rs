use leptos::prelude::*;
use rootcoz::content::PARTNERS;

#[component]
pub fn Partners() -> impl IntoView {
    view! {
        <section class="partners">
            <div class="container">
                <p class="partners-caption">
                    "Trusted by early-stage founders, investors, and growth teams across Africa."
                </p>
                <div class="partners-strip">
                    {PARTNERS
                        .iter()
                        .map(|logo| {
                            view! {
                                <img src=logo.src alt=logo.alt class="partner-logo" loading="lazy" />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
