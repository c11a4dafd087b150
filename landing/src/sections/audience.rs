// Audience - portrait row plus the rotating industry pills
use leptos::html;
use leptos::prelude::*;
use rootcoz::Stagger;
use rootcoz::content::{INDUSTRIES, PORTRAITS};

use crate::hooks::{use_reduced_motion, use_reveal, use_rotation, use_site_config};

#[component]
pub fn Audience() -> impl IntoView {
    let config = use_site_config();
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section, config.motion.reveal_threshold);

    view! {
        <section
            id="solutions"
            class=move || if revealed.get() { "audience reveal visible" } else { "audience reveal" }
            node_ref=section
        >
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Built for African Founders"</h2>
                    <p class="section-description">
                        "Our AI is trained with local market data, cultural nuances, and regional trends, "
                        "ensuring solutions are relevant, practical, and high-impact."
                    </p>
                </div>
                <div class="portrait-row">
                    {PORTRAITS
                        .iter()
                        .enumerate()
                        .map(|(i, portrait)| {
                            // Middle card spans the row; the outer two are centred.
                            let class = if i == 1 { "portrait portrait-tall" } else { "portrait" };
                            view! {
                                <div
                                    class=class
                                    style=format!(
                                        "background:{};max-width:{}px;aspect-ratio:{}/{}",
                                        portrait.background,
                                        portrait.width_px,
                                        portrait.width_px,
                                        portrait.height_px,
                                    )
                                >
                                    <img src=portrait.src alt=portrait.alt loading="lazy" />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <IndustryPills />
        </section>
    }
}

#[component]
fn IndustryPills() -> impl IntoView {
    let config = use_site_config();
    let reduced = use_reduced_motion();
    let pills = use_rotation(
        "industries",
        INDUSTRIES.len(),
        config.industries.window,
        config.industry_settings(reduced),
    );

    view! {
        <div class="industries">
            <div class="section-header">
                <h2 class="section-title">"Industry Agnostic"</h2>
                <p class="section-description">
                    "From fintech to agriculture, our AI adapts to any sector, delivering insights "
                    "and strategies tailored to your specific industry needs."
                </p>
            </div>
            {pills.map(|pills| {
                view! {
                    <div class="pill-row" aria-live="off">
                        {move || {
                            let rotation = pills.state.get();
                            let class = if rotation.is_visible() {
                                "industry-pill visible"
                            } else {
                                "industry-pill"
                            };
                            rotation
                                .window_of(INDUSTRIES)
                                .into_iter()
                                .enumerate()
                                .map(|(slot, name)| {
                                    view! {
                                        <span
                                            class=class
                                            style=format!("transition-delay:{}", Stagger::PILLS.css(slot, reduced))
                                        >
                                            {*name}
                                        </span>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                }
            })}
        </div>
    }
}
