// Testimonials - paged carousel that follows the viewport width
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use rootcoz::content::TESTIMONIALS;
use rootcoz::{CarouselKey, Stagger};

use crate::hooks::{
    RotationHandle, use_cards_per_view, use_reduced_motion, use_reveal, use_rotation,
    use_site_config,
};

/// Runs `action` for Enter/Space. The native click is suppressed so the
/// action fires once.
fn on_activate(action: impl Fn() + 'static) -> impl Fn(ev::KeyboardEvent) + 'static {
    move |ev| {
        if CarouselKey::from_key(&ev.key()) == Some(CarouselKey::Activate) {
            ev.prevent_default();
            action();
        }
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let config = use_site_config();
    let reduced = use_reduced_motion();
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section, config.motion.reveal_threshold);
    let cards = use_cards_per_view(config.breakpoints());
    let carousel = use_rotation(
        "testimonials",
        TESTIMONIALS.len(),
        cards.get_untracked(),
        config.testimonial_settings(reduced),
    );

    view! {
        <section
            id="testimonials"
            class=move || if revealed.get() { "testimonials reveal visible" } else { "testimonials reveal" }
            node_ref=section
        >
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Loved & Trusted by Founders"</h2>
                </div>
                {carousel.map(|carousel| {
                    Effect::new(move || carousel.set_window(cards.get()));
                    view! { <Carousel carousel=carousel reduced=reduced /> }
                })}
            </div>
        </section>
    }
}

#[component]
fn Carousel(carousel: RotationHandle, reduced: bool) -> impl IntoView {
    let on_keydown = move |ev: ev::KeyboardEvent| match CarouselKey::from_key(&ev.key()) {
        Some(CarouselKey::Previous) => {
            ev.prevent_default();
            carousel.retreat();
        }
        Some(CarouselKey::Next) => {
            ev.prevent_default();
            carousel.advance();
        }
        _ => {}
    };

    let label = move || {
        let rotation = carousel.state.get();
        format!(
            "Testimonial {} of {}",
            rotation.current_page() + 1,
            rotation.page_count()
        )
    };

    let cards = move || {
        let rotation = carousel.state.get();
        let class = if rotation.is_visible() {
            "testimonial-card visible"
        } else {
            "testimonial-card"
        };
        rotation
            .window_of(TESTIMONIALS)
            .into_iter()
            .enumerate()
            .map(|(slot, testimonial)| {
                view! {
                    <article
                        class=class
                        style=format!("transition-delay:{}", Stagger::TESTIMONIALS.css(slot, reduced))
                    >
                        <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
                        <div class="testimonial-author">
                            <img
                                src=testimonial.photo
                                alt=testimonial.photo_alt()
                                class="testimonial-photo"
                                loading="lazy"
                            />
                            <div>
                                <p class="testimonial-name">{testimonial.name}</p>
                                <p class="testimonial-title">{testimonial.title}</p>
                            </div>
                        </div>
                    </article>
                }
            })
            .collect::<Vec<_>>()
    };

    let dots = move || {
        let rotation = carousel.state.get();
        let current = rotation.current_page();
        (0..rotation.page_count())
            .map(|page| {
                let selected = page == current;
                view! {
                    <button
                        class=if selected { "carousel-dot active" } else { "carousel-dot" }
                        role="tab"
                        aria-selected=selected.to_string()
                        aria-label=format!("Go to testimonial page {}", page + 1)
                        on:click=move |_| carousel.go_to_page(page)
                        on:keydown=on_activate(move || carousel.go_to_page(page))
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div
            class="carousel"
            tabindex="0"
            on:mouseenter=move |_| carousel.stop()
            on:mouseleave=move |_| carousel.start()
            on:keydown=on_keydown
        >
            <div class="carousel-track" aria-live="polite" aria-label=label>
                {cards}
            </div>
            <div class="carousel-controls">
                <button
                    class="carousel-arrow"
                    aria-label="Previous testimonials"
                    on:click=move |_| carousel.retreat()
                    on:keydown=on_activate(move || carousel.retreat())
                >
                    "‹"
                </button>
                <div class="carousel-dots" role="tablist">{dots}</div>
                <button
                    class="carousel-arrow"
                    aria-label="Next testimonials"
                    on:click=move |_| carousel.advance()
                    on:keydown=on_activate(move || carousel.advance())
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
