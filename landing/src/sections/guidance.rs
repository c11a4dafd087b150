// Guidance - mentor orbit around the "Expert Guidance & Support" pitch
use leptos::prelude::*;
use rootcoz::content::{BUILDERS, Builder, shuffled};
use rootcoz::{RandomSource, Stagger};

use crate::browser::{BrowserRandom, preload_image};
use crate::hooks::{use_reduced_motion, use_rotation, use_site_config};

#[component]
pub fn Guidance() -> impl IntoView {
    view! {
        <section id="resources" class="guidance">
            <div class="container">
                <div class="guidance-grid">
                    <div class="guidance-copy">
                        <h2 class="section-title">"Expert Guidance & Support"</h2>
                        <p class="section-description">
                            "Connect with expert mentors who can guide you through your startup journey"
                        </p>
                        <a href="#learn-more" class="btn btn-secondary">"Learn more"</a>
                    </div>
                    <MentorOrbit />
                </div>
            </div>
        </section>
    }
}

/// Presentation order for the orbit: `builders` (or the built-in roster)
/// shuffled once.
fn orbit_roster(builders: Option<&[Builder]>, rng: &mut dyn RandomSource) -> Vec<Builder> {
    shuffled(builders.unwrap_or(BUILDERS), rng)
}

/// Rotating avatars. `builders` replaces the built-in roster.
#[component]
pub fn MentorOrbit(#[prop(optional)] builders: Option<&'static [Builder]>) -> impl IntoView {
    let config = use_site_config();
    let reduced = use_reduced_motion();
    // One shuffle per page load.
    let roster = orbit_roster(builders, &mut BrowserRandom);
    let len = roster.len();
    let builders = StoredValue::new(roster);
    let orbit = use_rotation(
        "mentors",
        len,
        config.mentors.window,
        config.mentor_settings(reduced),
    );

    orbit.map(|orbit| {
        Effect::new(move || {
            let rotation = orbit.state.get();
            if !rotation.is_visible() {
                return;
            }
            builders.with_value(|list| {
                for i in rotation.next_indices() {
                    if let Some(builder) = list.get(i) {
                        preload_image(builder.image);
                    }
                }
            });
        });

        view! {
            <div class="orbit">
                <div class="orbit-ring"></div>
                {move || {
                    let rotation = orbit.state.get();
                    let class = if rotation.is_visible() { "orbit-avatar visible" } else { "orbit-avatar" };
                    builders.with_value(|list| {
                        rotation
                            .window_of(list)
                            .into_iter()
                            .enumerate()
                            .map(|(slot, builder)| {
                                let backdrop = if builder.has_light_backdrop() {
                                    "orbit-photo light"
                                } else {
                                    "orbit-photo"
                                };
                                view! {
                                    <figure
                                        class=format!("{class} slot-{slot}")
                                        style=format!("transition-delay:{}", Stagger::ORBIT.css(slot, reduced))
                                    >
                                        <div class=backdrop>
                                            <img
                                                src=builder.image
                                                alt=format!("{}, Venture Builder", builder.name)
                                            />
                                        </div>
                                        <figcaption class="orbit-name">{builder.first_name()}</figcaption>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        }
    })
}
