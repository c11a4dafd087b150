use leptos::ev;
use leptos::prelude::*;
use rootcoz::content::{FOOTER_GROUPS, LEGAL_SHORTCUTS, SOCIAL_LINKS};
use tracing::debug;

use crate::browser::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (subscribed, set_subscribed) = signal(false);

    // No backend: the form only acknowledges locally.
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if email.with(|value| value.trim().is_empty()) {
            return;
        }
        debug!("newsletter form submitted");
        set_email.set(String::new());
        set_subscribed.set(true);
    };

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <span class="footer-logo">"R"</span>
                        <span class="footer-title">"RootCoz"</span>
                    </div>
                    <div class="footer-newsletter">
                        <h3 class="footer-heading">"Stay updated"</h3>
                        <p class="footer-text">
                            "Get the latest updates on new features and startup insights."
                        </p>
                        <form class="newsletter-form" on:submit=on_submit>
                            <input
                                type="email"
                                class="newsletter-input"
                                placeholder="Enter your email"
                                aria-label="Email address"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn btn-primary">"Subscribe"</button>
                        </form>
                        <Show when=move || subscribed.get()>
                            <p class="newsletter-thanks" role="status">"Thanks for subscribing!"</p>
                        </Show>
                    </div>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        class="footer-social-link"
                                        aria-label=format!("Follow us on {}", social.name)
                                    >
                                        <svg viewBox="0 0 24 24" aria-hidden="true">
                                            <path d=social.icon_path />
                                        </svg>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="footer-groups">
                    {FOOTER_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="footer-group">
                                    <h4 class="footer-heading">{group.title}</h4>
                                    <ul>
                                        {group
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href class="footer-link">{link.name}</a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© {} RootCoz. All rights reserved.", current_year())}
                    </p>
                    <div class="footer-legal">
                        {LEGAL_SHORTCUTS
                            .iter()
                            .map(|link| view! { <a href=link.href class="footer-link">{link.name}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
