use leptos::ev;
use leptos::prelude::*;
use rootcoz::content::{NAV_LINKS, nav_anchor};

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|label| {
                view! {
                    <a href=nav_anchor(label) class="nav-link" on:click=close_menu>
                        {*label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"R"</span>
                    <span class="nav-title">"RootCoz"</span>
                </a>
                <div class="nav-links">{links}</div>
                <div class="nav-actions">
                    <a href="#login" class="nav-link">"Login"</a>
                    <a href="#signup" class="nav-cta">"Sign Up"</a>
                </div>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                </button>
            </div>

            // Mobile drawer
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        {links}
                        <a href="#login" class="nav-link" on:click=close_menu>"Login"</a>
                        <a href="#signup" class="nav-cta" on:click=close_menu>"Sign Up"</a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
