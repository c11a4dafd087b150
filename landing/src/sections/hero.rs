use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let (playing, set_playing) = signal(false);

    view! {
        <section id="product" class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        "AI-Powered Venture Building Platform for "
                        <span class="hero-title-accent">"African Founders"</span>
                    </h1>
                    <p class="hero-description">
                        "Validate ideas, design strong value propositions, test market fit, and launch MVPs faster."
                    </p>
                    <div class="hero-actions">
                        <a href="#get-started" class="btn btn-primary">"Get Started"</a>
                    </div>
                </div>
                <div class=move || if playing.get() { "hero-video playing" } else { "hero-video" }>
                    <img
                        src="/assets/hero-video-placeholder.jpg"
                        alt="RootCoz platform walkthrough"
                        class="hero-video-poster"
                    />
                    <Show when=move || !playing.get()>
                        <button
                            class="hero-play"
                            aria-label="Play video"
                            on:click=move |_| set_playing.set(true)
                        >
                            <svg viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M8 5v14l11-7z" />
                            </svg>
                        </button>
                    </Show>
                </div>
            </div>
        </section>
    }
}
