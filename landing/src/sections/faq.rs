// FAQ - accordion entry shared by the landing teaser and the FAQ page
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use rootcoz::{FaqCatalog, SingleOpen, is_toggle_key};

use crate::hooks::{use_reveal, use_site_config};

/// One question/answer pair. `on_toggle` fires for clicks and for
/// Enter/Space on the question button.
#[component]
pub fn FaqPanel(
    question: &'static str,
    answer: &'static str,
    question_id: String,
    answer_id: String,
    #[prop(into)] open: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional)] container_id: Option<String>,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if is_toggle_key(&ev.key()) {
            ev.prevent_default();
            on_toggle.run(());
        }
    };

    view! {
        <div
            id=container_id
            class=move || if open.get() { "faq-item open" } else { "faq-item" }
            style=style
        >
            <button
                id=question_id.clone()
                class="faq-question"
                aria-expanded=move || open.get().to_string()
                aria-controls=answer_id.clone()
                on:click=move |_| on_toggle.run(())
                on:keydown=on_keydown
            >
                <span>{question}</span>
                <span class="faq-icon" aria-hidden="true">{move || if open.get() { "−" } else { "+" }}</span>
            </button>
            <div
                id=answer_id
                class="faq-answer"
                role="region"
                aria-labelledby=question_id
                aria-hidden=move || (!open.get()).to_string()
            >
                <p>{answer}</p>
            </div>
        </div>
    }
}

/// Landing teaser: four featured questions, one open at a time.
#[component]
pub fn FaqTeaser() -> impl IntoView {
    let config = use_site_config();
    let catalog = use_context::<FaqCatalog>().unwrap_or_default();
    let open = RwSignal::new(SingleOpen::default());
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section, config.motion.reveal_threshold);

    let panels = catalog
        .teaser()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let index = item.index;
            view! {
                <FaqPanel
                    question=item.question
                    answer=item.answer
                    question_id=format!("faq-question-{i}")
                    answer_id=format!("faq-answer-{i}")
                    open=Signal::derive(move || open.with(|state| state.is_open(index)))
                    on_toggle=Callback::new(move |_| open.update(|state| state.toggle(index)))
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section
            id="faqs"
            class=move || if revealed.get() { "faq-teaser reveal visible" } else { "faq-teaser reveal" }
            node_ref=section
        >
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </div>
                <div class="faq-list">{panels}</div>
                <div class="faq-more">
                    <a href="/faqs" class="btn btn-secondary">"More FAQs"</a>
                </div>
            </div>
        </section>
    }
}
