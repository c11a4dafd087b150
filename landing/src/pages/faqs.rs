// FAQ page - searchable, filterable and deep-linkable accordion
use leptos::html;
use leptos::prelude::*;
use rootcoz::{
    CategoryFilter, FaqCatalog, FaqFilter, MultiOpen, NO_RESULTS, Stagger,
    category_chips, result_summary,
};
use tracing::{debug, warn};

use crate::browser::{BrowserFragment, scroll_to_element, scroll_to_top};
use crate::hooks::{use_debounced, use_hash_change, use_reduced_motion, use_reveal, use_site_config};
use crate::sections::FaqPanel;

#[component]
pub fn FaqsPage() -> impl IntoView {
    let config = use_site_config();
    let reduced = use_reduced_motion();
    let catalog = StoredValue::new(use_context::<FaqCatalog>().unwrap_or_default());

    let query = RwSignal::new(String::new());
    let category = RwSignal::new(CategoryFilter::All);
    let open = RwSignal::new(MultiOpen::default());

    let filter = Memo::new(move |_| FaqFilter::new(query.get(), category.get()));
    let visible = Memo::new(move |_| {
        filter.with(|filter| catalog.with_value(|catalog| filter.visible_indices(catalog)))
    });
    let count = Memo::new(move |_| visible.with(Vec::len));
    let announced = use_debounced(count, config.search_debounce());

    let offset = config.deep_link.scroll_offset_px;
    let scroll_delay = config.scroll_delay();
    let follow_fragment = move || {
        let target = catalog.with_value(|catalog| {
            let mut state = open.get_untracked();
            let hit = state.open_from_fragment(catalog, &BrowserFragment).map(|item| {
                let widened = filter.with_untracked(|filter| filter.revealing(item));
                (item.element_id(), widened)
            });
            open.set(state);
            hit
        });
        let Some((element_id, widened)) = target else {
            return;
        };
        if let Some(FaqFilter { query: text, category: chip }) = widened {
            query.set(text);
            category.set(chip);
        }
        set_timeout(
            move || {
                if !scroll_to_element(&element_id, offset) {
                    debug!(%element_id, "deep link target not rendered");
                }
            },
            scroll_delay,
        );
    };
    follow_fragment();
    use_hash_change(follow_fragment);

    let structured_data = catalog.with_value(|catalog| {
        serde_json::to_string(&catalog.structured_data()).unwrap_or_else(|e| {
            warn!(error = %e, "faq structured data not serialized");
            String::new()
        })
    });

    let chips = catalog
        .with_value(category_chips)
        .into_iter()
        .map(|chip| {
            view! {
                <button
                    class=move || if category.get() == chip { "faq-chip active" } else { "faq-chip" }
                    aria-pressed=move || (category.get() == chip).to_string()
                    on:click=move |_| category.set(chip)
                >
                    {chip.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let list_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(list_ref, config.motion.reveal_threshold);

    let entries = move || {
        visible
            .get()
            .into_iter()
            .enumerate()
            .filter_map(|(position, index)| {
                let item = catalog.with_value(|catalog| catalog.get(index).cloned())?;
                let element_id = item.element_id();
                Some(view! {
                    <FaqPanel
                        question=item.question
                        answer=item.answer
                        question_id=format!("{element_id}-question")
                        answer_id=format!("{element_id}-answer")
                        container_id=element_id
                        style=format!("transition-delay:{}", Stagger::FAQ_LIST.css(position, reduced))
                        open=Signal::derive(move || open.with(|state| state.is_open(index)))
                        on_toggle=Callback::new(move |_| {
                            catalog.with_value(|catalog| {
                                if let Some(item) = catalog.get(index) {
                                    open.update(|state| {
                                        state.toggle(item, &BrowserFragment);
                                    });
                                }
                            })
                        })
                    />
                })
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="faq-page">
            <script type="application/ld+json" inner_html=structured_data></script>
            <div class="container">
                <div class="section-header">
                    <h1 class="section-title">"Frequently Asked Questions"</h1>
                    <p class="section-description">
                        "Find answers to common questions about RootCoz and how we can help accelerate your startup journey."
                    </p>
                </div>

                <div class="faq-search">
                    <input
                        type="search"
                        class="faq-search-input"
                        placeholder="Search FAQs..."
                        aria-label="Search FAQs"
                        prop:value=query
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <div class="faq-chips" role="group" aria-label="Filter by category">{chips}</div>

                <p class="sr-only" aria-live="polite" role="status">
                    {move || announced.get().map(result_summary).unwrap_or_default()}
                </p>

                <div
                    class=move || if revealed.get() { "faq-list reveal visible" } else { "faq-list reveal" }
                    node_ref=list_ref
                >
                    <Show
                        when=move || { count.get() > 0 }
                        fallback=|| view! { <p class="faq-empty">{NO_RESULTS}</p> }
                    >
                        {entries}
                    </Show>
                </div>

                <div class="faq-back">
                    <button class="btn btn-secondary" on:click=move |_| scroll_to_top()>
                        "Back to top"
                    </button>
                </div>
            </div>
        </section>
    }
}

