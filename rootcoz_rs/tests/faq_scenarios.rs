use std::time::Duration;

use pretty_assertions::assert_eq;
use rootcoz::content::{FAQS, INDUSTRIES};
use rootcoz::env::MemoryFragment;
use rootcoz::{
    Category, CategoryFilter, FaqCatalog, FaqFilter, FragmentSource, ManualTimers, MultiOpen,
    Rotation, RotationTimer, SiteConfig, SingleOpen, categorize, category_chips, result_summary,
};

fn questions(hits: &[&rootcoz::FaqItem]) -> Vec<&'static str> {
    hits.iter().map(|item| item.question).collect()
}

#[test]
fn trial_search_finds_exactly_one_entry() {
    let catalog = FaqCatalog::default();
    let hits = FaqFilter::new("trial", CategoryFilter::All).apply(&catalog);
    assert_eq!(questions(&hits), vec!["Is there a free trial?"]);
    assert_eq!(result_summary(hits.len()), "1 question found");
}

#[test]
fn pricing_chip_keeps_source_order() {
    let catalog = FaqCatalog::default();
    let pricing = CategoryFilter::Only(Category::PricingBilling);
    let indices = FaqFilter::new("", pricing).visible_indices(&catalog);
    assert_eq!(indices, vec![2, 3, 4, 8, 11, 12, 13]);

    let hits = FaqFilter::new("", pricing).apply(&catalog);
    let names = questions(&hits);
    for expected in [
        "Can I change plans anytime?",
        "What payment methods do you accept?",
        "Do you offer refunds?",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn search_and_chip_intersect() {
    let catalog = FaqCatalog::default();
    let filter = FaqFilter::new(
        "refund",
        CategoryFilter::Only(Category::PlatformFeatures),
    );
    let hits = filter.apply(&catalog);
    assert!(hits.is_empty());
    assert_eq!(result_summary(hits.len()), rootcoz::NO_RESULTS);
}

#[test]
fn every_entry_gets_one_stable_category() {
    for entry in FAQS {
        let first = categorize(entry.question, entry.answer);
        assert_eq!(first, categorize(entry.question, entry.answer));
        assert!(Category::ALL.contains(&first));
    }
}

#[test]
fn chips_follow_first_appearance() {
    let catalog = FaqCatalog::default();
    let labels: Vec<&str> = category_chips(&catalog)
        .into_iter()
        .map(CategoryFilter::label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "All",
            "Getting Started",
            "Platform & Features",
            "Pricing & Billing",
        ]
    );
}

#[test]
fn built_in_slugs_are_unique() {
    assert!(FaqCatalog::default().duplicate_slugs().is_empty());
}

#[test]
fn opening_trial_entry_sets_fragment() {
    let catalog = FaqCatalog::default();
    let fragment = MemoryFragment::default();
    let mut open = MultiOpen::default();

    let trial = catalog
        .find_by_question("Is there a free trial?")
        .expect("trial entry");
    assert!(open.toggle(trial, &fragment));
    assert_eq!(fragment.current().as_deref(), Some("is-there-a-free-trial"));
    assert_eq!(trial.element_id(), "faq-is-there-a-free-trial");
}

#[test]
fn loading_with_fragment_opens_entry() {
    let catalog = FaqCatalog::default();
    let fragment = MemoryFragment::at("is-there-a-free-trial");
    let mut open = MultiOpen::default();

    let hit = open
        .open_from_fragment(&catalog, &fragment)
        .expect("deep link resolves");
    assert_eq!(hit.question, "Is there a free trial?");
    assert!(open.is_open(hit.index));
}

#[test]
fn open_state_survives_filtering() {
    let catalog = FaqCatalog::default();
    let fragment = MemoryFragment::default();
    let mut open = MultiOpen::default();
    let refunds = catalog
        .find_by_question("Do you offer refunds?")
        .expect("refund entry");
    open.toggle(refunds, &fragment);

    let narrowed = FaqFilter::new("refund", CategoryFilter::All).apply(&catalog);
    assert_eq!(narrowed.len(), 1);
    assert!(open.is_open(narrowed[0].index));

    let widened = FaqFilter::default().apply(&catalog);
    let still_open: Vec<usize> = widened
        .iter()
        .filter(|item| open.is_open(item.index))
        .map(|item| item.index)
        .collect();
    assert_eq!(still_open, vec![refunds.index]);
}

#[test]
fn teaser_single_open_round_trip() {
    let catalog = FaqCatalog::default();
    let teaser = catalog.teaser();
    assert_eq!(teaser.len(), 4);

    let mut open = SingleOpen::default();
    open.toggle(teaser[1].index);
    open.toggle(teaser[1].index);
    assert_eq!(open, SingleOpen::default());
}

#[test]
fn reduced_motion_freezes_industry_pills() {
    let config = SiteConfig::default();
    let clock = ManualTimers::new();
    let rotation = Rotation::new(INDUSTRIES.len(), config.industries.window).expect("rotation");
    let initial: Vec<&str> = rotation.window_of(INDUSTRIES).into_iter().copied().collect();

    let pills = RotationTimer::new(
        "industries",
        clock.clone(),
        rotation,
        config.industry_settings(true),
    );
    pills.start();
    clock.advance(Duration::from_secs(3600));

    let after: Vec<&str> = pills
        .rotation()
        .window_of(INDUSTRIES)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(after, initial);
    assert_eq!(after.len(), 7);
}

#[test]
fn industry_pills_rotate_on_schedule() {
    let config = SiteConfig::default();
    let clock = ManualTimers::new();
    let pills = RotationTimer::new(
        "industries",
        clock.clone(),
        Rotation::new(INDUSTRIES.len(), 7).expect("rotation"),
        config.industry_settings(false),
    );
    pills.start();
    clock.advance(Duration::from_millis(4000));
    for tick in 1..=10 {
        assert!(!pills.rotation().is_visible());
        assert_eq!(pills.rotation().start(), ((tick - 1) * 7) % INDUSTRIES.len());

        clock.advance(Duration::from_millis(250));
        assert!(pills.rotation().is_visible());
        assert_eq!(pills.rotation().start(), (tick * 7) % INDUSTRIES.len());
        assert_eq!(pills.rotation().indices().count(), 7);

        clock.advance(Duration::from_millis(3750));
    }
}
