// RootCoz Landing Page - Leptos 0.8 Edition

mod browser;
mod hooks;
mod pages;
mod sections;
mod telemetry;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{FaqsPage, HomePage, NotFound};
use rootcoz::{FaqCatalog, SiteConfig};
use sections::{Footer, Nav};
use tracing::{info, warn};

/// Site settings, embedded at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    telemetry::init(&config.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "site.toml rejected, using defaults");
    }

    let catalog = FaqCatalog::default();
    let duplicates = catalog.duplicate_slugs();
    if !duplicates.is_empty() {
        warn!(?duplicates, "faq slugs collide; deep links resolve to the first entry");
    }
    info!(faqs = catalog.len(), "rootcoz landing starting");

    leptos::mount::mount_to_body(move || {
        provide_context(config);
        provide_context(catalog);
        view! { <App/> }
    });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/faqs") view=FaqsPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
