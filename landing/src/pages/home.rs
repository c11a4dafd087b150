// Home page - landing hero + highlights
use crate::sections::{Audience, CallToAction, FaqTeaser, Guidance, Hero, Partners, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Partners />
        <Audience />
        <Guidance />
        <Testimonials />
        <CallToAction />
        <FaqTeaser />
    }
}
