// Landing page sections

mod audience;
mod cta;
mod faq;
mod footer;
mod guidance;
mod hero;
mod nav;
mod partners;
mod testimonials;

pub use audience::Audience;
pub use cta::CallToAction;
pub use faq::{FaqPanel, FaqTeaser};
pub use footer::Footer;
pub use guidance::Guidance;
pub use hero::Hero;
pub use nav::Nav;
pub use partners::Partners;
pub use testimonials::Testimonials;
