// Landing page routes

mod faqs;
mod home;
mod not_found;

pub use faqs::FaqsPage;
pub use home::HomePage;
pub use not_found::NotFound;
