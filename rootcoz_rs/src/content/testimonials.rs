//! Founder testimonials shown in the carousel.

use super::Testimonial;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        photo: "/assets/testimonials/testimonial-1.jpg",
        name: "Sarah Chen",
        title: "CEO, TechFlow",
        quote: "RootCoz transformed our startup journey. The mentorship and resources provided were invaluable in scaling our business from idea to Series A.",
    },
    Testimonial {
        id: 2,
        photo: "/assets/testimonials/testimonial-14.jpg",
        name: "Marcus Johnson",
        title: "Founder, GreenTech Solutions",
        quote: "The expert guidance helped us navigate complex market challenges. We went from prototype to profitable in just 18 months.",
    },
    Testimonial {
        id: 3,
        photo: "/assets/testimonials/testimonial-3.jpg",
        name: "Elena Rodriguez",
        title: "Co-founder, DataViz Pro",
        quote: "RootCoz connected us with the right investors and mentors. Their network opened doors we never knew existed.",
    },
    Testimonial {
        id: 4,
        photo: "/assets/testimonials/testimonial-4.jpg",
        name: "David Kim",
        title: "CEO, FinanceAI",
        quote: "The strategic insights from RootCoz mentors helped us pivot at the right time and capture a $50M market opportunity.",
    },
    Testimonial {
        id: 5,
        photo: "/assets/testimonials/testimonial-8.jpg",
        name: "Amara Okafor",
        title: "Founder, HealthTech Innovations",
        quote: "From day one, RootCoz provided the framework and support system that every startup founder needs to succeed.",
    },
    Testimonial {
        id: 6,
        photo: "/assets/testimonials/testimonial-6.jpg",
        name: "James Mitchell",
        title: "Co-founder, EduPlatform",
        quote: "The community and resources at RootCoz are unmatched. We scaled from 1K to 100K users with their strategic guidance.",
    },
    Testimonial {
        id: 7,
        photo: "/assets/testimonials/testimonial-7.jpg",
        name: "Priya Sharma",
        title: "CEO, AI Solutions",
        quote: "RootCoz helped us refine our product-market fit and secure our first major enterprise clients. Game-changing experience.",
    },
    Testimonial {
        id: 8,
        photo: "/assets/testimonials/testimonial-5.jpg",
        name: "Alex Thompson",
        title: "Founder, CloudOps",
        quote: "The technical mentorship and business strategy support from RootCoz accelerated our growth beyond expectations.",
    },
    Testimonial {
        id: 9,
        photo: "/assets/testimonials/testimonial-9.jpg",
        name: "Lisa Wang",
        title: "Co-founder, RetailTech",
        quote: "RootCoz provided the perfect blend of hands-on guidance and strategic vision. Our revenue grew 300% in one year.",
    },
    Testimonial {
        id: 10,
        photo: "/assets/testimonials/testimonial-10.jpg",
        name: "Omar Hassan",
        title: "CEO, MobileTech",
        quote: "The mentor network at RootCoz is incredible. Every conversation brought new insights and actionable strategies.",
    },
    Testimonial {
        id: 11,
        photo: "/assets/testimonials/testimonial-11.jpg",
        name: "Rachel Green",
        title: "Founder, SustainableTech",
        quote: "RootCoz helped us navigate the complex world of impact investing and secure funding aligned with our mission.",
    },
    Testimonial {
        id: 12,
        photo: "/assets/testimonials/testimonial-12.jpg",
        name: "Carlos Rivera",
        title: "Co-founder, LogisticsPro",
        quote: "The operational excellence frameworks from RootCoz transformed our startup into a scalable, efficient business.",
    },
];
