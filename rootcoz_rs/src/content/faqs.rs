//! The FAQ list, in display order.

use super::FaqEntry;

/// Every FAQ, in the order the full FAQ page lists them.
pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is RootCoz?",
        answer: "RootCoz is an AI-powered venture support platform that guides founders from problem validation to MVP launch. It delivers hands-on and tailored support using custom AI agents across four key stages of early venture building: Problem Validation, Value Proposition Design, MVP Development, and Market Validation.",
    },
    FaqEntry {
        question: "Who is RootCoz for?",
        answer: "RootCoz is built for early-stage founders, investors, accelerators, and venture builders who need structured and personalized support to test startup ideas, understand target markets, build lean MVPs, and validate them with real users.",
    },
    FaqEntry {
        question: "How does RootCoz work?",
        answer: "You start by answering a few guided prompts about your idea and market. RootCoz's AI agents then walk you through a step-by-step process to validate your problem, identify customer segments, design value propositions, build cost-effective MVPs, and prepare for market validation.",
    },
    FaqEntry {
        question: "What kind of support can I expect?",
        answer: "RootCoz offers intelligent, personalized guidance across industry research, customer discovery, survey generation, value proposition design, MVP planning, and go-to-market execution. All insights are structured and actionable to help you move forward with confidence.",
    },
    FaqEntry {
        question: "Can I change plans anytime?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    },
    FaqEntry {
        question: "Is RootCoz only for African markets?",
        answer: "RootCoz is optimized for African markets such as Ethiopia, Kenya, Rwanda, and Nigeria, but it is also adaptable for global users. Its AI agents and frameworks can support entrepreneurs in a wide range of geographic and industry contexts.",
    },
    FaqEntry {
        question: "Can I use RootCoz without a technical background?",
        answer: "Yes. RootCoz is designed to be intuitive and beginner-friendly. Its guided flows and custom AI agents make it easy for anyone to work through startup development steps without needing technical expertise.",
    },
    FaqEntry {
        question: "How is RootCoz different from Google or ChatGPT?",
        answer: "RootCoz is purpose-built for startup development. Unlike generic tools, it uses custom AI agents trained to simulate expert analysts and venture builders. It delivers structured guidance and tailored insights based on proven entrepreneurial frameworks.",
    },
    FaqEntry {
        question: "Is there a free trial?",
        answer: "Our Free plan gives you access to core features. Upgrade anytime to unlock advanced capabilities.",
    },
    FaqEntry {
        question: "Is the data real-time and reliable?",
        answer: "RootCoz analyzes verified and publicly available data sources such as policy reports, academic research, market databases, and industry white papers. It emphasizes relevance, accuracy, and contextual insight in every output.",
    },
    FaqEntry {
        question: "Can I save my progress?",
        answer: "Yes. RootCoz saves every step of your journey so you can keep track of your progress. This progress can be shared with a Venture Builder to brief them on where you are in your startup development process.",
    },
    FaqEntry {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards, PayPal, and bank transfers for annual plans.",
    },
    FaqEntry {
        question: "Do you offer refunds?",
        answer: "Yes, we offer a 30-day money-back guarantee for all paid plans, no questions asked.",
    },
    FaqEntry {
        question: "Is there a cost to using RootCoz?",
        answer: "RootCoz offers a free tier with access to some features. Advanced capabilities such as receiving a comprehensive Problem Validation report, Value Proposition Design support, MVP Development guidance, Market Validation planning, and access to expert Venture Builders are available under paid plans.",
    },
    FaqEntry {
        question: "What kind of support do Venture Builders provide?",
        answer: "RootCoz gives you access to experienced Venture Builders at any stage of your journey. These are domain experts who understand your target market and country context. They help you refine your approach, avoid common pitfalls, and accelerate your progress with personalized, expert support.",
    },
];
