//! Venture builders for the mentor orbit and portraits for the audience section.

use super::{Builder, Portrait};

pub const BUILDERS: &[Builder] = &[
    Builder {
        image: "/assets/mentor/isidore.png",
        name: "isidore",
    },
    Builder {
        image: "/assets/mentor/david.png",
        name: "david",
    },
    Builder {
        image: "/assets/mentor/kalkidan.png",
        name: "kalkidan",
    },
    Builder {
        image: "/assets/mentor/dennis.png",
        name: "dennis",
    },
    Builder {
        image: "/assets/mentor/jean.png",
        name: "jean",
    },
];

/// The middle card stretches to the full row height; the outer two are centred.
pub const PORTRAITS: &[Portrait] = &[
    Portrait {
        src: "/assets/target/builder1.png",
        alt: "African entrepreneur working on laptop",
        background: "#050038",
        width_px: 175,
        height_px: 340,
    },
    Portrait {
        src: "/assets/target/builder2.png",
        alt: "African founder in business meeting",
        background: "#F4B400",
        width_px: 176,
        height_px: 422,
    },
    Portrait {
        src: "/assets/target/builder3.png",
        alt: "African startup team collaborating",
        background: "#9C0E4E",
        width_px: 175,
        height_px: 340,
    },
];
