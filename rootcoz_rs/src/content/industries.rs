/// Sectors cycled through the "Industry Agnostic" pill cluster, seven at a time.
pub const INDUSTRIES: &[&str] = &[
    "Agriculture",
    "Finance",
    "Retail",
    "Education",
    "Healthcare",
    "Technology",
    "Manufacturing",
    "Logistics",
    "Real Estate",
    "Hospitality",
    "Marketing",
    "Entertainment",
    "Legal",
    "Consulting",
    "Insurance",
    "Construction",
    "Transportation",
    "E-commerce",
    "Telecommunications",
    "Media",
    "Automotive",
    "Energy",
    "Food & Beverage",
    "Fashion",
    "Sports",
    "Travel",
    "Gaming",
    "Non-profit",
    "Aerospace",
    "Pharmaceuticals",
    "Biotech",
    "Mining",
];
