//! Static catalog backing the live search demo.

use serde::Serialize;

/// A searchable entry in the demo catalog. Fixed reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

/// The fixed demo catalog, in display order.
pub const CATALOG: [CatalogItem; 6] = [
    CatalogItem {
        title: "Web Development",
        category: "Service",
        description: "Custom websites",
    },
    CatalogItem {
        title: "AI Chatbot",
        category: "Service",
        description: "24/7 automation",
    },
    CatalogItem {
        title: "E-commerce Site",
        category: "Project",
        description: "+38% conversion",
    },
    CatalogItem {
        title: "Lead Bot",
        category: "Project",
        description: "40+ leads/month",
    },
    CatalogItem {
        title: "React & Next.js",
        category: "Tech",
        description: "Modern frameworks",
    },
    CatalogItem {
        title: "Pricing Info",
        category: "Info",
        description: "From $1,200",
    },
];
