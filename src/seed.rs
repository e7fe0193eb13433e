//! Sample board contents for running without a database.

use crate::card::{Card, CardFields, CardId};
use crate::column::ColumnId;

struct SampleCard {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    logo: &'static str,
    revenue: &'static str,
    labels: &'static [&'static str],
    status: &'static str,
    url: &'static str,
}

const SAMPLES: [SampleCard; 6] = [
    SampleCard {
        id: "1",
        name: "Analytics Pro",
        description: "Advanced analytics platform with real-time insights and custom dashboards",
        category: "Analytics",
        logo: "📊",
        revenue: "$12,500/mo",
        labels: &["SaaS", "B2B", "Enterprise"],
        status: "ideas",
        url: "https://example.com/analytics-pro",
    },
    SampleCard {
        id: "2",
        name: "Design System",
        description: "Complete design system with components, tokens, and documentation",
        category: "Design",
        logo: "🎨",
        revenue: "$8,200/mo",
        labels: &["UI/UX", "Components"],
        status: "building",
        url: "https://example.com/design-system",
    },
    SampleCard {
        id: "3",
        name: "Task Manager",
        description: "Intuitive project management tool for teams of all sizes",
        category: "Productivity",
        logo: "✅",
        revenue: "$6,800/mo",
        labels: &["Productivity", "Teams"],
        status: "launched",
        url: "https://example.com/task-manager",
    },
    SampleCard {
        id: "4",
        name: "Code Editor",
        description: "Modern code editor with AI assistance and collaborative features",
        category: "Development",
        logo: "💻",
        revenue: "$15,300/mo",
        labels: &["Developer Tools", "AI"],
        status: "ideas",
        url: "https://example.com/code-editor",
    },
    SampleCard {
        id: "5",
        name: "API Gateway",
        description: "Secure and scalable API management platform for modern applications",
        category: "Development",
        logo: "🔗",
        revenue: "$22,100/mo",
        labels: &["Infrastructure", "API"],
        status: "building",
        url: "https://example.com/api-gateway",
    },
    SampleCard {
        id: "6",
        name: "Email Marketing",
        description: "Email marketing automation with advanced segmentation and analytics",
        category: "Marketing",
        logo: "📧",
        revenue: "$9,600/mo",
        labels: &["Marketing", "Automation"],
        status: "launched",
        url: "https://example.com/email-marketing",
    },
];

/// The six-card demo board over the default columns.
#[must_use]
pub fn sample_cards() -> Vec<Card> {
    SAMPLES
        .iter()
        .map(|s| {
            let fields = CardFields {
                name: s.name.to_owned(),
                description: s.description.to_owned(),
                category: s.category.to_owned(),
                logo: s.logo.to_owned(),
                revenue: s.revenue.to_owned(),
                labels: s.labels.iter().map(|l| (*l).to_owned()).collect(),
                redirect_url: Some(s.url.to_owned()),
                extra: serde_json::Map::new(),
            };
            Card::new(CardId::new(s.id), ColumnId::new(s.status), fields)
        })
        .collect()
}
