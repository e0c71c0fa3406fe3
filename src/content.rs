use std::sync::LazyLock;

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 4] = [
    Service {
        icon: "🎨",
        title: "Branding",
        description: "Distinctive visual identities built from scratch",
    },
    Service {
        icon: "🧩",
        title: "UI/UX Design",
        description: "Interfaces that work",
    },
    Service {
        icon: "🔤",
        title: "Typography",
        description: "The craft of choosing the right type",
    },
    Service {
        icon: "✨",
        title: "Illustration",
        description: "Custom graphics made to order",
    },
];

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: NaiveDate,
    pub category: &'static str,
}

impl BlogPost {
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Newest first.
pub static BLOG_POSTS: LazyLock<Vec<BlogPost>> = LazyLock::new(|| {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("blog post dates should be valid");
    let mut posts = vec![
        BlogPost {
            title: "Design Trends for 2026",
            date: date(2026, 1, 15),
            category: "Trends",
        },
        BlogPost {
            title: "Minimalism in Web Design",
            date: date(2026, 1, 10),
            category: "UI/UX",
        },
        BlogPost {
            title: "The Psychology of Color",
            date: date(2026, 1, 5),
            category: "Theory",
        },
    ];
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
});

#[derive(Debug, Clone)]
pub struct ContactLine {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub static CONTACTS: [ContactLine; 3] = [
    ContactLine {
        icon: "✉️",
        label: "Email",
        value: "hello@portfolio.com",
    },
    ContactLine {
        icon: "📞",
        label: "Phone",
        value: "+7 (999) 123-45-67",
    },
    ContactLine {
        icon: "📍",
        label: "Location",
        value: "Moscow, Russia",
    },
];
