//! Static page content: navigation sections, projects and testimonials.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::portfolio::PortfolioItem;

/// A top-level page section reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub static NAV_SECTIONS: [NavSection; 6] = [
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "services", label: "Services" },
    NavSection { id: "portfolio", label: "Portfolio" },
    NavSection { id: "testimonials", label: "Testimonials" },
    NavSection { id: "contact", label: "Contact" },
];

/// Filter controls shown above the portfolio grid, `all` first.
pub const PORTFOLIO_CATEGORIES: [(&str, &str); 4] =
    [("all", "All"), ("web", "Web"), ("mobile", "Mobile"), ("design", "Design")];

pub static PORTFOLIO_ITEMS: [PortfolioItem; 6] = [
    PortfolioItem { title: "Storefront", category: "web", summary: "Headless e-commerce front end." },
    PortfolioItem { title: "Fitness Tracker", category: "mobile", summary: "Workout logging app." },
    PortfolioItem { title: "Brand Refresh", category: "design", summary: "Identity and style guide." },
    PortfolioItem { title: "Analytics Dashboard", category: "web", summary: "Realtime metrics for a SaaS team." },
    PortfolioItem { title: "Travel Planner", category: "mobile", summary: "Offline-first itinerary app." },
    PortfolioItem { title: "Landing Pages", category: "design", summary: "Campaign page system." },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 7] = [
    Testimonial { name: "Sara Haddad", role: "Product Manager", quote: "Delivered ahead of schedule with great attention to detail." },
    Testimonial { name: "Omar Khalil", role: "Startup Founder", quote: "Turned a rough idea into a polished product." },
    Testimonial { name: "Lina Mansour", role: "Marketing Lead", quote: "Our conversion rate doubled after the redesign." },
    Testimonial { name: "Yousef Nasser", role: "CTO", quote: "Clean code and clear communication throughout." },
    Testimonial { name: "Maya Aziz", role: "Designer", quote: "A rare developer who cares about pixels." },
    Testimonial { name: "Karim Saleh", role: "Agency Owner", quote: "Our go-to partner for front-end work." },
    Testimonial { name: "Noor Fares", role: "Engineering Manager", quote: "Reliable, fast and easy to work with." },
];
