use super::*;
use crate::state::nav::section_id_from_href;
use crate::state::portfolio::{FILTER_ALL, PortfolioFilter, visibility};

#[test]
fn every_nav_href_resolves_to_its_section() {
    for section in &NAV_SECTIONS {
        assert_eq!(section_id_from_href(&section.href()), Some(section.id));
    }
}

#[test]
fn first_filter_control_is_all() {
    assert_eq!(PORTFOLIO_CATEGORIES[0].0, FILTER_ALL);
}

#[test]
fn every_category_filter_shows_at_least_one_item() {
    for (value, _) in PORTFOLIO_CATEGORIES {
        let filter = PortfolioFilter::from_value(value);
        assert!(visibility(&PORTFOLIO_ITEMS, &filter).contains(&true), "{value} shows nothing");
    }
}

#[test]
fn testimonials_fill_the_widest_view() {
    assert!(TESTIMONIALS.len() > 3);
}
