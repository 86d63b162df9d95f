//! Portfolio category filter.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

/// The filter value that shows every item.
pub const FILTER_ALL: &str = "all";

/// Which portfolio items are shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PortfolioFilter {
    #[default]
    All,
    Category(String),
}

impl PortfolioFilter {
    /// Parse a filter control's value.
    pub fn from_value(value: &str) -> Self {
        if value == FILTER_ALL { Self::All } else { Self::Category(value.to_owned()) }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Category(category) => category,
        }
    }

    pub fn is_visible(&self, item_category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => category == item_category,
        }
    }
}

/// One project card in the portfolio grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
}

/// Visibility flag per item, in input order.
pub fn visibility(items: &[PortfolioItem], filter: &PortfolioFilter) -> Vec<bool> {
    items.iter().map(|item| filter.is_visible(item.category)).collect()
}
