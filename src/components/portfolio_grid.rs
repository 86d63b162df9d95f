//! Portfolio section with category filter controls.

use leptos::prelude::*;

use crate::content::{PORTFOLIO_CATEGORIES, PORTFOLIO_ITEMS};
use crate::state::portfolio::PortfolioFilter;
use crate::state::ui::UiState;

/// Filter buttons plus the project grid. Filtering toggles each item's
/// visibility class; item content never changes.
#[component]
pub fn PortfolioGrid() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let filters = PORTFOLIO_CATEGORIES
        .into_iter()
        .map(|(value, label)| {
            let active = move || ui.with(|u| u.portfolio_filter.value() == value);
            view! {
                <button
                    class="filter-btn"
                    class:active=active
                    data-filter=value
                    aria-pressed=move || if active() { "true" } else { "false" }
                    on:click=move |_| ui.update(|u| u.portfolio_filter = PortfolioFilter::from_value(value))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let items = PORTFOLIO_ITEMS
        .iter()
        .map(|item| {
            let visible = move || ui.with(|u| u.portfolio_filter.is_visible(item.category));
            view! {
                <article
                    class="portfolio-item"
                    class=("is-visible", visible)
                    class=("is-hidden", move || !visible())
                    data-category=item.category
                >
                    <h3>{item.title}</h3>
                    <p>{item.summary}</p>
                    <span class="portfolio-item__tag bg-primary-soft text-primary">{item.category}</span>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="portfolio" class="section portfolio">
            <h2 class="section__title">"Portfolio"</h2>
            <div class="portfolio__filters">{filters}</div>
            <div class="portfolio__grid">{items}</div>
        </section>
    }
}
