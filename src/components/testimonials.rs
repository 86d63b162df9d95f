//! Testimonials carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CarouselState` owns the index; this component measures the track, feeds
//! resize events into the state and renders its `CarouselFrame` as a
//! horizontal transform. Autoplay advances with `next()` and pauses while
//! the pointer is over the track.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::content::TESTIMONIALS;
use crate::state::carousel::CarouselState;
use crate::util::viewport;

/// Testimonials section with prev/next controls and indicator dots.
#[component]
pub fn Testimonials() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let carousel = RwSignal::new(CarouselState::new(TESTIMONIALS.len()).with_breakpoints(config.breakpoints));
    let hovering = RwSignal::new(false);
    let track_ref = NodeRef::<leptos::html::Div>::new();

    let measure = move || {
        let track_width = track_ref.get_untracked().map_or(0.0, |el| f64::from(el.client_width()));
        carousel.update(|c| c.on_resize(viewport::viewport_width(), track_width));
    };

    // Initial measurement once the track is mounted.
    Effect::new(move || {
        if track_ref.get().is_some() {
            measure();
        }
    });

    let resize_handle = window_event_listener(leptos::ev::resize, move |_| measure());
    on_cleanup(move || resize_handle.remove());

    #[cfg(feature = "csr")]
    {
        if config.autoplay_enabled() {
            let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            let alive_task = alive.clone();
            let interval = std::time::Duration::from_millis(config.autoplay_ms);
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(interval).await;
                    if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    if hovering.get_untracked() {
                        continue;
                    }
                    carousel.update(CarouselState::next);
                }
            });
            on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        }
    }

    let frame = move || carousel.with(CarouselState::render);
    let transform = move || {
        let offset = frame().map_or(0.0, |f| f.offset_px);
        format!("translateX(-{offset}px)")
    };
    let card_basis = move || format!("{}%", carousel.with(CarouselState::card_basis_percent));

    let cards = TESTIMONIALS
        .iter()
        .map(|t| {
            view! {
                <figure class="testimonial-card" style:flex-basis=card_basis>
                    <blockquote>{t.quote}</blockquote>
                    <figcaption>
                        <strong class="text-primary">{t.name}</strong>
                        <span>{t.role}</span>
                    </figcaption>
                </figure>
            }
        })
        .collect_view();

    let indicators = (0..TESTIMONIALS.len())
        .map(|i| {
            let active = move || frame().is_some_and(|f| f.active_indicator == i);
            view! {
                <button
                    class="carousel-indicator"
                    class:active=active
                    aria-label=format!("Show testimonial {}", i + 1)
                    aria-current=move || active().then_some("true")
                    on:click=move |_| carousel.update(|c| c.go_to(i))
                ></button>
            }
        })
        .collect_view();

    view! {
        <section id="testimonials" class="section testimonials">
            <h2 class="section__title">"Testimonials"</h2>
            <div
                class="carousel"
                on:mouseenter=move |_| hovering.set(true)
                on:mouseleave=move |_| hovering.set(false)
            >
                <button
                    class="carousel__prev hover:bg-primary"
                    aria-label="Previous testimonial"
                    on:click=move |_| carousel.update(CarouselState::prev)
                >
                    "‹"
                </button>
                <div class="carousel__viewport">
                    <div class="carousel__track" node_ref=track_ref style:transform=transform>
                        {cards}
                    </div>
                </div>
                <button
                    class="carousel__next hover:bg-primary"
                    aria-label="Next testimonial"
                    on:click=move |_| carousel.update(CarouselState::next)
                >
                    "›"
                </button>
            </div>
            <div class="carousel__indicators">{indicators}</div>
        </section>
    }
}
