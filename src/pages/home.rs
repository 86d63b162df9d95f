//! The portfolio page: static sections plus the interactive components.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::notification::NotificationToast;
use crate::components::portfolio_grid::PortfolioGrid;
use crate::components::settings_sidebar::{SettingsSidebar, SettingsToggle};
use crate::components::testimonials::Testimonials;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main>
            <section id="home" class="section hero">
                <h1>"Hi, I build things for the web."</h1>
                <p>"Full-stack developer focused on fast, accessible interfaces."</p>
                <a href="#contact" class="btn bg-primary hover:shadow-primary">"Get in touch"</a>
            </section>

            <section id="about" class="section about">
                <h2 class="section__title">"About"</h2>
                <p>"Eight years shipping products for startups and agencies."</p>
            </section>

            <section id="services" class="section services">
                <h2 class="section__title">"Services"</h2>
                <ul class="services__list">
                    <li class="border-primary">"Web applications"</li>
                    <li class="border-primary">"Mobile apps"</li>
                    <li class="border-primary">"UI design"</li>
                </ul>
            </section>

            <PortfolioGrid/>
            <Testimonials/>

            <section id="contact" class="section contact">
                <h2 class="section__title">"Contact"</h2>
                <a href="mailto:hello@example.com" class="text-primary">"hello@example.com"</a>
            </section>
        </main>
        <SettingsToggle/>
        <SettingsSidebar/>
        <NotificationToast/>
    }
}
