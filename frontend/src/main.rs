use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod data;
mod utils;
mod effects {
    pub mod decoded_text;
    pub mod magnetic;
    pub mod scroll_curve;
    pub mod visibility;
}
mod components {
    pub mod brand_carousel;
    pub mod differentiators;
    pub mod event_card;
    pub mod hero;
    pub mod newsletter_cta;
    pub mod particle_text;
    pub mod speaker_card;
    pub mod spotlight_card;
    pub mod upcoming_events;
    pub mod vision;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod event_detail;
    pub mod events;
    pub mod home;
    pub mod speakers;
}

use components::newsletter_cta::NewsletterForm;
use data::COMPANY;
use pages::{
    about::About,
    contact::Contact,
    event_detail::EventDetail,
    events::Events,
    home::Home,
    speakers::Speakers,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/events")]
    Events,
    #[at("/events/:slug")]
    EventDetail { slug: String },
    #[at("/speakers")]
    Speakers,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        }
        Route::EventDetail { slug } => {
            info!("Rendering event detail for {}", slug);
            html! { <EventDetail {slug} /> }
        }
        Route::Speakers => {
            info!("Rendering Speakers page");
            html! { <Speakers /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => html! {
            <section class="section not-found">
                <div class="container">
                    <h1 class="section-title">{"404"}</h1>
                    <p class="section-lead">{"That page doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-ghost">{"Back Home"}</Link<Route>>
                </div>
            </section>
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 60);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Healthspan"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Events} classes="nav-link">{"Events"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Speakers} classes="nav-link">{"Speakers"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">{"Get in Touch"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-newsletter">
                <h3 class="footer-heading">{"Stay Connected"}</h3>
                <p class="footer-lead">
                    {"Join our community and be the first to know about upcoming events, speaker announcements, and \
                      longevity insights."}
                </p>
                <NewsletterForm />
            </div>

            <div class="container footer-grid">
                <div class="footer-col footer-brand">
                    <p class="footer-logo">{ COMPANY.name }</p>
                    <p class="footer-tagline">{ COMPANY.tagline }</p>
                </div>
                <div class="footer-col">
                    <p class="footer-col-title">{"Explore"}</p>
                    <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                    <Link<Route> to={Route::Events} classes="footer-link">{"Events"}</Link<Route>>
                    <Link<Route> to={Route::Speakers} classes="footer-link">{"Speakers"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contact"}</Link<Route>>
                </div>
                <div class="footer-col">
                    <p class="footer-col-title">{"Follow"}</p>
                    <a class="footer-link" href={COMPANY.instagram} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a class="footer-link" href={COMPANY.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a class="footer-link" href={format!("mailto:{}", COMPANY.email)}>{ COMPANY.email }</a>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{ format!("© 2026 {}. All rights reserved.", COMPANY.name) }</p>
            </div>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to init logging");
    yew::Renderer::<App>::new().render();
}
