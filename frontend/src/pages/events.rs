use yew::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::hero::Hero;
use crate::components::newsletter_cta::NewsletterCta;
use crate::data::{past_events, upcoming_events};
use crate::utils::stagger_delay;

fn event_grid(events: Vec<&'static crate::data::Event>) -> Html {
    html! {
        <div class="event-grid">
            {
                for events.iter().enumerate().map(|(index, event)| html! {
                    <EventCard
                        key={event.slug}
                        event={*event}
                        style={format!("animation-delay: {};", stagger_delay(index, 0.1))}
                    />
                })
            }
        </div>
    }
}

#[function_component(Events)]
pub fn events() -> Html {
    let upcoming = upcoming_events();
    let past = past_events();

    html! {
        <>
            <Hero
                title="Our"
                accent="Events"
                description="Summits, forums, and private dinners. Produced with the same obsession either way."
                full_height={false}
                show_scroll_indicator={false}
            />

            <section class="section">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{"Upcoming"}</h2>
                    </div>
                    if upcoming.is_empty() {
                        <p class="section-lead">{"New dates are being finalized. Subscribe below to hear first."}</p>
                    } else {
                        { event_grid(upcoming) }
                    }
                </div>
            </section>

            <section class="section past-events">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{"Past Events"}</h2>
                    </div>
                    { event_grid(past) }
                </div>
            </section>

            <NewsletterCta />
        </>
    }
}
