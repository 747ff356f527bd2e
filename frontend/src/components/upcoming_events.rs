use yew::prelude::*;
use yew_router::components::Link;

use crate::components::event_card::EventCard;
use crate::data::upcoming_events;
use crate::effects::scroll_curve::{use_viewport_progress, RevealCurves};
use crate::Route;

/// Home-page events section. The header fades in, holds, and fades back out
/// as the section travels through the viewport.
#[function_component(UpcomingEvents)]
pub fn upcoming_events_section() -> Html {
    let node = use_node_ref();
    let progress = use_viewport_progress(node.clone());
    let header_curves = RevealCurves::header(0.1, 0.25, 0.75, 0.9);

    let events = upcoming_events();

    html! {
        <section ref={node} class="section upcoming-events">
            <div class="container">
                <div class="section-header" style={header_curves.style(progress)}>
                    <p class="section-eyebrow">{"Mark Your Calendar"}</p>
                    <h2 class="section-title">{"Upcoming Events"}</h2>
                    <p class="section-lead">
                        {"Join us where the longevity field actually meets: on stage, at the table, and in the water at sunrise."}
                    </p>
                </div>

                <div class="event-grid">
                    {
                        for events.iter().map(|event| html! {
                            <EventCard key={event.slug} event={*event} />
                        })
                    }
                </div>

                <div class="section-footer">
                    <Link<Route> to={Route::Events} classes="btn btn-ghost">
                        {"See All Events"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
