use yew::prelude::*;
use yew_router::components::Link;

use crate::components::spotlight_card::SpotlightCard;
use crate::data::Event;
use crate::utils::format_date_range;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: &'static Event,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = props.event;
    html! {
        <div class="event-card-wrap" style={props.style.clone()}>
            <SpotlightCard class="event-card">
                <div class="event-card-meta">
                    <span class="event-type-badge">{ event.event_type.label() }</span>
                    <span class="event-date">{ format_date_range(event.date, event.end_date) }</span>
                </div>
                <h3 class="event-card-title">{ event.title }</h3>
                <p class="event-card-location">
                    { event.location }
                    if let Some(venue) = event.venue {
                        <span class="event-card-venue">{ " · " }{ venue }</span>
                    }
                </p>
                <p class="event-card-description">{ event.short_description }</p>
                <Link<Route> to={Route::EventDetail { slug: event.slug.to_string() }} classes="event-card-link">
                    {"View Event"}
                </Link<Route>>
            </SpotlightCard>
        </div>
    }
}
