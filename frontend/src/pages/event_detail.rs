use yew::prelude::*;
use yew_router::components::Link;

use crate::components::hero::Hero;
use crate::components::newsletter_cta::NewsletterCta;
use crate::components::speaker_card::SpeakerCard;
use crate::data::{event_by_slug, speakers_by_slugs, EventStatus};
use crate::effects::magnetic::MagneticButton;
use crate::utils::format_date_range;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct EventDetailProps {
    pub slug: String,
}

#[function_component(EventDetail)]
pub fn event_detail(props: &EventDetailProps) -> Html {
    let Some(event) = event_by_slug(&props.slug) else {
        return html! {
            <section class="section not-found">
                <div class="container">
                    <h1 class="section-title">{"Event Not Found"}</h1>
                    <p class="section-lead">{"The event you're looking for doesn't exist or has been removed."}</p>
                    <Link<Route> to={Route::Events} classes="btn btn-ghost">{"Back to Events"}</Link<Route>>
                </div>
            </section>
        };
    };

    let speakers = speakers_by_slugs(event.speaker_slugs);
    let date_line = format_date_range(event.date, event.end_date);

    html! {
        <>
            <Hero
                title={event.title}
                subtitle={event.event_type.label()}
                description={event.short_description}
                full_height={false}
                show_scroll_indicator={false}
            />

            <section class="section event-detail">
                <div class="container">
                    <div class="event-detail-meta">
                        <p class="event-detail-date">{ date_line }</p>
                        <p class="event-detail-location">
                            { event.location }
                            if let Some(venue) = event.venue {
                                <span>{ " · " }{ venue }</span>
                            }
                        </p>
                    </div>

                    <p class="event-detail-description">{ event.description }</p>

                    if let Some(ticket_url) = event.ticket_url {
                        if event.status == EventStatus::Upcoming {
                            <div class="event-detail-cta">
                                <MagneticButton href={ticket_url} external={true}>
                                    {"Get Tickets"}
                                </MagneticButton>
                            </div>
                        }
                    }

                    if !speakers.is_empty() {
                        <div class="section-header event-detail-speakers">
                            <h2 class="section-title">{"Speakers"}</h2>
                        </div>
                        <div class="speaker-grid">
                            {
                                for speakers.iter().map(|speaker| html! {
                                    <SpeakerCard key={speaker.slug} speaker={*speaker} />
                                })
                            }
                        </div>
                    }
                </div>
            </section>

            <NewsletterCta />
        </>
    }
}
