use yew::prelude::*;

use crate::components::brand_carousel::BrandCarousel;
use crate::components::differentiators::Differentiators;
use crate::components::hero::{Cta, Hero};
use crate::components::newsletter_cta::NewsletterCta;
use crate::components::speaker_card::SpeakerCard;
use crate::components::upcoming_events::UpcomingEvents;
use crate::components::vision::Vision;
use crate::data::featured_speakers;
use crate::utils::stagger_delay;

#[function_component(Home)]
pub fn home() -> Html {
    let speakers = featured_speakers();

    html! {
        <>
            <Hero
                title="Extend Your"
                accent="Healthspan"
                subtitle="Premium Longevity Events"
                description="We produce the summits, forums, and dinners where longevity science meets capital and culture."
                primary_cta={Cta { label: "Attend the Summit", href: "/events/healthspan-summit-2026", external: false }}
                secondary_cta={Cta { label: "Explore Events", href: "/events", external: false }}
            />

            <UpcomingEvents />
            <Differentiators />
            <Vision />

            <section class="section featured-speakers">
                <div class="container">
                    <div class="section-header">
                        <p class="section-eyebrow">{"On Our Stages"}</p>
                        <h2 class="section-title">{"Featured Speakers"}</h2>
                    </div>
                    <div class="speaker-grid">
                        {
                            for speakers.iter().enumerate().map(|(index, speaker)| html! {
                                <SpeakerCard
                                    key={speaker.slug}
                                    speaker={*speaker}
                                    style={format!("animation-delay: {};", stagger_delay(index, 0.1))}
                                />
                            })
                        }
                    </div>
                </div>
            </section>

            <BrandCarousel />
            <NewsletterCta />
        </>
    }
}
