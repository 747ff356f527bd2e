use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::newsletter_cta::NewsletterCta;
use crate::components::speaker_card::SpeakerCard;
use crate::data::SPEAKERS;
use crate::utils::stagger_delay;

#[function_component(Speakers)]
pub fn speakers() -> Html {
    // Featured speakers lead the grid.
    let mut ordered: Vec<_> = SPEAKERS.iter().collect();
    ordered.sort_by_key(|s| !s.is_featured);

    html! {
        <>
            <Hero
                title="Voices of"
                accent="Longevity"
                description="The clinicians, researchers, founders, and investors who have taken our stages."
                full_height={false}
                show_scroll_indicator={false}
            />

            <section class="section">
                <div class="container">
                    <div class="speaker-grid">
                        {
                            for ordered.iter().enumerate().map(|(index, speaker)| html! {
                                <SpeakerCard
                                    key={speaker.slug}
                                    speaker={*speaker}
                                    style={format!("animation-delay: {};", stagger_delay(index, 0.08))}
                                />
                            })
                        }
                    </div>
                </div>
            </section>

            <NewsletterCta />
        </>
    }
}
