use yew::prelude::*;

use crate::components::differentiators::Differentiators;
use crate::components::hero::Hero;
use crate::components::newsletter_cta::NewsletterCta;
use crate::data::{COMPANY, TEAM};
use crate::effects::decoded_text::DecodedText;
use crate::utils::get_initials;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <>
            <Hero
                title="Where Science Meets"
                accent="Longevity"
                description={COMPANY.tagline}
                full_height={false}
                show_scroll_indicator={false}
            />

            <section class="section about-mission">
                <div class="container about-mission-inner">
                    <h2 class="section-title">
                        <DecodedText text="WHY WE EXIST" />
                    </h2>
                    <p class="vision-copy">
                        {"The longevity field moves fast, but its gatherings haven't kept up: either academic \
                          conferences where founders feel like tourists, or wellness festivals where the science is \
                          an afterthought. Healthspan Productions builds the third kind of room."}
                    </p>
                    <p class="vision-copy">
                        {"We obsess over who is in the audience as much as who is on stage. Our events are capped, \
                          curated, and produced to a standard that respects everyone's time."}
                    </p>
                </div>
            </section>

            <section class="section about-team">
                <div class="container">
                    <div class="section-header">
                        <p class="section-eyebrow">{"The People Behind It"}</p>
                        <h2 class="section-title">{"Our Team"}</h2>
                    </div>
                    <div class="team-grid">
                        {
                            for TEAM.iter().map(|member| html! {
                                <div class="team-card" key={member.name}>
                                    <div class="speaker-avatar" aria-hidden="true">{ get_initials(member.name) }</div>
                                    <h3 class="speaker-name">{ member.name }</h3>
                                    <p class="speaker-role">{ member.role }</p>
                                    <p class="speaker-bio">{ member.bio }</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <Differentiators />
            <NewsletterCta />
        </>
    }
}
