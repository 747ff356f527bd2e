use yew::prelude::*;

use crate::data::Speaker;
use crate::utils::get_initials;

#[derive(Properties, PartialEq)]
pub struct SpeakerCardProps {
    pub speaker: &'static Speaker,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[function_component(SpeakerCard)]
pub fn speaker_card(props: &SpeakerCardProps) -> Html {
    let speaker = props.speaker;
    html! {
        <div class="speaker-card" style={props.style.clone()}>
            <div class="speaker-avatar" aria-hidden="true">
                { get_initials(speaker.name) }
            </div>
            <h3 class="speaker-name">{ speaker.name }</h3>
            <p class="speaker-role">
                { speaker.role }
                if let Some(organization) = speaker.organization {
                    <span class="speaker-org">{ ", " }{ organization }</span>
                }
            </p>
            <p class="speaker-bio">{ speaker.short_bio }</p>
            <div class="speaker-tags">
                {
                    for speaker.expertise.iter().map(|tag| html! {
                        <span class="speaker-tag">{ tag.label() }</span>
                    })
                }
            </div>
        </div>
    }
}
