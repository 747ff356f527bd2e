use yew::prelude::*;

use crate::effects::decoded_text::DecodedText;
use crate::effects::magnetic::MagneticButton;

#[function_component(Vision)]
pub fn vision() -> Html {
    html! {
        <section class="section vision">
            <div class="container vision-inner">
                <p class="section-eyebrow">{"Our Vision"}</p>
                <h2 class="section-title">
                    <DecodedText text="THE FUTURE OF LONGEVITY IS NOW" />
                </h2>
                <p class="vision-copy">
                    {"Healthspan Productions exists because the science of living longer, healthier lives has outgrown \
                      the rooms it used to meet in. We build the gatherings where rigorous research, serious capital, \
                      and genuine community share the same stage."}
                </p>
                <p class="vision-copy">
                    {"Every event we produce is an argument for a simple idea: the best way to extend human healthspan \
                      is to put the right people in the same room and give them a reason to stay."}
                </p>
                <div class="vision-cta">
                    <MagneticButton href="/about" strength={0.4}>
                        {"About Healthspan"}
                    </MagneticButton>
                </div>
            </div>
        </section>
    }
}
