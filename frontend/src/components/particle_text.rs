use yew::prelude::*;

use crate::effects::decoded_text::XorShift;

const PARTICLE_COLORS: &[&str] = &[
    "#FF6F61", "#FF8A80", "#FFB4AB", "#8176F2", "#B4A8FF", "#FFFFFF",
];

#[derive(Properties, PartialEq)]
pub struct ParticleTextProps {
    pub text: AttrValue,
    #[prop_or(8)]
    pub particles_per_letter: usize,
    #[prop_or(0.2)]
    pub delay: f32,
    #[prop_or_default]
    pub class: Classes,
}

/// Headline treatment: each letter blurs into place on an 80ms stagger with
/// a small particle burst. Offsets are seeded from the letter index so a
/// re-render doesn't reshuffle the burst.
#[function_component(ParticleText)]
pub fn particle_text(props: &ParticleTextProps) -> Html {
    let letters = props.text.chars().enumerate().map(|(index, ch)| {
        if ch == ' ' {
            return html! { <span class="particle-space"></span> };
        }
        let stagger = props.delay + index as f32 * 0.08;
        let mut rng = XorShift::new((index as u32).wrapping_mul(2_654_435_761).wrapping_add(1));
        let particles = (0..props.particles_per_letter).map(|p| {
            let tx = (rng.next() % 61) as f32 - 30.0;
            let ty = (rng.next() % 61) as f32 - 30.0;
            let scale = 0.3 + (rng.next() % 60) as f32 / 100.0;
            let color = PARTICLE_COLORS[rng.next() as usize % PARTICLE_COLORS.len()];
            let style = format!(
                "--tx: {tx:.0}px; --ty: {ty:.0}px; --pscale: {scale:.2}; background-color: {color}; animation-delay: {stagger:.2}s;"
            );
            html! { <span key={p} class="particle" style={style} aria-hidden="true"></span> }
        });
        let letter_style = format!("animation-delay: {stagger:.2}s;");

        html! {
            <span class="particle-letter-wrap">
                <span class="particle-letter" style={letter_style}>{ ch.to_string() }</span>
                <span class="particle-burst">{ for particles }</span>
            </span>
        }
    });

    html! {
        <span class={classes!("particle-text", props.class.clone())}>
            { for letters }
        </span>
    }
}
