use yew::prelude::*;

use crate::data::{Differentiator, DIFFERENTIATORS};
use crate::effects::scroll_curve::{use_viewport_progress, RevealCurves};

#[derive(Properties, PartialEq)]
struct DifferentiatorCardProps {
    item: &'static Differentiator,
    index: usize,
    progress: f32,
}

#[function_component(DifferentiatorCard)]
fn differentiator_card(props: &DifferentiatorCardProps) -> Html {
    // Row 1 enters early, row 2 later, with a small per-column offset.
    let row = (props.index / 3) as f32;
    let col = (props.index % 3) as f32;
    let start = 0.1 + row * 0.1 + col * 0.05;
    let end = start + 0.2;
    let exit_start = 0.8 + row * 0.05;
    let curves = RevealCurves::card(start, end, exit_start, 1.0);

    html! {
        <div class="diff-card" style={curves.style(props.progress)}>
            <div class="diff-icon" aria-hidden="true">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                    <path stroke-linecap="round" stroke-linejoin="round" d={props.item.icon_path} />
                </svg>
            </div>
            <h3 class="diff-title">{ props.item.title }</h3>
            <p class="diff-description">{ props.item.description }</p>
        </div>
    }
}

/// "Why Healthspan" grid with a scroll-linked cascade: every card shares the
/// section's progress value but samples its own staggered envelope.
#[function_component(Differentiators)]
pub fn differentiators() -> Html {
    let node = use_node_ref();
    let progress = use_viewport_progress(node.clone());
    let header_curves = RevealCurves::header(0.0, 0.2, 0.85, 1.0);

    html! {
        <section ref={node} class="section differentiators">
            <div class="container">
                <div class="section-header" style={header_curves.style(progress)}>
                    <p class="section-eyebrow">{"The Healthspan Difference"}</p>
                    <h2 class="section-title">{"Not Another Conference"}</h2>
                </div>

                <div class="diff-grid">
                    {
                        for DIFFERENTIATORS.iter().enumerate().map(|(index, item)| html! {
                            <DifferentiatorCard key={item.title} {item} {index} {progress} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
