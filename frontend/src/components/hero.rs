use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::particle_text::ParticleText;
use crate::effects::magnetic::MagneticButton;

#[derive(Clone, PartialEq)]
pub struct Cta {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    /// Rendered below the title as a particle-text headline.
    #[prop_or_default]
    pub accent: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub primary_cta: Option<Cta>,
    #[prop_or_default]
    pub secondary_cta: Option<Cta>,
    #[prop_or(true)]
    pub full_height: bool,
    #[prop_or(true)]
    pub show_scroll_indicator: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let scroll_down = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let options = ScrollToOptions::new();
            options.set_top(height);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <section class={classes!("hero", props.full_height.then_some("hero-full"))}>
            <div class="hero-backdrop" aria-hidden="true">
                <div class="hero-glow hero-glow-coral"></div>
                <div class="hero-glow hero-glow-periwinkle"></div>
                <div class="hero-vignette"></div>
            </div>

            <div class="hero-content container">
                if let Some(subtitle) = &props.subtitle {
                    <p class="hero-subtitle">{ subtitle.clone() }</p>
                }
                <h1 class="hero-title">
                    <span class="hero-title-line">{ props.title.clone() }</span>
                    if let Some(accent) = &props.accent {
                        <ParticleText text={accent.clone()} particles_per_letter={10} class="hero-accent" />
                    }
                </h1>
                if let Some(description) = &props.description {
                    <p class="hero-description">{ description.clone() }</p>
                }
                if props.primary_cta.is_some() || props.secondary_cta.is_some() {
                    <div class="hero-ctas">
                        if let Some(cta) = &props.primary_cta {
                            <MagneticButton href={cta.href} external={cta.external}>
                                { cta.label }
                            </MagneticButton>
                        }
                        if let Some(cta) = &props.secondary_cta {
                            <a
                                class="btn btn-ghost"
                                href={cta.href}
                                target={cta.external.then_some("_blank")}
                                rel={cta.external.then_some("noopener noreferrer")}
                            >
                                { cta.label }
                            </a>
                        }
                    </div>
                }
            </div>

            if props.show_scroll_indicator && props.full_height {
                <button class="hero-scroll" onclick={scroll_down} aria-label="Scroll to content">
                    <span>{"Scroll"}</span>
                    <svg class="hero-scroll-arrow" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                    </svg>
                </button>
            }
        </section>
    }
}
