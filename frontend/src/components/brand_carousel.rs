use yew::prelude::*;

use crate::data::BRANDS;

fn brand_row(decorative: bool) -> Html {
    html! {
        <div class="marquee-row" aria-hidden={decorative.then_some("true")}>
            {
                for BRANDS.iter().map(|brand| html! {
                    <a
                        class="marquee-item"
                        href={brand.url}
                        target="_blank"
                        rel="noopener noreferrer"
                        tabindex={decorative.then_some("-1")}
                    >
                        { brand.name }
                    </a>
                })
            }
        </div>
    }
}

/// Infinite marquee of partner brands: the row is rendered twice and the
/// track animates by exactly one row width, so the loop is seamless.
#[function_component(BrandCarousel)]
pub fn brand_carousel() -> Html {
    html! {
        <section class="brand-carousel">
            <div class="container">
                <p class="brand-carousel-label">{"Trusted by leading brands in longevity"}</p>
            </div>
            <div class="marquee">
                <div class="marquee-track">
                    { brand_row(false) }
                    { brand_row(true) }
                </div>
            </div>
        </section>
    }
}
