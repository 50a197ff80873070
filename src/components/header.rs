use yew::prelude::*;

use crate::components::icon::Glyph;
use crate::content::{Brand, Icon};
use crate::outbound::Outbound;
use crate::shell::look::HeaderLook;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub brand: Brand,
    pub look: HeaderLook,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        Outbound::demo().follow();
    });

    html! {
        <header class={classes!("site-header", props.look.class())}>
            <div class="site-header__inner">
                <div class="site-header__logo">
                    <img src={props.brand.logo.clone()} alt={props.brand.name.clone()} />
                </div>
                <button class="site-header__cta" {onclick}>
                    {&props.brand.header_cta}
                    <Glyph icon={Icon::ArrowRight} />
                </button>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.3s ease;
                }

                .site-header--top {
                    background: transparent;
                }

                .site-header--solid {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .site-header__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .site-header__logo {
                    width: 10rem;
                }

                .site-header__logo img {
                    width: 100%;
                }

                .site-header__cta {
                    display: none;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1.5rem;
                    background: #2563eb;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .site-header__cta:hover {
                    background: #1d4ed8;
                }

                @media (min-width: 768px) {
                    .site-header__cta {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
