use yew::prelude::*;

use crate::components::icon::Glyph;
use crate::content::{Hero as HeroCopy, Icon, Stat};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroCopy,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;
    html! {
        <section class="hero">
            <div class="hero__dots"></div>
            <div class="hero__content">
                <div class="hero__badge">
                    <Glyph icon={Icon::TrendingUp} />
                    <span>{&hero.badge}</span>
                </div>
                <h1>
                    {&hero.headline}
                    <span class="hero__highlight">{&hero.highlight}</span>
                </h1>
                <p class="hero__lead">{&hero.lead}</p>
                <div class="hero__proof">
                    <Glyph icon={Icon::Check} />
                    <span>{&hero.proof}</span>
                </div>
            </div>
            <div class="hero__glow hero__glow--left"></div>
            <div class="hero__glow hero__glow--right"></div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 1.5rem 6rem;
                }

                .hero__dots {
                    position: absolute;
                    inset: 0;
                    opacity: 0.15;
                    background-image: radial-gradient(circle at 1px 1px, #2563eb 1px, transparent 0);
                    background-size: 24px 24px;
                }

                .hero__content {
                    position: relative;
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero__badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    margin-bottom: 2rem;
                    background: #eff6ff;
                    border: 1px solid #dbeafe;
                    border-radius: 9999px;
                    color: #1d4ed8;
                    font-size: 0.875rem;
                    font-weight: 500;
                    animation: hero-fade-in 0.8s ease-out both;
                }

                .hero h1 {
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }

                .hero__highlight {
                    display: block;
                    margin-top: 0.5rem;
                    background: linear-gradient(to right, #2563eb, #1d4ed8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero__lead {
                    max-width: 700px;
                    margin: 0 auto 3rem;
                    font-size: 1.5rem;
                    line-height: 1.6;
                    color: #4b5563;
                }

                .hero__proof {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    color: #059669;
                    font-weight: 500;
                }

                .hero__glow {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .hero__glow--left {
                    top: 10rem;
                    left: 2.5rem;
                    width: 18rem;
                    height: 18rem;
                    background: #dbeafe;
                    opacity: 0.2;
                }

                .hero__glow--right {
                    bottom: 5rem;
                    right: 2.5rem;
                    width: 24rem;
                    height: 24rem;
                    background: #eff6ff;
                    opacity: 0.3;
                }

                @keyframes hero-fade-in {
                    from { opacity: 0; transform: translateY(-0.5rem); }
                    to { opacity: 1; transform: none; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
    pub stats: Vec<Stat>,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    html! {
        <section class="stats-bar">
            <div class="stats-bar__grid">
                { for props.stats.iter().map(|stat| html! {
                    <div class="stats-bar__item">
                        <div class="stats-bar__value">{&stat.value}</div>
                        <div class="stats-bar__label">{&stat.label}</div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .stats-bar {
                    padding: 3rem 1.5rem;
                    background: #f9fafb;
                    border-top: 1px solid #f3f4f6;
                    border-bottom: 1px solid #f3f4f6;
                }

                .stats-bar__grid {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .stats-bar__item {
                    text-align: center;
                }

                .stats-bar__value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .stats-bar__label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                @media (min-width: 768px) {
                    .stats-bar__grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
