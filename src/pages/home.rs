use std::rc::Rc;

use log::warn;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    demo::DemoCall,
    footer::SiteFooter,
    header::SiteHeader,
    hero::{Hero, StatsBar},
    reveal::RevealSection,
};
use crate::content::Content;
use crate::sections::SectionId;
use crate::shell::attach::attach;
use crate::shell::look::render;
use crate::shell::state::{PageAction, PageState};
use crate::viewport::browser::BrowserHost;

/// The page shell: owns the header and reveal state and subscribes to the
/// browser's scroll and viewport signals for as long as it is mounted.
#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<Content>>().unwrap_or_default();
    let state = use_reducer_eq(PageState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_once(move || {
            let sink = Callback::from(move |action: PageAction| dispatcher.dispatch(action));
            let attachment = match BrowserHost::new() {
                Ok(host) => Some(attach(&host, sink)),
                Err(err) => {
                    warn!("No viewport to observe ({}), showing all sections", err);
                    sink.emit(PageAction::RevealAll);
                    None
                }
            };
            move || drop(attachment)
        });
    }

    let look = render(&state);

    html! {
        <div class="landing">
            <SiteHeader brand={content.brand.clone()} look={look.header} />
            <Hero hero={content.hero.clone()} />
            <StatsBar stats={content.stats.clone()} />
            { for SectionId::ALL.into_iter().filter_map(|id| {
                content.section(id).map(|section| html! {
                    <RevealSection key={id.anchor()} section={section.clone()} look={look.section(id)} />
                })
            }) }
            <DemoCall demo={content.demo.clone()} contact={content.contact.clone()} />
            <SiteFooter
                brand_name={content.brand.name.clone()}
                footer={content.footer.clone()}
                contact={content.contact.clone()}
            />
            <style>
                {r#"
                .landing {
                    background: #fff;
                    font-family: 'Inter', system-ui, sans-serif;
                    -webkit-font-smoothing: antialiased;
                    overflow-x: hidden;
                    color: #111827;
                }

                .nudge {
                    display: inline-block;
                    transition: transform 0.2s ease;
                }

                .content-section {
                    padding: 6rem 1.5rem;
                }

                .backdrop-blue-fade { background: linear-gradient(to bottom, rgba(239, 246, 255, 0.5), #fff); }
                .backdrop-purple-fade { background: linear-gradient(to bottom right, #faf5ff, #fff); }
                .backdrop-gray { background: #f9fafb; }
                .backdrop-gray-fade { background: linear-gradient(to bottom, #f9fafb, #fff); }

                .tone-red { --tone: #dc2626; --tone-ink: #b91c1c; --tone-soft: #fef2f2; --tone-edge: #fecaca; }
                .tone-blue { --tone: #2563eb; --tone-ink: #1d4ed8; --tone-soft: #dbeafe; --tone-edge: #93c5fd; }
                .tone-purple { --tone: #9333ea; --tone-ink: #7e22ce; --tone-soft: #f3e8ff; --tone-edge: #d8b4fe; }
                .tone-emerald { --tone: #10b981; --tone-ink: #047857; --tone-soft: #d1fae5; --tone-edge: #a7f3d0; }
                .tone-green { --tone: #16a34a; --tone-ink: #15803d; --tone-soft: #dcfce7; --tone-edge: #bbf7d0; }

                .reveal {
                    margin: 0 auto;
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .reveal--hidden {
                    opacity: 0;
                    transform: translateY(2rem);
                }

                .reveal--shown {
                    opacity: 1;
                    transform: translateY(0);
                }

                .reveal--centered {
                    text-align: center;
                }

                .width-card { max-width: 600px; }
                .width-narrow { max-width: 800px; }
                .width-regular { max-width: 900px; }
                .width-wide { max-width: 1000px; }

                .content-section__heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .eyebrow {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    margin-bottom: 1rem;
                    background: var(--tone-soft);
                    color: var(--tone-ink);
                    font-size: 0.875rem;
                    font-weight: 500;
                    border-radius: 9999px;
                }

                .content-section h2 {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .content-section__intro {
                    max-width: 700px;
                    margin: 1.5rem auto 0;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #4b5563;
                }

                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .pain-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: #fff;
                    border: 2px solid #f3f4f6;
                    border-radius: 1rem;
                    transition: all 0.3s ease;
                }

                .pain-card:hover {
                    border-color: var(--tone-edge);
                    box-shadow: 0 10px 15px var(--tone-soft);
                }

                .pain-card__icon {
                    padding: 0.75rem;
                    background: var(--tone-soft);
                    color: var(--tone);
                    border-radius: 0.5rem;
                }

                .pain-card p {
                    margin-top: 0.5rem;
                    font-size: 1.125rem;
                    line-height: 1.6;
                }

                .feature-card {
                    padding: 2rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    transition: all 0.3s ease;
                }

                .feature-card:hover {
                    border-color: var(--tone-edge);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    transform: translateY(-0.25rem);
                }

                .feature-card__icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    background: var(--tone-soft);
                    color: var(--tone);
                    border-radius: 0.75rem;
                    transition: all 0.3s ease;
                }

                .feature-card:hover .feature-card__icon {
                    background: var(--tone);
                    color: #fff;
                }

                .feature-card h3 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .feature-card p {
                    color: #4b5563;
                }

                .benefit-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: linear-gradient(to bottom right, #ecfdf5, #fff);
                    border: 1px solid #d1fae5;
                    border-radius: 1rem;
                    transition: box-shadow 0.3s ease;
                }

                .benefit-card:hover {
                    box-shadow: 0 10px 15px #d1fae5;
                }

                .benefit-card__tick {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--tone);
                    color: #fff;
                    border-radius: 9999px;
                }

                .benefit-card p {
                    font-size: 1.125rem;
                    font-weight: 500;
                    line-height: 1.6;
                }

                .audience-grid {
                    margin-bottom: 3rem;
                }

                .audience-card {
                    padding: 1.5rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    transition: all 0.3s ease;
                }

                .audience-card:hover {
                    border-color: var(--tone-edge);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .audience-card__emoji {
                    font-size: 2.25rem;
                    margin-bottom: 0.75rem;
                }

                .audience-card p {
                    font-size: 1.125rem;
                    font-weight: 500;
                }

                .audience-callout {
                    padding: 2rem;
                    background: linear-gradient(to right, #2563eb, #1d4ed8);
                    color: #fff;
                    border-radius: 1rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .steps {
                    position: relative;
                }

                .steps__line {
                    display: none;
                    position: absolute;
                    top: 3rem;
                    left: 3rem;
                    right: 3rem;
                    height: 2px;
                    background: linear-gradient(to right, #bfdbfe, #93c5fd, #bfdbfe);
                }

                .steps__grid {
                    position: relative;
                    display: grid;
                    gap: 2rem;
                }

                .step {
                    text-align: center;
                }

                .step__badge {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 6rem;
                    height: 6rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to bottom right, #3b82f6, #2563eb);
                    color: #fff;
                    font-size: 2.25rem;
                    border-radius: 1rem;
                    box-shadow: 0 10px 15px rgba(59, 130, 246, 0.3);
                    transition: transform 0.3s ease;
                }

                .step__badge:hover {
                    transform: scale(1.1);
                }

                .step__number {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #fff;
                    color: #2563eb;
                    font-size: 1rem;
                    font-weight: 700;
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .step p {
                    font-size: 1.125rem;
                    font-weight: 500;
                }

                @media (min-width: 768px) {
                    .card-grid--2 { grid-template-columns: repeat(2, 1fr); }
                    .card-grid--3 { grid-template-columns: repeat(3, 1fr); }
                    .steps__line { display: block; }
                    .steps__grid { grid-template-columns: repeat(4, 1fr); }
                }

                @media (min-width: 1024px) {
                    .width-wide .card-grid--3 { grid-template-columns: repeat(3, 1fr); }
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        transition: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
