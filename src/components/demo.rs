use yew::prelude::*;

use crate::components::icon::Glyph;
use crate::config::DEMO_ANCHOR;
use crate::content::{Contact, Demo, Icon};
use crate::outbound::Outbound;

#[derive(Properties, PartialEq)]
pub struct DemoCallProps {
    pub demo: Demo,
    pub contact: Contact,
}

/// Closing call-to-action, the target of every "Book Demo" button.
#[function_component(DemoCall)]
pub fn demo_call(props: &DemoCallProps) -> Html {
    let request = Outbound::demo_request(&props.contact);
    let book = Callback::from(move |_: MouseEvent| request.follow());

    // No phone listed means there is nothing to schedule.
    let call = props.contact.phones.first().map(Outbound::dial);
    let schedule = {
        let call = call.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(call) = &call {
                call.follow();
            }
        })
    };

    html! {
        <section id={DEMO_ANCHOR} class="demo-call">
            <div class="demo-call__glow">
                <div class="demo-call__orb demo-call__orb--left"></div>
                <div class="demo-call__orb demo-call__orb--right"></div>
            </div>
            <div class="demo-call__content">
                <h2>{&props.demo.title}</h2>
                <p class="demo-call__lead">{&props.demo.lead}</p>
                <div class="demo-call__actions">
                    <button class="demo-call__primary" onclick={book}>
                        {&props.demo.primary_cta}
                        <Glyph icon={Icon::ArrowRight} class={classes!("nudge")} />
                    </button>
                    <button class="demo-call__secondary" onclick={schedule} disabled={call.is_none()}>
                        {&props.demo.secondary_cta}
                    </button>
                </div>
                <div class="demo-call__assurances">
                    { for props.demo.assurances.iter().map(|line| html! {
                        <div class="demo-call__assurance">
                            <Glyph icon={Icon::Check} />
                            <span>{line}</span>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .demo-call {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1.5rem;
                    background: linear-gradient(to bottom right, #2563eb, #1d4ed8, #1e40af);
                }

                .demo-call__glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }

                .demo-call__orb {
                    position: absolute;
                    background: #fff;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .demo-call__orb--left {
                    top: 5rem;
                    left: 5rem;
                    width: 16rem;
                    height: 16rem;
                }

                .demo-call__orb--right {
                    bottom: 5rem;
                    right: 5rem;
                    width: 24rem;
                    height: 24rem;
                }

                .demo-call__content {
                    position: relative;
                    z-index: 10;
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }

                .demo-call h2 {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    line-height: 1.25;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }

                .demo-call__lead {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #dbeafe;
                    margin-bottom: 2.5rem;
                }

                .demo-call__actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }

                .demo-call__primary,
                .demo-call__secondary {
                    width: 100%;
                    padding: 1.25rem 2.5rem;
                    font-size: 1.125rem;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .demo-call__primary {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #fff;
                    color: #2563eb;
                    font-weight: 700;
                    border: none;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .demo-call__primary:hover {
                    background: #f9fafb;
                    transform: scale(1.05);
                }

                .demo-call__primary:hover .nudge {
                    transform: translateX(0.25rem);
                }

                .demo-call__secondary {
                    background: rgba(30, 64, 175, 0.5);
                    backdrop-filter: blur(8px);
                    color: #fff;
                    font-weight: 600;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                }

                .demo-call__secondary:hover {
                    background: rgba(30, 64, 175, 0.7);
                }

                .demo-call__secondary:disabled {
                    cursor: default;
                    opacity: 0.6;
                }

                .demo-call__assurances {
                    margin-top: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    color: #dbeafe;
                    font-size: 0.875rem;
                }

                .demo-call__assurance {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                @media (min-width: 640px) {
                    .demo-call__actions {
                        flex-direction: row;
                    }

                    .demo-call__primary,
                    .demo-call__secondary {
                        width: auto;
                    }
                }
                "#}
            </style>
        </section>
    }
}
