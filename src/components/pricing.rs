use yew::prelude::*;

use crate::components::icon::Glyph;
use crate::content::{Icon, Plan};
use crate::outbound::Outbound;

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: Plan,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        Outbound::demo().follow();
    });

    html! {
        <div class="plan">
            <div class="plan__badge">{&plan.badge}</div>
            <div class="plan__card">
                <h3>{&plan.name}</h3>
                <div class="plan__prices">
                    <div class="plan__price">
                        <span class="plan__amount plan__amount--setup">{&plan.setup_price}</span>
                        <span class="plan__period">{&plan.setup_label}</span>
                    </div>
                    <div class="plan__price">
                        <span class="plan__amount">{&plan.monthly_price}</span>
                        <span class="plan__period">{&plan.monthly_label}</span>
                    </div>
                    <p class="plan__capacity">{&plan.capacity}</p>
                </div>
                <ul class="plan__features">
                    { for plan.features.iter().map(|feature| html! {
                        <li><Glyph icon={Icon::Check} />{feature}</li>
                    }) }
                </ul>
                <p class="plan__terms">{&plan.terms}</p>
                <button class="plan__cta" {onclick}>
                    {&plan.cta}
                    <Glyph icon={Icon::ArrowRight} class={classes!("nudge")} />
                </button>
            </div>
            <style>
                {r#"
                .plan {
                    position: relative;
                }

                .plan__badge {
                    position: absolute;
                    top: -1.25rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.5rem 1.5rem;
                    background: linear-gradient(to right, #10b981, #059669);
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    white-space: nowrap;
                }

                .plan__card {
                    padding: 2.5rem;
                    background: #fff;
                    border: 2px solid #2563eb;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(219, 234, 254, 0.8);
                    transition: all 0.3s ease;
                }

                .plan__card:hover {
                    transform: translateY(-0.25rem);
                    box-shadow: 0 35px 60px rgba(191, 219, 254, 0.9);
                }

                .plan__card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #2563eb;
                    margin-bottom: 2rem;
                }

                .plan__prices {
                    margin-bottom: 2rem;
                }

                .plan__price {
                    display: flex;
                    align-items: baseline;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }

                .plan__amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                }

                .plan__amount--setup {
                    font-size: 3rem;
                }

                .plan__period {
                    font-size: 1.125rem;
                    color: #4b5563;
                }

                .plan__capacity {
                    margin-top: 0.75rem;
                    color: #4b5563;
                }

                .plan__features {
                    list-style: none;
                    padding: 0 0 2rem;
                    margin: 0 0 2rem;
                    border-bottom: 1px solid #e5e7eb;
                }

                .plan__features li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #374151;
                }

                .plan__features i {
                    color: #10b981;
                }

                .plan__terms {
                    text-align: center;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }

                .plan__cta {
                    width: 100%;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #2563eb;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .plan__cta:hover {
                    background: #1d4ed8;
                }

                .plan__cta:hover .nudge {
                    transform: translateX(0.25rem);
                }
                "#}
            </style>
        </div>
    }
}
