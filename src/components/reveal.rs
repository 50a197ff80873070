use yew::prelude::*;

use crate::components::icon::Glyph;
use crate::components::pricing::PlanCard;
use crate::content::{Icon, Section, SectionBody};
use crate::shell::look::SectionLook;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub section: Section,
    pub look: SectionLook,
}

/// An animated content block. The outer `<section>` is the intersection
/// target; the inner wrapper carries the fade/slide transition.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let section = &props.section;
    let centered = matches!(section.body, SectionBody::Audience { .. });

    html! {
        <section
            id={section.id.anchor()}
            data-animate="true"
            class={classes!("content-section", section.backdrop.class(), section.tone.class())}
        >
            <div class={classes!("reveal", props.look.class(), width_class(&section.body), centered.then(|| "reveal--centered"))}>
                <div class="content-section__heading">
                    <span class="eyebrow">{&section.eyebrow}</span>
                    <h2>{&section.title}</h2>
                    {
                        if let Some(intro) = &section.intro {
                            html! { <p class="content-section__intro">{intro}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                { body(&section.body) }
            </div>
        </section>
    }
}

fn width_class(body: &SectionBody) -> &'static str {
    match body {
        SectionBody::Cards { columns, .. } if *columns >= 3 => "width-wide",
        SectionBody::Audience { .. } => "width-narrow",
        SectionBody::Pricing(_) => "width-card",
        _ => "width-regular",
    }
}

fn body(body: &SectionBody) -> Html {
    match body {
        SectionBody::Cards { columns, items } => html! {
            <div class={classes!("card-grid", format!("card-grid--{}", columns))}>
                { for items.iter().map(|card| {
                    match &card.title {
                        Some(title) => html! {
                            <div class="feature-card">
                                <div class="feature-card__icon"><Glyph icon={card.icon} /></div>
                                <h3>{title}</h3>
                                <p>{&card.text}</p>
                            </div>
                        },
                        None => html! {
                            <div class="pain-card">
                                <div class="pain-card__icon"><Glyph icon={card.icon} /></div>
                                <p>{&card.text}</p>
                            </div>
                        },
                    }
                }) }
            </div>
        },
        SectionBody::Checklist { items } => html! {
            <div class="card-grid card-grid--2">
                { for items.iter().map(|item| html! {
                    <div class="benefit-card">
                        <div class="benefit-card__tick"><Glyph icon={Icon::Check} /></div>
                        <p>{item}</p>
                    </div>
                }) }
            </div>
        },
        SectionBody::Audience { items, callout } => html! {
            <>
                <div class="card-grid card-grid--3 audience-grid">
                    { for items.iter().map(|item| html! {
                        <div class="audience-card">
                            <div class="audience-card__emoji">{&item.emoji}</div>
                            <p>{&item.title}</p>
                        </div>
                    }) }
                </div>
                <div class="audience-callout">
                    <p>{callout}</p>
                </div>
            </>
        },
        SectionBody::Steps { items } => html! {
            <div class="steps">
                <div class="steps__line"></div>
                <div class="steps__grid">
                    { for items.iter().enumerate().map(|(i, step)| html! {
                        <div class="step">
                            <div class="step__badge">
                                <Glyph icon={step.icon} />
                                <div class="step__number">{(i + 1).to_string()}</div>
                            </div>
                            <p>{&step.title}</p>
                        </div>
                    }) }
                </div>
            </div>
        },
        SectionBody::Pricing(plan) => html! { <PlanCard plan={plan.clone()} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Plan;

    #[test]
    fn wide_grids_get_the_wide_container() {
        let cards = |columns| SectionBody::Cards { columns, items: vec![] };
        assert_eq!(width_class(&cards(2)), "width-regular");
        assert_eq!(width_class(&cards(3)), "width-wide");
        assert_eq!(
            width_class(&SectionBody::Audience { items: vec![], callout: String::new() }),
            "width-narrow"
        );
        let plan = Plan {
            badge: String::new(),
            name: String::new(),
            setup_price: String::new(),
            setup_label: String::new(),
            monthly_price: String::new(),
            monthly_label: String::new(),
            capacity: String::new(),
            features: vec![],
            terms: String::new(),
            cta: String::new(),
        };
        assert_eq!(width_class(&SectionBody::Pricing(plan)), "width-card");
    }
}
