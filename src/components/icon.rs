use yew::prelude::*;

use crate::content::Icon;

impl Icon {
    pub fn fa_class(self) -> &'static str {
        match self {
            Icon::ArrowRight => "fa-arrow-right",
            Icon::BarChart => "fa-chart-column",
            Icon::Calendar => "fa-calendar",
            Icon::Check => "fa-check",
            Icon::Clock => "fa-clock",
            Icon::Cpu => "fa-microchip",
            Icon::Mail => "fa-envelope",
            Icon::MessageCircle => "fa-comment",
            Icon::Phone => "fa-phone",
            Icon::Shield => "fa-shield-halved",
            Icon::TrendingUp => "fa-arrow-trend-up",
            Icon::Users => "fa-users",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    html! {
        <i class={classes!("fa-solid", props.icon.fa_class(), props.class.clone())} aria-hidden="true"></i>
    }
}
