use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::Glyph;
use crate::content::{Contact, Footer as FooterCopy, Icon};
use crate::outbound::Outbound;

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub brand_name: String,
    pub footer: FooterCopy,
    pub contact: Contact,
}

pub fn copyright(year: i32, credit: &str) -> String {
    format!("© {} {}", year, credit)
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let year = chrono::Local::now().year();
    let chat = Outbound::chat(&props.contact);

    html! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__grid">
                    <div class="site-footer__brand">
                        <div class="site-footer__mark">
                            <div class="site-footer__logo"><Glyph icon={Icon::Users} /></div>
                            <span>{&props.brand_name}</span>
                        </div>
                        <p>{&props.footer.blurb}</p>
                    </div>

                    <div>
                        <h4>{&props.footer.trust_title}</h4>
                        <ul class="site-footer__list">
                            { for props.footer.trust.iter().map(|item| html! {
                                <li><Glyph icon={item.icon} class={classes!("accent")} />{&item.text}</li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{&props.footer.contact_title}</h4>
                        <ul class="site-footer__list">
                            <li>
                                <a class="link-mail" href={format!("mailto:{}", props.contact.email)}>
                                    <Glyph icon={Icon::Mail} />
                                    <span class="break-all">{&props.contact.email}</span>
                                </a>
                            </li>
                            { for props.contact.phones.iter().map(|phone| html! {
                                <li>
                                    <a class="link-phone" href={Outbound::dial(phone).href()}>
                                        <Glyph icon={Icon::Phone} />
                                        <span>{&phone.display}</span>
                                    </a>
                                </li>
                            }) }
                            <li>
                                <a class="link-chat" href={chat.href()} target="_blank" rel="noopener noreferrer">
                                    <Glyph icon={Icon::MessageCircle} />
                                    <span>{&props.contact.whatsapp.label}</span>
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="site-footer__credit">
                    <p>{copyright(year, &props.footer.credit)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 4rem 1.5rem;
                    background: #111827;
                    color: #9ca3af;
                }

                .site-footer__inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .site-footer__grid {
                    display: grid;
                    gap: 3rem;
                    margin-bottom: 3rem;
                }

                .site-footer__mark {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                }

                .site-footer__logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #2563eb;
                    border-radius: 0.5rem;
                }

                .site-footer h4 {
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .site-footer__list {
                    list-style: none;
                    padding: 0;
                    font-size: 0.875rem;
                }

                .site-footer__list li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }

                .site-footer__list a {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .site-footer__list a:hover span {
                    text-decoration: underline;
                }

                .site-footer .accent {
                    color: #10b981;
                }

                .link-mail { color: #60a5fa; }
                .link-mail:hover { color: #93c5fd; }
                .link-phone { color: #9ca3af; }
                .link-phone:hover { color: #fff; }
                .link-chat { color: #34d399; }
                .link-chat:hover { color: #6ee7b7; }

                .break-all {
                    word-break: break-all;
                }

                .site-footer__credit {
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    font-size: 0.875rem;
                }

                @media (min-width: 768px) {
                    .site-footer__grid {
                        grid-template-columns: repeat(4, 1fr);
                    }

                    .site-footer__brand {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_leads_with_the_year() {
        assert_eq!(copyright(2026, "SchoolSync."), "© 2026 SchoolSync.");
    }
}
