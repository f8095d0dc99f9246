use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::motion::Motion;
use crate::components::reveal::{SectionFrame, SectionProps};
use crate::content::{
    self, BRAND, CONTACT_LINES, COPYRIGHT, FOOTER_COLUMNS, FOOTER_IMAGE, FOOTER_TAGLINE, SOCIAL_LINKS,
};
use crate::interaction::ICON;
use crate::layout::SectionKind;

const FOOTER_CSS: &str = r#"
    .footer {
        position: relative;
        padding: 5rem 0;
        background-color: #0f172a;
        background-size: cover;
        background-position: center;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 2rem;
        margin-bottom: 3rem;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
    }
    .footer-brand .icon {
        width: 2rem;
        height: 2rem;
        color: #60a5fa;
    }
    .footer-brand span {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .footer p, .footer-links a, .contact-line span {
        color: #cbd5e1;
    }
    .footer-social {
        display: flex;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .footer-social a {
        display: inline-block;
        color: #94a3b8;
    }
    .footer-social a:hover, .footer-links a:hover {
        color: #60a5fa;
    }
    .footer h3 {
        font-size: 1.125rem;
        font-weight: 600;
        margin-bottom: 1.5rem;
    }
    .footer-links {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .footer-links a {
        text-decoration: none;
        transition: color 0.2s;
    }
    .contact-line {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
    }
    .contact-line .icon {
        width: 1.25rem;
        height: 1.25rem;
        color: #60a5fa;
    }
    .footer-bottom {
        border-top: 1px solid #334155;
        padding-top: 2rem;
        text-align: center;
    }
    .footer-bottom p {
        color: #94a3b8;
    }
"#;

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    html! {
        <SectionFrame
            kind={SectionKind::Footer}
            tag="footer"
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
            style={content::overlay_background(FOOTER_IMAGE, 0.9)}
        >
            <style>{FOOTER_CSS}</style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <IconSvg icon={Icon::Shield} />
                            <span>{BRAND}</span>
                        </div>
                        <p>{FOOTER_TAGLINE}</p>
                        <div class="footer-social">
                            {
                                SOCIAL_LINKS.iter().map(|social| html! {
                                    <Motion key={social.label} interaction={ICON} tag="a" href="#" label={social.label}>
                                        <IconSvg icon={social.icon} />
                                    </Motion>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    {
                        FOOTER_COLUMNS.iter().map(|column| html! {
                            <div key={column.title}>
                                <h3>{column.title}</h3>
                                <ul class="footer-links">
                                    { for column.links.iter().map(|link| html! {
                                        <li><a href="#">{*link}</a></li>
                                    }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }

                    <div>
                        <h3>{"Contact Info"}</h3>
                        {
                            CONTACT_LINES.iter().map(|line| html! {
                                <div class="contact-line">
                                    <IconSvg icon={line.icon} />
                                    <span>{line.text}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                </div>
            </div>
        </SectionFrame>
    }
}
