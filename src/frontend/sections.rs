use std::rc::Rc;

use js_sys::encode_uri_component;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use super::dom;
use crate::content::links::{
    display_url, MailDraft, CV_FILE_NAME, CV_PATH, EMAIL, FIVERR_URL, GITHUB_URL, LINKEDIN_URL, LOCATION,
    MAILTO_URL, OWNER_HEADLINE, OWNER_NAME, PHONE_DISPLAY, PHONE_URL, WHATSAPP_URL,
};
use crate::content::Portfolio;
use crate::reveal::split_text;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(Hero)]
pub fn hero(props: &PortfolioProps) -> Html {
    let on_cv = Callback::from(|_| dom::download(CV_PATH, CV_FILE_NAME));
    let on_projects = Callback::from(|_| dom::smooth_scroll_to("projects"));

    html! {
        <section id="home" class="section hero">
            <div class="hero-backdrop" data-parallax="0.3" aria-hidden="true"></div>
            <div class="container hero-content">
                <h1 class="hero-title glitch fade-in">{OWNER_NAME}</h1>
                <p class="hero-subtitle" data-split-text="" aria-label={OWNER_HEADLINE}>
                    { for split_text(OWNER_HEADLINE).into_iter().map(|(ch, delay)| html! {
                        <span class="char-animated" aria-hidden="true" style={format!("animation-delay: {delay}ms")}>
                            {ch.to_string()}
                        </span>
                    }) }
                </p>
                <div class="hero-actions fade-in" data-delay="300">
                    <button type="button" class="btn btn-primary" onclick={on_projects}>
                        {"View projects"}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cv}>
                        <i class="fas fa-download" aria-hidden="true"></i>{" Download CV"}
                    </button>
                </div>
                <div class="hero-stats">
                    { for props.portfolio.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <span
                                class="stat-value"
                                data-target={stat.target.to_string()}
                                data-suffix={stat.suffix.clone()}
                            >
                                {"0"}
                            </span>
                            <span class="stat-label">{&stat.label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="container">
                <h2 class="section-title fade-in">{"About Me"}</h2>
                <div class="about-grid">
                    <div class="about-text slide-in" data-animation="slideInLeft">
                        <p>
                            {"Mining engineer turned software developer. I build tools that take the \
                              repetitive work out of mine planning, ventilation, and ground support, \
                              and I teach Python and machine learning to mining professionals."}
                        </p>
                        <p>
                            {"MSc in Software Engineering at UNMSM (admitted in first place) and \
                              Mining Engineering at UNSCH."}
                        </p>
                    </div>
                    <ul class="about-facts slide-in" data-animation="slideInRight" data-delay="200">
                        <li><i class="fas fa-map-marker-alt" aria-hidden="true"></i>{LOCATION}</li>
                        <li><i class="fas fa-envelope" aria-hidden="true"></i>{EMAIL}</li>
                        <li><i class="fas fa-phone" aria-hidden="true"></i>{PHONE_DISPLAY}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(Experience)]
pub fn experience(props: &PortfolioProps) -> Html {
    html! {
        <section id="experience" class="section experience">
            <div class="container">
                <h2 class="section-title fade-in">{"Experience"}</h2>
                <div class="timeline">
                    { for props.portfolio.experience.iter().enumerate().map(|(index, item)| {
                        let side = if index % 2 == 0 { "left" } else { "right" };
                        html! {
                            <article class={classes!("timeline-item", side)}>
                                <span class="timeline-period">{&item.period}</span>
                                <h3>{&item.title}</h3>
                                <p class="timeline-org">{&item.organization}</p>
                                <ul>
                                    { for item.highlights.iter().map(|line| html! { <li>{line}</li> }) }
                                </ul>
                            </article>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills(props: &PortfolioProps) -> Html {
    html! {
        <section id="skills" class="section skills">
            <div class="container">
                <h2 class="section-title fade-in">{"Skills"}</h2>
                <div class="skills-grid">
                    { for props.portfolio.skills.iter().map(|group| html! {
                        <div class="skill-group scale-in" data-animation="scaleIn">
                            <h3>{&group.category}</h3>
                            { for group.items.iter().map(|skill| html! {
                                <div class="skill">
                                    <div class="skill-header">
                                        <span>{&skill.name}</span>
                                        <span>{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class="skill-bar">
                                        <div class="skill-progress" data-level={format!("{}%", skill.level)}></div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Certifications)]
pub fn certifications(props: &PortfolioProps) -> Html {
    html! {
        <section id="certifications" class="section certifications">
            <div class="container">
                <h2 class="section-title fade-in">{"Certifications"}</h2>
                <div class="cert-grid">
                    { for props.portfolio.certifications.iter().enumerate().map(|(index, cert)| html! {
                        <div class="cert-card" data-animation="scaleIn" data-delay={(index * 100).to_string()}>
                            <i class="fas fa-certificate" aria-hidden="true"></i>
                            <h3>{&cert.name}</h3>
                            <p>{format!("{} · {}", cert.issuer, cert.year)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let name = name_ref.cast::<HtmlInputElement>().map(|el| el.value()).unwrap_or_default();
            let email = email_ref.cast::<HtmlInputElement>().map(|el| el.value()).unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default();

            let draft = MailDraft::compose(&name, &email, &message);
            let url = draft.to_url(|value| {
                encode_uri_component(value)
                    .as_string()
                    .unwrap_or_else(|| value.to_string())
            });
            dom::open_url(&url);
        })
    };

    let links = [
        ("fas fa-envelope", EMAIL, MAILTO_URL),
        ("fas fa-phone", PHONE_DISPLAY, PHONE_URL),
        ("fab fa-whatsapp", PHONE_DISPLAY, WHATSAPP_URL),
        ("fab fa-linkedin", display_url(LINKEDIN_URL), LINKEDIN_URL),
        ("fab fa-github", display_url(GITHUB_URL), GITHUB_URL),
        ("fas fa-briefcase", display_url(FIVERR_URL), FIVERR_URL),
    ];

    html! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title fade-in">{"Contact"}</h2>
                <div class="contact-grid">
                    <ul class="contact-links fade-in">
                        { for links.iter().map(|(icon, label, href)| html! {
                            <li>
                                <a href={*href} target="_blank" rel="noopener noreferrer">
                                    <i class={*icon} aria-hidden="true"></i>
                                    {*label}
                                </a>
                            </li>
                        }) }
                    </ul>
                    <form class="contact-form fade-in" data-delay="200" {onsubmit}>
                        <label for="contactName">{"Name"}</label>
                        <input id="contactName" ref={name_ref} type="text" required=true />
                        <label for="contactEmail">{"Email"}</label>
                        <input id="contactEmail" ref={email_ref} type="email" required=true />
                        <label for="contactMessage">{"Message"}</label>
                        <textarea id="contactMessage" ref={message_ref} rows="5" required=true />
                        <button type="submit" class="btn btn-primary">{"Send message"}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <p>{format!("© {year} {OWNER_NAME}. Built with Rust and WebAssembly.")}</p>
        </footer>
    }
}
