use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::dom::{self, set_timeout, Listener};
use crate::config::FILTER_FADE_MS;
use crate::content::view::{filter_buttons, gallery, ProjectCard, ProjectDetail};
use crate::content::{Filter, Portfolio};

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let filter = use_state(|| Filter::All);
    let fading = use_state(|| false);
    let selected = use_state(|| None::<u32>);

    let on_filter = {
        let filter = filter.clone();
        let fading = fading.clone();
        Callback::from(move |key: &'static str| {
            let next = Filter::from_key(key);
            if next == *filter {
                return;
            }

            fading.set(true);
            let filter = filter.clone();
            let fading = fading.clone();
            set_timeout(FILTER_FADE_MS, move || {
                filter.set(next);
                fading.set(false);
            });
        })
    };

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(Some(id)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let detail = (*selected)
        .and_then(|id| props.portfolio.project(id))
        .map(ProjectDetail::new);

    let cards = gallery(&props.portfolio, &filter);

    html! {
        <section id="projects" class="section projects">
            <div class="container">
                <h2 class="section-title fade-in">{"Featured Projects"}</h2>
                <div class="project-filters" role="tablist">
                    { for filter_buttons(&props.portfolio, &filter).into_iter().map(|button| {
                        let on_filter = on_filter.clone();
                        let key = button.key;
                        html! {
                            <button
                                type="button"
                                class={classes!("filter-btn", button.active.then_some("active"))}
                                role="tab"
                                aria-selected={button.active.to_string()}
                                onclick={Callback::from(move |_| on_filter.emit(key))}
                            >
                                <i class={button.icon} aria-hidden="true"></i>
                                <span>{button.label}</span>
                                <span class="filter-count">{button.count}</span>
                            </button>
                        }
                    }) }
                </div>
                <div
                    class="projects-grid"
                    data-filter={filter.key().to_string()}
                    style={format!("opacity: {}; transition: opacity {FILTER_FADE_MS}ms ease", if *fading { 0 } else { 1 })}
                >
                    if cards.is_empty() {
                        <p class="projects-empty">{"No projects in this category yet."}</p>
                    }
                    { for cards.into_iter().map(|card| html! {
                        <ProjectCardView key={card.id} card={card.clone()} on_open={on_open.clone()} />
                    }) }
                </div>
            </div>
            if let Some(detail) = detail {
                <ProjectModal detail={detail} on_close={on_close} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    card: ProjectCard,
    on_open: Callback<u32>,
}

#[function_component(ProjectCardView)]
fn project_card(props: &ProjectCardProps) -> Html {
    let card = &props.card;

    let onclick = {
        let on_open = props.on_open.clone();
        let id = card.id;
        Callback::from(move |event: MouseEvent| {
            let inside_control = event
                .target_dyn_into::<Element>()
                .and_then(|target| target.closest("a, button").ok().flatten())
                .is_some();

            if !inside_control {
                on_open.emit(id);
            }
        })
    };

    let on_details = {
        let on_open = props.on_open.clone();
        let id = card.id;
        Callback::from(move |_| on_open.emit(id))
    };

    html! {
        <article
            class={classes!("project-card", card.featured.then_some("featured"))}
            data-category={card.category.clone()}
            style={format!("animation: fadeInUp 0.6s ease-out {}ms both", card.delay_ms)}
            {onclick}
        >
            if card.featured {
                <span class="project-badge">{"Featured"}</span>
            }
            <div class="project-header">
                <h3 class="project-title">{&card.title}</h3>
                <div class="project-links">
                    if let Some(github) = card.github.clone() {
                        <a href={github} target="_blank" rel="noopener noreferrer" aria-label="GitHub repository">
                            <i class="fab fa-github" aria-hidden="true"></i>
                        </a>
                    }
                    if let Some(demo) = card.demo.clone() {
                        <a href={demo} target="_blank" rel="noopener noreferrer" aria-label="Live demo">
                            <i class="fas fa-external-link-alt" aria-hidden="true"></i>
                        </a>
                    }
                    <button
                        type="button"
                        class="project-details-btn"
                        aria-label={format!("View details: {}", card.short_title)}
                        onclick={on_details}
                    >
                        <i class="fas fa-info-circle" aria-hidden="true"></i>
                    </button>
                </div>
            </div>
            <p class="project-description">{&card.description}</p>
            <ul class="project-achievements">
                { for card.achievements.iter().map(|achievement| html! { <li>{achievement}</li> }) }
            </ul>
            <div class="project-tech">
                { for card.tech_tags.iter().map(|tech| html! { <span class="tech-tag">{tech}</span> }) }
                if let Some(more) = card.more_tech {
                    <span class="tech-tag more">{format!("+{more}")}</span>
                }
            </div>
            <div class="project-footer">
                <span class="project-year">{&card.year}</span>
                <span class={classes!("project-status", card.status_class)}>{card.status_label}</span>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    detail: ProjectDetail,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            dom::lock_body_scroll(true);
            let listener = dom::window_document().map(|document| {
                Listener::new(&document, "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape");
                    if escape {
                        on_close.emit(());
                    }
                })
            });

            move || {
                drop(listener);
                dom::lock_body_scroll(false);
            }
        });
    }

    let on_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let detail = &props.detail;

    html! {
        <div id="projectModal" class="modal active" role="dialog" aria-modal="true" aria-labelledby="projectModalTitle">
            <div class="modal-overlay" onclick={on_overlay}></div>
            <div class="modal-content">
                <button type="button" class="modal-close" aria-label="Close" onclick={on_button}>
                    <i class="fas fa-times" aria-hidden="true"></i>
                </button>
                <div class="modal-header">
                    <h2 id="projectModalTitle">{&detail.title}</h2>
                    <div class="modal-badges">
                        <span class={classes!("badge", "status", detail.status_class)}>{detail.status_label}</span>
                        <span class="badge year">{&detail.year}</span>
                        if detail.featured {
                            <span class="badge featured">{"Featured"}</span>
                        }
                    </div>
                </div>
                <div class="modal-body">
                    <dl class="modal-meta">
                        <dt>{"Role"}</dt><dd>{&detail.role}</dd>
                        <dt>{"Client"}</dt><dd>{&detail.client}</dd>
                        <dt>{"Category"}</dt><dd>{&detail.category}</dd>
                    </dl>
                    <h3>{"Description"}</h3>
                    <p class="modal-description">{&detail.description}</p>
                    <h3>{"Achievements"}</h3>
                    <ul class="modal-achievements">
                        { for detail.achievements.iter().map(|achievement| html! { <li>{achievement}</li> }) }
                    </ul>
                    if !detail.metrics.is_empty() {
                        <h3>{"Metrics"}</h3>
                        <table class="metrics-table">
                            <tbody>
                                { for detail.metrics.iter().map(|row| html! {
                                    <tr>
                                        <th scope="row">{&row.label}</th>
                                        <td>{&row.value}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    }
                    <h3>{"Tech Stack"}</h3>
                    <div class="modal-tech">
                        { for detail.technologies.iter().map(|tech| html! {
                            <span class="tech-item">
                                <i class={tech.icon} aria-hidden="true"></i>
                                {&tech.name}
                            </span>
                        }) }
                    </div>
                    if !detail.images.is_empty() {
                        <div class="modal-gallery">
                            { for detail.images.iter().map(|src| html! {
                                <img
                                    class="skeleton"
                                    src={src.clone()}
                                    alt={detail.title.clone()}
                                    loading="lazy"
                                    onload={Callback::from(|event: Event| {
                                        if let Some(image) = event.target_dyn_into::<Element>() {
                                            let _ = image.class_list().remove_1("skeleton");
                                        }
                                    })}
                                />
                            }) }
                        </div>
                    }
                </div>
                <div class="modal-actions">
                    if let Some(github) = detail.github.clone() {
                        <a class="btn btn-secondary" href={github} target="_blank" rel="noopener noreferrer">
                            <i class="fab fa-github" aria-hidden="true"></i>{" View Code"}
                        </a>
                    }
                    if let Some(demo) = detail.demo.clone() {
                        <a class="btn btn-primary" href={demo} target="_blank" rel="noopener noreferrer">
                            <i class="fas fa-external-link-alt" aria-hidden="true"></i>{" Live Demo"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}
