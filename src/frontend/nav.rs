use web_sys::{window, MouseEvent};
use yew::prelude::*;

use super::dom::{self, Listener};
use crate::content::links::OWNER_NAME;
use crate::navigation::{active_section, NavbarState, ScrollTracker, SECTIONS};
use crate::theme::Theme;

const NAV_ITEMS: [(&str, &str); 7] = [
    ("Home", "fas fa-home"),
    ("About", "fas fa-user"),
    ("Experience", "fas fa-briefcase"),
    ("Projects", "fas fa-folder-open"),
    ("Skills", "fas fa-tools"),
    ("Certifications", "fas fa-certificate"),
    ("Contact", "fas fa-envelope"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<(), Theme>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let state = use_state(NavbarState::default);
    let active = use_state(|| Some(SECTIONS[0]));

    {
        let state = state.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let mut tracker = ScrollTracker::default();
            let mut on_scroll = move || {
                let y = dom::scroll_y();
                let (_, viewport_height) = dom::viewport_size();

                state.set(tracker.update(y));
                active.set(active_section(&dom::section_tops(&SECTIONS), y, viewport_height));
            };
            on_scroll();

            let listener = window().map(|win| Listener::new(&win, "scroll", move |_| on_scroll()));
            move || drop(listener)
        });
    }

    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let on_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| {
            on_toggle_theme.emit(());
        })
    };
    let toggle = props.theme.toggle_button();

    html! {
        <nav
            id="navbar"
            class={classes!(
                "navbar",
                state.scrolled.then_some("scrolled"),
                state.hidden.then_some("hidden"),
            )}
        >
            <div class="nav-container">
                <a class="nav-logo" href="#home">{OWNER_NAME}</a>
                <button
                    type="button"
                    class={classes!("nav-toggle", (*menu_open).then_some("is-open"))}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={on_menu}
                >
                    <span></span><span></span><span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then_some("is-open"))}>
                    { for SECTIONS.iter().zip(NAV_ITEMS).map(|(&id, (label, icon))| {
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            dom::smooth_scroll_to(id);
                            menu_open.set(false);
                        });
                        html! {
                            <li>
                                <a
                                    href={format!("#{id}")}
                                    class={classes!("nav-link", (*active == Some(id)).then_some("active"))}
                                    {onclick}
                                >
                                    <i class={icon} aria-hidden="true"></i>
                                    <span>{label}</span>
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button
                    type="button"
                    class="theme-toggle"
                    aria-label={toggle.label}
                    aria-pressed={toggle.pressed.to_string()}
                    onclick={on_theme}
                >
                    <span aria-hidden="true">{toggle.icon}</span>
                </button>
            </div>
        </nav>
    }
}
