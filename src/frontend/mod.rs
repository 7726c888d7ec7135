mod background;
mod dom;
mod effects;
mod nav;
mod projects;
mod reveal;
mod sections;
mod terminal;

use yew::prelude::*;

use crate::content::Portfolio;
use crate::theme::{resolve_theme, toggle_theme};
use background::ParticleCanvas;
use dom::BrowserTheme;
use effects::Effects;
use nav::Navbar;
use projects::Projects;
use reveal::RevealController;
use sections::{About, Certifications, Contact, Experience, Footer, Hero, Skills};
use terminal::TerminalOverlay;

fn load_portfolio() -> Portfolio {
    match Portfolio::load() {
        Ok(portfolio) => portfolio,
        Err(err) => {
            log::error!("portfolio content unavailable: {err}");
            Portfolio::default()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| resolve_theme(&BrowserTheme));
    let portfolio = use_memo((), |_| load_portfolio());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            BrowserTheme::apply_now(current);
            let controller = RevealController::bind();
            let effects = Effects::bind();
            move || {
                drop(controller);
                drop(effects);
            }
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = toggle_theme(&mut BrowserTheme, *theme);
            theme.set(next);
            next
        })
    };

    html! {
        <>
            <ParticleCanvas theme={*theme} />
            <Navbar theme={*theme} on_toggle_theme={on_toggle_theme.clone()} />
            <main id="content">
                <Hero portfolio={portfolio.clone()} />
                <About />
                <Experience portfolio={portfolio.clone()} />
                <Projects portfolio={portfolio.clone()} />
                <Skills portfolio={portfolio.clone()} />
                <Certifications portfolio={portfolio.clone()} />
                <Contact />
            </main>
            <Footer />
            <TerminalOverlay {on_toggle_theme} />
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("portfolio starting");

    let Some(root) = dom::window_document().and_then(|d| d.get_element_by_id("app")) else {
        log::error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
