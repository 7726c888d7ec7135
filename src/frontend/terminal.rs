use std::cell::RefCell;
use std::rc::Rc;

use rand::{rngs::SmallRng, SeedableRng};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, InputEvent, KeyboardEvent};
use yew::prelude::*;

use super::dom::{self, Listener};
use crate::shortcuts::{shortcut_for, Shortcut};
use crate::terminal::{meter_bar, Deferred, Fragment, OutputBlock, Terminal, TerminalHost};
use crate::theme::Theme;

type SharedTerminal = Rc<RefCell<Terminal>>;

/// Bridges terminal actions onto the page.
struct PageHost {
    terminal: SharedTerminal,
    redraw: UseForceUpdateHandle,
    on_toggle_theme: Callback<(), Theme>,
}

impl TerminalHost for PageHost {
    fn toggle_theme(&mut self) -> Theme {
        self.on_toggle_theme.emit(())
    }

    fn navigate(&mut self, section: &str) {
        dom::smooth_scroll_to(section);
    }

    fn download(&mut self, path: &str, file_name: &str) {
        dom::download(path, file_name);
    }

    fn schedule(&mut self, delay_ms: u32, deferred: Deferred) {
        let terminal = self.terminal.clone();
        let redraw = self.redraw.clone();

        spawn_local(async move {
            dom::sleep(delay_ms).await;
            terminal.borrow_mut().apply(deferred);
            redraw.force_update();
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct TerminalOverlayProps {
    pub on_toggle_theme: Callback<(), Theme>,
}

#[function_component(TerminalOverlay)]
pub fn terminal_overlay(props: &TerminalOverlayProps) -> Html {
    let terminal: SharedTerminal = use_mut_ref(|| Terminal::new(SmallRng::from_entropy()));
    let redraw = use_force_update();
    let input_ref = use_node_ref();
    let output_ref = use_node_ref();

    {
        let terminal = terminal.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let listener = dom::window_document().map(|document| {
                Listener::new(&document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };

                    match shortcut_for(&event.key(), event.ctrl_key(), event.alt_key()) {
                        Some(Shortcut::ToggleTerminal) => {
                            event.prevent_default();
                            terminal.borrow_mut().toggle();
                            redraw.force_update();
                        }
                        Some(Shortcut::CloseOverlays) => {
                            let was_open = terminal.borrow().is_open();
                            if was_open {
                                terminal.borrow_mut().close();
                                redraw.force_update();
                            }
                        }
                        Some(Shortcut::Open(url)) => {
                            event.prevent_default();
                            dom::open_url(url);
                        }
                        None => {}
                    }
                })
            });

            move || drop(listener)
        });
    }

    let is_open = terminal.borrow().is_open();

    {
        let input_ref = input_ref.clone();
        let output_ref = output_ref.clone();
        use_effect(move || {
            if is_open {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
                if let Some(output) = output_ref.cast::<HtmlElement>() {
                    output.set_scroll_top(output.scroll_height());
                }
            }
            || ()
        });
    }

    let on_open = {
        let terminal = terminal.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            terminal.borrow_mut().open();
            redraw.force_update();
        })
    };

    let on_close = {
        let terminal = terminal.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            terminal.borrow_mut().close();
            redraw.force_update();
        })
    };

    let oninput = {
        let terminal = terminal.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                terminal.borrow_mut().set_input(input.value());
            }
        })
    };

    let onkeydown = {
        let terminal = terminal.clone();
        let redraw = redraw.clone();
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |event: KeyboardEvent| {
            let key = event.key();
            let mut engine = terminal.borrow_mut();

            match key.as_str() {
                "Enter" => {
                    let mut host = PageHost {
                        terminal: terminal.clone(),
                        redraw: redraw.clone(),
                        on_toggle_theme: on_toggle_theme.clone(),
                    };
                    engine.submit(&mut host);
                }
                "ArrowUp" => {
                    event.prevent_default();
                    engine.history_up();
                }
                "ArrowDown" => {
                    event.prevent_default();
                    engine.history_down();
                }
                "Tab" => {
                    event.prevent_default();
                    engine.autocomplete();
                }
                "l" | "L" if event.ctrl_key() => {
                    event.prevent_default();
                    engine.clear();
                }
                _ => return,
            }

            drop(engine);
            redraw.force_update();
        })
    };

    let engine = terminal.borrow();

    html! {
        <>
            <button
                type="button"
                class="terminal-toggle"
                aria-label="Open terminal"
                title="Terminal (Ctrl+`)"
                onclick={on_open}
            >
                <i class="fas fa-terminal" aria-hidden="true"></i>
            </button>
            <div
                id="terminalModal"
                class={classes!("terminal-modal", is_open.then_some("active"))}
                aria-hidden={(!is_open).to_string()}
            >
                <div class="terminal-overlay" onclick={on_close.clone()}></div>
                <div class="terminal-window" role="dialog" aria-label="Terminal">
                    <div class="terminal-header">
                        <span class="terminal-dots" aria-hidden="true"><i></i><i></i><i></i></span>
                        <span class="terminal-title">{"miqueas@portfolio: ~"}</span>
                        <button type="button" class="terminal-close" aria-label="Close terminal" onclick={on_close}>
                            {"×"}
                        </button>
                    </div>
                    <div class="terminal-output" ref={output_ref}>
                        { for engine.output().iter().map(render_block) }
                    </div>
                    <div class="terminal-input-line">
                        <span class="terminal-prompt">{"$"}</span>
                        <input
                            ref={input_ref}
                            class="terminal-input"
                            type="text"
                            spellcheck="false"
                            autocomplete="off"
                            aria-label="Terminal command"
                            value={engine.input().to_string()}
                            {oninput}
                            {onkeydown}
                        />
                    </div>
                </div>
            </div>
        </>
    }
}

fn render_block(block: &OutputBlock) -> Html {
    html! {
        <div class={classes!("terminal-line", block.kind.class())}>
            { for block.fragments.iter().map(render_fragment) }
        </div>
    }
}

fn render_fragment(fragment: &Fragment) -> Html {
    match fragment {
        Fragment::Heading(text) => html! { <div class="terminal-heading">{text}</div> },
        Fragment::Text(text) => html! { <div>{text}</div> },
        Fragment::Item(text) => html! { <div class="terminal-item">{format!("• {text}")}</div> },
        Fragment::Gap => html! { <br /> },
        Fragment::Link { prefix, label, href } => html! {
            <div>
                {prefix}
                <a href={href.clone()} target="_blank" rel="noopener noreferrer">{label}</a>
            </div>
        },
        Fragment::Commands(rows) => html! {
            <table class="terminal-help">
                { for rows.iter().map(|(name, description)| html! {
                    <tr>
                        <td class="terminal-cmd">{*name}</td>
                        <td>{*description}</td>
                    </tr>
                }) }
            </table>
        },
        Fragment::Meter { name, level } => html! {
            <div class="terminal-meter">
                <span class="terminal-meter-name">{name}</span>
                <span class="terminal-meter-bar">{meter_bar(*level)}</span>
            </div>
        },
        Fragment::Tip(text) => html! { <div class="terminal-tip">{text}</div> },
    }
}
