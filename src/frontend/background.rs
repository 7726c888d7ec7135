//! Full-viewport particle canvas behind the page.
//!
//! The canvas reads its `data-*` overrides once at mount. A `Scene` owns the
//! frame loop and the window listeners; dropping it on unmount stops both.
//! With reduced motion there is no loop, and the still frame is repainted
//! whenever the field reports a visible change.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::{rngs::SmallRng, SeedableRng};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use super::dom::{self, FrameLoop, Listener};
use crate::config::ParticleConfig;
use crate::particles::ParticleField;
use crate::theme::Theme;

const GLOW_BLUR: f64 = 10.0;

/// The field together with the context it is painted on.
struct Stage {
    field: ParticleField,
    context: CanvasRenderingContext2d,
    still: bool,
}

impl Stage {
    fn repaint_if_still(&mut self) {
        if self.still && self.field.take_repaint() {
            draw(&self.context, &self.field);
        }
    }
}

type SharedStage = Rc<RefCell<Option<Stage>>>;

#[derive(Properties, PartialEq)]
pub struct ParticleCanvasProps {
    pub theme: Theme,
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas(props: &ParticleCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let stage: SharedStage = use_mut_ref(|| None);

    {
        let stage = stage.clone();
        use_effect_with(props.theme, move |theme| {
            if let Some(stage) = stage.borrow_mut().as_mut() {
                stage.field.set_palette(theme.palette());
                stage.repaint_if_still();
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let stage = stage.clone();
        let theme = props.theme;
        use_effect_with((), move |_| {
            let scene = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| Scene::mount(canvas, stage, theme));
            if scene.is_none() {
                log::warn!("particle canvas unavailable, background disabled");
            }

            move || drop(scene)
        });
    }

    html! {
        <canvas
            id="particlesCanvas"
            class="particles-canvas"
            ref={canvas_ref}
            aria-hidden="true"
        />
    }
}

struct Scene {
    stage: SharedStage,
    _listeners: Vec<Listener>,
    _frames: Option<FrameLoop>,
}

impl Scene {
    fn mount(canvas: HtmlCanvasElement, stage: SharedStage, theme: Theme) -> Option<Self> {
        let win = window()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let (viewport_width, _) = dom::viewport_size();
        let config = ParticleConfig::from_attributes(viewport_width, |name| canvas.get_attribute(name));
        let (width, height) = fit_canvas(&canvas);

        let field = ParticleField::new(config, theme.palette(), width, height, SmallRng::from_entropy());
        let still = dom::prefers_reduced_motion();
        log::info!(
            "particle background started with {} particles{}",
            field.particles().len(),
            if still { " (still)" } else { "" }
        );
        *stage.borrow_mut() = Some(Stage { field, context, still });

        let mut listeners = Vec::with_capacity(3);

        {
            let stage = stage.clone();
            let canvas = canvas.clone();
            listeners.push(Listener::new(&win, "resize", move |_| {
                let (width, height) = fit_canvas(&canvas);
                if let Some(stage) = stage.borrow_mut().as_mut() {
                    let count = stage.field.resize(width, height);
                    log::debug!("particle canvas resized to {width}x{height}, {count} particles");
                    stage.repaint_if_still();
                }
            }));
        }

        {
            let stage = stage.clone();
            let canvas = canvas.clone();
            listeners.push(Listener::new(&win, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                let x = f64::from(event.client_x()) - rect.left();
                let y = f64::from(event.client_y()) - rect.top();

                if let Some(stage) = stage.borrow_mut().as_mut() {
                    stage.field.set_pointer(Some((x, y)));
                }
            }));
        }

        if let Some(root) = dom::window_document().and_then(|d| d.document_element()) {
            let stage = stage.clone();
            listeners.push(Listener::new(&root, "mouseleave", move |_| {
                if let Some(stage) = stage.borrow_mut().as_mut() {
                    stage.field.set_pointer(None);
                }
            }));
        }

        let frames = if still {
            if let Some(stage) = stage.borrow_mut().as_mut() {
                stage.repaint_if_still();
            }
            None
        } else {
            let stage = stage.clone();
            FrameLoop::start(move |dt_ms| {
                let mut guard = stage.borrow_mut();
                let Some(stage) = guard.as_mut() else {
                    return false;
                };

                stage.field.tick(dt_ms);
                draw(&stage.context, &stage.field);
                true
            })
        };

        Some(Self {
            stage,
            _listeners: listeners,
            _frames: frames,
        })
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        log::info!("particle background stopped");
        let _ = self.stage.borrow_mut().take();
    }
}

/// Matches the backing store to the rendered size and returns it.
fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let (width, height) = if rect.width() > 0.0 && rect.height() > 0.0 {
        (rect.width(), rect.height())
    } else {
        dom::viewport_size()
    };

    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    let palette = field.palette();

    context.clear_rect(0.0, 0.0, width, height);
    context.set_shadow_blur(0.0);
    context.set_line_width(1.0);

    for link in field.links() {
        context.set_stroke_style_str(&palette.link_color(link.opacity));
        context.begin_path();
        context.move_to(link.from.0, link.from.1);
        context.line_to(link.to.0, link.to.1);
        context.stroke();
    }

    context.set_shadow_blur(GLOW_BLUR);
    for particle in field.particles() {
        context.begin_path();
        let _ = context.arc(particle.x, particle.y, particle.radius, 0.0, TAU);
        context.set_fill_style_str(particle.color);
        context.set_shadow_color(particle.color);
        context.fill();
    }
    context.set_shadow_blur(0.0);
}
