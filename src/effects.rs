//! Decorative layers: floating particle field, gradient orbs, cursor trail.
//! Placement is drawn from the seeded helpers in the core crate so a mount
//! renders a stable field; motion itself lives in CSS keyframes except for
//! the cursor trail, which decays on a 16 ms tick.

use std::cell::Cell;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use epicfolio_core::rand::{rand_index, rand_range};

const PARTICLE_COUNT: usize = 50;
const PARTICLE_COLORS: &[&str] = &[
    "rgba(59, 130, 246, 0.4)",
    "rgba(139, 92, 246, 0.4)",
    "rgba(236, 72, 153, 0.4)",
    "rgba(251, 146, 60, 0.4)",
    "rgba(34, 197, 94, 0.4)",
    "rgba(6, 182, 212, 0.4)",
];

struct Particle {
    size: f32,
    x: f32,
    y: f32,
    delay: f32,
    duration: f32,
    color: &'static str,
}

fn build_particles(seed: u32) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let salt = i as u32 * 8;
            Particle {
                size: rand_range(seed, salt, 2.0, 8.0),
                x: rand_range(seed, salt + 1, 0.0, 100.0),
                y: rand_range(seed, salt + 2, 0.0, 100.0),
                delay: rand_range(seed, salt + 3, 0.0, 12.0),
                duration: rand_range(seed, salt + 4, 8.0, 16.0),
                color: PARTICLE_COLORS[rand_index(seed, salt + 5, PARTICLE_COLORS.len())],
            }
        })
        .collect()
}

#[function_component(FloatingParticles)]
pub(crate) fn floating_particles() -> Html {
    let particles = use_memo((), |_| build_particles(js_sys::Date::now() as u64 as u32));

    let dots: Html = particles
        .iter()
        .map(|particle| {
            let style = format!(
                "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; \
                 background-color: {}; animation-delay: {:.2}s; animation-duration: {:.2}s; \
                 box-shadow: 0 0 {:.1}px {};",
                particle.x,
                particle.y,
                particle.size,
                particle.size,
                particle.color,
                particle.delay,
                particle.duration,
                particle.size * 2.0,
                particle.color,
            );
            html! { <div class="particle particle-float" {style} /> }
        })
        .collect();

    html! {
        <div class="particle-field">
            { dots }
            <div class="field-orb field-orb-a gradient-rotate" />
            <div class="field-orb field-orb-b gradient-rotate" />
            <div class="field-orb field-orb-c pulse-epic" />
        </div>
    }
}

#[function_component(BackgroundOrbs)]
pub(crate) fn background_orbs() -> Html {
    html! {
        <div class="orb-layer">
            <div class="orb orb-large" />
            <div class="orb orb-medium" />
            <div class="orb orb-small" />
            <div class="orb orb-tiny" />
        </div>
    }
}

const TRAIL_CAP: usize = 60;
const TRAIL_DECAY: f64 = 0.02;
const TRAIL_TICK_MS: u32 = 16;
const TRAIL_COLORS: &[&str] = &[
    "#ff0080", "#ff4000", "#ff8000", "#ffff00", "#80ff00", "#00ff80", "#00ffff", "#0080ff",
    "#0000ff", "#8000ff", "#ff00ff", "#ff0040",
];

#[derive(Clone, Copy)]
struct TrailDot {
    x: f64,
    y: f64,
    life: f64,
}

#[function_component(CursorFollower)]
pub(crate) fn cursor_follower() -> Html {
    let revision = use_state(|| 0u64);
    let position = use_mut_ref(|| (0.0f64, 0.0f64));
    let visible = use_mut_ref(|| false);
    let trail = use_mut_ref(Vec::<TrailDot>::new);

    {
        let revision = revision.clone();
        let position = position.clone();
        let visible = visible.clone();
        let trail = trail.clone();
        use_effect_with((), move |_| {
            let handles = web_sys::window().map(|window| {
                let move_listener = {
                    let position = position.clone();
                    let visible = visible.clone();
                    EventListener::new(&window, "mousemove", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            *position.borrow_mut() =
                                (event.client_x() as f64, event.client_y() as f64);
                            *visible.borrow_mut() = true;
                        }
                    })
                };
                let leave_listener = {
                    let visible = visible.clone();
                    EventListener::new(&window, "mouseleave", move |_| {
                        *visible.borrow_mut() = false;
                    })
                };
                let enter_listener = {
                    let visible = visible.clone();
                    EventListener::new(&window, "mouseenter", move |_| {
                        *visible.borrow_mut() = true;
                    })
                };

                let tick = Cell::new(0u64);
                let interval = Interval::new(TRAIL_TICK_MS, move || {
                    let changed = {
                        let mut trail = trail.borrow_mut();
                        if *visible.borrow() {
                            let (x, y) = *position.borrow();
                            if x > 0.0 || y > 0.0 {
                                trail.insert(0, TrailDot { x, y, life: 1.0 });
                            }
                        }
                        for dot in trail.iter_mut() {
                            dot.life -= TRAIL_DECAY;
                        }
                        trail.retain(|dot| dot.life > 0.0);
                        trail.truncate(TRAIL_CAP);
                        !trail.is_empty() || *visible.borrow()
                    };
                    if changed {
                        tick.set(tick.get() + 1);
                        revision.set(tick.get());
                    }
                });

                (move_listener, leave_listener, enter_listener, interval)
            });
            move || drop(handles)
        });
    }

    if !*visible.borrow() {
        return html! {};
    }
    let (x, y) = *position.borrow();

    let dots: Html = trail
        .borrow()
        .iter()
        .enumerate()
        .map(|(index, dot)| {
            let color_index = index * TRAIL_COLORS.len() / TRAIL_CAP.max(1);
            let size = (20.0 - index as f64 * 0.2).max(4.0);
            let style = format!(
                "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; \
                 background-color: {}; opacity: {:.3}; transform: scale({:.3});",
                dot.x - size / 2.0,
                dot.y - size / 2.0,
                size,
                size,
                TRAIL_COLORS[color_index.min(TRAIL_COLORS.len() - 1)],
                dot.life * 0.8,
                dot.life,
            );
            html! { <div class="trail-dot" {style} /> }
        })
        .collect();

    let cursor_style = format!("left: {:.1}px; top: {:.1}px;", x - 12.0, y - 12.0);
    let glow_style = format!("left: {:.1}px; top: {:.1}px;", x - 64.0, y - 64.0);

    html! {
        <div class="cursor-layer">
            <div class="cursor-dot" style={cursor_style} />
            { dots }
            <div class="cursor-glow" style={glow_style} />
        </div>
    }
}
