//! Home-page project showcase: the carousel, the memory challenge gating the
//! rest of the page, and their timer wiring.
//!
//! The state machines live in one `Rc<RefCell<…>>` so timer callbacks always
//! read fresh state; the `use_state` fields are write-only render mirrors.
//! Every scheduled timer is parked in [`ShowcaseTimers`], which the unmount
//! cleanup clears, so nothing fires into a dead component.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use epicfolio_core::rand::rand_range;
use epicfolio_core::sequence::{
    flash_schedule, generate_sequence, FlashStep, SequenceGame, SubmitOutcome, COLOR_COUNT,
    FLASH_ON_MS, GAME_START_DELAY_MS, LEVEL_CAP, LEVEL_PACING_MS, UNLOCK_CELEBRATION_MS,
};
use epicfolio_core::{
    featured_projects, Carousel, AUTOPLAY_INTERVAL_MS, CELEBRATION_MS, TRANSITION_SETTLE_MS,
};

const CONFETTI_COUNT: usize = 40;
const CONFETTI_COLORS: &[&str] = &[
    "#3b82f6", "#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444", "#ec4899",
];
const PAD_CLASSES: &[&str] = &["pad-red", "pad-blue", "pad-green", "pad-yellow"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Nav {
    Next,
    Prev,
    GoTo(usize),
}

struct Machines {
    carousel: Carousel,
    game: SequenceGame,
    unlocked: bool,
    game_start_scheduled: bool,
}

#[derive(Default)]
struct ShowcaseTimers {
    settle: Option<Timeout>,
    confetti: Option<Timeout>,
    game_start: Option<Timeout>,
    level_start: Option<Timeout>,
    flashes: Vec<Timeout>,
}

/// Render mirrors plus the live machine cell. Cloned into every timer and
/// event callback; mirrors are only ever written through, never read.
#[derive(Clone)]
struct ShowcaseStore {
    live: Rc<RefCell<Machines>>,
    timers: Rc<RefCell<ShowcaseTimers>>,
    seed: u32,
    current: UseStateHandle<usize>,
    transitioning: UseStateHandle<bool>,
    viewed: UseStateHandle<Vec<bool>>,
    confetti: UseStateHandle<bool>,
    game_active: UseStateHandle<bool>,
    level: UseStateHandle<u32>,
    flashing: UseStateHandle<Option<u8>>,
    unlocked: UseStateHandle<bool>,
    on_unlock: Callback<bool>,
}

impl ShowcaseStore {
    fn begin(&self, nav: Nav) {
        let began = {
            let mut machines = self.live.borrow_mut();
            match nav {
                Nav::Next => machines.carousel.advance(),
                Nav::Prev => machines.carousel.retreat(),
                Nav::GoTo(index) => machines.carousel.go_to(index),
            }
        };
        if began.is_none() {
            return;
        }
        self.transitioning.set(true);
        if !matches!(nav, Nav::Prev) {
            self.raise_confetti(CELEBRATION_MS);
        }
        let store = self.clone();
        self.timers.borrow_mut().settle =
            Some(Timeout::new(TRANSITION_SETTLE_MS, move || store.settle()));
    }

    fn settle(&self) {
        let (current, viewed) = {
            let mut machines = self.live.borrow_mut();
            machines.carousel.settle();
            let carousel = &machines.carousel;
            let viewed = (0..carousel.len()).map(|i| carousel.is_viewed(i)).collect();
            (carousel.current(), viewed)
        };
        self.current.set(current);
        self.viewed.set(viewed);
        self.transitioning.set(false);
        self.maybe_schedule_game();
    }

    fn raise_confetti(&self, decay_ms: u32) {
        self.confetti.set(true);
        let confetti = self.confetti.clone();
        // Replacing the slot cancels any previous decay timer.
        self.timers.borrow_mut().confetti =
            Some(Timeout::new(decay_ms, move || confetti.set(false)));
    }

    /// Arms the one-shot game start once the entry condition holds.
    fn maybe_schedule_game(&self) {
        {
            let mut machines = self.live.borrow_mut();
            if machines.unlocked
                || machines.game_start_scheduled
                || machines.carousel.viewed_count() < 1
            {
                return;
            }
            machines.game_start_scheduled = true;
        }
        let store = self.clone();
        self.timers.borrow_mut().game_start =
            Some(Timeout::new(GAME_START_DELAY_MS, move || store.activate_game()));
    }

    fn activate_game(&self) {
        self.live.borrow_mut().game.activate();
        self.game_active.set(true);
        self.schedule_level_start();
    }

    fn schedule_level_start(&self) {
        let store = self.clone();
        self.timers.borrow_mut().level_start =
            Some(Timeout::new(LEVEL_PACING_MS, move || store.begin_level()));
    }

    fn begin_level(&self) {
        let plan = {
            let mut machines = self.live.borrow_mut();
            if !machines.game.is_active() {
                return;
            }
            let level = machines.game.level();
            machines.game.begin_level(generate_sequence(self.seed, level));
            flash_schedule(machines.game.target())
        };
        self.play_flashes(&plan);
    }

    fn play_flashes(&self, plan: &[FlashStep]) {
        let mut timers = self.timers.borrow_mut();
        timers.flashes.clear();
        for step in plan {
            let color = step.color;
            let on = self.clone();
            timers.flashes.push(Timeout::new(step.start_ms, move || {
                on.set_flashing(Some(color));
            }));
            let off = self.clone();
            timers
                .flashes
                .push(Timeout::new(step.start_ms + FLASH_ON_MS, move || {
                    off.set_flashing(None);
                }));
        }
    }

    fn set_flashing(&self, value: Option<u8>) {
        self.live.borrow_mut().game.set_flashing(value);
        self.flashing.set(value);
    }

    fn submit(&self, color: u8) {
        let outcome = self.live.borrow_mut().game.submit(color);
        match outcome {
            SubmitOutcome::Ignored | SubmitOutcome::Mismatch | SubmitOutcome::Progress => {}
            SubmitOutcome::LevelComplete => {
                self.level.set(self.live.borrow().game.level());
                self.schedule_level_start();
            }
            SubmitOutcome::Unlocked => {
                self.live.borrow_mut().unlocked = true;
                self.timers.borrow_mut().flashes.clear();
                self.level.set(LEVEL_CAP);
                self.game_active.set(false);
                self.flashing.set(None);
                self.unlocked.set(true);
                self.raise_confetti(UNLOCK_CELEBRATION_MS);
                gloo::console::log!("memory challenge cleared");
                self.on_unlock.emit(true);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ShowcaseProps {
    pub on_unlock: Callback<bool>,
}

#[function_component(ProjectShowcase)]
pub(crate) fn project_showcase(props: &ShowcaseProps) -> Html {
    let projects = featured_projects();
    let count = projects.len();

    let live = use_mut_ref(|| Machines {
        carousel: Carousel::new(count),
        game: SequenceGame::new(),
        unlocked: false,
        game_start_scheduled: false,
    });
    let timers = use_mut_ref(ShowcaseTimers::default);
    let seed = *use_memo((), |_| js_sys::Date::now() as u64 as u32);

    let current = use_state(|| 0usize);
    let transitioning = use_state(|| false);
    let viewed = use_state(|| {
        let mut flags = vec![false; count];
        flags[0] = true;
        flags
    });
    let confetti = use_state(|| false);
    let game_active = use_state(|| false);
    let level = use_state(|| 0u32);
    let flashing = use_state(|| None::<u8>);
    let unlocked = use_state(|| false);

    let store = ShowcaseStore {
        live: live.clone(),
        timers: timers.clone(),
        seed,
        current: current.clone(),
        transitioning: transitioning.clone(),
        viewed: viewed.clone(),
        confetti: confetti.clone(),
        game_active: game_active.clone(),
        level: level.clone(),
        flashing: flashing.clone(),
        unlocked: unlocked.clone(),
        on_unlock: props.on_unlock.clone(),
    };

    {
        let store = store.clone();
        let timers = timers.clone();
        use_effect_with((), move |_| {
            // Entry zero counts as viewed, so the challenge arms immediately.
            store.maybe_schedule_game();
            let autoplay = {
                let store = store.clone();
                Interval::new(AUTOPLAY_INTERVAL_MS, move || store.begin(Nav::Next))
            };
            move || {
                drop(autoplay);
                *timers.borrow_mut() = ShowcaseTimers::default();
            }
        });
    }

    let on_prev = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.begin(Nav::Prev))
    };
    let on_next = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.begin(Nav::Next))
    };

    let current_value = *current;
    let transitioning_value = *transitioning;
    let viewed_value = (*viewed).clone();
    let viewed_count = viewed_value.iter().filter(|&&flag| flag).count();
    let all_viewed = viewed_count == count;
    let project = &projects[current_value.min(count - 1)];

    let indicators: Html = (0..count)
        .map(|index| {
            let class = if index == current_value {
                "indicator indicator-current"
            } else if viewed_value.get(index).copied().unwrap_or(false) {
                "indicator indicator-viewed"
            } else {
                "indicator"
            };
            let on_go = {
                let store = store.clone();
                Callback::from(move |_: MouseEvent| store.begin(Nav::GoTo(index)))
            };
            html! {
                <button {class} onclick={on_go} disabled={transitioning_value} />
            }
        })
        .collect();

    let tag_chips: Html = project
        .tags
        .iter()
        .map(|tag| html! { <span class="showcase-tag">{ *tag }</span> })
        .collect();

    let confetti_burst = if *confetti {
        let pieces: Html = (0..CONFETTI_COUNT)
            .map(|i| {
                let salt = (current_value as u32) << 8 | i as u32;
                let style = format!(
                    "left: {:.1}%; top: {:.1}%; background-color: {}; \
                     animation-delay: {:.2}s; animation-duration: {:.2}s;",
                    rand_range(seed, salt, 20.0, 80.0),
                    rand_range(seed, salt + 1, 10.0, 90.0),
                    CONFETTI_COLORS[i % CONFETTI_COLORS.len()],
                    i as f32 * 0.02,
                    1.5 + rand_range(seed, salt + 2, 0.0, 1.0),
                );
                html! { <div class="confetti-piece" {style} /> }
            })
            .collect();
        html! { <div class="confetti-layer">{ pieces }</div> }
    } else {
        html! {}
    };

    let game_panel = if viewed_count >= 1 && !*unlocked {
        let flashing_value = *flashing;
        let pads: Html = (0..COLOR_COUNT as u8)
            .map(|color| {
                let lit = flashing_value == Some(color);
                let class = classes!(
                    "game-pad",
                    PAD_CLASSES[color as usize],
                    lit.then_some("game-pad-lit"),
                );
                let on_pad = {
                    let store = store.clone();
                    Callback::from(move |_: MouseEvent| store.submit(color))
                };
                html! {
                    <button {class} onclick={on_pad} disabled={flashing_value.is_some()} />
                }
            })
            .collect();
        let status = if flashing_value.is_some() {
            "Watch the sequence..."
        } else {
            "Repeat the sequence!"
        };
        html! {
            <div class="game-panel glass-card">
                <h3 class="game-title">{ "🎮 Memory Challenge" }</h3>
                <p class="game-subtitle">
                    { "Complete the sequence game to unlock the full portfolio!" }
                </p>
                if *game_active {
                    <div class="game-level">
                        { format!("Level {} of {}", (*level).min(LEVEL_CAP - 1) + 1, LEVEL_CAP) }
                    </div>
                    <div class="game-board">{ pads }</div>
                    <div class="game-status">{ status }</div>
                } else {
                    <div class="game-status">{ "Preparing challenge..." }</div>
                }
            </div>
        }
    } else {
        html! {}
    };

    let unlocked_banner = if *unlocked {
        html! {
            <div class="game-panel glass-card unlock-banner">
                <h3 class="game-title">{ "🎉 Portfolio Unlocked! 🎉" }</h3>
                <p class="game-subtitle">
                    { "You can now scroll down to explore the full portfolio!" }
                </p>
            </div>
        }
    } else {
        html! {}
    };

    let card_class = classes!(
        "showcase-card",
        "glass-card",
        transitioning_value.then_some("showcase-card-transitioning"),
    );
    let card_style = format!("--accent-gradient: var(--{});", accent_var(project.accent));

    html! {
        <div class="showcase">
            <div class="showcase-inner container-g">
                <div class={card_class} style={card_style}>
                    { confetti_burst }
                    <h2 class="showcase-title">{ project.title }</h2>
                    <p class="showcase-blurb">{ project.blurb }</p>
                    <div class="showcase-tags">{ tag_chips }</div>
                    <div class="showcase-actions">
                        <button class="btn-ghost">{ "View Live Demo" }</button>
                        <button class="btn-ghost">{ "GitHub Code" }</button>
                    </div>
                </div>

                <div class="showcase-nav">
                    <button class="nav-arrow" onclick={on_prev} disabled={transitioning_value}>
                        { "‹" }
                    </button>
                    <div class="indicator-row">{ indicators }</div>
                    <button class="nav-arrow" onclick={on_next} disabled={transitioning_value}>
                        { "›" }
                    </button>
                </div>

                <div class="showcase-progress">
                    <div class="progress-count">
                        { format!("Project {} of {}", current_value + 1, count) }
                    </div>
                    if all_viewed {
                        <div class="progress-achievement">
                            { "🎉 Portfolio Explorer Achievement Unlocked! 🎉" }
                        </div>
                    } else {
                        <div class="progress-note">
                            { format!("{viewed_count} of {count} projects explored") }
                        </div>
                    }
                </div>

                { game_panel }
                { unlocked_banner }
            </div>
        </div>
    }
}

/// Maps a catalog accent pair onto the stylesheet's gradient variables.
fn accent_var(accent: &str) -> &'static str {
    match accent {
        "from-green-500 to-blue-500" => "gradient-green-blue",
        "from-purple-500 to-pink-500" => "gradient-purple-pink",
        "from-orange-500 to-red-500" => "gradient-orange-red",
        "from-cyan-500 to-blue-500" => "gradient-cyan-blue",
        "from-emerald-500 to-teal-500" => "gradient-emerald-teal",
        _ => "gradient-blue-violet",
    }
}
