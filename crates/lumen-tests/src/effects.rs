//! Integration tests for the effect engine.
//!
//! Exercises lumen-core and lumen-gui together: a demo control
//! implementing every capability is driven through full tick streams the
//! way an update host would drive it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lumen_core::{Color, FrameRate, Rect, TickTime, Updateable, Vec2};
use lumen_gui::{
    ColorCapable, ColorEffect, EffectSet, EffectSpeed, FadeCapable, FadeEffect, SlideCapable,
    SlideEffect,
};

// ── Helpers ────────────────────────────────────────────────────

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct PanelState {
    bounds: Rect,
    background: Color,
    fade: f32,
    hovered: bool,
    shown: bool,
    docked: bool,
}

impl PanelState {
    fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            bounds: Rect::new(-300.0, 40.0, 300.0, 120.0),
            background: Color::rgb(30, 30, 30),
            fade: 0.0,
            hovered: true,
            shown: true,
            docked: true,
        }))
    }
}

impl ColorCapable for PanelState {
    fn background_color(&self) -> Color {
        self.background
    }

    fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    fn color_in(&self) -> bool {
        self.hovered
    }
}

impl FadeCapable for PanelState {
    fn fade(&self) -> f32 {
        self.fade
    }

    fn set_fade(&mut self, fade: f32) {
        self.fade = fade;
    }

    fn fade_in(&self) -> bool {
        self.shown
    }
}

impl SlideCapable for PanelState {
    fn position(&self) -> Vec2 {
        self.bounds.min()
    }

    fn set_position(&mut self, position: Vec2) {
        self.bounds.x = position.x;
        self.bounds.y = position.y;
    }

    fn slide_in(&self) -> bool {
        self.docked
    }
}

/// A minimal control: shared animatable state plus the effect set the
/// update host drives through `Updateable`.
struct Panel {
    state: Rc<RefCell<PanelState>>,
    effects: EffectSet,
    order: i32,
}

impl Panel {
    fn new() -> Self {
        Self {
            state: PanelState::new(),
            effects: EffectSet::new(),
            order: 0,
        }
    }
}

impl Updateable for Panel {
    fn update(&mut self, tick: &TickTime) {
        self.effects.apply_all(tick);
    }

    fn update_order(&self) -> i32 {
        self.order
    }
}

/// Drive a panel for `frames` ticks at a fixed frame rate.
fn run(panel: &mut Panel, rate: FrameRate, frames: usize) {
    let step = rate.frame_duration();
    let mut tick = TickTime::ZERO;
    for _ in 0..frames {
        tick = tick.advanced(step);
        panel.update(&tick);
    }
}

// ── Single effect through the component contract ───────────────

#[test]
fn hover_highlight_converges_at_any_frame_rate() {
    init_tracing();
    for rate in [FrameRate::FPS_24, FrameRate::FPS_60, FrameRate::FPS_120] {
        let mut panel = Panel::new();
        let fx = ColorEffect::new(
            &panel.state,
            EffectSpeed::Fast,
            Color::rgb(30, 30, 30),
            Color::rgb(90, 140, 255),
            false,
        );
        panel.effects.insert("background", Box::new(fx));

        // Fast sweeps in 0.25 s; one second of frames is plenty at any rate.
        run(&mut panel, rate, rate.numerator as usize);
        let state = panel.state.borrow();
        assert_eq!(state.background, Color::rgb(90, 140, 255), "{rate}");
    }
}

#[test]
fn unhover_walks_the_blend_back() {
    let mut panel = Panel::new();
    let fx = ColorEffect::new(
        &panel.state,
        EffectSpeed::Normal,
        Color::rgb(30, 30, 30),
        Color::rgb(90, 140, 255),
        false,
    );
    panel.effects.insert("background", Box::new(fx));

    run(&mut panel, FrameRate::FPS_60, 10);
    let mid = panel.state.borrow().background;
    assert_ne!(mid, Color::rgb(30, 30, 30));

    panel.state.borrow_mut().hovered = false;
    run(&mut panel, FrameRate::FPS_60, 120);
    assert_eq!(panel.state.borrow().background, Color::rgb(30, 30, 30));
}

// ── Several effects on one control ─────────────────────────────

#[test]
fn color_fade_and_slide_compose() {
    init_tracing();
    let mut panel = Panel::new();
    let from = Vec2::new(-300.0, 40.0);
    let to = Vec2::new(20.0, 40.0);

    let color = ColorEffect::new(
        &panel.state,
        EffectSpeed::Fast,
        Color::rgb(30, 30, 30),
        Color::rgb(240, 240, 240),
        false,
    );
    let fade = FadeEffect::new(&panel.state, EffectSpeed::Fast, 0.0, 1.0, false);
    let slide = SlideEffect::new(&panel.state, EffectSpeed::Fast, from, to, false);

    panel.effects.insert("background", Box::new(color));
    panel.effects.insert("fade", Box::new(fade));
    panel.effects.insert("slide", Box::new(slide));
    assert_eq!(panel.effects.len(), 3);

    run(&mut panel, FrameRate::FPS_60, 60);
    let state = panel.state.borrow();
    assert_eq!(state.background, Color::rgb(240, 240, 240));
    assert_eq!(state.fade, 1.0);
    assert_eq!(state.bounds.min(), to);
    // The color effect drives RGB only; alpha stays where the control
    // left it.
    assert_eq!(state.background.a, 255);
}

#[test]
fn replacing_an_effect_takes_over_the_property() {
    let mut panel = Panel::new();
    let first = ColorEffect::new(
        &panel.state,
        EffectSpeed::Slow,
        Color::BLACK,
        Color::WHITE,
        false,
    );
    panel.effects.insert("background", Box::new(first));
    run(&mut panel, FrameRate::FPS_60, 30);

    // Mid-flight, a new blend toward red replaces the old one.
    let takeover = ColorEffect::new(
        &panel.state,
        EffectSpeed::Fast,
        panel.state.borrow().background,
        Color::RED,
        false,
    );
    panel.effects.insert("background", Box::new(takeover));
    assert_eq!(panel.effects.len(), 1);

    run(&mut panel, FrameRate::FPS_60, 60);
    assert_eq!(panel.state.borrow().background, Color::RED);
}

// ── Lifecycle ──────────────────────────────────────────────────

#[test]
fn stopped_effects_are_inert_and_collectable() {
    let mut panel = Panel::new();
    let fade = FadeEffect::new(&panel.state, EffectSpeed::Normal, 0.0, 1.0, false);
    panel.effects.insert("fade", Box::new(fade));

    run(&mut panel, FrameRate::FPS_60, 10);
    let frozen = panel.state.borrow().fade;
    assert!(frozen > 0.0);

    panel.effects.stop("fade").unwrap();
    run(&mut panel, FrameRate::FPS_60, 30);
    assert_eq!(panel.state.borrow().fade, frozen);

    panel.effects.retain_active();
    assert!(panel.effects.is_empty());
}

#[test]
fn effects_survive_their_control() {
    let state = PanelState::new();
    let mut effects = EffectSet::new();
    effects.insert(
        "fade",
        Box::new(FadeEffect::new(&state, EffectSpeed::Fast, 0.0, 1.0, false)),
    );

    drop(state);
    // The control is gone; applying must quietly do nothing.
    let tick = TickTime::ZERO.advanced(Duration::from_millis(16));
    effects.apply_all(&tick);
}

#[test]
fn looping_pulse_restarts_every_sweep() {
    let mut panel = Panel::new();
    let pulse = FadeEffect::new(&panel.state, EffectSpeed::Fast, 0.2, 1.0, true);
    panel.effects.insert("pulse", Box::new(pulse));

    // Quarter-second sweep at 4 fps: each frame advances a full sweep,
    // so values alternate between the endpoint and the restart.
    let step = Duration::from_millis(250);
    let mut tick = TickTime::ZERO;
    let mut seen = Vec::new();
    for _ in 0..4 {
        tick = tick.advanced(step);
        panel.update(&tick);
        seen.push(panel.state.borrow().fade);
    }
    assert_eq!(seen, [1.0, 0.2, 1.0, 0.2]);
}

// ── Update host conventions ────────────────────────────────────

#[test]
fn panels_update_in_ascending_order() {
    let mut back = Panel::new();
    back.order = 10;
    let mut front = Panel::new();
    front.order = -10;

    let fade = FadeEffect::new(&front.state, EffectSpeed::Fast, 0.0, 1.0, false);
    front.effects.insert("fade", Box::new(fade));

    let mut panels = [back, front];
    panels.sort_by_key(|p| p.update_order());

    let tick = TickTime::ZERO.advanced(Duration::from_millis(250));
    for panel in panels.iter_mut().filter(|p| p.enabled()) {
        panel.update(&tick);
    }
    // The front panel ran first and completed its quarter-second fade.
    assert_eq!(panels[0].state.borrow().fade, 1.0);
    assert_eq!(panels[0].update_order(), -10);
}
