//! The host-facing button control.
//!
//! `ProgressButton` owns everything the renderer and tap gate need. Setters
//! never paint: they only mark the control dirty. The host polls
//! [`ProgressButton::needs_display`] on its own schedule and calls
//! [`ProgressButton::draw`] to get fresh geometry.

use kurbo::Point;

use crate::clamp;
use crate::input::TapGate;
use crate::model::constants::*;
use crate::model::{ButtonState, ButtonStyle, Color, DrawArea, RenderConfig};
use crate::render::{render, PathDescription};

/// Three-state download button.
#[derive(Debug)]
pub struct ProgressButton {
    state: ButtonState,
    percent: f64,
    style: ButtonStyle,
    area: DrawArea,
    gate: TapGate,
    needs_display: bool,
}

impl ProgressButton {
    /// Create a button in `Start` with default style and a no-op action.
    pub fn new(area: DrawArea) -> Self {
        Self {
            state: ButtonState::Start,
            percent: DEFAULT_PERCENT,
            style: ButtonStyle::default(),
            area,
            gate: TapGate::default(),
            needs_display: true,
        }
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_download_action(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.gate.set_action(action);
        self
    }

    pub fn set_download_action(&mut self, action: impl FnMut() + Send + 'static) {
        self.gate.set_action(action);
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn area(&self) -> &DrawArea {
        &self.area
    }

    pub fn set_state(&mut self, state: ButtonState) {
        if self.state != state {
            tracing::debug!(from = %self.state, to = %state, "button state changed");
            self.state = state;
            self.set_needs_display();
        }
    }

    /// Set the completion fraction, clamped to [0.0, 1.0]. NaN reads as 0.0.
    pub fn set_percent(&mut self, percent: f64) {
        let percent = if percent.is_nan() {
            MIN_PERCENT
        } else {
            clamp(percent, MIN_PERCENT, MAX_PERCENT)
        };
        if self.percent != percent {
            self.percent = percent;
            self.set_needs_display();
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        if self.style.stroke_color != color {
            self.style.stroke_color = color;
            self.set_needs_display();
        }
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        if self.style.stroke_width != width {
            self.style.stroke_width = width;
            self.set_needs_display();
        }
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        if self.style != style {
            self.style = style;
            self.set_needs_display();
        }
    }

    pub fn resize(&mut self, area: DrawArea) {
        if self.area != area {
            self.area = area;
            self.set_needs_display();
        }
    }

    /// True when something changed since the last [`draw`](Self::draw).
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    pub fn set_needs_display(&mut self) {
        self.needs_display = true;
    }

    /// Snapshot of the renderer inputs.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::from_style(&self.style, self.percent)
    }

    /// Compute the geometry for the current state and clear the dirty flag.
    pub fn draw(&mut self) -> PathDescription {
        self.needs_display = false;
        render(self.state, &self.render_config(), &self.area)
    }

    /// Tap anywhere on the button. Returns whether the download action ran.
    pub fn tap(&mut self) -> bool {
        self.gate.on_tap(self.state)
    }

    /// Tap at `point` in area coordinates. Taps outside the area are dropped.
    pub fn tap_at(&mut self, point: Point) -> bool {
        if !self.area.contains(point) {
            tracing::debug!(x = point.x, y = point.y, "tap outside button bounds");
            return false;
        }
        self.tap()
    }
}

impl Default for ProgressButton {
    fn default() -> Self {
        Self::new(DrawArea::new(DEFAULT_AREA_SIDE, DEFAULT_AREA_SIDE))
    }
}
