//! Geometry properties of the three button states.

use std::f64::consts::{PI, TAU};

use progress_button::{handle_tap, render, ButtonState, DrawArea, Point, RenderConfig};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn progress(percent: f64, area: &DrawArea) -> progress_button::ArcSegment {
    let path = render(ButtonState::Progress, &RenderConfig::default().with_percent(percent), area);
    assert_eq!(path.primitives.len(), 1);
    let arc = *path.arcs().next().expect("progress renders one arc");
    arc
}

// === Progress ===

#[test]
fn progress_zero_has_zero_sweep() {
    let arc = progress(0.0, &DrawArea::new(100.0, 100.0));
    assert_eq!(arc.start_angle, arc.end_angle);
}

#[test]
fn progress_one_is_full_clockwise_turn_from_top() {
    let arc = progress(1.0, &DrawArea::new(100.0, 100.0));
    assert!(approx_eq(arc.start_angle, 1.5 * PI));
    assert!(approx_eq(arc.sweep(), TAU));
    assert!(arc.clockwise);
}

#[test]
fn progress_half_sweeps_half_turn() {
    let arc = progress(0.5, &DrawArea::new(100.0, 100.0));
    assert!(approx_eq(arc.end_angle - arc.start_angle, PI));
}

#[test]
fn progress_quarter_on_square_area() {
    let config = RenderConfig::default().with_stroke_width(2.0).with_percent(0.25);
    let path = render(ButtonState::Progress, &config, &DrawArea::new(100.0, 100.0));
    let arc = path.arcs().next().unwrap();
    assert_eq!(arc.center, Point::new(50.0, 50.0));
    assert!(approx_eq(arc.radius, 39.0));
    assert!(approx_eq(arc.start_angle.to_degrees(), 270.0));
    assert!(approx_eq(arc.end_angle.to_degrees(), 360.0));
}

// === Done ===

#[test]
fn done_is_full_circle_plus_checkmark_for_any_percent() {
    let area = DrawArea::new(90.0, 120.0);
    for percent in [0.0, 0.3, 1.0] {
        let path = render(ButtonState::Done, &RenderConfig::default().with_percent(percent), &area);
        let arcs: Vec<_> = path.arcs().collect();
        assert_eq!(arcs.len(), 1);
        assert!(approx_eq(arcs[0].start_angle, 1.5 * PI));
        assert!(approx_eq(arcs[0].end_angle, 3.5 * PI));

        let polylines: Vec<_> = path.polylines().collect();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].len(), 3);
    }
}

#[test]
fn checkmark_stays_inside_circle() {
    let area = DrawArea::new(100.0, 100.0);
    let path = render(ButtonState::Done, &RenderConfig::default(), &area);
    let arc = path.arcs().next().unwrap();
    for point in path.polylines().next().unwrap() {
        assert!(point.distance(arc.center) < arc.radius);
    }
}

// === Start ===

#[test]
fn arrow_is_symmetric_on_square_area() {
    let area = DrawArea::new(80.0, 80.0);
    let path = render(ButtonState::Start, &RenderConfig::default(), &area);
    let chevron = path.polylines().nth(1).unwrap();
    let (right, tip, left) = (chevron[0], chevron[1], chevron[2]);

    assert!(approx_eq(tip.x, 40.0));
    assert!(approx_eq(right.x - 40.0, 40.0 - left.x));
    assert!(approx_eq(right.y, left.y));
    assert!(right.x > left.x);
}

#[test]
fn arrow_shaft_is_vertical_and_points_down() {
    let area = DrawArea::new(60.0, 100.0);
    let path = render(ButtonState::Start, &RenderConfig::default(), &area);
    let shaft = path.polylines().next().unwrap();
    assert!(approx_eq(shaft[0].x, 30.0));
    assert!(approx_eq(shaft[1].x, 30.0));
    assert!(shaft[1].y > shaft[0].y);
}

// === Aspect Ratio ===

#[test]
fn non_square_area_stays_centered() {
    let area = DrawArea::new(200.0, 50.0);
    assert!(approx_eq(area.side(), 50.0));
    assert!(approx_eq(area.padding(), 5.0));

    for state in ButtonState::ALL {
        let path = render(state, &RenderConfig::default().with_percent(0.6), &area);
        for arc in path.arcs() {
            assert_eq!(arc.center, Point::new(100.0, 25.0));
            assert!(approx_eq(arc.radius, (50.0 - 2.0) / 2.0 - 5.0));
        }
        // every straight segment stays inside the centered square
        for (a, b) in path.segments() {
            for p in [a, b] {
                assert!(p.x >= 75.0 && p.x <= 125.0, "{state}: {p:?}");
                assert!(p.y >= 0.0 && p.y <= 50.0, "{state}: {p:?}");
            }
        }
    }
}

// === Interaction Gate ===

#[test]
fn tap_fires_only_in_start() {
    let mut calls = 0;
    handle_tap(ButtonState::Start, || calls += 1);
    assert_eq!(calls, 1);

    handle_tap(ButtonState::Progress, || calls += 1);
    handle_tap(ButtonState::Done, || calls += 1);
    assert_eq!(calls, 1);
}
