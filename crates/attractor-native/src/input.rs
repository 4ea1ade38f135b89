//! Turns raw winit pointer events into orbit-camera deltas.
//!
//! Mouse: left-drag orbits, wheel zooms. Touch: one finger orbits, two fingers
//! pinch-zoom. Deltas follow the browser conventions the camera constants were
//! tuned for (pixels for drag, DOM `deltaY` units for zoom, positive = out).

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase};

// One wheel notch in DOM `deltaY` units
pub const WHEEL_UNITS_PER_LINE: f32 = 100.0;
// Zoom units per pixel of change in finger separation
pub const PINCH_GAIN: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Orbit(Vec2),
    Zoom(f32),
}

#[derive(Default)]
pub struct PointerTracker {
    cursor: Vec2,
    dragging: bool,
    touches: Vec<(u64, Vec2)>,
    pinch_distance: Option<f32>,
}

#[inline]
pub fn to_vec2(p: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

impl PointerTracker {
    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    pub fn cursor_moved(&mut self, pos: Vec2) -> Option<Gesture> {
        let delta = pos - self.cursor;
        self.cursor = pos;
        (self.dragging && delta != Vec2::ZERO).then_some(Gesture::Orbit(delta))
    }

    pub fn cursor_left(&mut self) {
        self.dragging = false;
    }

    pub fn wheel(&mut self, delta: MouseScrollDelta) -> Gesture {
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_UNITS_PER_LINE,
            MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
        };
        Gesture::Zoom(dy)
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, pos: Vec2) -> Option<Gesture> {
        match phase {
            TouchPhase::Started => {
                self.touches.retain(|(tid, _)| *tid != id);
                self.touches.push((id, pos));
                self.pinch_distance = self.current_pinch_distance();
                None
            }
            TouchPhase::Moved => {
                let slot = self.touches.iter_mut().find(|(tid, _)| *tid == id)?;
                let prev = slot.1;
                slot.1 = pos;
                match self.touches.len() {
                    1 => {
                        let delta = pos - prev;
                        (delta != Vec2::ZERO).then_some(Gesture::Orbit(delta))
                    }
                    2 => {
                        let now = self.current_pinch_distance()?;
                        let before = self.pinch_distance.replace(now)?;
                        let dy = -(now - before) * PINCH_GAIN;
                        (dy != 0.0).then_some(Gesture::Zoom(dy))
                    }
                    _ => None,
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(tid, _)| *tid != id);
                self.pinch_distance = self.current_pinch_distance();
                None
            }
        }
    }

    fn current_pinch_distance(&self) -> Option<f32> {
        match self.touches.as_slice() {
            [(_, a), (_, b)] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_only_while_left_button_held() {
        let mut t = PointerTracker::default();
        assert_eq!(t.cursor_moved(Vec2::new(10.0, 10.0)), None);
        t.mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(
            t.cursor_moved(Vec2::new(15.0, 7.0)),
            Some(Gesture::Orbit(Vec2::new(5.0, -3.0)))
        );
        t.mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(t.cursor_moved(Vec2::new(30.0, 30.0)), None);
    }

    #[test]
    fn right_button_does_not_orbit() {
        let mut t = PointerTracker::default();
        t.mouse_button(MouseButton::Right, ElementState::Pressed);
        assert_eq!(t.cursor_moved(Vec2::new(4.0, 4.0)), None);
    }

    #[test]
    fn wheel_line_delta_scrolling_up_zooms_in() {
        let mut t = PointerTracker::default();
        assert_eq!(
            t.wheel(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Gesture::Zoom(-WHEEL_UNITS_PER_LINE)
        );
        assert_eq!(
            t.wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0))),
            Gesture::Zoom(40.0)
        );
    }

    #[test]
    fn single_touch_orbits() {
        let mut t = PointerTracker::default();
        t.touch(1, TouchPhase::Started, Vec2::new(100.0, 100.0));
        assert_eq!(
            t.touch(1, TouchPhase::Moved, Vec2::new(110.0, 95.0)),
            Some(Gesture::Orbit(Vec2::new(10.0, -5.0)))
        );
    }

    #[test]
    fn pinch_apart_zooms_in_and_suppresses_orbit() {
        let mut t = PointerTracker::default();
        t.touch(1, TouchPhase::Started, Vec2::new(0.0, 0.0));
        t.touch(2, TouchPhase::Started, Vec2::new(100.0, 0.0));
        assert_eq!(
            t.touch(2, TouchPhase::Moved, Vec2::new(130.0, 0.0)),
            Some(Gesture::Zoom(-30.0 * PINCH_GAIN))
        );
        assert_eq!(
            t.touch(1, TouchPhase::Moved, Vec2::new(10.0, 0.0)),
            Some(Gesture::Zoom(10.0 * PINCH_GAIN))
        );
    }

    #[test]
    fn lifting_one_finger_resumes_orbit_without_jump() {
        let mut t = PointerTracker::default();
        t.touch(1, TouchPhase::Started, Vec2::new(0.0, 0.0));
        t.touch(2, TouchPhase::Started, Vec2::new(100.0, 0.0));
        t.touch(2, TouchPhase::Ended, Vec2::new(100.0, 0.0));
        assert_eq!(
            t.touch(1, TouchPhase::Moved, Vec2::new(2.0, 3.0)),
            Some(Gesture::Orbit(Vec2::new(2.0, 3.0)))
        );
    }

    #[test]
    fn unknown_touch_is_ignored() {
        let mut t = PointerTracker::default();
        assert_eq!(t.touch(9, TouchPhase::Moved, Vec2::new(1.0, 1.0)), None);
    }
}
