use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::{Rectangle, Renderer, Theme};

use crate::Message;

/// Transparent layer over the main detail image.
/// Click toggles zoom; while zoomed, pointer movement moves the zoom origin.
pub struct ZoomSurface {
    pub enabled: bool,
}

impl Program<Message> for ZoomSurface {
    type State = HoverState;

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        // The image underneath does the drawing
        vec![]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    return (canvas::event::Status::Captured, Some(Message::ToggleZoom));
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        state.hovered = true;
                        if self.enabled {
                            let (x, y) = to_percent(position.x, position.y, bounds);
                            return (canvas::event::Status::Captured, Some(Message::ZoomMoved(x, y)));
                        }
                    }
                    None if state.hovered => {
                        state.hovered = false;
                        return (canvas::event::Status::Ignored, Some(Message::ZoomLeft));
                    }
                    None => {}
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.hovered {
                    state.hovered = false;
                    return (canvas::event::Status::Ignored, Some(Message::ZoomLeft));
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(&self, _state: &Self::State, bounds: Rectangle, cursor: Cursor) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            if self.enabled {
                mouse::Interaction::Crosshair
            } else {
                mouse::Interaction::Pointer
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Pointer position relative to the surface, in percent
fn to_percent(x: f32, y: f32, bounds: Rectangle) -> (f32, f32) {
    let pct = |v: f32, size: f32| if size > 0.0 { (v / size * 100.0).clamp(0.0, 100.0) } else { 50.0 };
    (pct(x, bounds.width), pct(y, bounds.height))
}

/// Whether the pointer was over the surface on the last move
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    pub hovered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    #[test]
    fn test_to_percent() {
        let bounds = Rectangle::new(Point::new(100.0, 100.0), Size::new(200.0, 400.0));
        assert_eq!(to_percent(50.0, 100.0, bounds), (25.0, 25.0));
        assert_eq!(to_percent(300.0, -5.0, bounds), (100.0, 0.0));
        let empty = Rectangle::new(Point::ORIGIN, Size::ZERO);
        assert_eq!(to_percent(1.0, 1.0, empty), (50.0, 50.0));
    }
}
