use std::f32::consts::TAU;
use std::time::Duration;

use nannou::prelude::*;
use rand::Rng;

use crate::clock::FrameClock;
use crate::constants::*;

/// A mine drifting across the title screen
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub position: Vec2,
    pub size: f32,
    velocity: Vec2,
}

impl Decoration {
    fn random<R: Rng>(bounds: Rect, rng: &mut R) -> Self {
        let angle: f32 = rng.random_range(0.0..TAU);
        let speed: f32 = rng.random_range(0.5..2.0);

        Decoration {
            position: vec2(
                rng.random_range(bounds.left()..=bounds.right()),
                rng.random_range(bounds.bottom()..=bounds.top()),
            ),
            size: rng.random_range(10..=30) as f32,
            velocity: vec2(angle.cos(), angle.sin()) * speed,
        }
    }

    /// Moves one step, reappearing on the other side when leaving `bounds`.
    fn advance(&mut self, bounds: Rect) {
        self.position += self.velocity;

        if self.position.x < bounds.left() {
            self.position.x = bounds.right();
        } else if self.position.x > bounds.right() {
            self.position.x = bounds.left();
        }

        if self.position.y < bounds.bottom() {
            self.position.y = bounds.top();
        } else if self.position.y > bounds.top() {
            self.position.y = bounds.bottom();
        }
    }
}

pub struct TitleScreen {
    bounds: Rect,
    decorations: Vec<Decoration>,
    clock: FrameClock,
}

impl TitleScreen {
    pub fn new<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let bounds = Rect::from_w_h(width, height);
        TitleScreen {
            bounds,
            decorations: (0..TITLE_DECORATIONS)
                .map(|_| Decoration::random(bounds, rng))
                .collect(),
            clock: FrameClock::new(TITLE_FPS),
        }
    }

    pub fn update(&mut self, since_last: Duration) {
        for _ in 0..self.clock.advance(since_last) {
            self.advance();
        }
    }

    pub fn advance(&mut self) {
        for decoration in &mut self.decorations {
            decoration.advance(self.bounds);
        }
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn title_position(&self) -> Vec2 {
        vec2(0., self.bounds.top() - self.bounds.h() / 3.)
    }

    pub fn start_button(&self) -> Rect {
        Rect::from_x_y_w_h(
            0.,
            -50. - START_BUTTON_HEIGHT / 2.,
            START_BUTTON_WIDTH,
            START_BUTTON_HEIGHT,
        )
    }

    pub fn is_start_click(&self, point: Point2) -> bool {
        self.start_button().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn on_screen(bounds: Rect, point: Vec2) -> bool {
        (bounds.left()..=bounds.right()).contains(&point.x)
            && (bounds.bottom()..=bounds.top()).contains(&point.y)
    }

    fn title() -> TitleScreen {
        TitleScreen::new(800., 600., &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn decorations_start_on_screen() {
        let title = title();
        assert_eq!(title.decorations().len(), TITLE_DECORATIONS);
        for decoration in title.decorations() {
            assert!(on_screen(title.bounds(), decoration.position));
            assert!((10. ..=30.).contains(&decoration.size));
        }
    }

    #[test]
    fn decorations_wrap_around_and_stay_on_screen() {
        let mut title = title();
        for _ in 0..5000 {
            title.advance();
            for decoration in title.decorations() {
                assert!(on_screen(title.bounds(), decoration.position));
            }
        }
    }

    #[test]
    fn wraps_to_opposite_edge() {
        let bounds = Rect::from_w_h(100., 100.);
        let mut decoration = Decoration {
            position: vec2(49., 0.),
            size: 10.,
            velocity: vec2(2., 0.),
        };

        decoration.advance(bounds);
        assert_eq!(decoration.position, vec2(-50., 0.));
    }

    #[test]
    fn start_button_sits_below_the_title() {
        let title = title();
        assert!(title.is_start_click(pt2(0., -80.)));
        assert!(!title.is_start_click(title.title_position()));
        assert!(title.start_button().top() < title.title_position().y);
    }
}
