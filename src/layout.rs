use nannou::prelude::*;

use crate::board::Coord;
use crate::constants::*;
use crate::difficulty::Profile;

/// Screen geometry for one profile, in nannou window coordinates
/// (origin in the centre, y pointing up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    cell_size: f32,
    width: f32,
    height: f32,
}

impl Layout {
    pub fn new(profile: &Profile) -> Self {
        let cell_size = profile.cell_size() as f32;
        Layout {
            rows: profile.height,
            cols: profile.width,
            cell_size,
            width: profile.width as f32 * cell_size,
            height: profile.height as f32 * cell_size + TOP_BAR_HEIGHT,
        }
    }

    pub fn screen_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn left(&self) -> f32 {
        -self.width / 2.
    }

    fn top(&self) -> f32 {
        self.height / 2.
    }

    /// Centre of the square at `(row, col)`; row 0 sits right under the top bar.
    pub fn cell_center(&self, (row, col): Coord) -> Vec2 {
        vec2(
            self.left() + self.cell_size * col as f32 + self.cell_size / 2.,
            self.top() - TOP_BAR_HEIGHT - self.cell_size * row as f32 - self.cell_size / 2.,
        )
    }

    /// Square under `point`, `None` over the top bar or outside the grid.
    pub fn cell_at(&self, point: Point2) -> Option<Coord> {
        let x = point.x - self.left();
        let y = self.top() - TOP_BAR_HEIGHT - point.y;
        if x < 0. || y < 0. {
            return None;
        }

        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;

        (row < self.rows && col < self.cols).then_some((row, col))
    }

    pub fn top_bar(&self) -> Rect {
        Rect::from_x_y_w_h(0., self.top() - TOP_BAR_HEIGHT / 2., self.width, TOP_BAR_HEIGHT)
    }

    pub fn in_top_bar(&self, point: Point2) -> bool {
        self.top_bar().contains(point)
    }

    pub fn face_button(&self) -> Rect {
        Rect::from_x_y_w_h(0., self.top() - TOP_BAR_HEIGHT / 2., FACE_SIZE, FACE_SIZE)
    }

    pub fn modal(&self) -> Rect {
        Rect::from_w_h(MODAL_WIDTH, MODAL_HEIGHT)
    }

    pub fn restart_button(&self) -> Rect {
        let modal = self.modal();
        Rect::from_x_y_w_h(
            0.,
            modal.top() - 80. - RESTART_BUTTON_HEIGHT / 2.,
            RESTART_BUTTON_WIDTH,
            RESTART_BUTTON_HEIGHT,
        )
    }

    pub fn menu(&self) -> Rect {
        Rect::from_w_h(MENU_WIDTH, MENU_HEIGHT)
    }

    /// Button rectangle for the `index`th entry of the difficulty menu
    pub fn menu_button(&self, index: usize) -> Rect {
        let top = self.menu().top()
            - MENU_BUTTONS_TOP
            - index as f32 * (MENU_BUTTON_HEIGHT + MENU_BUTTON_MARGIN);
        Rect::from_x_y_w_h(
            0.,
            top - MENU_BUTTON_HEIGHT / 2.,
            MENU_BUTTON_WIDTH,
            MENU_BUTTON_HEIGHT,
        )
    }
}
