use std::time::Duration;

use nannou::prelude::*;

use crate::constants::DOUBLE_CLICK_THRESHOLD;
use crate::difficulty::Difficulty;
use crate::layout::Layout;

/// Remembers the last click to tell double clicks apart.
#[derive(Clone, Debug, Default)]
pub struct DoubleClick {
    last: Option<Duration>,
}

impl DoubleClick {
    /// Records a click at `now`, returns whether it completes a double click.
    pub fn register(&mut self, now: Duration) -> bool {
        let double = self
            .last
            .is_some_and(|last| now.saturating_sub(last) < DOUBLE_CLICK_THRESHOLD);
        self.last = Some(now);
        double
    }
}

/// Difficulty picker, opened by double clicking the top bar. Modal until a
/// difficulty is chosen.
#[derive(Clone, Debug, Default)]
pub struct DifficultyMenu {
    open: bool,
    double_click: DoubleClick,
}

impl DifficultyMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Left click on the top bar. Opens the menu on a double click.
    pub fn top_bar_click(&mut self, now: Duration) -> bool {
        if self.double_click.register(now) {
            log::debug!("double click on top bar, opening difficulty menu");
            self.open = true;
        }
        self.open
    }

    /// Left click while the menu is open.
    pub fn pick(&mut self, layout: &Layout, point: Point2) -> Option<Difficulty> {
        if !self.open {
            return None;
        }

        let picked = Difficulty::ALL
            .into_iter()
            .enumerate()
            .find(|&(index, _)| layout.menu_button(index).contains(point))
            .map(|(_, difficulty)| difficulty);

        if picked.is_some() {
            self.open = false;
        }
        picked
    }
}
