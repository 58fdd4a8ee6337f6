use std::time::Duration;

use nannou::prelude::*;

use crate::clock::FrameClock;
use crate::constants::GAME_FPS;
use crate::difficulty::Difficulty;
use crate::game::Game;
use crate::menu::DifficultyMenu;

/// The playing screen: routes mouse presses to the game or the difficulty
/// menu and drives the game's per-frame and per-tick updates.
pub struct GameScreen {
    game: Game,
    menu: DifficultyMenu,
    clock: FrameClock,
}

impl GameScreen {
    pub fn new(game: Game) -> Self {
        GameScreen {
            game,
            menu: DifficultyMenu::default(),
            clock: FrameClock::new(GAME_FPS),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn menu(&self) -> &DifficultyMenu {
        &self.menu
    }

    /// Handles a mouse press at `point`. Returns the new difficulty when one
    /// was picked so the window can be resized.
    pub fn mouse_pressed(
        &mut self,
        button: MouseButton,
        point: Point2,
        now: Duration,
    ) -> Option<Difficulty> {
        let layout = *self.game.layout();

        if self.menu.is_open() {
            if button != MouseButton::Left {
                return None;
            }
            let picked = self.menu.pick(&layout, point);
            if let Some(difficulty) = picked {
                self.game.select_difficulty(difficulty);
            }
            return picked;
        }

        if button == MouseButton::Left {
            if self.game.show_modal() && layout.restart_button().contains(point) {
                self.game.click_restart();
                return None;
            }
            if layout.face_button().contains(point) {
                self.game.click_face();
                return None;
            }
            if layout.in_top_bar(point) {
                self.menu.top_bar_click(now);
                return None;
            }
        }

        let pos = layout.cell_at(point)?;
        match button {
            MouseButton::Left => match self.game.left_click(pos, now) {
                Ok(outcome) => log::debug!("left click at {pos:?}: {outcome:?}"),
                Err(err) => log::error!("left click at {pos:?} failed: {err}"),
            },
            MouseButton::Right => {
                let outcome = self.game.right_click(pos);
                log::debug!("right click at {pos:?}: {outcome:?}");
            }
            _ => {}
        }
        None
    }

    pub fn update(&mut self, since_start: Duration, since_last: Duration) {
        self.game.update(since_start);
        for _ in 0..self.clock.advance(since_last) {
            self.game.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::game::Lifecycle;

    fn screen() -> GameScreen {
        GameScreen::new(Game::with_rng(
            Difficulty::Beginner,
            StdRng::seed_from_u64(12),
        ))
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn clicks_reach_the_board() {
        let mut screen = screen();
        let layout = *screen.game().layout();

        screen.mouse_pressed(MouseButton::Right, layout.cell_center((0, 0)), ms(0));
        assert!(screen.game().is_flagged((0, 0)));

        screen.mouse_pressed(MouseButton::Left, layout.cell_center((4, 4)), ms(10));
        assert_eq!(screen.game().lifecycle(), Lifecycle::Playing);
        assert!(screen.game().is_revealed((4, 4)));
    }

    #[test]
    fn face_button_resets() {
        let mut screen = screen();
        let layout = *screen.game().layout();

        screen.mouse_pressed(MouseButton::Left, layout.cell_center((4, 4)), ms(0));
        screen.mouse_pressed(MouseButton::Left, layout.face_button().xy(), ms(1000));

        assert_eq!(screen.game().lifecycle(), Lifecycle::AwaitingFirstClick);
        assert!(!screen.menu().is_open());
    }

    #[test]
    fn double_click_on_top_bar_opens_menu_and_blocks_board() {
        let mut screen = screen();
        let layout = *screen.game().layout();
        let bar = pt2(layout.top_bar().left() + 20., layout.top_bar().top() - 20.);

        screen.mouse_pressed(MouseButton::Left, bar, ms(1000));
        assert!(!screen.menu().is_open());
        screen.mouse_pressed(MouseButton::Left, bar, ms(1150));
        assert!(screen.menu().is_open());

        // the board underneath does not react
        screen.mouse_pressed(MouseButton::Right, layout.cell_center((8, 8)), ms(2000));
        assert!(!screen.game().is_flagged((8, 8)));

        let intermediate = layout.menu_button(1).xy();
        let picked = screen.mouse_pressed(MouseButton::Left, intermediate, ms(3000));
        assert_eq!(picked, Some(Difficulty::Intermediate));
        assert!(!screen.menu().is_open());
        assert_eq!(screen.game().difficulty(), Some(Difficulty::Intermediate));
        assert_eq!(screen.game().mines_left(), 40);
    }

    #[test]
    fn explosion_runs_on_ticks_then_modal_restarts() {
        let mut screen = screen();
        let layout = *screen.game().layout();
        screen.mouse_pressed(MouseButton::Left, layout.cell_center((4, 4)), ms(0));

        let board = screen.game().board().unwrap();
        let mine = board.coords().find(|&pos| board.is_mine(pos)).unwrap();
        screen.mouse_pressed(MouseButton::Left, layout.cell_center(mine), ms(500));
        assert_eq!(screen.game().lifecycle(), Lifecycle::Exploding);

        let mut now = ms(500);
        for _ in 0..300 {
            now += ms(33);
            screen.update(now, ms(33));
        }
        assert_eq!(screen.game().lifecycle(), Lifecycle::Lost);
        assert_eq!(screen.game().elapsed_secs(), 0);

        screen.mouse_pressed(MouseButton::Left, layout.restart_button().xy(), now);
        assert_eq!(screen.game().lifecycle(), Lifecycle::AwaitingFirstClick);
    }
}
