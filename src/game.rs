use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

use crate::board::{Board, Coord, Mask, Square};
use crate::difficulty::{Difficulty, Profile};
use crate::error::Result;
use crate::explosion::Explosion;
use crate::layout::Layout;
use crate::reveal::reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Mines get placed on the first left click
    AwaitingFirstClick,
    Playing,
    /// A mine went off, the board is frozen until the explosion dies down
    Exploding,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Smile,
    Sad,
    Cool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Revealed(usize),
    HitMine,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

/// One round of Minesweeper, from the first click to the end-of-game modal.
///
/// Time is passed in as the duration since the application started so the
/// whole thing can be driven without a real clock.
pub struct Game {
    difficulty: Option<Difficulty>,
    profile: Profile,
    layout: Layout,
    board: Option<Board>,
    revealed: Mask,
    flags: Mask,
    flag_count: usize,
    lifecycle: Lifecycle,
    face: Face,
    started_at: Option<Duration>,
    elapsed: Duration,
    explosion: Option<Explosion>,
    triggered_mine: Option<Coord>,
    rng: StdRng,
}

impl Game {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    pub fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        let profile = difficulty.profile();
        let mut game = Self::blank(profile, rng);
        game.difficulty = Some(difficulty);
        log::info!("new {difficulty} game");
        game
    }

    /// Game on a custom board shape. Rejects profiles whose mines could not
    /// be placed around a first click.
    pub fn with_profile(profile: Profile, rng: StdRng) -> Result<Self> {
        profile.validate()?;
        Ok(Self::blank(profile, rng))
    }

    fn blank(profile: Profile, rng: StdRng) -> Self {
        let dim = (profile.height, profile.width);
        Game {
            difficulty: None,
            profile,
            layout: Layout::new(&profile),
            board: None,
            revealed: Mask::from_elem(dim, false),
            flags: Mask::from_elem(dim, false),
            flag_count: 0,
            lifecycle: Lifecycle::AwaitingFirstClick,
            face: Face::Smile,
            started_at: None,
            elapsed: Duration::ZERO,
            explosion: None,
            triggered_mine: None,
            rng,
        }
    }

    /// Throws the board away and waits for a new first click.
    pub fn reset(&mut self) {
        let dim = (self.profile.height, self.profile.width);
        self.board = None;
        self.revealed = Mask::from_elem(dim, false);
        self.flags = Mask::from_elem(dim, false);
        self.flag_count = 0;
        self.lifecycle = Lifecycle::AwaitingFirstClick;
        self.face = Face::Smile;
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.explosion = None;
        self.triggered_mine = None;
        log::info!("game reset");
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        log::info!("difficulty changed to {difficulty}");
        self.difficulty = Some(difficulty);
        self.profile = difficulty.profile();
        self.layout = Layout::new(&self.profile);
        self.reset();
    }

    pub fn select_difficulty_by_name(&mut self, name: &str) -> Result<()> {
        let difficulty = name.parse()?;
        self.select_difficulty(difficulty);
        Ok(())
    }

    pub fn click_face(&mut self) {
        self.reset();
    }

    /// The modal's restart button, only there once the game has ended.
    pub fn click_restart(&mut self) -> bool {
        if !self.show_modal() {
            return false;
        }
        self.reset();
        true
    }

    pub fn left_click(&mut self, pos: Coord, now: Duration) -> Result<ClickOutcome> {
        assert!(self.contains(pos), "{pos:?} is outside the board");

        if !matches!(
            self.lifecycle,
            Lifecycle::AwaitingFirstClick | Lifecycle::Playing
        ) {
            return Ok(ClickOutcome::NoChange);
        }
        if self.flags[pos] || self.revealed[pos] {
            return Ok(ClickOutcome::NoChange);
        }

        let board = match self.board.take() {
            Some(board) => board,
            None => {
                let Profile {
                    width,
                    height,
                    mines,
                    ..
                } = self.profile;
                let board = Board::generate(width, height, mines, pos, &mut self.rng)?;
                self.started_at = Some(now);
                self.lifecycle = Lifecycle::Playing;
                log::info!("first click at {pos:?}, {mines} mines placed");
                board
            }
        };
        let board = self.board.insert(board);

        if board.is_mine(pos) {
            self.revealed[pos] = true;
            self.triggered_mine = Some(pos);
            self.face = Face::Sad;
            self.stop_timer(now);
            self.lifecycle = Lifecycle::Exploding;
            self.explosion = Some(Explosion::new(
                self.layout.cell_center(pos),
                self.layout.cell_size(),
                &mut self.rng,
            ));
            log::info!("mine hit at {pos:?}");
            return Ok(ClickOutcome::HitMine);
        }

        let opened = reveal(board, &mut self.revealed, &self.flags, pos);
        log::debug!("opened {} squares from {pos:?}", opened.len());

        if self.check_win() {
            self.face = Face::Cool;
            self.stop_timer(now);
            self.lifecycle = Lifecycle::Won;
            log::info!("board cleared in {}s", self.elapsed_secs());
            return Ok(ClickOutcome::Won);
        }

        Ok(ClickOutcome::Revealed(opened.len()))
    }

    pub fn right_click(&mut self, pos: Coord) -> MarkOutcome {
        assert!(self.contains(pos), "{pos:?} is outside the board");

        if !matches!(
            self.lifecycle,
            Lifecycle::AwaitingFirstClick | Lifecycle::Playing
        ) || self.revealed[pos]
        {
            return MarkOutcome::NoChange;
        }

        let flag = &mut self.flags[pos];
        *flag = !*flag;
        log::debug!("flag at {pos:?} set to {}", *flag);

        if *flag {
            self.flag_count += 1;
            MarkOutcome::Flagged
        } else {
            self.flag_count -= 1;
            MarkOutcome::Unflagged
        }
    }

    /// Called once per frame, keeps the timer running while playing.
    pub fn update(&mut self, now: Duration) {
        if let (Lifecycle::Playing, Some(started_at)) = (self.lifecycle, self.started_at) {
            self.elapsed = now.saturating_sub(started_at);
        }
    }

    /// Called once per fixed animation tick, steps the explosion and ends the
    /// game once it has burnt out.
    pub fn tick(&mut self) {
        let Some(explosion) = &mut self.explosion else {
            return;
        };

        if !explosion.advance() {
            self.explosion = None;
            self.lifecycle = Lifecycle::Lost;
            log::info!("game over");
        }
    }

    fn stop_timer(&mut self, now: Duration) {
        if let Some(started_at) = self.started_at {
            self.elapsed = now.saturating_sub(started_at);
        }
    }

    /// True once every square without a mine is open. Flags do not count.
    pub fn check_win(&self) -> bool {
        self.board
            .as_ref()
            .is_some_and(|board| board.is_cleared(&self.revealed))
    }

    fn contains(&self, (row, col): Coord) -> bool {
        row < self.profile.height && col < self.profile.width
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn face(&self) -> Face {
        self.face
    }

    /// `None` until the first click placed the mines
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn square(&self, pos: Coord) -> Option<Square> {
        self.board.as_ref().map(|board| board[pos])
    }

    pub fn is_revealed(&self, pos: Coord) -> bool {
        self.revealed[pos]
    }

    pub fn is_flagged(&self, pos: Coord) -> bool {
        self.flags[pos]
    }

    /// Mines minus flags; goes negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        self.profile.mines as isize - self.flag_count as isize
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    pub fn explosion(&self) -> Option<&Explosion> {
        self.explosion.as_ref()
    }

    pub fn triggered_mine(&self) -> Option<Coord> {
        self.triggered_mine
    }

    /// Board input is no longer accepted
    pub fn is_over(&self) -> bool {
        matches!(
            self.lifecycle,
            Lifecycle::Exploding | Lifecycle::Won | Lifecycle::Lost
        )
    }

    pub fn show_modal(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Won | Lifecycle::Lost)
    }
}
