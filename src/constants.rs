use std::time::Duration;

pub const TITLE_SCREEN_WIDTH: u32 = 800;
pub const TITLE_SCREEN_HEIGHT: u32 = 600;

pub const TITLE_FPS: f64 = 60.;
pub const GAME_FPS: f64 = 30.;

/// Height of the info bar above the grid
pub const TOP_BAR_HEIGHT: f32 = 60.;
pub const MAX_SCREEN_WIDTH: u32 = 900;

pub const SQUARE_MARGIN: f32 = 1.;

pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(300);

pub const FACE_SIZE: f32 = 36.;

pub const MODAL_WIDTH: f32 = 300.;
pub const MODAL_HEIGHT: f32 = 150.;
pub const RESTART_BUTTON_WIDTH: f32 = 120.;
pub const RESTART_BUTTON_HEIGHT: f32 = 40.;

pub const MENU_WIDTH: f32 = 300.;
pub const MENU_HEIGHT: f32 = 200.;
pub const MENU_BUTTON_WIDTH: f32 = 200.;
pub const MENU_BUTTON_HEIGHT: f32 = 40.;
pub const MENU_BUTTON_MARGIN: f32 = 10.;
pub const MENU_BUTTONS_TOP: f32 = 60.;

pub const START_BUTTON_WIDTH: f32 = 200.;
pub const START_BUTTON_HEIGHT: f32 = 60.;

pub const EXPLOSION_PARTICLES: usize = 20;
pub const EXPLOSION_START_RADIUS: f32 = 5.;
pub const EXPLOSION_GROW_RATE: f32 = 3.;
pub const EXPLOSION_SHRINK_RATE: f32 = 2.;
pub const PARTICLE_LIFE_DECAY: f32 = 0.02;

pub const TITLE_DECORATIONS: usize = 15;

pub const CREDIT: &str = "Made by hyeongeol";
