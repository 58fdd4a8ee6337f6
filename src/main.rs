use bombsearcher::{
    constants::{TITLE_SCREEN_HEIGHT, TITLE_SCREEN_WIDTH},
    render,
    screen::GameScreen,
    title::TitleScreen,
    Difficulty, Game,
};
use nannou::prelude::*;

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

enum Screen {
    Title(TitleScreen),
    Playing(GameScreen),
}

struct Model {
    window: WindowId,
    screen: Screen,
}

fn model(app: &App) -> Model {
    let window = app
        .new_window()
        .size(TITLE_SCREEN_WIDTH, TITLE_SCREEN_HEIGHT)
        .resizable(false)
        .title("Minesweeper")
        .view(view)
        .event(event)
        .build()
        .expect("failed to open the game window");

    Model {
        window,
        screen: Screen::Title(TitleScreen::new(
            TITLE_SCREEN_WIDTH as f32,
            TITLE_SCREEN_HEIGHT as f32,
            &mut rand::rng(),
        )),
    }
}

/// Sizes the window to fit the board of the current difficulty.
fn fit_window(app: &App, window: WindowId, game: &Game) {
    let (width, height) = game.layout().screen_size();
    if let Some(window) = app.window(window) {
        window.set_inner_size_points(width, height);
    }
}

fn event(app: &App, model: &mut Model, event: WindowEvent) {
    let WindowEvent::MousePressed(button) = event else {
        return;
    };
    let point = pt2(app.mouse.x, app.mouse.y);
    let now = app.duration.since_start;
    let window = model.window;

    match &mut model.screen {
        Screen::Title(title) => {
            if button == MouseButton::Left && title.is_start_click(point) {
                let game = Game::new(Difficulty::default());
                log::info!("leaving title screen");
                fit_window(app, window, &game);
                model.screen = Screen::Playing(GameScreen::new(game));
            }
        }
        Screen::Playing(screen) => {
            if screen.mouse_pressed(button, point, now).is_some() {
                fit_window(app, window, screen.game());
            }
        }
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    match &mut model.screen {
        Screen::Title(title) => title.update(update.since_last),
        Screen::Playing(screen) => screen.update(update.since_start, update.since_last),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    match &model.screen {
        Screen::Title(title) => render::draw_title(&draw, title),
        Screen::Playing(screen) => render::draw_game(&draw, screen),
    }

    draw.to_frame(app, &frame).expect("failed to render frame");
}
