use std::f32::consts::PI;

use nannou::prelude::*;

use crate::board::{Coord, Square};
use crate::constants::*;
use crate::difficulty::Difficulty;
use crate::explosion::Explosion;
use crate::game::{Face, Game, Lifecycle};
use crate::layout::Layout;
use crate::screen::GameScreen;
use crate::title::TitleScreen;

const NUMBER_COLORS: [Srgb<u8>; 8] = [BLUE, GREEN, RED, PURPLE, MAROON, TURQUOISE, BLACK, GRAY];

pub fn draw_title(draw: &Draw, title: &TitleScreen) {
    draw.background().color(SILVER);

    for decoration in title.decorations() {
        draw_mine(draw, decoration.position, decoration.size);
    }

    let bounds = title.bounds();
    let title_position = title.title_position();
    draw.text("Minesweeper")
        .xy(title_position)
        .w_h(bounds.w(), 80.)
        .font_size(60)
        .color(BLACK);

    let button = title.start_button();
    draw_button(draw, button, GRAY, "Start", 30);

    draw.text(CREDIT)
        .x_y(bounds.right() - 120., bounds.bottom() + 30.)
        .w_h(200., 30.)
        .font_size(20)
        .right_justify()
        .color(BLACK);
}

pub fn draw_game(draw: &Draw, screen: &GameScreen) {
    let game = screen.game();
    let layout = game.layout();

    draw.background().color(SILVER);
    draw_top_bar(draw, game, layout);

    let profile = game.profile();
    for row in 0..profile.height {
        for col in 0..profile.width {
            draw_square(draw, game, layout, (row, col));
        }
    }

    if let Some(explosion) = game.explosion() {
        draw_explosion(draw, explosion);
    }

    if game.show_modal() {
        draw_modal(draw, game, layout);
    }

    if screen.menu().is_open() {
        draw_menu(draw, layout);
    }
}

fn draw_top_bar(draw: &Draw, game: &Game, layout: &Layout) {
    let bar = layout.top_bar();
    draw.rect().xy(bar.xy()).wh(bar.wh()).color(GRAY);

    draw.text(&format!("Mines: {}", game.mines_left()))
        .x_y(bar.left() + 80., bar.y())
        .w_h(140., 30.)
        .font_size(20)
        .left_justify()
        .color(WHITE);

    draw.text(&format!("Time: {}", game.elapsed_secs()))
        .x_y(bar.right() - 80., bar.y() + 6.)
        .w_h(140., 30.)
        .font_size(20)
        .right_justify()
        .color(WHITE);

    draw.text(CREDIT)
        .x_y(bar.right() - 80., bar.bottom() + 10.)
        .w_h(140., 16.)
        .font_size(10)
        .right_justify()
        .color(WHITE);

    draw_face(draw, layout.face_button(), game.face());
}

fn draw_face(draw: &Draw, rect: Rect, face: Face) {
    let center = rect.xy();
    let radius = rect.w() / 2.;
    draw.ellipse()
        .xy(center)
        .radius(radius)
        .color(YELLOW)
        .stroke(BLACK)
        .stroke_weight(1.);

    let eye_y = center.y + radius * 0.3;
    match face {
        Face::Cool => {
            draw.rect()
                .x_y(center.x, eye_y)
                .w_h(radius * 1.4, radius * 0.3)
                .color(BLACK);
        }
        Face::Smile | Face::Sad => {
            for side in [-1f32, 1.] {
                draw.ellipse()
                    .x_y(center.x + side * radius * 0.35, eye_y)
                    .radius(radius * 0.1)
                    .color(BLACK);
            }
        }
    }

    // mouth is a half circle, upside down for the sad face
    let (mouth_y, curve) = match face {
        Face::Sad => (center.y - radius * 0.55, 1f32),
        Face::Smile | Face::Cool => (center.y - radius * 0.15, -1.),
    };
    let points = (0..=12).map(|i| {
        let angle = PI * i as f32 / 12.;
        pt2(
            center.x - radius * 0.45 * angle.cos(),
            mouth_y + curve * radius * 0.3 * angle.sin(),
        )
    });
    draw.polyline().weight(2.).points(points).color(BLACK);
}

fn draw_square(draw: &Draw, game: &Game, layout: &Layout, pos: Coord) {
    let center = layout.cell_center(pos);
    let size = layout.cell_size();
    let inner = size - SQUARE_MARGIN * 2.;

    draw.rect().xy(center).w_h(size, size).color(GRAY);

    let square = game.square(pos);
    let is_mine = square.is_some_and(Square::is_mine);
    let game_over = game.is_over();

    if game.is_revealed(pos) {
        if is_mine {
            let background = if game.triggered_mine() == Some(pos) {
                RED
            } else {
                WHITE
            };
            draw.rect().xy(center).w_h(inner, inner).color(background);
            draw_mine(draw, center, size * 0.3);
        } else {
            draw.rect().xy(center).w_h(inner, inner).color(WHITE);
            if let Some(Square::Nearby(n)) = square {
                draw.text(&n.to_string())
                    .xy(center)
                    .w_h(size, size)
                    .font_size((size * 0.6) as u32)
                    .color(NUMBER_COLORS[n as usize - 1]);
            }
        }
        return;
    }

    draw.rect().xy(center).w_h(inner, inner).color(SILVER);

    let flagged = game.is_flagged(pos);
    if flagged {
        draw_flag(draw, center, size);
        if game_over && !is_mine {
            draw_cross(draw, center, size * 0.35);
        }
    } else if game_over && is_mine {
        draw_mine(draw, center, size * 0.3);
    }
}

fn draw_mine(draw: &Draw, center: Vec2, size: f32) {
    draw.ellipse().xy(center).radius(size).color(BLACK);
    draw.line()
        .start(center - vec2(size / 2., 0.))
        .end(center + vec2(size / 2., 0.))
        .weight(2.)
        .color(SILVER);
    draw.line()
        .start(center - vec2(0., size / 2.))
        .end(center + vec2(0., size / 2.))
        .weight(2.)
        .color(SILVER);
}

fn draw_flag(draw: &Draw, center: Vec2, size: f32) {
    let pole_x = center.x + size * 0.1;
    draw.line()
        .start(pt2(pole_x, center.y - size * 0.3))
        .end(pt2(pole_x, center.y + size * 0.3))
        .weight(2.)
        .color(BLACK);
    draw.tri()
        .points(
            pt2(pole_x, center.y + size * 0.3),
            pt2(pole_x, center.y),
            pt2(pole_x - size * 0.35, center.y + size * 0.15),
        )
        .color(RED);
}

fn draw_cross(draw: &Draw, center: Vec2, half: f32) {
    for (from, to) in [(vec2(-half, -half), vec2(half, half)), (vec2(-half, half), vec2(half, -half))] {
        draw.line()
            .start(center + from)
            .end(center + to)
            .weight(3.)
            .color(RED);
    }
}

fn draw_explosion(draw: &Draw, explosion: &Explosion) {
    if explosion.radius() > 0. {
        draw.ellipse()
            .xy(explosion.center())
            .radius(explosion.radius())
            .color(srgba(1., 100. / 255., 0., explosion.ring_alpha()));
    }

    for particle in explosion.particles() {
        let color = particle.color;
        draw.ellipse()
            .xy(particle.position)
            .radius(particle.size)
            .color(rgba8(
                color.red,
                color.green,
                color.blue,
                (particle.alpha() * 255.) as u8,
            ));
    }
}

fn draw_modal(draw: &Draw, game: &Game, layout: &Layout) {
    let modal = layout.modal();
    draw.rect()
        .xy(modal.xy())
        .wh(modal.wh())
        .color(WHITE)
        .stroke(BLACK)
        .stroke_weight(2.);

    let message = match game.lifecycle() {
        Lifecycle::Won => "You Win!",
        _ => "Game Over!",
    };
    draw.text(message)
        .x_y(0., modal.top() - 40.)
        .w_h(modal.w(), 40.)
        .font_size(30)
        .color(RED);

    draw_button(draw, layout.restart_button(), BLUE, "Restart", 20);
}

fn draw_menu(draw: &Draw, layout: &Layout) {
    let menu = layout.menu();
    draw.rect()
        .xy(menu.xy())
        .wh(menu.wh())
        .color(WHITE)
        .stroke(BLACK)
        .stroke_weight(2.);

    draw.text("Select Difficulty")
        .x_y(0., menu.top() - 30.)
        .w_h(menu.w(), 30.)
        .font_size(20)
        .color(BLACK);

    for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        draw_button(draw, layout.menu_button(index), GRAY, difficulty.name(), 20);
    }
}

fn draw_button(draw: &Draw, rect: Rect, color: Srgb<u8>, label: &str, font_size: u32) {
    draw.rect()
        .xy(rect.xy())
        .wh(rect.wh())
        .color(color)
        .stroke(BLACK)
        .stroke_weight(2.);
    draw.text(label)
        .xy(rect.xy())
        .wh(rect.wh())
        .font_size(font_size)
        .color(WHITE);
}
