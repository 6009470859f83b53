//! Rendering layer: turns a read-only view of the world into draw calls.
//!
//! No game logic is performed here.  Everything is expressed in world
//! coordinates (800×600) against the [`Canvas`] trait; the terminal
//! backend in [`terminal`] decides how that maps onto cells.

pub mod terminal;

use crate::compute::player::current_face;
use crate::constants::{
    COIN_SIZE, ENEMY_SIZE, LASER_HEIGHT, LASER_WIDTH, METER_MAX, PLAYER_HEIGHT, PLAYER_WIDTH,
    POWER_UP_SIZE, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::entities::{
    Coin, Enemy, EnemyKind, Facing, GameStatus, GameWorld, Laser, MenuButton, Particle,
    ParticleKind, PowerUp, PowerUpKind, Rgb, Variant,
};
use crate::geometry::Rect;
use crate::levels::{level_count, level_end_x};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// The five drawing primitives the game needs.
pub trait Canvas {
    fn fill(&mut self, color: Rgb);
    fn filled_rect(&mut self, rect: Rect, color: Rgb);
    fn filled_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb);
    fn text(&mut self, text: &str, x: f32, y: f32, color: Rgb, align: Align);
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_MENU_BG: Rgb = Rgb(1, 1, 25);
const C_STATION_BG: Rgb = Rgb(3, 3, 45);
const C_ALIEN_BASE_BG: Rgb = Rgb(45, 3, 3);
const C_GAMEOVER_BG: Rgb = Rgb(60, 0, 0);
const C_VICTORY_BG: Rgb = Rgb(0, 60, 0);
const C_PLATFORM: Rgb = Rgb(70, 90, 130);
const C_PLATFORM_EDGE: Rgb = Rgb(100, 180, 255);
const C_PLATFORM_LED: Rgb = Rgb(0, 255, 255);
const C_COIN: Rgb = Rgb(255, 215, 0);
const C_LASER: Rgb = Rgb(0, 255, 255);
const C_HELMET: Rgb = Rgb(180, 200, 255);
const C_CYAN: Rgb = Rgb(0, 255, 255);
const C_GOLD: Rgb = Rgb(255, 215, 0);
const C_YELLOW: Rgb = Rgb(255, 255, 0);
const C_RED: Rgb = Rgb(255, 60, 60);
const C_GREEN: Rgb = Rgb(0, 255, 0);
const C_GRAY: Rgb = Rgb(128, 128, 128);

/// Sparks are drawn as a small star of this many rotated spokes.
const SPARK_SPOKES: usize = 6;

fn enemy_color(kind: EnemyKind) -> Rgb {
    match kind {
        EnemyKind::Standard => Rgb(255, 100, 100),
        EnemyKind::Jumper => Rgb(100, 255, 100),
        EnemyKind::Flyer => Rgb(150, 100, 255),
        EnemyKind::Robot => Rgb(160, 160, 180),
    }
}

fn power_up_look(kind: PowerUpKind) -> (Rgb, &'static str) {
    match kind {
        PowerUpKind::Energy => (Rgb(0, 255, 100), "E"),
        PowerUpKind::Oxygen => (Rgb(100, 200, 255), "O"),
        PowerUpKind::Life => (Rgb(255, 50, 100), "+"),
        PowerUpKind::Jetpack => (Rgb(255, 150, 0), "J"),
        PowerUpKind::Shield => (Rgb(100, 100, 255), "S"),
        PowerUpKind::Speed => (Rgb(255, 255, 0), ">"),
    }
}

/// Twinkle brightness in 75..=255 applied to a star colour.
fn twinkled(color: Rgb, twinkle: f32, rate: f32) -> Rgb {
    let brightness = ((twinkle * rate).sin().abs() * 180.0 + 75.0) / 255.0;
    color.scale(brightness)
}

fn on_screen(screen_x: f32, width: f32, margin: f32) -> bool {
    screen_x + width > -margin && screen_x < WORLD_WIDTH + margin
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Draw one complete frame for the current game status.
pub fn draw(world: &GameWorld, canvas: &mut impl Canvas) {
    match world.status {
        GameStatus::Menu => draw_menu(world, canvas),
        GameStatus::Playing => draw_game(world, canvas),
        GameStatus::GameOver => draw_game_over(world, canvas),
        GameStatus::Victory => draw_victory(world, canvas),
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu(world: &GameWorld, canvas: &mut impl Canvas) {
    canvas.fill(C_MENU_BG);

    for star in &world.stars {
        if star.x > 0.0 && star.x < WORLD_WIDTH {
            let color = match world.variant {
                Variant::Mini => star.color,
                Variant::Full => twinkled(star.color, star.twinkle, 0.04),
            };
            canvas.filled_circle(star.x, star.y, star.size, color);
        }
    }

    let cx = WORLD_WIDTH / 2.0;
    match world.variant {
        Variant::Mini => {
            canvas.text("MINI SPACEK", cx, 100.0, C_CYAN, Align::Center);
            canvas.text("Defeat the aliens!", cx, 160.0, Rgb::WHITE, Align::Center);
            if world.high_score > 0 {
                let record = format!("HIGH SCORE: {}", world.high_score);
                canvas.text(&record, cx, 200.0, C_GOLD, Align::Center);
            }
        }
        Variant::Full => {
            canvas.text("SPACEK", cx, 60.0, C_CYAN, Align::Center);
            canvas.text("ALIEN MISSION", cx, 140.0, Rgb::WHITE, Align::Center);
            canvas.text("Defeat the invaders!", cx, 170.0, Rgb(200, 255, 200), Align::Center);
            let pink = Rgb(255, 200, 200);
            canvas.text("Explore dangerous territory!", cx, 195.0, pink, Align::Center);
            canvas.text("Collect energy crystals!", cx, 220.0, Rgb(200, 200, 255), Align::Center);
            if world.high_score > 0 {
                let record = format!("HIGH SCORE: {}", world.high_score);
                canvas.text(&record, cx, 250.0, C_GOLD, Align::Center);
            }
        }
    }

    for button in &world.buttons {
        draw_button(button, canvas);
    }

    let hint = match world.variant {
        Variant::Mini => "ENTER: Start | M: Audio | A/D: Move | Space: Jump | X: Laser",
        Variant::Full => "T: Test audio | WASD: Move | Space: Jetpack | X: Laser",
    };
    canvas.text(hint, cx, 590.0, C_GRAY, Align::Center);
}

fn draw_button(button: &MenuButton, canvas: &mut impl Canvas) {
    let mut color = button.color;
    if button.hovered {
        color = color.offset(60.0);
    }
    if button.click_timer > 0 {
        color = color.scale(0.7);
    }
    canvas.filled_rect(button.rect, color);

    let r = button.rect;
    let glow = (button.glow_timer as f32 * 0.1).sin().abs() * 40.0;
    let edge = if button.hovered { Rgb::WHITE } else { color.offset(20.0 + glow) };
    canvas.line(r.left(), r.top(), r.right(), r.top(), edge);
    canvas.line(r.left(), r.bottom(), r.right(), r.bottom(), edge);
    canvas.text(&button.label, r.center_x(), r.center_y(), Rgb::WHITE, Align::Center);
}

// ── Gameplay ──────────────────────────────────────────────────────────────────

fn draw_game(world: &GameWorld, canvas: &mut impl Canvas) {
    let cam = world.camera_x;
    canvas.fill(if world.level == 1 { C_STATION_BG } else { C_ALIEN_BASE_BG });

    for star in &world.stars {
        let (x, color) = match world.variant {
            Variant::Mini => (star.x - cam * 0.1, star.color),
            Variant::Full => (
                star.x - cam * (0.05 + star.size * 0.02),
                twinkled(star.color, star.twinkle, 0.01),
            ),
        };
        if x > -40.0 && x < WORLD_WIDTH + 40.0 {
            canvas.filled_circle(x, star.y, star.size, color);
        }
    }

    for plat in &world.platforms {
        draw_platform(plat, cam, world.variant, canvas);
    }
    for power_up in &world.power_ups {
        draw_power_up(power_up, cam, canvas);
    }
    for coin in &world.coins {
        draw_coin(coin, cam, canvas);
    }
    for enemy in &world.enemies {
        draw_enemy(enemy, cam, canvas);
    }
    for laser in &world.lasers {
        draw_laser(laser, cam, canvas);
    }
    draw_particles(&world.particles, cam, canvas);

    draw_hero(world, canvas);
    draw_hud(world, canvas);
}

fn draw_platform(plat: &Rect, cam: f32, variant: Variant, canvas: &mut impl Canvas) {
    let x = plat.x - cam;
    if !on_screen(x, plat.w, 50.0) {
        return;
    }
    let visible_x = x.max(0.0);
    let visible_w = (x + plat.w).min(WORLD_WIDTH) - visible_x;
    if visible_w <= 0.0 {
        return;
    }
    canvas.filled_rect(Rect::new(visible_x, plat.y, visible_w, plat.h), C_PLATFORM);
    if variant == Variant::Mini {
        return;
    }

    let (top, bottom) = (plat.top(), plat.bottom());
    canvas.line(visible_x, top, visible_x + visible_w, top, C_PLATFORM_EDGE);
    canvas.line(visible_x, bottom, visible_x + visible_w, bottom, C_PLATFORM_EDGE);
    // Floating platforms carry indicator lights; the ground does not.
    if plat.y < 520.0 {
        let mut i = 0.0;
        while i < plat.w {
            let light_x = x + i + 15.0;
            if (0.0..=WORLD_WIDTH).contains(&light_x) {
                canvas.filled_circle(light_x, top + 5.0, 4.0, C_PLATFORM_LED);
            }
            i += 30.0;
        }
    }
}

fn draw_coin(coin: &Coin, cam: f32, canvas: &mut impl Canvas) {
    if coin.collected {
        return;
    }
    let x = coin.x - cam;
    if !on_screen(x, COIN_SIZE, 25.0) {
        return;
    }
    let spin = (coin.rotation * 0.08).cos().abs();
    let width = (COIN_SIZE * spin).max(4.0);
    let face = Rect::new(x + COIN_SIZE / 2.0 - width / 2.0, coin.y + 4.0, width, 8.0);
    canvas.filled_rect(face, C_COIN);
    if width > 8.0 {
        canvas.text("K", x + COIN_SIZE / 2.0, coin.y + 8.0, Rgb(255, 165, 0), Align::Center);
    }
    if coin.sparkle_timer > 0 && coin.sparkle_timer % 30 < 6 {
        canvas.filled_circle(x + COIN_SIZE - 2.0, coin.y + 2.0, 2.0, Rgb::WHITE);
    }
}

fn draw_power_up(power_up: &PowerUp, cam: f32, canvas: &mut impl Canvas) {
    if power_up.collected {
        return;
    }
    let x = power_up.x - cam;
    if !on_screen(x, POWER_UP_SIZE, 40.0) {
        return;
    }
    let (color, glyph) = power_up_look(power_up.kind);
    let glow = (power_up.glow_timer as f32 * 0.1).sin().abs() * 40.0;
    let (cx, cy) = (x + POWER_UP_SIZE / 2.0, power_up.y + POWER_UP_SIZE / 2.0);
    canvas.filled_circle(cx, cy, POWER_UP_SIZE / 2.0 + 4.0, color.scale(0.4).offset(glow));
    canvas.filled_circle(cx, cy, POWER_UP_SIZE / 2.0, color);
    canvas.text(glyph, cx, cy, Rgb::BLACK, Align::Center);
}

fn draw_enemy(enemy: &Enemy, cam: f32, canvas: &mut impl Canvas) {
    if !enemy.alive {
        return;
    }
    let x = enemy.x - cam;
    if !on_screen(x, ENEMY_SIZE, 50.0) {
        return;
    }
    let color = enemy_color(enemy.kind);
    let body = Rect::new(x, enemy.y, ENEMY_SIZE, ENEMY_SIZE);
    match enemy.kind {
        EnemyKind::Flyer => {
            let flap = (enemy.anim_timer as f32 * 0.4).sin() * 4.0;
            canvas.line(x - 6.0, enemy.y + 10.0 + flap, x + 4.0, enemy.y + 14.0, color);
            let right = x + ENEMY_SIZE;
            canvas.line(right + 6.0, enemy.y + 10.0 + flap, right - 4.0, enemy.y + 14.0, color);
            canvas.filled_circle(body.center_x(), body.center_y(), ENEMY_SIZE / 2.0, color);
        }
        _ => canvas.filled_rect(body, color),
    }

    let eye_x = body.center_x() + 5.0 * enemy.facing.sign();
    canvas.filled_circle(eye_x, enemy.y + 10.0, 5.0, C_YELLOW);
    canvas.filled_circle(eye_x + 2.0 * enemy.facing.sign(), enemy.y + 10.0, 2.0, Rgb::BLACK);

    if enemy.max_health > 1 {
        let frac = enemy.health as f32 / enemy.max_health as f32;
        canvas.filled_rect(Rect::new(x, enemy.y - 8.0, ENEMY_SIZE, 4.0), Rgb(80, 0, 0));
        canvas.filled_rect(Rect::new(x, enemy.y - 8.0, ENEMY_SIZE * frac, 4.0), C_GREEN);
    }
}

fn draw_laser(laser: &Laser, cam: f32, canvas: &mut impl Canvas) {
    let len = laser.trail.len().max(1) as f32;
    for (i, &(tx, ty)) in laser.trail.iter().enumerate() {
        let fade = (i + 1) as f32 / len;
        let (dot_x, dot_y) = (tx - cam + LASER_WIDTH / 2.0, ty + LASER_HEIGHT / 2.0);
        canvas.filled_circle(dot_x, dot_y, 2.0 * fade, C_LASER.scale(fade));
    }
    let body = Rect::new(laser.x - cam, laser.y, LASER_WIDTH, LASER_HEIGHT);
    canvas.filled_rect(body, C_LASER);
    let tip_x = match laser.direction {
        Facing::Right => body.right(),
        Facing::Left => body.left(),
    };
    canvas.filled_circle(tip_x, body.center_y(), LASER_HEIGHT / 2.0, Rgb::WHITE);
}

fn draw_particles(particles: &[Particle], cam: f32, canvas: &mut impl Canvas) {
    for p in particles {
        if p.lifetime == 0 {
            continue;
        }
        let (x, color) = (p.x - cam, p.color.scale(p.alpha()));
        canvas.filled_circle(x, p.y, p.size, color);
        if p.kind == ParticleKind::Spark {
            let reach = p.size * 1.5;
            for spoke in 0..SPARK_SPOKES {
                let angle = (p.rotation + spoke as f32 * 60.0).to_radians();
                canvas.line(x, p.y, x + angle.cos() * reach, p.y + angle.sin() * reach, color);
            }
        }
    }
}

fn draw_hero(world: &GameWorld, canvas: &mut impl Canvas) {
    let p = &world.player;
    let x = p.x - world.camera_x;
    let (cx, cy) = (x + PLAYER_WIDTH / 2.0, p.y + PLAYER_HEIGHT / 2.0);

    if world.variant == Variant::Full {
        if world.controls.jump_held && !p.on_ground && p.jetpack_fuel > 0.0 {
            const FLAME: [Rgb; 6] = [
                Rgb(255, 255, 255),
                Rgb(255, 200, 0),
                Rgb(255, 150, 0),
                Rgb(255, 100, 0),
                Rgb(200, 50, 0),
                Rgb(100, 0, 0),
            ];
            for (i, color) in FLAME.iter().enumerate() {
                let step = i as f32;
                canvas.filled_circle(cx, p.y + PLAYER_HEIGHT + step * 4.0, 6.0 - step, *color);
            }
        }
        if p.has_shield() {
            let pulse = (p.shield_timer as f32 * 0.25).sin().abs() * 30.0;
            canvas.filled_circle(cx, cy, 28.0, Rgb::clamped(80.0 + pulse, 120.0 + pulse, 255.0));
        }
    }

    // Blink while invulnerable.
    if p.invulnerable > 0 && (p.invulnerable / 6) % 2 == 1 {
        return;
    }

    let suit = match world.variant {
        Variant::Mini => Rgb(60, 130, 255),
        Variant::Full if p.energy > 70.0 => Rgb(60, 130, 255),
        Variant::Full if p.energy > 40.0 => Rgb(100, 150, 220),
        Variant::Full => Rgb(200, 100, 100),
    };
    canvas.filled_rect(Rect::new(x, p.y, PLAYER_WIDTH, PLAYER_HEIGHT), suit);
    canvas.filled_circle(cx, p.y + 12.0, 14.0, C_HELMET);
    canvas.text(current_face(p), cx, p.y + 12.0, Rgb::BLACK, Align::Center);

    if world.variant == Variant::Full {
        let pack_x = match p.facing {
            Facing::Right => x - 8.0,
            Facing::Left => x + PLAYER_WIDTH - 2.0,
        };
        canvas.filled_rect(Rect::new(pack_x, p.y + 10.0, 10.0, 28.0), Rgb(60, 60, 80));
        for i in 0..5 {
            let threshold = 20.0 * (5 - i) as f32;
            let led = if p.jetpack_fuel > threshold {
                C_GREEN
            } else if p.jetpack_fuel > threshold - 10.0 {
                C_YELLOW
            } else {
                Rgb(50, 50, 50)
            };
            canvas.filled_circle(pack_x + 5.0, p.y + 14.0 + i as f32 * 4.0, 2.0, led);
        }
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_meter(canvas: &mut impl Canvas, y: f32, value: f32, color: Rgb, label: &str) {
    let width = 140.0 * (value / METER_MAX).clamp(0.0, 1.0);
    canvas.filled_rect(Rect::new(10.0, y, width, 18.0), color);
    canvas.line(10.0, y, 150.0, y, Rgb::WHITE);
    canvas.line(10.0, y + 18.0, 150.0, y + 18.0, Rgb::WHITE);
    canvas.line(10.0, y, 10.0, y + 18.0, Rgb::WHITE);
    canvas.line(150.0, y, 150.0, y + 18.0, Rgb::WHITE);
    canvas.text(label, 155.0, y + 3.0, Rgb::WHITE, Align::Left);
}

fn draw_hud(world: &GameWorld, canvas: &mut impl Canvas) {
    let p = &world.player;
    if world.variant == Variant::Mini {
        canvas.text(&format!("SCORE: {}", world.score), 10.0, 10.0, C_CYAN, Align::Left);
        canvas.text(&format!("LIVES: {}", p.lives), 10.0, 40.0, C_RED, Align::Left);
        return;
    }

    let panel = Rect::new(5.0, 5.0, 350.0, 200.0);
    canvas.filled_rect(panel, Rgb::BLACK);
    canvas.line(panel.left(), panel.top(), panel.right(), panel.top(), C_CYAN);
    canvas.line(panel.left(), panel.bottom(), panel.right(), panel.bottom(), C_CYAN);
    canvas.line(panel.left(), panel.top(), panel.left(), panel.bottom(), C_CYAN);
    canvas.line(panel.right(), panel.top(), panel.right(), panel.bottom(), C_CYAN);

    canvas.text("SPACEK COMMAND CENTER", 10.0, 8.0, C_CYAN, Align::Left);
    canvas.text(&format!("SCORE: {}", world.score), 10.0, 28.0, C_CYAN, Align::Left);
    canvas.text(&format!("LIVES: {}", p.lives), 10.0, 48.0, C_RED, Align::Left);
    let level = format!("LEVEL: {}/{}", world.level, level_count(world.variant));
    canvas.text(&level, 10.0, 68.0, Rgb::WHITE, Align::Left);
    canvas.text(&format!("COINS: {}", world.coins_collected), 180.0, 28.0, C_YELLOW, Align::Left);
    canvas.text(&format!("ALIENS: {}", world.enemies_defeated), 180.0, 48.0, C_GREEN, Align::Left);
    let (audio, audio_color) = if world.sounds_enabled {
        ("AUDIO: ON", C_GREEN)
    } else {
        ("AUDIO: OFF", C_RED)
    };
    canvas.text(audio, 180.0, 68.0, audio_color, Align::Left);

    let energy_color = if p.energy > 50.0 {
        C_GREEN
    } else if p.energy > 20.0 {
        C_YELLOW
    } else {
        Rgb(255, 0, 0)
    };
    draw_meter(canvas, 92.0, p.energy, energy_color, "ENERGY");
    let oxygen_color = if p.oxygen > 30.0 { Rgb(100, 255, 255) } else { Rgb(255, 150, 150) };
    draw_meter(canvas, 120.0, p.oxygen, oxygen_color, "OXYGEN");
    let fuel_color = if p.jetpack_fuel > 20.0 { C_YELLOW } else { Rgb(255, 100, 0) };
    draw_meter(canvas, 148.0, p.jetpack_fuel, fuel_color, "JETPACK");

    if p.has_shield() {
        canvas.text("SHIELD ACTIVE", 10.0, 175.0, C_CYAN, Align::Left);
    }

    // Mission progress
    let progress = (p.x / level_end_x(world.variant, world.level)).clamp(0.0, 1.0);
    let bar = Rect::new(WORLD_WIDTH - 210.0, 10.0, 200.0, 25.0);
    canvas.filled_rect(Rect::new(bar.x, bar.y, bar.w * progress, bar.h), C_GREEN);
    canvas.line(bar.left(), bar.top(), bar.right(), bar.top(), Rgb::WHITE);
    canvas.line(bar.left(), bar.bottom(), bar.right(), bar.bottom(), Rgb::WHITE);
    canvas.line(bar.left(), bar.top(), bar.left(), bar.bottom(), Rgb::WHITE);
    canvas.line(bar.right(), bar.top(), bar.right(), bar.bottom(), Rgb::WHITE);
    canvas.text("MISSION", bar.x + 5.0, bar.bottom() + 5.0, Rgb::WHITE, Align::Left);
}

// ── End screens ───────────────────────────────────────────────────────────────

fn is_new_record(world: &GameWorld) -> bool {
    world.score > 0 && world.score == world.high_score
}

fn draw_game_over(world: &GameWorld, canvas: &mut impl Canvas) {
    canvas.fill(C_GAMEOVER_BG);
    let (cx, cy) = (WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);

    canvas.text("GAME OVER", cx, cy - 100.0, C_RED, Align::Center);
    if world.variant == Variant::Full {
        canvas.text("The aliens won this time!", cx, cy - 40.0, Rgb::WHITE, Align::Center);
    }
    canvas.text(&format!("SCORE: {}", world.score), cx, cy, C_CYAN, Align::Center);
    let stats = format!("COINS: {} | ALIENS: {}", world.coins_collected, world.enemies_defeated);
    canvas.text(&stats, cx, cy + 40.0, C_YELLOW, Align::Center);
    if is_new_record(world) {
        canvas.text("NEW RECORD!", cx, cy + 80.0, C_GOLD, Align::Center);
    }
    canvas.text("ENTER - Restart | ESC - Menu", cx, cy + 120.0, C_GRAY, Align::Center);
}

fn draw_victory(world: &GameWorld, canvas: &mut impl Canvas) {
    canvas.fill(C_VICTORY_BG);
    // Fountain sparks live in screen space.
    draw_particles(&world.particles, 0.0, canvas);

    let (cx, cy) = (WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
    canvas.text("VICTORY!", cx, cy - 100.0, C_YELLOW, Align::Center);
    if world.variant == Variant::Full {
        canvas.text("Commander, mission accomplished!", cx, cy - 40.0, Rgb::WHITE, Align::Center);
    }
    canvas.text(&format!("FINAL SCORE: {}", world.score), cx, cy, C_CYAN, Align::Center);
    let stats = format!("COINS: {} | ALIENS: {}", world.coins_collected, world.enemies_defeated);
    canvas.text(&stats, cx, cy + 50.0, C_YELLOW, Align::Center);
    if is_new_record(world) {
        canvas.text("NEW RECORD!", cx, cy + 90.0, C_GOLD, Align::Center);
    }
    canvas.text("ENTER - Play again | ESC - Menu", cx, cy + 130.0, C_GRAY, Align::Center);
}
