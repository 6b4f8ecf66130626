//! Entities and their update/draw behaviour
//!
//! Every entity is one variant of [`Entity`]. An update only mutates the entity
//! itself and the shared [`WorldState`]; effects on other entities (spawning a
//! bullet, hitting a survivor, removal) are reported through [`UpdateOutcome`]
//! and carried out by the registry by index.

use glam::Vec2;

use super::draw::{DrawContext, palette};
use super::geometry::{box_corners, quads_touch};
use super::state::WorldState;
use crate::config::GameConfig;
use crate::platform::{Action, InputState};

/// Inputs to a single entity update
pub struct UpdateContext<'a> {
    /// Fixed step in milliseconds
    pub dt: f32,
    /// Simulation time after this step, in milliseconds
    pub game_time: f64,
    pub input: &'a InputState,
    pub world: &'a mut WorldState,
    pub config: &'a GameConfig,
}

/// What an update asks the registry to do
#[derive(Debug, Default)]
pub struct UpdateOutcome {
    /// Tag this entity for removal at the end of the pass
    pub remove_self: bool,
    /// Point to test against every live survivor
    pub probe: Option<Vec2>,
    /// New entity to append (not updated until the next pass)
    pub spawn: Option<Entity>,
    /// This survivor's square touches the player's
    pub caught_player: bool,
}

/// Variant tag, handy for queries and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Bullet,
    Enemy,
    EntityCounter,
}

/// A live game object
#[derive(Debug, Clone)]
pub enum Entity {
    Player(Player),
    Bullet(Bullet),
    Enemy(Enemy),
    EntityCounter(EntityCounter),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Bullet(_) => EntityKind::Bullet,
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::EntityCounter(_) => EntityKind::EntityCounter,
        }
    }

    /// Advance one fixed step
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) -> UpdateOutcome {
        match self {
            Entity::Player(player) => player.update(ctx),
            Entity::Bullet(bullet) => bullet.update(ctx),
            Entity::Enemy(enemy) => enemy.update(ctx),
            Entity::EntityCounter(_) => UpdateOutcome::default(),
        }
    }

    pub fn draw(&self, ctx: &mut DrawContext<'_>) {
        match self {
            Entity::Player(player) => player.draw(ctx),
            Entity::Bullet(bullet) => bullet.draw(ctx),
            Entity::Enemy(enemy) => enemy.draw(ctx),
            Entity::EntityCounter(counter) => counter.draw(ctx),
        }
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match self {
            Entity::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match self {
            Entity::Player(player) => Some(player.pos),
            Entity::Bullet(bullet) => Some(bullet.pos),
            Entity::Enemy(enemy) => Some(enemy.pos),
            Entity::EntityCounter(_) => None,
        }
    }
}

/// Fire directions in priority order; the first held one wins
const FIRE_PRIORITY: [(Action, Vec2); 4] = [
    (Action::FireUp, Vec2::NEG_Y),
    (Action::FireRight, Vec2::X),
    (Action::FireDown, Vec2::Y),
    (Action::FireLeft, Vec2::NEG_X),
];

/// -1, 0 or 1 along one axis; `negative` wins when both are held
fn axis(input: &InputState, negative: Action, positive: Action) -> f32 {
    if input.is_action_held(negative) {
        -1.0
    } else if input.is_action_held(positive) {
        1.0
    } else {
        0.0
    }
}

/// The player's square
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per millisecond on each held axis
    pub speed: f32,
    /// Minimum simulated time between shots
    pub fire_rate_ms: f64,
    /// Simulation time the fire window was last consumed
    pub last_fire_time: f64,
}

impl Player {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::splat(config.player_size),
            speed: config.player_speed,
            fire_rate_ms: config.fire_rate_ms,
            last_fire_time: 0.0,
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> UpdateOutcome {
        let input = ctx.input;

        // Diagonals are deliberately not normalized
        let orientation = Vec2::new(
            axis(input, Action::MoveLeft, Action::MoveRight),
            axis(input, Action::MoveUp, Action::MoveDown),
        );
        self.pos += orientation * self.speed * ctx.dt;
        ctx.world.player_position = self.pos;

        let mut outcome = UpdateOutcome::default();
        if ctx.game_time - self.last_fire_time > self.fire_rate_ms {
            outcome.spawn = FIRE_PRIORITY
                .iter()
                .find(|(action, _)| input.is_action_held(*action))
                .map(|&(_, dir)| {
                    Entity::Bullet(Bullet::new(
                        self.pos,
                        dir,
                        ctx.config.bullet_speed,
                        ctx.config.bullet_radius,
                    ))
                });
            // The window is spent even when nothing was fired
            self.last_fire_time = ctx.game_time;
        }
        outcome
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.canvas.stroke_rect(self.pos, self.size, palette::OUTLINE);
    }
}

/// A projectile travelling along one axis
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    /// Unit direction along a single axis
    pub velocity: Vec2,
    /// Units per millisecond
    pub speed: f32,
    pub radius: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, velocity: Vec2, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            velocity,
            speed,
            radius,
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> UpdateOutcome {
        // Bounds are judged on the position before this step's move
        let (w, h) = (ctx.config.arena_width, ctx.config.arena_height);
        let out_of_bounds =
            self.pos.x > w || self.pos.x < 0.0 || self.pos.y < 0.0 || self.pos.y > h;

        self.pos += self.velocity * self.speed * ctx.dt;

        UpdateOutcome {
            remove_self: out_of_bounds,
            probe: Some(self.pos),
            ..Default::default()
        }
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.canvas
            .stroke_circle(self.pos, self.radius, palette::OUTLINE);
    }
}

/// A survivor chasing the player
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Distance moved per update on each stepping axis
    pub step: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::splat(config.enemy_size),
            step: config.enemy_step,
        }
    }

    /// Bounding square in winding order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        box_corners(self.pos, self.size)
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> UpdateOutcome {
        let target = ctx.world.player_position;

        // Sitting exactly on the player: nothing left to chase
        if self.pos != target {
            self.pursue(target);
        }

        let player = box_corners(target, Vec2::splat(ctx.config.player_size));
        UpdateOutcome {
            caught_player: quads_touch(&self.corners(), &player),
            ..Default::default()
        }
    }

    /// Line-stepping chase
    ///
    /// Both conditions read an error term built from the target alone, and
    /// each may fire independently.
    fn pursue(&mut self, target: Vec2) {
        let sx = if self.pos.x < target.x { 1.0 } else { -1.0 };
        let sy = if self.pos.y < target.y { 1.0 } else { -1.0 };
        let err2 = 2.0 * (target.x - target.y);

        if err2 > -target.y {
            self.pos.x += sx * self.step;
        }
        if err2 < target.x {
            self.pos.y += sy * self.step;
        }
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.canvas.fill_rect(self.pos, self.size, palette::SURVIVOR);
        ctx.canvas.stroke_rect(self.pos, self.size, palette::OUTLINE);
    }
}

/// Debug readout of how many other entities are alive
#[derive(Debug, Clone, Default)]
pub struct EntityCounter;

impl EntityCounter {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let others = ctx.live_entities.saturating_sub(1);
        ctx.text.show(&others.to_string());
    }
}
