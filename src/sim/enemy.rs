//! Enemies and their movement policies
//!
//! One `Enemy` struct carries a closed set of movement policies. Each policy
//! keeps its own mutable parameters (speed, phase, heading); the numeric laws
//! are exact and intentionally unclamped unless noted.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::{WorldBounds, square_overlaps_point};

/// Random walker: initial jitter radius and its growth per frame
pub const WALKER_START_SPEED: f32 = 2.5;
pub const WALKER_ACCEL: f32 = 0.01;
/// Pursuer: initial speed and its growth per frame
pub const PURSUER_START_SPEED: f32 = 1.0;
pub const PURSUER_ACCEL: f32 = 0.01;
/// Patroller: distance per frame and side length of its loop
pub const PATROL_STEP: f32 = 3.0;
pub const PATROL_SIDE: f32 = 100.0;
/// Patroller spawns this far up-left of home
pub const PATROL_ANCHOR_OFFSET: f32 = 50.0;
/// Summoner never accelerates
pub const SUMMONER_STEP: f32 = 1.0;
/// Minions: initial speed and its growth per frame
pub const MINION_START_SPEED: f32 = 2.0;
pub const MINION_ACCEL: f32 = 0.4;

/// Stable enemy identity, allocated by `GameState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Which archetype an enemy is (drives size, look and logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Walker,
    Pursuer,
    Patroller,
    Summoner,
    DiagonalMinion,
    StraightMinion,
}

impl EnemyKind {
    /// Side length of the enemy's square
    pub fn size(self) -> f32 {
        match self {
            EnemyKind::Walker => 20.0,
            EnemyKind::Pursuer => 10.0,
            EnemyKind::Patroller => 25.0,
            EnemyKind::Summoner => 35.0,
            EnemyKind::DiagonalMinion | EnemyKind::StraightMinion => 10.0,
        }
    }
}

/// Screen-space cardinal direction (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// How many axes a bouncing minion moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceAxes {
    /// Diagonal: both axes, fractional steps
    Both,
    /// Straight: one axis, whole-unit steps
    Single,
}

impl BounceAxes {
    /// Pick the random heading a freshly spawned minion commits to
    pub fn pick_heading<R: Rng + ?Sized>(self, rng: &mut R) -> Vec2 {
        match self {
            BounceAxes::Both => {
                let vertical = if rng.random_bool(0.5) {
                    Direction::Up
                } else {
                    Direction::Down
                };
                let horizontal = if rng.random_bool(0.5) {
                    Direction::Right
                } else {
                    Direction::Left
                };
                vertical.vector() + horizontal.vector()
            }
            BounceAxes::Single => Direction::ALL[rng.random_range(0..4)].vector(),
        }
    }
}

/// Movement law plus the state it needs between frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MovementPolicy {
    /// Jitter to a random integer point within `speed` per axis
    RandomWalk { speed: f32 },
    /// Greedy per-axis chase by `floor(speed)`
    DirectPursuit { speed: f32 },
    /// Trace a square one axis at a time
    PatrolSquare {
        along_x: bool,
        toward_min_x: bool,
        toward_min_y: bool,
        /// Signed displacement accumulated on each axis
        travel: Vec2,
    },
    /// Unit-step chase that tests `>=` first
    MirrorPursuit { step: f32 },
    /// Accelerating straight-line mover that reverses on leaving the world
    BounceLinear {
        axes: BounceAxes,
        /// Per-axis sign of motion (0 on an axis it never moves along)
        heading: Vec2,
        speed: f32,
        /// Cleared by a bounce, set again once back inside the world
        armed: bool,
    },
}

/// A hostile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: f32,
    pub policy: MovementPolicy,
    /// Summoner that spawned this minion; attribution only
    pub summoner: Option<EnemyId>,
}

impl Enemy {
    fn with_policy(id: EnemyId, kind: EnemyKind, pos: Vec2, policy: MovementPolicy) -> Self {
        Self {
            id,
            kind,
            pos,
            size: kind.size(),
            policy,
            summoner: None,
        }
    }

    pub fn random_walker(id: EnemyId, pos: Vec2) -> Self {
        Self::with_policy(
            id,
            EnemyKind::Walker,
            pos,
            MovementPolicy::RandomWalk {
                speed: WALKER_START_SPEED,
            },
        )
    }

    pub fn pursuer(id: EnemyId, pos: Vec2) -> Self {
        Self::with_policy(
            id,
            EnemyKind::Pursuer,
            pos,
            MovementPolicy::DirectPursuit {
                speed: PURSUER_START_SPEED,
            },
        )
    }

    /// Patroller anchored up-left of `home`
    pub fn patroller(id: EnemyId, home: Vec2) -> Self {
        Self::with_policy(
            id,
            EnemyKind::Patroller,
            home - Vec2::splat(PATROL_ANCHOR_OFFSET),
            MovementPolicy::PatrolSquare {
                along_x: true,
                toward_min_x: true,
                toward_min_y: true,
                travel: Vec2::ZERO,
            },
        )
    }

    pub fn summoner(id: EnemyId, pos: Vec2) -> Self {
        Self::with_policy(
            id,
            EnemyKind::Summoner,
            pos,
            MovementPolicy::MirrorPursuit {
                step: SUMMONER_STEP,
            },
        )
    }

    /// A bouncing minion committed to `heading`
    pub fn minion(id: EnemyId, pos: Vec2, axes: BounceAxes, heading: Vec2, summoner: EnemyId) -> Self {
        let kind = match axes {
            BounceAxes::Both => EnemyKind::DiagonalMinion,
            BounceAxes::Single => EnemyKind::StraightMinion,
        };
        let mut enemy = Self::with_policy(
            id,
            kind,
            pos,
            MovementPolicy::BounceLinear {
                axes,
                heading,
                speed: MINION_START_SPEED,
                armed: true,
            },
        );
        enemy.summoner = Some(summoner);
        enemy
    }

    /// Strict box test with the player as a point
    pub fn hits_player(&self, player: Vec2) -> bool {
        square_overlaps_point(self.pos, self.size, player)
    }

    /// Advance one frame, then report whether the player got caught
    pub fn update<R: Rng + ?Sized>(&mut self, player: Vec2, bounds: &WorldBounds, rng: &mut R) -> bool {
        match &mut self.policy {
            MovementPolicy::RandomWalk { speed } => {
                *speed += WALKER_ACCEL;
                self.pos.x = walk_axis(self.pos.x, *speed, bounds.width, rng);
                self.pos.y = walk_axis(self.pos.y, *speed, bounds.height, rng);
            }
            MovementPolicy::DirectPursuit { speed } => {
                *speed += PURSUER_ACCEL;
                let step = speed.floor();
                self.pos.x = chase_axis(self.pos.x, player.x, step);
                self.pos.y = chase_axis(self.pos.y, player.y, step);
            }
            MovementPolicy::PatrolSquare {
                along_x,
                toward_min_x,
                toward_min_y,
                travel,
            } => {
                if *along_x {
                    if patrol_leg(&mut self.pos.x, &mut travel.x, toward_min_x) {
                        *along_x = false;
                    }
                } else if patrol_leg(&mut self.pos.y, &mut travel.y, toward_min_y) {
                    *along_x = true;
                }
            }
            MovementPolicy::MirrorPursuit { step } => {
                self.pos.x = mirror_axis(self.pos.x, player.x, *step);
                self.pos.y = mirror_axis(self.pos.y, player.y, *step);
            }
            MovementPolicy::BounceLinear {
                axes,
                heading,
                speed,
                armed,
            } => {
                *speed += MINION_ACCEL;
                let step = match axes {
                    BounceAxes::Both => *speed,
                    BounceAxes::Single => speed.floor(),
                };
                let velocity = *heading * step;
                self.pos += velocity;

                if bounds.contains(self.pos) {
                    *armed = true;
                } else if *armed && bounds.escaping(self.pos, velocity) {
                    // Next frame's step is exactly -step, retracing this one
                    *speed = -step - MINION_ACCEL;
                    *armed = false;
                    log::trace!("{:?} bounced at {:?}", self.id, self.pos);
                }
            }
        }

        self.hits_player(player)
    }
}

/// Random-walk draw on one axis; the range turns one-sided past an edge
fn walk_axis<R: Rng + ?Sized>(p: f32, speed: f32, extent: f32, rng: &mut R) -> f32 {
    let (lo, hi) = if p < 0.0 {
        (p.floor(), (p + speed).ceil())
    } else if p > extent {
        ((p - speed).floor(), p.ceil())
    } else {
        ((p - speed).floor(), (p + speed).ceil())
    };
    rng.random_range(lo as i32..=hi as i32) as f32
}

fn chase_axis(p: f32, target: f32, step: f32) -> f32 {
    if p > target {
        p - step
    } else if p == target {
        p
    } else {
        p + step
    }
}

/// `>=` is tested first, so a coordinate equal to the target still steps down
fn mirror_axis(p: f32, target: f32, step: f32) -> f32 {
    if p >= target { p - step } else { p + step }
}

/// Move one patrol step; returns true when the leg is finished
fn patrol_leg(coord: &mut f32, travel: &mut f32, toward_min: &mut bool) -> bool {
    let step = if *toward_min { -PATROL_STEP } else { PATROL_STEP };
    *coord += step;
    *travel += step;

    let done = if *toward_min {
        *travel <= 0.0
    } else {
        *travel >= PATROL_SIDE
    };
    if done {
        *toward_min = !*toward_min;
    }
    done
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> WorldBounds {
        WorldBounds::new(800.0, 500.0)
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    /// Player parked far away so nothing collides
    const FAR: Vec2 = Vec2::new(-10_000.0, -10_000.0);

    fn speed_of(enemy: &Enemy) -> f32 {
        match enemy.policy {
            MovementPolicy::RandomWalk { speed }
            | MovementPolicy::DirectPursuit { speed }
            | MovementPolicy::BounceLinear { speed, .. } => speed,
            MovementPolicy::MirrorPursuit { step } => step,
            MovementPolicy::PatrolSquare { .. } => PATROL_STEP,
        }
    }

    #[test]
    fn test_hits_player_is_strict() {
        let enemy = Enemy::random_walker(EnemyId(1), Vec2::new(100.0, 100.0));
        assert_eq!(enemy.size, 20.0);
        assert!(enemy.hits_player(Vec2::new(105.0, 95.0)));
        assert!(!enemy.hits_player(Vec2::new(110.0, 100.0)));
        assert!(!enemy.hits_player(Vec2::new(100.0, 90.0)));
        assert!(!enemy.hits_player(Vec2::new(90.0, 90.0)));
    }

    #[test]
    fn test_random_walk_stays_in_draw_range() {
        let mut rng = rng();
        let mut enemy = Enemy::random_walker(EnemyId(1), Vec2::new(400.0, 250.0));
        for _ in 0..200 {
            let before = enemy.pos;
            enemy.update(FAR, &world(), &mut rng);
            let speed = speed_of(&enemy);
            for (b, a) in [(before.x, enemy.pos.x), (before.y, enemy.pos.y)] {
                assert!(a >= (b - speed).floor() && a <= (b + speed).ceil());
                assert_eq!(a, a.round());
            }
        }
    }

    #[test]
    fn test_random_walk_accelerates() {
        let mut rng = rng();
        let mut enemy = Enemy::random_walker(EnemyId(1), Vec2::new(400.0, 250.0));
        for _ in 0..100 {
            enemy.update(FAR, &world(), &mut rng);
        }
        assert!((speed_of(&enemy) - 3.5).abs() < 1e-3);
    }

    #[test]
    fn test_random_walk_draw_is_one_sided_past_edges() {
        let mut rng = rng();
        for _ in 0..200 {
            let mut low = Enemy::random_walker(EnemyId(1), Vec2::new(-3.0, -3.0));
            low.update(FAR, &world(), &mut rng);
            assert!(low.pos.x >= -3.0 && low.pos.y >= -3.0);

            let mut high = Enemy::random_walker(EnemyId(2), Vec2::new(803.0, 503.0));
            high.update(FAR, &world(), &mut rng);
            assert!(high.pos.x <= 803.0 && high.pos.y <= 503.0);
        }
    }

    #[test]
    fn test_pursuit_steps_per_axis() {
        let mut rng = rng();
        let mut enemy = Enemy::pursuer(EnemyId(1), Vec2::new(300.0, 100.0));
        enemy.update(Vec2::new(200.0, 100.0), &world(), &mut rng);
        // floor(1.01) == 1, y already aligned
        assert_eq!(enemy.pos, Vec2::new(299.0, 100.0));

        enemy.update(Vec2::new(400.0, 50.0), &world(), &mut rng);
        assert_eq!(enemy.pos, Vec2::new(300.0, 99.0));
    }

    #[test]
    fn test_pursuit_step_grows_with_speed() {
        let mut rng = rng();
        let mut enemy = Enemy::pursuer(EnemyId(1), Vec2::new(0.0, 0.0));
        enemy.policy = MovementPolicy::DirectPursuit { speed: 2.995 };
        enemy.update(Vec2::new(500.0, 500.0), &world(), &mut rng);
        assert_eq!(enemy.pos, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_pursuit_reports_hit_after_moving() {
        let mut rng = rng();
        let mut enemy = Enemy::pursuer(EnemyId(1), Vec2::new(105.5, 100.0));
        let player = Vec2::new(100.0, 100.0);
        assert!(!enemy.hits_player(player));
        assert!(enemy.update(player, &world(), &mut rng));
    }

    #[test]
    fn test_mirror_pursuit_unit_steps_without_acceleration() {
        let mut rng = rng();
        let mut enemy = Enemy::summoner(EnemyId(1), Vec2::new(300.0, 300.0));
        for _ in 0..50 {
            enemy.update(Vec2::new(100.0, 400.0), &world(), &mut rng);
        }
        assert_eq!(enemy.pos, Vec2::new(250.0, 350.0));
        assert_eq!(speed_of(&enemy), 1.0);
    }

    #[test]
    fn test_mirror_pursuit_equal_coordinate_steps_down() {
        let mut rng = rng();
        let mut enemy = Enemy::summoner(EnemyId(1), Vec2::new(300.0, 100.0));
        enemy.update(Vec2::new(300.0, 400.0), &world(), &mut rng);
        assert_eq!(enemy.pos, Vec2::new(299.0, 101.0));
        enemy.update(Vec2::new(300.0, 400.0), &world(), &mut rng);
        assert_eq!(enemy.pos.x, 300.0);
    }

    #[test]
    fn test_patrol_starts_up_left_of_home() {
        let enemy = Enemy::patroller(EnemyId(1), Vec2::new(700.0, 250.0));
        assert_eq!(enemy.pos, Vec2::new(650.0, 200.0));
        assert_eq!(enemy.kind, EnemyKind::Patroller);
    }

    #[test]
    fn test_patrol_leg_switches_axis_at_limits() {
        let mut rng = rng();
        let mut enemy = Enemy::patroller(EnemyId(1), Vec2::new(700.0, 250.0));
        // First step along -x already drives travel to <= 0
        enemy.update(FAR, &world(), &mut rng);
        assert_eq!(enemy.pos, Vec2::new(647.0, 200.0));
        // Then one step along -y does the same
        enemy.update(FAR, &world(), &mut rng);
        assert_eq!(enemy.pos, Vec2::new(647.0, 197.0));
        // Now a long leg toward +x until travel reaches 100
        for _ in 0..35 {
            enemy.update(FAR, &world(), &mut rng);
        }
        assert_eq!(enemy.pos, Vec2::new(752.0, 197.0));
        match enemy.policy {
            MovementPolicy::PatrolSquare { along_x, travel, .. } => {
                assert!(!along_x);
                assert_eq!(travel.x, 102.0);
            }
            _ => panic!("not a patroller"),
        }
    }

    #[test]
    fn test_patrol_closes_its_loop() {
        let mut rng = rng();
        let mut enemy = Enemy::patroller(EnemyId(1), Vec2::new(700.0, 250.0));
        // Two short legs plus the first two long legs settle the loop
        for _ in 0..(2 + 35 + 35) {
            enemy.update(FAR, &world(), &mut rng);
        }
        let start = enemy.pos;
        let start_policy = enemy.policy.clone();

        let mut max_offset = Vec2::ZERO;
        // Four sides of 34 steps each
        for _ in 0..(4 * 34) {
            enemy.update(FAR, &world(), &mut rng);
            max_offset = max_offset.max((enemy.pos - start).abs());
        }
        assert_eq!(enemy.pos, start);
        assert_eq!(enemy.policy, start_policy);
        assert_eq!(max_offset, Vec2::splat(102.0));
    }

    #[test]
    fn test_diagonal_minion_accelerates_on_both_axes() {
        let mut rng = rng();
        let mut enemy = Enemy::minion(
            EnemyId(2),
            Vec2::new(400.0, 250.0),
            BounceAxes::Both,
            Vec2::new(1.0, -1.0),
            EnemyId(1),
        );
        enemy.update(FAR, &world(), &mut rng);
        assert!((enemy.pos.x - 402.4).abs() < 1e-4);
        assert!((enemy.pos.y - 247.6).abs() < 1e-4);
        enemy.update(FAR, &world(), &mut rng);
        assert!((enemy.pos.x - 405.2).abs() < 1e-4);
        assert_eq!(enemy.summoner, Some(EnemyId(1)));
        assert_eq!(enemy.kind, EnemyKind::DiagonalMinion);
    }

    #[test]
    fn test_straight_minion_moves_whole_units_on_one_axis() {
        let mut rng = rng();
        let mut enemy = Enemy::minion(
            EnemyId(2),
            Vec2::new(400.0, 250.0),
            BounceAxes::Single,
            Direction::Down.vector(),
            EnemyId(1),
        );
        enemy.update(FAR, &world(), &mut rng);
        enemy.update(FAR, &world(), &mut rng);
        // floor(2.4) + floor(2.8)
        assert_eq!(enemy.pos, Vec2::new(400.0, 254.0));
        assert_eq!(enemy.kind, EnemyKind::StraightMinion);
    }

    fn with_minion_speed(mut enemy: Enemy, new_speed: f32) -> Enemy {
        if let MovementPolicy::BounceLinear { speed, .. } = &mut enemy.policy {
            *speed = new_speed;
        }
        enemy
    }

    #[test]
    fn test_bounce_flips_once_per_crossing() {
        let mut rng = rng();
        let enemy = Enemy::minion(
            EnemyId(2),
            Vec2::new(795.0, 250.0),
            BounceAxes::Single,
            Direction::Right.vector(),
            EnemyId(1),
        );
        // 9.6 + 0.4 = 10: one step carries it from 795 to 805
        let mut enemy = with_minion_speed(enemy, 9.6);

        enemy.update(FAR, &world(), &mut rng);
        assert_eq!(enemy.pos.x, 805.0);
        assert!((speed_of(&enemy) + 10.4).abs() < 1e-4);

        // Heading back in along the same step: no second flip
        enemy.update(FAR, &world(), &mut rng);
        assert_eq!(enemy.pos.x, 795.0);
        assert!((speed_of(&enemy) + 10.0).abs() < 1e-4);
    }

    /// Updates in which the speed did not just grow by the acceleration
    fn count_flips(enemy: &mut Enemy, frames: usize) -> usize {
        let mut rng = rng();
        let mut flips = 0;
        for _ in 0..frames {
            let before = speed_of(enemy);
            enemy.update(FAR, &world(), &mut rng);
            if (speed_of(enemy) - (before + MINION_ACCEL)).abs() > 1e-3 {
                flips += 1;
            }
        }
        flips
    }

    #[test]
    fn test_corner_minion_flips_once() {
        // Just past the bottom-right corner, its line x + y = 1301 never
        // enters the world
        let enemy = Enemy::minion(
            EnemyId(2),
            Vec2::new(798.0, 503.0),
            BounceAxes::Both,
            Vec2::new(-1.0, 1.0),
            EnemyId(1),
        );
        let mut enemy = with_minion_speed(enemy, -5.0);
        assert_eq!(count_flips(&mut enemy, 200), 1);
        assert!(speed_of(&enemy) > 0.0);
    }

    #[test]
    fn test_bounce_retraces_the_exit_step() {
        let mut rng = rng();
        let enemy = Enemy::minion(
            EnemyId(2),
            Vec2::new(795.0, 250.0),
            BounceAxes::Both,
            Vec2::new(1.0, 1.0),
            EnemyId(1),
        );
        let mut enemy = with_minion_speed(enemy, 9.6);

        enemy.update(FAR, &world(), &mut rng);
        assert_eq!(enemy.pos, Vec2::new(805.0, 260.0));
        enemy.update(FAR, &world(), &mut rng);
        assert_eq!(enemy.pos, Vec2::new(795.0, 250.0));
        assert!(world().contains(enemy.pos));
    }

    #[test]
    fn test_outside_but_returning_does_not_flip() {
        let mut rng = rng();
        let enemy = Enemy::minion(
            EnemyId(2),
            Vec2::new(805.0, 250.0),
            BounceAxes::Both,
            Direction::Right.vector(),
            EnemyId(1),
        );
        let mut enemy = with_minion_speed(enemy, -5.0);

        enemy.update(FAR, &world(), &mut rng);
        assert!(enemy.pos.x > 800.0);
        assert!((speed_of(&enemy) + 4.6).abs() < 1e-4);

        enemy.update(FAR, &world(), &mut rng);
        assert!(enemy.pos.x < 800.0);
        assert!((speed_of(&enemy) + 4.2).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_keeps_minion_near_the_world() {
        let mut rng = rng();
        let mut enemy = Enemy::minion(
            EnemyId(2),
            Vec2::new(10.0, 250.0),
            BounceAxes::Both,
            Vec2::new(-1.0, 0.0),
            EnemyId(1),
        );
        let mut flips = 0;
        let mut last_sign = speed_of(&enemy).signum();
        for _ in 0..400 {
            enemy.update(FAR, &world(), &mut rng);
            let sign = speed_of(&enemy).signum();
            if sign != last_sign {
                flips += 1;
                last_sign = sign;
            }
        }
        assert!(flips >= 2);
        assert!(enemy.pos.x > -1000.0 && enemy.pos.x < 2000.0);
    }

    #[test]
    fn test_pick_heading_shapes() {
        let mut rng = rng();
        for _ in 0..50 {
            let d = BounceAxes::Both.pick_heading(&mut rng);
            assert_eq!(d.abs(), Vec2::ONE);
            let s = BounceAxes::Single.pick_heading(&mut rng);
            assert_eq!(s.abs().element_sum(), 1.0);
        }
    }
}
