//! One simulation frame
//!
//! Updates run in registration order: waypoint and home have nothing to do,
//! then the player, then every enemy in the order it was added. The first
//! terminal event ends the frame; nothing after it moves.

use super::state::{GamePhase, GameState, Outcome};

/// Advance the game state by one frame
///
/// Returns the outcome if this frame ended the game.
pub fn tick(state: &mut GameState) -> Option<Outcome> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.time_ticks += 1;

    // Player: home check happens before moving
    let pos = state.player.pos;
    if state.home.contains(pos.x, pos.y) {
        return finish(state, Outcome::Won);
    }
    state.player.advance(&mut state.waypoint);

    // Enemies: each checks for a hit after its own move
    let player = state.player.pos;
    let mut catcher = None;
    for enemy in state.enemies.iter_mut() {
        if enemy.update(player, &state.bounds, &mut state.rng) {
            catcher = Some((enemy.kind, enemy.id));
            break;
        }
    }

    let (kind, id) = catcher?;
    log::debug!("{:?} {:?} caught the player at {:?}", kind, id, player);
    finish(state, Outcome::Lost)
}

fn finish(state: &mut GameState, outcome: Outcome) -> Option<Outcome> {
    state.finish(outcome).then_some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bounds::WorldBounds;
    use crate::sim::enemy::{Enemy, EnemyId};
    use glam::Vec2;

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new(WorldBounds::new(800.0, 500.0), seed);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_no_tick_before_running_or_after_finish() {
        let mut state = GameState::new(WorldBounds::default(), 1);
        state.waypoint.activate(780.0, 250.0);
        assert_eq!(tick(&mut state), None);
        assert_eq!(state.player.pos, Vec2::new(50.0, 250.0));
        assert_eq!(state.time_ticks, 0);

        state.phase = GamePhase::Lost;
        assert_eq!(tick(&mut state), None);
        assert_eq!(state.player.pos, Vec2::new(50.0, 250.0));
    }

    #[test]
    fn test_walk_home_wins() {
        let mut state = running(1);
        state.waypoint.activate(780.0, 250.0);

        let mut outcome = None;
        let mut ticks = 0;
        while outcome.is_none() && ticks < 146 {
            outcome = tick(&mut state);
            ticks += 1;
        }

        assert_eq!(outcome, Some(Outcome::Won));
        assert_eq!(state.phase, GamePhase::Won);
        assert!((690.0..=710.0).contains(&state.player.pos.x));
        assert!(ticks < 146);
        // The winning frame does not move the player
        assert_eq!(state.player.pos.x, 690.0);
    }

    #[test]
    fn test_enemy_contact_loses_and_stops_the_frame() {
        let mut state = running(1);
        let first = state.next_enemy_id();
        // Summoner right on top of the player
        state
            .enemies
            .push(Enemy::summoner(first, Vec2::new(52.0, 252.0)));
        let second = state.next_enemy_id();
        state
            .enemies
            .push(Enemy::pursuer(second, Vec2::new(400.0, 400.0)));

        assert_eq!(tick(&mut state), Some(Outcome::Lost));
        assert_eq!(state.phase, GamePhase::Lost);
        // The pursuer after the catching enemy never moved
        assert_eq!(state.enemies[1].pos, Vec2::new(400.0, 400.0));

        assert_eq!(tick(&mut state), None);
        assert_eq!(state.enemies[0].pos, Vec2::new(51.0, 251.0));
    }

    #[test]
    fn test_home_check_precedes_enemies() {
        let mut state = running(1);
        state.player.pos = state.home.pos();
        let id = state.next_enemy_id();
        state.enemies.push(Enemy::summoner(id, state.home.pos()));
        assert_eq!(tick(&mut state), Some(Outcome::Won));
    }

    #[test]
    fn test_determinism() {
        // Walker jitter comes only from the seeded rng
        let mut a = running(99999);
        let mut b = running(99999);
        for state in [&mut a, &mut b] {
            for _ in 0..3 {
                let id = state.next_enemy_id();
                state
                    .enemies
                    .push(Enemy::random_walker(id, Vec2::new(400.0, 100.0)));
            }
        }

        for _ in 0..50 {
            tick(&mut a);
            tick(&mut b);
        }

        let pa: Vec<Vec2> = a.enemies.iter().map(|e| e.pos).collect();
        let pb: Vec<Vec2> = b.enemies.iter().map(|e| e.pos).collect();
        assert_eq!(pa, pb);
        assert_eq!(a.time_ticks, 50);
        assert_eq!(a.enemies[0].id, EnemyId(1));
    }
}
