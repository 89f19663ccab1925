use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::InputQueue;

/// Drain queued inputs into paddle intents.
///
/// Intents are zeroed first, so a paddle with no input this frame stops.
/// Only the session's chosen paddle ever gets input pushed; the other one
/// keeps a zero intent for the whole match.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = 0;
    }

    for &(player_id, dir) in &queue.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.player_id == player_id {
                intent.dir = dir.clamp(-1, 1);
            }
        }
    }

    queue.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_input_applies_to_matching_paddle_only() {
        let mut world = World::new();
        let p1 = create_paddle(&mut world, 0, 200.0);
        let p2 = create_paddle(&mut world, 1, 600.0);

        let mut queue = InputQueue::new();
        queue.push_input(0, 1);
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(p1).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(p2).unwrap().dir, 0);
        assert!(queue.inputs.is_empty(), "queue drained");
    }

    #[test]
    fn test_intent_clears_without_fresh_input() {
        let mut world = World::new();
        let p1 = create_paddle(&mut world, 0, 200.0);

        let mut queue = InputQueue::new();
        queue.push_input(0, -1);
        ingest_inputs(&mut world, &mut queue);
        assert_eq!(world.get::<&PaddleIntent>(p1).unwrap().dir, -1);

        // Next frame, key released
        ingest_inputs(&mut world, &mut queue);
        assert_eq!(world.get::<&PaddleIntent>(p1).unwrap().dir, 0);
    }

    #[test]
    fn test_input_direction_is_clamped() {
        let mut world = World::new();
        let p1 = create_paddle(&mut world, 0, 200.0);

        let mut queue = InputQueue::new();
        queue.push_input(0, 5);
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(p1).unwrap().dir, 1);
    }
}
