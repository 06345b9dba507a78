//! Property tests for the simulation core

use glam::Vec2;
use proptest::prelude::*;

use rain_drop_rush::sim::{
    Difficulty, FixedSequence, GameState, Nudge, SeededRandom, TickInput, Vitals,
    ramp_difficulty, start, tick,
};

#[derive(Debug, Clone)]
enum Action {
    Tick { left: bool, right: bool, dt: f32 },
    Tap(bool),
    Swat(f32, f32),
    Ramp,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (any::<bool>(), any::<bool>(), 0.0f32..6.0)
            .prop_map(|(left, right, dt)| Action::Tick { left, right, dt }),
        1 => any::<bool>().prop_map(Action::Tap),
        1 => (0.0f32..480.0, 0.0f32..720.0).prop_map(|(x, y)| Action::Swat(x, y)),
        1 => Just(Action::Ramp),
    ]
}

fn input_for(action: &Action) -> Option<TickInput> {
    match *action {
        Action::Tick { left, right, .. } => Some(TickInput {
            move_left: left,
            move_right: right,
            ..Default::default()
        }),
        Action::Tap(left) => Some(TickInput {
            nudges: vec![if left { Nudge::Left } else { Nudge::Right }],
            ..Default::default()
        }),
        Action::Swat(x, y) => Some(TickInput {
            swats: vec![Vec2::new(x, y)],
            ..Default::default()
        }),
        Action::Ramp => None,
    }
}

fn dt_for(action: &Action) -> f32 {
    match *action {
        Action::Tick { dt, .. } => dt,
        _ => 1.0,
    }
}

proptest! {
    #[test]
    fn idle_sessions_never_change(actions in prop::collection::vec(action(), 0..60)) {
        let mut state = GameState::default();
        let before = serde_json::to_string(&state).unwrap();
        let mut rng = SeededRandom::new(7);

        for (frame, action) in actions.iter().enumerate() {
            match input_for(action) {
                Some(input) => tick(&mut state, &input, &mut rng, frame as f64 * 1000.0, dt_for(action)),
                None => ramp_difficulty(&mut state),
            }
        }

        prop_assert_eq!(serde_json::to_string(&state).unwrap(), before);
        prop_assert!(state.drain_events().is_empty());
    }

    #[test]
    fn running_session_keeps_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let mut state = GameState::default();
        let mut rng = SeededRandom::new(seed);
        start(&mut state, 0.0);

        let mut last_difficulty = state.difficulty.get();
        let mut last_score = state.vitals.score;
        for (frame, action) in actions.iter().enumerate() {
            let now = frame as f64 * 120.0;
            match input_for(action) {
                Some(input) => tick(&mut state, &input, &mut rng, now, dt_for(action)),
                None => ramp_difficulty(&mut state),
            }

            let field = state.field;
            prop_assert!(state.pot.x >= 0.0);
            prop_assert!(state.pot.x <= field.width - state.pot.w);
            prop_assert!((0.0..=100.0).contains(&state.vitals.thirst));
            prop_assert!((0.0..=100.0).contains(&state.vitals.health));
            prop_assert!(state.difficulty.get() >= last_difficulty);
            prop_assert!(state.vitals.score >= last_score);
            prop_assert_eq!(state.vitals.score % 5, 0);
            last_difficulty = state.difficulty.get();
            last_score = state.vitals.score;

            if !state.is_running() {
                prop_assert!(state.last_session.is_some());
                break;
            }
        }
    }

    #[test]
    fn catch_is_monotone(thirst in 0.0f32..=100.0, health in 0.0f32..=100.0, score in 0u64..10_000) {
        let mut vitals = Vitals { score, thirst, health };
        let mut difficulty = Difficulty::default();
        vitals.apply_catch(&mut difficulty);

        prop_assert_eq!(vitals.score, score + 5);
        prop_assert!(vitals.thirst >= thirst);
        prop_assert!(vitals.thirst <= 100.0);
        prop_assert_eq!(vitals.health, health);
        prop_assert!(difficulty.get() > 1.0);
    }

    #[test]
    fn misses_and_nibbles_only_drain(thirst in 0.0f32..=100.0, health in 0.0f32..=100.0) {
        let mut missed = Vitals { score: 0, thirst, health };
        missed.apply_miss();
        prop_assert!(missed.thirst <= thirst && missed.thirst >= 0.0);
        prop_assert!(missed.health <= health && missed.health >= 0.0);

        let mut nibbled = Vitals { score: 0, thirst, health };
        nibbled.apply_nibble();
        prop_assert!(nibbled.thirst <= thirst && nibbled.thirst >= 0.0);
        prop_assert!(nibbled.health <= health && nibbled.health >= 0.0);
    }

    #[test]
    fn scripted_rng_spawns_inside_playfield(values in prop::collection::vec(0.0f32..1.0, 1..16)) {
        let mut state = GameState::default();
        let mut rng = FixedSequence::new(values);
        start(&mut state, 0.0);

        // Both gates are due on the first tick
        tick(&mut state, &TickInput::default(), &mut rng, 6000.0, 1.0);

        for drop in &state.drops {
            // one frame of wind drift at most
            prop_assert!(drop.pos.x >= 8.0 && drop.pos.x <= state.field.width - 8.0);
            prop_assert!((8.0..=12.0).contains(&drop.radius));
        }
        for bug in &state.bugs {
            prop_assert!(bug.vel_x != 0.0);
        }
    }
}
