//! Integration test: clicking a plant from seed to full bloom

use rand::rngs::mock::StepRng;
use sprout::achievements::AchievementId;
use sprout::persistence::MemoryStore;
use sprout::{GameEvent, ProgressionEngine, RuleTables};

/// Never rolls a critical hit.
fn no_crit() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn fresh_engine() -> ProgressionEngine<MemoryStore> {
    ProgressionEngine::load(MemoryStore::new(), RuleTables::standard())
}

#[test]
fn test_first_stage_by_hand() {
    let mut engine = fresh_engine();
    let mut rng = no_crit();

    // Slow clicks: no rapid bonus, one point each
    for i in 1..=24 {
        let result = engine.apply_click(false, i * 1_000, &mut rng);
        assert_eq!(result.value_gained, 1.0);
        assert!(!result.stage_advanced);
    }
    assert_eq!(engine.state().clicks_in_stage, 24.0);
    assert_eq!(engine.state().click_streak, 24);

    let events = engine.drain_events();
    let milestones: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MilestoneReached { value } => Some(*value),
            _ => None,
        })
        .collect();
    assert_eq!(milestones, vec![10.0]);

    let result = engine.apply_click(false, 25_000, &mut rng);
    assert!(result.stage_advanced);
    assert_eq!(result.stage, 1);
    assert_eq!(engine.state().stage, 1);
    assert_eq!(engine.state().clicks_in_stage, 0.0);
    assert_eq!(engine.state().total_clicks, 25.0);
    assert!(engine
        .drain_events()
        .contains(&GameEvent::StageCompleted { stage: 1 }));
}

#[test]
fn test_rapid_clicks_double_value() {
    let mut engine = fresh_engine();
    let mut rng = no_crit();

    engine.apply_click(false, 10_000, &mut rng);
    let result = engine.apply_click(false, 10_050, &mut rng);
    assert_eq!(result.value_gained, 2.0);

    // Outside the window again
    let result = engine.apply_click(false, 10_150, &mut rng);
    assert_eq!(result.value_gained, 1.0);
}

#[test]
fn test_auto_clicks_leave_streak_alone() {
    let mut engine = fresh_engine();
    let mut rng = no_crit();

    engine.apply_click(false, 1_000, &mut rng);
    let result = engine.apply_click(true, 5_000, &mut rng);
    assert_eq!(result.streak, 1);
    assert_eq!(engine.state().last_click_time, 1_000);
    assert_eq!(engine.state().total_clicks, 2.0);
}

#[test]
fn test_critical_clicks_with_upgrade() {
    let mut engine = fresh_engine();
    engine.state_mut().critical_click_level = 1;

    // Always rolls 0.0, which is under any positive chance
    let mut always = StepRng::new(0, 0);
    let result = engine.apply_click(false, 1_000, &mut always);
    assert!(result.critical);
    assert_eq!(result.value_gained, 10.0);
}

#[test]
fn test_streak_achievement_unlocks_at_fifty() {
    let mut engine = fresh_engine();
    let mut rng = no_crit();

    for i in 1..=49 {
        engine.apply_click(false, i * 1_000, &mut rng);
    }
    assert!(!engine.state().achievements.is_unlocked(AchievementId::Streak50));

    let result = engine.apply_click(false, 50_000, &mut rng);
    assert!(result.achievements_unlocked.contains(&AchievementId::Streak50));
    assert!(engine.state().achievements.is_unlocked(AchievementId::Streak50));
}

#[test]
fn test_final_stage_grows_fully() {
    let mut engine = fresh_engine();
    let mut rng = no_crit();
    {
        let state = engine.state_mut();
        state.stage = 4;
        state.clicks_in_stage = 249_999.0;
    }

    let result = engine.apply_click(false, 1_000, &mut rng);
    assert!(result.stage_advanced);
    assert!(result.fully_grown);
    assert_eq!(engine.state().stage, 5);
    assert!(engine.is_fully_grown());
    assert_eq!(engine.stage_progress(), 100.0);
    // Checked before the advance: stage 4 qualifies for stage_3 only
    assert_eq!(result.achievements_unlocked, vec![AchievementId::Stage3]);
    assert!(engine.drain_events().contains(&GameEvent::FullyGrown));

    // Further clicks change nothing but still report completion
    let before = engine.state().clone();
    let result = engine.apply_click(false, 2_000, &mut rng);
    assert!(result.already_complete);
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.drain_events(), vec![GameEvent::FullyGrown]);
    assert!(!engine.state().achievements.is_unlocked(AchievementId::Stage5));
}

#[test]
fn test_overshooting_a_milestone_skips_it() {
    let mut engine = fresh_engine();
    let mut rng = no_crit();
    engine.state_mut().click_power = 4;
    engine.state_mut().clicks_in_stage = 8.0;

    let result = engine.apply_click(false, 1_000, &mut rng);
    assert_eq!(engine.state().clicks_in_stage, 12.0);
    assert!(result.milestones.is_empty());
}
