// Click timing
pub const RAPID_CLICK_WINDOW_MS: i64 = 100;
pub const RAPID_CLICK_BASE_BONUS: f64 = 2.0;
pub const RAPID_CLICK_BONUS_PER_STREAK_LEVEL: f64 = 0.5;

// Critical clicks
pub const CRITICAL_CHANCE_PER_LEVEL: f64 = 0.05;
pub const CRITICAL_MULTIPLIER: f64 = 10.0;

// Auto-clicker cadence: max(BASE - level * STEP, FLOOR)
pub const AUTO_CLICK_BASE_INTERVAL_MS: u64 = 1000;
pub const AUTO_CLICK_INTERVAL_STEP_MS: u64 = 150;
pub const AUTO_CLICK_MIN_INTERVAL_MS: u64 = 200;
pub const AUTO_CLICK_MAX_CATCHUP: u32 = 5;

// Prestige multiplier = PRESTIGE_BASE^level
pub const PRESTIGE_BASE: f64 = 2.0;

// Upgrade tiers
pub const MAX_UPGRADE_LEVEL: u32 = 4;
pub const MAX_CLICK_POWER: u32 = 5;

// Growth stages: clicks needed to finish each stage
pub const STAGE_THRESHOLDS: [f64; 5] = [25.0, 550.0, 6_500.0, 25_000.0, 250_000.0];

// Exact-match celebration values for clicks in the current stage
pub const MILESTONES: [f64; 9] = [
    10.0, 50.0, 100.0, 500.0, 1_000.0, 5_000.0, 10_000.0, 50_000.0, 100_000.0,
];

// Upgrade prices, indexed by the number of levels already bought
pub const AUTO_CLICKER_COSTS: [f64; 4] = [200.0, 2_000.0, 8_000.0, 40_000.0];
pub const CLICK_POWER_COSTS: [f64; 4] = [500.0, 4_000.0, 16_000.0, 80_000.0];
pub const CRITICAL_CLICK_COSTS: [f64; 4] = [2_000.0, 25_000.0, 100_000.0, 500_000.0];
pub const STREAK_BONUS_COSTS: [f64; 4] = [1_000.0, 15_000.0, 75_000.0, 300_000.0];

// Host loop
pub const INPUT_POLL_MS: u64 = 50;
pub const MAX_NOTIFICATIONS: usize = 6;
