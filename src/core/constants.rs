// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const INPUT_POLL_MS: u64 = 50;

// Starting balance for a new session
pub const STARTING_COOKIES: u64 = 100;

// Terminal title
pub const GAME_TITLE: &str = "Cookie Clicker Workshop";

// Shown when a purchase is rejected for lack of cookies
pub const INSUFFICIENT_FUNDS_MESSAGE: &str = "Not enough 💰 for 🍪";

// Simulator defaults
pub const SIM_DEFAULT_TICKS: u64 = 300;
pub const SIM_DEFAULT_SAMPLE_EVERY: u64 = 30;
