/// Stock ad-libs available for quick copy regardless of any generation.
pub const SAMPLE_LIBRARY: [&str; 14] = [
    "Skrrt!",
    "Brrr!",
    "Yeah!",
    "Let's go!",
    "Facts!",
    "On god!",
    "Phew!",
    "Splash!",
    "Woah!",
    "Hey!",
    "Ayy!",
    "Straight up!",
    "No cap!",
    "It's lit!",
];

/// Progress messages shown while a generation call is outstanding.
pub const LOADING_STEPS: [&str; 5] = [
    "Analyzing vocal cadence...",
    "Syncing with chosen vibes...",
    "Mastering the ad-lib chain...",
    "Generating signature tags...",
    "Finalizing recording script...",
];

/// Look up a library entry by its 1-based position.
pub fn sample(position: usize) -> Option<&'static str> {
    position.checked_sub(1).and_then(|index| SAMPLE_LIBRARY.get(index).copied())
}

/// Loading message for the given tick, cycling through `LOADING_STEPS`.
pub fn loading_step(tick: usize) -> &'static str {
    LOADING_STEPS[tick % LOADING_STEPS.len()]
}
