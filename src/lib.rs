//! Typefall core crate.
//!
//! Words fall down the play area and the player clears them by typing their
//! letters in order; completed words score points and push the level (and the
//! word tier sampled for future spawns) upward. The crate exports a single
//! `start_game()` entry point that wires the game loop, keyboard input, and
//! rendering into the hosting page.
//!
//! Word tier tables live here so gameplay logic and native tests can reach
//! them without touching browser APIs.

use wasm_bindgen::prelude::*;

pub mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Word tier tables
// Tier 1 is two-letter index-finger pairs; higher tiers grow toward full words.
// -----------------------------------------------------------------------------

pub const TIER1_WORDS: &[&str] = &["ju", "fr", "fv", "jm", "fu", "jr", "jv", "fm"];

pub const TIER2_WORDS: &[&str] = &["fre", "jui", "fui", "vie", "mi", "mery", "huy"];

pub const TIER3_WORDS: &[&str] = &["juan", "remo", "foca", "dedo", "cate"];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_falling_mode()
}

// Timing helper shared by the game module (RNG seeding).
pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
