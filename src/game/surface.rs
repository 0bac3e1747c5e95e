//! Falling-word model: spawn, per-tick movement, keystroke matching.
//!
//! Plain data only — the DOM projection lives in the parent module, so this
//! half stays native-testable.

use super::rng::Lcg;

/// Vertical distance (px) one movement tick adds.
pub const FALL_STEP_PX: i32 = 5;
/// Words at or past this vertical position leave the play area.
pub const PLAY_AREA_HEIGHT_PX: i32 = 760;
/// Horizontal spawn offsets are drawn from `0..SPAWN_SPAN_PCT` percent of width.
pub const SPAWN_SPAN_PCT: u32 = 85;

/// One falling word, split into the typed prefix and the text still owed.
/// `id` identifies the on-screen variant of the word across renders.
#[derive(Debug, Clone)]
pub struct FallingWord {
    pub id: u32,
    pub typed: String,
    pub remaining: String,
    pub left_pct: u32,
    pub top_px: i32,
}

impl FallingWord {
    /// Fold the typed prefix back so the word reads as untouched again.
    fn reset_progress(&mut self) {
        if !self.typed.is_empty() {
            self.remaining.insert_str(0, &self.typed);
            self.typed.clear();
        }
    }
}

/// Live-word collection for the play area.
#[derive(Debug, Default)]
pub struct PlayField {
    words: Vec<FallingWord>,
    next_id: u32,
}

impl PlayField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[FallingWord] {
        &self.words
    }

    /// Spawn `text` at the top edge at a random horizontal percent offset.
    pub fn spawn(&mut self, text: &str, rng: &mut Lcg) {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.words.push(FallingWord {
            id,
            typed: String::new(),
            remaining: text.to_string(),
            left_pct: rng.next_range(SPAWN_SPAN_PCT),
            top_px: 0,
        });
    }

    /// One movement tick: every word falls by `FALL_STEP_PX`, then anything at
    /// or past the bottom edge is dropped. Misses carry no score side effects.
    pub fn advance(&mut self) {
        for word in &mut self.words {
            word.top_px += FALL_STEP_PX;
        }
        self.words.retain(|w| w.top_px < PLAY_AREA_HEIGHT_PX);
    }

    /// Apply one keystroke to every live word at once — there is no selected
    /// word. A word whose next letter matches consumes it (and is removed when
    /// fully typed); every other word loses its typed progress. Returns how
    /// many words this keystroke completed.
    pub fn apply_keystroke(&mut self, letter: char) -> u32 {
        let mut completed = 0;
        self.words.retain_mut(|word| {
            if word.remaining.chars().next() == Some(letter) {
                word.typed.push(letter);
                word.remaining.remove(0);
                if word.remaining.is_empty() {
                    completed += 1;
                    return false;
                }
            } else {
                word.reset_progress();
            }
            true
        });
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(words: &[&str]) -> PlayField {
        let mut rng = Lcg::new(1);
        let mut field = PlayField::new();
        for w in words {
            field.spawn(w, &mut rng);
        }
        field
    }

    #[test]
    fn spawn_places_word_at_top_within_span() {
        let field = field_with(&["ju"]);
        assert_eq!(field.words().len(), 1);
        let word = &field.words()[0];
        assert_eq!(word.remaining, "ju");
        assert!(word.typed.is_empty());
        assert_eq!(word.top_px, 0);
        assert!(word.left_pct < SPAWN_SPAN_PCT);
    }

    #[test]
    fn spawned_words_get_distinct_ids() {
        let field = field_with(&["ju", "fr"]);
        assert_ne!(field.words()[0].id, field.words()[1].id);
    }

    #[test]
    fn advance_moves_by_step_and_culls_at_bottom() {
        let mut field = field_with(&["ju"]);
        for tick in 1..=151 {
            field.advance();
            assert_eq!(field.words().len(), 1, "culled early at tick {}", tick);
            assert_eq!(field.words()[0].top_px, FALL_STEP_PX * tick);
        }
        // Tick 152 lands exactly on the bound and the word is gone.
        field.advance();
        assert!(field.words().is_empty());
    }

    #[test]
    fn typing_full_word_completes_it() {
        let mut field = field_with(&["ju"]);
        assert_eq!(field.apply_keystroke('j'), 0);
        assert_eq!(field.words()[0].typed, "j");
        assert_eq!(field.words()[0].remaining, "u");
        assert_eq!(field.apply_keystroke('u'), 1);
        assert!(field.words().is_empty());
    }

    #[test]
    fn mismatch_resets_typed_progress() {
        let mut field = field_with(&["ju"]);
        field.apply_keystroke('j');
        assert_eq!(field.apply_keystroke('x'), 0);
        let word = &field.words()[0];
        assert!(word.typed.is_empty());
        assert_eq!(word.remaining, "ju");
        // Progress restarts cleanly afterwards.
        field.apply_keystroke('j');
        assert_eq!(field.apply_keystroke('u'), 1);
        assert!(field.words().is_empty());
    }

    #[test]
    fn every_visible_word_is_a_candidate() {
        // "ju" and "jv" share a first letter; 'j' advances both, then 'u'
        // completes one and resets the other.
        let mut field = field_with(&["ju", "jv"]);
        assert_eq!(field.apply_keystroke('j'), 0);
        assert!(field.words().iter().all(|w| w.typed == "j"));
        assert_eq!(field.apply_keystroke('u'), 1);
        assert_eq!(field.words().len(), 1);
        let loser = &field.words()[0];
        assert!(loser.typed.is_empty());
        assert_eq!(loser.remaining, "jv");
    }

    #[test]
    fn one_keystroke_can_complete_several_words() {
        let mut field = field_with(&["mi", "mi"]);
        field.apply_keystroke('m');
        assert_eq!(field.apply_keystroke('i'), 2);
        assert!(field.words().is_empty());
    }

    #[test]
    fn mismatch_does_not_touch_positions() {
        let mut field = field_with(&["ju"]);
        field.advance();
        field.advance();
        let top_before = field.words()[0].top_px;
        field.apply_keystroke('x');
        assert_eq!(field.words()[0].top_px, top_before);
    }
}
