//! Falling-words gameplay: game loop, timers, keyboard input, and the DOM
//! projection of the word model.
//!
//! The loop owns two interval timers — word spawning (3 s) and movement
//! (300 ms) — plus a document-level keydown handler. Space toggles
//! RUNNING/PAUSED: pausing clears both interval handles together, resuming
//! registers a fresh pair at the nominal periods (missed ticks are not
//! replayed). All state lives in one `GameState` context constructed by
//! `start_falling_mode()` and shared into the event closures via
//! `Rc<RefCell<_>>`; the browser dispatches callbacks non-preemptively, so
//! each tick takes a short exclusive borrow and never nests.

mod rng;
mod score;
mod surface;
mod words;

pub use rng::Lcg;
pub use score::{LEVEL_STEP_POINTS, ScoreTracker};
pub use surface::{FALL_STEP_PX, FallingWord, PLAY_AREA_HEIGHT_PX, PlayField, SPAWN_SPAN_PCT};
pub use words::pick_word;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, KeyboardEvent, window};

/// Period of the word-spawn timer.
pub const SPAWN_PERIOD_MS: i32 = 3_000;
/// Period of the movement timer.
pub const MOVE_PERIOD_MS: i32 = 300;

const PLAYFIELD_STYLE: &str = "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); \
     width:85%; height:760px; overflow:hidden; border:2px solid #222; border-radius:18px; \
     background:#181818; z-index:20;";
const SCORE_STYLE: &str = "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; \
     font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; \
     border-radius:6px; color:#ffd166; z-index:45; letter-spacing:0.5px;";
const LEVEL_STYLE: &str = "position:fixed; top:10px; left:170px; font-family:'Fira Code', monospace; \
     font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; \
     border-radius:6px; color:#ffd166; z-index:44; letter-spacing:0.5px;";
const TYPED_STYLE: &str = "color:#ffd166;";

/// Loop state; space toggles between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

type Shared = Rc<RefCell<GameState>>;

/// The application context: word model, score, RNG, loop state, and the
/// handles the browser hands back (interval ids, tick closures, overlay
/// elements). Owned by `start_falling_mode()`, never a thread-local global.
struct GameState {
    document: Document,
    surface_el: Element,
    score_el: Element,
    level_el: Element,
    playfield: PlayField,
    tracker: ScoreTracker,
    rng: Lcg,
    run_state: RunState,
    spawn_timer: Option<i32>,
    move_timer: Option<i32>,
    // Created once at startup and re-registered on resume.
    spawn_tick: Option<Closure<dyn FnMut()>>,
    move_tick: Option<Closure<dyn FnMut()>>,
}

pub fn start_falling_mode() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface_el = ensure_overlay(&doc, "tf-playfield", PLAYFIELD_STYLE)?;
    let score_el = ensure_overlay(&doc, "tf-score", SCORE_STYLE)?;
    let level_el = ensure_overlay(&doc, "tf-level", LEVEL_STYLE)?;
    score_el.set_text_content(Some(&score_label(0)));
    level_el.set_text_content(Some(&level_label(1)));

    web_sys::console::log_1(&"typefall: starting".into());

    let state: Shared = Rc::new(RefCell::new(GameState {
        document: doc.clone(),
        surface_el,
        score_el,
        level_el,
        playfield: PlayField::new(),
        tracker: ScoreTracker::new(),
        rng: Lcg::from_host(),
        run_state: RunState::Running,
        spawn_timer: None,
        move_timer: None,
        spawn_tick: None,
        move_tick: None,
    }));

    // Tick closures capture the shared context; they are stored in it so
    // pause/resume can re-register the same callbacks.
    {
        let spawn_state = state.clone();
        let spawn_tick = Closure::wrap(Box::new(move || {
            let mut s = spawn_state.borrow_mut();
            spawn_word(&mut s);
        }) as Box<dyn FnMut()>);

        let move_state = state.clone();
        let move_tick = Closure::wrap(Box::new(move || {
            let mut s = move_state.borrow_mut();
            s.playfield.advance();
            render_words(&s);
        }) as Box<dyn FnMut()>);

        let mut s = state.borrow_mut();
        s.spawn_tick = Some(spawn_tick);
        s.move_tick = Some(move_tick);
        start_timers(&mut s)?;
    }

    // Keyboard listener: space is consumed for pause/resume, any other single
    // character is forwarded to the word model while running.
    {
        let key_state = state.clone();
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let key = evt.key();
            let mut s = key_state.borrow_mut();
            if key == " " {
                evt.prevent_default();
                toggle_pause(&mut s);
                return;
            }
            if s.run_state != RunState::Running {
                return;
            }
            let mut chars = key.chars();
            if let (Some(letter), None) = (chars.next(), chars.next()) {
                handle_keystroke(&mut s, letter);
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

// --- Loop operations ---------------------------------------------------------

fn spawn_word(s: &mut GameState) {
    let level = s.tracker.level();
    let text = pick_word(level, &mut s.rng);
    s.playfield.spawn(text, &mut s.rng);
    render_words(s);
}

fn handle_keystroke(s: &mut GameState, letter: char) {
    let completed = s.playfield.apply_keystroke(letter);
    if completed > 0 {
        let level_before = s.tracker.level();
        for _ in 0..completed {
            s.tracker.record_match();
        }
        s.score_el
            .set_text_content(Some(&score_label(s.tracker.score())));
        if s.tracker.level() != level_before {
            s.level_el
                .set_text_content(Some(&level_label(s.tracker.level())));
            web_sys::console::log_1(
                &format!("typefall: nivel {}", s.tracker.level()).into(),
            );
        }
    }
    render_words(s);
}

fn toggle_pause(s: &mut GameState) {
    match s.run_state {
        RunState::Running => {
            stop_timers(s);
            s.run_state = RunState::Paused;
        }
        RunState::Paused => {
            if start_timers(s).is_ok() {
                s.run_state = RunState::Running;
            }
        }
    }
}

/// Register a fresh timer pair. Either both intervals end up installed or
/// neither does.
fn start_timers(s: &mut GameState) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let spawn_cb = s
        .spawn_tick
        .as_ref()
        .ok_or_else(|| JsValue::from_str("spawn tick not installed"))?;
    let move_cb = s
        .move_tick
        .as_ref()
        .ok_or_else(|| JsValue::from_str("move tick not installed"))?;

    let spawn_id = win.set_interval_with_callback_and_timeout_and_arguments_0(
        spawn_cb.as_ref().unchecked_ref(),
        SPAWN_PERIOD_MS,
    )?;
    let move_id = match win.set_interval_with_callback_and_timeout_and_arguments_0(
        move_cb.as_ref().unchecked_ref(),
        MOVE_PERIOD_MS,
    ) {
        Ok(id) => id,
        Err(err) => {
            win.clear_interval_with_handle(spawn_id);
            return Err(err);
        }
    };
    s.spawn_timer = Some(spawn_id);
    s.move_timer = Some(move_id);
    Ok(())
}

/// Clear both interval handles in one transition.
fn stop_timers(s: &mut GameState) {
    if let Some(win) = window() {
        if let Some(id) = s.spawn_timer.take() {
            win.clear_interval_with_handle(id);
        }
        if let Some(id) = s.move_timer.take() {
            win.clear_interval_with_handle(id);
        }
    }
}

// --- DOM projection ----------------------------------------------------------

/// Reuse an existing overlay element by id or create it on `body`.
fn ensure_overlay(doc: &Document, id: &str, style: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element("div")?;
    el.set_id(id);
    el.set_attribute("style", style).ok();
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&el)?;
    Ok(el)
}

/// Project the word model into the play area: one label per live word, typed
/// prefix and remaining text as separate spans. The projection rebuilds the
/// children from the model each call — the model is the source of truth.
fn render_words(s: &GameState) {
    s.surface_el.set_inner_html("");
    for word in s.playfield.words() {
        let Ok(div) = s.document.create_element("div") else {
            continue;
        };
        div.set_class_name("tf-word");
        div.set_id(&format!("tf-word-{}", word.id));
        div.set_attribute(
            "style",
            &format!(
                "position:absolute; top:{}px; left:{}%; color:#ffffff; \
                 font-family:'Fira Code', monospace; font-size:20px;",
                word.top_px, word.left_pct
            ),
        )
        .ok();
        if let Ok(span) = s.document.create_element("span") {
            span.set_attribute("style", TYPED_STYLE).ok();
            span.set_text_content(Some(&word.typed));
            div.append_child(&span).ok();
        }
        if let Ok(span) = s.document.create_element("span") {
            span.set_text_content(Some(&word.remaining));
            div.append_child(&span).ok();
        }
        s.surface_el.append_child(&div).ok();
    }
}

fn score_label(score: u32) -> String {
    format!("Puntuacion= {score}")
}

fn level_label(level: u32) -> String {
    format!("Nivel= {level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_ui_contract() {
        assert_eq!(score_label(0), "Puntuacion= 0");
        assert_eq!(score_label(12), "Puntuacion= 12");
        assert_eq!(level_label(1), "Nivel= 1");
        assert_eq!(level_label(3), "Nivel= 3");
    }

    #[test]
    fn timer_periods_are_nominal() {
        assert_eq!(SPAWN_PERIOD_MS, 3_000);
        assert_eq!(MOVE_PERIOD_MS, 300);
    }
}
