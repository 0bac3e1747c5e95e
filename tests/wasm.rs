// Browser-only smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_builds_the_overlays() {
    typefall::start_game().expect("start_game failed");

    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("tf-playfield").is_some());
    assert!(doc.get_element_by_id("tf-score").is_some());
    assert!(doc.get_element_by_id("tf-level").is_some());

    let score = doc.get_element_by_id("tf-score").unwrap();
    assert_eq!(score.text_content().unwrap(), "Puntuacion= 0");
    let level = doc.get_element_by_id("tf-level").unwrap();
    assert_eq!(level.text_content().unwrap(), "Nivel= 1");
}
