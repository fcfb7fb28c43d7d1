#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn random_index_stays_in_bounds() {
    for _ in 0..200 {
        assert!(frutinha_wasm::random_index(7) < 7);
    }
    assert_eq!(frutinha_wasm::random_index(1), 0);
}
