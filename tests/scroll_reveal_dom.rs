#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn observed_sections_get_reveal_class() {
    let document = web_sys::window().unwrap().document().unwrap();
    let section = document.create_element("div").unwrap();
    section.set_class_name("section");
    document.body().unwrap().append_child(&section).unwrap();

    alphapulse_wasm::infrastructure::ui::init_scroll_reveal(".section");

    assert!(section.class_list().contains("reveal"));
}
