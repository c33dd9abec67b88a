//! Farm Vision Web Controllers (Leptos + WASM)
//!
//! サーバー描画済みのページにフォーム検証・進捗表示・詳細モーダル・地図を結線する。

mod api;
mod bootstrap;
mod bridge;
mod components;
mod detection;
mod dom;
mod feedback;
mod forms;
mod mapping;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    bootstrap::start();
}
