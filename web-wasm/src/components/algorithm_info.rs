//! アルゴリズム説明パネル

use farm_vision_common::catalog;
use leptos::prelude::*;

#[component]
pub fn AlgorithmInfoPanel(selected: RwSignal<String>) -> impl IntoView {
    move || {
        let id = selected.get();
        match catalog::algorithm_info(&id) {
            Some(info) => view! {
                <div class="algorithm-info">
                    <h6 class="mb-1">{info.title}</h6>
                    <p class="mb-1 small">{info.description}</p>
                    <p class="mb-1 small">
                        <strong>"Değer aralığı: "</strong>
                        {info.value_range}
                    </p>
                    <p class="mb-0 small text-muted">{info.interpretation}</p>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="algorithm-info text-muted small">{id}</div>
            }
            .into_any(),
        }
    }
}
