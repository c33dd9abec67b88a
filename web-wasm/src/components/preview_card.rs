//! 画像プレビューカード

use farm_vision_common::preview::PreviewCard;
use leptos::prelude::*;

#[component]
pub fn PreviewCardView(card: RwSignal<Option<PreviewCard>>) -> impl IntoView {
    move || {
        card.get().map(|card| {
            let alt = card.file_name.clone();
            view! {
                <div class="card mt-3 image-preview">
                    <img
                        src=card.data_url
                        alt=alt
                        class="card-img-top"
                        style="max-height: 300px; object-fit: contain;"
                    />
                    <div class="card-body p-2">
                        <h6 class="card-title mb-1 text-truncate">{card.file_name}</h6>
                        <small class="text-muted">{card.file_type}" · "{card.file_size}</small>
                    </div>
                </div>
            }
        })
    }
}
