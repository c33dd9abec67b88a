//! 詳細モーダル本文コンポーネント

use farm_vision_common::records::RecordDetails;
use farm_vision_common::{Endpoints, ModalView};
use leptos::prelude::*;

/// モーダル本文（状態のみから描画する）
#[component]
pub fn DetailBody(state: RwSignal<ModalView>, endpoints: Endpoints) -> impl IntoView {
    move || match state.get() {
        ModalView::Loading => view! {
            <div class="text-center py-4">
                <div class="spinner-border text-primary" role="status"></div>
                <p class="mt-2 text-muted">"Yükleniyor..."</p>
            </div>
        }
        .into_any(),
        ModalView::Loaded(details) => {
            let image = details.image_path().map(|path| endpoints.asset(path));
            view! { <DetailTable details=details image=image /> }.into_any()
        }
        ModalView::Failed(message) => view! {
            <div class="alert alert-danger mb-0" role="alert">
                <i class="fas fa-exclamation-triangle me-2"></i>
                {message}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn DetailTable(details: RecordDetails, image: Option<String>) -> impl IntoView {
    let rows = details.rows();

    view! {
        <div class="row">
            {image.map(|src| view! {
                <div class="col-md-6 mb-3">
                    <img src=src class="img-fluid rounded" alt="Sonuç görüntüsü" />
                </div>
            })}
            <div class="col">
                <table class="table table-sm table-striped mb-0">
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <th scope="row">{row.label}</th>
                                    <td>{row.value}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
