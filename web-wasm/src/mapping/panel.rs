//! アルゴリズム・カラーマップ選択と値範囲入力

use std::rc::Rc;

use farm_vision_common::catalog;
use farm_vision_common::Notifier;
use gloo::events::EventListener;
use leptos::prelude::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::components::algorithm_info::AlgorithmInfoPanel;
use crate::dom;
use crate::feedback::Coordinator;

/// 範囲入力の組
#[derive(Clone)]
struct RangeInputs {
    min: HtmlInputElement,
    max: HtmlInputElement,
}

impl RangeInputs {
    fn find(form: &Element) -> Option<Self> {
        Some(Self {
            min: dom::query_in(form, "input[name=\"min_range\"]")?,
            max: dom::query_in(form, "input[name=\"max_range\"]")?,
        })
    }

    fn apply_defaults(&self, algorithm: &str) {
        if let Some(range) = catalog::default_range(algorithm) {
            self.min.set_value(&catalog::format_range_value(range.min));
            self.max.set_value(&catalog::format_range_value(range.max));
        }
    }

    fn values(&self) -> Option<(f64, f64)> {
        Some((
            catalog::parse_range_input(&self.min.value())?,
            catalog::parse_range_input(&self.max.value())?,
        ))
    }
}

/// フォーム内のアルゴリズム選択・カラーマップ選択・範囲入力を結線する
pub fn wire(coordinator: &Rc<Coordinator>, form: &Element) {
    let ranges = RangeInputs::find(form);

    if let Some(select) = dom::query_in::<HtmlSelectElement>(form, "select[name=\"algorithm\"]") {
        wire_algorithm(select, ranges.clone());
    }
    if let Some(select) = dom::query_in::<HtmlSelectElement>(form, "select[name=\"colormap\"]") {
        wire_colormap(select);
    }
    if let Some(ranges) = ranges {
        wire_range_check(coordinator, ranges);
    }
}

fn wire_algorithm(select: HtmlSelectElement, ranges: Option<RangeInputs>) {
    let initial = select.value();
    let selected = RwSignal::new(if initial.is_empty() {
        catalog::DEFAULT_ALGORITHM.to_string()
    } else {
        initial
    });
    if let Some(panel) = dom::by_id::<HtmlElement>("algorithmInfo") {
        panel.set_inner_html("");
        leptos::mount::mount_to(panel, move || view! { <AlgorithmInfoPanel selected=selected /> })
            .forget();
    }

    let target = select.clone();
    EventListener::new(&select, "change", move |_| {
        let algorithm = target.value();
        if let Some(ranges) = &ranges {
            ranges.apply_defaults(&algorithm);
        }
        selected.set(algorithm);
    })
    .forget();
}

fn wire_colormap(select: HtmlSelectElement) {
    let Some(swatch) = dom::by_id::<HtmlElement>("colormapPreview") else {
        return;
    };
    let initial = select.value();
    render_swatch(
        &swatch,
        if initial.is_empty() { catalog::DEFAULT_COLORMAP } else { initial.as_str() },
    );

    let target = select.clone();
    EventListener::new(&select, "change", move |_| {
        render_swatch(&swatch, &target.value());
    })
    .forget();
}

fn render_swatch(swatch: &HtmlElement, colormap: &str) {
    let Some(map) = catalog::colormap(colormap) else {
        return;
    };
    let _ = swatch.style().set_property("background", map.gradient);
    let _ = swatch.set_attribute("title", map.name);
}

/// min ≥ max なら警告する（送信は止めない）
fn wire_range_check(coordinator: &Rc<Coordinator>, ranges: RangeInputs) {
    for input in [ranges.min.clone(), ranges.max.clone()] {
        let coordinator = coordinator.clone();
        let ranges = ranges.clone();
        EventListener::new(&input, "blur", move |_| {
            let Some((min, max)) = ranges.values() else {
                return;
            };
            if let Err(warning) = catalog::check_range(min, max) {
                coordinator.notifier().warning(warning.message());
            }
        })
        .forget();
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use farm_vision_common::UiConfig;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mapping_form() -> Element {
        let document = dom::document().expect("document");
        let form = document.create_element("form").expect("form");
        form.set_inner_html(
            r#"<select name="algorithm">
                   <option value="ndvi" selected>NDVI</option>
                   <option value="gli">GLI</option>
                   <option value="bai">BAI</option>
               </select>
               <input name="min_range" value="-1.0">
               <input name="max_range" value="1.0">"#,
        );
        document.body().expect("body").append_child(&form).expect("append");
        form
    }

    fn select_algorithm(select: &HtmlSelectElement, algorithm: &str) {
        select.set_value(algorithm);
        let event = Event::new("change").expect("event");
        select.dispatch_event(&event).expect("dispatch");
    }

    fn range(ranges: &RangeInputs) -> (f64, f64) {
        ranges.values().expect("numeric range")
    }

    #[wasm_bindgen_test]
    fn wasm_algorithm_change_fills_default_range() {
        let form = mapping_form();
        let coordinator = Rc::new(Coordinator::new(UiConfig::default()));
        wire(&coordinator, &form);

        let select: HtmlSelectElement = form
            .query_selector("select[name=\"algorithm\"]")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        let ranges = RangeInputs::find(&form).expect("range inputs");

        select_algorithm(&select, "ndvi");
        assert_eq!(range(&ranges), (-1.0, 1.0));

        select_algorithm(&select, "gli");
        assert_eq!(range(&ranges), (-1.0, 1.0));

        select_algorithm(&select, "bai");
        assert_eq!(range(&ranges), (0.0, 100.0));
        assert_eq!(ranges.min.value(), "0.0");

        form.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_unknown_algorithm_keeps_inputs() {
        let form = mapping_form();
        let ranges = RangeInputs::find(&form).expect("range inputs");
        ranges.min.set_value("0.2");

        ranges.apply_defaults("custom");
        assert_eq!(ranges.min.value(), "0.2");
        form.remove();
    }
}
