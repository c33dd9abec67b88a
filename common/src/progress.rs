//! 送信中の表示切替
//!
//! プログレス表示と送信ボタンのスピナーを切り替え、元に戻すためのハンドルを返す。
//! 元のボタン内容は表示面（DOM属性）に保存し、二重呼び出しでも一度しか取得しない。

/// 送信ボタンに差し込むローディング表示
pub const LOADING_CONTENT: &str =
    r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>İşleniyor..."#;

/// フォーム1つ分のプログレス表示面
pub trait ProgressSurface {
    fn button_content(&self) -> String;
    fn set_button_content(&self, content: &str);
    fn set_button_disabled(&self, disabled: bool);
    /// 保存済みの元のボタン内容（表示中でなければ None）
    fn saved_content(&self) -> Option<String>;
    fn save_content(&self, content: Option<&str>);
    fn set_indicator_visible(&self, visible: bool);
}

/// `show_progress` で変更した表示を元に戻すハンドル
#[must_use = "dropping the handle leaves the form in its loading state"]
#[derive(Debug)]
pub struct RestoreHandle<S: ProgressSurface> {
    surface: S,
    original: String,
}

impl<S: ProgressSurface> RestoreHandle<S> {
    pub fn original_content(&self) -> &str {
        &self.original
    }

    /// ボタンとプログレス表示を送信前の状態に戻す
    pub fn restore(self) {
        self.surface.set_button_content(&self.original);
        self.surface.set_button_disabled(false);
        self.surface.save_content(None);
        self.surface.set_indicator_visible(false);
    }
}

/// プログレス表示を出し、送信ボタンをスピナーに置き換える
pub fn show_progress<S: ProgressSurface>(surface: S) -> RestoreHandle<S> {
    let original = match surface.saved_content() {
        Some(saved) => saved,
        None => {
            let current = surface.button_content();
            surface.save_content(Some(&current));
            current
        }
    };

    surface.set_indicator_visible(true);
    surface.set_button_content(LOADING_CONTENT);
    surface.set_button_disabled(true);

    RestoreHandle { surface, original }
}

/// 一括処理の進捗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub processed: usize,
    pub total: usize,
}

impl BatchProgress {
    pub fn new(processed: usize, total: usize) -> Self {
        Self { processed, total }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.processed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct FormState {
        button: String,
        disabled: bool,
        saved: Option<String>,
        indicator_visible: bool,
    }

    #[derive(Debug, Clone, Default)]
    struct FakeForm(Rc<RefCell<FormState>>);

    impl FakeForm {
        fn with_button(content: &str) -> Self {
            let form = Self::default();
            form.0.borrow_mut().button = content.to_string();
            form
        }
    }

    impl ProgressSurface for FakeForm {
        fn button_content(&self) -> String {
            self.0.borrow().button.clone()
        }
        fn set_button_content(&self, content: &str) {
            self.0.borrow_mut().button = content.to_string();
        }
        fn set_button_disabled(&self, disabled: bool) {
            self.0.borrow_mut().disabled = disabled;
        }
        fn saved_content(&self) -> Option<String> {
            self.0.borrow().saved.clone()
        }
        fn save_content(&self, content: Option<&str>) {
            self.0.borrow_mut().saved = content.map(str::to_string);
        }
        fn set_indicator_visible(&self, visible: bool) {
            self.0.borrow_mut().indicator_visible = visible;
        }
    }

    #[test]
    fn test_show_and_restore() {
        let form = FakeForm::with_button("Tespit Et");
        let handle = show_progress(form.clone());

        {
            let state = form.0.borrow();
            assert!(state.indicator_visible);
            assert!(state.disabled);
            assert_eq!(state.button, LOADING_CONTENT);
        }

        handle.restore();
        let state = form.0.borrow();
        assert_eq!(state.button, "Tespit Et");
        assert!(!state.disabled);
        assert!(!state.indicator_visible);
        assert_eq!(state.saved, None);
    }

    #[test]
    fn test_show_progress_twice_is_idempotent() {
        let form = FakeForm::with_button("Analiz Et");
        let first = show_progress(form.clone());
        let second = show_progress(form.clone());

        {
            let state = form.0.borrow();
            assert_eq!(state.button.matches("spinner-border").count(), 1);
            assert!(state.indicator_visible);
        }
        assert_eq!(first.original_content(), "Analiz Et");
        assert_eq!(second.original_content(), "Analiz Et");

        second.restore();
        assert_eq!(form.0.borrow().button, "Analiz Et");
        drop(first);
    }

    #[test]
    fn test_batch_progress_label() {
        assert_eq!(BatchProgress::new(3, 4).label(), "3/4");
        assert_eq!(BatchProgress::new(0, 0).label(), "0/0");
    }
}
