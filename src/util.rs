// Console logging helpers shared by components and platform adapters
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Format a float for inline CSS without trailing noise ("1.5", "0.2", "3").
pub fn css_num(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Cleared by an effect's cleanup so a task finishing after unmount can
/// release what it acquired instead of handing it over.
#[derive(Clone, Debug)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    /// Gives `value` back while still mounted; otherwise passes it to
    /// `release` and returns `None`.
    pub fn claim<T>(&self, value: T, release: impl FnOnce(T)) -> Option<T> {
        if self.is_mounted() {
            Some(value)
        } else {
            release(value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_num_trims() {
        assert_eq!(css_num(1.0), "1");
        assert_eq!(css_num(1.5), "1.5");
        assert_eq!(css_num(0.2), "0.2");
        assert_eq!(css_num(-30.0), "-30");
        assert_eq!(css_num(0.0), "0");
        assert_eq!(css_num(-0.00001), "0");
    }

    #[test]
    fn late_result_is_released_after_unmount() {
        let flag = MountFlag::new();
        let task = flag.clone();
        let released = Cell::new(0);
        assert_eq!(task.claim(1, |_| released.set(released.get() + 1)), Some(1));
        assert_eq!(released.get(), 0);

        flag.unmount();
        assert!(!task.is_mounted());
        assert_eq!(task.claim(2, |v| released.set(v)), None);
        assert_eq!(released.get(), 2);
    }
}
