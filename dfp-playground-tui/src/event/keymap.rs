//! 快捷键配置
//!
//! 全局快捷键集中在这里，状态栏和帮助弹窗也从这里取按键文字。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：`?` 在大多数键盘布局上需要 Shift 才能输入。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers - KeyModifiers::SHIFT
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 网络
    pub const NETWORK_PICKER: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const RELOAD_NETWORKS: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const CREATE_TEST_NETWORK: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));

    // 标签页
    pub const EDIT_QUERY: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const SWITCH_ROUTE: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char(']'));
    pub const PREV_PAGE_ARROW: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const NEXT_PAGE_ARROW: KeyBinding = KeyBinding::key(KeyCode::Right);
}

/// 帮助弹窗中列出的按键说明
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Tab", "Switch between tab list and results"),
    ("↑↓ / j k", "Move selection"),
    ("Home / End", "First / last entry"),
    ("Enter", "Open tab / show row as JSON"),
    ("e", "Edit and run the query"),
    ("r", "Switch sub-route (Custom Targeting)"),
    ("← → / [ ]", "Previous / next page"),
    ("1-9", "Jump to page"),
    ("n", "Choose network"),
    ("Alt+r", "Reload networks"),
    ("Alt+t", "Create a test network"),
    ("?", "This help"),
    ("Esc", "Close popup / back"),
    ("q / Ctrl+C", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_bindings_ignore_shift() {
        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(DefaultKeymap::HELP.matches(&key));
    }

    #[test]
    fn modifiers_must_match() {
        let plain = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        let alt = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT);
        assert!(DefaultKeymap::SWITCH_ROUTE.matches(&plain));
        assert!(!DefaultKeymap::SWITCH_ROUTE.matches(&alt));
        assert!(DefaultKeymap::RELOAD_NETWORKS.matches(&alt));
    }
}
