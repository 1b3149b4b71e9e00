//! 结果列表选择状态
//!
//! 每个标签页各自记住选中的行，切换标签页时不丢失。

/// 结果列表状态
#[derive(Debug, Default)]
pub struct ResultsState {
    /// 每个标签页当前选中的行
    selected: Vec<usize>,
}

impl ResultsState {
    pub fn new(tab_count: usize) -> Self {
        Self {
            selected: vec![0; tab_count],
        }
    }

    /// 标签页 `tab` 当前选中的行
    pub fn selected(&self, tab: usize) -> usize {
        self.selected.get(tab).copied().unwrap_or(0)
    }

    fn slot(&mut self, tab: usize) -> Option<&mut usize> {
        self.selected.get_mut(tab)
    }

    /// 选择上一行
    pub fn select_previous(&mut self, tab: usize) {
        if let Some(sel) = self.slot(tab) {
            *sel = sel.saturating_sub(1);
        }
    }

    /// 选择下一行，`len` 为结果行数
    pub fn select_next(&mut self, tab: usize, len: usize) {
        if let Some(sel) = self.slot(tab) {
            if *sel + 1 < len {
                *sel += 1;
            }
        }
    }

    /// 选择第一行
    pub fn select_first(&mut self, tab: usize) {
        self.reset(tab);
    }

    /// 选择最后一行
    pub fn select_last(&mut self, tab: usize, len: usize) {
        if let Some(sel) = self.slot(tab) {
            *sel = len.saturating_sub(1);
        }
    }

    /// 结果被替换后回到第一行
    pub fn reset(&mut self, tab: usize) {
        if let Some(sel) = self.slot(tab) {
            *sel = 0;
        }
    }
}
