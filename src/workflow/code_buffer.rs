/// 编辑器中的当前代码
///
/// 与题目数据相互独立：初始为占位代码，只随编辑事件变化，
/// 题目加载完成时不会被重置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBuffer {
    value: String,
    edited: bool,
}

impl CodeBuffer {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: placeholder.into(),
            edited: false,
        }
    }

    /// 编辑事件：无条件替换为新内容
    pub fn on_edit(&mut self, new_text: impl Into<String>) {
        self.value = new_text.into();
        self.edited = true;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// 提交时使用的快照
    pub fn snapshot(&self) -> String {
        self.value.clone()
    }

    /// 是否仍是占位代码（从未编辑过）
    pub fn is_pristine(&self) -> bool {
        !self.edited
    }
}
