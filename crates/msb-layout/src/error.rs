#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("split count must be 2, 3 or 4 (got {0})")]
    InvalidSplitCount(u32),
}
