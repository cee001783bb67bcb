#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("conversation index {index} out of range ({len} conversations)")]
    OutOfRange { index: usize, len: usize },
}
