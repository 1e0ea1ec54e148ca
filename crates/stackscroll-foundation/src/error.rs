#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// The host never bound an outer scroll surface to the coordinator.
    ScrollViewNotBound,
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackError::ScrollViewNotBound => {
                write!(f, "a valid scroll view must be bound to the stack controller")
            }
        }
    }
}

impl std::error::Error for StackError {}
