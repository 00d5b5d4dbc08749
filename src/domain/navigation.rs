use crate::domain::types::CustomerId;

/// Row actions that leave the table for another page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    View(CustomerId),
    Edit(CustomerId),
}

impl Navigation {
    /// Location of the target page below `base` (the customer pages prefix).
    pub fn location(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Navigation::View(id) => format!("{base}/{id}"),
            Navigation::Edit(id) => format!("{base}/update/{id}"),
        }
    }
}
