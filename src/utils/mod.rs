pub mod extract;
pub mod page_clean;
pub mod pdf;
pub mod summarizer;
