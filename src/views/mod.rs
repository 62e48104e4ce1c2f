pub mod components;
pub mod editor;
pub mod layout;
pub mod preview;
pub mod sections;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
