pub mod colors;
pub mod grid_view;
pub mod prompt;
pub mod table;
