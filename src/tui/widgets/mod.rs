pub mod palette_view;
pub mod status_bar;
