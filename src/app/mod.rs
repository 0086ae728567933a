pub mod controls;
pub mod game_app;
pub mod styles;

pub use game_app::App;
