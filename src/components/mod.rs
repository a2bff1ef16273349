pub mod app;
pub mod avatar_frame;
pub mod presence_tables;
pub mod user_select;

pub use app::App;
