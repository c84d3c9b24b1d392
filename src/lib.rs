pub mod app;
pub mod args;
pub mod bracket;
pub mod export;
pub mod image;
pub mod rankings;
pub mod roster;
pub mod store;
pub mod types;

pub fn app_version() -> [usize; 3] {
    [
        env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or_default(),
        env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or_default(),
        env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or_default(),
    ]
}
