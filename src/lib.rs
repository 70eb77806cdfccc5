pub mod crop;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod logo;
pub mod pixel;
pub mod region;
pub mod remap;
mod wallpaper;

pub use crate::draw::Watermark;
pub use crate::error::{Error, Result};
pub use crate::logo::{Logo, Orientation};
pub use crate::remap::{NoProgress, Progress};
pub use crate::wallpaper::{Wallpaper, WallpaperOptions};
