//! Typed storage access for restaurants and pictures.

mod picture;
mod restaurant;
pub mod validation;

pub use picture::PictureService;
pub use restaurant::RestaurantService;
