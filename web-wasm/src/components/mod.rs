pub mod background;
pub mod detector;
pub mod header;
pub mod landing;
pub mod navbar;
pub mod result_card;
pub mod upload_area;
