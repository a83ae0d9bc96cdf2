pub mod api_utils;
pub mod crud;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
