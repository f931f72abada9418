pub mod container;
pub mod image;
pub mod social_icons;
pub mod social_link;
