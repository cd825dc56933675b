pub mod application;
pub mod color;
pub mod geometry;
pub mod ids;

pub use application::{ApplicationRecord, ImageFormat, MembershipCategory, SignatureImage};
pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use ids::ApplicationId;
