//! Reusable presentation components.

pub mod booking_card;
pub mod notification_list;
