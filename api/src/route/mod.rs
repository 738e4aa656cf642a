pub mod booking;
pub mod health;
pub mod v1;
pub mod venue;
