pub mod cart_line;
pub mod dish;
pub mod order;
