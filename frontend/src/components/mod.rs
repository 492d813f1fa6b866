pub mod dish_card;
pub mod ordering;
