pub mod add_product;
pub mod product;
pub mod products;
pub mod search;
pub mod teams;
