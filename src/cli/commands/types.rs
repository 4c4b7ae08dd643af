use crate::models::coffee_type::CoffeeType;
use crate::utils::formatting::pad_right;

pub fn handle() {
    println!("☕ Available coffee types:\n");
    for t in CoffeeType::catalog() {
        println!("  {} {}", pad_right(&t.id, 12), t.title);
    }
}
