//! List command
//!
//! Usage: patterns list

use patterns_core::Catalogue;

/// Execute list command
pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = Catalogue::standard();
    for pattern in catalogue.iter() {
        let info = pattern.info();
        println!("{:<10} {:<12} {}", info.key, info.category, info.name);
    }
    Ok(())
}
