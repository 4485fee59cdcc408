//! `opgen types`: print the allowed type vocabulary with its classes.

use core_types::TypeTag;

pub fn execute() -> anyhow::Result<()> {
    for tag in TypeTag::ALL {
        println!("{:<10} {}", tag.as_str(), tag.class().as_str());
    }
    Ok(())
}
