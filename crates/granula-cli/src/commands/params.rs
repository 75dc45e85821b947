//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use granula_spray::SprayEffect;

pub fn run() -> anyhow::Result<()> {
    println!("Spray Parameters");
    println!("================");
    println!();
    println!(
        "  {:5}  {:12}  {:16}  {:8}  {:5}  {}",
        "Index", "Name", "Range", "Default", "Unit", "ID"
    );
    println!(
        "  {:5}  {:12}  {:16}  {:8}  {:5}  {}",
        "-----", "----", "-----", "-------", "----", "--"
    );

    for index in 0..SprayEffect::PARAM_COUNT {
        let Some(desc) = SprayEffect::descriptor(index) else {
            continue;
        };
        let range = format!("{} to {}", desc.min, desc.max);
        println!(
            "  {:5}  {:12}  {:16}  {:8}  {:5}  {}",
            index,
            desc.name,
            range,
            desc.default,
            desc.unit.suffix(),
            desc.string_id
        );
    }

    println!();
    println!("Set any of these with: granula process in.wav out.wav --param <id>=<value>");

    Ok(())
}
