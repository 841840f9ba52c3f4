use gantry_core::catalog;

/// Render the command catalog (the default, no-subcommand invocation).
pub fn show_catalog() {
    println!("gantry — container build and release automation");
    println!();
    println!("Commands:");
    print!("{}", catalog::render(catalog::COMMANDS));
}
