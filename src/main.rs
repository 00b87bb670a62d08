//! Page Series demo (for testing purposes only)
//! The main interface is the library and its WASM bindings.
//!
//! Set `RUST_LOG=page_series=debug` to see the events emitted while building.

use page_series::{Page, PageError, PageVars, WindowSpec};

fn main() -> Result<(), PageError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();

    println!("Page Series");
    println!("===========");
    println!();

    let windows = [
        ("outer [1, 4, 4, 1]", WindowSpec::default()),
        ("outer [0, 2, 2, 0]", WindowSpec::Outer([0, 2, 2, 0])),
        ("centered 7", WindowSpec::Centered(7)),
    ];

    for current in [1, 4, 18, 33, 36] {
        let page = Page::new(&PageVars::new(720).with_page(current))?;
        println!(
            "page {:>2}/{}  items {}-{}",
            page.page(),
            page.last(),
            page.from(),
            page.to()
        );
        for (label, spec) in &windows {
            println!("  {label:<20} {}", page.series(spec)?);
        }
    }

    println!();
    println!("For testing the core library:");
    println!("  cargo test");
    Ok(())
}
