//! Scripted session demo.
//!
//! Walks one shopper session through the cart, wishlist, and auth stores,
//! printing the derived state after each step. Useful for eyeballing store
//! behavior against a real catalog.

use hearthwood_storefront::models::RegisterData;
use hearthwood_storefront::{Catalog, Session, StorefrontError};

/// Run the scripted session against the loaded catalog.
#[allow(clippy::print_stdout)]
pub fn run(catalog: &Catalog) -> Result<(), StorefrontError> {
    let mut products = catalog.products().iter();
    let Some(first) = products.next() else {
        println!("Catalog is empty; nothing to demo.");
        return Ok(());
    };
    let second = products.next().unwrap_or(first);

    let mut session = Session::new();

    println!("== cart ==");
    session.cart.add_item(first.clone());
    session.cart.add_item(first.clone());
    session.cart.add_item(second.clone());
    for line in session.cart.lines() {
        println!(
            "  {} x{} = {}",
            line.product.name,
            line.quantity,
            line.line_total()
        );
    }
    let summary = session.cart.summary();
    println!("  total {} across {} items", summary.total, summary.count);

    println!("== wishlist ==");
    session.wishlist.add(second.clone());
    session.wishlist.add(second.clone()); // set semantics: still one entry
    println!(
        "  {} saved, contains {}: {}",
        session.wishlist.len(),
        second.id,
        session.wishlist.contains(&second.id)
    );

    println!("== auth ==");
    let user = session.auth.register(RegisterData {
        name: "Demo Shopper".to_owned(),
        email: "demo@example.com".to_owned(),
        password: "a demo password".into(),
        phone: None,
    })?;
    println!("  registered {} ({})", user.name, user.email);

    session.auth.logout();
    println!(
        "  after logout: authenticated={}, cart still holds {} items",
        session.auth.is_authenticated(),
        session.cart.count()
    );

    session.auth.login("demo@example.com", "a demo password")?;
    println!(
        "  logged back in as {}",
        session
            .auth
            .current_user()
            .map_or("<anonymous>", |u| u.name.as_str())
    );

    Ok(())
}
