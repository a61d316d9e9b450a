//! Convert an address between its textual forms.
//!
//! Usage:
//!   cargo run -p ton-address --example convert -- -1:811ced271f8f449cb51eb5920090b92cb200b20f07170676e9db6fbe9da516cf
//!   cargo run -p ton-address --example convert -- Ef-BHO0nH49EnLUetZIAkLkssgCyDwcXBnbp22--naUWz8VY

use ton_address::{Address, StringFormat};

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: convert <address>");
        eprintln!("Accepts the raw wc:hex form or the 48-char base64 form.");
        std::process::exit(1);
    });

    let address = match Address::parse(input.as_str()) {
        Ok(address) => address,
        Err(err) => {
            eprintln!("Invalid address: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "raw:            {}",
        address.to_string_with(StringFormat::default().user_friendly(false))
    );
    println!("bounceable:     {}", address.to_canonical_string());
    println!(
        "non-bounceable: {}",
        address.to_string_with(
            StringFormat::default()
                .user_friendly(true)
                .url_safe(true)
                .bounceable(false)
                .test_only(false)
        )
    );

    if address.is_test_only() {
        println!("note: parsed form carries the test-network flag");
    }
}
