//! PayPal Checkout Links
//!
//! Builds PayPal.me links that pre-fill the amount owed to the payer.

/// PayPal.me handles are alphanumeric; everything else in a name is dropped
pub fn handle_for(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// `{base}/{handle}/{amount}USD`
pub fn checkout_url(base: &str, payer_name: &str, amount: f64) -> String {
    format!(
        "{}/{}/{:.2}USD",
        base.trim_end_matches('/'),
        handle_for(payer_name),
        amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_url() {
        assert_eq!(
            checkout_url("https://www.paypal.me/", "Ada Lovelace", 60.0),
            "https://www.paypal.me/AdaLovelace/60.00USD"
        );
    }

    #[test]
    fn test_handle_drops_punctuation() {
        assert_eq!(handle_for("J. O'Neil-Smith"), "JONeilSmith");
    }
}
