//! Auto-submitting HTML form for the browser redirect flow
//!
//! The map operation is completed in the shopper's browser: the merchant
//! page embeds a hidden form carrying the signed payload and submits it to
//! the gateway, which answers with the store-selection UI.

use nwl_sign::SignedPayload;

/// Form generation options
#[derive(Debug, Clone, Copy)]
pub struct FormOptions {
    /// Append a script that submits the form on load
    pub with_script: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self { with_script: true }
    }
}

/// Render the signed payload as a hidden auto-submit form
///
/// Every key, value, and the action URL are escaped as HTML attribute
/// values.
///
/// # Example
///
/// ```rust
/// use nwl_http::{build_form, FormOptions};
/// use nwl_sign::assemble;
///
/// let payload = assemble("MERCHANT_1", "CIPHERTEXT", "DIGEST");
/// let html = build_form(&payload, "https://example.com/map", FormOptions::default());
/// assert!(html.contains("name=\"PostData_\""));
/// ```
pub fn build_form(payload: &SignedPayload, action_url: &str, options: FormOptions) -> String {
    let mut html = format!(
        "<form id=\"newebpay-form\" action=\"{}\" method=\"post\">",
        escape_html_attribute(action_url)
    );

    for (name, value) in payload.form_pairs() {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
            escape_html_attribute(name),
            escape_html_attribute(value)
        ));
    }

    html.push_str("<button type=\"submit\">Submit</button>");
    html.push_str("</form>");

    if options.with_script {
        html.push_str("<script>document.getElementById(\"newebpay-form\").submit();</script>");
    }

    html
}

fn escape_html_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
