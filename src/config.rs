pub const SITE_NAME: &str = "NextGen Websites";

pub const CONTACT_PHONE: &str = "(555) 123-4567";
pub const CONTACT_PHONE_HREF: &str = "tel:+15551234567";
pub const CONTACT_EMAIL: &str = "hello@nextgenwebsites.com";
pub const CONTACT_ADDRESS: &str = "123 Business Avenue, Suite 200, Tech District, San Francisco, CA 94103";

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // Development URL when serving locally
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://nextgenwebsites.com"
}
