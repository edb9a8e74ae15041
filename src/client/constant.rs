pub const SITE_NAME: &str = "Donate";

pub const DONATE_TITLE: &str = "Support the project";

pub const DONATE_MESSAGE: &str =
    "Hosting and development are funded by people like you. Every contribution helps keep the site running.";

/// Donation targets shown inside the modal, as `(label, href)` pairs.
pub const DONATION_LINKS: &[(&str, &str)] = &[
    ("GitHub Sponsors", "https://github.com/sponsors"),
    ("Ko-fi", "https://ko-fi.com"),
];
