/// Application name
pub const APP_NAME: &str = "Bike Versa";

/// Document-store collection holding bikes
pub const COLLECTION_BIKES: &str = "bikes";

/// Document-store collection holding brands
pub const COLLECTION_BRANDS: &str = "brands";

/// Document-store collection holding blog posts
pub const COLLECTION_BLOGS: &str = "blogs";

/// Maximum visible characters (markup stripped) in a rich-text description
pub const DESCRIPTION_MAX_CHARS: usize = 620;

/// Label rendered for a bike whose brand id matches no known brand
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// Number of rapid logo activations that opens the admin surface
pub const GESTURE_THRESHOLD: u32 = 3;

/// Rolling window for the logo gesture, in milliseconds
pub const GESTURE_WINDOW_MS: u64 = 2000;

/// Third-party endpoint the contact form posts to
pub const CONTACT_RELAY_URL: &str = "https://formspree.io/f/xqalokgb";

/// Message shown after a successful contact-form submission
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you soon.";

/// Message shown when the contact-form submission fails for any reason
pub const CONTACT_FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";
