use serde::{Deserialize, Serialize};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "123456";
pub const DEFAULT_HERO_IMAGE: &str = "https://images.unsplash.com/photo-1539106609512-d175211f42d2?auto=format&fit=crop&q=80&w=2000";

/// A named external link shown in the storefront footer when active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLink {
    pub id: String,
    pub name: String,
    pub url: String,
    pub active: bool,
}

impl CustomLink {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            active: true,
        }
    }
}

/// Admin console settings.
///
/// The password is kept and compared as plain text. The persisted field keeps its
/// historical name, `adminPasswordHash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub admin_username: String,
    #[serde(rename = "adminPasswordHash")]
    pub admin_password: String,
    pub hero_image: String,
    #[serde(default)]
    pub custom_links: Vec<CustomLink>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            hero_image: DEFAULT_HERO_IMAGE.to_string(),
            custom_links: vec![
                CustomLink::new("1", "Facebook", "https://facebook.com"),
                CustomLink::new("2", "Instagram", "https://instagram.com"),
                CustomLink::new("3", "WhatsApp", "https://wa.me/1234567890"),
            ],
        }
    }
}
