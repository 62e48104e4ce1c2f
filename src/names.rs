pub const BUILDER_URL: &str = "/";
pub const CONTENT_URL: &str = "/content";
pub const SAVE_SECTION_URL: &str = "/section";
pub const FINISH_URL: &str = "/finish";
pub const EXPORT_URL: &str = "/export";

pub fn select_type_url(slug: &str) -> String {
    format!("/type/{slug}")
}

pub fn add_option_url(group: &str) -> String {
    format!("/option/{group}/add")
}

pub fn option_url(group: &str, index: usize) -> String {
    format!("/option/{group}/{index}")
}

pub fn setting_url(key: &str) -> String {
    format!("/setting/{key}")
}

pub fn edit_section_url(index: usize) -> String {
    format!("/section/{index}/edit")
}

pub fn section_url(index: usize) -> String {
    format!("/section/{index}")
}

pub fn image_url(index: usize) -> String {
    format!("/image/{index}")
}

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "de";
pub const SET_LOCALE_URL: &str = "/set-locale";
