pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api/heroes";

fn trimmed(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub fn heroes_url(base: &str) -> String {
    trimmed(base).to_string()
}

pub fn hero_url(base: &str, id: u32) -> String {
    format!("{}/{id}", trimmed(base))
}

/// Collection endpoint used with a query string (`?name=` or `?id=`).
pub fn search_url(base: &str) -> String {
    format!("{}/", trimmed(base))
}
