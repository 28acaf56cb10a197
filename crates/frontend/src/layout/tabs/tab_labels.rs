//! Tab labels - заголовки кнопок в панели вкладок.
//!
//! Заголовок берётся из `data-title` панели. Fallback: ключ панели,
//! приведённый к читаемому виду ("contact_us" -> "Contact us").

/// Возвращает читаемый заголовок таба для данного ключа.
pub fn tab_label(key: &str, data_title: Option<&str>) -> String {
    if let Some(title) = data_title.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }
    humanize_key(key)
}

/// Подпись бейджа автообновления: "⟳ 60 s", "⟳ 1500 ms".
pub fn reload_badge_label(period_ms: u32) -> String {
    if period_ms % 1000 == 0 {
        format!("⟳ {} s", period_ms / 1000)
    } else {
        format!("⟳ {} ms", period_ms)
    }
}

fn humanize_key(key: &str) -> String {
    let words: Vec<&str> = key
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return key.to_string();
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_title_wins() {
        assert_eq!(tab_label("about", Some("О нас")), "О нас");
        assert_eq!(tab_label("about", Some("  Team  ")), "Team");
    }

    #[test]
    fn test_blank_data_title_falls_back_to_key() {
        assert_eq!(tab_label("about", Some("   ")), "About");
        assert_eq!(tab_label("about", None), "About");
    }

    #[test]
    fn test_key_separators() {
        assert_eq!(tab_label("contact_us", None), "Contact us");
        assert_eq!(tab_label("withdraw-history", None), "Withdraw history");
        assert_eq!(tab_label("tasks__list", None), "Tasks list");
    }

    #[test]
    fn test_reload_badge_label() {
        assert_eq!(reload_badge_label(60_000), "⟳ 60 s");
        assert_eq!(reload_badge_label(1_500), "⟳ 1500 ms");
    }

    #[test]
    fn test_unusual_keys() {
        assert_eq!(tab_label("___", None), "___");
        assert_eq!(tab_label("задания", None), "Задания");
    }
}
