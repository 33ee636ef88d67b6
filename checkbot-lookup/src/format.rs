//! Pure formatting of lookup results and errors into Telegram HTML.
//!
//! Labels are plain text, only the header is bold, and every user-supplied value is escaped.
//! Absent optional fields render [`ABSENT`].

use crate::error::{LookupError, Unavailable};
use crate::model::{ChatProfile, PhoneRecord};

pub const ABSENT: &str = "❌";
pub const PRESENT: &str = "✅";

pub const MSG_INVALID_FORMAT: &str = "❌ Введите корректный username (@user) или ID";
pub const MSG_NOT_FOUND_OR_HIDDEN: &str = "❌ Пользователь не найден или данные скрыты";
pub const MSG_INVALID_NUMBER: &str = "❌ Номер недействителен или API недоступен";
pub const MSG_PHONE_NOT_CONFIGURED: &str = "❌ API ключ для номеров не настроен";
pub const MSG_PHONE_UNAVAILABLE: &str = "❌ Ошибка при проверке номера";

/// Escapes `&`, `<`, `>` and `"` for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_absent(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => escape_html(v),
        _ => ABSENT.to_string(),
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        PRESENT
    } else {
        ABSENT
    }
}

pub fn format_profile(profile: &ChatProfile) -> String {
    let username = match profile.username.as_deref() {
        Some(u) if !u.trim().is_empty() => format!("@{}", escape_html(u.trim_start_matches('@'))),
        _ => ABSENT.to_string(),
    };

    [
        "👤 <b>Информация об аккаунте:</b>".to_string(),
        String::new(),
        format!("🆔 ID: {}", profile.id),
        format!("👁 Имя: {}", or_absent(profile.first_name.as_deref())),
        format!("📌 Фамилия: {}", or_absent(profile.last_name.as_deref())),
        format!("🔗 Username: {}", username),
        format!("🌐 Язык: {}", or_absent(profile.language_code.as_deref())),
        format!("🤖 Бот: {}", flag(profile.is_bot)),
        format!("⭐ Премиум: {}", flag(profile.is_premium)),
    ]
    .join("\n")
}

pub fn format_phone(record: &PhoneRecord) -> String {
    let country_code = match record.country_code.as_deref() {
        Some(c) if !c.trim().is_empty() => format!("+{}", escape_html(c.trim_start_matches('+'))),
        _ => ABSENT.to_string(),
    };

    [
        "📞 <b>Информация о номере:</b>".to_string(),
        String::new(),
        format!("🔢 Номер: {}", or_absent(Some(&record.number))),
        format!("🌍 Страна: {}", or_absent(record.country_name.as_deref())),
        format!("🏢 Оператор: {}", or_absent(record.carrier.as_deref())),
        format!("📟 Тип: {}", or_absent(record.line_type.as_deref())),
        format!("🌐 Код страны: {}", country_code),
        format!("✅ Валидность: {}", if record.valid { "Да" } else { "Нет" }),
    ]
    .join("\n")
}

pub fn format_error(error: &LookupError) -> String {
    match error {
        LookupError::InvalidFormat => MSG_INVALID_FORMAT,
        LookupError::NotFoundOrHidden => MSG_NOT_FOUND_OR_HIDDEN,
        LookupError::InvalidNumber => MSG_INVALID_NUMBER,
        LookupError::ServiceUnavailable(Unavailable::NotConfigured) => MSG_PHONE_NOT_CONFIGURED,
        LookupError::ServiceUnavailable(Unavailable::Transport) => MSG_PHONE_UNAVAILABLE,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> ChatProfile {
        ChatProfile {
            id: 42,
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            username: Some("ann".to_string()),
            language_code: Some("en".to_string()),
            is_bot: false,
            is_premium: true,
            avatar: None,
        }
    }

    fn line<'a>(text: &'a str, label: &str) -> &'a str {
        text.lines()
            .find(|l| l.contains(label))
            .unwrap_or_else(|| panic!("no line with {:?} in {:?}", label, text))
    }

    #[test]
    fn test_full_profile() {
        let text = format_profile(&full_profile());
        assert!(text.contains("🆔 ID: 42"));
        assert!(text.contains("Имя: Ann"));
        assert!(text.contains("Фамилия: Lee"));
        assert!(text.contains("Username: @ann"));
        assert!(text.contains("Язык: en"));
        assert!(text.contains("Бот: ❌"));
        assert!(text.contains("Премиум: ✅"));
    }

    #[test]
    fn test_each_absent_profile_field_renders_placeholder() {
        let cases: [(&str, fn(&mut ChatProfile)); 4] = [
            ("Имя:", |p| p.first_name = None),
            ("Фамилия:", |p| p.last_name = None),
            ("Username:", |p| p.username = None),
            ("Язык:", |p| p.language_code = None),
        ];
        for (label, clear) in cases {
            let mut profile = full_profile();
            clear(&mut profile);
            let text = format_profile(&profile);
            assert_eq!(line(&text, label).split(": ").nth(1), Some(ABSENT), "{}", label);

            // Other fields untouched.
            assert!(text.contains("🆔 ID: 42"));
        }
    }

    #[test]
    fn test_empty_strings_render_placeholder() {
        let profile = ChatProfile {
            id: 1,
            first_name: Some(String::new()),
            username: Some("  ".to_string()),
            ..ChatProfile::default()
        };
        let text = format_profile(&profile);
        assert!(line(&text, "Имя:").ends_with(ABSENT));
        assert!(line(&text, "Username:").ends_with(ABSENT));
    }

    #[test]
    fn test_profile_values_are_escaped() {
        let profile = ChatProfile {
            id: 1,
            first_name: Some("<b>Eve</b> & co".to_string()),
            ..ChatProfile::default()
        };
        let text = format_profile(&profile);
        assert!(text.contains("Имя: &lt;b&gt;Eve&lt;/b&gt; &amp; co"));
    }

    #[test]
    fn test_phone_record() {
        let record = PhoneRecord {
            number: "+79123456789".to_string(),
            valid: true,
            country_name: Some("Russia".to_string()),
            carrier: None,
            line_type: Some("mobile".to_string()),
            country_code: Some("7".to_string()),
        };
        let text = format_phone(&record);
        assert!(text.contains("Номер: +79123456789"));
        assert!(text.contains("Страна: Russia"));
        assert!(text.contains("Оператор: ❌"));
        assert!(text.contains("Тип: mobile"));
        assert!(text.contains("Код страны: +7"));
        assert!(text.contains("Валидность: Да"));
    }

    #[test]
    fn test_phone_country_code_absent_and_prefixed() {
        let mut record = PhoneRecord {
            number: "+1".to_string(),
            valid: false,
            country_name: None,
            carrier: None,
            line_type: None,
            country_code: None,
        };
        assert!(format_phone(&record).contains("Код страны: ❌"));
        assert!(format_phone(&record).contains("Валидность: Нет"));

        record.country_code = Some("+44".to_string());
        assert!(format_phone(&record).contains("Код страны: +44"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(format_error(&LookupError::InvalidFormat), MSG_INVALID_FORMAT);
        assert_eq!(
            format_error(&LookupError::NotFoundOrHidden),
            "❌ Пользователь не найден или данные скрыты"
        );
        assert_eq!(format_error(&LookupError::InvalidNumber), MSG_INVALID_NUMBER);
        assert_eq!(
            format_error(&LookupError::ServiceUnavailable(Unavailable::NotConfigured)),
            MSG_PHONE_NOT_CONFIGURED
        );
        assert_eq!(
            format_error(&LookupError::ServiceUnavailable(Unavailable::Transport)),
            MSG_PHONE_UNAVAILABLE
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
