//! Fixed texts and keyboards of the chat surface.

use checkbot_core::{InlineButton, Markup, Reply};
use checkbot_lookup::intent::{CAPTION_CHECK_PHONE, CAPTION_CHECK_TELEGRAM, CAPTION_HELP};
use checkbot_lookup::BACK_TO_MAIN;

pub const WELCOME: &str = "🔍 <b>Бот для проверки:</b>\n\n\
• Telegram-аккаунтов\n\
• Номеров телефонов\n\n\
Выберите действие:";

pub const HELP: &str = "📌 <b>Инструкция:</b>\n\n\
1. Для проверки <b>Telegram</b> отправьте:\n   \
• @username\n   \
• ID пользователя\n\n\
2. Для проверки <b>номера</b> введите:\n   \
• +79123456789\n\n\
Используется API NumVerify";

pub const CHOOSE_ACTION: &str = "Выберите действие:";
pub const PROMPT_IDENTITY: &str = "Введите @username или ID пользователя:";
pub const PROMPT_PHONE: &str = "Введите номер телефона (+79123456789):";
pub const MSG_INVALID_INPUT: &str = "❌ Некорректный ввод. Нажмите /help";

pub const BACK_LABEL: &str = "🔙 Назад";

/// Main menu reply keyboard: one caption per row.
pub fn main_menu() -> Markup {
    Markup::Keyboard(vec![
        vec![CAPTION_CHECK_TELEGRAM.to_string()],
        vec![CAPTION_CHECK_PHONE.to_string()],
        vec![CAPTION_HELP.to_string()],
    ])
}

/// Inline "back" button attached to lookup answers.
pub fn back_markup() -> Markup {
    Markup::Inline(vec![vec![InlineButton::new(BACK_LABEL, BACK_TO_MAIN)]])
}

pub fn welcome_reply() -> Reply {
    Reply::html(WELCOME).with_markup(main_menu())
}

pub fn help_reply() -> Reply {
    Reply::html(HELP)
}

pub fn choose_action_reply() -> Reply {
    Reply::text(CHOOSE_ACTION).with_markup(main_menu())
}
