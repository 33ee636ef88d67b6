//! Classification of inbound text: menu captions, entry commands, lookup tokens.

/// Main menu captions; the reply keyboard sends them back verbatim.
pub const CAPTION_CHECK_TELEGRAM: &str = "🔍 Проверить Telegram";
pub const CAPTION_CHECK_PHONE: &str = "📞 Проверить номер";
pub const CAPTION_HELP: &str = "ℹ️ Помощь";

/// Callback data of the inline "back" button.
pub const BACK_TO_MAIN: &str = "back_to_main";

/// Classified meaning of an inbound text event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowIdentityPrompt,
    ShowPhonePrompt,
    ShowHelp,
    IdentityLookup(String),
    PhoneLookup(String),
    Invalid,
}

impl Intent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::ShowIdentityPrompt => "show_identity_prompt",
            Intent::ShowPhonePrompt => "show_phone_prompt",
            Intent::ShowHelp => "show_help",
            Intent::IdentityLookup(_) => "identity_lookup",
            Intent::PhoneLookup(_) => "phone_lookup",
            Intent::Invalid => "invalid",
        }
    }
}

/// Classifies free text. Checked in order: menu captions, `@` prefix, `+` prefix, else Invalid.
/// Phone format is not validated here.
pub fn classify(text: &str) -> Intent {
    let text = text.trim();
    match text {
        CAPTION_CHECK_TELEGRAM => Intent::ShowIdentityPrompt,
        CAPTION_CHECK_PHONE => Intent::ShowPhonePrompt,
        CAPTION_HELP => Intent::ShowHelp,
        t if t.starts_with('@') => Intent::IdentityLookup(t.to_string()),
        t if t.starts_with('+') => Intent::PhoneLookup(t.to_string()),
        _ => Intent::Invalid,
    }
}

/// Entry commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
}

/// Result of looking at a `/`-prefixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParse {
    /// Not a command; goes to [`classify`].
    NotCommand,
    Known(Command),
    /// A command this bot does not serve; ignored.
    Unknown(String),
}

/// Parses `/start`, `/help` (case-insensitive, optional `@botname` suffix, arguments ignored).
/// A `/` not directly followed by a command name (`/`, `/ hello`) is plain text.
pub fn parse_command(text: &str) -> CommandParse {
    let text = text.trim();
    let Some(rest) = text.strip_prefix('/') else {
        return CommandParse::NotCommand;
    };
    if !rest
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
    {
        return CommandParse::NotCommand;
    }
    let word = rest.split_whitespace().next().unwrap_or("");
    let name = word.split('@').next().unwrap_or("").to_lowercase();
    match name.as_str() {
        "start" => CommandParse::Known(Command::Start),
        "help" => CommandParse::Known(Command::Help),
        _ => CommandParse::Unknown(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captions_map_to_prompts() {
        assert_eq!(classify(CAPTION_CHECK_TELEGRAM), Intent::ShowIdentityPrompt);
        assert_eq!(classify(CAPTION_CHECK_PHONE), Intent::ShowPhonePrompt);
        assert_eq!(classify(CAPTION_HELP), Intent::ShowHelp);
    }

    #[test]
    fn test_captions_are_trimmed() {
        assert_eq!(
            classify(&format!("  {}\n", CAPTION_CHECK_PHONE)),
            Intent::ShowPhonePrompt
        );
    }

    #[test]
    fn test_at_prefix_is_identity_lookup_with_exact_token() {
        assert_eq!(
            classify("@alice"),
            Intent::IdentityLookup("@alice".to_string())
        );
        assert_eq!(
            classify("  @Some_User  "),
            Intent::IdentityLookup("@Some_User".to_string())
        );
        assert_eq!(classify("@"), Intent::IdentityLookup("@".to_string()));
    }

    #[test]
    fn test_plus_prefix_is_phone_lookup_without_validation() {
        assert_eq!(
            classify("+79123456789"),
            Intent::PhoneLookup("+79123456789".to_string())
        );
        assert_eq!(
            classify("+not-a-number"),
            Intent::PhoneLookup("+not-a-number".to_string())
        );
    }

    #[test]
    fn test_everything_else_is_invalid() {
        for text in ["", "   ", "12345", "abc123", "hello @alice", "79123456789", "Помощь"] {
            assert_eq!(classify(text), Intent::Invalid, "text: {:?}", text);
        }
    }

    #[test]
    fn test_caption_prefix_is_not_a_caption() {
        assert_eq!(
            classify(&format!("{} please", CAPTION_HELP)),
            Intent::Invalid
        );
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/start"), CommandParse::Known(Command::Start));
        assert_eq!(parse_command("/HELP"), CommandParse::Known(Command::Help));
        assert_eq!(
            parse_command("/start@checkbot extra"),
            CommandParse::Known(Command::Start)
        );
        assert_eq!(
            parse_command("/settings"),
            CommandParse::Unknown("settings".to_string())
        );
        assert_eq!(parse_command("@alice"), CommandParse::NotCommand);
        assert_eq!(parse_command(CAPTION_HELP), CommandParse::NotCommand);
    }

    /// **Test: a slash without a command name right after it is plain text.**
    #[test]
    fn test_slash_without_name_is_not_command() {
        for text in ["/", "  /  ", "/ hello", "/ +7912", "//start"] {
            assert_eq!(parse_command(text), CommandParse::NotCommand, "text: {:?}", text);
            assert_eq!(classify(text), Intent::Invalid, "text: {:?}", text);
        }
    }
}
