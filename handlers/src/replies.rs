//! Reply texts sent by the bot. Sent with HTML parse mode, so anything quoted from the user is
//! escaped first.

/// Default echo reply; `{text}` is replaced by the escaped inbound text.
pub const DEFAULT_ECHO_TEMPLATE: &str = "شما گفتید: {text}";

/// Appended to the recorded `/start` text when the mini-app button was attached.
pub const MINIAPP_BUTTON_MARKER: &str = "\n[Mini App Button Added]";

const WELCOME_TEMPLATE: &str = "به بازی حسین ایکس بات ۳ خوش آمدید {first_name}! 👋\n\nمن اینجا هستم تا به شما کمک کنم.\n\nبرای دیدن دستورات از /help استفاده کنید یا مینی اپ را از دکمه زیر باز کنید.";

const MINIAPP_BUTTON_TEXT: &str = "باز کردن مینی اپ حسین ایکس بات";

const HELP_TEXT: &str = "دستورات قابل استفاده:\n\n/start - شروع مجدد ربات\n/help - نمایش این پیام راهنما\n/about - درباره این ربات\n";

const ABOUT_TEXT: &str =
    "🤖 حسین ایکس بات ۳\n\nیک ربات تلگرام ساخته شده با پایتون.\nتوسعه داده شده برای سرگرمی و بازی.";

/// Localized texts for the fixed command set.
#[derive(Debug, Clone)]
pub struct BotReplies {
    pub welcome_template: String,
    pub miniapp_button_text: String,
    pub help: String,
    pub about: String,
    pub echo_template: String,
}

impl Default for BotReplies {
    fn default() -> Self {
        Self {
            welcome_template: WELCOME_TEMPLATE.to_string(),
            miniapp_button_text: MINIAPP_BUTTON_TEXT.to_string(),
            help: HELP_TEXT.to_string(),
            about: ABOUT_TEXT.to_string(),
            echo_template: DEFAULT_ECHO_TEMPLATE.to_string(),
        }
    }
}

impl BotReplies {
    pub fn with_echo_template(mut self, template: impl Into<String>) -> Self {
        self.echo_template = template.into();
        self
    }

    /// Welcome text for `/start`, greeting the user by first name.
    pub fn welcome(&self, first_name: &str) -> String {
        self.welcome_template
            .replace("{first_name}", &escape_html(first_name))
    }

    /// Echo reply quoting `text`.
    pub fn echo(&self, text: &str) -> String {
        self.echo_template.replace("{text}", &escape_html(text))
    }
}

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                _ => escaped.push(ch),
            }
            escaped
        })
}
