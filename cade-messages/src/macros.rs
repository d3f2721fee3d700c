/// Renders a message template, filling `{name}` placeholders from
/// `name = value` pairs.
///
/// ```
/// use cade_messages::{msg, MESSAGES};
///
/// let text = msg!(MESSAGES.down_success, name = "api");
/// assert_eq!(text, "Workspace 'api' removed");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr $(, $name:ident = $value:expr)* $(,)?) => {
        $crate::builder::MessageBuilder::new($template)
            $(.var(stringify!($name), $value))*
            .build()
    };
}
