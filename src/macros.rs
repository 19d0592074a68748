#[macro_export]
macro_rules! keyword_rule {
    (
        name: $name:expr,
        intent: $intent:expr,
        triggers: [ $($trigger:expr),+ $(,)? ],
        reply: $reply:expr
        $(,)?
    ) => {
        $crate::KeywordRule {
            name: $name,
            intent: $intent,
            triggers: &[ $($trigger),+ ],
            reply: $reply,
        }
    };
}
