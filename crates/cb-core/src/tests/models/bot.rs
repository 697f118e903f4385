use crate::{BotUpdate, CoreError, NewBot};

#[test]
fn test_new_bot_defaults_are_valid() {
    let bot = NewBot::new("Support", "prov-1");
    assert!(bot.validate().is_ok());
    assert_eq!(bot.model, "gpt-3.5-turbo");
}

#[test]
fn test_new_bot_rejects_out_of_range_temperature() {
    let mut bot = NewBot::new("Support", "prov-1");
    bot.temperature = 2.5;

    let err = bot.validate().unwrap_err();

    assert!(matches!(
        err,
        CoreError::Validation {
            field: "temperature",
            ..
        }
    ));
}

#[test]
fn test_new_bot_rejects_zero_max_tokens() {
    let mut bot = NewBot::new("Support", "prov-1");
    bot.max_tokens = Some(0);
    assert!(bot.validate().is_err());
}

#[test]
fn test_new_bot_rejects_blank_name() {
    let bot = NewBot::new("   ", "prov-1");
    assert!(bot.validate().is_err());
}

#[test]
fn test_bot_update_serializes_only_set_fields() {
    let update = BotUpdate {
        temperature: Some(0.2),
        ..Default::default()
    };

    let json = serde_json::to_value(&update).unwrap();

    assert_eq!(json, serde_json::json!({"temperature": 0.2}));
}
