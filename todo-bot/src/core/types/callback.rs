//! Button payloads. Encoded as `<verb>_<task_id>` with verbs `show`, `complete`, `delete`.

use std::fmt;
use std::str::FromStr;

use crate::core::error::BotError;

/// Decoded button payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Show(String),
    Complete(String),
    Delete(String),
}

impl CallbackAction {
    pub fn task_id(&self) -> &str {
        match self {
            Self::Show(id) | Self::Complete(id) | Self::Delete(id) => id,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::Show(_) => "show",
            Self::Complete(_) => "complete",
            Self::Delete(_) => "delete",
        }
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.verb(), self.task_id())
    }
}

impl FromStr for CallbackAction {
    type Err = BotError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let invalid = || BotError::InvalidCallback(data.to_string());

        let (verb, task_id) = data.split_once('_').ok_or_else(invalid)?;
        if task_id.is_empty() {
            return Err(invalid());
        }

        let task_id = task_id.to_string();
        match verb {
            "show" => Ok(Self::Show(task_id)),
            "complete" => Ok(Self::Complete(task_id)),
            "delete" => Ok(Self::Delete(task_id)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "7f1c2a52-3b8e-4d5e-9a0f-1b2c3d4e5f60";

    #[test]
    fn test_parse_known_verbs() {
        assert_eq!(
            format!("show_{}", ID).parse::<CallbackAction>().unwrap(),
            CallbackAction::Show(ID.to_string())
        );
        assert_eq!(
            format!("complete_{}", ID).parse::<CallbackAction>().unwrap(),
            CallbackAction::Complete(ID.to_string())
        );
        assert_eq!(
            format!("delete_{}", ID).parse::<CallbackAction>().unwrap(),
            CallbackAction::Delete(ID.to_string())
        );
    }

    #[test]
    fn test_display_is_wire_format() {
        let action = CallbackAction::Complete(ID.to_string());
        assert_eq!(action.to_string(), format!("complete_{}", ID));
        assert_eq!(action.to_string().parse::<CallbackAction>().unwrap(), action);
    }

    #[test]
    fn test_task_id_keeps_later_underscores() {
        let action: CallbackAction = "delete_a_b".parse().unwrap();
        assert_eq!(action.task_id(), "a_b");
    }

    #[test]
    fn test_malformed_payloads_are_rejected() {
        for data in ["", "show", "show_", "rename_123", "_123", "complete-123"] {
            let err = data.parse::<CallbackAction>().unwrap_err();
            assert!(
                matches!(err, BotError::InvalidCallback(ref d) if d == data),
                "payload {:?} gave {:?}",
                data,
                err
            );
        }
    }
}
