//! Notification Message Assembly
//!
//! Builds the plain-text chat message the confirmation view copies to the
//! clipboard: @-mentions for the non-empty recipient slots, one line per
//! ordered item, and the remark.

use crate::model::OrderState;

pub fn build_message(state: &OrderState) -> String {
    let mut lines = Vec::new();

    let mentions: Vec<String> = state
        .notify_recipients
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| format!("@{r}"))
        .collect();
    if !mentions.is_empty() {
        lines.push(mentions.join(" "));
    }

    lines.push("備品の注文です。".to_string());

    let mut has_order = false;
    for item in &state.items {
        let count = state.quantity(&item.name);
        if count == 0 {
            continue;
        }
        has_order = true;
        let mut line = format!("・{}", item.name);
        if let Some(desc) = &item.description {
            line.push_str(&format!("（{desc}）"));
        }
        line.push_str(&format!(" × {count}"));
        if let Some(requester) = &item.requester {
            line.push_str(&format!("｜依頼者: {requester}"));
        }
        lines.push(line);
    }
    if !has_order {
        lines.push("注文アイテムはありません".to_string());
    }

    let remark = state.remark.trim();
    if !remark.is_empty() {
        lines.push(format!("備考: {remark}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn test_message_lists_only_ordered_items() {
        let mut state = OrderState::default();
        state.items = vec![Item::new("ペン"), Item::new("Stapler")];
        state.quantities.insert("ペン".to_string(), 2);
        state.quantities.insert("Stapler".to_string(), 0);
        let message = build_message(&state);
        assert!(message.contains("・ペン × 2"));
        assert!(!message.contains("Stapler"));
    }

    #[test]
    fn test_empty_slots_are_not_mentioned() {
        let mut state = OrderState::default();
        state.notify_recipients[0] = "alice".to_string();
        state.notify_recipients[3] = "  ".to_string();
        state.notify_recipients[6] = "bob".to_string();
        let message = build_message(&state);
        assert!(message.starts_with("@alice @bob\n"));
    }

    #[test]
    fn test_remark_and_requester_attribution() {
        let mut state = OrderState::default();
        state.items = vec![Item {
            name: "ペン".to_string(),
            description: Some("青".to_string()),
            requester: Some("山田".to_string()),
        }];
        state.quantities.insert("ペン".to_string(), 1);
        state.remark = " 至急 ".to_string();
        let message = build_message(&state);
        assert!(message.contains("・ペン（青） × 1｜依頼者: 山田"));
        assert!(message.ends_with("備考: 至急"));
    }

    #[test]
    fn test_empty_order_phrasing() {
        let message = build_message(&OrderState::default());
        assert!(message.contains("注文アイテムはありません"));
    }
}
