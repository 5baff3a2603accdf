use crate::model::{Message, MessageType, OrderId, Payload};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the order's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub date: DateTime<Utc>,
    pub event: MessageType,
}

/// State of one order actor: the merged payload of everything it has seen,
/// plus the stage log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderState {
    #[serde(flatten)]
    pub details: Payload,
    pub stages: Vec<Stage>,
}

impl OrderState {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            details: Payload {
                order_id: Some(order_id),
                ..Payload::default()
            },
            stages: Vec::new(),
        }
    }

    /// Returns the state after observing `msg` at `at`.
    ///
    /// Typed messages append a stage. Stage dates never go backwards, even if
    /// the wall clock does.
    pub fn apply(&self, msg: &Message, at: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.details.merge(&msg.payload);
        if let Some(event) = msg.kind {
            let date = match self.stages.last() {
                Some(last) if last.date > at => last.date,
                _ => at,
            };
            next.stages.push(Stage { date, event });
        }
        next
    }

    /// The event types of the stage log, oldest first.
    pub fn events(&self) -> Vec<MessageType> {
        self.stages.iter().map(|stage| stage.event).collect()
    }

    pub fn is_shipped(&self) -> bool {
        self.stages
            .iter()
            .any(|stage| stage.event == MessageType::BookShippedEvt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use chrono::Duration;

    fn shipped() -> Message {
        Message::new(
            MessageType::BookShippedEvt,
            Payload::order_request("tjerk".into(), Book::new(123, "how to act", "John", 12.3))
                .with_order_id("o-1".into()),
        )
    }

    #[test]
    fn test_apply_appends_stage_and_merges() {
        let now = Utc::now();
        let state = OrderState::new("o-1".into()).apply(&shipped(), now);

        assert_eq!(state.events(), vec![MessageType::BookShippedEvt]);
        assert_eq!(state.stages[0].date, now);
        assert_eq!(state.details.customer_id, Some("tjerk".into()));
        assert!(state.is_shipped());
    }

    #[test]
    fn test_repeated_event_only_grows_the_log() {
        let now = Utc::now();
        let once = OrderState::new("o-1".into()).apply(&shipped(), now);
        let twice = once.apply(&shipped(), now);

        assert_eq!(twice.stages.len(), 2);
        assert_eq!(twice.details, once.details);
    }

    #[test]
    fn test_stage_dates_never_decrease() {
        let now = Utc::now();
        let earlier = now - Duration::seconds(5);
        let state = OrderState::default()
            .apply(&shipped(), now)
            .apply(&shipped(), earlier);
        assert_eq!(state.stages[1].date, now);
    }

    #[test]
    fn test_untyped_message_leaves_no_stage() {
        let state = OrderState::default().apply(&Message::wake(), Utc::now());
        assert!(state.stages.is_empty());
    }

    #[test]
    fn test_serializes_with_flat_payload_fields() {
        let state = OrderState::new("o-1".into()).apply(&shipped(), Utc::now());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["customerId"], "tjerk");
        assert_eq!(json["orderId"], "o-1");
        assert_eq!(json["book"]["isbn"], 123);
        assert_eq!(json["stages"][0]["event"], "BOOK_SHIPPED_EVT");
    }
}
