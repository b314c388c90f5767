//! Keep only the two participants' messages, never bots.
//!
//! Each record gets a [`Verdict`] from [`classify`]. Bot exclusion is checked
//! first, so a bot that happens to carry a whitelisted name is still dropped.
//!
//! # Examples
//!
//! ```
//! use chatsift::config::Participants;
//! use chatsift::filter::apply_filter;
//! use chatsift::parsing::RawMessage;
//!
//! let messages = vec![
//!     RawMessage::new("hi", "Vrunda Mundhra", "Human", "t1"),
//!     RawMessage::new("bot msg", "Bot1", "Bot", "t2"),
//!     RawMessage::new("yo", "Harshiv Gajjar", "Human", "t3"),
//!     RawMessage::new("ignore", "Stranger", "Human", "t4"),
//! ];
//!
//! let filtered = apply_filter(messages, &Participants::default());
//!
//! assert_eq!(filtered.len(), 2);
//! assert!(filtered[0].is_partner);
//! assert_eq!(filtered[1].sender, "Harshiv Gajjar");
//! ```
//!
//! # Behavior Notes
//!
//! - Name and user type comparisons are exact (case-sensitive, untrimmed)
//! - Output order is input order; nothing is sorted or deduplicated

use tracing::debug;

use crate::FilteredMessage;
use crate::config::{BOT_USER_TYPE, Participants};
use crate::parsing::RawMessage;

/// What the filter decided for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Sent by a whitelisted participant.
    Keep,
    /// `user_type` is `"Bot"`.
    Bot,
    /// Human sender outside the whitelist.
    Outsider,
}

/// Decides whether `msg` belongs in the output.
pub fn classify(msg: &RawMessage, participants: &Participants) -> Verdict {
    if msg.user_type == BOT_USER_TYPE {
        Verdict::Bot
    } else if participants.contains(&msg.name) {
        Verdict::Keep
    } else {
        Verdict::Outsider
    }
}

/// Counters gathered while filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Records inspected.
    pub total: usize,
    /// Records written to the output.
    pub kept: usize,
    /// Records dropped as bot messages.
    pub bots: usize,
    /// Records dropped because the sender is not whitelisted.
    pub outsiders: usize,
    /// Kept records sent by the owner.
    pub owner_count: usize,
    /// Kept records sent by the partner.
    pub partner_count: usize,
}

impl FilterStats {
    /// Percentage of records kept (0.0 - 100.0).
    pub fn retention_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.kept as f64 / self.total as f64) * 100.0
    }

    fn record(&mut self, verdict: Verdict, is_partner: bool) {
        self.total += 1;
        match verdict {
            Verdict::Keep => {
                self.kept += 1;
                if is_partner {
                    self.partner_count += 1;
                } else {
                    self.owner_count += 1;
                }
            }
            Verdict::Bot => self.bots += 1,
            Verdict::Outsider => self.outsiders += 1,
        }
    }
}

/// Filters `messages` and projects the survivors into [`FilteredMessage`]s.
pub fn apply_filter(messages: Vec<RawMessage>, participants: &Participants) -> Vec<FilteredMessage> {
    apply_filter_with_stats(messages, participants).0
}

/// Like [`apply_filter`], also returning what was dropped and why.
pub fn apply_filter_with_stats(
    messages: Vec<RawMessage>,
    participants: &Participants,
) -> (Vec<FilteredMessage>, FilterStats) {
    let mut stats = FilterStats::default();
    let mut filtered = Vec::new();

    for msg in messages {
        let verdict = classify(&msg, participants);
        let is_partner = participants.is_partner(&msg.name);
        stats.record(verdict, is_partner);

        if verdict != Verdict::Keep {
            debug!(sender = %msg.name, ?verdict, "skipping message");
            continue;
        }

        filtered.push(FilteredMessage {
            text: msg.text,
            sender: msg.name,
            timestamp: msg.created_date,
            is_partner,
        });
    }

    (filtered, stats)
}
