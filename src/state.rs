//! View state containers. The widgets in `ui` own one of these each and
//! re-render from it after every transition.

use crate::models::{Channel, CurrentUser, Message, MessageStatus, Patient, Role, Sender};
use crate::seed;
use chrono::{DateTime, Local};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    ChatQueue,
    Dashboard,
}

#[derive(Debug, Clone)]
pub struct RootState {
    user: CurrentUser,
}

impl RootState {
    pub fn new(user: CurrentUser) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    /// Returns false when `role` was already active.
    pub fn set_role(&mut self, role: Role) -> bool {
        if self.user.role == role {
            return false;
        }
        self.user = self.user.with_role(role);
        true
    }

    pub fn active_view(&self) -> ActiveView {
        match self.user.role {
            Role::Attendant => ActiveView::ChatQueue,
            Role::Manager => ActiveView::Dashboard,
        }
    }
}

/// Outgoing messages are always tagged with this channel.
pub const OUTBOUND_CHANNEL: Channel = Channel::WhatsApp;

pub struct ChatQueue<C = SystemClock> {
    patients: Vec<Patient>,
    selected: usize,
    // One thread shared by every patient in the queue.
    messages: Vec<Message>,
    draft: String,
    clock: C,
    last_id: i64,
}

impl ChatQueue<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ChatQueue<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ChatQueue<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            patients: seed::PATIENTS.clone(),
            selected: 0,
            messages: seed::MESSAGES.clone(),
            draft: String::new(),
            clock,
            last_id: 0,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn selected_patient(&self) -> &Patient {
        &self.patients[self.selected]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Unknown ids leave the selection alone and return false.
    pub fn select_patient(&mut self, id: &str) -> bool {
        match self.patients.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    /// Selects by queue position. Returns true only when the selection moved,
    /// so repeated notifications for the same row are cheap to ignore.
    pub fn select_at(&mut self, index: usize) -> bool {
        if index == self.selected {
            return false;
        }
        match self.patients.get(index).map(|p| p.id.clone()) {
            Some(id) => self.select_patient(&id),
            None => false,
        }
    }

    /// Appends the draft as an attendant message and clears it. Blank drafts
    /// are ignored and left as typed.
    pub fn send(&mut self) -> Option<&Message> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let now = self.clock.now();
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;

        self.messages.push(Message {
            id: id.to_string(),
            content: std::mem::take(&mut self.draft),
            sender: Sender::Attendant,
            timestamp: now.format("%H:%M").to_string(),
            channel: OUTBOUND_CHANNEL,
            status: Some(MessageStatus::Sent),
        });
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct FixedClock(Cell<DateTime<Local>>);

    impl FixedClock {
        fn at(h: u32, m: u32) -> Self {
            Self(Cell::new(Local.with_ymd_and_hms(2026, 10, 19, h, m, 0).unwrap()))
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0.get()
        }
    }

    fn queue() -> ChatQueue<FixedClock> {
        ChatQueue::with_clock(FixedClock::at(9, 5))
    }

    fn user() -> CurrentUser {
        CurrentUser {
            name: "Dr. Ana Silva".into(),
            role: Role::Attendant,
            avatar: None,
        }
    }

    #[test]
    fn role_picks_view() {
        let mut root = RootState::new(user());
        assert_eq!(root.active_view(), ActiveView::ChatQueue);

        assert!(root.set_role(Role::Manager));
        assert_eq!(root.active_view(), ActiveView::Dashboard);
        assert_eq!(root.user().name, "Dr. Ana Silva");

        assert!(!root.set_role(Role::Manager));
        assert_eq!(root.active_view(), ActiveView::Dashboard);

        assert!(root.set_role(Role::Attendant));
        assert_eq!(root.active_view(), ActiveView::ChatQueue);
    }

    #[test]
    fn starts_from_seed() {
        let q = queue();
        assert_eq!(q.selected_patient().name, "Maria Silva");
        assert_eq!(q.messages().len(), seed::MESSAGES.len());
        assert_eq!(q.draft(), "");
    }

    #[test]
    fn blank_draft_is_ignored() {
        let mut q = queue();
        assert!(q.send().is_none());

        q.set_draft("   \t ");
        assert!(q.send().is_none());
        assert_eq!(q.draft(), "   \t ");
        assert_eq!(q.messages(), seed::MESSAGES.as_slice());
    }

    #[test]
    fn send_appends_attendant_message() {
        let mut q = queue();
        q.set_draft("Olá");
        let sent = q.send().cloned().unwrap();

        assert_eq!(sent.content, "Olá");
        assert_eq!(sent.sender, Sender::Attendant);
        assert_eq!(sent.status, Some(MessageStatus::Sent));
        assert_eq!(sent.channel, Channel::WhatsApp);
        assert_eq!(sent.timestamp, "09:05");
        assert_eq!(q.messages().len(), seed::MESSAGES.len() + 1);
        assert_eq!(q.messages().last(), Some(&sent));
        assert_eq!(q.draft(), "");
    }

    #[test]
    fn content_keeps_surrounding_whitespace() {
        let mut q = queue();
        q.set_draft("  bom dia ");
        assert_eq!(q.send().unwrap().content, "  bom dia ");
    }

    #[test]
    fn sends_are_append_only_and_ordered() {
        let mut q = queue();
        for text in ["um", "dois", "três"] {
            q.set_draft(text);
            q.send();
        }

        let (seeded, sent) = q.messages().split_at(seed::MESSAGES.len());
        assert_eq!(seeded, seed::MESSAGES.as_slice());
        let contents: Vec<_> = sent.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["um", "dois", "três"]);
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut q = queue();
        for _ in 0..3 {
            q.set_draft("oi");
            q.send();
        }
        let mut ids: Vec<_> = q.messages().iter().map(|m| m.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), q.messages().len());
    }

    #[test]
    fn timestamp_is_24_hour() {
        let mut q = ChatQueue::with_clock(FixedClock::at(21, 7));
        q.set_draft("boa noite");
        assert_eq!(q.send().unwrap().timestamp, "21:07");
    }

    #[test]
    fn selection_leaves_thread_alone() {
        let mut q = queue();
        q.set_draft("Olá");
        q.send();
        let before = q.messages().to_vec();

        assert!(q.select_patient("2"));
        assert_eq!(q.selected_patient().name, "João Santos");
        assert_eq!(q.selected_patient().last_channel, "Instagram");
        assert_eq!(q.messages(), before.as_slice());
    }

    #[test]
    fn keyboard_and_click_selection_share_one_path() {
        let mut q = queue();
        q.set_draft("rascunho");

        assert!(!q.select_at(0));
        assert!(q.select_at(1));
        assert_eq!(q.selected_patient().name, "João Santos");
        assert!(!q.select_at(1));
        assert!(q.select_at(2));
        assert_eq!(q.selected_patient().phone, "(11) 77777-7777");

        assert!(!q.select_at(7));
        assert_eq!(q.selected_patient().id, "3");
        assert_eq!(q.messages(), seed::MESSAGES.as_slice());
        assert_eq!(q.draft(), "rascunho");
    }

    #[test]
    fn unknown_patient_keeps_selection() {
        let mut q = queue();
        assert!(!q.select_patient("99"));
        assert_eq!(q.selected_patient().id, "1");
    }

    #[test]
    fn outbound_channel_ignores_selected_patient() {
        let mut q = queue();
        q.select_patient("3");
        q.set_draft("Olá Ana");
        assert_eq!(q.send().unwrap().channel, Channel::WhatsApp);
    }
}
