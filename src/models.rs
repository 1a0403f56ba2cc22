use serde::{Deserialize, Serialize};

/// Which desk the signed-in user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "atendente")]
    Attendant,
    #[serde(rename = "gerente")]
    Manager,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Attendant => "Atendente",
            Role::Manager => "Gerente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
}

impl CurrentUser {
    pub fn with_role(&self, role: Role) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }
}

/// Visual flavour of a badge. Maps onto the stylesheet classes in `ui::style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Secondary,
    Destructive,
    Warning,
    Success,
    Outline,
}

impl BadgeVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Destructive => "badge-destructive",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    WhatsApp,
    Instagram,
    Facebook,
    Email,
    Phone,
    Website,
}

impl Channel {
    /// Case-insensitive lookup of a channel key. Display labels such as
    /// "E-mail" or "Telefone" are not keys and do not match.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "whatsapp" => Some(Channel::WhatsApp),
            "instagram" => Some(Channel::Instagram),
            "facebook" => Some(Channel::Facebook),
            "email" => Some(Channel::Email),
            "phone" => Some(Channel::Phone),
            "website" => Some(Channel::Website),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Instagram => "Instagram",
            Channel::Facebook => "Facebook",
            Channel::Email => "E-mail",
            Channel::Phone => "Telefone",
            Channel::Website => "Website",
        }
    }

    pub fn icon(self) -> ChannelIcon {
        match self {
            Channel::WhatsApp => ChannelIcon {
                icon_name: "user-available-symbolic",
                css_class: "channel-whatsapp",
            },
            Channel::Instagram => ChannelIcon {
                icon_name: "camera-photo-symbolic",
                css_class: "channel-instagram",
            },
            Channel::Facebook => ChannelIcon {
                icon_name: "system-users-symbolic",
                css_class: "channel-facebook",
            },
            Channel::Email => ChannelIcon {
                icon_name: "mail-unread-symbolic",
                css_class: "channel-email",
            },
            Channel::Phone => ChannelIcon {
                icon_name: "call-start-symbolic",
                css_class: "channel-phone",
            },
            Channel::Website => ChannelIcon::NEUTRAL,
        }
    }
}

/// Icon name plus colour class used wherever a channel is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelIcon {
    pub icon_name: &'static str,
    pub css_class: &'static str,
}

impl ChannelIcon {
    pub const NEUTRAL: ChannelIcon = ChannelIcon {
        icon_name: "user-available-symbolic",
        css_class: "channel-default",
    };

    /// Unknown labels get the neutral icon.
    pub fn for_label(label: &str) -> Self {
        Channel::from_label(label).map_or(Self::NEUTRAL, Channel::icon)
    }
}

/// The demo queue never holds a resolved patient.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    Waiting,
    Active,
    Resolved,
}

impl PatientStatus {
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Waiting => "Aguardando",
            PatientStatus::Active => "Em atendimento",
            PatientStatus::Resolved => "Resolvido",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn variant(self) -> BadgeVariant {
        match self {
            Priority::High => BadgeVariant::Destructive,
            Priority::Medium => BadgeVariant::Warning,
            Priority::Low => BadgeVariant::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub phone: String,
    /// Display label, e.g. "WhatsApp".
    pub last_channel: String,
    pub status: PatientStatus,
    pub priority: Priority,
    /// Free text, e.g. "5 min".
    pub wait_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Patient,
    Attendant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

impl MessageStatus {
    pub fn label(self) -> &'static str {
        match self {
            MessageStatus::Sent => "Enviada",
            MessageStatus::Delivered => "Entregue",
            MessageStatus::Read => "Lida",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    /// Local time as `HH:MM`.
    pub timestamp: String,
    pub channel: Channel,
    pub status: Option<MessageStatus>,
}

/// The demo team only has online and busy attendants.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendantStatus {
    Online,
    Busy,
    Away,
    /// Fallback for anything not reported as one of the above.
    Offline,
}

impl AttendantStatus {
    pub fn label(self) -> &'static str {
        match self {
            AttendantStatus::Online => "Online",
            AttendantStatus::Busy => "Ocupado",
            AttendantStatus::Away => "Ausente",
            AttendantStatus::Offline => "Offline",
        }
    }

    pub fn variant(self) -> BadgeVariant {
        match self {
            AttendantStatus::Online => BadgeVariant::Success,
            AttendantStatus::Busy => BadgeVariant::Warning,
            AttendantStatus::Away | AttendantStatus::Offline => BadgeVariant::Secondary,
        }
    }

    /// Class for the presence dot drawn over the avatar.
    pub fn dot_class(self) -> &'static str {
        match self {
            AttendantStatus::Online => "presence-online",
            AttendantStatus::Busy => "presence-busy",
            AttendantStatus::Away | AttendantStatus::Offline => "presence-idle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendantMetrics {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub status: AttendantStatus,
    pub active_chats: u32,
    pub resolved_today: u32,
    pub avg_response_time: String,
    /// 0.0 to 5.0
    pub rating: f32,
    /// Percent, 0 to 100.
    pub efficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStat {
    pub name: String,
    pub messages: u32,
    pub channel: Channel,
}

impl ChannelStat {
    pub fn icon(&self) -> ChannelIcon {
        self.channel.icon()
    }
}

/// Fixed figures shown on the manager overview cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub avg_response_time: String,
    pub resolution_rate: u8,
    pub resolution_goal: u8,
    pub satisfaction: f32,
    pub review_count: u32,
    pub message_trend: String,
    pub sla_trend: String,
    pub critical_pending: u32,
}

impl DashboardSummary {
    pub fn goal_met(&self) -> bool {
        self.resolution_rate >= self.resolution_goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_lookup_ignores_case() {
        assert_eq!(Channel::from_label("WhatsApp"), Some(Channel::WhatsApp));
        assert_eq!(Channel::from_label("INSTAGRAM"), Some(Channel::Instagram));
        assert_eq!(Channel::from_label("Email"), Some(Channel::Email));
        assert_eq!(Channel::from_label("fax"), None);
    }

    #[test]
    fn display_labels_are_not_channel_keys() {
        assert_eq!(Channel::from_label("E-mail"), None);
        assert_eq!(Channel::from_label("Telefone"), None);
        assert_eq!(ChannelIcon::for_label("E-mail"), ChannelIcon::NEUTRAL);
        assert_eq!(ChannelIcon::for_label("Telefone"), ChannelIcon::NEUTRAL);
        assert_eq!(ChannelIcon::for_label("phone").css_class, "channel-phone");
    }

    #[test]
    fn unknown_channel_label_gets_neutral_icon() {
        assert_eq!(ChannelIcon::for_label("carrier pigeon"), ChannelIcon::NEUTRAL);
        assert_eq!(ChannelIcon::for_label("website"), ChannelIcon::NEUTRAL);
        assert_eq!(
            ChannelIcon::for_label("facebook").css_class,
            "channel-facebook"
        );
    }

    #[test]
    fn attendant_status_tables() {
        assert_eq!(AttendantStatus::Online.label(), "Online");
        assert_eq!(AttendantStatus::Online.variant(), BadgeVariant::Success);
        assert_eq!(AttendantStatus::Busy.label(), "Ocupado");
        assert_eq!(AttendantStatus::Busy.variant(), BadgeVariant::Warning);
        assert_eq!(AttendantStatus::Away.label(), "Ausente");
        assert_eq!(AttendantStatus::Away.variant(), BadgeVariant::Secondary);
        assert_eq!(AttendantStatus::Offline.label(), "Offline");
        assert_eq!(AttendantStatus::Offline.variant(), BadgeVariant::Secondary);
    }

    #[test]
    fn every_status_has_a_label() {
        assert_eq!(PatientStatus::Waiting.label(), "Aguardando");
        assert_eq!(PatientStatus::Active.label(), "Em atendimento");
        assert_eq!(PatientStatus::Resolved.label(), "Resolvido");
        assert_eq!(AttendantStatus::Away.dot_class(), "presence-idle");
        assert_eq!(AttendantStatus::Offline.dot_class(), "presence-idle");
    }

    #[test]
    fn priority_variants() {
        assert_eq!(Priority::High.variant(), BadgeVariant::Destructive);
        assert_eq!(Priority::Medium.variant(), BadgeVariant::Warning);
        assert_eq!(Priority::Low.variant(), BadgeVariant::Secondary);
    }

    #[test]
    fn role_change_keeps_identity() {
        let user = CurrentUser {
            name: "Dr. Ana Silva".into(),
            role: Role::Attendant,
            avatar: Some("ana.png".into()),
        };
        let manager = user.with_role(Role::Manager);
        assert_eq!(manager.role, Role::Manager);
        assert_eq!(manager.name, user.name);
        assert_eq!(manager.avatar, user.avatar);
    }

    #[test]
    fn role_uses_portuguese_keys() {
        #[derive(Deserialize)]
        struct Wrapper {
            role: Role,
        }
        let w: Wrapper = toml::from_str("role = \"gerente\"").unwrap();
        assert_eq!(w.role, Role::Manager);
        assert!(toml::from_str::<Wrapper>("role = \"manager\"").is_err());
    }
}
